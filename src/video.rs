//! Video frame sampling and aggregation
//!
//! A video is screened by treating a bounded sample of its frames as
//! standalone images and running the bit-plane detector on each. Frames are
//! sampled at a fixed stride across the whole sequence, so short and long
//! videos cost roughly the same.
//!
//! Failure isolation mirrors the per-detector policy: a frame that fails to
//! decode or analyze produces a `FrameResult::Failed` entry and the sweep
//! continues.

use crate::analysis::result::{
    DetectionDetails, DetectionMethod, DetectionResult, FrameResult,
};
use crate::config::AnalysisConfig;
use crate::detectors::bit_plane::detect_bit_plane;
use crate::io::provider::{FrameSource, VideoMetadata};

/// Frame sampler and per-frame LSB aggregator
///
/// Owns the frame source for the duration of one analysis; the source is
/// released when the analyzer is dropped. Holds the bit-plane configuration
/// it delegates to, so per-frame detection matches standalone image
/// analysis exactly.
pub struct VideoAnalyzer<S: FrameSource> {
    source: S,
    config: AnalysisConfig,
}

impl<S: FrameSource> VideoAnalyzer<S> {
    /// Take ownership of a frame source for one analysis pass
    pub fn new(source: S, config: AnalysisConfig) -> Self {
        Self { source, config }
    }

    /// Stream metadata reported by the underlying source
    pub fn metadata(&self) -> VideoMetadata {
        self.source.metadata()
    }

    /// Index step that spreads `requested` samples across `frame_count`
    /// frames; never zero.
    fn stride(frame_count: usize, requested: usize) -> usize {
        (frame_count / requested.max(1)).max(1)
    }

    /// Sample frames at a fixed stride and aggregate their LSB verdicts
    ///
    /// Seeks `0, stride, 2*stride, …`, stopping once the requested number of
    /// frames has been collected or the source is exhausted. No seek index
    /// ever reaches the reported frame count, and the sweep never produces
    /// more records than requested.
    pub fn sweep(&mut self) -> (DetectionResult, Vec<FrameResult>) {
        let meta = self.source.metadata();
        let requested = self.config.video_frame_samples;
        let stride = Self::stride(meta.frame_count, requested);

        log::debug!(
            "Frame sweep: {} frames total, sampling up to {} at stride {}",
            meta.frame_count,
            requested,
            stride
        );

        let mut frame_results = Vec::new();
        let mut index = 0usize;

        while index < meta.frame_count && frame_results.len() < requested {
            let frame_number = frame_results.len();
            match self.source.read_frame(index) {
                Ok(Some(frame)) => {
                    match detect_bit_plane(&frame.pixels, &self.config.image_lsb) {
                        Ok(analysis) => frame_results.push(FrameResult::Analyzed {
                            frame_number,
                            lsb_detected: analysis.detected,
                            lsb_confidence: analysis.confidence,
                        }),
                        Err(e) => frame_results.push(FrameResult::Failed {
                            frame_number,
                            error: e.to_string(),
                        }),
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    log::warn!("Frame {} (index {}) failed to decode: {}", frame_number, index, e);
                    frame_results.push(FrameResult::Failed {
                        frame_number,
                        error: e.to_string(),
                    });
                }
            }
            index += stride;
        }

        (aggregate(&frame_results), frame_results)
    }
}

/// Combine per-frame verdicts into one detection record
///
/// The sweep fires when any frame fired; confidence is the mean over the
/// detected frames only, so clean frames dilute the rate but not the score.
fn aggregate(frame_results: &[FrameResult]) -> DetectionResult {
    let detected_confidences: Vec<f64> = frame_results
        .iter()
        .filter_map(|f| match f {
            FrameResult::Analyzed {
                lsb_detected: true,
                lsb_confidence,
                ..
            } => Some(*lsb_confidence),
            _ => None,
        })
        .collect();

    let total = frame_results.len();
    let detections = detected_confidences.len();
    let detected = detections > 0;

    let confidence = if detected {
        detected_confidences.iter().sum::<f64>() / detections as f64
    } else {
        0.0
    };
    let detection_rate = if total > 0 {
        detections as f64 / total as f64
    } else {
        0.0
    };

    log::debug!(
        "Frame sweep aggregate: {}/{} frames fired, confidence={:.1}",
        detections,
        total,
        confidence
    );

    DetectionResult {
        method: DetectionMethod::Frame,
        detected,
        confidence: confidence.clamp(0.0, 100.0),
        details: DetectionDetails::Frames {
            frames_with_steganography: detections,
            total_frames_analyzed: total,
            detection_rate,
        },
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use crate::io::provider::DecodedImage;

    /// In-memory frame source that records every seek index
    struct MockSource {
        meta: VideoMetadata,
        frames: Vec<Result<Option<DecodedImage>, AnalysisError>>,
        seeks: Vec<usize>,
    }

    impl MockSource {
        fn new(frames: Vec<Result<Option<DecodedImage>, AnalysisError>>, fps: f64) -> Self {
            let meta = VideoMetadata {
                frame_count: frames.len(),
                fps,
                width: 8,
                height: 8,
            };
            Self {
                meta,
                frames,
                seeks: Vec::new(),
            }
        }
    }

    impl FrameSource for MockSource {
        fn metadata(&self) -> VideoMetadata {
            self.meta
        }

        fn read_frame(
            &mut self,
            index: usize,
        ) -> Result<Option<DecodedImage>, AnalysisError> {
            self.seeks.push(index);
            match self.frames.get(index) {
                Some(frame) => frame.clone(),
                None => Ok(None),
            }
        }
    }

    fn frame_with_lsb(bit: u8) -> DecodedImage {
        DecodedImage {
            pixels: vec![0xFE | bit; 8 * 8 * 3],
            width: 8,
            height: 8,
            channels: 3,
            format: "RAW".to_string(),
        }
    }

    #[test]
    fn test_fewer_frames_than_requested() {
        // F = 3, K = 10: stride must clamp to 1 and at most 3 frames appear
        let frames = vec![
            Ok(Some(frame_with_lsb(0))),
            Ok(Some(frame_with_lsb(0))),
            Ok(Some(frame_with_lsb(0))),
        ];
        let mut analyzer = VideoAnalyzer::new(MockSource::new(frames, 25.0), AnalysisConfig::default());

        let (result, frame_results) = analyzer.sweep();

        assert_eq!(frame_results.len(), 3);
        assert!(analyzer.source.seeks.iter().all(|&i| i < 3));
        assert_eq!(analyzer.source.seeks, vec![0, 1, 2]);
        assert!(matches!(
            result.details,
            DetectionDetails::Frames {
                total_frames_analyzed: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_stride_spreads_across_long_video() {
        // F = 100, K = 10: stride 10, seeks 0, 10, ..., 90
        let frames: Vec<_> = (0..100).map(|_| Ok(Some(frame_with_lsb(0)))).collect();
        let mut analyzer = VideoAnalyzer::new(MockSource::new(frames, 30.0), AnalysisConfig::default());

        let (_, frame_results) = analyzer.sweep();

        assert_eq!(frame_results.len(), 10);
        assert_eq!(
            analyzer.source.seeks,
            vec![0, 10, 20, 30, 40, 50, 60, 70, 80, 90]
        );
    }

    #[test]
    fn test_stride_never_zero() {
        assert_eq!(VideoAnalyzer::<MockSource>::stride(0, 10), 1);
        assert_eq!(VideoAnalyzer::<MockSource>::stride(5, 10), 1);
        assert_eq!(VideoAnalyzer::<MockSource>::stride(100, 10), 10);
        assert_eq!(VideoAnalyzer::<MockSource>::stride(100, 0), 100);
    }

    #[test]
    fn test_empty_video_yields_no_frames() {
        let mut analyzer =
            VideoAnalyzer::new(MockSource::new(vec![], 25.0), AnalysisConfig::default());
        let (result, frame_results) = analyzer.sweep();

        assert!(frame_results.is_empty());
        assert!(!result.detected);
        assert!(matches!(
            result.details,
            DetectionDetails::Frames {
                frames_with_steganography: 0,
                total_frames_analyzed: 0,
                ..
            }
        ));
    }

    #[test]
    fn test_biased_frames_detected_and_averaged() {
        // Two frames with a flat LSB plane (confidence 100), one balanced
        let balanced = DecodedImage {
            pixels: (0..8 * 8 * 3).map(|i| (i % 2) as u8).collect(),
            width: 8,
            height: 8,
            channels: 3,
            format: "RAW".to_string(),
        };
        let frames = vec![
            Ok(Some(frame_with_lsb(1))),
            Ok(Some(balanced)),
            Ok(Some(frame_with_lsb(1))),
        ];
        let mut analyzer = VideoAnalyzer::new(MockSource::new(frames, 25.0), AnalysisConfig::default());

        let (result, frame_results) = analyzer.sweep();

        assert!(result.detected);
        assert_eq!(result.confidence, 100.0);
        match result.details {
            DetectionDetails::Frames {
                frames_with_steganography,
                total_frames_analyzed,
                detection_rate,
            } => {
                assert_eq!(frames_with_steganography, 2);
                assert_eq!(total_frames_analyzed, 3);
                assert!((detection_rate - 2.0 / 3.0).abs() < 1e-12);
            }
            _ => panic!("expected frame details"),
        }
        assert_eq!(frame_results.len(), 3);
    }

    #[test]
    fn test_frame_failure_isolated() {
        let frames = vec![
            Ok(Some(frame_with_lsb(1))),
            Err(AnalysisError::DecodeError("truncated frame".to_string())),
            Ok(Some(frame_with_lsb(1))),
        ];
        let mut analyzer = VideoAnalyzer::new(MockSource::new(frames, 25.0), AnalysisConfig::default());

        let (result, frame_results) = analyzer.sweep();

        assert_eq!(frame_results.len(), 3);
        assert!(matches!(
            frame_results[1],
            FrameResult::Failed { frame_number: 1, .. }
        ));
        // The sweep continued past the failure and still aggregated
        assert!(result.detected);
        match result.details {
            DetectionDetails::Frames {
                frames_with_steganography,
                total_frames_analyzed,
                ..
            } => {
                assert_eq!(frames_with_steganography, 2);
                assert_eq!(total_frames_analyzed, 3);
            }
            _ => panic!("expected frame details"),
        }
    }

    #[test]
    fn test_exhausted_source_stops_sweep() {
        // Source claims 10 frames but runs out after 2
        let frames = vec![Ok(Some(frame_with_lsb(0))), Ok(Some(frame_with_lsb(0)))];
        let mut source = MockSource::new(frames, 25.0);
        source.meta.frame_count = 10;
        let mut analyzer = VideoAnalyzer::new(source, AnalysisConfig::default());

        let (_, frame_results) = analyzer.sweep();
        assert_eq!(frame_results.len(), 2);
    }

    #[test]
    fn test_clean_frames_not_detected() {
        let frames: Vec<_> = (0..5)
            .map(|_| {
                Ok(Some(DecodedImage {
                    pixels: (0..8 * 8 * 3).map(|i| (i % 2) as u8).collect(),
                    width: 8,
                    height: 8,
                    channels: 3,
                    format: "RAW".to_string(),
                }))
            })
            .collect();
        let mut analyzer = VideoAnalyzer::new(MockSource::new(frames, 25.0), AnalysisConfig::default());

        let (result, _) = analyzer.sweep();
        assert!(!result.detected);
        assert_eq!(result.confidence, 0.0);
        match result.details {
            DetectionDetails::Frames { detection_rate, .. } => {
                assert_eq!(detection_rate, 0.0)
            }
            _ => panic!("expected frame details"),
        }
    }
}
