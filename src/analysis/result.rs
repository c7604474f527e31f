//! Analysis result types
//!
//! Every detector and extractor outcome is expressed as an explicit tagged
//! record with a documented, stable serialized shape. Error paths never lose
//! the record: a failed detector yields a well-formed result carrying an
//! `error` string instead of suppressing the rest of the analysis.

use serde::{Deserialize, Serialize};

use super::metadata::{AudioInfo, ImageInfo, VideoInfo};
use crate::error::AnalysisError;

/// Detection technique that produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DetectionMethod {
    /// Least-significant-bit randomness test
    Lsb,
    /// Block DCT coefficient irregularity test
    Dct,
    /// Spectral phase-variance test
    Phase,
    /// Per-frame LSB aggregation over a video
    Frame,
}

impl DetectionMethod {
    /// Human-readable method name for report output
    pub fn name(&self) -> &'static str {
        match self {
            DetectionMethod::Lsb => "LSB (Least Significant Bit)",
            DetectionMethod::Dct => "DCT (Discrete Cosine Transform)",
            DetectionMethod::Phase => "Phase Coding",
            DetectionMethod::Frame => "Frame-based Analysis",
        }
    }
}

/// Per-method diagnostic details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetectionDetails {
    /// Bit-plane randomness statistics
    BitPlane {
        /// Fraction of samples with LSB = 1
        ones_ratio: f64,
        /// Absolute deviation of the ones-ratio from 0.5
        deviation_from_random: f64,
        /// Two-category chi-square statistic
        chi_square: f64,
        /// Number of samples analyzed
        total_samples: usize,
        /// Sample rate in Hz (audio streams only)
        #[serde(skip_serializing_if = "Option::is_none")]
        sample_rate: Option<u32>,
    },

    /// DCT coefficient spread statistics
    Frequency {
        /// Number of full 8×8 blocks transformed
        blocks_analyzed: usize,
        /// Number of nonzero coefficients retained
        ac_coefficients: usize,
        /// Mean of |coefficient|
        mean_abs_coeff: f64,
        /// Population standard deviation of |coefficient|
        std_abs_coeff: f64,
    },

    /// Phase-variance statistics
    Phase {
        /// Standard deviation of consecutive phase differences
        phase_std: f64,
        /// Number of samples fed to the FFT
        samples_analyzed: usize,
    },

    /// Video frame-sweep aggregation
    Frames {
        /// Frames whose LSB test fired
        frames_with_steganography: usize,
        /// Frames the sweep produced a record for
        total_frames_analyzed: usize,
        /// `frames_with_steganography / total_frames_analyzed` (0.0 when
        /// nothing fired or nothing was sampled)
        detection_rate: f64,
    },

    /// No details available (detector failed before producing statistics)
    Unavailable,
}

/// Verdict of one detector over one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Technique that produced this verdict
    pub method: DetectionMethod,

    /// True when the detector's statistic crossed its threshold
    pub detected: bool,

    /// Heuristic confidence in [0, 100]; meaningful only when `detected`
    /// but always well-defined and clamped
    pub confidence: f64,

    /// Per-method diagnostic statistics
    pub details: DetectionDetails,

    /// Failure description when the detector trapped an internal error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DetectionResult {
    /// Well-formed record for a detector that failed internally
    ///
    /// The failure is recorded, not raised: other detectors keep running and
    /// the per-file record is still assembled.
    pub fn failed(method: DetectionMethod, error: &AnalysisError) -> Self {
        Self {
            method,
            detected: false,
            confidence: 0.0,
            details: DetectionDetails::Unavailable,
            error: Some(error.to_string()),
        }
    }
}

/// Extraction bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionDetails {
    /// Number of bits gathered
    pub bits_extracted: usize,

    /// Number of complete bytes decoded from the bit sequence
    pub bytes_extracted: usize,

    /// Channel the bits were read from
    pub channel_used: usize,
}

/// Best-effort payload dump for one extraction method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Technique the dump corresponds to
    pub method: DetectionMethod,

    /// True once any bits were gathered
    pub extracted: bool,

    /// Printable-ASCII preview of the extracted bytes
    pub data: Option<String>,

    /// Raw LSB sequence as '0'/'1' characters
    /// (`binary_data.len() == details.bits_extracted`)
    pub binary_data: String,

    /// Extraction bookkeeping
    pub details: ExtractionDetails,

    /// Failure description when extraction trapped an internal error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExtractionResult {
    /// Well-formed record for an extraction attempt that failed internally
    pub fn failed(method: DetectionMethod, channel: usize, error: &AnalysisError) -> Self {
        Self {
            method,
            extracted: false,
            data: None,
            binary_data: String::new(),
            details: ExtractionDetails {
                bits_extracted: 0,
                bytes_extracted: 0,
                channel_used: channel,
            },
            error: Some(error.to_string()),
        }
    }
}

/// Outcome for one sampled video frame
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FrameResult {
    /// Frame was decoded and tested
    Analyzed {
        /// Index within the sampled sequence (0..K-1)
        frame_number: usize,
        /// LSB test verdict for this frame
        lsb_detected: bool,
        /// LSB confidence for this frame, in [0, 100]
        lsb_confidence: f64,
    },

    /// Frame decode or detection failed; the sweep continued
    Failed {
        /// Index within the sampled sequence (0..K-1)
        frame_number: usize,
        /// Failure description
        error: String,
    },
}

/// Complete analysis record for a still image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageAnalysis {
    /// Image metadata
    pub image_info: ImageInfo,

    /// Bit-plane test verdict
    pub lsb_detection: DetectionResult,

    /// Frequency-domain test verdict
    pub dct_detection: DetectionResult,

    /// Payload dumps, one per extraction method attempted
    pub extractions: Vec<ExtractionResult>,
}

/// Complete analysis record for an audio clip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioAnalysis {
    /// Audio metadata
    pub audio_info: AudioInfo,

    /// Bit-plane test verdict
    pub lsb_detection: DetectionResult,

    /// Phase-coding test verdict
    pub phase_detection: DetectionResult,

    /// Payload dumps, one per extraction method attempted
    pub extractions: Vec<ExtractionResult>,
}

/// Complete analysis record for a video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoAnalysis {
    /// Video metadata
    pub video_info: VideoInfo,

    /// Aggregated verdict over the sampled frames
    pub frame_analysis: DetectionResult,

    /// Per-frame outcomes, in sampling order
    pub frame_results: Vec<FrameResult>,
}

/// Per-file analysis record, tagged by medium
///
/// Directly serializable for the external report/serving layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "medium", rename_all = "snake_case")]
pub enum MediaAnalysis {
    /// Still image analysis
    Image(ImageAnalysis),
    /// Audio clip analysis
    Audio(AudioAnalysis),
    /// Video analysis
    Video(VideoAnalysis),
}

impl From<ImageAnalysis> for MediaAnalysis {
    fn from(analysis: ImageAnalysis) -> Self {
        MediaAnalysis::Image(analysis)
    }
}

impl From<AudioAnalysis> for MediaAnalysis {
    fn from(analysis: AudioAnalysis) -> Self {
        MediaAnalysis::Audio(analysis)
    }
}

impl From<VideoAnalysis> for MediaAnalysis {
    fn from(analysis: VideoAnalysis) -> Self {
        MediaAnalysis::Video(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        assert_eq!(DetectionMethod::Lsb.name(), "LSB (Least Significant Bit)");
        assert_eq!(
            DetectionMethod::Dct.name(),
            "DCT (Discrete Cosine Transform)"
        );
        assert_eq!(DetectionMethod::Phase.name(), "Phase Coding");
        assert_eq!(DetectionMethod::Frame.name(), "Frame-based Analysis");
    }

    #[test]
    fn test_failed_record_is_well_formed() {
        let err = AnalysisError::InvalidInput("empty sample stream".to_string());
        let result = DetectionResult::failed(DetectionMethod::Lsb, &err);

        assert!(!result.detected);
        assert_eq!(result.confidence, 0.0);
        assert!(matches!(result.details, DetectionDetails::Unavailable));
        assert_eq!(
            result.error.as_deref(),
            Some("Invalid input: empty sample stream")
        );
    }

    #[test]
    fn test_detection_result_serialized_shape() {
        let result = DetectionResult {
            method: DetectionMethod::Lsb,
            detected: true,
            confidence: 80.0,
            details: DetectionDetails::BitPlane {
                ones_ratio: 0.9,
                deviation_from_random: 0.4,
                chi_square: 640.0,
                total_samples: 1000,
                sample_rate: None,
            },
            error: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["method"], "LSB");
        assert_eq!(json["detected"], true);
        assert_eq!(json["details"]["kind"], "bit_plane");
        assert_eq!(json["details"]["total_samples"], 1000);
        // Absent optionals are omitted, not null
        assert!(json.get("error").is_none());
        assert!(json["details"].get("sample_rate").is_none());
    }

    #[test]
    fn test_frame_result_serialized_shape() {
        let ok = FrameResult::Analyzed {
            frame_number: 2,
            lsb_detected: true,
            lsb_confidence: 55.0,
        };
        let failed = FrameResult::Failed {
            frame_number: 3,
            error: "Decode error: truncated frame".to_string(),
        };

        let ok_json = serde_json::to_value(&ok).unwrap();
        assert_eq!(ok_json["status"], "analyzed");
        assert_eq!(ok_json["frame_number"], 2);

        let failed_json = serde_json::to_value(&failed).unwrap();
        assert_eq!(failed_json["status"], "failed");
        assert_eq!(failed_json["error"], "Decode error: truncated frame");
    }
}
