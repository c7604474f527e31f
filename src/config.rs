//! Configuration parameters for media steganalysis
//!
//! Every detection threshold and scaling constant is exposed here. The
//! defaults are empirically chosen and intentionally differ between media
//! types; they are detection heuristics, not calibrated statistics.

/// Threshold set for the bit-plane (LSB) randomness test
///
/// The test fires when either the ones-ratio deviation or the chi-square
/// statistic exceeds its threshold.
#[derive(Debug, Clone, Copy)]
pub struct BitPlaneThresholds {
    /// Deviation of the LSB ones-ratio from 0.5 above which detection fires
    pub deviation_threshold: f64,

    /// Two-category chi-square statistic above which detection fires
    pub chi_square_threshold: f64,

    /// Multiplier applied to the deviation when deriving the confidence score
    pub confidence_scale: f64,
}

impl BitPlaneThresholds {
    /// Default thresholds for image pixel data
    pub fn image() -> Self {
        Self {
            deviation_threshold: 0.10,
            chi_square_threshold: 100.0,
            confidence_scale: 2.0,
        }
    }

    /// Default thresholds for PCM audio samples
    ///
    /// Audio embedding tends to be sparser per sample, so the audio defaults
    /// are more sensitive than the image defaults.
    pub fn audio() -> Self {
        Self {
            deviation_threshold: 0.08,
            chi_square_threshold: 50.0,
            confidence_scale: 2.5,
        }
    }
}

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// LSB thresholds applied to image pixels and video frames
    /// (default: deviation 0.10, chi-square 100, scale 2.0)
    pub image_lsb: BitPlaneThresholds,

    /// LSB thresholds applied to audio samples
    /// (default: deviation 0.08, chi-square 50, scale 2.5)
    pub audio_lsb: BitPlaneThresholds,

    /// DCT detection fires when std(|coeff|) exceeds this fraction of
    /// mean(|coeff|) (default: 0.5)
    pub dct_spread_ratio: f64,

    /// Phase-difference standard deviation above which phase-coding
    /// detection fires (default: 0.5)
    pub phase_std_threshold: f64,

    /// Maximum number of leading samples fed to the phase FFT (default: 8192)
    pub phase_window: usize,

    /// Number of frames sampled per video sweep (default: 10)
    pub video_frame_samples: usize,

    /// Bit budget for payload extraction (default: 1000)
    pub extract_bits: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            image_lsb: BitPlaneThresholds::image(),
            audio_lsb: BitPlaneThresholds::audio(),
            dct_spread_ratio: 0.5,
            phase_std_threshold: 0.5,
            phase_window: 8192,
            video_frame_samples: 10,
            extract_bits: 1000,
        }
    }
}
