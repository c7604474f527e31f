//! Bit-plane (LSB) randomness detector
//!
//! LSB embedding replaces the lowest bit plane of a cover with payload bits,
//! which disturbs the near-uniform bit distribution of natural media.
//!
//! Algorithm:
//! 1. Extract the least significant bit of every sample
//! 2. Compute `ones_ratio = mean(bits)` and `deviation = |ones_ratio - 0.5|`
//! 3. Compute the two-category chi-square statistic against a uniform split
//! 4. Fire when either statistic exceeds its threshold
//!
//! The detector is generic over [`Sample`], so the image (`u8`) and audio
//! (`i16`) paths share one implementation and differ only in thresholds.

use crate::config::BitPlaneThresholds;
use crate::error::AnalysisError;
use crate::io::sample_buffer::Sample;

/// Outcome of the bit-plane randomness test
///
/// Raw statistics plus the verdict; the orchestration layer wraps this into a
/// medium-specific detection record.
#[derive(Debug, Clone, Copy)]
pub struct BitPlaneAnalysis {
    /// True when a statistic exceeded its threshold
    pub detected: bool,

    /// Heuristic confidence in [0, 100]
    pub confidence: f64,

    /// Fraction of samples with LSB = 1
    pub ones_ratio: f64,

    /// Absolute deviation of `ones_ratio` from 0.5
    pub deviation: f64,

    /// Two-category chi-square statistic against the uniform split
    pub chi_square: f64,

    /// Number of samples analyzed
    pub total_samples: usize,
}

/// Run the LSB randomness test over a flattened sample stream
///
/// `samples` is the full interleaved stream (all channels); per-channel
/// selection is an extraction concern, not a detection concern.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for an empty stream; the statistics
/// are undefined there and the division guards stay explicit.
pub fn detect_bit_plane<T: Sample>(
    samples: &[T],
    thresholds: &BitPlaneThresholds,
) -> Result<BitPlaneAnalysis, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "empty sample stream".to_string(),
        ));
    }

    let total = samples.len();
    let ones = samples.iter().filter(|s| s.lsb() == 1).count();
    let zeros = total - ones;

    let ones_ratio = ones as f64 / total as f64;
    let deviation = (ones_ratio - 0.5).abs();

    // Chi-square against the expected 50/50 split over the two bit categories
    let expected = total as f64 / 2.0;
    let chi_square = (zeros as f64 - expected).powi(2) / expected
        + (ones as f64 - expected).powi(2) / expected;

    let detected = deviation > thresholds.deviation_threshold
        || chi_square > thresholds.chi_square_threshold;
    let confidence = (deviation * thresholds.confidence_scale).min(1.0) * 100.0;

    log::debug!(
        "Bit-plane test: {} samples, ones_ratio={:.4}, deviation={:.4}, chi2={:.2}, detected={}",
        total,
        ones_ratio,
        deviation,
        chi_square,
        detected
    );

    Ok(BitPlaneAnalysis {
        detected,
        confidence,
        ones_ratio,
        deviation,
        chi_square,
        total_samples: total,
    })
}
