//! Frequency-domain (DCT) irregularity detector
//!
//! JPEG-style embedding perturbs quantized transform coefficients, widening
//! the spread of their magnitudes relative to the mean.
//!
//! Algorithm:
//! 1. Convert the pixel array to single-channel luminance
//! 2. Partition into disjoint 8×8 blocks, dropping remainder rows/columns
//! 3. Apply the forward DCT-II to each block and flatten all coefficients
//! 4. Drop exact-zero entries, then compare std(|coeff|) to mean(|coeff|)
//!
//! Dropping exact zeros approximates removing the no-signal component, but it
//! also discards legitimate zero AC coefficients; the coefficient count in
//! the details reflects what was actually analyzed.

use crate::dsp::dct::{forward_dct_8x8, BLOCK_SIZE};
use crate::dsp::luminance::to_luminance;
use crate::error::AnalysisError;
use crate::io::provider::DecodedImage;

/// Outcome of the DCT coefficient spread test
#[derive(Debug, Clone, Copy)]
pub struct FrequencyAnalysis {
    /// True when the coefficient spread exceeded the configured ratio
    pub detected: bool,

    /// Heuristic confidence in [0, 100]
    pub confidence: f64,

    /// Number of full 8×8 blocks transformed
    pub blocks_analyzed: usize,

    /// Number of nonzero coefficients retained for the statistics
    pub ac_coefficients: usize,

    /// Mean of |coefficient| over the retained set
    pub mean_abs: f64,

    /// Population standard deviation of |coefficient| over the retained set
    pub std_abs: f64,
}

/// Run the DCT coefficient spread test over a decoded image
///
/// `spread_ratio` is the detection ratio: the test fires when
/// `std_abs > spread_ratio * mean_abs` (default 0.5).
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` when fewer than one full 8×8 block
/// fits the image or the pixel buffer does not match the reported geometry,
/// and propagates luminance-conversion failures for unsupported channel
/// layouts.
pub fn detect_frequency(
    image: &DecodedImage,
    spread_ratio: f64,
) -> Result<FrequencyAnalysis, AnalysisError> {
    if image.pixels.len() < image.width * image.height * image.channels {
        return Err(AnalysisError::InvalidInput(format!(
            "pixel buffer holds {} bytes, geometry {}x{}x{} needs {}",
            image.pixels.len(),
            image.width,
            image.height,
            image.channels,
            image.width * image.height * image.channels
        )));
    }

    let blocks_x = image.width / BLOCK_SIZE;
    let blocks_y = image.height / BLOCK_SIZE;
    if blocks_x == 0 || blocks_y == 0 {
        return Err(AnalysisError::InvalidInput(format!(
            "image {}x{} is smaller than one {}x{} block",
            image.width, image.height, BLOCK_SIZE, BLOCK_SIZE
        )));
    }

    let gray = to_luminance(&image.pixels, image.channels)?;

    let blocks_analyzed = blocks_x * blocks_y;
    let mut abs_coeffs: Vec<f64> = Vec::with_capacity(blocks_analyzed * BLOCK_SIZE * BLOCK_SIZE);

    for by in 0..blocks_y {
        for bx in 0..blocks_x {
            let mut block = [0.0f64; BLOCK_SIZE * BLOCK_SIZE];
            for i in 0..BLOCK_SIZE {
                let row = (by * BLOCK_SIZE + i) * image.width + bx * BLOCK_SIZE;
                for j in 0..BLOCK_SIZE {
                    block[i * BLOCK_SIZE + j] = gray[row + j] as f64;
                }
            }
            abs_coeffs.extend(
                forward_dct_8x8(&block)
                    .iter()
                    .filter(|&&c| c != 0.0)
                    .map(|c| c.abs()),
            );
        }
    }

    if abs_coeffs.is_empty() {
        // Every coefficient was exactly zero (flat black image): nothing to
        // measure, report a not-detected result.
        log::debug!(
            "DCT test: {} blocks, no nonzero coefficients, not detected",
            blocks_analyzed
        );
        return Ok(FrequencyAnalysis {
            detected: false,
            confidence: 0.0,
            blocks_analyzed,
            ac_coefficients: 0,
            mean_abs: 0.0,
            std_abs: 0.0,
        });
    }

    let count = abs_coeffs.len() as f64;
    let mean_abs = abs_coeffs.iter().sum::<f64>() / count;
    let variance = abs_coeffs
        .iter()
        .map(|c| (c - mean_abs).powi(2))
        .sum::<f64>()
        / count;
    let std_abs = variance.sqrt();

    // Retained coefficients are nonzero, so mean_abs > 0 here; the guard
    // keeps the division explicit for future coefficient filters.
    let (detected, confidence) = if mean_abs == 0.0 {
        (false, 0.0)
    } else {
        (
            std_abs > spread_ratio * mean_abs,
            (std_abs / mean_abs).min(1.0) * 50.0,
        )
    };

    log::debug!(
        "DCT test: {} blocks, {} coefficients, mean_abs={:.3}, std_abs={:.3}, detected={}",
        blocks_analyzed,
        abs_coeffs.len(),
        mean_abs,
        std_abs,
        detected
    );

    Ok(FrequencyAnalysis {
        detected,
        confidence,
        blocks_analyzed,
        ac_coefficients: abs_coeffs.len(),
        mean_abs,
        std_abs,
    })
}
