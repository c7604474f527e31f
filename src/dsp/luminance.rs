//! Interleaved RGB to single-channel luminance conversion

use crate::error::AnalysisError;

/// Convert channel-interleaved pixel data to a single luminance channel
///
/// Uses the ITU-R BT.601 weights (`Y = 0.299 R + 0.587 G + 0.114 B`), rounded
/// to the nearest 8-bit value. Grayscale input (1 channel) is passed through;
/// a fourth (alpha) channel is ignored.
///
/// # Errors
///
/// Returns `AnalysisError::UnsupportedFormat` for channel counts the
/// conversion cannot interpret (0 or 2 channels), and
/// `AnalysisError::InvalidInput` when the pixel buffer is not a whole number
/// of `channels`-sized groups.
pub fn to_luminance(pixels: &[u8], channels: usize) -> Result<Vec<u8>, AnalysisError> {
    match channels {
        1 => Ok(pixels.to_vec()),
        3 | 4 => {
            if pixels.len() % channels != 0 {
                return Err(AnalysisError::InvalidInput(format!(
                    "pixel buffer length {} is not a multiple of {} channels",
                    pixels.len(),
                    channels
                )));
            }
            Ok(pixels
                .chunks_exact(channels)
                .map(|px| {
                    let y = 0.299 * px[0] as f64 + 0.587 * px[1] as f64 + 0.114 * px[2] as f64;
                    y.round().min(255.0) as u8
                })
                .collect())
        }
        n => Err(AnalysisError::UnsupportedFormat(format!(
            "cannot convert {}-channel pixel data to luminance",
            n
        ))),
    }
}
