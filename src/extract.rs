//! Bounded LSB payload extraction
//!
//! Reconstructs a best-effort dump of a suspected payload from the least
//! significant bits of one sample channel. The dump is raw: no terminator
//! search, no payload validation, no decryption. Bytes outside the printable
//! ASCII range render as `.` in the text preview.

use crate::error::AnalysisError;
use crate::io::sample_buffer::{channel_samples, Sample};

/// Placeholder for bytes outside the printable ASCII range
const NON_PRINTABLE: char = '.';

/// Raw payload dump produced by [`extract_lsb_payload`]
#[derive(Debug, Clone)]
pub struct PayloadDump {
    /// LSB sequence as a string of '0'/'1' characters
    ///
    /// Invariant: `binary_data.len() == bits_extracted`.
    pub binary_data: String,

    /// Printable-ASCII preview of the extracted bytes
    pub text: String,

    /// Number of bits gathered (bounded by the budget and the channel length)
    pub bits_extracted: usize,

    /// Number of complete 8-bit groups; a trailing partial group is
    /// silently truncated
    pub bytes_extracted: usize,

    /// Channel the bits were read from
    pub channel_used: usize,
}

/// Extract up to `num_bits` least significant bits from one channel
///
/// For single-channel media the whole stream is read; otherwise `channel`
/// selects one interleaved channel. Bits are packed most-significant-first
/// into bytes, matching the usual text-embedding order.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` when the selected channel holds no
/// samples (empty stream or out-of-range channel index).
pub fn extract_lsb_payload<T: Sample>(
    samples: &[T],
    channels: usize,
    channel: usize,
    num_bits: usize,
) -> Result<PayloadDump, AnalysisError> {
    let channel_data = if channels <= 1 {
        samples.to_vec()
    } else {
        channel_samples(samples, channels, channel)
    };

    if channel_data.is_empty() {
        return Err(AnalysisError::InvalidInput(format!(
            "no samples in channel {} of {}-channel stream",
            channel, channels
        )));
    }

    let mut binary_data = String::with_capacity(num_bits.min(channel_data.len()));
    for sample in channel_data.iter().take(num_bits) {
        binary_data.push(if sample.lsb() == 1 { '1' } else { '0' });
    }

    let mut text = String::with_capacity(binary_data.len() / 8);
    for chunk in binary_data.as_bytes().chunks_exact(8) {
        let mut value = 0u8;
        for &bit in chunk {
            value = (value << 1) | (bit - b'0');
        }
        text.push(if (32..127).contains(&value) {
            value as char
        } else {
            NON_PRINTABLE
        });
    }

    log::debug!(
        "LSB extraction: {} bits from channel {}, {} bytes decoded",
        binary_data.len(),
        channel,
        binary_data.len() / 8
    );

    Ok(PayloadDump {
        bits_extracted: binary_data.len(),
        bytes_extracted: binary_data.len() / 8,
        binary_data,
        text,
        channel_used: channel,
    })
}
