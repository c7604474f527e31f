//! Decode-provider boundary types
//!
//! An external decode provider hands the engine fully decoded pixel/sample
//! arrays plus metadata; for video it also hands a random-access frame
//! reader. Provider failures (unreadable file, unsupported codec, corrupt
//! stream) surface as [`AnalysisError::DecodeError`] and are fatal for that
//! file: the engine never retries or recovers a broken decode.

use crate::error::AnalysisError;

/// A fully decoded still image or video frame
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// Channel-interleaved pixel data, 8 bits per channel, row-major
    /// (RGBRGB… for 3-channel images)
    pub pixels: Vec<u8>,

    /// Width in pixels
    pub width: usize,

    /// Height in pixels
    pub height: usize,

    /// Number of color channels (1 = grayscale, 3 = RGB, 4 = RGBA)
    pub channels: usize,

    /// Container/codec tag reported by the provider (e.g. "PNG")
    pub format: String,
}

/// A fully decoded audio clip
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Channel-interleaved signed 16-bit PCM samples (LRLR… for stereo)
    pub samples: Vec<i16>,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of audio channels
    pub channels: usize,

    /// Clip duration in seconds
    pub duration_seconds: f64,

    /// Container/codec tag reported by the provider (e.g. "WAV")
    pub format: String,
}

/// Video stream metadata reported by the decode provider
#[derive(Debug, Clone, Copy)]
pub struct VideoMetadata {
    /// Total number of frames in the stream
    pub frame_count: usize,

    /// Frames per second
    pub fps: f64,

    /// Frame width in pixels
    pub width: usize,

    /// Frame height in pixels
    pub height: usize,
}

/// Random-access frame reader owned by a single video analysis
///
/// The handle is acquired when the video analyzer is constructed and released
/// unconditionally when the analysis returns; it is never shared between
/// concurrent analyses.
pub trait FrameSource {
    /// Stream metadata (frame count, fps, dimensions)
    fn metadata(&self) -> VideoMetadata;

    /// Seek to `index` and decode that frame in RGB channel order
    ///
    /// Returns `Ok(None)` when the source is exhausted before `index`. A
    /// decode error for a single frame is reported here and isolated by the
    /// caller; it does not abort the sweep.
    fn read_frame(&mut self, index: usize) -> Result<Option<DecodedImage>, AnalysisError>;
}
