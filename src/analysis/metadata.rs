//! Media metadata records

use serde::{Deserialize, Serialize};

use crate::io::provider::{DecodedAudio, DecodedImage, VideoMetadata};

/// Image metadata echoed into the analysis record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageInfo {
    /// Width in pixels
    pub width: usize,

    /// Height in pixels
    pub height: usize,

    /// Number of color channels
    pub channels: usize,

    /// Container/codec tag reported by the decode provider
    pub format: String,
}

impl From<&DecodedImage> for ImageInfo {
    fn from(image: &DecodedImage) -> Self {
        Self {
            width: image.width,
            height: image.height,
            channels: image.channels,
            format: image.format.clone(),
        }
    }
}

/// Audio metadata echoed into the analysis record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioInfo {
    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of audio channels
    pub channels: usize,

    /// Clip duration in seconds
    pub duration_seconds: f64,

    /// Container/codec tag reported by the decode provider
    pub format: String,
}

impl From<&DecodedAudio> for AudioInfo {
    fn from(audio: &DecodedAudio) -> Self {
        Self {
            sample_rate: audio.sample_rate,
            channels: audio.channels,
            duration_seconds: audio.duration_seconds,
            format: audio.format.clone(),
        }
    }
}

/// Video metadata echoed into the analysis record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoInfo {
    /// Frame width in pixels
    pub width: usize,

    /// Frame height in pixels
    pub height: usize,

    /// Frames per second
    pub fps: f64,

    /// Total number of frames in the stream
    pub frame_count: usize,

    /// Stream duration in seconds (0.0 when fps is unknown)
    pub duration_seconds: f64,
}

impl From<&VideoMetadata> for VideoInfo {
    fn from(meta: &VideoMetadata) -> Self {
        let duration_seconds = if meta.fps > 0.0 {
            meta.frame_count as f64 / meta.fps
        } else {
            0.0
        };
        Self {
            width: meta.width,
            height: meta.height,
            fps: meta.fps,
            frame_count: meta.frame_count,
            duration_seconds,
        }
    }
}
