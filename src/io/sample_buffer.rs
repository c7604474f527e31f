//! Sample-level access shared by the detectors and the extractor

/// Fixed-width integer sample exposing its least significant bit
///
/// Implemented for `u8` (image color channels) and `i16` (PCM audio). The
/// bit-plane detector and the payload extractor are generic over this trait,
/// so the image and audio LSB paths share one implementation.
pub trait Sample: Copy {
    /// Least significant bit of the sample (0 or 1)
    fn lsb(self) -> u8;
}

impl Sample for u8 {
    fn lsb(self) -> u8 {
        self & 1
    }
}

impl Sample for i16 {
    fn lsb(self) -> u8 {
        (self & 1) as u8
    }
}

/// De-interleave one channel from an interleaved sample stream
///
/// `samples` is channel-interleaved (RGBRGB… for images, LRLR… for stereo
/// audio). Returns every sample belonging to `channel`, or an empty vector
/// when the channel index is out of range.
pub fn channel_samples<T: Sample>(samples: &[T], channels: usize, channel: usize) -> Vec<T> {
    if channels == 0 || channel >= channels {
        return Vec::new();
    }
    samples
        .iter()
        .copied()
        .skip(channel)
        .step_by(channels)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lsb_u8() {
        assert_eq!(0u8.lsb(), 0);
        assert_eq!(1u8.lsb(), 1);
        assert_eq!(254u8.lsb(), 0);
        assert_eq!(255u8.lsb(), 1);
    }

    #[test]
    fn test_lsb_i16() {
        assert_eq!(0i16.lsb(), 0);
        assert_eq!(1i16.lsb(), 1);
        assert_eq!((-1i16).lsb(), 1);
        assert_eq!((-2i16).lsb(), 0);
        assert_eq!(32767i16.lsb(), 1);
    }

    #[test]
    fn test_channel_samples_interleaved() {
        // RGBRGB layout, two pixels
        let pixels: Vec<u8> = vec![10, 20, 30, 11, 21, 31];
        assert_eq!(channel_samples(&pixels, 3, 0), vec![10, 11]);
        assert_eq!(channel_samples(&pixels, 3, 1), vec![20, 21]);
        assert_eq!(channel_samples(&pixels, 3, 2), vec![30, 31]);
    }

    #[test]
    fn test_channel_samples_out_of_range() {
        let pixels: Vec<u8> = vec![1, 2, 3, 4];
        assert!(channel_samples(&pixels, 2, 2).is_empty());
        assert!(channel_samples(&pixels, 0, 0).is_empty());
    }
}
