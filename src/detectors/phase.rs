//! Phase-coding detector
//!
//! Phase coding hides data by altering the phase spectrum of a signal while
//! leaving its magnitude largely intact. The test measures the variability of
//! consecutive phase differences over a leading window of the first channel.
//!
//! Algorithm:
//! 1. Take the first channel, clamped to the configured window (8192 samples)
//! 2. Forward FFT, per-bin phase angle
//! 3. First difference across consecutive bins
//! 4. Fire when the population standard deviation of the differences exceeds
//!    the threshold

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use crate::error::AnalysisError;
use crate::io::sample_buffer::channel_samples;

/// Outcome of the phase-variance test
#[derive(Debug, Clone, Copy)]
pub struct PhaseAnalysis {
    /// True when the phase-difference spread exceeded the threshold
    pub detected: bool,

    /// Heuristic confidence in [0, 100]
    pub confidence: f64,

    /// Population standard deviation of consecutive phase differences
    pub phase_std: f64,

    /// Number of samples fed to the FFT
    pub samples_analyzed: usize,
}

/// Run the phase-variance test over interleaved PCM samples
///
/// Only the first channel is analyzed; `window` bounds the FFT length
/// (default 8192, or the whole channel when shorter).
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` when the first channel holds fewer
/// than two samples; the phase difference is undefined there.
pub fn detect_phase(
    samples: &[i16],
    channels: usize,
    threshold: f64,
    window: usize,
) -> Result<PhaseAnalysis, AnalysisError> {
    let mono = if channels <= 1 {
        samples.to_vec()
    } else {
        channel_samples(samples, channels, 0)
    };

    let n = mono.len().min(window);
    if n < 2 {
        return Err(AnalysisError::InvalidInput(format!(
            "phase analysis needs at least 2 samples, got {}",
            n
        )));
    }

    let mut buffer: Vec<Complex<f64>> = mono[..n]
        .iter()
        .map(|&s| Complex::new(s as f64, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);
    fft.process(&mut buffer);

    let phase: Vec<f64> = buffer.iter().map(|c| c.im.atan2(c.re)).collect();
    let diffs: Vec<f64> = phase.windows(2).map(|w| w[1] - w[0]).collect();

    let count = diffs.len() as f64;
    let mean = diffs.iter().sum::<f64>() / count;
    let variance = diffs.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / count;
    let phase_std = variance.sqrt();

    let detected = phase_std > threshold;
    let confidence = phase_std.min(1.0) * 50.0;

    log::debug!(
        "Phase test: {} samples, phase_std={:.4}, detected={}",
        n,
        phase_std,
        detected
    );

    Ok(PhaseAnalysis {
        detected,
        confidence,
        phase_std,
        samples_analyzed: n,
    })
}
