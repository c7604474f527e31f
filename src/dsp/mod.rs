//! Signal-processing primitives
//!
//! Forward-only building blocks consumed by the detectors:
//! - 8×8 block DCT-II (no inverse needed)
//! - interleaved RGB to single-channel luminance conversion

pub mod dct;
pub mod luminance;
