//! Statistical detection modules
//!
//! Each detector is a pure function over decoded samples:
//! - Bit-plane: LSB randomness test, shared by images, audio, and video frames
//! - Frequency: 8×8 block DCT coefficient irregularity test (images)
//! - Phase: spectral phase-variance test (audio)
//!
//! All verdicts are heuristic confidence scores, not proofs.

pub mod bit_plane;
pub mod frequency;
pub mod phase;
