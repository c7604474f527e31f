//! Media I/O boundary
//!
//! Decode-provider types and sample-level access. The engine itself never
//! touches codecs; it consumes fully decoded sample arrays.

pub mod provider;
pub mod sample_buffer;
