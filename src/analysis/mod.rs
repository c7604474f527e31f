//! Analysis records and media metadata
//!
//! Tagged, serialization-ready result types assembled once per analysis call
//! and never mutated afterwards. The external report/serving layer consumes
//! them directly.

pub mod metadata;
pub mod result;
