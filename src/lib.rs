//! Motif finding primitives in Rust: random DNA generation, mismatch scoring,
//! profile matrices and randomized motif search

pub mod distance;
pub mod error;
pub mod gibbs;
pub mod profile;
pub mod report;
pub mod search;
pub mod sequence;
pub mod types;
