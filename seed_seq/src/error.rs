//! Error types.

pub mod entropy_unavailable;
