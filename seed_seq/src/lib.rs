//! Seed sequences for pseudo-random number generators, backed by a
//! process-wide secure entropy pool.
//!
//! # Examples
//!
//! ```
//! use rand::{rngs::StdRng, RngCore};
//!
//! let seq = seed_seq::make_seed_seq().unwrap();
//! assert_eq!(seq.size(), seed_seq::SEED_WORDS);
//!
//! let mut rng: StdRng = seq.seed_rng();
//! let _ = rng.next_u64();
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_debug_implementations,
    future_incompatible,
    let_underscore,
    rust_2021_compatibility,
    nonstandard_style
)]
#![deny(unreachable_pub)]

pub mod entropy;
pub mod error;
pub mod provider;
pub mod seed_seq;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use crate::{
    entropy::{os::OsEntropy, pool::EntropyPool, EntropySource},
    error::entropy_unavailable::EntropyUnavailable,
    provider::{make_seed_seq, make_seed_seq_with, SEED_WORDS, WORD_BYTES},
    seed_seq::SeedSeq,
};
