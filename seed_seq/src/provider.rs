//! Fresh seed sequences drawn from an entropy source.

use crate::{
    entropy::{pool::EntropyPool, EntropySource},
    error::entropy_unavailable::EntropyUnavailable,
    seed_seq::SeedSeq,
};
use tracing::{error, instrument};

/// Number of seed words captured per sequence.
pub const SEED_WORDS: usize = 8;

/// Width of one seed word in bytes.
pub const WORD_BYTES: usize = std::mem::size_of::<u32>();

/// Build a [`SeedSeq`] from fresh entropy drawn from the process-wide [`EntropyPool`].
///
/// Each call produces an independent, non-reproducible sequence.
///
/// # Errors
///
/// Returns [`EntropyUnavailable`] if the pool could not be seeded from the OS.
/// No partially seeded sequence is ever returned.
///
/// # Examples
///
/// ```
/// # use seed_seq::{make_seed_seq, SEED_WORDS};
/// let a = make_seed_seq().unwrap();
/// let b = make_seed_seq().unwrap();
///
/// assert_eq!(a.size(), SEED_WORDS);
/// assert_ne!(a, b);
/// ```
pub fn make_seed_seq() -> Result<SeedSeq, EntropyUnavailable> {
    make_seed_seq_with(EntropyPool::global())
}

/// Build a [`SeedSeq`] from [`SEED_WORDS`] words of entropy drawn from `source`.
///
/// The bytes are read as little-endian words in order; nothing is reordered or dropped.
#[instrument(skip(source))]
pub fn make_seed_seq_with<E: EntropySource + ?Sized>(
    source: &E,
) -> Result<SeedSeq, EntropyUnavailable> {
    let mut seed_material = [0u8; SEED_WORDS * WORD_BYTES];

    source.try_fill_entropy(&mut seed_material).map_err(|err| {
        error!(%err, "unable to draw seed material");
        err
    })?;

    Ok(seed_material
        .chunks_exact(WORD_BYTES)
        .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
