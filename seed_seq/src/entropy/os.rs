//! Operating system entropy.

use super::EntropySource;
use crate::error::entropy_unavailable::EntropyUnavailable;
use rand::{rngs::OsRng, RngCore};

/// Entropy read directly from the operating system via [`OsRng`].
///
/// Every fill is a syscall (or the platform equivalent). Prefer
/// [`EntropyPool`] when drawing seeds frequently.
///
/// [`EntropyPool`]: crate::entropy::pool::EntropyPool
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn try_fill_entropy(&self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
        OsRng.try_fill_bytes(dest)?;
        Ok(())
    }
}
