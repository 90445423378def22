//! Sources of seed entropy.

pub mod os;
pub mod pool;

use crate::error::entropy_unavailable::EntropyUnavailable;
use std::sync::Arc;

/// A capability that fills buffers with cryptographically suitable random bytes.
///
/// Implementations are shared across threads, so a fill must be safe to call
/// concurrently. On failure `dest` may be partially written and must be discarded.
pub trait EntropySource: Send + Sync {
    /// Fill all of `dest` with fresh entropy.
    fn try_fill_entropy(&self, dest: &mut [u8]) -> Result<(), EntropyUnavailable>;
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn try_fill_entropy(&self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
        (**self).try_fill_entropy(dest)
    }
}

impl<T: EntropySource + ?Sized> EntropySource for Box<T> {
    fn try_fill_entropy(&self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
        (**self).try_fill_entropy(dest)
    }
}

impl<T: EntropySource + ?Sized> EntropySource for Arc<T> {
    fn try_fill_entropy(&self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
        (**self).try_fill_entropy(dest)
    }
}
