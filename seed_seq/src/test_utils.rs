//! Deterministic entropy sources for tests.

use crate::{entropy::EntropySource, error::entropy_unavailable::EntropyUnavailable};
use std::sync::{Mutex, PoisonError};

/// Fills every buffer with `0x00, 0x01, 0x02, ...` and records each requested length.
#[derive(Debug, Default)]
pub struct CountingEntropy {
    requests: Mutex<Vec<usize>>,
}

impl CountingEntropy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte counts requested so far, in call order.
    pub fn requests(&self) -> Vec<usize> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EntropySource for CountingEntropy {
    fn try_fill_entropy(&self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(dest.len());

        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = i as u8;
        }
        Ok(())
    }
}

/// Always fails, recording each requested length.
#[derive(Debug, Default)]
pub struct FailingEntropy {
    requests: Mutex<Vec<usize>>,
}

impl FailingEntropy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<usize> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl EntropySource for FailingEntropy {
    fn try_fill_entropy(&self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(dest.len());

        Err(EntropyUnavailable::new("simulated entropy failure"))
    }
}
