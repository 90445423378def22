//! Process-wide entropy pool.

use super::{os::OsEntropy, EntropySource};
use crate::error::entropy_unavailable::EntropyUnavailable;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::{
    fmt,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex, PoisonError,
    },
};
use tracing::{debug, instrument};

/// Number of independently locked generators in a pool.
pub const POOL_SHARDS: usize = 8;

lazy_static::lazy_static! {
    static ref GLOBAL_POOL: EntropyPool = EntropyPool::new();
}

static NEXT_SHARD: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static THREAD_SHARD: usize = NEXT_SHARD.fetch_add(1, Ordering::Relaxed) % POOL_SHARDS;
}

/// A pool of CSPRNGs, each lazily seeded from a slower seeding source.
///
/// Threads are assigned to shards round-robin on first use, so concurrent
/// callers rarely contend on the same lock. A shard is only seeded once;
/// after that, fills are served from its [`StdRng`] without touching the seeder.
///
/// # Examples
///
/// ```
/// # use seed_seq::{EntropyPool, EntropySource};
/// let mut buf = [0u8; 32];
/// EntropyPool::global().try_fill_entropy(&mut buf).unwrap();
/// ```
pub struct EntropyPool<S: EntropySource = OsEntropy> {
    seeder: S,
    shards: [Mutex<Option<StdRng>>; POOL_SHARDS],
}

impl EntropyPool {
    /// A pool seeded from the operating system.
    pub fn new() -> Self {
        Self::with_seeder(OsEntropy)
    }

    /// The process-wide pool.
    pub fn global() -> &'static EntropyPool {
        &GLOBAL_POOL
    }
}

impl Default for EntropyPool {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EntropySource> EntropyPool<S> {
    /// A pool whose shards are seeded from `seeder`.
    pub fn with_seeder(seeder: S) -> Self {
        Self {
            seeder,
            shards: std::array::from_fn(|_| Mutex::new(None)),
        }
    }

    /// Number of shards that have been successfully seeded so far.
    pub fn seeded_shards(&self) -> usize {
        self.shards
            .iter()
            .filter(|shard| shard.lock().unwrap_or_else(PoisonError::into_inner).is_some())
            .count()
    }

    fn seed_shard(&self, shard: usize) -> Result<StdRng, EntropyUnavailable> {
        let mut seed = <StdRng as SeedableRng>::Seed::default();
        self.seeder.try_fill_entropy(seed.as_mut())?;
        debug!(shard, "seeded entropy pool shard");
        Ok(StdRng::from_seed(seed))
    }
}

impl<S: EntropySource> EntropySource for EntropyPool<S> {
    #[instrument(level = "trace", skip(self, dest), fields(len = dest.len()))]
    fn try_fill_entropy(&self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
        let idx = THREAD_SHARD.with(|shard| *shard);

        // The generator is still valid if another thread panicked while holding the lock
        let mut guard = self.shards[idx]
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let rng = match guard.take() {
            Some(rng) => rng,
            None => self.seed_shard(idx)?,
        };

        guard.insert(rng).try_fill_bytes(dest)?;
        Ok(())
    }
}

impl<S: EntropySource> fmt::Debug for EntropyPool<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntropyPool")
            .field("shards", &POOL_SHARDS)
            .field("seeded", &self.seeded_shards())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{CountingEntropy, FailingEntropy};
    use std::{
        collections::HashSet,
        sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        },
    };
    use testresult::TestResult;

    struct FlakySeeder {
        failed_once: AtomicBool,
    }

    impl EntropySource for FlakySeeder {
        fn try_fill_entropy(&self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
            if self.failed_once.swap(true, Ordering::SeqCst) {
                dest.fill(0x42);
                Ok(())
            } else {
                Err(EntropyUnavailable::new("not yet"))
            }
        }
    }

    #[test]
    fn test_global_pool_fills() -> TestResult {
        test_utils::init_logging();

        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        EntropyPool::global().try_fill_entropy(&mut a)?;
        EntropyPool::global().try_fill_entropy(&mut b)?;

        assert_ne!(a, b);
        assert!(EntropyPool::global().seeded_shards() >= 1);
        Ok(())
    }

    #[test]
    fn test_shard_seeded_once_per_thread() -> TestResult {
        test_utils::init_logging();

        let seeder = Arc::new(CountingEntropy::new());
        let pool = EntropyPool::with_seeder(seeder.clone());

        let mut buf = [0u8; 16];
        for _ in 0..10 {
            pool.try_fill_entropy(&mut buf)?;
        }

        assert_eq!(seeder.requests(), vec![32]);
        assert_eq!(pool.seeded_shards(), 1);
        Ok(())
    }

    #[test]
    fn test_seeding_failure_surfaces() {
        test_utils::init_logging();

        let pool = EntropyPool::with_seeder(FailingEntropy::new());
        let mut buf = [0u8; 16];

        let err = pool.try_fill_entropy(&mut buf).unwrap_err();
        assert_eq!(err, EntropyUnavailable::new("simulated entropy failure"));
        assert_eq!(pool.seeded_shards(), 0);
    }

    #[test]
    fn test_failed_shard_is_retried() -> TestResult {
        test_utils::init_logging();

        let pool = EntropyPool::with_seeder(FlakySeeder {
            failed_once: AtomicBool::new(false),
        });
        let mut buf = [0u8; 16];

        assert!(pool.try_fill_entropy(&mut buf).is_err());
        pool.try_fill_entropy(&mut buf)?;
        assert_eq!(pool.seeded_shards(), 1);
        Ok(())
    }

    #[test]
    fn test_concurrent_fills_are_distinct() {
        test_utils::init_logging();

        let pool = Arc::new(EntropyPool::new());
        let handles: Vec<_> = (0..POOL_SHARDS * 2)
            .map(|_| {
                let pool = pool.clone();
                std::thread::spawn(move || {
                    (0..8)
                        .map(|_| {
                            let mut buf = [0u8; 32];
                            pool.try_fill_entropy(&mut buf).unwrap();
                            buf
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let draws: Vec<[u8; 32]> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let unique: HashSet<_> = draws.iter().collect();

        assert_eq!(unique.len(), draws.len());
        assert!(pool.seeded_shards() <= POOL_SHARDS);
    }
}
