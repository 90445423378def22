//! Seed sequence value type.

use derive_more::{From, Into};
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

const INIT: u32 = 0x8b8b_8b8b;
const MIX_MULT: u32 = 1_664_525;
const XOR_MULT: u32 = 1_566_083_941;

/// An immutable list of seed words that expands into arbitrarily many
/// well-mixed words for initializing a generator's state.
///
/// [`generate`][SeedSeq::generate] produces the same output as C++
/// `std::seed_seq` for the same seed words, so seeds are portable across
/// implementations.
///
/// # Examples
///
/// ```
/// # use seed_seq::SeedSeq;
/// let seq = SeedSeq::new([1, 2, 3]);
///
/// let mut a = [0u32; 4];
/// let mut b = [0u32; 4];
/// seq.generate(&mut a);
/// seq.generate(&mut b);
///
/// assert_eq!(a, b);
/// assert_eq!(seq.size(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, From, Into, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeedSeq {
    words: Vec<u32>,
}

impl SeedSeq {
    pub fn new<I: IntoIterator<Item = u32>>(words: I) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Number of stored seed words.
    pub fn size(&self) -> usize {
        self.words.len()
    }

    /// The stored seed words, in insertion order.
    pub fn param(&self) -> &[u32] {
        &self.words
    }

    pub fn into_param(self) -> Vec<u32> {
        self.words
    }

    /// Fill `out` with words derived from the seed material.
    ///
    /// Deterministic in the stored words and `out.len()`. An empty `out` is left untouched.
    pub fn generate(&self, out: &mut [u32]) {
        if out.is_empty() {
            return;
        }

        out.fill(INIT);

        let n = out.len();
        let s = self.words.len();
        let t = match n {
            n if n >= 623 => 11,
            n if n >= 68 => 7,
            n if n >= 39 => 5,
            n if n >= 7 => 3,
            n => (n - 1) / 2,
        };
        let p = (n - t) / 2;
        let q = p + t;
        let m = (s + 1).max(n);

        for k in 0..m {
            let (kn, kp, kq, prev) = (k % n, (k + p) % n, (k + q) % n, (k + n - 1) % n);

            let r1 = MIX_MULT.wrapping_mul(tempered(out[kn] ^ out[kp] ^ out[prev]));
            let r2 = match k {
                0 => r1.wrapping_add(s as u32),
                k if k <= s => r1.wrapping_add(kn as u32).wrapping_add(self.words[k - 1]),
                _ => r1.wrapping_add(kn as u32),
            };

            out[kp] = out[kp].wrapping_add(r1);
            out[kq] = out[kq].wrapping_add(r2);
            out[kn] = r2;
        }

        for k in m..m + n {
            let (kn, kp, kq, prev) = (k % n, (k + p) % n, (k + q) % n, (k + n - 1) % n);

            let sum = out[kn].wrapping_add(out[kp]).wrapping_add(out[prev]);
            let r3 = XOR_MULT.wrapping_mul(tempered(sum));
            let r4 = r3.wrapping_sub(kn as u32);

            out[kp] ^= r3;
            out[kq] ^= r4;
            out[kn] = r4;
        }
    }

    /// Fill `out` with generated words in little-endian order.
    ///
    /// A trailing partial word is truncated.
    pub fn generate_bytes(&self, out: &mut [u8]) {
        let mut words = vec![0u32; out.len().div_ceil(4)];
        self.generate(&mut words);

        for (chunk, word) in out.chunks_mut(4).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes()[..chunk.len()]);
        }
    }

    /// Construct a generator seeded from this sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// # use seed_seq::SeedSeq;
    /// use rand::{rngs::StdRng, Rng};
    ///
    /// let seq = SeedSeq::new([42]);
    /// let mut a: StdRng = seq.seed_rng();
    /// let mut b: StdRng = seq.seed_rng();
    ///
    /// assert_eq!(a.gen::<u64>(), b.gen::<u64>());
    /// ```
    pub fn seed_rng<R: SeedableRng>(&self) -> R {
        let mut seed = R::Seed::default();
        self.generate_bytes(seed.as_mut());
        R::from_seed(seed)
    }
}

impl<const N: usize> From<[u32; N]> for SeedSeq {
    fn from(words: [u32; N]) -> Self {
        Self::new(words)
    }
}

impl FromIterator<u32> for SeedSeq {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::new(iter)
    }
}

fn tempered(x: u32) -> u32 {
    x ^ (x >> 27)
}
