/// Witnesses used by the Miller-Rabin primality test.
///
/// A test runs two kinds of rounds. The fixed `witnesses` are tried first; when
/// they are the first twelve primes (the default), the answer is exact for every
/// value below [`DETERMINISTIC_BOUND`]. Above that bound, fixed witnesses alone
/// guarantee nothing, since some composites are strong pseudoprimes to all of them.
/// The `random_rounds` then draw fresh witnesses from the caller's generator, and
/// each such round lets a composite through with probability at most 1/4, hence
/// [`confidence`](PrimalityConfig::confidence).
///
/// # Example
///
/// ```
/// use bitvector::{BitVector, PrimalityConfig};
/// use rand::SeedableRng;
///
/// let config = PrimalityConfig { random_rounds: 40, ..PrimalityConfig::default() };
/// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
/// let candidate = BitVector::from_int(1_000_000_007);
/// assert!(candidate.test_for_primality_with(&config, &mut rng));
/// assert!(config.confidence() > 0.999_999);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimalityConfig {
    pub witnesses: Vec<u64>,
    pub random_rounds: usize,
}

/// The first twelve primes.
pub const DEFAULT_WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Every composite below this value fails Miller-Rabin for at least one of [`DEFAULT_WITNESSES`].
pub const DETERMINISTIC_BOUND: u128 = 318_665_857_834_031_151_167_461;

pub const DEFAULT_RANDOM_ROUNDS: usize = 20;

impl Default for PrimalityConfig {
    fn default() -> Self {
        PrimalityConfig {
            witnesses: DEFAULT_WITNESSES.to_vec(),
            random_rounds: DEFAULT_RANDOM_ROUNDS,
        }
    }
}

impl PrimalityConfig {
    /// Only the given fixed witnesses, without random rounds.
    #[must_use]
    pub fn with_witnesses(witnesses: Vec<u64>) -> Self {
        PrimalityConfig {
            witnesses,
            random_rounds: 0,
        }
    }

    /// Lower bound on the probability that a composite number above
    /// [`DETERMINISTIC_BOUND`] is reported composite: `1 - 4^-random_rounds`.
    ///
    /// Fixed witnesses do not contribute, so a configuration without random rounds has
    /// confidence zero there.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        let rounds = i32::try_from(self.random_rounds).unwrap_or(i32::MAX);
        1.0 - 4f64.powi(-rounds)
    }
}
