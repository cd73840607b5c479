//! Bounded random draws, with and without an exclusion set
//!
//! The generator never touches an RNG directly; it asks a [`RandomSource`]
//! for integers in a range. Excluding draws let it retry a cell without the
//! candidates already rejected there, and the default implementation keeps
//! that retry loop bounded even for sources that misbehave.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::MAX_REJECTION_DRAWS;
use crate::io::error::RandomError;

/// A set of values a draw must avoid
pub trait Exclusion {
    /// Whether `value` is excluded
    fn excludes(&self, value: usize) -> bool;

    /// Number of excluded values inside `[0, bound)`
    fn excluded_count(&self, bound: usize) -> usize;

    /// The `rank`-th value in `[0, bound)` that is not excluded, counting from zero
    ///
    /// The default visits every value below `bound`. Exclusions made of
    /// whole ranges should override it to skip a range at a time.
    fn nth_allowed(&self, rank: usize, bound: usize) -> Option<usize> {
        (0..bound).filter(|&value| !self.excludes(value)).nth(rank)
    }
}

/// Supplier of uniformly distributed bounded integers
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidBound` if `bound` is zero
    fn next_bounded(&mut self, bound: usize) -> Result<usize, RandomError>;

    /// Uniform integer in `[0, bound)` that `excluded` does not contain
    ///
    /// The default samples by rejection for at most [`MAX_REJECTION_DRAWS`]
    /// draws, then ranks directly among the remaining values through
    /// [`Exclusion::nth_allowed`], so it terminates however full the exclusion
    /// is.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `bound` is zero
    /// - Every value below `bound` is excluded
    /// - `next_bounded` returns a value outside its range
    fn next_bounded_excluding(
        &mut self,
        bound: usize,
        excluded: &dyn Exclusion,
    ) -> Result<usize, RandomError> {
        if bound == 0 {
            return Err(RandomError::InvalidBound { bound });
        }
        let excluded_count = excluded.excluded_count(bound);
        if excluded_count >= bound {
            return Err(RandomError::Exhausted {
                bound,
                excluded: excluded_count,
            });
        }

        for _ in 0..MAX_REJECTION_DRAWS {
            let value = check_bounded(self.next_bounded(bound)?, bound)?;
            if !excluded.excludes(value) {
                return Ok(value);
            }
        }

        let allowed = bound - excluded_count;
        let rank = check_bounded(self.next_bounded(allowed)?, allowed)?;
        excluded
            .nth_allowed(rank, bound)
            .ok_or(RandomError::Exhausted {
                bound,
                excluded: excluded_count,
            })
    }
}

/// Confirm a drawn value lies in `[0, bound)`
///
/// # Errors
///
/// Returns `ContractViolation` otherwise
pub const fn check_bounded(value: usize, bound: usize) -> Result<usize, RandomError> {
    if value < bound {
        Ok(value)
    } else {
        Err(RandomError::ContractViolation { value, bound })
    }
}

/// Confirm a value returned by an excluding draw is allowed
///
/// # Errors
///
/// Returns `ContractViolation` if `value` is out of range or excluded
pub fn check_allowed(
    value: usize,
    bound: usize,
    excluded: &dyn Exclusion,
) -> Result<usize, RandomError> {
    let value = check_bounded(value, bound)?;
    if excluded.excludes(value) {
        Err(RandomError::ContractViolation { value, bound })
    } else {
        Ok(value)
    }
}

/// Production random source over a seeded `StdRng`
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic source; equal seeds give equal sequences
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from the operating system
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_bounded(&mut self, bound: usize) -> Result<usize, RandomError> {
        if bound == 0 {
            return Err(RandomError::InvalidBound { bound });
        }
        Ok(self.rng.random_range(0..bound))
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_bounded(&mut self, bound: usize) -> Result<usize, RandomError> {
        (**self).next_bounded(bound)
    }

    fn next_bounded_excluding(
        &mut self,
        bound: usize,
        excluded: &dyn Exclusion,
    ) -> Result<usize, RandomError> {
        (**self).next_bounded_excluding(bound, excluded)
    }
}
