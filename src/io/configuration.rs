//! Generation constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default cap on backtrack steps before a run gives up
pub const DEFAULT_MAX_BACKTRACK_STEPS: usize = 100_000;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Past this many rejected draws the sampler indexes the allowed values directly
/// Rejection draws attempted before falling back to direct indexing
pub const MAX_REJECTION_DRAWS: usize = 64;

/// Parameters of a generation run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Seed for the built-in random source
    pub seed: u64,
    /// Backtrack steps allowed before the run fails with `BudgetExceeded`
    pub max_backtrack_steps: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_backtrack_steps: DEFAULT_MAX_BACKTRACK_STEPS,
        }
    }
}

impl GenerationConfig {
    /// Replace the seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the backtrack budget
    #[must_use]
    pub const fn with_max_backtrack_steps(mut self, max_backtrack_steps: usize) -> Self {
        self.max_backtrack_steps = max_backtrack_steps;
        self
    }
}

/// Check requested map dimensions
///
/// # Errors
///
/// Returns `InvalidParameter` if either dimension is zero or exceeds
/// [`MAX_GRID_DIMENSION`]
pub fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    for (parameter, value) in [("width", width), ("height", height)] {
        if value == 0 {
            return Err(invalid_parameter(parameter, &value, &"must be at least 1"));
        }
        if value > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
    }
    Ok(())
}
