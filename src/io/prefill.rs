//! Placements fixed by the caller before the search starts
//!
//! Prefilled instances are placed in declaration order and checked against
//! each other like any other placement. The search never records them on its
//! ledger, so backtracking cannot remove them.

use log::debug;

use crate::algorithm::selection::first_conflict;
use crate::io::error::{Result, TileMapError};
use crate::spatial::grid::{InstanceId, MapGrid, TileInstance};

/// Ordered list of placements every generated map must contain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Prefill {
    placements: Vec<TileInstance>,
}

impl Prefill {
    /// Create an empty prefill
    pub const fn new() -> Self {
        Self {
            placements: Vec::new(),
        }
    }

    /// Add a placement, builder style
    #[must_use]
    pub fn with(mut self, instance: TileInstance) -> Self {
        self.push(instance);
        self
    }

    /// Add a placement
    pub fn push(&mut self, instance: TileInstance) {
        self.placements.push(instance);
    }

    /// Number of placements
    pub const fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether nothing is prefilled
    pub const fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Placements in declaration order
    pub fn placements(&self) -> &[TileInstance] {
        &self.placements
    }

    /// Place every instance on `grid`, returning their ids in order
    ///
    /// # Errors
    ///
    /// Returns an error if a placement is unknown to the catalog, leaves the
    /// grid, overlaps an earlier one, or faces an earlier one with an
    /// incompatible edge
    pub fn apply(&self, grid: &mut MapGrid<'_>) -> Result<Vec<InstanceId>> {
        let mut ids = Vec::with_capacity(self.placements.len());

        for instance in &self.placements {
            let layout = grid.catalog().sides(instance.tile, instance.orientation)?;
            if grid.region_is_free(instance.anchor, layout.width(), layout.height())
                && let Some((position, side)) = first_conflict(grid, layout, instance.anchor)
            {
                return Err(TileMapError::IncompatibleAdjacency { position, side });
            }

            // Bounds and overlap are reported by the grid itself
            ids.push(grid.place(*instance)?);
        }

        if !ids.is_empty() {
            debug!("Prefilled {} instances", ids.len());
        }
        Ok(ids)
    }
}
