use crate::{
    algorithm::bitset::CandidateSet,
    io::error::RandomError,
    math::{
        probability::{cumulative_weights, locate_weighted, weight_at},
        random::{Exclusion, RandomSource, check_allowed},
    },
    spatial::{
        grid::{MapGrid, Position},
        orientation::{Orientation, OrientedSides, Side},
        tiles::TileId,
    },
};

/// A (tile type, orientation) pair that may be placed at a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    /// Tile type in the grid's catalog
    pub tile: TileId,
    /// Orientation the tile would be placed under
    pub orientation: Orientation,
    /// Selection weight inherited from the tile type
    pub weight: u32,
}

/// First border cell where a layout anchored at `anchor` would face an
/// incompatible neighbor, as `(cell, side)`
///
/// Sides facing empty cells or the grid boundary are unconstrained. The
/// layout is assumed to fit on the grid.
pub fn first_conflict(
    grid: &MapGrid<'_>,
    layout: &OrientedSides,
    anchor: Position,
) -> Option<(Position, Side)> {
    let registry = grid.catalog().registry();
    let [row, col] = anchor;
    let (width, height) = (layout.width(), layout.height());

    // Border cells by side, with their offset along that side
    let north = (0..width).map(|offset| (Side::North, [row, col + offset], offset));
    let west = (0..height).map(|offset| (Side::West, [row + offset, col], offset));
    let east = (0..height).map(|offset| (Side::East, [row + offset, col + width - 1], offset));
    let south = (0..width).map(|offset| (Side::South, [row + height - 1, col + offset], offset));

    north
        .chain(west)
        .chain(east)
        .chain(south)
        .find_map(|(side, cell, offset)| {
            let theirs = grid.neighbor_edge(cell, side)?;
            let compatible = layout
                .edge_at(side, offset)
                .is_some_and(|mine| registry.compatible(mine, theirs));
            (!compatible).then_some((cell, side))
        })
}

/// Enumerate every candidate that fits at `cell` given the tiles already placed
///
/// Order is tile declaration order, then [`Orientation::ALL`] order, so equal
/// random draws always pick equal candidates. Zero-weight tile types are
/// skipped.
pub fn enumerate_candidates(grid: &MapGrid<'_>, cell: Position) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (tile, tile_type) in grid.catalog().tiles().iter().enumerate() {
        if tile_type.weight() == 0 {
            continue;
        }
        for orientation in Orientation::ALL {
            let Some(layout) = tile_type.sides_under(orientation) else {
                continue;
            };
            if grid.region_is_free(cell, layout.width(), layout.height())
                && first_conflict(grid, layout, cell).is_none()
            {
                candidates.push(Candidate {
                    tile,
                    orientation,
                    weight: tile_type.weight(),
                });
            }
        }
    }

    candidates
}

/// Candidates at one cell together with their cumulative weight table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedCandidates {
    candidates: Vec<Candidate>,
    cumulative: Vec<usize>,
}

impl WeightedCandidates {
    /// Build the weight table for `candidates`
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let cumulative = cumulative_weights(candidates.iter().map(|candidate| candidate.weight));
        Self {
            candidates,
            cumulative,
        }
    }

    /// Candidate at `index`
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// All candidates in enumeration order
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Number of candidates
    pub const fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether no candidate fits
    pub const fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Sum of all candidate weights
    pub fn total_weight(&self) -> usize {
        self.cumulative.last().copied().unwrap_or(0)
    }

    /// Weight of candidates not yet in `tried`
    pub fn remaining_weight(&self, tried: &CandidateSet) -> usize {
        (0..self.len())
            .filter(|&index| !tried.contains(index))
            .map(|index| weight_at(&self.cumulative, index))
            .sum()
    }

    /// Choose an untried candidate with probability proportional to its weight
    ///
    /// Draws one weight unit from the source, excluding the units of tried
    /// candidates, and returns the index of the candidate owning it. Returns
    /// `Ok(None)` when no untried weight remains.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails or returns a unit that is out of
    /// range or belongs to a tried candidate
    pub fn choose(
        &self,
        tried: &CandidateSet,
        source: &mut dyn RandomSource,
    ) -> Result<Option<usize>, RandomError> {
        if self.remaining_weight(tried) == 0 {
            return Ok(None);
        }

        let total = self.total_weight();
        let exclusion = TriedUnits {
            cumulative: &self.cumulative,
            tried,
        };
        let unit = source.next_bounded_excluding(total, &exclusion)?;
        let unit = check_allowed(unit, total, &exclusion)?;
        Ok(locate_weighted(&self.cumulative, unit))
    }
}

/// Weight units owned by tried candidates, viewed as an exclusion set
struct TriedUnits<'a> {
    cumulative: &'a [usize],
    tried: &'a CandidateSet,
}

impl Exclusion for TriedUnits<'_> {
    fn excludes(&self, unit: usize) -> bool {
        locate_weighted(self.cumulative, unit).is_none_or(|index| self.tried.contains(index))
    }

    fn excluded_count(&self, bound: usize) -> usize {
        let tried_weight: usize = self
            .tried
            .to_vec()
            .into_iter()
            .map(|index| weight_at(self.cumulative, index))
            .sum();
        let total = self.cumulative.last().copied().unwrap_or(0);
        (tried_weight + bound.saturating_sub(total)).min(bound)
    }

    fn nth_allowed(&self, mut rank: usize, bound: usize) -> Option<usize> {
        let mut start = 0;
        for (index, &end) in self.cumulative.iter().enumerate() {
            if !self.tried.contains(index) {
                let width = end - start;
                if rank < width {
                    let unit = start + rank;
                    return (unit < bound).then_some(unit);
                }
                rank -= width;
            }
            start = end;
        }
        None
    }
}
