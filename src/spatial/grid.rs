//! Map grid of placed tile instances
//!
//! Cells live in a row-major `Array2` holding the arena id of their occupant.
//! A multi-cell instance is stored once in the arena and referenced by every
//! cell of its footprint, so placing and removing touch only that footprint.

use ndarray::Array2;

use crate::algorithm::executor::GenerationStats;
use crate::io::error::{Result, TileMapError};
use crate::spatial::edges::EdgeKind;
use crate::spatial::orientation::{Orientation, Side};
use crate::spatial::tiles::{TileCatalog, TileId, TileType};

/// Grid coordinates as `[row, col]`, row 0 along the north edge
pub type Position = [usize; 2];

/// Arena slot of a placed instance
pub type InstanceId = usize;

/// A tile type placed at an anchor under one orientation
///
/// The anchor is the north-west cell of the oriented footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileInstance {
    /// Tile type in the grid's catalog
    pub tile: TileId,
    /// Transform applied to the tile type's edges
    pub orientation: Orientation,
    /// North-west cell of the footprint
    pub anchor: Position,
}

impl TileInstance {
    /// Describe a placement
    pub const fn new(tile: TileId, orientation: Orientation, anchor: Position) -> Self {
        Self {
            tile,
            orientation,
            anchor,
        }
    }
}

/// Mutable surface of placed instances with O(1) occupancy lookups
#[derive(Debug, Clone)]
pub struct MapGrid<'c> {
    catalog: &'c TileCatalog,
    cells: Array2<Option<InstanceId>>,
    instances: Vec<Option<TileInstance>>,
    vacant: Vec<InstanceId>,
    filled: usize,
}

impl<'c> MapGrid<'c> {
    /// Create an empty `width x height` grid for tiles from `catalog`
    pub fn new(catalog: &'c TileCatalog, width: usize, height: usize) -> Self {
        Self {
            catalog,
            cells: Array2::from_elem((height, width), None),
            instances: Vec::new(),
            vacant: Vec::new(),
            filled: 0,
        }
    }

    /// Catalog the placed tile ids refer to
    pub const fn catalog(&self) -> &'c TileCatalog {
        self.catalog
    }
}

impl MapGrid<'_> {
    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Whether `position` lies on the grid
    pub fn contains(&self, position: Position) -> bool {
        position[0] < self.height() && position[1] < self.width()
    }

    /// Number of filled cells
    pub const fn filled_cells(&self) -> usize {
        self.filled
    }

    /// True when every cell is filled
    pub fn is_complete(&self) -> bool {
        self.filled == self.cells.len()
    }

    /// Occupant id of `position`, `None` if empty or off-grid
    pub fn occupant(&self, position: Position) -> Option<InstanceId> {
        self.cells.get(position).copied().flatten()
    }

    /// Placed instance by id
    pub fn instance(&self, id: InstanceId) -> Option<&TileInstance> {
        self.instances.get(id).and_then(Option::as_ref)
    }

    /// Instance covering `position`
    pub fn instance_at(&self, position: Position) -> Option<&TileInstance> {
        self.occupant(position).and_then(|id| self.instance(id))
    }

    /// Every placed instance with its id, in arena order
    pub fn instances(&self) -> impl Iterator<Item = (InstanceId, &TileInstance)> + '_ {
        self.instances
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|instance| (id, instance)))
    }

    /// Number of placed instances
    pub const fn instance_count(&self) -> usize {
        self.instances.len() - self.vacant.len()
    }

    /// Oriented `(width, height)` of an instance's footprint
    ///
    /// # Errors
    ///
    /// Returns an error if the tile or orientation is unknown to the catalog
    pub fn footprint(&self, instance: &TileInstance) -> Result<(usize, usize)> {
        let layout = self.catalog.sides(instance.tile, instance.orientation)?;
        Ok((layout.width(), layout.height()))
    }

    /// Whether a `width x height` block anchored at `anchor` is on the grid and empty
    pub fn region_is_free(&self, anchor: Position, width: usize, height: usize) -> bool {
        let (Some(row_end), Some(col_end)) =
            (anchor[0].checked_add(height), anchor[1].checked_add(width))
        else {
            return false;
        };
        if row_end > self.height() || col_end > self.width() {
            return false;
        }

        (anchor[0]..row_end)
            .all(|row| (anchor[1]..col_end).all(|col| self.occupant([row, col]).is_none()))
    }

    /// Place `instance`, filling every cell of its footprint
    ///
    /// Nothing is modified when the placement is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile or orientation is unknown to the catalog
    /// - Any footprint cell is off the grid
    /// - Any footprint cell is already filled
    pub fn place(&mut self, instance: TileInstance) -> Result<InstanceId> {
        let (width, height) = self.footprint(&instance)?;
        let [row, col] = instance.anchor;
        let far = [
            row.saturating_add(height.saturating_sub(1)),
            col.saturating_add(width.saturating_sub(1)),
        ];
        if !self.contains(far) {
            return Err(TileMapError::OutOfBounds {
                position: far,
                dimensions: self.dimensions(),
            });
        }

        for r in row..row + height {
            for c in col..col + width {
                if self.occupant([r, c]).is_some() {
                    return Err(TileMapError::CellOccupied { position: [r, c] });
                }
            }
        }

        let id = self.vacant.pop().unwrap_or(self.instances.len());
        if id == self.instances.len() {
            self.instances.push(None);
        }
        if let Some(slot) = self.instances.get_mut(id) {
            *slot = Some(instance);
        }

        self.fill_footprint(instance.anchor, width, height, Some(id));
        self.filled += width * height;
        Ok(id)
    }

    /// Remove a placed instance, clearing its footprint
    ///
    /// # Errors
    ///
    /// Returns `InstanceNotPlaced` if `id` holds no placement
    pub fn remove(&mut self, id: InstanceId) -> Result<TileInstance> {
        let instance = *self
            .instance(id)
            .ok_or(TileMapError::InstanceNotPlaced { id })?;
        let (width, height) = self.footprint(&instance)?;

        if let Some(slot) = self.instances.get_mut(id) {
            *slot = None;
        }
        self.vacant.push(id);
        self.fill_footprint(instance.anchor, width, height, None);
        self.filled -= width * height;
        Ok(instance)
    }

    fn fill_footprint(
        &mut self,
        anchor: Position,
        width: usize,
        height: usize,
        value: Option<InstanceId>,
    ) {
        for row in anchor[0]..anchor[0] + height {
            for col in anchor[1]..anchor[1] + width {
                if let Some(cell) = self.cells.get_mut([row, col]) {
                    *cell = value;
                }
            }
        }
    }

    /// Edge the occupant of `position` presents on `side`
    ///
    /// `None` if the cell is empty or if `side` of this cell is interior to
    /// its occupant's footprint.
    pub fn edge_facing(&self, position: Position, side: Side) -> Option<EdgeKind> {
        let instance = self.instance_at(position)?;
        let layout = self
            .catalog
            .sides(instance.tile, instance.orientation)
            .ok()?;
        let row = position[0].checked_sub(instance.anchor[0])?;
        let col = position[1].checked_sub(instance.anchor[1])?;

        let on_border = match side {
            Side::North => row == 0,
            Side::East => col + 1 == layout.width(),
            Side::South => row + 1 == layout.height(),
            Side::West => col == 0,
        };
        if !on_border {
            return None;
        }

        let offset = match side {
            Side::North | Side::South => col,
            Side::East | Side::West => row,
        };
        layout.edge_at(side, offset)
    }

    /// Edge presented towards `position` by whatever occupies the cell across `side`
    ///
    /// `None` ("open") when that cell is off-grid or empty.
    pub fn neighbor_edge(&self, position: Position, side: Side) -> Option<EdgeKind> {
        let neighbor = side.step(position)?;
        self.edge_facing(neighbor, side.opposite())
    }

    /// First empty cell at or after `start` in row-major order
    pub fn first_empty_from(&self, start: Position) -> Option<Position> {
        let width = self.width();
        let skip = start[0].saturating_mul(width).saturating_add(start[1]);
        self.cells
            .iter()
            .skip(skip)
            .position(Option::is_none)
            .map(|index| {
                let linear = skip + index;
                [linear / width, linear % width]
            })
    }

    /// Adjacent cell pairs owned by different instances whose facing edges are
    /// incompatible, as `(cell, side)` with `side` pointing at the neighbor
    pub fn adjacency_violations(&self) -> Vec<(Position, Side)> {
        let registry = self.catalog.registry();
        let mut violations = Vec::new();

        for ((row, col), occupant) in self.cells.indexed_iter() {
            let Some(id) = *occupant else {
                continue;
            };
            for side in [Side::East, Side::South] {
                let Some(neighbor) = side.step([row, col]) else {
                    continue;
                };
                if self.occupant(neighbor).is_none_or(|other| other == id) {
                    continue;
                }

                let compatible = match (
                    self.edge_facing([row, col], side),
                    self.edge_facing(neighbor, side.opposite()),
                ) {
                    (Some(mine), Some(theirs)) => registry.compatible(mine, theirs),
                    _ => false,
                };
                if !compatible {
                    violations.push(([row, col], side));
                }
            }
        }

        violations
    }

    /// Count of placed instances per tile type, indexed by tile id
    pub fn tile_tally(&self) -> Vec<usize> {
        let mut tally = vec![0; self.catalog.len()];
        for (_, instance) in self.instances() {
            if let Some(count) = tally.get_mut(instance.tile) {
                *count += 1;
            }
        }
        tally
    }
}

/// A grid with every cell filled and every adjacency valid
///
/// Only the generator builds these; renderers read occupancy and orientation
/// through it.
#[derive(Debug, Clone)]
pub struct CompletedGrid<'c> {
    grid: MapGrid<'c>,
    stats: GenerationStats,
}

impl<'c> CompletedGrid<'c> {
    pub(crate) const fn new(grid: MapGrid<'c>, stats: GenerationStats) -> Self {
        Self { grid, stats }
    }

    /// Release the underlying grid
    pub fn into_grid(self) -> MapGrid<'c> {
        self.grid
    }

    /// Catalog the placed tile ids refer to
    pub const fn catalog(&self) -> &'c TileCatalog {
        self.grid.catalog()
    }

    /// Read access to the full grid
    pub const fn grid(&self) -> &MapGrid<'c> {
        &self.grid
    }
}

impl CompletedGrid<'_> {
    /// Number of columns
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Instance covering `position`, `None` only off-grid
    pub fn instance_at(&self, position: Position) -> Option<&TileInstance> {
        self.grid.instance_at(position)
    }

    /// Tile type covering `position`
    pub fn tile_at(&self, position: Position) -> Option<&TileType> {
        self.instance_at(position)
            .and_then(|instance| self.grid.catalog().get(instance.tile))
    }

    /// Every placed instance with its id
    pub fn instances(&self) -> impl Iterator<Item = (InstanceId, &TileInstance)> + '_ {
        self.grid.instances()
    }

    /// Counters collected during the run
    pub const fn stats(&self) -> &GenerationStats {
        &self.stats
    }
}
