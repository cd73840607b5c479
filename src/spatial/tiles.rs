//! Tile types and the catalog handed to the generator
//!
//! A tile type owns a fixed table of oriented edge layouts, one slot per
//! [`Orientation`]. Layouts for supported orientations are derived from the
//! base side lists or declared explicitly, and validated once when the tile
//! type is built.

use std::collections::HashSet;

use crate::io::error::{Result, TileMapError};
use crate::spatial::edges::{EdgeKind, EdgeRegistry};
use crate::spatial::orientation::{Orientation, OrientedSides, Side};

/// Index of a tile type in declaration order within its catalog
pub type TileId = usize;

/// Selection weight given to tile types that do not set one
pub const DEFAULT_TILE_WEIGHT: u32 = 1;

/// Immutable template for placed tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileType {
    name: String,
    width: usize,
    height: usize,
    weight: u32,
    layouts: [Option<OrientedSides>; Orientation::COUNT],
}

impl TileType {
    /// Start declaring a tile type
    pub fn builder(name: impl Into<String>) -> TileTypeBuilder {
        TileTypeBuilder::new(name)
    }

    /// Name used in errors and by catalog lookups
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared `(width, height)` before any orientation is applied
    pub const fn footprint(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Relative selection weight; zero-weight tiles are never chosen
    pub const fn weight(&self) -> u32 {
        self.weight
    }

    /// Edge layout under `orientation`, or `None` if it is not supported
    pub fn sides_under(&self, orientation: Orientation) -> Option<&OrientedSides> {
        self.layouts
            .get(orientation.index())
            .and_then(Option::as_ref)
    }

    /// Whether this tile may be placed under `orientation`
    pub fn supports(&self, orientation: Orientation) -> bool {
        self.sides_under(orientation).is_some()
    }

    /// Supported orientations in enumeration order
    pub fn orientations(&self) -> impl Iterator<Item = Orientation> + '_ {
        Orientation::ALL
            .into_iter()
            .filter(|&orientation| self.supports(orientation))
    }

    fn edges(&self) -> impl Iterator<Item = EdgeKind> + '_ {
        self.layouts
            .iter()
            .flatten()
            .flat_map(|layout| layout.edges())
    }
}

/// Declarative builder for [`TileType`]
///
/// Defaults to a 1x1 footprint, weight [`DEFAULT_TILE_WEIGHT`] and the
/// identity orientation only.
#[derive(Debug, Clone)]
#[must_use]
pub struct TileTypeBuilder {
    name: String,
    width: usize,
    height: usize,
    weight: u32,
    base: [Vec<EdgeKind>; 4],
    orientations: Vec<Orientation>,
    explicit: Vec<(Orientation, [Vec<EdgeKind>; 4])>,
}

impl TileTypeBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            width: 1,
            height: 1,
            weight: DEFAULT_TILE_WEIGHT,
            base: Default::default(),
            orientations: Vec::new(),
            explicit: Vec::new(),
        }
    }

    /// Footprint in grid units before orientation
    pub const fn footprint(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// One edge per side, for 1x1 tiles
    pub fn simple(self, north: EdgeKind, east: EdgeKind, south: EdgeKind, west: EdgeKind) -> Self {
        self.sides(vec![north], vec![east], vec![south], vec![west])
    }

    /// The same edge on every unit of every side
    pub fn uniform(self, edge: EdgeKind) -> Self {
        let (width, height) = (self.width, self.height);
        self.sides(
            vec![edge; width],
            vec![edge; height],
            vec![edge; width],
            vec![edge; height],
        )
    }

    /// Base side lists, each listed clockwise around the tile
    pub fn sides(
        mut self,
        north: Vec<EdgeKind>,
        east: Vec<EdgeKind>,
        south: Vec<EdgeKind>,
        west: Vec<EdgeKind>,
    ) -> Self {
        self.base = [north, east, south, west];
        self
    }

    /// Relative selection weight
    pub const fn weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Support `orientation`, deriving its layout from the base lists
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        if !self.orientations.contains(&orientation) {
            self.orientations.push(orientation);
        }
        self
    }

    /// Support each of `orientations`
    pub fn with_orientations(self, orientations: &[Orientation]) -> Self {
        orientations
            .iter()
            .fold(self, |builder, &orientation| builder.with_orientation(orientation))
    }

    /// Support the four unmirrored rotations
    pub fn with_all_rotations(self) -> Self {
        self.with_orientations(&Orientation::ROTATIONS)
    }

    /// Support all eight orientations
    pub fn with_all_orientations(self) -> Self {
        self.with_orientations(&Orientation::ALL)
    }

    /// Support `orientation` with hand-written side lists instead of derived ones
    ///
    /// The lists must match the footprint after `orientation` is applied.
    pub fn with_explicit_sides(
        mut self,
        orientation: Orientation,
        sides: [Vec<EdgeKind>; 4],
    ) -> Self {
        self.explicit.retain(|(existing, _)| *existing != orientation);
        self.explicit.push((orientation, sides));
        self
    }

    /// Validate the declaration and build the tile type
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The footprint has a zero dimension
    /// - A base or explicit side list does not match its footprint
    pub fn build(mut self) -> Result<TileType> {
        if self.width == 0 || self.height == 0 {
            return Err(TileMapError::EmptyFootprint { tile: self.name });
        }

        if self.orientations.is_empty() && self.explicit.is_empty() {
            self.orientations.push(Orientation::Identity);
        }

        let mut layouts: [Option<OrientedSides>; Orientation::COUNT] = Default::default();

        if !self.orientations.is_empty() {
            let base = OrientedSides::from_parts(self.width, self.height, self.base);
            check_lengths(&self.name, Orientation::Identity, &base)?;

            for orientation in self.orientations {
                if let Some(slot) = layouts.get_mut(orientation.index()) {
                    *slot = Some(base.derive(orientation));
                }
            }
        }

        for (orientation, sides) in self.explicit {
            let (width, height) = orientation.footprint(self.width, self.height);
            let layout = OrientedSides::from_parts(width, height, sides);
            check_lengths(&self.name, orientation, &layout)?;

            if let Some(slot) = layouts.get_mut(orientation.index()) {
                *slot = Some(layout);
            }
        }

        Ok(TileType {
            name: self.name,
            width: self.width,
            height: self.height,
            weight: self.weight,
            layouts,
        })
    }
}

fn check_lengths(tile: &str, orientation: Orientation, layout: &OrientedSides) -> Result<()> {
    layout
        .mismatched_side()
        .map_or(Ok(()), |(side, expected, found)| {
            Err(TileMapError::SideLengthMismatch {
                tile: tile.to_owned(),
                orientation,
                side,
                expected,
                found,
            })
        })
}

/// Immutable set of tile types together with the edge registry they use
#[derive(Debug, Clone)]
pub struct TileCatalog {
    registry: EdgeRegistry,
    tiles: Vec<TileType>,
}

impl TileCatalog {
    /// Assemble a catalog, checking names and edge kinds
    ///
    /// Declaration order is kept; it fixes candidate enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two tile types share a name
    /// - A tile type uses an edge kind the registry did not allocate
    pub fn new(registry: EdgeRegistry, tiles: Vec<TileType>) -> Result<Self> {
        let mut names = HashSet::with_capacity(tiles.len());
        for tile in &tiles {
            if !names.insert(tile.name()) {
                return Err(TileMapError::DuplicateTile {
                    name: tile.name().to_owned(),
                });
            }
            for edge in tile.edges() {
                registry.check(edge)?;
            }
        }

        Ok(Self { registry, tiles })
    }

    /// The compatibility relation tiles are matched against
    pub const fn registry(&self) -> &EdgeRegistry {
        &self.registry
    }

    /// All tile types in declaration order
    pub fn tiles(&self) -> &[TileType] {
        &self.tiles
    }

    /// Tile type by id
    pub fn get(&self, tile: TileId) -> Option<&TileType> {
        self.tiles.get(tile)
    }

    /// Id of the tile type named `name`
    pub fn find(&self, name: &str) -> Option<TileId> {
        self.tiles.iter().position(|tile| tile.name() == name)
    }

    /// Number of tile types
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog has no tile types
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Oriented layout for a placement of `tile` under `orientation`
    ///
    /// # Errors
    ///
    /// Returns an error if the tile id is out of range or the tile type does
    /// not support the orientation
    pub fn sides(&self, tile: TileId, orientation: Orientation) -> Result<&OrientedSides> {
        let tile_type = self.get(tile).ok_or(TileMapError::UnknownTile {
            index: tile,
            max_tiles: self.tiles.len(),
        })?;

        tile_type
            .sides_under(orientation)
            .ok_or_else(|| TileMapError::UnsupportedOrientation {
                tile: tile_type.name().to_owned(),
                orientation,
            })
    }

    /// Edge presented on `side` at `offset` by `tile` under `orientation`
    pub fn edge(
        &self,
        tile: TileId,
        orientation: Orientation,
        side: Side,
        offset: usize,
    ) -> Option<EdgeKind> {
        self.sides(tile, orientation)
            .ok()
            .and_then(|layout| layout.edge_at(side, offset))
    }
}
