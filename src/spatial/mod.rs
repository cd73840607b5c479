//! Spatial data model for tile map generation
//!
//! This module contains:
//! - Edge kinds and their compatibility relation
//! - Sides and orientation transforms
//! - Tile types and the catalog that owns them
//! - The map grid of placed tile instances

/// Edge kinds and the compatibility registry
pub mod edges;
/// Map grid, tile instances and completed maps
pub mod grid;
/// Sides, orientations and oriented edge layouts
pub mod orientation;
/// Ready-made catalogs for tests, benchmarks and demos
pub mod presets;
/// Tile types, their builder and the tile catalog
pub mod tiles;

pub use edges::{EdgeKind, EdgeRegistry};
pub use grid::{CompletedGrid, MapGrid, TileInstance};
pub use orientation::{Orientation, OrientedSides, Side};
pub use tiles::{TileCatalog, TileType};
