//! Edge-matched tile map generation with weighted random selection and backtracking
//!
//! A catalog of tile types declares, for every supported orientation, which edge
//! kind each side presents. The generator fills a fixed-size grid in row-major
//! order, only placing tiles whose edges are compatible with every neighbor
//! already on the map, and undoes placements when a cell runs out of candidates.

#![forbid(unsafe_code)]

/// Candidate selection, the backtracking ledger and the generation engine
pub mod algorithm;
/// Errors, configuration and caller-fixed placements
pub mod io;
/// Random sources and weighted index lookup
pub mod math;
/// Edge kinds, orientations, tile types and the map grid
pub mod spatial;

pub use algorithm::executor::{GenerationStats, Generator, generate};
pub use io::error::{GenerationFailure, RandomError, Result, TileMapError};
pub use math::random::{Exclusion, RandomSource, SeededRandom};
pub use spatial::{
    CompletedGrid, EdgeKind, EdgeRegistry, MapGrid, Orientation, Side, TileCatalog, TileInstance,
    TileType,
};
