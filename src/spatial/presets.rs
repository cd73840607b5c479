//! Ready-made catalogs for demos, tests and benchmarks

use crate::io::error::Result;
use crate::spatial::edges::EdgeRegistry;
use crate::spatial::orientation::Orientation;
use crate::spatial::tiles::{TileCatalog, TileType};

/// Pipe network tiles: empty, straight, corner, tee and cross
///
/// Every combination of north and west neighbors has a fitting tile, so any
/// grid can be filled without backtracking.
///
/// # Errors
///
/// Never fails for the built-in declarations; the `Result` mirrors
/// [`TileCatalog::new`]
pub fn pipes() -> Result<TileCatalog> {
    let mut registry = EdgeRegistry::new();
    let (void, _) = registry.allow_names("void", "void")?;
    let (pipe, _) = registry.allow_names("pipe", "pipe")?;

    let tiles = vec![
        TileType::builder("empty").uniform(void).weight(4).build()?,
        TileType::builder("straight")
            .simple(pipe, void, pipe, void)
            .with_orientations(&[Orientation::Identity, Orientation::Rotate90])
            .weight(3)
            .build()?,
        TileType::builder("corner")
            .simple(pipe, pipe, void, void)
            .with_all_rotations()
            .weight(2)
            .build()?,
        TileType::builder("tee")
            .simple(pipe, pipe, void, pipe)
            .with_all_rotations()
            .build()?,
        TileType::builder("cross").uniform(pipe).build()?,
    ];

    TileCatalog::new(registry, tiles)
}

/// Water, sand and grass with coast transitions and a 2x2 house
///
/// Sand meets every terrain, water never touches grass directly.
///
/// # Errors
///
/// Never fails for the built-in declarations; the `Result` mirrors
/// [`TileCatalog::new`]
pub fn terrain() -> Result<TileCatalog> {
    let mut registry = EdgeRegistry::new();
    let (water, sand) = registry.allow_names("water", "sand")?;
    let (_, grass) = registry.allow_names("sand", "grass")?;
    for kind in [water, sand, grass] {
        registry.allow(kind, kind)?;
    }

    let tiles = vec![
        TileType::builder("water").uniform(water).weight(6).build()?,
        TileType::builder("sand").uniform(sand).weight(2).build()?,
        TileType::builder("grass").uniform(grass).weight(6).build()?,
        TileType::builder("coast")
            .simple(water, sand, grass, sand)
            .with_all_rotations()
            .weight(2)
            .build()?,
        TileType::builder("house")
            .footprint(2, 2)
            .uniform(grass)
            .build()?,
    ];

    TileCatalog::new(registry, tiles)
}

/// A single tile whose edge has no compatible partner
///
/// Only a 1x1 grid can hold it; any larger grid is unsatisfiable.
///
/// # Errors
///
/// Never fails for the built-in declarations; the `Result` mirrors
/// [`TileCatalog::new`]
pub fn unsolvable() -> Result<TileCatalog> {
    let mut registry = EdgeRegistry::new();
    let lonely = registry.intern("lonely");

    let tiles = vec![TileType::builder("island").uniform(lonely).build()?];

    TileCatalog::new(registry, tiles)
}
