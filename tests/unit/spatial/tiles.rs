//! Tests for tile type declaration, validation and catalog lookups

#[cfg(test)]
mod tests {
    use edgeweave::spatial::tiles::DEFAULT_TILE_WEIGHT;
    use edgeweave::{EdgeKind, EdgeRegistry, Orientation, Side, TileCatalog, TileMapError, TileType};

    fn registry() -> (EdgeRegistry, EdgeKind, EdgeKind) {
        let mut registry = EdgeRegistry::new();
        let (road, _) = registry.allow_names("road", "road").expect("kinds are interned");
        let (grass, _) = registry.allow_names("grass", "grass").expect("kinds are interned");
        (registry, road, grass)
    }

    // Tests builder defaults: 1x1, default weight, identity only
    // Verified by defaulting to all rotations when none are declared
    #[test]
    fn test_builder_defaults() {
        let (_, road, _) = registry();
        let tile = TileType::builder("plain").uniform(road).build().expect("valid tile");

        assert_eq!(tile.name(), "plain");
        assert_eq!(tile.footprint(), (1, 1));
        assert_eq!(tile.weight(), DEFAULT_TILE_WEIGHT);
        assert_eq!(tile.orientations().collect::<Vec<_>>(), vec![Orientation::Identity]);
    }

    // Tests only declared orientations are supported
    // Verified by filling every layout slot in build
    #[test]
    fn test_orientation_subset() {
        let (_, road, grass) = registry();
        let tile = TileType::builder("straight")
            .simple(road, grass, road, grass)
            .with_orientations(&[Orientation::Identity, Orientation::Rotate90])
            .build()
            .expect("valid tile");

        assert!(tile.supports(Orientation::Rotate90));
        assert!(!tile.supports(Orientation::Rotate180));
        assert!(tile.sides_under(Orientation::Mirror).is_none());
        assert_eq!(
            tile.sides_under(Orientation::Rotate90)
                .and_then(|layout| layout.edge_at(Side::North, 0)),
            Some(grass)
        );
    }

    // Tests empty footprints and mismatched side lists are rejected
    // Verified by skipping check_lengths on the base layout
    #[test]
    fn test_invalid_declarations() {
        let (_, road, _) = registry();

        assert!(matches!(
            TileType::builder("flat").footprint(0, 1).build(),
            Err(TileMapError::EmptyFootprint { .. })
        ));
        assert!(matches!(
            TileType::builder("wide")
                .footprint(2, 1)
                .simple(road, road, road, road)
                .build(),
            Err(TileMapError::SideLengthMismatch {
                side: Side::North,
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    // Tests explicit lists override derivation and are checked against the oriented footprint
    // Verified by validating explicit lists against the unrotated footprint
    #[test]
    fn test_explicit_sides() {
        let (_, road, grass) = registry();
        let tile = TileType::builder("bridge")
            .footprint(2, 1)
            .uniform(road)
            .with_explicit_sides(
                Orientation::Rotate90,
                [vec![grass], vec![road, road], vec![grass], vec![road, road]],
            )
            .build()
            .expect("explicit lists fit the turned footprint");

        let turned = tile.sides_under(Orientation::Rotate90);
        assert_eq!(turned.map(|layout| (layout.width(), layout.height())), Some((1, 2)));
        assert_eq!(turned.and_then(|layout| layout.edge_at(Side::North, 0)), Some(grass));

        let wrong = TileType::builder("bridge")
            .footprint(2, 1)
            .uniform(road)
            .with_explicit_sides(
                Orientation::Rotate90,
                [vec![grass, grass], vec![road], vec![grass, grass], vec![road]],
            )
            .build();
        assert!(matches!(
            wrong,
            Err(TileMapError::SideLengthMismatch {
                orientation: Orientation::Rotate90,
                ..
            })
        ));
    }

    // Tests the catalog rejects duplicate names and foreign edge kinds
    // Verified by removing the name set from TileCatalog::new
    #[test]
    fn test_catalog_validation() {
        let (registry, road, _) = registry();
        let twice = vec![
            TileType::builder("road").uniform(road).build().expect("valid tile"),
            TileType::builder("road").uniform(road).build().expect("valid tile"),
        ];
        assert!(matches!(
            TileCatalog::new(registry.clone(), twice),
            Err(TileMapError::DuplicateTile { .. })
        ));

        let foreign = TileType::builder("ghost")
            .uniform(EdgeKind::from_index(9))
            .build()
            .expect("valid tile");
        assert!(matches!(
            TileCatalog::new(registry, vec![foreign]),
            Err(TileMapError::UnknownEdge { edge: 9, .. })
        ));
    }

    // Tests catalog lookups by id, name and orientation
    // Verified by returning the first tile from find regardless of name
    #[test]
    fn test_catalog_lookups() {
        let (registry, road, grass) = registry();
        let tiles = vec![
            TileType::builder("road").uniform(road).build().expect("valid tile"),
            TileType::builder("field").uniform(grass).weight(5).build().expect("valid tile"),
        ];
        let catalog = TileCatalog::new(registry, tiles).expect("valid catalog");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("field"), Some(1));
        assert_eq!(catalog.get(1).map(TileType::weight), Some(5));
        assert_eq!(catalog.edge(1, Orientation::Identity, Side::West, 0), Some(grass));
        assert!(matches!(
            catalog.sides(1, Orientation::Rotate90),
            Err(TileMapError::UnsupportedOrientation { .. })
        ));
        assert!(matches!(
            catalog.sides(2, Orientation::Identity),
            Err(TileMapError::UnknownTile {
                index: 2,
                max_tiles: 2,
            })
        ));
    }
}
