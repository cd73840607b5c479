//! Tests for the generation engine, its configuration and run statistics

#[cfg(test)]
mod tests {
    use edgeweave::io::configuration::GenerationConfig;
    use edgeweave::io::prefill::Prefill;
    use edgeweave::spatial::presets::{pipes, terrain};
    use edgeweave::{
        EdgeRegistry, GenerationFailure, Generator, Orientation, SeededRandom, TileCatalog,
        TileInstance, TileMapError, TileType, generate,
    };
    use std::time::{Duration, Instant};

    /// Tile 0 leaves a dead end to its east, tile 1 fits anywhere
    fn dead_end_catalog() -> TileCatalog {
        let mut registry = EdgeRegistry::new();
        let (path, _) = registry.allow_names("path", "path").expect("kinds are interned");
        let cliff = registry.intern("cliff");
        let tiles = vec![
            TileType::builder("ledge").simple(path, cliff, path, path).build().expect("valid tile"),
            TileType::builder("path").uniform(path).build().expect("valid tile"),
        ];
        TileCatalog::new(registry, tiles).expect("valid catalog")
    }

    // Tests a run fills every cell and reports consistent statistics
    // Verified by skipping the tile tally when building the stats
    #[test]
    fn test_run_completes_and_counts() {
        let catalog = terrain().expect("built-in catalog");
        let map = Generator::new(&catalog).run(8, 6).expect("terrain always fits");

        assert_eq!((map.width(), map.height()), (8, 6));
        assert!(map.grid().is_complete());
        let stats = map.stats();
        assert_eq!(stats.tile_tally.iter().sum::<usize>(), map.instances().count());
        assert!(stats.placements >= map.instances().count());
        assert_eq!(stats.prefilled, 0);

        let grid = map.into_grid();
        assert!(grid.is_complete());
        assert_eq!(grid.dimensions(), (6, 8));
    }

    // Tests the configured seed drives the built-in source
    // Verified by seeding SeededRandom with a constant in run
    #[test]
    fn test_seed_changes_output() {
        let catalog = pipes().expect("built-in catalog");
        let layout = |seed| {
            let config = GenerationConfig::default().with_seed(seed);
            Generator::new(&catalog)
                .with_config(config)
                .run(10, 10)
                .map(|map| map.instances().map(|(_, instance)| *instance).collect::<Vec<_>>())
        };

        assert_eq!(layout(5), layout(5));
        assert_ne!(layout(5), layout(6));
    }

    // Tests invalid dimensions fail before any search
    // Verified by removing the dimension validation from the engine
    #[test]
    fn test_invalid_dimensions() {
        let catalog = pipes().expect("built-in catalog");
        let mut source = SeededRandom::new(0);

        assert!(matches!(
            generate(0, 3, &catalog, &mut source, 10),
            Err(GenerationFailure::Invalid(TileMapError::InvalidParameter { .. }))
        ));
    }

    // Tests prefilled instances stay put and are counted separately
    // Verified by pushing prefilled placements onto the ledger
    #[test]
    fn test_prefill_survives() {
        let catalog = dead_end_catalog();
        let ledge = TileInstance::new(0, Orientation::Identity, [0, 0]);
        let generator = Generator::new(&catalog).with_prefill(Prefill::new().with(ledge));

        // Nothing fits east of a prefilled ledge, and the ledge itself cannot be undone
        assert!(matches!(
            generator.run(2, 1),
            Err(GenerationFailure::Unsatisfiable { .. })
        ));

        let map = generator.run(1, 2).expect("a path fits below the ledge");
        assert_eq!(map.instance_at([0, 0]), Some(&ledge));
        assert_eq!(map.stats().prefilled, 1);
        assert_eq!(map.stats().tile_tally.iter().sum::<usize>(), 2);
    }

    // Tests a dead end is escaped by backtracking within the budget
    // Verified by skipping the mark-tried step when undoing a placement
    #[test]
    fn test_backtracks_out_of_dead_end() {
        let catalog = dead_end_catalog();
        let config = GenerationConfig::default().with_max_backtrack_steps(1_000);

        for seed in 0..20 {
            let map = Generator::new(&catalog)
                .with_config(config.with_seed(seed))
                .run(4, 1)
                .expect("paths fill a row");
            assert!(map.grid().adjacency_violations().is_empty());
            // A ledge can only close the row
            assert!((0..3).all(|col| map.tile_at([0, col]).map(TileType::name) == Some("path")));
        }
    }

    // Tests undoing a placement with an enormous weight stays fast
    // Verified by ranking the fallback draw unit by unit
    #[test]
    fn test_heavy_weight_backtrack_is_fast() {
        let mut registry = EdgeRegistry::new();
        let (path, _) = registry.allow_names("path", "path").expect("kinds are interned");
        let cliff = registry.intern("cliff");
        let tiles = vec![
            TileType::builder("ledge")
                .simple(path, cliff, path, path)
                .weight(u32::MAX)
                .build()
                .expect("valid tile"),
            TileType::builder("path").uniform(path).build().expect("valid tile"),
        ];
        let catalog = TileCatalog::new(registry, tiles).expect("valid catalog");
        let mut source = SeededRandom::new(1);

        let started = Instant::now();
        let map = generate(2, 1, &catalog, &mut source, 10).expect("path then ledge fits");
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(map.tile_at([0, 0]).map(TileType::name), Some("path"));
        assert!(map.grid().adjacency_violations().is_empty());
    }
}
