//! Tests for the backtracking ledger and per-cell search state

#[cfg(test)]
mod tests {
    use edgeweave::algorithm::backtrack::{BacktrackLedger, BacktrackOutcome, CellState, Frame};
    use edgeweave::algorithm::selection::{WeightedCandidates, enumerate_candidates};
    use edgeweave::{EdgeRegistry, MapGrid, TileCatalog, TileInstance, TileType};

    fn catalog() -> TileCatalog {
        let mut registry = EdgeRegistry::new();
        let (dirt, _) = registry.allow_names("dirt", "dirt").expect("kinds are interned");
        let tiles = vec![
            TileType::builder("dirt").uniform(dirt).build().expect("valid tile"),
            TileType::builder("mud").uniform(dirt).build().expect("valid tile"),
        ];
        TileCatalog::new(registry, tiles).expect("valid catalog")
    }

    /// Open a frame at `cell` and place its first candidate
    fn decide(ledger: &mut BacktrackLedger, grid: &mut MapGrid<'_>, cell: [usize; 2]) {
        let candidates = WeightedCandidates::new(enumerate_candidates(grid, cell));
        let mut frame = Frame::new(cell, candidates);
        if let Some(first) = frame.candidates.get(0).copied() {
            let id = grid
                .place(TileInstance::new(first.tile, first.orientation, cell))
                .expect("candidate fits");
            frame.placed = Some((0, id));
        }
        ledger.push(frame);
    }

    // Tests frames report their state as the search moves through them
    // Verified by reporting Placed for frames without a placement
    #[test]
    fn test_cell_states() {
        let catalog = catalog();
        let mut grid = MapGrid::new(&catalog, 2, 1);
        let mut ledger = BacktrackLedger::with_budget(5);

        assert_eq!(ledger.state_of([0, 0]), CellState::Unvisited);
        decide(&mut ledger, &mut grid, [0, 0]);
        assert_eq!(ledger.state_of([0, 0]), CellState::Placed);

        let open = Frame::new([0, 1], WeightedCandidates::new(enumerate_candidates(&grid, [0, 1])));
        assert_eq!(open.state(), CellState::TryingCandidate);
        let dead = Frame::new([0, 1], WeightedCandidates::new(Vec::new()));
        assert_eq!(dead.state(), CellState::ExhaustedBacktrack);
    }

    // Tests a backtrack undoes the predecessor and marks its candidate tried
    // Verified by leaving the predecessor's instance on the grid
    #[test]
    fn test_backtrack_undoes_predecessor() {
        let catalog = catalog();
        let mut grid = MapGrid::new(&catalog, 2, 1);
        let mut ledger = BacktrackLedger::with_budget(5);
        decide(&mut ledger, &mut grid, [0, 0]);
        ledger.push(Frame::new([0, 1], WeightedCandidates::new(Vec::new())));

        let outcome = ledger.backtrack(&mut grid).expect("predecessor is placed");

        assert_eq!(outcome, BacktrackOutcome::Retry { cell: [0, 0] });
        assert_eq!(ledger.steps(), 1);
        assert_eq!(ledger.depth(), 1);
        assert_eq!(grid.filled_cells(), 0);
        let top = ledger.top().expect("predecessor frame stays open");
        assert!(top.placed.is_none());
        assert!(top.tried.contains(0));
        assert_eq!(top.state(), CellState::TryingCandidate);
    }

    // Tests dropping the first frame exhausts the search without spending a step
    // Verified by counting the pop of the first frame as a step
    #[test]
    fn test_first_frame_exhausts() {
        let catalog = catalog();
        let mut grid = MapGrid::new(&catalog, 1, 1);
        let mut ledger = BacktrackLedger::with_budget(0);
        ledger.push(Frame::new([0, 0], WeightedCandidates::new(Vec::new())));

        assert_eq!(ledger.backtrack(&mut grid).ok(), Some(BacktrackOutcome::Exhausted));
        assert_eq!(ledger.steps(), 0);
        assert_eq!(ledger.depth(), 0);
    }

    // Tests the step that would exceed the budget is refused
    // Verified by comparing steps > budget instead of >=
    #[test]
    fn test_budget_enforced() {
        let catalog = catalog();
        let mut grid = MapGrid::new(&catalog, 2, 1);
        let mut ledger = BacktrackLedger::with_budget(0);
        decide(&mut ledger, &mut grid, [0, 0]);
        ledger.push(Frame::new([0, 1], WeightedCandidates::new(Vec::new())));

        assert_eq!(
            ledger.backtrack(&mut grid).ok(),
            Some(BacktrackOutcome::BudgetExceeded { steps: 0 })
        );
        assert_eq!(ledger.budget(), 0);
        assert_eq!(grid.filled_cells(), 1);
    }
}
