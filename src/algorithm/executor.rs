use log::{debug, info, trace, warn};

use crate::{
    algorithm::{
        backtrack::{BacktrackLedger, BacktrackOutcome, CellState, Frame},
        selection::{WeightedCandidates, enumerate_candidates},
    },
    io::{
        configuration::{GenerationConfig, validate_dimensions},
        error::{GenerationFailure, RandomError},
        prefill::Prefill,
    },
    math::random::{RandomSource, SeededRandom},
    spatial::{
        grid::{CompletedGrid, MapGrid, Position, TileInstance},
        tiles::TileCatalog,
    },
};

/// Counters describing how a completed map was reached
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Placements made by the search, including ones later undone
    pub placements: usize,
    /// Backtrack steps taken
    pub backtracks: usize,
    /// Instances fixed by the prefill
    pub prefilled: usize,
    /// Instances of each tile type on the final map, indexed by tile id
    pub tile_tally: Vec<usize>,
}

/// Tile map generator over one catalog
///
/// Visits cells in row-major order, placing a weighted random candidate at
/// the first empty cell and backtracking through the ledger when a cell has
/// nothing left to try. The grid and ledger are locals of each run, so one
/// generator can serve any number of independent runs.
#[derive(Debug, Clone)]
pub struct Generator<'c> {
    catalog: &'c TileCatalog,
    config: GenerationConfig,
    prefill: Prefill,
}

impl<'c> Generator<'c> {
    /// Create a generator with the default configuration and no prefill
    pub fn new(catalog: &'c TileCatalog) -> Self {
        Self {
            catalog,
            config: GenerationConfig::default(),
            prefill: Prefill::new(),
        }
    }

    /// Replace the run configuration
    #[must_use]
    pub const fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix placements that every generated map must contain
    #[must_use]
    pub fn with_prefill(mut self, prefill: Prefill) -> Self {
        self.prefill = prefill;
        self
    }

    /// Active configuration
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Generate a map using a [`SeededRandom`] built from the configured seed
    ///
    /// # Errors
    ///
    /// See [`Generator::run_with`]
    pub fn run(&self, width: usize, height: usize) -> Result<CompletedGrid<'c>, GenerationFailure> {
        let mut source = SeededRandom::new(self.config.seed);
        self.run_with(width, height, &mut source)
    }

    /// Generate a `width x height` map drawing from `source`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The dimensions or prefill are invalid
    /// - No valid map exists (`Unsatisfiable`)
    /// - The backtrack budget runs out (`BudgetExceeded`)
    /// - The random source breaks its contract
    pub fn run_with(
        &self,
        width: usize,
        height: usize,
        source: &mut dyn RandomSource,
    ) -> Result<CompletedGrid<'c>, GenerationFailure> {
        let result = self.search(width, height, source);

        if let Ok(map) = &result {
            let stats = map.stats();
            info!(
                "Generated {width}x{height} map: {} placements, {} backtracks",
                stats.placements, stats.backtracks
            );
        }
        if let Err(failure) = &result {
            warn!("Generation of {width}x{height} map failed: {failure}");
        }

        result
    }

    fn search(
        &self,
        width: usize,
        height: usize,
        source: &mut dyn RandomSource,
    ) -> Result<CompletedGrid<'c>, GenerationFailure> {
        validate_dimensions(width, height)?;

        let mut grid = MapGrid::new(self.catalog, width, height);
        let prefilled = self.prefill.apply(&mut grid)?;
        let mut ledger = BacktrackLedger::with_budget(self.config.max_backtrack_steps);
        let mut placements = 0;
        let mut cursor = [0, 0];

        while let Some(cell) = grid.first_empty_from(cursor) {
            let candidates = WeightedCandidates::new(enumerate_candidates(&grid, cell));
            ledger.push(Frame::new(cell, candidates));
            cursor = settle(&mut ledger, &mut grid, source, &mut placements)?;
        }

        let stats = GenerationStats {
            placements,
            backtracks: ledger.steps(),
            prefilled: prefilled.len(),
            tile_tally: grid.tile_tally(),
        };
        Ok(CompletedGrid::new(grid, stats))
    }
}

/// Place a candidate at the top frame, backtracking as far as needed
///
/// A frame still `TryingCandidate` draws and places; an exhausted frame is
/// dropped and its predecessor reopened.
///
/// Returns the cell that received the placement, which is where the scan for
/// the next empty cell resumes.
fn settle(
    ledger: &mut BacktrackLedger,
    grid: &mut MapGrid<'_>,
    source: &mut dyn RandomSource,
    placements: &mut usize,
) -> Result<Position, GenerationFailure> {
    loop {
        let Some(frame) = ledger.top_mut() else {
            return Err(unsatisfiable(grid, 0));
        };

        match frame.state() {
            CellState::Placed => return Ok(frame.cell),
            CellState::TryingCandidate => {
                let index = frame
                    .candidates
                    .choose(&frame.tried, source)?
                    .ok_or_else(|| RandomError::Exhausted {
                        bound: frame.candidates.total_weight(),
                        excluded: frame.candidates.total_weight(),
                    })?;
                let candidate = frame.candidates.get(index).copied().ok_or_else(|| {
                    RandomError::ContractViolation {
                        value: index,
                        bound: frame.candidates.len(),
                    }
                })?;
                let instance = TileInstance::new(candidate.tile, candidate.orientation, frame.cell);
                let id = grid.place(instance)?;
                frame.placed = Some((index, id));
                *placements += 1;
                trace!(
                    "Placed tile {} ({}) at {:?}",
                    candidate.tile, candidate.orientation, frame.cell
                );
                return Ok(frame.cell);
            }
            CellState::Unvisited | CellState::ExhaustedBacktrack => {}
        }

        let dead_end = frame.cell;
        match ledger.backtrack(grid)? {
            BacktrackOutcome::Retry { cell } => {
                debug!(
                    "No candidates left at {dead_end:?}; retrying {cell:?} (step {})",
                    ledger.steps()
                );
            }
            BacktrackOutcome::Exhausted => return Err(unsatisfiable(grid, ledger.steps())),
            BacktrackOutcome::BudgetExceeded { steps } => {
                return Err(GenerationFailure::BudgetExceeded {
                    budget: steps,
                    placements: *placements,
                });
            }
        }
    }
}

fn unsatisfiable(grid: &MapGrid<'_>, backtracks: usize) -> GenerationFailure {
    GenerationFailure::Unsatisfiable {
        dimensions: grid.dimensions(),
        backtracks,
    }
}

/// Fill a `width x height` grid from `catalog`, drawing from `source`
///
/// Equivalent to a [`Generator`] with default settings and the given budget.
///
/// # Errors
///
/// Returns `Unsatisfiable` when no valid map exists, `BudgetExceeded` when
/// more than `max_backtrack_steps` undo steps would be needed, and
/// `RandomSource` when the source breaks its contract
pub fn generate<'c>(
    width: usize,
    height: usize,
    catalog: &'c TileCatalog,
    source: &mut dyn RandomSource,
    max_backtrack_steps: usize,
) -> Result<CompletedGrid<'c>, GenerationFailure> {
    let config = GenerationConfig::default().with_max_backtrack_steps(max_backtrack_steps);
    Generator::new(catalog)
        .with_config(config)
        .run_with(width, height, source)
}
