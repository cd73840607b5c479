use crate::{
    algorithm::{bitset::CandidateSet, selection::WeightedCandidates},
    io::error::Result,
    spatial::grid::{InstanceId, MapGrid, Position},
};

/// Progress of a single cell during a generation run
///
/// The search decides what to do with the top frame from its state: draw
/// while `TryingCandidate`, backtrack once `ExhaustedBacktrack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// No frame exists for the cell
    Unvisited,
    /// The cell's frame is deciding and has untried candidates left
    TryingCandidate,
    /// A candidate from the cell's frame is on the grid
    Placed,
    /// Every candidate has been tried; the frame is about to be dropped
    ExhaustedBacktrack,
}

/// One decided (or deciding) cell on the ledger
#[derive(Debug, Clone)]
pub struct Frame {
    /// Cell the frame decides
    pub cell: Position,
    /// Candidates enumerated when the frame was opened
    pub candidates: WeightedCandidates,
    /// Candidates rejected at this cell so far
    pub tried: CandidateSet,
    /// Candidate index and instance id of the current placement
    pub placed: Option<(usize, InstanceId)>,
}

impl Frame {
    /// Open a frame for `cell` with no candidates tried
    pub fn new(cell: Position, candidates: WeightedCandidates) -> Self {
        let tried = CandidateSet::new(candidates.len());
        Self {
            cell,
            candidates,
            tried,
            placed: None,
        }
    }

    /// Where this frame stands
    pub fn state(&self) -> CellState {
        if self.placed.is_some() {
            CellState::Placed
        } else if self.candidates.remaining_weight(&self.tried) == 0 {
            CellState::ExhaustedBacktrack
        } else {
            CellState::TryingCandidate
        }
    }
}

/// Result of undoing one level of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BacktrackOutcome {
    /// The predecessor's placement was undone and it should choose again
    Retry {
        /// Cell of the predecessor frame
        cell: Position,
    },
    /// The first frame ran out of candidates
    Exhausted,
    /// Undoing another placement would exceed the step budget
    BudgetExceeded {
        /// Steps taken when the budget was hit
        steps: usize,
    },
}

/// Ordered stack of frames recording every open decision of a run
///
/// Placements are pushed as they happen and undone in reverse, so the grid
/// under any frame is exactly the grid that frame's candidates were
/// enumerated against.
#[derive(Debug, Clone)]
pub struct BacktrackLedger {
    frames: Vec<Frame>,
    steps: usize,
    budget: usize,
}

impl BacktrackLedger {
    /// Create an empty ledger allowing at most `budget` backtrack steps
    pub const fn with_budget(budget: usize) -> Self {
        Self {
            frames: Vec::new(),
            steps: 0,
            budget,
        }
    }

    /// Open a frame on top of the stack
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// The frame currently deciding
    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Mutable access to the frame currently deciding
    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Number of open frames
    pub const fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Backtrack steps taken so far
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Step budget this ledger enforces
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// State of `cell` according to the open frames
    pub fn state_of(&self, cell: Position) -> CellState {
        self.frames
            .iter()
            .rev()
            .find(|frame| frame.cell == cell)
            .map_or(CellState::Unvisited, Frame::state)
    }

    /// Drop the exhausted top frame and undo its predecessor's placement
    ///
    /// The undone candidate is marked tried on the predecessor, which becomes
    /// the deciding frame again.
    ///
    /// # Errors
    ///
    /// Returns an error if the predecessor's instance is no longer on the grid
    pub fn backtrack(&mut self, grid: &mut MapGrid<'_>) -> Result<BacktrackOutcome> {
        let _ = self.frames.pop();

        let Some(previous) = self.frames.last_mut() else {
            return Ok(BacktrackOutcome::Exhausted);
        };
        if self.steps >= self.budget {
            return Ok(BacktrackOutcome::BudgetExceeded { steps: self.steps });
        }

        self.steps += 1;
        if let Some((index, id)) = previous.placed.take() {
            let _ = grid.remove(id)?;
            previous.tried.insert(index);
        }

        Ok(BacktrackOutcome::Retry {
            cell: previous.cell,
        })
    }
}
