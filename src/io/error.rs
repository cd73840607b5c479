//! Error types for catalog configuration, grid operations, randomness and generation runs

use std::fmt;

use crate::spatial::orientation::{Orientation, Side};

/// Main error type for catalog configuration and grid operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileMapError {
    /// An edge kind was used that the registry never allocated
    UnknownEdge {
        /// Index of the offending edge kind
        edge: usize,
        /// Number of edge kinds the registry knows
        known: usize,
    },

    /// Two tile types in one catalog share a name
    DuplicateTile {
        /// The repeated name
        name: String,
    },

    /// A tile type declared a zero width or height
    EmptyFootprint {
        /// Name of the tile type
        tile: String,
    },

    /// A side list does not have one edge per unit cell along that side
    SideLengthMismatch {
        /// Name of the tile type
        tile: String,
        /// Orientation whose side lists were being validated
        orientation: Orientation,
        /// Side with the wrong number of edges
        side: Side,
        /// Number of edges the footprint requires on that side
        expected: usize,
        /// Number of edges declared
        found: usize,
    },

    /// Tile index exceeds the catalog
    UnknownTile {
        /// The invalid tile index
        index: usize,
        /// Number of tile types in the catalog
        max_tiles: usize,
    },

    /// A placement asked for an orientation the tile type does not support
    UnsupportedOrientation {
        /// Name of the tile type
        tile: String,
        /// The requested orientation
        orientation: Orientation,
    },

    /// A footprint reaches past the grid edge
    OutOfBounds {
        /// Farthest cell of the footprint, `[row, col]`
        position: [usize; 2],
        /// Grid dimensions `(rows, cols)`
        dimensions: (usize, usize),
    },

    /// A footprint overlaps a filled cell
    CellOccupied {
        /// The filled cell, `[row, col]`
        position: [usize; 2],
    },

    /// Removal of an instance id that holds no placement
    InstanceNotPlaced {
        /// The stale instance id
        id: usize,
    },

    /// A fixed placement presents an edge its neighbor cannot accept
    IncompatibleAdjacency {
        /// Cell of the new placement on the conflicting border, `[row, col]`
        position: [usize; 2],
        /// Side of that cell facing the neighbor
        side: Side,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for TileMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEdge { edge, known } => {
                write!(f, "Edge kind {edge} is not registered ({known} known)")
            }
            Self::DuplicateTile { name } => write!(f, "Tile type '{name}' is declared twice"),
            Self::EmptyFootprint { tile } => {
                write!(f, "Tile type '{tile}' has an empty footprint")
            }
            Self::SideLengthMismatch {
                tile,
                orientation,
                side,
                expected,
                found,
            } => write!(
                f,
                "Tile type '{tile}' under {orientation}: {side} side has {found} edges, expected {expected}"
            ),
            Self::UnknownTile { index, max_tiles } => {
                write!(f, "Tile index {index} is out of bounds (max: {max_tiles})")
            }
            Self::UnsupportedOrientation { tile, orientation } => {
                write!(f, "Tile type '{tile}' does not support {orientation}")
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => write!(
                f,
                "Cell [{}, {}] is outside the {}x{} grid",
                position[0], position[1], dimensions.0, dimensions.1
            ),
            Self::CellOccupied { position } => {
                write!(f, "Cell [{}, {}] is already filled", position[0], position[1])
            }
            Self::InstanceNotPlaced { id } => write!(f, "Instance {id} is not placed"),
            Self::IncompatibleAdjacency { position, side } => write!(
                f,
                "Cell [{}, {}] presents an incompatible edge on its {side} side",
                position[0], position[1]
            ),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for TileMapError {}

/// Convenience type alias for catalog and grid results
pub type Result<T> = std::result::Result<T, TileMapError>;

/// Violations of the random source contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomError {
    /// A draw was requested from an empty range
    InvalidBound {
        /// The requested bound
        bound: usize,
    },

    /// Every value in the range is excluded
    Exhausted {
        /// The requested bound
        bound: usize,
        /// Number of excluded values inside the bound
        excluded: usize,
    },

    /// The source returned a value outside the range or inside the exclusion
    ContractViolation {
        /// The value returned
        value: usize,
        /// The requested bound
        bound: usize,
    },
}

impl fmt::Display for RandomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBound { bound } => write!(f, "Cannot draw from [0, {bound})"),
            Self::Exhausted { bound, excluded } => {
                write!(f, "All {bound} values are excluded ({excluded} excluded)")
            }
            Self::ContractViolation { value, bound } => write!(
                f,
                "Random source returned {value}, which is not an allowed value below {bound}"
            ),
        }
    }
}

impl std::error::Error for RandomError {}

/// Terminal outcome of a generation run that did not produce a map
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationFailure {
    /// The search space is exhausted; no valid map exists from the fixed tiles
    Unsatisfiable {
        /// Grid dimensions `(rows, cols)`
        dimensions: (usize, usize),
        /// Backtrack steps taken before giving up
        backtracks: usize,
    },

    /// The caller's backtrack budget ran out before a map was found
    BudgetExceeded {
        /// The budget that was hit
        budget: usize,
        /// Placements made during the run
        placements: usize,
    },

    /// The random source broke its contract
    RandomSource(RandomError),

    /// Dimensions or fixed placements were rejected before the search
    Invalid(TileMapError),
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsatisfiable {
                dimensions,
                backtracks,
            } => write!(
                f,
                "No valid {}x{} map exists for this catalog (gave up after {backtracks} backtracks)",
                dimensions.0, dimensions.1
            ),
            Self::BudgetExceeded { budget, placements } => write!(
                f,
                "Backtrack budget of {budget} exceeded after {placements} placements"
            ),
            Self::RandomSource(source) => write!(f, "Random source failure: {source}"),
            Self::Invalid(source) => write!(f, "Invalid generation request: {source}"),
        }
    }
}

impl std::error::Error for GenerationFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::RandomSource(source) => Some(source),
            Self::Invalid(source) => Some(source),
            Self::Unsatisfiable { .. } | Self::BudgetExceeded { .. } => None,
        }
    }
}

impl From<RandomError> for GenerationFailure {
    fn from(err: RandomError) -> Self {
        Self::RandomSource(err)
    }
}

impl From<TileMapError> for GenerationFailure {
    fn from(err: TileMapError) -> Self {
        Self::Invalid(err)
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TileMapError {
    TileMapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
