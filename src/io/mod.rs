//! Error handling, configuration and caller-supplied placements

/// Run configuration and algorithm constants
pub mod configuration;
/// Error types for configuration, grid operations and generation runs
pub mod error;
/// Placements fixed before the search starts
pub mod prefill;
