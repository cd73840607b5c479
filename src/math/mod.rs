//! Randomness and weighting utilities for the generator

/// Cumulative weight tables and weighted index lookup
pub mod probability;
/// Bounded random draws with exclusion sets
pub mod random;
