/// Backtracking ledger of decided cells and their rejected candidates
pub mod backtrack;
/// Bitset of candidate indices already tried at a cell
pub mod bitset;
/// Generation engine and run statistics
pub mod executor;
/// Candidate enumeration and weighted selection
pub mod selection;
