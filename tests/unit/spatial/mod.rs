pub mod edges;
pub mod tiles;
