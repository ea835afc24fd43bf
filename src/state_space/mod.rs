//! Search over implicit graphs: states are generated on demand by a
//! successor function rather than stored in an adjacency list.

pub mod bfs;
pub mod dfs;

pub use bfs::bfs;
pub use dfs::dfs;
