pub mod bfs;
pub mod bidirectional;
pub mod dfs;
pub mod iterative_deepening;
