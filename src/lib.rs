//! # Classic Algorithms
//!
//! Reference implementations of textbook search and sorting algorithms,
//! organized by category.
//!
//! ## Modules
//!
//! - `searching` – Array lookup algorithms (linear, sentinel, binary, jump,
//!   interpolation, exponential, fibonacci, ternary, hash-based) and the
//!   self-organizing list
//! - `graph` – Graph/tree traversal (BFS, DFS, iterative deepening,
//!   bidirectional shortest path)
//! - `state_space` – Search over implicit graphs given a successor function
//! - `sorting` – Ordering algorithms (bubble, insertion, selection, merge,
//!   quick, heap, shell, counting, radix, bucket, pigeonhole, cycle, comb,
//!   intro, tim)
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use classic_algorithms::searching::self_organizing::{SelfOrganizingList, Strategy};
//!
//! let mut list = SelfOrganizingList::new(&["A", "B", "C", "D"], Strategy::MoveToFront);
//! assert_eq!(list.search(&"C"), Some(2));
//! assert_eq!(list.items(), &["C", "A", "B", "D"]);
//! ```
//!
//! ---
//!
//! Every algorithm is self-contained: no module depends on another beyond the
//! tree below, and no function holds state except where the algorithm itself
//! is stateful (the self-organizing list).

pub mod graph;
pub mod searching;
pub mod sorting;
pub mod state_space;
