//! Self-organizing list: a sequence that reorders itself on every hit.
//!
//! Variables:
//!   items           : Vec<T>            — current order, multiset fixed at construction
//!   access_count    : HashMap<T, u64>   — hits per value (Count strategy only)
//!   insertion_order : HashMap<T, usize> — first-seen index per distinct value, frozen
//!
//! Equations:
//!   search(x), hit at i:
//!     MoveToFront: items' = [x] ++ items \ {i}                    O(n)
//!     Transpose:   items' = items with i,i-1 swapped (i>0)        O(n)
//!     Count:       count[x] += 1; stable sort by (count desc,
//!                  insertion_order asc)                           O(n log n)
//!   search(x), miss: items' = items                               O(n)
//!
//! The return value is always the index *before* reorganization, so callers
//! can measure how far the element had drifted from the front.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

/// Reorganization policy applied after every successful search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Move the found element to index 0.
    MoveToFront,
    /// Swap the found element one position toward the front.
    Transpose,
    /// Keep per-value hit counts and sort by descending count.
    Count,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown reorganization strategy `{0}`")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "move_to_front" => Ok(Strategy::MoveToFront),
            "transpose" => Ok(Strategy::Transpose),
            "count" => Ok(Strategy::Count),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

pub struct SelfOrganizingList<T> {
    items: Vec<T>,
    strategy: Strategy,
    access_count: HashMap<T, u64>,
    insertion_order: HashMap<T, usize>,
}

impl<T: Eq + Hash + Clone> SelfOrganizingList<T> {
    /// Builds the list from a copy of `data`. An empty slice is valid; every
    /// search on it misses.
    pub fn new(data: &[T], strategy: Strategy) -> Self {
        let items = data.to_vec();

        // First occurrence wins; later duplicates keep the original index.
        let mut insertion_order = HashMap::new();
        for (i, item) in items.iter().enumerate() {
            insertion_order.entry(item.clone()).or_insert(i);
        }

        let access_count = match strategy {
            Strategy::Count => items.iter().map(|item| (item.clone(), 0)).collect(),
            _ => HashMap::new(),
        };

        Self { items, strategy, access_count, insertion_order }
    }

    /// Scans left-to-right for the first element equal to `target` and
    /// applies the strategy on a hit. Returns the index where the element
    /// was found *before* reorganization; `None` on a miss (no mutation).
    pub fn search(&mut self, target: &T) -> Option<usize> {
        let idx = match self.items.iter().position(|item| item == target) {
            Some(idx) => idx,
            None => {
                trace!(strategy = ?self.strategy, "search miss");
                return None;
            }
        };

        match self.strategy {
            Strategy::MoveToFront => {
                let found = self.items.remove(idx);
                self.items.insert(0, found);
            }
            Strategy::Transpose => {
                if idx > 0 {
                    self.items.swap(idx, idx - 1);
                }
            }
            Strategy::Count => {
                *self.access_count.entry(target.clone()).or_insert(0) += 1;
                self.reorder_by_count();
            }
        }

        trace!(index = idx, strategy = ?self.strategy, "search hit");
        Some(idx)
    }

    /// Stable sort by descending hit count; equal counts fall back to the
    /// first-seen index recorded at construction, never the current position.
    fn reorder_by_count(&mut self) {
        let counts = &self.access_count;
        let order = &self.insertion_order;
        self.items.sort_by(|a, b| {
            let ca = counts.get(a).copied().unwrap_or(0);
            let cb = counts.get(b).copied().unwrap_or(0);
            cb.cmp(&ca).then_with(|| order[a].cmp(&order[b]))
        });
    }

    /// Current order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Hit counts per value. Empty unless the strategy is `Count`.
    pub fn access_counts(&self) -> &HashMap<T, u64> {
        &self.access_count
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: fmt::Display + Eq + Hash> fmt::Display for SelfOrganizingList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match self.strategy {
                Strategy::Count => {
                    let count = self.access_count.get(item).copied().unwrap_or(0);
                    write!(f, "{item}:{count}")?;
                }
                _ => write!(f, "{item}")?,
            }
        }
        write!(f, "]")
    }
}
