use std::collections::HashMap;
use std::hash::Hash;

/// Builds a one-shot index of first occurrences and looks the target up in
/// it. Worth the O(n) build only when the same index would be reused; kept
/// here in single-shot form to match the textbook presentation.
pub fn hash_search<T: Eq + Hash>(arr: &[T], target: &T) -> Option<usize> {
    let mut index: HashMap<&T, usize> = HashMap::with_capacity(arr.len());
    for (i, item) in arr.iter().enumerate() {
        index.entry(item).or_insert(i);
    }
    index.get(target).copied()
}
