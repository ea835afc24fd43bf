use super::binary_search::binary_search;

/// Doubles a probe bound until it passes the target, then binary-searches
/// the bracketed range. Requires `arr` sorted ascending.
pub fn exponential_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }
    if arr[0] == *target {
        return Some(0);
    }

    let mut bound = 1;
    while bound < n && arr[bound] < *target {
        bound *= 2;
    }

    let lo = bound / 2;
    let hi = n.min(bound + 1);
    binary_search(&arr[lo..hi], target).map(|i| lo + i)
}
