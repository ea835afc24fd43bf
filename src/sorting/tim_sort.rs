use super::insertion_sort::insertion_sort;
use super::merge_sort::merge;

const RUN: usize = 32;

/// Simplified timsort: insertion-sort fixed-size runs, then merge runs
/// bottom-up with doubling width. Stable.
pub fn tim_sort<T: Ord + Clone>(arr: &mut [T]) {
    let n = arr.len();

    let mut lo = 0;
    while lo < n {
        let hi = (lo + RUN).min(n);
        insertion_sort(&mut arr[lo..hi]);
        lo = hi;
    }

    let mut width = RUN;
    while width < n {
        let mut lo = 0;
        while lo + width < n {
            let mid = lo + width;
            let hi = (lo + 2 * width).min(n);
            let merged = merge(&arr[lo..mid], &arr[mid..hi]);
            arr[lo..hi].clone_from_slice(&merged);
            lo = hi;
        }
        width *= 2;
    }
}
