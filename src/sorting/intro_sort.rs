use super::heap_sort::heap_sort;
use super::insertion_sort::insertion_sort;
use super::quick_sort::partition;

const INSERTION_CUTOFF: usize = 16;

/// Quicksort that falls back to heapsort once the recursion depth passes
/// 2·log2(n), and to insertion sort on small partitions. Worst case stays
/// O(n log n) regardless of pivot luck.
pub fn intro_sort<T: Ord>(arr: &mut [T]) {
    let depth_budget = 2 * (arr.len().max(1).ilog2() as usize);
    sort_to_depth(arr, depth_budget);
}

fn sort_to_depth<T: Ord>(arr: &mut [T], depth_budget: usize) {
    if arr.len() <= INSERTION_CUTOFF {
        insertion_sort(arr);
        return;
    }
    if depth_budget == 0 {
        heap_sort(arr);
        return;
    }
    let pivot = partition(arr);
    let (left, right) = arr.split_at_mut(pivot);
    sort_to_depth(left, depth_budget - 1);
    sort_to_depth(&mut right[1..], depth_budget - 1);
}
