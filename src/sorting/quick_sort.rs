pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    let (left, right) = arr.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

/// Lomuto partition with the last element as pivot.
pub(crate) fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let pivot_index = arr.len() - 1;
    let mut store = 0;
    for i in 0..pivot_index {
        if arr[i] <= arr[pivot_index] {
            arr.swap(store, i);
            store += 1;
        }
    }
    arr.swap(store, pivot_index);
    store
}
