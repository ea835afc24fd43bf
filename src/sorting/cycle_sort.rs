/// Sorts with the minimum possible number of array writes: each cycle of
/// misplaced elements is rotated into place exactly once.
pub fn cycle_sort<T: Ord + Clone>(arr: &mut [T]) {
    let n = arr.len();
    for start in 0..n.saturating_sub(1) {
        let mut item = arr[start].clone();

        let mut pos = rank(arr, start, &item);
        if pos == start {
            continue;
        }
        while item == arr[pos] {
            pos += 1;
        }
        std::mem::swap(&mut arr[pos], &mut item);

        while pos != start {
            pos = rank(arr, start, &item);
            while item == arr[pos] {
                pos += 1;
            }
            std::mem::swap(&mut arr[pos], &mut item);
        }
    }
}

/// Final position of `item` within `arr[start..]`: start plus the number of
/// smaller elements after it.
fn rank<T: Ord>(arr: &[T], start: usize, item: &T) -> usize {
    let mut pos = start;
    for other in &arr[start + 1..] {
        if other < item {
            pos += 1;
        }
    }
    pos
}
