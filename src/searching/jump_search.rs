/// Strides through the array in blocks of √n, then scans the block that
/// brackets the target. Requires `arr` sorted ascending.
pub fn jump_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }

    let step = ((n as f64).sqrt() as usize).max(1);
    let mut prev = 0;
    let mut curr = step.min(n);

    while arr[curr - 1] < *target {
        prev = curr;
        if prev >= n {
            return None;
        }
        curr = (curr + step).min(n);
    }

    arr[prev..curr].iter().position(|item| item == target).map(|i| prev + i)
}
