/// Linear search with the target planted in the last slot, so the scan loop
/// needs no bounds check. The displaced last element is restored before
/// returning; the caller observes an unchanged array.
pub fn sentinel_search<T: PartialEq + Clone>(arr: &mut [T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }

    let last = arr[n - 1].clone();
    arr[n - 1] = target.clone();

    let mut i = 0;
    while arr[i] != *target {
        i += 1;
    }

    arr[n - 1] = last;

    if i < n - 1 || arr[n - 1] == *target {
        Some(i)
    } else {
        None
    }
}
