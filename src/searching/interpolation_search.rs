use std::cmp::Ordering;

/// Estimates the probe position by linearly interpolating between the range
/// endpoints, which beats binary search on uniformly distributed keys.
/// Requires `arr` sorted ascending.
pub fn interpolation_search(arr: &[i64], target: i64) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }

    let (mut lo, mut hi) = (0usize, arr.len() - 1);
    while lo <= hi && target >= arr[lo] && target <= arr[hi] {
        if arr[lo] == arr[hi] {
            return if arr[lo] == target { Some(lo) } else { None };
        }

        // Widened arithmetic keeps the numerator from overflowing i64.
        let numerator = (target - arr[lo]) as i128 * (hi - lo) as i128;
        let pos = lo + (numerator / (arr[hi] - arr[lo]) as i128) as usize;

        match arr[pos].cmp(&target) {
            Ordering::Equal => return Some(pos),
            Ordering::Less => lo = pos + 1,
            Ordering::Greater => {
                if pos == 0 {
                    return None;
                }
                hi = pos - 1;
            }
        }
    }
    None
}
