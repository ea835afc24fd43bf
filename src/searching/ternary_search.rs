/// Splits the range at two midpoints instead of one, discarding two thirds
/// per round. Requires `arr` sorted ascending.
pub fn ternary_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0isize, arr.len() as isize - 1);
    while lo <= hi {
        let third = (hi - lo) / 3;
        let m1 = lo + third;
        let m2 = hi - third;

        if arr[m1 as usize] == *target {
            return Some(m1 as usize);
        }
        if arr[m2 as usize] == *target {
            return Some(m2 as usize);
        }

        if *target < arr[m1 as usize] {
            hi = m1 - 1;
        } else if *target > arr[m2 as usize] {
            lo = m2 + 1;
        } else {
            lo = m1 + 1;
            hi = m2 - 1;
        }
    }
    None
}
