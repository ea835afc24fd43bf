/// Smallest value in `[lo, hi]` for which `feasible` holds, assuming the
/// predicate is monotone (once true, true for everything larger).
pub fn binary_search_on_answer<F>(lo: u64, hi: u64, feasible: F) -> Option<u64>
where
    F: Fn(u64) -> bool,
{
    let (mut lo, mut hi) = (lo, hi);
    let mut answer = None;
    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        if feasible(mid) {
            answer = Some(mid);
            if mid == 0 {
                break;
            }
            hi = mid - 1;
        } else {
            lo = mid + 1;
        }
    }
    answer
}
