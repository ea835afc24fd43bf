use std::cmp::Ordering;

/// Probes at offsets drawn from the Fibonacci sequence instead of midpoints.
/// Requires `arr` sorted ascending.
pub fn fibonacci_search<T: Ord>(arr: &[T], target: &T) -> Option<usize> {
    let n = arr.len();
    if n == 0 {
        return None;
    }

    // Smallest Fibonacci number >= n, with its two predecessors.
    let (mut fib2, mut fib1) = (0usize, 1usize);
    let mut fib = fib2 + fib1;
    while fib < n {
        fib2 = fib1;
        fib1 = fib;
        fib = fib2 + fib1;
    }

    // Offset of the eliminated prefix, -1 before any probe.
    let mut offset: isize = -1;

    while fib > 1 {
        let i = ((offset + fib2 as isize) as usize).min(n - 1);
        match arr[i].cmp(target) {
            Ordering::Less => {
                fib = fib1;
                fib1 = fib2;
                fib2 = fib - fib1;
                offset = i as isize;
            }
            Ordering::Greater => {
                fib = fib2;
                fib1 -= fib2;
                fib2 = fib - fib1;
            }
            Ordering::Equal => return Some(i),
        }
    }

    // One candidate may remain past the eliminated prefix.
    let last = (offset + 1) as usize;
    if fib1 == 1 && last < n && arr[last] == *target {
        return Some(last);
    }
    None
}
