/// LSD radix sort, base 10, one stable counting pass per decimal digit.
pub fn radix_sort(arr: &mut [u32]) {
    let Some(&max) = arr.iter().max() else {
        return;
    };

    let mut buf = arr.to_vec();
    let mut exp = 1u64;
    while u64::from(max) / exp > 0 {
        let mut counts = [0usize; 10];
        for &value in arr.iter() {
            counts[(u64::from(value) / exp % 10) as usize] += 1;
        }
        for digit in 1..10 {
            counts[digit] += counts[digit - 1];
        }
        // Reverse iteration keeps equal digits in input order (stability).
        for &value in arr.iter().rev() {
            let digit = (u64::from(value) / exp % 10) as usize;
            counts[digit] -= 1;
            buf[counts[digit]] = value;
        }
        arr.copy_from_slice(&buf);
        exp *= 10;
    }
}
