/// Tallies occurrences per key and replays them in order. Only sensible when
/// the key range is comparable to the input length.
pub fn counting_sort(arr: &[u32]) -> Vec<u32> {
    let Some(&max) = arr.iter().max() else {
        return Vec::new();
    };

    let mut counts = vec![0usize; max as usize + 1];
    for &value in arr {
        counts[value as usize] += 1;
    }

    let mut out = Vec::with_capacity(arr.len());
    for (value, &count) in counts.iter().enumerate() {
        out.extend(std::iter::repeat(value as u32).take(count));
    }
    out
}
