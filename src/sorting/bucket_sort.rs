/// Distributes keys in `[0, 1)` across n buckets, sorts each bucket, and
/// concatenates. Keys outside the unit interval are clamped into the edge
/// buckets.
pub fn bucket_sort(arr: &mut [f64]) {
    let n = arr.len();
    if n == 0 {
        return;
    }

    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); n];
    for &value in arr.iter() {
        let idx = ((value * n as f64) as usize).min(n - 1);
        buckets[idx].push(value);
    }

    let mut i = 0;
    for bucket in &mut buckets {
        bucket.sort_by(|a, b| a.total_cmp(b));
        for &value in bucket.iter() {
            arr[i] = value;
            i += 1;
        }
    }
}
