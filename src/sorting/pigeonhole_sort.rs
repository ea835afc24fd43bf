/// One hole per key in `[min, max]`; counts occurrences and replays them.
pub fn pigeonhole_sort(arr: &mut [i64]) {
    let (Some(&min), Some(&max)) = (arr.iter().min(), arr.iter().max()) else {
        return;
    };

    let mut holes = vec![0usize; (max - min) as usize + 1];
    for &value in arr.iter() {
        holes[(value - min) as usize] += 1;
    }

    let mut i = 0;
    for (hole, &count) in holes.iter().enumerate() {
        for _ in 0..count {
            arr[i] = min + hole as i64;
            i += 1;
        }
    }
}
