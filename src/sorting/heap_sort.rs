pub fn heap_sort<T: Ord>(arr: &mut [T]) {
    let n = arr.len();
    for i in (0..n / 2).rev() {
        sift_down(arr, n, i);
    }
    for end in (1..n).rev() {
        arr.swap(0, end);
        sift_down(arr, end, 0);
    }
}

pub(crate) fn sift_down<T: Ord>(arr: &mut [T], heap_len: usize, root: usize) {
    let mut largest = root;
    let (left, right) = (2 * root + 1, 2 * root + 2);

    if left < heap_len && arr[left] > arr[largest] {
        largest = left;
    }
    if right < heap_len && arr[right] > arr[largest] {
        largest = right;
    }
    if largest != root {
        arr.swap(root, largest);
        sift_down(arr, heap_len, largest);
    }
}
