//! Heap sort on a binary max-heap

use sortbench_macros::algorithm;

#[algorithm(name = "heap", description = "In-place binary max-heap")]
pub fn sort(mut data: Vec<String>) -> Vec<String> {
    let n = data.len();
    for root in (0..n / 2).rev() {
        sift_down(&mut data, n, root);
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(&mut data, end, 0);
    }
    data
}

fn sift_down(heap: &mut [String], len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < len && heap[left] > heap[largest] {
            largest = left;
        }
        if right < len && heap[right] > heap[largest] {
            largest = right;
        }
        if largest == root {
            return;
        }

        heap.swap(root, largest);
        root = largest;
    }
}
