//! Insertion sort

use sortbench_macros::algorithm;

#[algorithm(name = "insertion", description = "Grows a sorted prefix one record at a time")]
pub fn sort(mut data: Vec<String>) -> Vec<String> {
    insert_all(&mut data);
    data
}

/// Sort `items` in place by shifting each record left into position.
///
/// Shared with bucket sort, which runs it on every bucket.
pub(crate) fn insert_all(items: &mut [String]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
