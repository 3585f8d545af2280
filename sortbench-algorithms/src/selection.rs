//! Selection sort

use sortbench_macros::algorithm;

#[algorithm(name = "selection", description = "Repeatedly moves the minimum of the unsorted tail forward")]
pub fn sort(mut data: Vec<String>) -> Vec<String> {
    let n = data.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            if data[j] < data[min_idx] {
                min_idx = j;
            }
        }
        data.swap(i, min_idx);
    }
    data
}
