//! Bubble sort with early exit once a pass makes no swaps

use sortbench_macros::algorithm;

#[algorithm(name = "bubble", description = "Adjacent swaps, stops after a clean pass")]
pub fn sort(mut data: Vec<String>) -> Vec<String> {
    let n = data.len();
    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if data[j] > data[j + 1] {
                data.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
    data
}
