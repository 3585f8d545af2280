//! Shell sort over the Ciura gap sequence

use sortbench_macros::algorithm;

const GAPS: [usize; 9] = [1, 4, 10, 23, 57, 132, 301, 701, 1750];

#[algorithm(name = "shell", description = "Gapped insertion sort, Ciura gaps")]
pub fn sort(mut data: Vec<String>) -> Vec<String> {
    let n = data.len();
    for &gap in GAPS.iter().rev().filter(|&&gap| gap < n) {
        for i in gap..n {
            let mut j = i;
            while j >= gap && data[j - gap] > data[j] {
                data.swap(j - gap, j);
                j -= gap;
            }
        }
    }
    data
}
