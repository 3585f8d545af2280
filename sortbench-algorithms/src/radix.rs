//! LSD radix sort over space-padded characters
//!
//! Each character contributes only the low byte of its code point, so
//! records containing characters above U+00FF are ordered differently from
//! `str` ordering. The verifier reports that as a mismatch against the
//! comparison sorts.

use sortbench_macros::algorithm;

const RADIX: usize = 256;
const PAD: u8 = b' ';

#[algorithm(name = "radix", description = "LSD radix over padded characters, low byte per char")]
pub fn sort(data: Vec<String>) -> Vec<String> {
    let keys: Vec<Vec<u8>> = data
        .iter()
        .map(|record| record.chars().map(|c| c as u8).collect())
        .collect();
    let width = keys.iter().map(Vec::len).max().unwrap_or(0);

    let mut order: Vec<usize> = (0..data.len()).collect();
    let mut scratch = vec![0usize; order.len()];

    for pos in (0..width).rev() {
        let digit = |idx: usize| keys[idx].get(pos).copied().unwrap_or(PAD) as usize;

        let mut count = [0usize; RADIX];
        for &idx in &order {
            count[digit(idx)] += 1;
        }
        for i in 1..RADIX {
            count[i] += count[i - 1];
        }
        for &idx in order.iter().rev() {
            let d = digit(idx);
            count[d] -= 1;
            scratch[count[d]] = idx;
        }
        std::mem::swap(&mut order, &mut scratch);
    }

    let mut slots: Vec<Option<String>> = data.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|idx| slots[idx].take())
        .collect()
}
