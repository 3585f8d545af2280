//! Top-down merge sort (stable)

use sortbench_macros::algorithm;

#[algorithm(name = "merge", description = "Stable top-down merge sort")]
pub fn sort(data: Vec<String>) -> Vec<String> {
    if data.len() <= 1 {
        return data;
    }

    let mut left = data;
    let right = left.split_off(left.len() / 2);
    merge(sort(left), sort(right))
}

fn merge(left: Vec<String>, right: Vec<String>) -> Vec<String> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l <= r,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged
}
