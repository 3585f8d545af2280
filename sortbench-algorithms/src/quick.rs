//! Quicksort with a random pivot and three-way partitioning
//!
//! Records equal to the pivot are gathered in the middle and never revisited.
//! Only the smaller side is recursed into, so stack depth stays O(log n) even
//! on duplicate-heavy input.

use rand::Rng;
use sortbench_macros::algorithm;

#[algorithm(name = "quick", description = "Random pivot, three-way partition")]
pub fn sort(mut data: Vec<String>) -> Vec<String> {
    quicksort(&mut data, &mut rand::thread_rng());
    data
}

fn quicksort<R: Rng>(mut items: &mut [String], rng: &mut R) {
    while items.len() > 1 {
        let (lt, gt) = partition(items, rng);
        let (lower, rest) = std::mem::take(&mut items).split_at_mut(lt);
        let upper = &mut rest[gt - lt..];

        if lower.len() < upper.len() {
            quicksort(lower, rng);
            items = upper;
        } else {
            quicksort(upper, rng);
            items = lower;
        }
    }
}

/// Partition around a random pivot into `< pivot`, `== pivot`, `> pivot`.
///
/// Returns `(lt, gt)` such that `items[lt..gt]` holds every record equal to
/// the pivot.
fn partition<R: Rng>(items: &mut [String], rng: &mut R) -> (usize, usize) {
    let pivot_idx = rng.gen_range(0..items.len());
    items.swap(0, pivot_idx);

    // items[0] stays the pivot until the final swap
    let mut lt = 0;
    let mut i = 1;
    let mut gt = items.len();
    while i < gt {
        match items[i].cmp(&items[lt]) {
            std::cmp::Ordering::Less => {
                items.swap(lt, i);
                lt += 1;
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                gt -= 1;
                items.swap(i, gt);
            }
            std::cmp::Ordering::Equal => i += 1,
        }
    }
    (lt, gt)
}
