//! Bucket sort distributing on the first byte

use crate::insertion::insert_all;
use sortbench_macros::algorithm;

/// One bucket for empty records, then one per possible leading byte
const BUCKETS: usize = 257;

#[algorithm(name = "bucket", description = "Distributes on the first byte, insertion-sorts each bucket")]
pub fn sort(data: Vec<String>) -> Vec<String> {
    if data.len() <= 1 {
        return data;
    }

    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); BUCKETS];
    let total = data.len();
    for record in data {
        let slot = record.as_bytes().first().map_or(0, |&b| b as usize + 1);
        buckets[slot].push(record);
    }

    let mut sorted = Vec::with_capacity(total);
    for mut bucket in buckets {
        insert_all(&mut bucket);
        sorted.append(&mut bucket);
    }
    sorted
}
