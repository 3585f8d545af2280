//! Counting sort keyed on the first character

use sortbench_macros::algorithm;
use std::collections::BTreeMap;

#[algorithm(name = "counting", description = "Groups by first character, sorts each group")]
pub fn sort(data: Vec<String>) -> Vec<String> {
    let mut groups: BTreeMap<Option<char>, Vec<String>> = BTreeMap::new();
    for record in data {
        groups.entry(record.chars().next()).or_default().push(record);
    }

    groups
        .into_values()
        .flat_map(|mut group| {
            group.sort();
            group
        })
        .collect()
}
