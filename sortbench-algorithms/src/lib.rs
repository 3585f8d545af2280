//! Sortbench Algorithms
//!
//! The strategies shipped with sortbench. Each module exposes one `sort`
//! entry point registered through `#[algorithm]`; nothing here is called by
//! name; the registry finds every strategy at startup.

pub mod bubble;
pub mod bucket;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;

/// Force this crate's registrations into the final binary.
///
/// A binary that never names an item from this crate lets the linker drop
/// it, and the `#[algorithm]` registrations with it. Calling `link()` once
/// from startup code is enough.
#[inline(never)]
pub fn link() {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sortbench_core::{Registry, SortFn};

    /// Strategies that honour `str` ordering for every input
    const COMPARISON_SORTS: [(&str, SortFn); 9] = [
        ("bubble", crate::bubble::sort),
        ("bucket", crate::bucket::sort),
        ("counting", crate::counting::sort),
        ("heap", crate::heap::sort),
        ("insertion", crate::insertion::sort),
        ("merge", crate::merge::sort),
        ("quick", crate::quick::sort),
        ("selection", crate::selection::sort),
        ("shell", crate::shell::sort),
    ];

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn reference(mut data: Vec<String>) -> Vec<String> {
        data.sort();
        data
    }

    fn is_sorted(data: &[String]) -> bool {
        data.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn every_strategy_is_registered() {
        let names = Registry::discover().list_available().unwrap();
        assert_eq!(
            names,
            [
                "bubble", "bucket", "counting", "heap", "insertion", "merge", "quick",
                "radix", "selection", "shell"
            ]
        );
    }

    #[test]
    fn registered_entry_points_sort() {
        let mut registry = Registry::discover();
        for name in registry.list_available().unwrap() {
            let descriptor = registry.load(&name).unwrap();
            let sorted = (descriptor.entry())(words(&["pear", "apple", "fig", "apple"]));
            assert_eq!(sorted, ["apple", "apple", "fig", "pear"], "{name}");
        }
    }

    #[test]
    fn edge_inputs() {
        let cases: [&[&str]; 5] = [
            &[],
            &["solo"],
            &["", "b", "", "a"],
            &["same", "same", "same"],
            &["z", "y", "x", "w", "v", "u", "t", "s", "r", "q", "p"],
        ];
        for (name, sort) in COMPARISON_SORTS {
            for case in cases {
                let input = words(case);
                assert_eq!(sort(input.clone()), reference(input), "{name} on {case:?}");
            }
        }
    }

    /// Strategies fast enough for tens of thousands of records
    const LINEARITHMIC_SORTS: [(&str, SortFn); 7] = [
        ("bucket", crate::bucket::sort),
        ("counting", crate::counting::sort),
        ("heap", crate::heap::sort),
        ("merge", crate::merge::sort),
        ("quick", crate::quick::sort),
        ("radix", crate::radix::sort),
        ("shell", crate::shell::sort),
    ];

    #[test]
    fn long_duplicate_runs_on_a_small_stack() {
        let identical = vec!["dup".to_string(); 20_000];
        let two_values: Vec<String> = (0..20_000).map(|i| ["b", "a"][i % 2].to_string()).collect();

        for (name, sort) in LINEARITHMIC_SORTS {
            for input in [identical.clone(), two_values.clone()] {
                let expected = reference(input.clone());
                let sorted = std::thread::Builder::new()
                    .stack_size(1024 * 1024)
                    .spawn(move || sort(input))
                    .unwrap()
                    .join()
                    .unwrap();
                assert_eq!(sorted, expected, "{name}");
            }
        }
    }

    #[test]
    fn shell_uses_large_gaps_on_long_input() {
        let input: Vec<String> = (0..5000).rev().map(|i| format!("{i:05}")).collect();
        assert_eq!(crate::shell::sort(input.clone()), reference(input));
    }

    #[test]
    fn comparison_sorts_handle_multibyte_text() {
        let input = words(&["żółw", "Ā", "zebra", "ábaco", "abc", "日本"]);
        for (name, sort) in COMPARISON_SORTS {
            assert_eq!(sort(input.clone()), reference(input.clone()), "{name}");
        }
    }

    #[test]
    fn radix_matches_on_printable_ascii() {
        let input = words(&["banana", "Apple", "cherry", "apple", "a b", "ab", "1"]);
        assert_eq!(crate::radix::sort(input.clone()), reference(input));
    }

    #[test]
    fn radix_diverges_above_latin1() {
        // 'Ā' is U+0100 and keys on its low byte 0x00, ahead of 'a'
        let input = words(&["a", "Ā"]);
        let radix = crate::radix::sort(input.clone());

        assert_eq!(radix, ["Ā", "a"]);
        assert_ne!(radix, reference(input));
    }

    proptest! {
        #[test]
        fn output_is_a_sorted_permutation(
            records in proptest::collection::vec("[a-c]{0,3}|.{0,6}", 0..60)
        ) {
            let expected = reference(records.clone());
            for (_, sort) in COMPARISON_SORTS {
                let sorted = sort(records.clone());
                prop_assert!(is_sorted(&sorted));
                prop_assert_eq!(&sorted, &expected);
            }
        }

        #[test]
        fn sorting_is_idempotent(records in proptest::collection::vec(".{0,6}", 0..40)) {
            for (_, sort) in COMPARISON_SORTS {
                let once = sort(records.clone());
                prop_assert_eq!(sort(once.clone()), once);
            }
        }

        #[test]
        fn radix_is_exact_without_trailing_padding(
            records in proptest::collection::vec("[!-~]{0,8}", 0..60)
        ) {
            prop_assert_eq!(crate::radix::sort(records.clone()), reference(records));
        }
    }
}
