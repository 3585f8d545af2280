//! Algorithm Registry
//!
//! Discovers strategies registered via `#[algorithm]` (or an explicit static
//! table) and binds names to validated entry points on first use.
//!
//! ```text
//! AlgorithmDef (inventory / static table)
//!        │  list_available(): public names, sorted
//!        ▼
//!   Registry::load(name)
//!        │  not found → AlgorithmNotFound
//!        │  duplicate / no entry point / setup panic → InvalidContract
//!        ▼
//! AlgorithmDescriptor (cached, append-only)
//! ```

use crate::error::BenchError;
use crate::harness::panic_message;
use crate::{AlgorithmDef, SortFn};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, PoisonError};

/// Names whose `setup` hook already ran in this process
static COMPLETED_SETUPS: Mutex<BTreeSet<&'static str>> = Mutex::new(BTreeSet::new());

/// A loaded strategy: a unique name bound to a conforming entry point.
///
/// Identity is the name; two descriptors with the same name are equal.
#[derive(Debug, Clone)]
pub struct AlgorithmDescriptor {
    name: &'static str,
    description: &'static str,
    entry: SortFn,
}

impl AlgorithmDescriptor {
    /// Bind a name to an entry point directly, bypassing discovery
    pub fn new(name: &'static str, entry: SortFn) -> Self {
        Self {
            name,
            description: "",
            entry,
        }
    }

    /// Strategy name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The strategy's entry point
    pub fn entry(&self) -> SortFn {
        self.entry
    }
}

impl PartialEq for AlgorithmDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for AlgorithmDescriptor {}

/// Snapshot of the discoverable strategies plus the descriptors loaded so far
pub struct Registry {
    source_name: String,
    defs: Vec<&'static AlgorithmDef>,
    loaded: BTreeMap<&'static str, AlgorithmDescriptor>,
}

impl Registry {
    /// Snapshot every strategy linked into this binary
    pub fn discover() -> Self {
        Self::from_defs("linked strategies", inventory::iter::<AlgorithmDef>)
    }

    /// Build a registry over an explicit table of definitions
    pub fn from_defs(
        source_name: impl Into<String>,
        defs: impl IntoIterator<Item = &'static AlgorithmDef>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            defs: defs.into_iter().collect(),
            loaded: BTreeMap::new(),
        }
    }

    /// Label of the discovery source, used in error messages
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    fn ensure_source(&self) -> Result<(), BenchError> {
        if self.defs.is_empty() {
            return Err(BenchError::DiscoverySourceMissing {
                source_name: self.source_name.clone(),
            });
        }
        Ok(())
    }

    /// Public strategy names, sorted and deduplicated
    pub fn list_available(&self) -> Result<Vec<String>, BenchError> {
        self.ensure_source()?;

        let names: BTreeSet<&str> = self
            .defs
            .iter()
            .filter(|def| !def.is_private())
            .map(|def| def.name)
            .collect();

        Ok(names.into_iter().map(str::to_string).collect())
    }

    /// Public definitions sorted by name, one per name (first registration wins)
    pub fn definitions(&self) -> Result<Vec<&'static AlgorithmDef>, BenchError> {
        self.ensure_source()?;

        let mut by_name: BTreeMap<&str, &'static AlgorithmDef> = BTreeMap::new();
        for def in self.defs.iter().filter(|def| !def.is_private()) {
            by_name.entry(def.name).or_insert(def);
        }

        Ok(by_name.into_values().collect())
    }

    /// Resolve and validate a strategy by name.
    ///
    /// Idempotent: later calls return the cached descriptor and never re-run
    /// the strategy's `setup` hook.
    pub fn load(&mut self, name: &str) -> Result<AlgorithmDescriptor, BenchError> {
        self.ensure_source()?;

        if let Some(descriptor) = self.loaded.get(name) {
            return Ok(descriptor.clone());
        }

        let candidates: Vec<&'static AlgorithmDef> = self
            .defs
            .iter()
            .copied()
            .filter(|def| !def.is_private() && def.name == name)
            .collect();

        let def = match candidates.as_slice() {
            [] => {
                return Err(BenchError::AlgorithmNotFound {
                    name: name.to_string(),
                    available: self.list_available()?,
                });
            }
            [def] => *def,
            duplicates => {
                let locations: Vec<String> = duplicates
                    .iter()
                    .map(|d| format!("{}:{}", d.file, d.line))
                    .collect();
                return Err(BenchError::InvalidContract {
                    name: name.to_string(),
                    reason: format!(
                        "registered {} times ({})",
                        duplicates.len(),
                        locations.join(", ")
                    ),
                });
            }
        };

        let Some(entry) = def.entry else {
            return Err(BenchError::InvalidContract {
                name: name.to_string(),
                reason: "no `fn(Vec<String>) -> Vec<String>` entry point".to_string(),
            });
        };

        if let Some(setup) = def.setup {
            run_setup_once(def.name, setup)?;
        }

        let descriptor = AlgorithmDescriptor {
            name: def.name,
            description: def.description,
            entry,
        };
        self.loaded.insert(def.name, descriptor.clone());
        Ok(descriptor)
    }
}

fn run_setup_once(name: &'static str, setup: fn()) -> Result<(), BenchError> {
    let first = COMPLETED_SETUPS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(name);
    if !first {
        return Ok(());
    }

    std::panic::catch_unwind(setup).map_err(|panic| {
        COMPLETED_SETUPS
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
        BenchError::InvalidContract {
            name: name.to_string(),
            reason: format!("setup panicked: {}", panic_message(panic.as_ref())),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn std_sort(mut data: Vec<String>) -> Vec<String> {
        data.sort();
        data
    }

    const fn candidate(name: &'static str, entry: Option<SortFn>) -> AlgorithmDef {
        AlgorithmDef {
            name,
            description: "",
            entry,
            setup: None,
            file: file!(),
            line: line!(),
            module_path: module_path!(),
        }
    }

    static QUICK: AlgorithmDef = candidate("quick", Some(std_sort));
    static MERGE: AlgorithmDef = candidate("merge", Some(std_sort));
    static HELPER: AlgorithmDef = candidate("_partition", Some(std_sort));
    static HOLLOW: AlgorithmDef = candidate("hollow", None);
    static TWIN_A: AlgorithmDef = candidate("twin", Some(std_sort));
    static TWIN_B: AlgorithmDef = candidate("twin", Some(std_sort));

    static SETUP_CALLS: AtomicUsize = AtomicUsize::new(0);
    fn count_setup() {
        SETUP_CALLS.fetch_add(1, Ordering::SeqCst);
    }
    static WITH_SETUP: AlgorithmDef = AlgorithmDef {
        setup: Some(count_setup),
        ..candidate("setup_counter", Some(std_sort))
    };

    fn registry(defs: &[&'static AlgorithmDef]) -> Registry {
        Registry::from_defs("test table", defs.iter().copied())
    }

    #[test]
    fn list_available_is_sorted_and_hides_private_helpers() {
        let registry = registry(&[&QUICK, &HELPER, &MERGE]);

        let names = registry.list_available().unwrap();
        assert_eq!(names, ["merge", "quick"]);
        assert_eq!(registry.list_available().unwrap(), names);
    }

    #[test]
    fn load_unknown_name_is_not_found() {
        let mut registry = registry(&[&QUICK, &MERGE]);

        match registry.load("nonexistent") {
            Err(BenchError::AlgorithmNotFound { name, available }) => {
                assert_eq!(name, "nonexistent");
                assert_eq!(available, ["merge", "quick"]);
            }
            other => panic!("expected AlgorithmNotFound, got {:?}", other),
        }
    }

    #[test]
    fn private_helpers_cannot_be_loaded_by_name() {
        let mut registry = registry(&[&QUICK, &HELPER]);
        assert!(matches!(
            registry.load("_partition"),
            Err(BenchError::AlgorithmNotFound { .. })
        ));
    }

    #[test]
    fn empty_source_is_missing() {
        let mut registry = registry(&[]);
        assert!(matches!(
            registry.list_available(),
            Err(BenchError::DiscoverySourceMissing { .. })
        ));
        assert!(matches!(
            registry.load("quick"),
            Err(BenchError::DiscoverySourceMissing { .. })
        ));
    }

    #[test]
    fn candidate_without_entry_point_is_invalid() {
        let mut registry = registry(&[&HOLLOW, &QUICK]);
        assert!(matches!(
            registry.load("hollow"),
            Err(BenchError::InvalidContract { ref name, .. }) if name == "hollow"
        ));
        assert!(registry.load("quick").is_ok());
    }

    #[test]
    fn duplicate_names_are_listed_once_and_rejected_on_load() {
        let mut registry = registry(&[&TWIN_A, &TWIN_B]);
        assert_eq!(registry.list_available().unwrap(), ["twin"]);

        let err = registry.load("twin").unwrap_err();
        assert!(matches!(err, BenchError::InvalidContract { .. }));
        assert!(err.to_string().contains("registered 2 times"));
    }

    #[test]
    fn repeated_loads_are_idempotent() {
        let mut first = registry(&[&WITH_SETUP]);
        let a = first.load("setup_counter").unwrap();
        let b = first.load("setup_counter").unwrap();
        assert_eq!(a, b);

        let mut second = registry(&[&WITH_SETUP]);
        second.load("setup_counter").unwrap();

        assert_eq!(SETUP_CALLS.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn loaded_entry_point_sorts() {
        let mut registry = registry(&[&MERGE]);
        let descriptor = registry.load("merge").unwrap();
        let sorted = (descriptor.entry())(vec!["b".to_string(), "a".to_string()]);
        assert_eq!(sorted, ["a", "b"]);
    }
}
