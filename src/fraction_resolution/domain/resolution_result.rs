use super::DependencyDescriptor;
use std::collections::hash_map::Entry;
use std::collections::{BTreeSet, HashMap, HashSet};

/// Top-level dependency → the dependencies it brings along.
///
/// A key is written once. [`ResolutionResult::claim`] is the only way to
/// create an entry together with its final value, and it refuses keys that
/// already exist; [`ResolutionResult::attach`] only grows a value set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionResult {
    entries: HashMap<DependencyDescriptor, HashSet<DependencyDescriptor>>,
}

impl ResolutionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains_key(&self, key: &DependencyDescriptor) -> bool {
        self.entries.contains_key(key)
    }

    /// Atomically checks for `key` and inserts it with `children` when
    /// absent. Returns `false` if another root already owns the key.
    pub fn claim(&mut self, key: DependencyDescriptor, children: HashSet<DependencyDescriptor>) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(children);
                true
            }
        }
    }

    /// Adds `child` under `key`, creating the entry if needed
    pub fn attach(&mut self, key: &DependencyDescriptor, child: DependencyDescriptor) {
        match self.entries.get_mut(key) {
            Some(children) => {
                children.insert(child);
            }
            None => {
                self.entries.insert(key.clone(), HashSet::from([child]));
            }
        }
    }

    pub fn get(&self, key: &DependencyDescriptor) -> Option<&HashSet<DependencyDescriptor>> {
        self.entries.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &DependencyDescriptor> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DependencyDescriptor, &HashSet<DependencyDescriptor>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries and children in a stable order, for display and reports
    pub fn sorted(&self) -> Vec<(&DependencyDescriptor, BTreeSet<&DependencyDescriptor>)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(key, children)| (key, children.iter().collect::<BTreeSet<_>>()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fraction_resolution::domain::{ModuleCoordinates, Scope};

    fn descriptor(name: &str) -> DependencyDescriptor {
        DependencyDescriptor::new(
            Scope::Compile,
            &ModuleCoordinates::new("org.acme", name, "1.0"),
            "jar",
            None,
            None,
        )
    }

    #[test]
    fn test_claim_is_first_writer_wins() {
        let mut result = ResolutionResult::new();
        assert!(result.claim(descriptor("a"), HashSet::from([descriptor("x")])));
        assert!(!result.claim(descriptor("a"), HashSet::from([descriptor("y")])));

        let children = result.get(&descriptor("a")).unwrap();
        assert!(children.contains(&descriptor("x")));
        assert!(!children.contains(&descriptor("y")));
    }

    #[test]
    fn test_attach_creates_and_grows() {
        let mut result = ResolutionResult::new();
        result.attach(&descriptor("root"), descriptor("x"));
        result.attach(&descriptor("root"), descriptor("y"));
        result.attach(&descriptor("root"), descriptor("x"));

        assert_eq!(result.len(), 1);
        assert_eq!(result.get(&descriptor("root")).unwrap().len(), 2);
    }

    #[test]
    fn test_sorted_is_stable() {
        let mut result = ResolutionResult::new();
        result.attach(&descriptor("b"), descriptor("z"));
        result.attach(&descriptor("b"), descriptor("m"));
        result.claim(descriptor("a"), HashSet::new());

        let sorted = result.sorted();
        assert_eq!(sorted[0].0, &descriptor("a"));
        assert_eq!(sorted[1].0, &descriptor("b"));
        let children: Vec<_> = sorted[1].1.iter().map(|d| d.artifact()).collect();
        assert_eq!(children, vec!["m", "z"]);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut left = ResolutionResult::new();
        left.attach(&descriptor("a"), descriptor("x"));
        left.attach(&descriptor("a"), descriptor("y"));

        let mut right = ResolutionResult::new();
        right.attach(&descriptor("a"), descriptor("y"));
        right.attach(&descriptor("a"), descriptor("x"));

        assert_eq!(left, right);
    }
}
