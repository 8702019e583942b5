use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::any::Any;
use std::sync::Arc;

/// Cache key: the owning build (root project identity) plus the entry name
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct CacheKey {
    owner: String,
    key: String,
}

impl CacheKey {
    fn new(owner: &str, key: &str) -> Self {
        Self {
            owner: owner.to_string(),
            key: key.to_string(),
        }
    }
}

type CachedValue = Arc<dyn Any + Send + Sync>;

/// BuildCache memoises values computed once per build invocation.
///
/// It is owned by the top-level invocation and handed to collaborators by
/// reference. Entries are populated lazily on a miss; dropping the cache or
/// recomputing an entry never changes resolution results.
#[derive(Default)]
pub struct BuildCache {
    entries: DashMap<CacheKey, CachedValue>,
}

impl BuildCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `(owner, key)`, computing it with
    /// `supplier` on a miss.
    ///
    /// An entry holding a value of a different type is treated as a miss and
    /// replaced.
    pub fn get_or_insert_with<T, F>(&self, owner: &str, key: &str, supplier: F) -> Arc<T>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> T,
    {
        match self.entries.entry(CacheKey::new(owner, key)) {
            Entry::Occupied(mut occupied) => {
                let existing = occupied.get().clone();
                match existing.downcast::<T>() {
                    Ok(value) => value,
                    Err(_) => {
                        let value = Arc::new(supplier());
                        occupied.insert(value.clone());
                        value
                    }
                }
            }
            Entry::Vacant(vacant) => {
                let value = Arc::new(supplier());
                vacant.insert(value.clone());
                value
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for BuildCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuildCache")
            .field("entries", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashSet;

    #[test]
    fn test_supplier_runs_once_per_key() {
        let cache = BuildCache::new();
        let calls = Cell::new(0);

        let first = cache.get_or_insert_with("root", "projects", || {
            calls.set(calls.get() + 1);
            vec!["a".to_string()]
        });
        let second = cache.get_or_insert_with("root", "projects", || {
            calls.set(calls.get() + 1);
            vec!["b".to_string()]
        });

        assert_eq!(calls.get(), 1);
        assert_eq!(*first, vec!["a".to_string()]);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_owners_are_isolated() {
        let cache = BuildCache::new();
        cache.get_or_insert_with("build-a", "ids", || 1u32);
        let value = cache.get_or_insert_with("build-b", "ids", || 2u32);

        assert_eq!(*value, 2);
        assert_eq!(cache.len(), 2);
        assert_eq!(*cache.get_or_insert_with("build-a", "ids", || 3u32), 1);
    }

    #[test]
    fn test_type_mismatch_recomputes() {
        let cache = BuildCache::new();
        cache.get_or_insert_with("root", "ids", || 7u32);
        let value: Arc<HashSet<String>> =
            cache.get_or_insert_with("root", "ids", || HashSet::from(["x".to_string()]));

        assert!(value.contains("x"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_new_cache_is_empty() {
        let cache = BuildCache::new();
        assert!(cache.is_empty());
        assert_eq!(format!("{:?}", cache), "BuildCache { entries: 0 }");
    }
}
