use crate::error::{MatchError, MatchResult};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Process-lifetime keyed store. Each value carries its own lock, so work on
/// one entry never blocks another.
#[derive(Debug)]
pub struct MatchStore<T> {
    entries: RwLock<HashMap<String, Arc<Mutex<T>>>>,
}

impl<T> Default for MatchStore<T> {
    fn default() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> MatchStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &str, value: T) -> MatchResult<Arc<Mutex<T>>> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        if entries.contains_key(key) {
            return Err(MatchError::AlreadyExists(key.to_string()));
        }
        let handle = Arc::new(Mutex::new(value));
        entries.insert(key.to_string(), Arc::clone(&handle));
        Ok(handle)
    }

    pub fn get(&self, key: &str) -> MatchResult<Arc<Mutex<T>>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .cloned()
            .ok_or_else(|| MatchError::NotFound(key.to_string()))
    }

    pub fn remove(&self, key: &str) -> MatchResult<Arc<Mutex<T>>> {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries
            .remove(key)
            .ok_or_else(|| MatchError::NotFound(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<String> = entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// First key whose entry satisfies `pred`, in key order.
    pub fn find_by<F>(&self, mut pred: F) -> Option<String>
    where
        F: FnMut(&T) -> bool,
    {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let mut keys: Vec<&String> = entries.keys().collect();
        keys.sort();
        keys.into_iter().find(|key| {
            entries
                .get(*key)
                .map(|entry| pred(&entry.lock().unwrap_or_else(PoisonError::into_inner)))
                .unwrap_or(false)
        })
        .cloned()
    }
}

/// Locks an entry, recovering the data if a previous holder panicked.
pub fn lock<T>(handle: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let store = MatchStore::new();
        store.insert("a", 1u32).unwrap();
        assert!(matches!(store.insert("a", 2), Err(MatchError::AlreadyExists(_))));
        assert!(store.contains("a"));
        *lock(&store.get("a").unwrap()) += 10;
        assert_eq!(*lock(&store.get("a").unwrap()), 11);
        assert_eq!(store.find_by(|value| *value == 11), Some("a".to_string()));
        store.remove("a").unwrap();
        assert!(store.is_empty());
        assert!(matches!(store.get("a"), Err(MatchError::NotFound(_))));
    }
}
