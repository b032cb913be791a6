//! Duplicate-lookup suppression for host form fields.
//!
//! The host owns one cache per form instance and threads it through each
//! lookup call instead of stashing state on the form object.

/// Remembers the last resolved key/value pair for one lookup field.
#[derive(Debug)]
pub struct LookupCache<K, V> {
    last: Option<(K, V)>,
    fetches: u64,
}

impl<K, V> Default for LookupCache<K, V> {
    fn default() -> Self {
        Self {
            last: None,
            fetches: 0,
        }
    }
}

impl<K: PartialEq, V: Clone> LookupCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fetches actually performed.
    pub fn fetches(&self) -> u64 {
        self.fetches
    }

    /// Returns the cached value when `key` matches the last resolved key,
    /// otherwise runs `fetch` and caches its result. A failed fetch clears
    /// the cache so the next call retries.
    pub fn resolve<E>(&mut self, key: K, fetch: impl FnOnce(&K) -> Result<V, E>) -> Result<V, E> {
        if let Some((cached_key, cached_value)) = &self.last {
            if *cached_key == key {
                return Ok(cached_value.clone());
            }
        }
        self.last = None;
        self.fetches += 1;
        let value = fetch(&key)?;
        self.last = Some((key, value.clone()));
        Ok(value)
    }

    /// Drops the cached pair, forcing the next resolve to fetch.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}
