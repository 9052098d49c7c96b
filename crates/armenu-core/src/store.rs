use crate::constants::STORAGE_KEY;
use crate::dish::DishRecord;
use crate::error::MenuError;
use std::collections::HashMap;

/// Key-value store of serialized documents (browser local storage, or memory).
pub trait BlobStore {
    fn get(&self, key: &str) -> Result<Option<String>, MenuError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), MenuError>;
}

/// Volatile store used on the host and as a fallback when the browser denies
/// access to local storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, MenuError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), MenuError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, MenuError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), MenuError> {
        (**self).set(key, value)
    }
}

/// Whole-document persistence of the dish list under a single key.
pub struct DishRepository<S: BlobStore> {
    store: S,
    key: String,
}

impl<S: BlobStore> DishRepository<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read every record. A missing, blank or unreadable document yields the
    /// built-in default dish. Writing it back is best-effort: a read-only
    /// store still gets the default.
    pub fn load_all(&mut self) -> Result<Vec<DishRecord>, MenuError> {
        let raw = self.store.get(&self.key)?;
        let parsed = match raw.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(doc) => match serde_json::from_str::<Vec<DishRecord>>(doc) {
                Ok(dishes) => Some(dishes),
                Err(e) => {
                    log::warn!("[store] discarding unreadable dish document: {}", e);
                    None
                }
            },
        };
        match parsed {
            Some(dishes) => Ok(dishes),
            None => {
                let dishes = vec![DishRecord::default_dish()];
                if let Err(e) = self.save_all(&dishes) {
                    log::warn!("[store] could not persist default dish: {}", e);
                }
                Ok(dishes)
            }
        }
    }

    /// Replace the stored document with `dishes`.
    pub fn save_all(&mut self, dishes: &[DishRecord]) -> Result<(), MenuError> {
        let doc = serde_json::to_string(dishes)?;
        self.store.set(&self.key, &doc)?;
        log::debug!("[store] saved {} dishes", dishes.len());
        Ok(())
    }
}
