use armenu_core::{BlobStore, MemoryStore, MenuError};
use web_sys as web;

/// `window.localStorage` as a [`BlobStore`].
pub struct LocalStorage {
    storage: web::Storage,
}

impl LocalStorage {
    pub fn open() -> Option<Self> {
        let storage = web::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl BlobStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, MenuError> {
        self.storage
            .get_item(key)
            .map_err(|e| MenuError::Storage(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), MenuError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| MenuError::Storage(format!("{:?}", e)))
    }
}

/// Local storage when the browser grants it, otherwise an in-memory store
/// that lasts for this page load.
pub fn open_store() -> Box<dyn BlobStore> {
    match LocalStorage::open() {
        Some(s) => Box::new(s),
        None => {
            log::warn!("[store] localStorage unavailable; dishes will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
