use super::storage::SessionStore;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory session store for tests and embedding.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .expect("session store lock poisoned")
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.entries
            .lock()
            .expect("session store lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.entries
            .lock()
            .expect("session store lock poisoned")
            .remove(key);
        Ok(())
    }
}
