use super::storage::SessionStore;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Session store backed by one file per key under `$HOME/.cache/hoteldesk`.
pub struct FilesystemSessionStore;

impl FilesystemSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn store_dir(&self) -> PathBuf {
        let home = env::var("HOME").expect("HOME environment variable not set");
        let store_dir = Path::new(&home).join(".cache").join("hoteldesk");
        if !store_dir.exists() {
            fs::create_dir_all(&store_dir).expect("Failed to create session directory");
        }
        store_dir
    }
}

impl SessionStore for FilesystemSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.store_dir().join(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        fs::write(self.store_dir().join(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Box<dyn std::error::Error>> {
        match fs::remove_file(self.store_dir().join(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

impl Default for FilesystemSessionStore {
    fn default() -> Self {
        Self::new()
    }
}
