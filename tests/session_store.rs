use hoteldesk::session::{FilesystemSessionStore, SessionStore, TOKEN_KEY, USER_KEY};
use std::fs;
use std::sync::Mutex;
use tempfile::TempDir;

// Tests override HOME, so they must not run concurrently.
static HOME_LOCK: Mutex<()> = Mutex::new(());

fn with_temp_home(test: impl FnOnce(&FilesystemSessionStore)) {
    let _guard = HOME_LOCK.lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let store_dir = temp_dir.path().join(".cache").join("hoteldesk");
    fs::create_dir_all(&store_dir).unwrap();

    std::env::set_var("HOME", temp_dir.path().to_str().unwrap());

    test(&FilesystemSessionStore::new());
}

#[test]
fn test_set_and_get() {
    with_temp_home(|store| {
        store.set(TOKEN_KEY, "t1").unwrap();
        assert_eq!(store.get(TOKEN_KEY), Some("t1".to_string()));
    });
}

#[test]
fn test_get_missing_key_returns_none() {
    with_temp_home(|store| {
        assert_eq!(store.get(USER_KEY), None);
    });
}

#[test]
fn test_set_overwrites() {
    with_temp_home(|store| {
        store.set(TOKEN_KEY, "t1").unwrap();
        store.set(TOKEN_KEY, "t2").unwrap();
        assert_eq!(store.get(TOKEN_KEY), Some("t2".to_string()));
    });
}

#[test]
fn test_remove_is_idempotent() {
    with_temp_home(|store| {
        store.set(TOKEN_KEY, "t1").unwrap();
        store.remove(TOKEN_KEY).unwrap();
        assert_eq!(store.get(TOKEN_KEY), None);

        // Removing an absent key succeeds
        store.remove(TOKEN_KEY).unwrap();
    });
}

#[test]
fn test_keys_are_independent() {
    with_temp_home(|store| {
        store.set(TOKEN_KEY, "t1").unwrap();
        store.set(USER_KEY, r#"{"username":"a"}"#).unwrap();
        store.remove(TOKEN_KEY).unwrap();
        assert_eq!(store.get(TOKEN_KEY), None);
        assert_eq!(store.get(USER_KEY), Some(r#"{"username":"a"}"#.to_string()));
    });
}
