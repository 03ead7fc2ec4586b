/// Key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Key holding the serialized [`crate::models::UserRecord`].
pub const USER_KEY: &str = "user";

/// Trait for session storage backends.
///
/// A store is an unsynchronized key-value resource; concurrent writers are
/// not coordinated and the last write wins.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), Box<dyn std::error::Error>>;
}
