use serde::{Deserialize, Serialize};

use super::Role;

/// The payload persisted under the `user` key.
///
/// `role` stays the raw string received from the authentication endpoint so
/// that a role outside the known set still loads and falls back to the
/// default landing route instead of invalidating the whole record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserRecord {
    pub username: String,
    pub role: String,
    pub logged_in_at: chrono::DateTime<chrono::Local>,
}

/// An authenticated session: the raw token plus the persisted user record.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserRecord,
}

impl Session {
    pub fn username(&self) -> &str {
        &self.user.username
    }

    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.user.role)
    }
}
