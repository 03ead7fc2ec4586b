use serde::{Deserialize, Serialize};

/// Body of `POST /api/auth/login`.
#[derive(Serialize, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response. `roles` is the wire spelling of a single role.
#[derive(Deserialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub roles: String,
}
