pub mod client;
pub mod models;

pub use client::login_request;
pub use models::{LoginRequest, LoginResponse};
