//! Session handling and role-based landing-route resolution for the hotel
//! management dashboards.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod resolver;
pub mod routes;
pub mod session;
