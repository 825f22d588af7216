//! Emprega admin library
//!
//! Core modules for the job board admin backend.

pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use state::AppState;

pub fn pkg_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
