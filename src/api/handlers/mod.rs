//! HTTP request handlers for API endpoints.
//!
//! This module contains all request handlers organized by resource type.

pub mod admins;
pub mod auth;
pub mod empregos;
pub mod health;
