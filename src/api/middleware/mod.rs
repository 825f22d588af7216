//! Middleware components for request processing.
//!
//! This module contains middleware for logging, request ID tracking,
//! session resolution and error rendering.

mod error_handler;
mod logging;
mod request_id;
mod session;

pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
pub use session::{RequireSession, Session, UNAUTHORIZED_MESSAGE, session_middleware};
