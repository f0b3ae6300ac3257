//! Request handler module
//!
//! Routing table, the logging/recovery middleware, and the twelve simulated endpoints.

pub mod backend;
pub mod canned;
pub mod content;
pub mod external;
pub mod file_io;
pub mod middleware;
pub mod router;

// Re-export main entry point
pub use middleware::handle_request;
