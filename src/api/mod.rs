//! API Lambda handler and request processing

pub mod dispatch;
pub mod handler;
pub mod parsing;
pub mod response;

// Re-export the main handler for convenience
pub use handler::ChatHandler;
