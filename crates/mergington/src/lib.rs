//! The shared library for Mergington, the extracurricular activity sign-up service.
//!
//! This library holds the pieces the backend and its clients agree on: the
//! activity data structures and response bodies, the error types, and logging.

pub mod data;
pub mod errors;
pub mod log;

pub use serde;
pub use serde_json;
pub use tracing;
