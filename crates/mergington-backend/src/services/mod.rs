//! Backend services for the activity catalog and its rosters.
//!
//! The catalog owns the activities in memory; the roster service applies the
//! membership-guarded signup and unregister operations to it.

pub mod catalog;
pub mod roster;

pub use catalog::*;
pub use roster::*;
