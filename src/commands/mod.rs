//! Remote Calls
//!
//! Wrappers around the page's HTTP endpoints, organized by domain.

mod csrf;
mod task;

pub use csrf::*;
pub use task::*;
