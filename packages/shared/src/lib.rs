//! Shared utilities for the Kura workspace.
//!
//! Cross-cutting concerns used by the other packages: logger setup and
//! time helpers.

pub mod logger;
pub mod time;
