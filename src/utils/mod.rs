//! Shared helpers.

pub mod log;
