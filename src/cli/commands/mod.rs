//! CLI command implementations.

pub mod check;
pub mod env;
pub mod show;
