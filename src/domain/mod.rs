//! Domain layer for the OLS configuration
//!
//! This module contains the typed configuration tree.

pub mod models;
