//! Application logic for the `fibdrv` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
