//! Workspace-level integration tests for fibdrv.
//!
//! This crate has no code of its own; see `tests/`.
