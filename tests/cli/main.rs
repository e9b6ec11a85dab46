//! CLI integration tests for hearth.
//!
//! These tests execute the compiled binary and verify CLI behavior
//! including:
//! - Subcommand behavior (build, check, parse)
//! - Exit codes
//! - File I/O operations
//! - Error handling and batch reporting

mod build;
mod check;
mod common;
