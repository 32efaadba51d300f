//! Integration tests for readmegen
//!
//! These tests run the analyzer, badge renderer and validator together on
//! fixture projects, and drive the `readmegen` binary to check its output
//! and exit codes.

pub mod cli;
pub mod helpers;
pub mod pipeline;
