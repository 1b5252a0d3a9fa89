// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for running the demo pipeline.
//!
//! This module contains the command-line interface logic, including argument
//! parsing and the `run` command implementation.

// Modules
/// CLI arguments.
pub mod args;

/// Demo pipeline loop.
pub mod run;
