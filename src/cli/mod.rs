//! CLI module for HealthPath
//!
//! Handles command-line argument parsing.

pub mod args;

pub use args::{Args, Commands, ProfileArgs, Verbosity};
