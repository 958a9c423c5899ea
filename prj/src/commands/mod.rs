//! CLI command handlers. Each one resolves a fresh snapshot and prints to stdout.

pub mod env;
pub mod file;
pub mod show;
