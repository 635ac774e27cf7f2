//! Command handlers for the `snaps` binary

pub mod check;
pub mod config;
pub mod list;
