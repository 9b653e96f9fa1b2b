//! Application configuration.
//!
//! This module provides CLI option types and parsing.

mod types;

pub use types::{Config, LogFormat, LogLevel};
