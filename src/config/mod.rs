//! Configuration management for the medal table
//!
//! This module handles configuration loading from files and environment
//! variables, validation, and default values.

pub mod app;
pub mod divisions;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, DivisionSettings, ServiceSettings};
pub use divisions::{bracket_for_age, standard_brackets, DivisionBracket};
