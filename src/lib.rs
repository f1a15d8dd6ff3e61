//! Medal Table - rankings and medals for community games divisions
//!
//! This crate turns a division's raw scores into ranks and gold/silver/bronze
//! medals, and provides a live score editor that re-ranks on every edit and
//! persists the edited entry through a pluggable sink.

pub mod config;
pub mod division;
pub mod editor;
pub mod error;
pub mod ranking;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Result, ScoringError};
pub use types::*;

// Re-export key components
pub use division::DivisionSheet;
pub use editor::{ScoreEntryEditor, ScoreSink};
pub use ranking::rank;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
