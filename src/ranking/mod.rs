//! Ranking and medal assignment for a division's score entries
//!
//! This module holds the one ranking engine every caller routes through,
//! plus summaries derived from its output.

pub mod engine;
pub mod summary;

// Re-export commonly used items
pub use engine::{compare_standing, rank};
pub use summary::{placement_label, scored_competitors, MedalTally};
