//! Interactive score entry for a division
//!
//! This module wraps the ranking engine in an editable, always-sorted view
//! and defines the seam through which edited scores are persisted.

pub mod display;
pub mod session;
pub mod sink;

// Re-export commonly used types
pub use display::{render_table, short_name, ScoreRow};
pub use session::{PendingSave, ScoreEntryEditor};
pub use sink::{JsonLinesScoreSink, NoOpScoreSink, ScoreSink};
