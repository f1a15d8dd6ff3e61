//! Persistence seam for edited scores

use crate::error::{Result, ScoringError};
use crate::types::ScoreEntry;
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;
use tracing::debug;

/// Trait for persisting a single edited score entry
///
/// Implementations talk to whatever storage backs the event. The editor calls
/// this once per accepted edit with the edited entry only.
#[async_trait]
pub trait ScoreSink: Send + Sync {
    /// Persist one entry with its recomputed rank and medal
    async fn save_score(&self, entry: ScoreEntry) -> Result<()>;
}

/// Sink that accepts and discards every entry (read-only viewers, dry runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpScoreSink;

#[async_trait]
impl ScoreSink for NoOpScoreSink {
    async fn save_score(&self, entry: ScoreEntry) -> Result<()> {
        debug!("Discarding score for competitor {}", entry.competitor_id);
        Ok(())
    }
}

/// Sink that writes each saved entry as one line of JSON
pub struct JsonLinesScoreSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesScoreSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl<W: Write + Send> ScoreSink for JsonLinesScoreSink<W> {
    async fn save_score(&self, entry: ScoreEntry) -> Result<()> {
        let line = serde_json::to_string(&entry)?;

        let mut writer = self.writer.lock().map_err(|_| ScoringError::SaveFailed {
            competitor_id: entry.competitor_id.clone(),
            message: "Failed to acquire writer lock".to_string(),
        })?;

        writeln!(writer, "{}", line).map_err(|e| ScoringError::SaveFailed {
            competitor_id: entry.competitor_id.clone(),
            message: e.to_string(),
        })?;
        writer.flush()?;

        Ok(())
    }
}
