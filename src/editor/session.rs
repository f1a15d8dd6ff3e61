//! Live score entry for one division
//!
//! The editor keeps the division's entries ranked at all times. Each accepted
//! edit re-ranks the whole division, publishes the new list to subscribers
//! and hands the edited entry, and only that entry, to the [`ScoreSink`].

use crate::editor::display::ScoreRow;
use crate::editor::sink::ScoreSink;
use crate::error::{Result, ScoringError};
use crate::ranking::rank;
use crate::types::{CompetitorId, ScoreEntry, ScoringDirection};
use crate::utils::{current_timestamp, parse_score_input};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// A save started by an accepted edit
///
/// The save runs in the background whether or not this handle is kept.
/// Awaiting [`PendingSave::outcome`] reports its result exactly once.
#[derive(Debug)]
pub struct PendingSave {
    entry: ScoreEntry,
    handle: JoinHandle<Result<()>>,
}

impl PendingSave {
    /// The entry that was sent to the sink
    pub fn entry(&self) -> &ScoreEntry {
        &self.entry
    }

    /// Wait for the save to finish
    pub async fn outcome(self) -> Result<()> {
        match self.handle.await {
            Ok(result) => result,
            Err(e) => Err(ScoringError::SaveFailed {
                competitor_id: self.entry.competitor_id,
                message: format!("save task did not complete: {}", e),
            }
            .into()),
        }
    }
}

/// Interactive score editor for a single division
pub struct ScoreEntryEditor {
    direction: ScoringDirection,
    editable: bool,
    entries: Vec<ScoreEntry>,
    sink: Arc<dyn ScoreSink>,
    changes: watch::Sender<Vec<ScoreEntry>>,
}

impl ScoreEntryEditor {
    /// Create an editor over a division snapshot; the entries are ranked immediately
    pub fn new(
        entries: Vec<ScoreEntry>,
        direction: ScoringDirection,
        editable: bool,
        sink: Arc<dyn ScoreSink>,
    ) -> Self {
        let ranked = rank(&entries, direction);
        let (changes, _) = watch::channel(ranked.clone());

        Self {
            direction,
            editable,
            entries: ranked,
            sink,
            changes,
        }
    }

    /// Replace the division snapshot, e.g. after the backend reloads it
    pub fn load(&mut self, entries: Vec<ScoreEntry>) {
        self.entries = rank(&entries, self.direction);
        self.changes.send_replace(self.entries.clone());
        debug!("Loaded {} entries into score editor", self.entries.len());
    }

    /// Current entries in standing order
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn entry(&self, competitor_id: &str) -> Option<&ScoreEntry> {
        self.entries
            .iter()
            .find(|entry| entry.competitor_id == competitor_id)
    }

    pub fn direction(&self) -> ScoringDirection {
        self.direction
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    /// Toggle whether score fields accept input
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    /// Display rows in standing order
    pub fn rows(&self) -> Vec<ScoreRow> {
        self.entries
            .iter()
            .map(|entry| ScoreRow::from_entry(entry, self.editable))
            .collect()
    }

    /// Subscribe to the full ranked list, republished after every change
    pub fn subscribe(&self) -> watch::Receiver<Vec<ScoreEntry>> {
        self.changes.subscribe()
    }

    /// Submit free-text score input for one competitor
    ///
    /// Input that does not parse as a finite number is ignored. See
    /// [`ScoreEntryEditor::submit_raw_score`] for the rest of the contract.
    pub fn submit_score(&mut self, competitor_id: &str, input: &str) -> Option<PendingSave> {
        match parse_score_input(input) {
            Some(raw_score) => self.submit_raw_score(competitor_id, raw_score),
            None => {
                debug!(
                    "Ignoring unparsable score input {:?} for competitor {}",
                    input, competitor_id
                );
                None
            }
        }
    }

    /// Record a new raw score for one competitor
    ///
    /// Returns `None` and changes nothing when the editor is read-only, the
    /// competitor is not in this division, the score is not finite or there
    /// is no tokio runtime to run the save on. Otherwise re-ranks the whole
    /// division, publishes the new list and starts exactly one save carrying
    /// the edited entry.
    pub fn submit_raw_score(&mut self, competitor_id: &str, raw_score: f64) -> Option<PendingSave> {
        if !self.editable {
            debug!(
                "Score editor is read-only, ignoring score for competitor {}",
                competitor_id
            );
            return None;
        }

        if !raw_score.is_finite() {
            debug!(
                "Ignoring non-finite score for competitor {}",
                competitor_id
            );
            return None;
        }

        let Some(position) = self
            .entries
            .iter()
            .position(|entry| entry.competitor_id == competitor_id)
        else {
            debug!("Competitor {} not in this division, ignoring score", competitor_id);
            return None;
        };

        let Ok(runtime) = Handle::try_current() else {
            warn!(
                "No async runtime available to save score for competitor {}, edit dropped",
                competitor_id
            );
            return None;
        };

        let mut merged = self.entries.clone();
        merged[position].raw_score = Some(raw_score);
        merged[position].updated_at = Some(current_timestamp());

        self.entries = rank(&merged, self.direction);
        self.changes.send_replace(self.entries.clone());

        let updated = self.entry(competitor_id)?.clone();
        info!(
            "Score {} recorded for competitor {} (rank {}, medal {})",
            raw_score, competitor_id, updated.rank, updated.medal
        );

        Some(self.spawn_save(&runtime, updated))
    }

    /// Save every entry of the division with its current rank and medal
    ///
    /// Used to push a division's standings to storage before results are
    /// published. Starts one save per entry. Nothing is saved when the editor
    /// is read-only or there is no tokio runtime.
    pub fn save_all(&self) -> Vec<PendingSave> {
        if !self.editable {
            debug!("Score editor is read-only, not saving standings");
            return Vec::new();
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!("No async runtime available to save standings");
            return Vec::new();
        };

        info!("Saving standings for {} entries", self.entries.len());

        self.entries
            .iter()
            .map(|entry| self.spawn_save(&runtime, entry.clone()))
            .collect()
    }

    fn spawn_save(&self, runtime: &Handle, entry: ScoreEntry) -> PendingSave {
        let sink = Arc::clone(&self.sink);
        let to_save = entry.clone();
        let competitor_id: CompetitorId = entry.competitor_id.clone();

        let handle = runtime.spawn(async move {
            let result = sink.save_score(to_save).await;
            if let Err(e) = &result {
                warn!("Failed to save score for competitor {}: {}", competitor_id, e);
            }
            result
        });

        PendingSave { entry, handle }
    }
}
