//! Test fixtures and mock implementations for integration testing

#![allow(dead_code)]

use async_trait::async_trait;
use medal_table::editor::ScoreSink;
use medal_table::error::Result;
use medal_table::types::ScoreEntry;
use mockall::mock;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

mock! {
    pub Sink {}

    #[async_trait]
    impl ScoreSink for Sink {
        async fn save_score(&self, entry: ScoreEntry) -> Result<()>;
    }
}

/// Sink that captures every saved entry for later inspection
#[derive(Debug, Default)]
pub struct RecordingSink {
    saved: Arc<Mutex<Vec<ScoreEntry>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all saved entries (for testing)
    pub fn saved(&self) -> Vec<ScoreEntry> {
        self.saved
            .lock()
            .map(|saved| saved.clone())
            .unwrap_or_default()
    }

    pub fn saved_ids(&self) -> Vec<String> {
        self.saved()
            .into_iter()
            .map(|entry| entry.competitor_id)
            .collect()
    }
}

#[async_trait]
impl ScoreSink for RecordingSink {
    async fn save_score(&self, entry: ScoreEntry) -> Result<()> {
        if let Ok(mut saved) = self.saved.lock() {
            saved.push(entry);
        }
        Ok(())
    }
}

/// Sink whose saves block until the test releases them
#[derive(Debug)]
pub struct GatedSink {
    gate: Semaphore,
    inner: RecordingSink,
}

impl GatedSink {
    pub fn new() -> Self {
        Self {
            gate: Semaphore::new(0),
            inner: RecordingSink::new(),
        }
    }

    /// Let `count` pending saves complete
    pub fn release(&self, count: usize) {
        self.gate.add_permits(count);
    }

    pub fn saved(&self) -> Vec<ScoreEntry> {
        self.inner.saved()
    }
}

#[async_trait]
impl ScoreSink for GatedSink {
    async fn save_score(&self, entry: ScoreEntry) -> Result<()> {
        let permit = self.gate.acquire().await?;
        permit.forget();
        self.inner.save_score(entry).await
    }
}

/// Build a division of entries from (id, name, raw score) triples
pub fn division(
    game_id: &str,
    division_id: &str,
    rows: &[(&str, &str, Option<f64>)],
) -> Vec<ScoreEntry> {
    rows.iter()
        .map(|(id, name, score)| {
            ScoreEntry::new(*id, *name, 8)
                .with_division(game_id, division_id)
                .with_raw_score(*score)
        })
        .collect()
}

pub fn find<'a>(entries: &'a [ScoreEntry], competitor_id: &str) -> &'a ScoreEntry {
    entries
        .iter()
        .find(|entry| entry.competitor_id == competitor_id)
        .unwrap_or_else(|| panic!("competitor {} missing", competitor_id))
}
