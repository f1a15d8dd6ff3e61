//! Summaries derived from ranked entries
//!
//! These read the `rank`/`medal` fields, so feed them the output of
//! [`crate::ranking::rank`], not raw entries.

use crate::types::{CompetitorId, Medal, ScoreEntry, UNRANKED_RANK};
use serde::{Deserialize, Serialize};

/// Medal counts across a set of ranked entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalTally {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalTally {
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a ScoreEntry>,
    {
        let mut tally = Self::default();
        for entry in entries {
            tally.record(entry.medal);
        }
        tally
    }

    pub fn record(&mut self, medal: Medal) {
        match medal {
            Medal::Gold => self.gold += 1,
            Medal::Silver => self.silver += 1,
            Medal::Bronze => self.bronze += 1,
            Medal::None => {}
        }
    }

    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

/// Competitors with a positive score, in entry order
///
/// These are the competitors whose families are notified when a division's
/// results are published.
pub fn scored_competitors(entries: &[ScoreEntry]) -> Vec<CompetitorId> {
    entries
        .iter()
        .filter(|entry| entry.contending_score().is_some())
        .map(|entry| entry.competitor_id.clone())
        .collect()
}

/// Human-readable placement such as "1st Place"; `None` when unranked
pub fn placement_label(rank: u32) -> Option<String> {
    if rank == 0 || rank == UNRANKED_RANK {
        return None;
    }

    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };

    Some(format!("{}{} Place", rank, suffix))
}
