//! Table rows for showing a division's standings

use crate::types::{CompetitorId, Medal, ScoreEntry};
use serde::{Deserialize, Serialize};

/// One rendered row of a standings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRow {
    pub competitor_id: CompetitorId,
    pub short_name: String,
    pub age: u32,
    pub score_text: String,
    pub rank: u32,
    pub position_text: String,
    pub medal: Medal,
    /// Whether the score cell accepts input
    pub editable: bool,
}

impl ScoreRow {
    pub fn from_entry(entry: &ScoreEntry, editable: bool) -> Self {
        Self {
            competitor_id: entry.competitor_id.clone(),
            short_name: short_name(&entry.display_name),
            age: entry.age,
            score_text: score_text(entry.raw_score),
            rank: entry.rank,
            position_text: if entry.is_ranked() {
                entry.rank.to_string()
            } else {
                "-".to_string()
            },
            medal: entry.medal,
            editable,
        }
    }
}

/// First name plus the initial of the second name: "Kavin Raj Kumar" -> "Kavin R."
pub fn short_name(full_name: &str) -> String {
    let mut parts = full_name.split_whitespace();
    let first = parts.next().unwrap_or_default();

    match parts.next().and_then(|second| second.chars().next()) {
        Some(initial) => format!("{} {}.", first, initial),
        None => first.to_string(),
    }
}

pub fn score_text(raw_score: Option<f64>) -> String {
    raw_score
        .map(|score| score.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Render rows as a fixed-width text table
pub fn render_table(rows: &[ScoreRow]) -> String {
    let mut out = format!(
        "{:<18} {:>4} {:>8} {:>8} {:>6}\n",
        "Name", "Age", "Score", "Position", "Medal"
    );

    for row in rows {
        let name = format!("{} {}", row.short_name, row.medal.emoji());
        out.push_str(&format!(
            "{:<18} {:>4} {:>8} {:>8} {:>6}\n",
            name.trim_end(),
            row.age,
            row.score_text,
            row.position_text,
            row.medal.letter()
        ));
    }

    out
}
