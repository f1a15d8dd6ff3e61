//! Score-to-rank-to-medal assignment
//!
//! Every screen and tool that shows standings goes through [`rank`], so a
//! division never displays two different medal tables for the same scores.

use crate::types::{Medal, ScoreEntry, ScoringDirection, UNRANKED_RANK};
use std::cmp::Ordering;

/// Coarse standing group: contending scores, then zero or negative scores,
/// then entries with no score at all.
fn standing_group(entry: &ScoreEntry) -> u8 {
    match entry.raw_score {
        Some(score) if score > 0.0 => 0,
        Some(_) => 1,
        None => 2,
    }
}

/// Effective-score ordering used for ranking and display
///
/// Best contending score first according to `direction`. Entries that cannot
/// medal always sort after every contending entry, and unscored entries sort
/// last. Entries that compare equal keep their relative input order when the
/// caller uses a stable sort.
pub fn compare_standing(a: &ScoreEntry, b: &ScoreEntry, direction: ScoringDirection) -> Ordering {
    standing_group(a)
        .cmp(&standing_group(b))
        .then_with(|| match (a.contending_score(), b.contending_score()) {
            (Some(x), Some(y)) => match direction {
                ScoringDirection::LowerIsBetter => x.total_cmp(&y),
                ScoringDirection::HigherIsBetter => y.total_cmp(&x),
            },
            _ => Ordering::Equal,
        })
}

/// Rank a division's entries and assign medals
///
/// Returns fresh copies in standing order. Ranks are dense over distinct
/// positive scores: tied scores share a rank and the next distinct score
/// takes the next rank (1, 1, 2). Entries whose score is absent, zero or
/// negative get [`UNRANKED_RANK`] and no medal. Incoming `rank` and `medal`
/// values are ignored.
pub fn rank(entries: &[ScoreEntry], direction: ScoringDirection) -> Vec<ScoreEntry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| compare_standing(a, b, direction));

    let mut score_class = 0u32;
    let mut last_score: Option<f64> = None;

    for entry in &mut ranked {
        entry.rank = match entry.contending_score() {
            Some(score) => {
                if last_score != Some(score) {
                    score_class += 1;
                    last_score = Some(score);
                }
                score_class
            }
            None => UNRANKED_RANK,
        };
        entry.medal = Medal::for_rank(entry.rank);
    }

    ranked
}
