//! Division score sheets
//!
//! A sheet is the snapshot of one division handed to the ranking core by the
//! event backend: which game and division it belongs to, how the game is
//! scored, and every registered competitor's entry.

use crate::editor::{ScoreEntryEditor, ScoreSink};
use crate::error::{Result, ScoringError};
use crate::ranking::rank;
use crate::types::{DivisionId, DivisionStatus, GameId, ScoreEntry, ScoringType};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionSheet {
    pub game_id: GameId,
    pub division_id: DivisionId,
    #[serde(default)]
    pub division_name: Option<String>,
    pub scoring_type: ScoringType,
    /// Division lifecycle as reported by the backend; unknown means started
    #[serde(default)]
    pub status: Option<DivisionStatus>,
    #[serde(default)]
    pub entries: Vec<ScoreEntry>,
}

impl DivisionSheet {
    /// Parse and validate a sheet from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let mut sheet: DivisionSheet =
            serde_json::from_str(json).map_err(|e| ScoringError::InvalidDivisionSheet {
                reason: e.to_string(),
            })?;
        sheet.fill_scope();
        sheet.validate()?;
        Ok(sheet)
    }

    /// Load a sheet from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ScoringError::InvalidDivisionSheet {
                reason: format!("cannot read {}: {}", path.as_ref().display(), e),
            }
        })?;
        Self::from_json(&contents)
    }

    /// Entries that omit their game or division inherit the sheet's
    fn fill_scope(&mut self) {
        for entry in &mut self.entries {
            if entry.game_id.is_empty() {
                entry.game_id = self.game_id.clone();
            }
            if entry.division_id.is_empty() {
                entry.division_id = self.division_id.clone();
            }
        }
    }

    /// Check that competitor ids are unique and every entry belongs here
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for entry in &self.entries {
            if entry.competitor_id.trim().is_empty() {
                return Err(ScoringError::InvalidDivisionSheet {
                    reason: "entry with empty competitor_id".to_string(),
                }
                .into());
            }

            if !seen.insert(entry.competitor_id.as_str()) {
                return Err(ScoringError::DuplicateCompetitor {
                    division_id: self.division_id.clone(),
                    competitor_id: entry.competitor_id.clone(),
                }
                .into());
            }

            if entry.game_id != self.game_id {
                return Err(ScoringError::InvalidDivisionSheet {
                    reason: format!(
                        "competitor {} belongs to game {}, not {}",
                        entry.competitor_id, entry.game_id, self.game_id
                    ),
                }
                .into());
            }

            if entry.division_id != self.division_id {
                return Err(ScoringError::InvalidDivisionSheet {
                    reason: format!(
                        "competitor {} belongs to division {}, not {}",
                        entry.competitor_id, entry.division_id, self.division_id
                    ),
                }
                .into());
            }
        }

        Ok(())
    }

    /// This sheet with ranks and medals recomputed
    pub fn ranked(&self) -> Self {
        Self {
            entries: rank(&self.entries, self.scoring_type.direction()),
            ..self.clone()
        }
    }

    pub fn accepts_scores(&self) -> bool {
        self.status.map_or(true, DivisionStatus::accepts_scores)
    }

    /// Open a score editor on this division
    ///
    /// Edits are accepted only when the caller is allowed to score and the
    /// division is started.
    pub fn into_editor(self, can_score: bool, sink: Arc<dyn ScoreSink>) -> ScoreEntryEditor {
        let editable = can_score && self.accepts_scores();
        ScoreEntryEditor::new(
            self.entries,
            self.scoring_type.direction(),
            editable,
            sink,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::NoOpScoreSink;
    use crate::types::Medal;

    const SHEET: &str = r#"{
        "game_id": "uri-adi",
        "division_id": "mottu",
        "scoring_type": "time",
        "entries": [
            {"competitor_id": "c1", "display_name": "Anbu Selvan", "age": 8, "raw_score": 12.1},
            {"competitor_id": "c2", "display_name": "Bala Murugan", "age": 9, "raw_score": 11.9},
            {"competitor_id": "c3", "display_name": "Chitra Devi", "age": 7, "raw_score": null}
        ]
    }"#;

    #[test]
    fn test_parse_fills_scope_from_sheet() {
        let sheet = DivisionSheet::from_json(SHEET).unwrap();

        assert_eq!(sheet.scoring_type, ScoringType::Time);
        assert_eq!(sheet.entries.len(), 3);
        assert!(sheet.entries.iter().all(|e| e.division_id == "mottu"));
        assert!(sheet.entries.iter().all(|e| e.game_id == "uri-adi"));
    }

    #[test]
    fn test_ranked_uses_scoring_type_direction() {
        let sheet = DivisionSheet::from_json(SHEET).unwrap().ranked();

        assert_eq!(sheet.entries[0].competitor_id, "c2");
        assert_eq!(sheet.entries[0].medal, Medal::Gold);
        assert_eq!(sheet.entries[1].medal, Medal::Silver);
        assert_eq!(sheet.entries[2].competitor_id, "c3");
        assert_eq!(sheet.entries[2].medal, Medal::None);
    }

    #[test]
    fn test_duplicate_competitor_rejected() {
        let json = r#"{
            "game_id": "g", "division_id": "d", "scoring_type": "points",
            "entries": [
                {"competitor_id": "c1", "display_name": "A"},
                {"competitor_id": "c1", "display_name": "B"}
            ]
        }"#;

        let err = DivisionSheet::from_json(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate competitor"));
    }

    #[test]
    fn test_foreign_division_entry_rejected() {
        let json = r#"{
            "game_id": "g", "division_id": "d", "scoring_type": "points",
            "entries": [
                {"competitor_id": "c1", "division_id": "other", "display_name": "A"}
            ]
        }"#;

        assert!(DivisionSheet::from_json(json).is_err());
    }

    #[test]
    fn test_foreign_game_entry_rejected() {
        let json = r#"{
            "game_id": "g", "division_id": "d", "scoring_type": "points",
            "entries": [
                {"competitor_id": "c1", "game_id": "other", "display_name": "A"}
            ]
        }"#;

        let err = DivisionSheet::from_json(json).unwrap_err();
        assert!(err.to_string().contains("belongs to game other"));
    }

    fn sheet_with_status(status: &str) -> DivisionSheet {
        let json = SHEET.replacen(
            "\"scoring_type\": \"time\",",
            &format!("\"scoring_type\": \"time\", \"status\": \"{}\",", status),
            1,
        );
        DivisionSheet::from_json(&json).unwrap()
    }

    #[test]
    fn test_parse_division_status() {
        assert_eq!(
            sheet_with_status("started").status,
            Some(DivisionStatus::Started)
        );
        assert_eq!(
            sheet_with_status("stopped").status,
            Some(DivisionStatus::Stopped)
        );
        assert!(sheet_with_status("started").accepts_scores());
        assert!(DivisionSheet::from_json(SHEET).unwrap().accepts_scores());
    }

    #[tokio::test]
    async fn test_stopped_and_completed_divisions_open_read_only_editor() {
        for status in ["scheduled", "stopped", "completed"] {
            let sheet = sheet_with_status(status);
            assert!(!sheet.accepts_scores());

            let mut editor = sheet.into_editor(true, Arc::new(NoOpScoreSink));
            assert!(!editor.is_editable(), "{} division was editable", status);
            assert!(editor.submit_score("c3", "10.4").is_none());
            assert_eq!(editor.entry("c3").unwrap().raw_score, None);
        }
    }

    #[tokio::test]
    async fn test_started_division_editor_ranks_by_time() {
        let sheet = sheet_with_status("started");

        let mut editor = sheet.into_editor(true, Arc::new(NoOpScoreSink));
        let pending = editor.submit_score("c3", "10.4").unwrap();
        assert_eq!(pending.entry().medal, Medal::Gold);
        pending.outcome().await.unwrap();

        assert_eq!(editor.entry("c2").unwrap().medal, Medal::Silver);
        assert_eq!(editor.entry("c1").unwrap().medal, Medal::Bronze);
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = DivisionSheet::from_json("{ not json").unwrap_err();
        assert!(err.to_string().contains("Invalid division sheet"));
    }
}
