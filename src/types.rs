//! Common types used throughout the medal table

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a competitor (a registered child)
pub type CompetitorId = String;

/// Unique identifier for a division within a game
pub type DivisionId = String;

/// Unique identifier for a game within an event
pub type GameId = String;

/// Rank carried by entries that are not in medal contention
/// (no score yet, or a score of zero or below).
pub const UNRANKED_RANK: u32 = 999;

/// How a game's raw scores are measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringType {
    Time,
    Points,
    Distance,
}

impl ScoringType {
    /// Scoring direction implied by this type
    pub fn direction(self) -> ScoringDirection {
        match self {
            ScoringType::Time => ScoringDirection::LowerIsBetter,
            ScoringType::Points | ScoringType::Distance => ScoringDirection::HigherIsBetter,
        }
    }

    pub fn is_lower_better(self) -> bool {
        self.direction() == ScoringDirection::LowerIsBetter
    }

    /// Unit a raw score is recorded in
    pub fn unit(self) -> &'static str {
        match self {
            ScoringType::Time => "seconds",
            ScoringType::Points => "points",
            ScoringType::Distance => "meters",
        }
    }
}

impl std::fmt::Display for ScoringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringType::Time => write!(f, "time"),
            ScoringType::Points => write!(f, "points"),
            ScoringType::Distance => write!(f, "distance"),
        }
    }
}

impl std::str::FromStr for ScoringType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "time" => Ok(ScoringType::Time),
            "points" => Ok(ScoringType::Points),
            "distance" => Ok(ScoringType::Distance),
            other => Err(format!("unknown scoring type: {}", other)),
        }
    }
}

/// Whether a lower or a higher raw score wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringDirection {
    LowerIsBetter,
    HigherIsBetter,
}

impl From<ScoringType> for ScoringDirection {
    fn from(scoring_type: ScoringType) -> Self {
        scoring_type.direction()
    }
}

/// Medal awarded to a competitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    #[default]
    None,
}

impl Medal {
    /// Medal for a score-class rank: 1, 2 and 3 medal, everything else doesn't
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            1 => Medal::Gold,
            2 => Medal::Silver,
            3 => Medal::Bronze,
            _ => Medal::None,
        }
    }

    pub fn is_awarded(self) -> bool {
        self != Medal::None
    }

    /// Single-letter column value used in result tables
    pub fn letter(self) -> &'static str {
        match self {
            Medal::Gold => "G",
            Medal::Silver => "S",
            Medal::Bronze => "B",
            Medal::None => "-",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
            Medal::None => "",
        }
    }
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Medal::Gold => write!(f, "gold"),
            Medal::Silver => write!(f, "silver"),
            Medal::Bronze => write!(f, "bronze"),
            Medal::None => write!(f, "none"),
        }
    }
}

/// Lifecycle of a division as tracked by the event backend
///
/// Divisions move scheduled -> started -> stopped -> completed. Scores are
/// entered only while the division is started; results are published once
/// it completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DivisionStatus {
    Scheduled,
    Started,
    Stopped,
    Completed,
}

impl DivisionStatus {
    pub fn accepts_scores(self) -> bool {
        self == DivisionStatus::Started
    }
}

impl std::fmt::Display for DivisionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DivisionStatus::Scheduled => write!(f, "scheduled"),
            DivisionStatus::Started => write!(f, "started"),
            DivisionStatus::Stopped => write!(f, "stopped"),
            DivisionStatus::Completed => write!(f, "completed"),
        }
    }
}

fn unranked() -> u32 {
    UNRANKED_RANK
}

/// One competitor's standing within one division of one game
///
/// `rank` and `medal` are derived from the division's raw scores by
/// [`crate::ranking::rank`]; whatever values they carry on input are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub competitor_id: CompetitorId,
    #[serde(default)]
    pub division_id: DivisionId,
    #[serde(default)]
    pub game_id: GameId,
    pub display_name: String,
    #[serde(default)]
    pub age: u32,
    /// Raw measurement; `None` until a volunteer enters a value
    #[serde(default)]
    pub raw_score: Option<f64>,
    #[serde(default = "unranked")]
    pub rank: u32,
    #[serde(default)]
    pub medal: Medal,
    /// Time of the last score edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ScoreEntry {
    /// Create an unscored entry
    pub fn new(
        competitor_id: impl Into<String>,
        display_name: impl Into<String>,
        age: u32,
    ) -> Self {
        Self {
            competitor_id: competitor_id.into(),
            division_id: String::new(),
            game_id: String::new(),
            display_name: display_name.into(),
            age,
            raw_score: None,
            rank: UNRANKED_RANK,
            medal: Medal::None,
            updated_at: None,
        }
    }

    pub fn with_division(
        mut self,
        game_id: impl Into<String>,
        division_id: impl Into<String>,
    ) -> Self {
        self.game_id = game_id.into();
        self.division_id = division_id.into();
        self
    }

    pub fn with_raw_score(mut self, raw_score: Option<f64>) -> Self {
        self.raw_score = raw_score;
        self
    }

    /// Raw score if it counts toward ranking (strictly positive)
    pub fn contending_score(&self) -> Option<f64> {
        self.raw_score.filter(|score| *score > 0.0)
    }

    /// Whether this entry holds a place in the standings
    ///
    /// Decided from the score rather than the rank, since a division with
    /// enough distinct scores can produce a real rank equal to
    /// [`UNRANKED_RANK`].
    pub fn is_ranked(&self) -> bool {
        self.contending_score().is_some()
    }
}
