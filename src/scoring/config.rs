use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::table::TABLE_PAR;

pub const DEFAULT_POSITIONS: i64 = 5;
pub const DEFAULT_COURSE_NAME: &str = "Unknown Course";

/// Course metadata for the tournament being scored.
///
/// Example YAML:
/// ```yaml
/// course:
///   name: "Pine Hills"
///   date_played: "2025-06-14"
///   par: 71
///   hole_handicaps:
///     - { hole: 7, rank: 1 }
///     - { hole: 3, rank: 2 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CourseConfig {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub date_played: Option<NaiveDate>,

    /// Total par for 18 holes (default: 72)
    #[serde(default)]
    pub par: Option<i32>,

    /// Handicap rank per hole, 1 = hardest. Drives leaderboard tie-breaks.
    #[serde(default)]
    pub hole_handicaps: Option<Vec<HoleHandicap>>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HoleHandicap {
    pub hole: u8,
    pub rank: u8,
}

/// Identifies one tournament: a course on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CourseRef {
    pub name: String,
    pub date_played: Option<NaiveDate>,
}

impl CourseConfig {
    pub fn par(&self) -> i32 {
        self.par.unwrap_or(TABLE_PAR)
    }

    pub fn course_ref(&self) -> CourseRef {
        CourseRef {
            name: self
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_COURSE_NAME.to_string()),
            date_played: self.date_played,
        }
    }

    /// Hole numbers from hardest to easiest. Empty when no ranks are set.
    pub fn hole_order(&self) -> Vec<u8> {
        let mut ranks = self.hole_handicaps.clone().unwrap_or_default();
        ranks.sort_by_key(|h| (h.rank, h.hole));
        ranks.into_iter().map(|h| h.hole).collect()
    }
}

/// Default board sizes, overridable per command.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LeaderboardConfig {
    #[serde(default)]
    pub gross_positions: Option<i64>,
    #[serde(default)]
    pub net_positions: Option<i64>,
    #[serde(default)]
    pub junior_positions: Option<i64>,
    #[serde(default)]
    pub senior_positions: Option<i64>,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            gross_positions: Some(DEFAULT_POSITIONS),
            net_positions: Some(DEFAULT_POSITIONS),
            junior_positions: Some(DEFAULT_POSITIONS),
            senior_positions: Some(DEFAULT_POSITIONS),
        }
    }
}

impl LeaderboardConfig {
    pub fn gross(&self) -> i64 {
        self.gross_positions.unwrap_or(DEFAULT_POSITIONS)
    }

    pub fn net(&self) -> i64 {
        self.net_positions.unwrap_or(DEFAULT_POSITIONS)
    }

    pub fn juniors(&self) -> i64 {
        self.junior_positions.unwrap_or(DEFAULT_POSITIONS)
    }

    pub fn seniors(&self) -> i64 {
        self.senior_positions.unwrap_or(DEFAULT_POSITIONS)
    }
}
