use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use super::engine::HOLE_COUNT;
use super::error::ScoringError;
use crate::players::PlayerId;

/// Score a leaderboard is ranked on. Lower wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreField {
    Total,
    Net,
    #[serde(rename = "front_9")]
    Front9,
    #[serde(rename = "back_9")]
    Back9,
    #[serde(rename = "front_9_net")]
    Front9Net,
    #[serde(rename = "back_9_net")]
    Back9Net,
}

impl ScoreField {
    /// Gross and net fields covering the same holes as this one.
    pub fn span(self) -> (ScoreField, ScoreField) {
        match self {
            ScoreField::Total | ScoreField::Net => (ScoreField::Total, ScoreField::Net),
            ScoreField::Front9 | ScoreField::Front9Net => {
                (ScoreField::Front9, ScoreField::Front9Net)
            }
            ScoreField::Back9 | ScoreField::Back9Net => (ScoreField::Back9, ScoreField::Back9Net),
        }
    }
}

impl fmt::Display for ScoreField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreField::Total => "Gross",
            ScoreField::Net => "Net",
            ScoreField::Front9 => "Front 9",
            ScoreField::Back9 => "Back 9",
            ScoreField::Front9Net => "Front 9 Net",
            ScoreField::Back9Net => "Back 9 Net",
        };
        write!(f, "{}", label)
    }
}

/// Demographic groups with their own boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Juniors,
    SeniorsLadies,
}

impl Category {
    pub fn matches(&self, entry: &RankedEntry) -> bool {
        match self {
            Category::Juniors => entry.junior,
            Category::SeniorsLadies => entry.seniors_ladies,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Juniors => write!(f, "Juniors"),
            Category::SeniorsLadies => write!(f, "Seniors/Ladies"),
        }
    }
}

/// A submitted round joined with the player's identity and category flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub player: PlayerId,
    pub holes: [i32; HOLE_COUNT],
    pub total: i32,
    pub net: i32,
    #[serde(default)]
    pub junior: bool,
    #[serde(default)]
    pub seniors_ladies: bool,
}

impl RankedEntry {
    pub fn front_9(&self) -> i32 {
        self.holes[..9].iter().sum()
    }

    pub fn back_9(&self) -> i32 {
        self.holes[9..].iter().sum()
    }

    /// Strokes the round's handicap took off the gross total.
    pub fn handicap(&self) -> i32 {
        self.total - self.net
    }

    /// Value of `field` in half strokes. Each nine carries half the round
    /// handicap, so nine nets can land on a half stroke.
    pub fn half_strokes(&self, field: ScoreField) -> i32 {
        match field {
            ScoreField::Total => 2 * self.total,
            ScoreField::Net => 2 * self.net,
            ScoreField::Front9 => 2 * self.front_9(),
            ScoreField::Back9 => 2 * self.back_9(),
            ScoreField::Front9Net => 2 * self.front_9() - self.handicap(),
            ScoreField::Back9Net => 2 * self.back_9() - self.handicap(),
        }
    }

    pub fn value(&self, field: ScoreField) -> f64 {
        f64::from(self.half_strokes(field)) / 2.0
    }

    /// Score on a hole, numbered from 1
    pub fn hole(&self, number: u8) -> i32 {
        self.holes[(number - 1) as usize]
    }
}

/// A titled, ranked result set ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub title: String,
    pub field: ScoreField,
    pub entries: Vec<RankedEntry>,
}

/// Rank entries on `field`, best first, keeping at most `top_n`.
///
/// Players in `exclude` and rounds with no positive `field` value are left
/// out. Equal scores are split by comparing holes in `hole_order` (hardest
/// first), then by player name.
pub fn rank_leaderboard(
    entries: &[RankedEntry],
    field: ScoreField,
    hole_order: &[u8],
    top_n: i64,
    exclude: &HashSet<PlayerId>,
) -> Result<Vec<RankedEntry>, ScoringError> {
    rank_leaderboard_where(entries, field, hole_order, top_n, exclude, |_| true)
}

/// Same as [`rank_leaderboard`], restricted to entries accepted by `predicate`.
pub fn rank_leaderboard_where<P>(
    entries: &[RankedEntry],
    field: ScoreField,
    hole_order: &[u8],
    top_n: i64,
    exclude: &HashSet<PlayerId>,
    predicate: P,
) -> Result<Vec<RankedEntry>, ScoringError>
where
    P: Fn(&RankedEntry) -> bool,
{
    if top_n <= 0 {
        return Err(ScoringError::invalid(
            "top_n",
            format!("must be positive, got {}", top_n),
        ));
    }
    validate_hole_order(hole_order)?;

    let mut qualifying: Vec<&RankedEntry> = entries
        .iter()
        .filter(|e| !exclude.contains(&e.player))
        .filter(|e| predicate(e))
        .filter(|e| e.half_strokes(field) > 0)
        .collect();

    qualifying.sort_by(|a, b| compare_entries(a, b, field, hole_order));

    Ok(qualifying
        .into_iter()
        .take(top_n as usize)
        .cloned()
        .collect())
}

/// Gross board, then net board without the gross winners.
pub fn award_boards(
    entries: &[RankedEntry],
    hole_order: &[u8],
    gross_n: i64,
    net_n: i64,
) -> Result<Vec<Leaderboard>, ScoringError> {
    let gross = rank_leaderboard(entries, ScoreField::Total, hole_order, gross_n, &HashSet::new())?;
    let winners: HashSet<PlayerId> = gross.iter().map(|e| e.player.clone()).collect();
    let net = rank_leaderboard(entries, ScoreField::Net, hole_order, net_n, &winners)?;

    Ok(vec![
        Leaderboard {
            title: "Gross".to_string(),
            field: ScoreField::Total,
            entries: gross,
        },
        Leaderboard {
            title: "Net".to_string(),
            field: ScoreField::Net,
            entries: net,
        },
    ])
}

/// Overall, front 9 and back 9 boards for juniors and seniors/ladies.
pub fn category_boards(
    entries: &[RankedEntry],
    hole_order: &[u8],
    junior_n: i64,
    senior_n: i64,
) -> Result<Vec<Leaderboard>, ScoringError> {
    let none = HashSet::new();
    let mut boards = Vec::with_capacity(6);

    for (category, top_n) in [(Category::Juniors, junior_n), (Category::SeniorsLadies, senior_n)] {
        for (label, field) in [
            ("Overall", ScoreField::Net),
            ("Front 9", ScoreField::Front9Net),
            ("Back 9", ScoreField::Back9Net),
        ] {
            let ranked = rank_leaderboard_where(entries, field, hole_order, top_n, &none, |e| {
                category.matches(e)
            })?;
            boards.push(Leaderboard {
                title: format!("Top {} {}", label, category),
                field,
                entries: ranked,
            });
        }
    }

    Ok(boards)
}

fn compare_entries(a: &RankedEntry, b: &RankedEntry, field: ScoreField, hole_order: &[u8]) -> Ordering {
    a.half_strokes(field)
        .cmp(&b.half_strokes(field))
        .then_with(|| {
            hole_order
                .iter()
                .map(|&hole| a.hole(hole).cmp(&b.hole(hole)))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.player.cmp(&b.player))
}

fn validate_hole_order(hole_order: &[u8]) -> Result<(), ScoringError> {
    if let Some(&bad) = hole_order
        .iter()
        .find(|&&h| h == 0 || h as usize > HOLE_COUNT)
    {
        return Err(ScoringError::invalid(
            "hole_order",
            format!("hole numbers must be 1-{}, got {}", HOLE_COUNT, bad),
        ));
    }
    Ok(())
}
