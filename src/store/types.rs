use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::players::PlayerId;
use crate::scoring::{CallawayResult, CourseRef, RankedEntry, HOLE_COUNT};

pub const STORE_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreStore {
    pub version: u32,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub rounds: Vec<RoundRecord>,
    #[serde(default)]
    pub archive: Vec<ArchivedRound>,
}

/// A registered entrant and the boards they are eligible for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(default)]
    pub junior: bool,
    #[serde(default)]
    pub seniors_ladies: bool,
    pub registered_at: DateTime<Utc>,
}

/// One submitted round for the live tournament.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRecord {
    pub player: PlayerId,
    pub course: CourseRef,
    pub holes: [i32; HOLE_COUNT],
    pub result: CallawayResult,
    pub submitted_at: DateTime<Utc>,
}

/// A round kept after its tournament was closed out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchivedRound {
    pub player: PlayerId,
    pub course: CourseRef,
    pub total: i32,
    pub net: i32,
    pub archived_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Inserted,
    Updated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCounts {
    pub total: usize,
    pub submitted: usize,
    pub players_left: usize,
}

impl Default for ScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreStore {
    /// Create a new empty store at the current version
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION,
            players: Vec::new(),
            rounds: Vec::new(),
            archive: Vec::new(),
        }
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Add a player to the roster, or update their category flags.
    /// Returns true if the player was newly added.
    pub fn register_player(&mut self, id: PlayerId, junior: bool, seniors_ladies: bool) -> bool {
        if let Some(existing) = self.players.iter_mut().find(|p| p.id == id) {
            existing.junior = junior;
            existing.seniors_ladies = seniors_ladies;
            return false;
        }

        self.players.push(Player {
            id,
            junior,
            seniors_ladies,
            registered_at: Utc::now(),
        });
        true
    }

    /// Take a player off the roster and drop their round for `course`.
    /// Rounds at other courses and archived rounds are kept.
    /// Returns false if there was nothing to remove.
    pub fn remove_player(&mut self, id: &PlayerId, course: &CourseRef) -> bool {
        let before = (self.players.len(), self.rounds.len());
        self.players.retain(|p| &p.id != id);
        self.rounds.retain(|r| !(&r.player == id && &r.course == course));
        before != (self.players.len(), self.rounds.len())
    }

    /// Insert a round, replacing any earlier submission by the same player
    /// for the same course.
    pub fn submit_round(
        &mut self,
        player: PlayerId,
        course: CourseRef,
        holes: [i32; HOLE_COUNT],
        result: CallawayResult,
    ) -> SubmitOutcome {
        let record = RoundRecord {
            player,
            course,
            holes,
            result,
            submitted_at: Utc::now(),
        };

        if let Some(existing) = self
            .rounds
            .iter_mut()
            .find(|r| r.player == record.player && r.course == record.course)
        {
            *existing = record;
            SubmitOutcome::Updated
        } else {
            self.rounds.push(record);
            SubmitOutcome::Inserted
        }
    }

    pub fn rounds_for<'a>(&'a self, course: &'a CourseRef) -> impl Iterator<Item = &'a RoundRecord> {
        self.rounds.iter().filter(move |r| &r.course == course)
    }

    pub fn counts(&self, course: &CourseRef) -> PlayerCounts {
        let total = self.players.len();
        let submitted = self.rounds_for(course).count();
        PlayerCounts {
            total,
            submitted,
            players_left: total.saturating_sub(submitted),
        }
    }

    /// Join rounds for `course` with roster category flags.
    pub fn ranked_entries(&self, course: &CourseRef) -> Vec<RankedEntry> {
        self.rounds_for(course)
            .map(|round| {
                let (junior, seniors_ladies) = self
                    .player(&round.player)
                    .map(|p| (p.junior, p.seniors_ladies))
                    .unwrap_or((false, false));
                RankedEntry {
                    player: round.player.clone(),
                    holes: round.holes,
                    total: round.result.gross_total,
                    net: round.result.net_score,
                    junior,
                    seniors_ladies,
                }
            })
            .collect()
    }

    /// Move every live round into the archive. Returns the number archived.
    pub fn archive_rounds(&mut self) -> usize {
        let now = Utc::now();
        let moved: Vec<ArchivedRound> = self
            .rounds
            .drain(..)
            .map(|r| ArchivedRound {
                player: r.player,
                course: r.course,
                total: r.result.gross_total,
                net: r.result.net_score,
                archived_at: now,
            })
            .collect();
        let count = moved.len();
        self.archive.extend(moved);
        count
    }

    /// Archived rounds for a player, oldest tournament first.
    pub fn history(&self, player: &PlayerId, course_name: Option<&str>) -> Vec<&ArchivedRound> {
        let mut rounds: Vec<&ArchivedRound> = self
            .archive
            .iter()
            .filter(|r| &r.player == player)
            .filter(|r| {
                course_name
                    .map(|name| r.course.name.eq_ignore_ascii_case(name))
                    .unwrap_or(true)
            })
            .collect();
        rounds.sort_by_key(|r| (r.course.date_played, r.archived_at));
        rounds
    }

    /// Clear live rounds, keeping the roster and archive.
    /// Returns the number of rounds removed.
    pub fn reset_rounds(&mut self) -> usize {
        let count = self.rounds.len();
        self.rounds.clear();
        count
    }
}
