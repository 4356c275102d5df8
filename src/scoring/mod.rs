pub mod config;
pub mod engine;
pub mod error;
pub mod ranking;
pub mod table;
pub mod validation;

pub use config::*;
pub use engine::{compute_callaway, CallawayResult, HOLE_COUNT};
pub use error::ScoringError;
pub use ranking::{
    award_boards, category_boards, rank_leaderboard, rank_leaderboard_where, Category,
    Leaderboard, RankedEntry, ScoreField,
};
pub use table::Deduction;
pub use validation::validate_tournament;
