pub mod storage;
pub mod types;

pub use storage::{get_store_path, load_store, save_store};
pub use types::{ArchivedRound, Player, PlayerCounts, RoundRecord, ScoreStore, SubmitOutcome};
