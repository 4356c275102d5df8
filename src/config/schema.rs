use serde::{Deserialize, Serialize};

use crate::players::NameAlias;
use crate::scoring::{CourseConfig, LeaderboardConfig};

/// Top-level tournament configuration file.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub course: CourseConfig,

    #[serde(default)]
    pub leaderboard: LeaderboardConfig,

    #[serde(default)]
    pub aliases: Vec<NameAlias>,
}
