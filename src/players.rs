use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::scoring::ScoringError;

/// Values that show up in spreadsheet rows but never name a player.
const PLACEHOLDER_NAMES: [&str; 11] = [
    "first", "first name", "last", "last name", "none", "null", "na", "n/a", "blank", "unknown",
    "test",
];

/// Canonical player identity: lower-cased, trimmed first and last name.
///
/// Ordered by last name, then first name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId {
    pub first_name: String,
    pub last_name: String,
}

impl PlayerId {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        PlayerId {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Name for display, each word capitalized ("mike carroll" -> "Mike Carroll")
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            capitalize_words(&self.first_name),
            capitalize_words(&self.last_name)
        )
    }
}

impl Ord for PlayerId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.last_name
            .cmp(&other.last_name)
            .then_with(|| self.first_name.cmp(&other.first_name))
    }
}

impl PartialOrd for PlayerId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Maps a full name as typed on the scorecard to a distinct identity.
///
/// Used when two entrants would otherwise canonicalize to the same player.
///
/// Example YAML:
/// ```yaml
/// aliases:
///   - { name: "mike a carroll", first: "mikea", last: "carroll" }
///   - { name: "d j patterson", first: "dj", last: "patterson" }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NameAlias {
    pub name: String,
    pub first: String,
    pub last: String,
}

/// Canonicalize a submitted name into a player identity.
///
/// Whitespace is collapsed and case folded before alias lookup, so
/// canonicalizing an already canonical name returns it unchanged. Blank,
/// numeric and placeholder names are rejected.
pub fn canonicalize_name(
    first: &str,
    last: &str,
    aliases: &[NameAlias],
) -> Result<PlayerId, ScoringError> {
    let first = normalize(first);
    let last = normalize(last);
    validate_name_part("first_name", &first)?;
    validate_name_part("last_name", &last)?;
    let full = format!("{} {}", first, last);

    if let Some(alias) = aliases.iter().find(|a| normalize(&a.name) == full) {
        return Ok(PlayerId::new(normalize(&alias.first), normalize(&alias.last)));
    }

    Ok(PlayerId::new(first, last))
}

fn validate_name_part(field: &str, part: &str) -> Result<(), ScoringError> {
    let reason = if part.is_empty() {
        "must not be blank"
    } else if part.chars().all(|c| c == 'x') {
        "looks like a placeholder"
    } else if part.chars().all(|c| c.is_ascii_digit()) {
        "must not be a number"
    } else if PLACEHOLDER_NAMES.contains(&part) {
        "looks like a header or placeholder"
    } else {
        return Ok(());
    };

    Err(ScoringError::invalid(field, format!("{} ({:?})", reason, part)))
}

fn normalize(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
