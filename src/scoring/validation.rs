use std::collections::HashSet;

use super::config::{CourseConfig, LeaderboardConfig};
use super::engine::{HOLE_COUNT, MAX_COURSE_PAR, MIN_COURSE_PAR};

/// Validate course and leaderboard configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_tournament(
    course: &CourseConfig,
    leaderboard: &LeaderboardConfig,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(par) = course.par {
        if !(MIN_COURSE_PAR..=MAX_COURSE_PAR).contains(&par) {
            errors.push(format!(
                "course.par: must be between {} and {}, got {}",
                MIN_COURSE_PAR, MAX_COURSE_PAR, par
            ));
        }
    }

    if let Some(ref name) = course.name {
        if name.trim().len() < 2 {
            errors.push(format!("course.name: too short '{}'", name));
        }
    }

    if let Some(ref ranks) = course.hole_handicaps {
        let mut seen_holes = HashSet::new();
        let mut seen_ranks = HashSet::new();

        for (i, entry) in ranks.iter().enumerate() {
            if entry.hole == 0 || entry.hole as usize > HOLE_COUNT {
                errors.push(format!(
                    "course.hole_handicaps[{}].hole: must be 1-{}, got {}",
                    i, HOLE_COUNT, entry.hole
                ));
            } else if !seen_holes.insert(entry.hole) {
                errors.push(format!(
                    "course.hole_handicaps[{}].hole: duplicate hole {}",
                    i, entry.hole
                ));
            }

            if entry.rank == 0 || entry.rank as usize > HOLE_COUNT {
                errors.push(format!(
                    "course.hole_handicaps[{}].rank: must be 1-{}, got {}",
                    i, HOLE_COUNT, entry.rank
                ));
            } else if !seen_ranks.insert(entry.rank) {
                errors.push(format!(
                    "course.hole_handicaps[{}].rank: duplicate rank {}",
                    i, entry.rank
                ));
            }
        }
    }

    for (key, value) in [
        ("gross_positions", leaderboard.gross_positions),
        ("net_positions", leaderboard.net_positions),
        ("junior_positions", leaderboard.junior_positions),
        ("senior_positions", leaderboard.senior_positions),
    ] {
        if let Some(n) = value {
            if n <= 0 {
                errors.push(format!("leaderboard.{}: must be positive, got {}", key, n));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::HoleHandicap;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_tournament(&CourseConfig::default(), &LeaderboardConfig::default()).is_ok());
    }

    #[test]
    fn test_valid_course() {
        let course = CourseConfig {
            name: Some("Pine Hills".to_string()),
            par: Some(71),
            hole_handicaps: Some(
                (1..=18)
                    .map(|h| HoleHandicap { hole: h, rank: 19 - h })
                    .collect(),
            ),
            ..Default::default()
        };
        assert!(validate_tournament(&course, &LeaderboardConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_par() {
        let course = CourseConfig {
            par: Some(12),
            ..Default::default()
        };
        let errors = validate_tournament(&course, &LeaderboardConfig::default()).unwrap_err();
        assert!(errors[0].contains("course.par"));
    }

    #[test]
    fn test_out_of_range_hole() {
        let course = CourseConfig {
            hole_handicaps: Some(vec![HoleHandicap { hole: 19, rank: 1 }]),
            ..Default::default()
        };
        let errors = validate_tournament(&course, &LeaderboardConfig::default()).unwrap_err();
        assert!(errors[0].contains("course.hole_handicaps[0].hole"));
    }

    #[test]
    fn test_duplicate_rank() {
        let course = CourseConfig {
            hole_handicaps: Some(vec![
                HoleHandicap { hole: 1, rank: 1 },
                HoleHandicap { hole: 2, rank: 1 },
            ]),
            ..Default::default()
        };
        let errors = validate_tournament(&course, &LeaderboardConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("duplicate rank 1"));
    }

    #[test]
    fn test_non_positive_positions() {
        let leaderboard = LeaderboardConfig {
            net_positions: Some(0),
            ..Default::default()
        };
        let errors = validate_tournament(&CourseConfig::default(), &leaderboard).unwrap_err();
        assert!(errors[0].contains("leaderboard.net_positions"));
    }

    #[test]
    fn test_collects_all_errors() {
        let course = CourseConfig {
            name: Some("x".to_string()),
            par: Some(500),
            ..Default::default()
        };
        let leaderboard = LeaderboardConfig {
            gross_positions: Some(-1),
            ..Default::default()
        };
        let errors = validate_tournament(&course, &leaderboard).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
