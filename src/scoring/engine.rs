use serde::{Deserialize, Serialize};

use super::error::ScoringError;
use super::table::{self, Deduction};

pub const HOLE_COUNT: usize = 18;

/// Holes 17 and 18 are never deducted.
pub const DEDUCTIBLE_HOLES: usize = 16;

pub const MIN_COURSE_PAR: i32 = 27;
pub const MAX_COURSE_PAR: i32 = 90;

/// Largest handicap the chart allows.
pub const MAX_HANDICAP: i32 = 50;

/// Outcome of scoring one round under the Callaway system.
///
/// `net_score == gross_total - deducted + handicap_adjustment` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallawayResult {
    pub gross_total: i32,
    pub deducted: i32,
    pub handicap_adjustment: i32,
    pub net_score: i32,
    /// Deduction count from the chart, in half holes
    pub half_holes: u32,
    /// Hole numbers deducted, worst first
    pub deducted_holes: Vec<u8>,
}

impl CallawayResult {
    /// Strokes taken off the gross total (deduction plus adjustment).
    pub fn handicap(&self) -> i32 {
        self.gross_total - self.net_score
    }

    /// Chart row with the adjustment actually applied after the handicap
    /// limits.
    pub fn deduction(&self) -> Deduction {
        Deduction {
            half_holes: self.half_holes,
            adjustment: -self.handicap_adjustment,
        }
    }
}

/// Score a round of 18 gross hole scores with the Callaway system.
///
/// The gross total is shifted onto the par-72 column of the chart, the
/// prescribed number of worst holes among 1-16 is deducted (ties go to the
/// earlier hole, a half hole deducts half its strokes rounded up), and the
/// chart adjustment is applied to the resulting handicap. The handicap stays
/// within `0..=MAX_HANDICAP`.
pub fn compute_callaway(holes: &[i32], course_par: i32) -> Result<CallawayResult, ScoringError> {
    validate_round(holes, course_par)?;

    let gross_total: i32 = holes.iter().sum();
    let deduction = table::lookup(table::table_score(gross_total, course_par));

    let mut eligible: Vec<(u8, i32)> = holes[..DEDUCTIBLE_HOLES]
        .iter()
        .enumerate()
        .map(|(idx, &score)| (idx as u8 + 1, score))
        .collect();
    // Highest score first, earlier hole first among equals
    eligible.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let whole = deduction.whole_holes();
    let mut deducted = 0;
    let mut deducted_holes = Vec::with_capacity(whole + 1);

    for &(hole, score) in eligible.iter().take(whole) {
        deducted += score;
        deducted_holes.push(hole);
    }

    if deduction.has_half_hole() {
        if let Some(&(hole, score)) = eligible.get(whole) {
            deducted += (score + 1) / 2;
            deducted_holes.push(hole);
        }
    }

    let handicap = (deducted + deduction.adjustment).clamp(0, MAX_HANDICAP);
    let handicap_adjustment = deducted - handicap;

    Ok(CallawayResult {
        gross_total,
        deducted,
        handicap_adjustment,
        net_score: gross_total - deducted + handicap_adjustment,
        half_holes: deduction.half_holes,
        deducted_holes,
    })
}

fn validate_round(holes: &[i32], course_par: i32) -> Result<(), ScoringError> {
    if holes.len() != HOLE_COUNT {
        return Err(ScoringError::invalid(
            "holes",
            format!("expected {} scores, got {}", HOLE_COUNT, holes.len()),
        ));
    }

    if let Some(idx) = holes.iter().position(|&s| s < 0) {
        return Err(ScoringError::invalid(
            format!("hole {}", idx + 1),
            format!("score must be non-negative, got {}", holes[idx]),
        ));
    }

    if !(MIN_COURSE_PAR..=MAX_COURSE_PAR).contains(&course_par) {
        return Err(ScoringError::invalid(
            "course_par",
            format!(
                "must be between {} and {}, got {}",
                MIN_COURSE_PAR, MAX_COURSE_PAR, course_par
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pars() -> Vec<i32> {
        vec![4; HOLE_COUNT]
    }

    fn assert_consistent(result: &CallawayResult) {
        assert_eq!(
            result.net_score,
            result.gross_total - result.deducted + result.handicap_adjustment
        );
        assert!(result.net_score <= result.gross_total);
        assert!((0..=MAX_HANDICAP).contains(&result.handicap()));
        assert!(!result.deducted_holes.contains(&17));
        assert!(!result.deducted_holes.contains(&18));
    }

    #[test]
    fn test_par_round_is_scratch() {
        let result = compute_callaway(&pars(), 72).unwrap();
        assert_eq!(result.gross_total, 72);
        assert_eq!(result.deducted, 0);
        assert_eq!(result.handicap_adjustment, 0);
        assert_eq!(result.net_score, 72);
        assert!(result.deducted_holes.is_empty());
    }

    #[test]
    fn test_single_blowup_hole_is_deducted_first() {
        let mut holes = pars();
        holes[6] = 12; // hole 7
        let result = compute_callaway(&holes, 72).unwrap();

        // 80 -> one worst hole, middle column
        assert_eq!(result.gross_total, 80);
        assert_eq!(result.deducted_holes, vec![7]);
        assert_eq!(result.deducted, 12);
        assert_eq!(result.handicap_adjustment, 0);
        assert_eq!(result.net_score, 68);
        assert_eq!(result.handicap(), 12);
        assert_consistent(&result);
    }

    #[test]
    fn test_holes_17_and_18_never_deducted() {
        let mut holes = pars();
        holes[16] = 12;
        holes[17] = 10;
        let result = compute_callaway(&holes, 72).unwrap();

        // 86 -> one and a half worst holes, all eligible holes tied at 4
        assert_eq!(result.gross_total, 86);
        assert_eq!(result.half_holes, 3);
        assert_eq!(result.deducted_holes, vec![1, 2]);
        assert_eq!(result.deducted, 6);
        assert_eq!(result.handicap(), 7);
        assert_consistent(&result);
    }

    #[test]
    fn test_ties_go_to_earlier_hole() {
        let mut holes = pars();
        holes[3] = 7; // hole 4
        holes[9] = 7; // hole 10
        holes[12] = 7; // hole 13
        holes[0] = 6;
        let result = compute_callaway(&holes, 72).unwrap();

        // 83 -> one and a half worst holes, -2 column
        assert_eq!(result.gross_total, 83);
        assert_eq!(result.half_holes, 3);
        assert_eq!(result.deducted_holes, vec![4, 10]);
        // 7 + ceil(7 / 2)
        assert_eq!(result.deducted, 11);
        assert_eq!(result.handicap_adjustment, 2);
        assert_eq!(result.net_score, 74);
        assert_consistent(&result);
    }

    #[test]
    fn test_half_hole_rounds_up() {
        let mut holes = pars();
        holes[0] = 5;
        holes[1] = 5;
        holes[2] = 5;
        let result = compute_callaway(&holes, 72).unwrap();

        // 75 -> half of worst hole, middle column
        assert_eq!(result.gross_total, 75);
        assert_eq!(result.deducted_holes, vec![1]);
        assert_eq!(result.deducted, 3);
        assert_eq!(result.handicap_adjustment, 0);
        assert_eq!(result.net_score, 72);
    }

    #[test]
    fn test_handicap_never_negative() {
        // 73 with everything on the non-deductible holes
        let mut holes = vec![0; HOLE_COUNT];
        holes[0] = 1;
        holes[16] = 36;
        holes[17] = 36;
        let result = compute_callaway(&holes, 72).unwrap();

        assert_eq!(result.gross_total, 73);
        // ceil(1 / 2) = 1 deducted, -2 adjustment clamped to -1
        assert_eq!(result.deducted, 1);
        assert_eq!(result.handicap(), 0);
        assert_eq!(result.net_score, 73);
        assert_consistent(&result);
    }

    #[test]
    fn test_par_shifts_the_band() {
        let mut holes = pars();
        holes[0] = 9; // 77 gross
        let par_72 = compute_callaway(&holes, 72).unwrap();
        let par_71 = compute_callaway(&holes, 71).unwrap();

        assert_eq!(par_72.half_holes, 1);
        assert_eq!(par_72.deduction().adjustment, 2);
        assert_eq!(par_71.half_holes, 2);
        assert_eq!(par_71.deduction().adjustment, -2);
    }

    #[test]
    fn test_band_count_depends_only_on_total() {
        let mut front_heavy = pars();
        front_heavy[0] = 10;
        front_heavy[1] = 10;
        let mut spread = pars();
        for hole in spread.iter_mut().take(12) {
            *hole = 5;
        }

        let a = compute_callaway(&front_heavy, 72).unwrap();
        let b = compute_callaway(&spread, 72).unwrap();
        assert_eq!(a.gross_total, b.gross_total);
        assert_eq!(a.half_holes, b.half_holes);
        assert_ne!(a.deducted, b.deducted);
    }

    #[test]
    fn test_last_row_stops_at_middle_column() {
        let mut holes = vec![5; HOLE_COUNT];
        for hole in holes.iter_mut().take(10) {
            *hole = 6;
        }
        holes[16] = 20;
        holes[17] = 20;
        let result = compute_callaway(&holes, 72).unwrap();

        assert_eq!(result.gross_total, 130);
        assert_eq!(result.half_holes, 12);
        assert_eq!(result.deducted_holes, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(result.deducted, 36);
        assert_eq!(result.deduction().adjustment, 0);
        assert_eq!(result.net_score, 94);
        assert_consistent(&result);
    }

    #[test]
    fn test_handicap_capped_at_fifty() {
        let mut holes = pars();
        for hole in holes.iter_mut().take(6) {
            *hole = 14;
        }
        let result = compute_callaway(&holes, 72).unwrap();

        // 132 -> six worst holes (84) plus 2 would be 86
        assert_eq!(result.gross_total, 132);
        assert_eq!(result.deducted, 84);
        assert_eq!(result.handicap(), MAX_HANDICAP);
        assert_eq!(result.net_score, 82);
        assert_consistent(&result);
    }

    #[test]
    fn test_high_scores_cap_at_six_holes() {
        let holes = vec![9; HOLE_COUNT];
        let result = compute_callaway(&holes, 72).unwrap();

        assert_eq!(result.gross_total, 162);
        assert_eq!(result.half_holes, 12);
        assert_eq!(result.deducted_holes, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(result.deducted, 54);
        assert_eq!(result.handicap(), MAX_HANDICAP);
        assert_eq!(result.net_score, 112);
        assert_consistent(&result);
    }

    #[test]
    fn test_gross_is_sum_for_many_rounds() {
        for seed in 0..50 {
            let holes: Vec<i32> = (0..HOLE_COUNT as i32)
                .map(|i| 3 + (i * 7 + seed) % 6)
                .collect();
            let result = compute_callaway(&holes, 72).unwrap();
            assert_eq!(result.gross_total, holes.iter().sum::<i32>());
            assert_consistent(&result);
        }
    }

    #[test]
    fn test_wrong_hole_count_rejected() {
        let err = compute_callaway(&[4; 17], 72).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidInput { ref field, .. } if field == "holes"));
    }

    #[test]
    fn test_negative_score_rejected() {
        let mut holes = pars();
        holes[4] = -1;
        let err = compute_callaway(&holes, 72).unwrap_err();
        assert!(err.to_string().contains("hole 5"));
    }

    #[test]
    fn test_unreasonable_par_rejected() {
        assert!(compute_callaway(&pars(), 0).is_err());
        assert!(compute_callaway(&pars(), 200).is_err());
    }
}
