/// Par of the course the published Callaway chart is laid out for.
/// Other pars are scored by shifting the gross total onto this column.
pub const TABLE_PAR: i32 = 72;

/// Highest score on the par-72 column that plays as scratch.
pub const SCRATCH_LIMIT: i32 = 72;

/// Adjustment used above the last row of the chart.
const OVERFLOW_ADJUSTMENT: i32 = 2;

/// Adjustments for the five chart columns, left to right.
const COLUMN_ADJUSTMENTS: [i32; 5] = [-2, -1, 0, 1, 2];

/// One row of the Callaway chart: an inclusive gross-score band and the
/// number of worst holes it deducts, counted in half holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub low: i32,
    pub high: i32,
    pub half_holes: u32,
}

impl Band {
    const fn new(low: i32, high: i32, half_holes: u32) -> Self {
        Band {
            low,
            high,
            half_holes,
        }
    }

    pub fn matches(&self, score: i32) -> bool {
        score >= self.low && score <= self.high
    }

    /// Adjustment for a score inside this band. Every row starts in the -2
    /// column; the last row stops at the 0 column.
    pub fn adjustment(&self, score: i32) -> i32 {
        COLUMN_ADJUSTMENTS[(score - self.low) as usize]
    }
}

const BANDS: [Band; 12] = [
    Band::new(73, 77, 1),
    Band::new(78, 82, 2),
    Band::new(83, 87, 3),
    Band::new(88, 92, 4),
    Band::new(93, 97, 5),
    Band::new(98, 102, 6),
    Band::new(103, 107, 7),
    Band::new(108, 112, 8),
    Band::new(113, 117, 9),
    Band::new(118, 122, 10),
    Band::new(123, 127, 11),
    Band::new(128, 130, 12),
];

/// What the chart prescribes for one gross score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deduction {
    /// Worst holes to deduct, in half holes (3 = one and a half holes)
    pub half_holes: u32,
    /// Strokes added to the handicap after the deduction
    pub adjustment: i32,
}

impl Deduction {
    pub const SCRATCH: Deduction = Deduction {
        half_holes: 0,
        adjustment: 0,
    };

    pub fn whole_holes(&self) -> usize {
        (self.half_holes / 2) as usize
    }

    pub fn has_half_hole(&self) -> bool {
        self.half_holes % 2 == 1
    }

    pub fn is_scratch(&self) -> bool {
        self.half_holes == 0
    }

    /// Chart wording, e.g. "scratch", "1/2 worst hole", "2 1/2 worst holes"
    pub fn describe(&self) -> String {
        let whole = self.whole_holes();
        match (whole, self.has_half_hole()) {
            (0, false) => "scratch".to_string(),
            (0, true) => "1/2 worst hole".to_string(),
            (1, false) => "1 worst hole".to_string(),
            (n, false) => format!("{} worst holes", n),
            (n, true) => format!("{} 1/2 worst holes", n),
        }
    }
}

/// Move a gross total onto the par-72 column of the chart.
pub fn table_score(gross_total: i32, course_par: i32) -> i32 {
    gross_total + (TABLE_PAR - course_par)
}

/// Look up the chart row for a score already shifted onto the par-72 column.
pub fn lookup(score: i32) -> Deduction {
    if score <= SCRATCH_LIMIT {
        return Deduction::SCRATCH;
    }

    if let Some(band) = BANDS.iter().find(|b| b.matches(score)) {
        return Deduction {
            half_holes: band.half_holes,
            adjustment: band.adjustment(score),
        };
    }

    // Past the last row the chart stops growing.
    let last = BANDS[BANDS.len() - 1];
    Deduction {
        half_holes: last.half_holes,
        adjustment: OVERFLOW_ADJUSTMENT,
    }
}
