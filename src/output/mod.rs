pub mod formatter;

pub use formatter::{
    format_breakdown, format_counts, format_course_header, format_date, format_history,
    format_json, format_leaderboard, format_leaderboards, format_tsv, should_use_colors,
};
