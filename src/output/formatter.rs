use std::io::IsTerminal;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::scoring::{CallawayResult, CourseRef, Leaderboard};
use crate::store::{ArchivedRound, PlayerCounts};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a date the way it is printed on results sheets: "June 14th, 2025"
pub fn format_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = if (11..=13).contains(&(day % 100)) {
        "th"
    } else {
        match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{} {}{}, {}", date.format("%B"), day, suffix, date.year())
}

/// Heading for a tournament: "Pine Hills - June 14th, 2025"
pub fn format_course_header(course: &CourseRef) -> String {
    match course.date_played {
        Some(date) => format!("{} - {}", course.name, format_date(date)),
        None => course.name.clone(),
    }
}

/// Format the Callaway breakdown for one round
pub fn format_breakdown(result: &CallawayResult, course_par: i32, use_colors: bool) -> String {
    let holes = if result.deducted_holes.is_empty() {
        "none".to_string()
    } else {
        result
            .deducted_holes
            .iter()
            .map(|h| h.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    let adjustment = format!("{:+}", result.handicap_adjustment);

    if use_colors {
        format!(
            "Gross: {} (par {})\n  Deduction: {} (holes {})\n  Deducted: {}\n  Adjustment: {}\n  Handicap: {}\nNet: {}",
            result.gross_total.bold(),
            course_par,
            result.deduction().describe().cyan(),
            holes,
            result.deducted,
            adjustment.yellow(),
            result.handicap(),
            result.net_score.green().bold()
        )
    } else {
        format!(
            "Gross: {} (par {})\n  Deduction: {} (holes {})\n  Deducted: {}\n  Adjustment: {}\n  Handicap: {}\nNet: {}",
            result.gross_total,
            course_par,
            result.deduction().describe(),
            holes,
            result.deducted,
            adjustment,
            result.handicap(),
            result.net_score
        )
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a name to fit available width, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

const NAME_WIDTH: usize = 24;

/// Print a stroke count whole, or to one decimal for half strokes.
pub fn format_strokes(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Format one board as a table: place, name, handicap, score, net. Nine-hole
/// boards show nine totals and half the round handicap.
pub fn format_leaderboard(board: &Leaderboard, use_colors: bool) -> String {
    let title = if use_colors {
        board.title.bold().to_string()
    } else {
        board.title.clone()
    };

    if board.entries.is_empty() {
        return format!("{}\n  No scores submitted.", title);
    }

    // Place column is 4 wide, three number columns 6 wide each
    let name_width = match get_terminal_width() {
        Some(width) if width > 4 + 18 + 10 => (width - 4 - 18).min(NAME_WIDTH),
        Some(_) => 12,
        None => NAME_WIDTH,
    };

    let header = format!(
        "{:>4} {:<name_width$}{:>6}{:>6}{:>6}",
        "#",
        "Name",
        "HCP",
        "Score",
        "Net",
        name_width = name_width
    );

    let (gross_field, net_field) = board.field.span();
    let ranked_on_net = board.field == net_field;

    let rows = board.entries.iter().enumerate().map(|(idx, entry)| {
        let place = format!("{:>3}.", idx + 1);
        let name = truncate_name(&entry.player.display_name(), name_width);
        let name = format!("{:<width$}", name, width = name_width);
        let gross = entry.value(gross_field);
        let net = entry.value(net_field);
        let hcp = format!("{:>6}", format_strokes(gross - net));
        let gross = format!("{:>6}", format_strokes(gross));
        let net = format!("{:>6}", format_strokes(net));

        if !use_colors {
            format!("{} {}{}{}{}", place, name, hcp, gross, net)
        } else if ranked_on_net {
            format!("{} {}{}{}{}", place.dimmed(), name, hcp, gross, net.bold())
        } else {
            format!("{} {}{}{}{}", place.dimmed(), name, hcp, gross.bold(), net)
        }
    });

    std::iter::once(title)
        .chain(std::iter::once(header))
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format several boards separated by blank lines
pub fn format_leaderboards(boards: &[Leaderboard], use_colors: bool) -> String {
    boards
        .iter()
        .map(|b| format_leaderboard(b, use_colors))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Format boards as tab-separated values for scripting
/// Columns: board, place, name, ranked score, gross, net (no headers, no colors)
/// Gross and net cover the same holes as the board.
pub fn format_tsv(boards: &[Leaderboard]) -> String {
    boards
        .iter()
        .flat_map(|board| {
            let (gross_field, net_field) = board.field.span();
            board.entries.iter().enumerate().map(move |(idx, entry)| {
                format!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    board.title,
                    idx + 1,
                    entry.player.display_name(),
                    format_strokes(entry.value(board.field)),
                    format_strokes(entry.value(gross_field)),
                    format_strokes(entry.value(net_field))
                )
            })
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    course: &'a CourseRef,
    boards: &'a [Leaderboard],
}

/// Format boards as pretty JSON with the course they belong to
pub fn format_json(course: &CourseRef, boards: &[Leaderboard]) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport { course, boards })
        .context("Failed to serialize leaderboard")
}

/// Format submission progress: "3 of 10 submitted, 7 left"
pub fn format_counts(counts: &PlayerCounts) -> String {
    format!(
        "{} of {} submitted, {} left",
        counts.submitted, counts.total, counts.players_left
    )
}

/// Format archived rounds one per line: date, course, gross, net
pub fn format_history(rounds: &[&ArchivedRound]) -> String {
    if rounds.is_empty() {
        return "No archived rounds found.".to_string();
    }

    rounds
        .iter()
        .map(|r| {
            let date = r
                .course
                .date_played
                .map(|d| d.format("%m-%d-%Y").to_string())
                .unwrap_or_else(|| "--".to_string());
            format!("{:<10}  {:<24}{:>6}{:>6}", date, r.course.name, r.total, r.net)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
