use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use thiserror::Error;

use callaway_scorer::config::{self, Config};
use callaway_scorer::output;
use callaway_scorer::players::canonicalize_name;
use callaway_scorer::scoring::{self, Leaderboard, ScoringError, HOLE_COUNT};
use callaway_scorer::store::{self, SubmitOutcome};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_STORE: i32 = 5;

/// A config change the command refused to write.
#[derive(Debug, Error)]
#[error("{0}")]
struct ConfigRejected(String);

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Tsv,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the Callaway breakdown for a round without saving it
    Score {
        /// 18 gross hole scores, hole 1 first
        #[arg(allow_negative_numbers = true, required = true)]
        holes: Vec<i32>,

        /// Course par (defaults to the configured par, else 72)
        #[arg(long)]
        par: Option<i32>,
    },
    /// Add a player to the roster or update their categories
    Register {
        first: String,
        last: String,
        #[arg(long)]
        junior: bool,
        #[arg(long)]
        seniors_ladies: bool,
    },
    /// Score a round and save it for the current course
    Submit {
        first: String,
        last: String,
        /// 18 gross hole scores, hole 1 first
        #[arg(allow_negative_numbers = true, required = true)]
        holes: Vec<i32>,
    },
    /// Gross board, then net board without the gross winners
    Leaderboard {
        /// Gross places to award
        #[arg(long)]
        gross: Option<i64>,
        /// Net places to award
        #[arg(long)]
        net: Option<i64>,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Overall, front 9 and back 9 boards for juniors and seniors/ladies
    Fives {
        #[arg(long)]
        juniors: Option<i64>,
        #[arg(long)]
        seniors: Option<i64>,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Load hole handicap ranks from a CSV (hole_number,handicap_rank) into the config
    ImportHandicaps { path: PathBuf },
    /// Move submitted rounds into the archive and clear the live scores
    Archive,
    /// List archived rounds for a player
    History {
        first: String,
        last: String,
        /// Only rounds at this course
        #[arg(long)]
        course: Option<String>,
    },
    /// Take a player off the roster and drop their round for the current course
    Remove { first: String, last: String },
    /// Clear submitted rounds, keeping the roster
    Reset,
}

#[derive(Parser, Debug)]
#[command(name = "callaway")]
#[command(about = "Golf outing scorer with Callaway handicapping", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/callaway-scorer/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to score store (defaults to ~/.config/callaway-scorer/scores.json)
    #[arg(long, global = true)]
    store: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    callaway_scorer::logging::init_logger(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let config = match config::load_config(config_path.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = scoring::validate_tournament(&config.course, &config.leaderboard) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let store_path = cli
        .store
        .map(PathBuf::from)
        .unwrap_or_else(store::get_store_path);
    let config_path = config_path.unwrap_or_else(config::get_config_path);

    tracing::debug!(
        course = %config.course.course_ref().name,
        par = config.course.par(),
        store = %store_path.display(),
        "starting"
    );

    let outcome = match cli.command {
        Commands::Score { holes, par } => score(&holes, par.unwrap_or(config.course.par())),
        Commands::Register {
            first,
            last,
            junior,
            seniors_ladies,
        } => register(&first, &last, junior, seniors_ladies, &config, &store_path),
        Commands::Submit { first, last, holes } => {
            submit(&first, &last, &holes, &config, &store_path)
        }
        Commands::Leaderboard { gross, net, format } => leaderboard(
            gross.unwrap_or(config.leaderboard.gross()),
            net.unwrap_or(config.leaderboard.net()),
            format,
            &config,
            &store_path,
        ),
        Commands::Fives {
            juniors,
            seniors,
            format,
        } => fives(
            juniors.unwrap_or(config.leaderboard.juniors()),
            seniors.unwrap_or(config.leaderboard.seniors()),
            format,
            &config,
            &store_path,
        ),
        Commands::ImportHandicaps { path } => import_handicaps(&path, config, &config_path),
        Commands::Archive => archive(&store_path),
        Commands::History {
            first,
            last,
            course,
        } => history(&first, &last, course.as_deref(), &config, &store_path),
        Commands::Remove { first, last } => remove(&first, &last, &config, &store_path),
        Commands::Reset => reset(&store_path),
    };

    if let Err(e) = outcome {
        let code = exit_code(&e);
        match code {
            EXIT_INPUT => eprintln!("Invalid input: {:#}", e),
            EXIT_CONFIG => eprintln!("Config error: {:#}", e),
            _ => eprintln!("Error: {:#}", e),
        }
        std::process::exit(code);
    }

    std::process::exit(EXIT_SUCCESS);
}

fn exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ScoringError>().is_some() {
        EXIT_INPUT
    } else if err.downcast_ref::<ConfigRejected>().is_some() {
        EXIT_CONFIG
    } else {
        EXIT_STORE
    }
}

fn score(holes: &[i32], par: i32) -> Result<()> {
    let result = scoring::compute_callaway(holes, par)?;
    println!(
        "{}",
        output::format_breakdown(&result, par, output::should_use_colors())
    );
    Ok(())
}

fn register(
    first: &str,
    last: &str,
    junior: bool,
    seniors_ladies: bool,
    config: &Config,
    store_path: &Path,
) -> Result<()> {
    let player = canonicalize_name(first, last, &config.aliases)?;
    let mut store = store::load_store(store_path)?;
    let added = store.register_player(player.clone(), junior, seniors_ladies);
    store::save_store(store_path, &store)?;

    tracing::info!(player = %player, junior, seniors_ladies, added, "registered player");
    if added {
        println!("Registered {}", player);
    } else {
        println!("Updated {}", player);
    }
    Ok(())
}

fn submit(first: &str, last: &str, holes: &[i32], config: &Config, store_path: &Path) -> Result<()> {
    let player = canonicalize_name(first, last, &config.aliases)?;
    let par = config.course.par();
    let result = scoring::compute_callaway(holes, par)?;
    let holes: [i32; HOLE_COUNT] = holes
        .try_into()
        .context("Hole scores changed length after validation")?;

    let mut store = store::load_store(store_path)?;
    if store.player(&player).is_none() {
        tracing::warn!(player = %player, "submitting for a player not on the roster, adding them");
        store.register_player(player.clone(), false, false);
    }

    let course = config.course.course_ref();
    let submitted = store.submit_round(player.clone(), course.clone(), holes, result.clone());
    store::save_store(store_path, &store)?;

    tracing::info!(
        player = %player,
        gross = result.gross_total,
        net = result.net_score,
        ?submitted,
        "round saved"
    );

    let verb = match submitted {
        SubmitOutcome::Inserted => "Saved",
        SubmitOutcome::Updated => "Updated",
    };
    println!(
        "{} {}: gross {}, net {}",
        verb, player, result.gross_total, result.net_score
    );
    println!("{}", output::format_counts(&store.counts(&course)));
    Ok(())
}

fn leaderboard(gross: i64, net: i64, format: Format, config: &Config, store_path: &Path) -> Result<()> {
    let store = store::load_store(store_path)?;
    let course = config.course.course_ref();
    let entries = store.ranked_entries(&course);
    let boards = scoring::award_boards(&entries, &config.course.hole_order(), gross, net)?;
    print_boards(&course, &boards, format)
}

fn fives(juniors: i64, seniors: i64, format: Format, config: &Config, store_path: &Path) -> Result<()> {
    let store = store::load_store(store_path)?;
    let course = config.course.course_ref();
    let entries = store.ranked_entries(&course);
    let boards = scoring::category_boards(&entries, &config.course.hole_order(), juniors, seniors)?;
    print_boards(&course, &boards, format)
}

fn print_boards(course: &scoring::CourseRef, boards: &[Leaderboard], format: Format) -> Result<()> {
    match format {
        Format::Table => {
            let use_colors = output::should_use_colors();
            println!("{}", output::format_course_header(course));
            println!();
            println!("{}", output::format_leaderboards(boards, use_colors));
        }
        Format::Tsv => println!("{}", output::format_tsv(boards)),
        Format::Json => println!("{}", output::format_json(course, boards)?),
    }
    Ok(())
}

fn import_handicaps(csv_path: &Path, mut config: Config, config_path: &Path) -> Result<()> {
    let ranks = config::read_hole_handicaps(csv_path)
        .map_err(|e| ConfigRejected(format!("{:#}", e)))?;
    let count = ranks.len();
    config.course.hole_handicaps = Some(ranks);

    check_handicaps(&config)?;

    config::save_config(config_path, &config)?;
    tracing::info!(count, config = %config_path.display(), "imported hole handicaps");
    println!(
        "Imported {} hole handicaps into {}",
        count,
        config_path.display()
    );
    Ok(())
}

fn check_handicaps(config: &Config) -> Result<(), ConfigRejected> {
    scoring::validate_tournament(&config.course, &config.leaderboard).map_err(|errors| {
        ConfigRejected(format!("Handicap file rejected: {}", errors.join("; ")))
    })
}

fn archive(store_path: &Path) -> Result<()> {
    let mut store = store::load_store(store_path)?;
    let moved = store.archive_rounds();
    store::save_store(store_path, &store)?;
    tracing::info!(moved, "archived rounds");
    println!("Archived {} rounds", moved);
    Ok(())
}

fn history(
    first: &str,
    last: &str,
    course: Option<&str>,
    config: &Config,
    store_path: &Path,
) -> Result<()> {
    let player = canonicalize_name(first, last, &config.aliases)?;
    let store = store::load_store(store_path)?;
    let rounds = store.history(&player, course);
    println!("{}", player);
    println!("{}", output::format_history(&rounds));
    Ok(())
}

fn remove(first: &str, last: &str, config: &Config, store_path: &Path) -> Result<()> {
    let player = canonicalize_name(first, last, &config.aliases)?;
    let course = config.course.course_ref();
    let mut store = store::load_store(store_path)?;

    if store.remove_player(&player, &course) {
        store::save_store(store_path, &store)?;
        tracing::info!(player = %player, "removed player");
        println!("Removed {}", player);
    } else {
        tracing::warn!(player = %player, "no such player to remove");
        println!("{} is not registered", player);
    }
    println!("{}", output::format_counts(&store.counts(&course)));
    Ok(())
}

fn reset(store_path: &Path) -> Result<()> {
    let mut store = store::load_store(store_path)?;
    let cleared = store.reset_rounds();
    store::save_store(store_path, &store)?;
    tracing::info!(cleared, "cleared submitted rounds");
    println!("Cleared {} rounds", cleared);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use callaway_scorer::scoring::HoleHandicap;

    #[test]
    fn test_exit_codes() {
        let input: anyhow::Error = scoring::compute_callaway(&[4; 17], 72).unwrap_err().into();
        assert_eq!(exit_code(&input), EXIT_INPUT);

        let config: anyhow::Error = ConfigRejected("bad".to_string()).into();
        assert_eq!(exit_code(&config), EXIT_CONFIG);

        let other = anyhow::anyhow!("disk full");
        assert_eq!(exit_code(&other), EXIT_STORE);
    }

    #[test]
    fn test_bad_handicap_file_is_a_config_error() {
        let mut config = Config::default();
        config.course.hole_handicaps = Some(vec![
            HoleHandicap { hole: 1, rank: 1 },
            HoleHandicap { hole: 2, rank: 1 },
        ]);

        let err: anyhow::Error = check_handicaps(&config).unwrap_err().into();
        assert_eq!(exit_code(&err), EXIT_CONFIG);
        assert!(err.to_string().starts_with("Handicap file rejected"));
    }

    #[test]
    fn test_placeholder_name_is_an_input_error() {
        let err: anyhow::Error = canonicalize_name("first name", "last name", &[])
            .unwrap_err()
            .into();
        assert_eq!(exit_code(&err), EXIT_INPUT);
    }
}
