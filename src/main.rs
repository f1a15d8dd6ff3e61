//! Command-line entry point for the medal table
//!
//! Ranks division score sheets exported by the event backend and applies
//! score edits through the same editor the live scoring screen uses.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use medal_table::config::{bracket_for_age, AppConfig};
use medal_table::editor::{render_table, JsonLinesScoreSink, ScoreRow};
use medal_table::ranking::MedalTally;
use medal_table::types::ScoringType;
use medal_table::DivisionSheet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Medal Table - rankings and medals for games divisions
#[derive(Parser)]
#[command(
    name = "medal-table",
    version,
    about = "Rank division score sheets and record score edits",
    long_about = "Medal Table ranks a division's raw scores into positions and \
                 gold/silver/bronze medals, honoring each game's scoring direction, \
                 and applies score edits the way the live scoring screen does."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        global = true,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, global = true, help = "Enable debug mode with verbose logging")]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank a division sheet and print the standings
    Rank {
        /// Division sheet (JSON)
        sheet: PathBuf,

        /// Override the sheet's scoring type
        #[arg(long, value_name = "TYPE")]
        scoring: Option<ScoringType>,

        /// Print the ranked sheet as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Apply score edits to a division sheet and print each saved entry
    Score {
        /// Division sheet (JSON)
        sheet: PathBuf,

        /// Score edit, repeatable
        #[arg(long = "set", value_name = "ID=VALUE", required_unless_present = "save_all")]
        edits: Vec<String>,

        /// After the edits, save every entry with its current rank and medal
        #[arg(long)]
        save_all: bool,
    },

    /// Show which division bracket an age belongs to
    Bracket {
        age: u32,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration and apply CLI overrides
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    Ok(config)
}

/// Split an `ID=VALUE` edit argument
fn parse_edit(edit: &str) -> Result<(&str, &str)> {
    edit.split_once('=')
        .map(|(id, value)| (id.trim(), value))
        .filter(|(id, _)| !id.is_empty())
        .ok_or_else(|| anyhow!("Invalid edit {:?}, expected ID=VALUE", edit))
}

fn run_rank(sheet_path: PathBuf, scoring: Option<ScoringType>, json: bool) -> Result<()> {
    let mut sheet = DivisionSheet::from_file(&sheet_path)?;
    if let Some(scoring_type) = scoring {
        debug!("Overriding scoring type {} with {}", sheet.scoring_type, scoring_type);
        sheet.scoring_type = scoring_type;
    }

    let ranked = sheet.ranked();
    info!(
        "Ranked {} entries in division {} ({})",
        ranked.entries.len(),
        ranked.division_id,
        ranked.scoring_type
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    let rows: Vec<ScoreRow> = ranked
        .entries
        .iter()
        .map(|entry| ScoreRow::from_entry(entry, false))
        .collect();
    print!("{}", render_table(&rows));

    let tally = MedalTally::from_entries(&ranked.entries);
    println!(
        "Medals: {} gold, {} silver, {} bronze ({})",
        tally.gold,
        tally.silver,
        tally.bronze,
        ranked.scoring_type.unit()
    );

    Ok(())
}

async fn run_score(sheet_path: PathBuf, edits: Vec<String>, save_all: bool) -> Result<()> {
    let sheet = DivisionSheet::from_file(&sheet_path)?;
    if !sheet.accepts_scores() {
        warn!(
            "Division {} is not started ({}), edits will be ignored",
            sheet.division_id,
            sheet
                .status
                .map(|status| status.to_string())
                .unwrap_or_default()
        );
    }

    let sink = Arc::new(JsonLinesScoreSink::new(std::io::stdout()));
    let mut editor = sheet.into_editor(true, sink);

    let mut pending = Vec::new();
    for edit in &edits {
        let (competitor_id, value) = parse_edit(edit)?;
        match editor.submit_score(competitor_id, value) {
            Some(save) => pending.push(save),
            None => warn!("Edit {:?} was not applied", edit),
        }
    }

    if save_all {
        pending.extend(editor.save_all());
    }

    for save in pending {
        save.outcome().await?;
    }

    println!();
    print!("{}", render_table(&editor.rows()));

    Ok(())
}

fn run_bracket(config: &AppConfig, age: u32) -> Result<()> {
    match bracket_for_age(&config.divisions.brackets, age) {
        Some(bracket) => {
            println!(
                "{} ({}): ages {}-{}",
                bracket.name, bracket.id, bracket.min_age, bracket.max_age
            );
            Ok(())
        }
        None => Err(anyhow!("No division bracket for age {}", age)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    debug!("{} v{} starting", config.service.name, medal_table::VERSION);

    match args.command {
        Command::Rank {
            sheet,
            scoring,
            json,
        } => run_rank(sheet, scoring, json),
        Command::Score {
            sheet,
            edits,
            save_all,
        } => run_score(sheet, edits, save_all).await,
        Command::Bracket { age } => run_bracket(&config, age),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edit() {
        assert_eq!(parse_edit("c1=12.5").unwrap(), ("c1", "12.5"));
        assert_eq!(parse_edit(" c2 =x").unwrap(), ("c2", "x"));
        assert!(parse_edit("c1").is_err());
        assert!(parse_edit("=4").is_err());
    }
}
