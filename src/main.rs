//! Scout - Price Window Scanner & Expression Gatekeeper
//!
//! Run with: cargo run -- scan 7 1 5 3 6 4
//!       or: cargo run -- check "(close[0])" --lenient

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use console::style;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scout::config::Config;
use scout::scanner::{ProfitSweep, SeriesScan};
use scout::validator::{self, CharPolicy};

fn print_banner() {
    println!();
    println!(
        "{}",
        style("═══════════════════════════════════════════════════════════════").cyan()
    );
    println!(
        "{}",
        style(" 🔭 SCOUT - Price Window Scanner").cyan().bold()
    );
    println!(
        "{}",
        style("    Best Buy/Sell Window | Bracket Gatekeeper").cyan()
    );
    println!(
        "{}",
        style("═══════════════════════════════════════════════════════════════").cyan()
    );
    println!();
}

#[derive(Parser)]
#[command(name = "scout", version, about = "Price-window scanner and bracket sanity checker")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan price series for the best single buy/sell window
    Scan {
        /// Inline price ticks forming one series
        prices: Vec<u64>,

        /// JSON file mapping label -> price series
        #[arg(long)]
        file: Option<PathBuf>,

        /// Label for the inline series
        #[arg(long, default_value = "CLI")]
        label: String,

        /// Emit the scans as JSON instead of the styled summary
        #[arg(long)]
        json: bool,
    },

    /// Check bracket balance of filter expressions
    Check {
        /// Expressions to validate
        exprs: Vec<String>,

        /// Ignore non-bracket characters instead of rejecting them
        #[arg(long)]
        lenient: bool,
    },
}

fn load_series_file(path: &PathBuf) -> Result<BTreeMap<String, Vec<u64>>> {
    let content = fs::read_to_string(path)
        .map_err(|e| eyre!("Cannot read series file {}: {}", path.display(), e))?;
    let series: BTreeMap<String, Vec<u64>> = serde_json::from_str(&content)
        .map_err(|e| eyre!("Malformed series file {}: {}", path.display(), e))?;
    Ok(series)
}

fn run_scan(
    config: &Config,
    prices: Vec<u64>,
    file: Option<PathBuf>,
    label: String,
    json: bool,
) -> Result<()> {
    let mut batch = match &file {
        Some(path) => load_series_file(path)?,
        None => BTreeMap::new(),
    };
    if !prices.is_empty() {
        batch.insert(label, prices);
    }
    if batch.is_empty() {
        return Err(eyre!("No prices given - pass ticks inline or use --file"));
    }

    let sweep = ProfitSweep::new(config.min_profit);
    let scans: Vec<SeriesScan> = batch
        .iter()
        .map(|(label, series)| sweep.analyze(label, series))
        .collect();

    info!("Scanned {} series", scans.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&scans)?);
    } else if config.print_summary {
        sweep.print_summary(&scans);
    }

    Ok(())
}

fn run_check(config: &Config, exprs: Vec<String>, lenient: bool) -> Result<()> {
    if exprs.is_empty() {
        return Err(eyre!("No expressions given"));
    }

    let policy = if lenient {
        CharPolicy::BracketsOnly
    } else {
        config.bracket_policy
    };
    info!("Checking {} expression(s) under {} policy", exprs.len(), policy);

    let mut balanced = 0;
    for expr in &exprs {
        match validator::scan(expr, policy) {
            Ok(()) => {
                balanced += 1;
                println!("  {} {:?}", style("✓ balanced").green(), expr);
            }
            Err(fault) => {
                println!("  {} {:?} - {}", style("✗ rejected").red(), expr, fault);
            }
        }
    }

    println!();
    println!(
        "{}",
        style(format!("{}/{} expressions balanced", balanced, exprs.len())).bold()
    );

    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scout=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    // Keep stdout clean when the caller asked for machine-readable output
    let quiet = matches!(cli.command, Command::Scan { json: true, .. });
    if !quiet {
        print_banner();
    }

    let config = Config::from_env()?;
    config.validate()?;
    if config.print_summary && !quiet {
        config.print_config();
        println!();
    }

    match cli.command {
        Command::Scan {
            prices,
            file,
            label,
            json,
        } => run_scan(&config, prices, file, label, json),
        Command::Check { exprs, lenient } => run_check(&config, exprs, lenient),
    }
}
