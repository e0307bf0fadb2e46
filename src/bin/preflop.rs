//! Preflop Table Binary
//!
//! Computes multiway equity for all 169 starting hands and writes the
//! percentile table as JSON and/or CSV.

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use oddsmaker::cards::Holdem;
use oddsmaker::preflop::Table;
use oddsmaker::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Preflop equity table for all 169 hand classes", long_about = None)]
struct Args {
    /// players at the table, hero included
    #[arg(long, default_value_t = PREFLOP_PLAYERS)]
    players: usize,
    /// Monte Carlo trials per hand class
    #[arg(long, default_value_t = PREFLOP_SIMS)]
    sims: usize,
    #[arg(long, default_value_t = PREFLOP_SEED)]
    seed: u64,
    /// write the table as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    /// write the table as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
    /// how many of the strongest and weakest hands to print
    #[arg(long, default_value_t = 5)]
    top: usize,
}

fn main() -> Result<()> {
    log();
    let args = Args::parse();
    let table = Table::compute(args.players, args.sims, Some(args.seed), &Holdem)?;
    if let Some(path) = args.json {
        std::fs::write(&path, table.to_json()?)
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("saved {}", path.display());
    }
    if let Some(path) = args.csv {
        let file = std::fs::File::create(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        table.write_csv(std::io::BufWriter::new(file))?;
        log::info!("saved {}", path.display());
    }
    println!(
        "\n{}",
        format!("Top {} hands by equity ({}-player):", args.top, args.players).bold()
    );
    for row in table.top(args.top) {
        println!("  {}", row.to_string().green());
    }
    println!(
        "\n{}",
        format!("Bottom {} hands by equity ({}-player):", args.top, args.players).bold()
    );
    for row in table.bottom(args.top) {
        println!("  {}", row.to_string().red());
    }
    Ok(())
}
