use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rbridge_export::to_tsv;
use rbridge_ingest::{IngestError, ParsedStatement, StatementFormat, ingest_with_account};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod output;
mod state;

use config::{Config, load_config};

#[derive(Parser, Debug)]
#[command(
    name = "rbridge",
    version,
    about = "Convert bank statements into RealByte Money Manager import files"
)]
struct Cli {
    /// Config file (defaults to ~/.rbridge/config.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a statement into a tab-separated RealByte import file
    Convert {
        /// Statement file exported from the bank
        #[arg(short, long)]
        input: PathBuf,

        /// Output TSV; a timestamp is appended if it already exists
        #[arg(short, long)]
        output: PathBuf,

        /// Bank id: kotak, kvb, equitas, axis (or formatA..formatD)
        #[arg(short, long)]
        bank: StatementFormat,
    },

    /// Print parsed transactions as JSON without writing anything
    Preview {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        bank: StatementFormat,

        /// Limit number of transactions printed (default: 20)
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// List supported statement formats
    Formats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Convert {
            input,
            output,
            bank,
        } => convert(&cfg, &input, &output, bank)?,

        Command::Preview {
            input,
            bank,
            limit,
        } => preview(&cfg, &input, bank, limit)?,

        Command::Formats => {
            for f in StatementFormat::ALL {
                println!("{:<8} {:<8} {}", f.id(), f.layout(), cfg.account_for(f));
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_statement(cfg: &Config, input: &Path, format: StatementFormat) -> Result<ParsedStatement> {
    if !input.exists() {
        bail!("statement not found: {}", input.display());
    }
    let text = state::read_statement(input)?;
    info!(input = %input.display(), %format, "processing statement");

    match ingest_with_account(format, &text, cfg.account_for(format)) {
        Ok(parsed) => Ok(parsed),
        Err(e @ (IngestError::FormatNotRecognized { .. } | IngestError::NoTransactions { .. })) => {
            bail!("No transactions found or error in processing the statement: {e}")
        }
        Err(e) => Err(e).with_context(|| format!("parsing {}", input.display())),
    }
}

fn convert(cfg: &Config, input: &Path, output: &Path, format: StatementFormat) -> Result<()> {
    let parsed = load_statement(cfg, input, format)?;

    let now = chrono::Local::now().naive_local();
    let target = output::unique_output_path(output, &cfg.output.timestamp_format, now)?;
    if target != output {
        warn!(requested = %output.display(), "output exists, writing {}", target.display());
    }

    let tsv = to_tsv(&parsed.transactions).context("serializing transactions")?;
    fs::write(&target, tsv).with_context(|| format!("write {}", target.display()))?;

    let s = parsed.summary();
    println!(
        "Parsed {} transactions from {} ({} skipped)",
        s.transactions,
        input.display(),
        s.skipped
    );
    println!(
        "Expenses: {} totalling {:.2} | Income: {} totalling {:.2} | Net: {:.2}",
        s.expenses,
        s.total_expense.round_dp(2),
        s.incomes,
        s.total_income.round_dp(2),
        s.net.round_dp(2)
    );
    if s.uncategorized > 0 {
        println!("{} transactions left uncategorized", s.uncategorized);
    }
    println!("Successfully converted and saved to {}", target.display());
    Ok(())
}

fn preview(cfg: &Config, input: &Path, format: StatementFormat, limit: usize) -> Result<()> {
    let parsed = load_statement(cfg, input, format)?;
    let shown: Vec<_> = parsed.transactions.iter().take(limit).collect();
    println!("{}", serde_json::to_string_pretty(&shown)?);

    let s = parsed.summary();
    info!(
        transactions = s.transactions,
        shown = shown.len(),
        skipped = s.skipped,
        "preview complete"
    );
    Ok(())
}
