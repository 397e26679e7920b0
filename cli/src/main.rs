mod history;
mod summary;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use clap::{Parser, ValueEnum};
use messly_core::config::resolve_data_dir;
use messly_core::{
    parse_day, parse_month, time, Config, FileLedgerRepository, SaveOutcome, Tracker, YearMonth,
};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "messly")]
#[command(about = "Meal attendance and monthly mess budget tracker", long_about = None)]
struct Cli {
    /// Directory holding attendance, settings and config.json
    #[arg(long, global = true, env = "MESSLY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Log more (-v info, -vv debug). RUST_LOG overrides this.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show the ledger of a month (this, last, next or YYYY-MM)
    Summary {
        month: Option<String>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show attendance for a day (today, yes, -3, 2024-03-05, ...)
    Show {
        #[arg(allow_hyphen_values = true)]
        date: String,
    },
    /// Flip one meal for a day
    Toggle {
        meal: MealArg,
        #[arg(allow_hyphen_values = true)]
        date: String,
    },
    /// Set both meals for a day in one write
    Mark {
        #[arg(allow_hyphen_values = true)]
        date: String,
        status: MarkArg,
    },
    /// Set the advance given for a month
    Advance {
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
        #[arg(long)]
        month: Option<String>,
    },
    /// Set the lunch and dinner cost for a month
    Costs {
        #[arg(allow_negative_numbers = true)]
        lunch: Decimal,
        #[arg(allow_negative_numbers = true)]
        dinner: Decimal,
        #[arg(long)]
        month: Option<String>,
    },
    /// List the ledger of every month in a year
    History {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Delete all attendance and settings
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MealArg {
    Lunch,
    Dinner,
}

#[derive(Clone, Copy, ValueEnum)]
enum MarkArg {
    Present,
    Absent,
    LunchOnly,
    DinnerOnly,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn write_warning(outcome: &SaveOutcome, out: &mut impl Write) -> io::Result<()> {
    if let Some(e) = outcome.warning() {
        writeln!(out, "Warning: change kept locally but not saved: {}", e)?;
    }
    Ok(())
}

/// Save warnings go to stderr so `--json` output stays parseable.
fn report(outcome: SaveOutcome) {
    let _ = write_warning(&outcome, &mut io::stderr());
}

fn month_or_current(month: Option<&str>, today: NaiveDate) -> Result<YearMonth> {
    match month {
        Some(m) => parse_month(m, today),
        None => Ok(YearMonth::of(today)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = resolve_data_dir(cli.data_dir)?;
    debug!(data_dir = %data_dir.display(), "opening ledger");
    let config = Config::load_or_default(&data_dir);
    let repo = FileLedgerRepository::new(Some(data_dir))?;
    let mut tracker = Tracker::open(repo, &config);
    let today = time::today();

    let command = cli.command.unwrap_or(Commands::Summary {
        month: None,
        json: false,
    });

    match command {
        Commands::Summary { month, json } => {
            let period = month_or_current(month.as_deref(), today)?;
            let ledger = tracker.summary(period);
            if json {
                println!("{}", serde_json::to_string_pretty(&ledger)?);
            } else {
                summary::show_summary(&ledger);
            }
        }
        Commands::Show { date } => {
            let date = parse_day(&date, today)?;
            summary::show_day(&tracker.attendance(date));
        }
        Commands::Toggle { meal, date } => {
            let date = parse_day(&date, today)?;
            let outcome = match meal {
                MealArg::Lunch => tracker.toggle_lunch(date),
                MealArg::Dinner => tracker.toggle_dinner(date),
            };
            report(outcome);
            summary::show_day(&tracker.attendance(date));
        }
        Commands::Mark { date, status } => {
            let date = parse_day(&date, today)?;
            let outcome = match status {
                MarkArg::Present => tracker.set_both_present(date),
                MarkArg::Absent => tracker.set_both_absent(date),
                MarkArg::LunchOnly => tracker.set_meals(date, true, false),
                MarkArg::DinnerOnly => tracker.set_meals(date, false, true),
            };
            report(outcome);
            summary::show_day(&tracker.attendance(date));
        }
        Commands::Advance { amount, month } => {
            let period = month_or_current(month.as_deref(), today)?;
            report(tracker.set_advance(period, amount)?);
            println!("Advance for {} set to {}", period, amount);
            summary::show_summary(&tracker.summary(period));
        }
        Commands::Costs {
            lunch,
            dinner,
            month,
        } => {
            let period = month_or_current(month.as_deref(), today)?;
            report(tracker.set_meal_costs(period, lunch, dinner)?);
            println!("Meal costs for {}: lunch {}, dinner {}", period, lunch, dinner);
            summary::show_summary(&tracker.summary(period));
        }
        Commands::History { year } => {
            let year = year.unwrap_or(today.year());
            let summaries = tracker.history().year(year);
            history::show_history(year, &summaries, &tracker.history().active_months());
        }
        Commands::Reset { yes } => {
            if !yes {
                println!(
                    "Refusing to reset without --yes. This deletes all attendance and settings."
                );
                return Ok(());
            }
            report(tracker.reset());
            println!("Ledger cleared.");
        }
    }
    Ok(())
}
