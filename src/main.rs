// Rust Countdown Application
// Main entry point

use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration as StdDuration, Instant};

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};

use rust_countdown::models::settings::CountdownConfig;
use rust_countdown::services::clock::{Clock, FixedClock, SystemClock};
use rust_countdown::services::config::{load_config, save_config, to_toml};
use rust_countdown::services::countdown::{
    weekend_state, CountdownCalculator, PageSlots, WeekendState, WeekendTicker,
};
use rust_countdown::utils::date::parse_date_time;

/// Days, working days and weeks left until a fixed end date
#[derive(Parser)]
#[command(name = "rust-countdown")]
#[command(about = "Countdown to a fixed end date with business days and public holidays", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every countdown value once
    Show {
        /// Evaluate at this instant instead of now (YYYY-MM-DD[THH:MM[:SS]])
        #[arg(long)]
        now: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Open the click-through page while the countdown is still running
        #[arg(long)]
        navigate: bool,
    },
    /// Keep the weekend countdown ticking every second until it expires
    Watch {
        /// Start the ticker from this instant instead of now
        #[arg(long)]
        now: Option<String>,
    },
    /// Print the effective configuration as TOML, or write it to a file
    Config {
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    log::info!(
        "Starting countdown {} -> {}",
        config.range.start(),
        config.range.end()
    );

    match cli.command.unwrap_or(Commands::Show {
        now: None,
        format: OutputFormat::Text,
        navigate: false,
    }) {
        Commands::Show {
            now,
            format,
            navigate,
        } => show_command(&config, now.as_deref(), format, navigate),
        Commands::Watch { now } => watch_command(&config, now.as_deref()).await,
        Commands::Config { write } => config_command(&config, write),
    }
}

fn clock_for(config: &CountdownConfig, now: Option<&str>) -> Result<Box<dyn Clock>> {
    Ok(match now {
        Some(input) => Box::new(FixedClock::new(parse_date_time(input)?)),
        None => Box::new(SystemClock::new(config.timezone)),
    })
}

fn show_command(
    config: &CountdownConfig,
    now: Option<&str>,
    format: OutputFormat,
    navigate: bool,
) -> Result<()> {
    let now = clock_for(config, now)?.now();
    let metrics = CountdownCalculator::new(config).evaluate(now);
    let weekend = weekend_state(now, config.range.end(), &config.weekend);
    let slots = PageSlots::build(config, &metrics, weekend);

    match format {
        OutputFormat::Text => print!("{}", slots),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&slots)?),
    }

    if navigate {
        match slots.navigation_target.as_deref() {
            Some(url) => {
                log::info!("Opening {}", url);
                webbrowser::open(url).with_context(|| format!("failed to open {}", url))?;
            }
            None => log::info!("Countdown finished, nothing to open"),
        }
    }

    Ok(())
}

async fn watch_command(config: &CountdownConfig, now: Option<&str>) -> Result<()> {
    let base: Option<NaiveDateTime> = now.map(parse_date_time).transpose()?;
    let system = SystemClock::new(config.timezone);
    let started = Instant::now();
    let current = || match base {
        Some(base) => {
            base + Duration::from_std(started.elapsed()).unwrap_or_else(|_| Duration::zero())
        }
        None => system.now(),
    };

    let ticker = WeekendTicker::new(config.range.end(), config.weekend);
    let mut interval = tokio::time::interval(StdDuration::from_secs(1));
    let mut stdout = std::io::stdout();

    loop {
        interval.tick().await;
        let tick = ticker.tick(current());

        match tick.state {
            WeekendState::Countdown(remaining) => {
                write!(stdout, "\r{} {}   ", remaining, config.labels.weekend_countdown)?;
            }
            WeekendState::Celebration => {
                write!(
                    stdout,
                    "\r{} {}   ",
                    config.labels.weekend_celebration, config.labels.weekend_celebration_label
                )?;
            }
            WeekendState::Hidden => {}
        }
        stdout.flush()?;

        if !tick.keep_running {
            writeln!(stdout)?;
            log::info!("Weekend countdown window has passed, stopping ticker");
            return Ok(());
        }
    }
}

fn config_command(config: &CountdownConfig, write: Option<PathBuf>) -> Result<()> {
    match write {
        Some(path) => {
            save_config(&path, config)?;
            log::info!("Wrote countdown config to {}", path.display());
        }
        None => print!("{}", to_toml(config)?),
    }
    Ok(())
}
