use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use pacepilot::logging::init_logging;
use pacepilot::render::{render_json, render_text};
use pacepilot::{
    assess, format_pace, AppConfig, Field, LogLevel, MinSec, OutputFormat, RunWalkPlan,
};

/// PacePilot - Run-walk-run pace calculator
///
/// Works out the running pace needed during the run segments of a run-walk-run
/// strategy to reach an overall target average pace.
#[derive(Parser)]
#[command(name = "pacepilot")]
#[command(version)]
#[command(about = "Run-walk-run pace calculator")]
#[command(long_about = "Run-walk-run pace calculator\n\n\
    Uses P_run = (T_run * P_target * P_walk) / ((P_walk * (T_run + T_walk)) - (P_target * T_walk))\n\n\
    Enter run/walk durations and paces (minutes and seconds per km) as M:SS.")]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity of log output (stderr)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the required running pace
    Solve {
        /// Running segment duration (M:SS)
        #[arg(short, long, value_name = "M:SS")]
        run: Option<MinSec>,

        /// Walking segment duration (M:SS)
        #[arg(short, long, value_name = "M:SS")]
        walk: Option<MinSec>,

        /// Overall target average pace per km (M:SS)
        #[arg(short, long, value_name = "M:SS")]
        target: Option<MinSec>,

        /// Brisk walking pace per km (M:SS)
        #[arg(short = 'p', long, value_name = "M:SS")]
        walk_pace: Option<MinSec>,

        /// Report format (defaults to the configured format)
        #[arg(short = 'f', long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Prompt for each input and calculate repeatedly
    Interactive,

    /// Format decimal minutes as M'SS"
    Format {
        /// Decimal minutes, e.g. 7.5
        #[arg(allow_negative_numbers = true)]
        minutes: f64,
    },

    /// Manage the configuration file
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        show: bool,

        /// Write a configuration file with default values
        #[arg(short, long)]
        init: bool,

        /// Print the configuration file path
        #[arg(short, long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref())?;

    let mut log_config = config.logging.clone();
    log_config.level = LogLevel::from_verbosity(log_config.level, cli.verbose);
    init_logging(&log_config).context("Failed to initialize logging")?;

    match cli.command {
        Commands::Solve {
            run,
            walk,
            target,
            walk_pace,
            format,
        } => {
            let defaults = config.defaults;
            let plan = RunWalkPlan::new(
                run.map_or(defaults.run_duration, |v| v.to_decimal_minutes()),
                walk.map_or(defaults.walk_duration, |v| v.to_decimal_minutes()),
                walk_pace.map_or(defaults.walk_pace, |v| v.to_decimal_minutes()),
                target.map_or(defaults.target_pace, |v| v.to_decimal_minutes()),
            );
            let format = format.unwrap_or(config.output.format);
            println!("{}", report(&plan, format, config.output.color)?);
        }

        Commands::Interactive => run_interactive(&config)?,

        Commands::Format { minutes } => {
            println!("{}", format_pace(Some(minutes)));
        }

        Commands::Config { show, init, path } => {
            let config_path = cli.config.unwrap_or_else(AppConfig::default_config_path);
            if path {
                println!("{}", config_path.display());
            }
            if init {
                if config_path.exists() {
                    anyhow::bail!(
                        "Config file already exists: {}",
                        config_path.display()
                    );
                }
                AppConfig::default().save_to_file(&config_path)?;
                println!("{} {}", "✓ Wrote".green(), config_path.display());
            }
            if show || !(path || init) {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn report(plan: &RunWalkPlan, format: OutputFormat, color: bool) -> Result<String> {
    let assessment = assess(plan);
    Ok(match format {
        OutputFormat::Text => render_text(&assessment, color),
        OutputFormat::Json => render_json(&assessment)?,
    })
}

fn run_interactive(config: &AppConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut plan = config.defaults;

    println!("{}", "PacePilot".bold());
    println!("Enter times as M:SS. Press Enter to keep the value in brackets.\n");

    loop {
        read_plan(&mut input, &mut plan)?;

        println!();
        println!("{}", report(&plan, OutputFormat::Text, config.output.color)?);
        println!();

        if !prompt_yes(&mut input, "Calculate again? [y/N] ")? {
            break;
        }
    }

    println!(
        "{}",
        "Remember to always listen to your body and adjust as needed. Happy running!".dimmed()
    );
    Ok(())
}

/// Prompt for every field; an empty answer leaves the current value untouched
fn read_plan(input: &mut impl BufRead, plan: &mut RunWalkPlan) -> Result<()> {
    for field in Field::ALL {
        let shown = MinSec::from_decimal_minutes(plan.get(field));
        if let Some(value) = prompt_min_sec(input, field, shown)? {
            plan.set(field, value.to_decimal_minutes());
        }
    }
    Ok(())
}

/// `None` when the answer is empty
fn prompt_min_sec(input: &mut impl BufRead, field: Field, shown: MinSec) -> Result<Option<MinSec>> {
    let unit = if field.is_pace() { " per km" } else { "" };
    loop {
        let line = prompt(input, &format!("{}{} [{}]: ", field.label(), unit, shown))?
            .context("Input closed before all values were entered")?;
        let answer = line.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        match answer.parse::<MinSec>() {
            Ok(value) => return Ok(Some(value)),
            Err(err) => {
                err.log();
                eprintln!("{}", err.user_message().red());
            }
        }
    }
}

fn prompt_yes(input: &mut impl BufRead, question: &str) -> Result<bool> {
    // End of input means no
    let answer = prompt(input, question)?.unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Print `question` and read one line; `None` at end of input
fn prompt(input: &mut impl BufRead, question: &str) -> Result<Option<String>> {
    print!("{}", question);
    io::stdout().flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    Ok((read > 0).then_some(line))
}
