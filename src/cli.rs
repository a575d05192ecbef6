//! Command-line surface for the reader, the threshold gate and sessions.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tokio::io::BufReader;

use crate::dashboard::{animation, render, shell};
use crate::gate::GateEngine;
use crate::models::Operator;
use crate::reading::{self, ReadOptions};
use crate::session::Session;
use crate::settings::SettingsStore;

/// Quantum Consent Engine: lexical consent reading over short conversations
#[derive(Parser, Debug)]
#[command(name = "qce", version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings JSON; defaults are used when omitted or missing
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score up to three conversational lines
    Read {
        #[arg(value_name = "LINE", num_args = 0..=3)]
        lines: Vec<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Attach unrounded diagnostics (only visible with --json)
        #[arg(long)]
        debug: bool,

        /// Show the progress animation before the result
        #[arg(long)]
        animate: bool,
    },
    /// Legacy threshold gate over externally supplied values
    Gate {
        #[arg(long, value_parser = unit_interval)]
        intent: f64,

        #[arg(long, value_parser = unit_interval)]
        discordance: f64,

        /// alpha, beta, theta, gamma or delta
        #[arg(long)]
        wave: String,
    },
    /// Interactive session reading commands from stdin
    ///
    /// Name and token are required before anything is added to the
    /// timeline or the gate log.
    Session {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        token: Option<String>,

        #[arg(long)]
        animate: bool,
    },
    /// Print the effective settings
    Config {
        /// Write them to this path instead of stdout
        #[arg(long, value_name = "PATH")]
        write: Option<PathBuf>,
    },
}

fn unit_interval(value: &str) -> std::result::Result<f64, String> {
    shell::parse_unit(value, "value")
}

pub async fn execute(command: Commands, store: &SettingsStore) -> Result<()> {
    let settings = store.settings();
    let mut stdout = io::stdout();

    match command {
        Commands::Read {
            lines,
            json,
            debug,
            animate,
        } => {
            if animate {
                animation::animate_progress(&mut stdout, animation::STEP).await?;
            }
            let result =
                reading::evaluate_with(lines.as_slice(), &settings.reading, ReadOptions { debug });
            if json {
                let serialized = serde_json::to_string_pretty(&result)
                    .context("Failed to serialize reading")?;
                writeln!(stdout, "{serialized}")?;
            } else {
                write!(stdout, "{}", render::render_reading(&result))?;
            }
        }
        Commands::Gate {
            intent,
            discordance,
            wave,
        } => {
            let passed = GateEngine::new(settings.gate.clone()).evaluate(intent, discordance, &wave);
            log::debug!("gate intent={intent} discordance={discordance} wave={wave} passed={passed}");
            writeln!(stdout, "{}", shell::gate_message(passed))?;
        }
        Commands::Session {
            name,
            token,
            animate,
        } => {
            let operator = match (name, token) {
                (None, None) => None,
                (name, token) => Some(Operator::new(
                    name.unwrap_or_default(),
                    token.unwrap_or_default(),
                )),
            };
            let mut session = Session::new(operator, settings);
            let input = BufReader::new(tokio::io::stdin());
            shell::run_shell(&mut session, input, &mut stdout, shell::ShellOptions { animate })
                .await?;
        }
        Commands::Config { write } => match write {
            Some(path) => {
                store.save_to(&path)?;
                writeln!(stdout, "Settings written to {}", path.display())?;
            }
            None => {
                let serialized = serde_json::to_string_pretty(settings)?;
                writeln!(stdout, "{serialized}")?;
            }
        },
    }

    stdout.flush()?;
    Ok(())
}
