//! Interactive session shell: a line-oriented stand-in for the dashboard.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::dashboard::{animation, render};
use crate::models::Operator;
use crate::reading::{NoProgress, ReadOptions};
use crate::session::Session;
use crate::{log_debug, log_info};

const ENABLE_LOGS: bool = true;

const DEFAULT_EXPORT: &str = "qce_logs.csv";
const RECENT_GATE_RECORDS: usize = 5;

const HELP: &str = "\
Commands:
  identify <name> <token>            set the operator for this session
  run <line> [| <line> [| <line>]]   score 1-3 conversational lines
  add                                add the last reading to the timeline
  timeline                           show the recorded timeline
  chart                              wave timeline and consent chart
  export [path]                      write the timeline as CSV (default qce_logs.csv)
  gate <intent> <discordance> <wave> threshold gate (legacy engine)
  log                                recent gate evaluations
  help                               show this message
  quit                               leave the session
";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Identify {
        name: String,
        token: String,
    },
    Run(Vec<String>),
    Add,
    Timeline,
    Chart,
    Export(PathBuf),
    Gate {
        intent: f64,
        discordance: f64,
        wave: String,
    },
    Log,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. `Ok(None)` for blank input.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "identify" => {
                let parts: Vec<&str> = rest.split_whitespace().collect();
                let [name, token] = parts.as_slice() else {
                    return Err("usage: identify <name> <token>".into());
                };
                ShellCommand::Identify {
                    name: name.to_string(),
                    token: token.to_string(),
                }
            }
            "run" => {
                let lines: Vec<String> = rest.split('|').map(|l| l.trim().to_string()).collect();
                if lines.len() > 3 {
                    return Err(format!("at most 3 lines per reading, got {}", lines.len()));
                }
                ShellCommand::Run(lines)
            }
            "add" => ShellCommand::Add,
            "timeline" => ShellCommand::Timeline,
            "chart" => ShellCommand::Chart,
            "export" => {
                let path = if rest.is_empty() { DEFAULT_EXPORT } else { rest };
                ShellCommand::Export(PathBuf::from(path))
            }
            "gate" => {
                let parts: Vec<&str> = rest.split_whitespace().collect();
                let [intent, discordance, wave] = parts.as_slice() else {
                    return Err("usage: gate <intent> <discordance> <wave>".into());
                };
                ShellCommand::Gate {
                    intent: parse_unit(intent, "intent")?,
                    discordance: parse_unit(discordance, "discordance")?,
                    wave: wave.to_string(),
                }
            }
            "log" => ShellCommand::Log,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" => ShellCommand::Quit,
            other => return Err(format!("unknown command '{other}'; type 'help'")),
        };
        Ok(Some(command))
    }
}

pub(crate) fn parse_unit(value: &str, field: &str) -> std::result::Result<f64, String> {
    let parsed: f64 = value
        .parse()
        .map_err(|_| format!("{field} must be a number, got '{value}'"))?;
    if !(0.0..=1.0).contains(&parsed) {
        return Err(format!("{field} must be within 0..1, got {parsed}"));
    }
    Ok(parsed)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOptions {
    pub animate: bool,
}

/// Read commands from `input` until `quit` or end of input. Command errors
/// are printed and the session carries on.
pub async fn run_shell<R, W>(
    session: &mut Session,
    input: R,
    out: &mut W,
    options: ShellOptions,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "QCE session {} (type 'help' for commands)", session.id())?;
    match session.operator() {
        Some(operator) => writeln!(out, "Operator: {}", operator.name)?,
        None => writeln!(out, "No operator yet; use 'identify <name> <token>'")?,
    }
    let mut lines = input.lines();

    loop {
        write!(out, "qce> ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            break;
        };

        match ShellCommand::parse(&line) {
            Ok(None) => continue,
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => execute(session, command, out, options).await?,
            Err(message) => writeln!(out, "error: {message}")?,
        }
    }

    log_info!(
        "Session {} closed with {} timeline entries",
        session.id(),
        session.timeline().len()
    );
    Ok(())
}

async fn execute<W: Write>(
    session: &mut Session,
    command: ShellCommand,
    out: &mut W,
    options: ShellOptions,
) -> Result<()> {
    log_debug!("Session {}: command {}", session.id(), command_name(&command));

    match command {
        ShellCommand::Identify { name, token } => {
            let operator = Operator::new(name, token);
            writeln!(out, "Operator: {}", operator.name)?;
            session.set_operator(operator);
        }
        ShellCommand::Run(lines) => {
            if options.animate {
                animation::animate_progress(out, animation::STEP).await?;
            }
            let result =
                session.read_observed(lines.as_slice(), ReadOptions::default(), &mut NoProgress);
            write!(out, "{}", render::render_reading(result))?;
        }
        ShellCommand::Add => match session.record_last() {
            Ok(entry) => writeln!(out, "Added {} to the timeline", entry.input_hash)?,
            Err(err) => writeln!(out, "error: {err}")?,
        },
        ShellCommand::Timeline => {
            write!(out, "{}", render::render_timeline_table(session.timeline()))?;
        }
        ShellCommand::Chart => {
            if session.timeline().is_empty() {
                write!(out, "{}", render::render_timeline_table(session.timeline()))?;
            } else {
                writeln!(out, "Wave Timeline")?;
                write!(out, "{}", render::render_wave_grid(session.timeline()))?;
                writeln!(out)?;
                writeln!(out, "Consent")?;
                write!(out, "{}", render::render_consent_chart(session.timeline()))?;
            }
        }
        ShellCommand::Export(path) => match session.export_to(&path) {
            Ok(rows) => writeln!(out, "Exported {rows} rows to {}", path.display())?,
            Err(err) => writeln!(out, "error: {err}")?,
        },
        ShellCommand::Gate {
            intent,
            discordance,
            wave,
        } => match session.gate(intent, discordance, &wave) {
            Ok(record) => writeln!(out, "{}", gate_message(record.passed))?,
            Err(err) => writeln!(out, "error: {err}")?,
        },
        ShellCommand::Log => {
            let records = session.recent_gate_records(RECENT_GATE_RECORDS);
            write!(out, "{}", render::render_gate_records(&records))?;
        }
        ShellCommand::Help => write!(out, "{HELP}")?,
        ShellCommand::Quit => {}
    }
    Ok(())
}

pub fn gate_message(passed: bool) -> &'static str {
    if passed {
        "Energy threshold passed: consent granted"
    } else {
        "Threshold not passed: please reconsider your mental field"
    }
}

fn command_name(command: &ShellCommand) -> &'static str {
    match command {
        ShellCommand::Identify { .. } => "identify",
        ShellCommand::Run(_) => "run",
        ShellCommand::Add => "add",
        ShellCommand::Timeline => "timeline",
        ShellCommand::Chart => "chart",
        ShellCommand::Export(_) => "export",
        ShellCommand::Gate { .. } => "gate",
        ShellCommand::Log => "log",
        ShellCommand::Help => "help",
        ShellCommand::Quit => "quit",
    }
}
