use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use tallybox::core::InputEvent;
use tallybox::keys::event_for_key;
use tallybox::{Session, SessionBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Keystroke calculator with memory and GST shortcuts", long_about = None)]
struct Args {
    /// Tax preset in percent (repeatable; defaults to the standard GST slabs)
    #[arg(long = "tax-preset", value_name = "RATE")]
    tax_presets: Vec<f64>,

    /// Number of states kept for undo
    #[arg(long, default_value_t = tallybox::config::DEFAULT_UNDO_DEPTH)]
    undo_depth: usize,

    /// Print the full snapshot as JSON after each line
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// One whitespace-separated token typed at the prompt.
#[derive(Clone, Debug, PartialEq)]
enum Command {
    Events(Vec<InputEvent>),
    Preset(usize),
    Undo,
    Redo,
    History,
    Memory,
}

fn parse_token(token: &str) -> Result<Command> {
    let lower = token.to_ascii_lowercase();
    let event = match lower.as_str() {
        "undo" => return Ok(Command::Undo),
        "redo" => return Ok(Command::Redo),
        "history" => return Ok(Command::History),
        "memory" => return Ok(Command::Memory),
        "c" => Some(InputEvent::Clear),
        "ce" => Some(InputEvent::ClearEntry),
        "mc" => Some(InputEvent::MemoryClear),
        "mr" => Some(InputEvent::MemoryRecall),
        "m+" => Some(InputEvent::MemoryAdd),
        "m-" => Some(InputEvent::MemorySubtract),
        _ => None,
    };
    if let Some(event) = event {
        return Ok(Command::Events(vec![event]));
    }

    if let Some(rate) = lower.strip_prefix("gst") {
        let rate: f64 = rate
            .parse()
            .with_context(|| format!("bad GST rate in '{token}'"))?;
        return Ok(Command::Events(vec![InputEvent::tax(rate)?]));
    }
    if let Some(index) = lower.strip_prefix('#') {
        let index: usize = index
            .parse()
            .with_context(|| format!("bad preset index in '{token}'"))?;
        return Ok(Command::Preset(index));
    }
    if let Some(event) = event_for_key(token) {
        return Ok(Command::Events(vec![event]));
    }

    let mut events = Vec::with_capacity(token.len());
    for c in token.chars() {
        match event_for_key(&c.to_string()) {
            Some(event) => events.push(event),
            None => bail!("unrecognised key '{c}' in '{token}'"),
        }
    }
    Ok(Command::Events(events))
}

fn run_command(session: &mut Session, command: Command) -> Result<()> {
    match command {
        Command::Events(events) => {
            session.dispatch_all(events);
        }
        Command::Preset(index) => {
            if session.apply_tax_preset(index).is_none() {
                bail!(
                    "no tax preset #{index} (have {})",
                    session.tax_rates().len()
                );
            }
        }
        Command::Undo => {
            session.undo();
        }
        Command::Redo => {
            session.redo();
        }
        Command::History => {
            for line in session.state().history().lines() {
                println!("  {line}");
            }
        }
        Command::Memory => println!("  M = {}", session.snapshot().memory_display),
    }
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut builder = SessionBuilder::new().undo_depth(args.undo_depth);
    if !args.tax_presets.is_empty() {
        builder = builder.tax_presets(args.tax_presets.iter().copied());
    }
    let mut session = builder.build()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read from stdin")?;
        for token in line.split_whitespace() {
            let outcome = parse_token(token).and_then(|command| run_command(&mut session, command));
            if let Err(err) = outcome {
                eprintln!("error: {err:#}");
            }
        }

        let snapshot = session.snapshot();
        if args.json {
            writeln!(stdout, "{}", snapshot.to_json()?)?;
        } else {
            writeln!(stdout, "{}", snapshot.display)?;
        }
        stdout.flush()?;
    }

    let timeline = session.timeline();
    info!(
        session = %session.id(),
        duration = ?timeline.duration(),
        errors = timeline.error_count(),
        "session ended"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tallybox::core::Operator;

    fn events(token: &str) -> Vec<InputEvent> {
        match parse_token(token).unwrap() {
            Command::Events(events) => events,
            other => panic!("expected events, got {other:?}"),
        }
    }

    #[test]
    fn named_tokens() {
        assert_eq!(events("Enter"), vec![InputEvent::Equals]);
        assert_eq!(events("M+"), vec![InputEvent::MemoryAdd]);
        assert_eq!(events("ce"), vec![InputEvent::ClearEntry]);
        assert_eq!(parse_token("undo").unwrap(), Command::Undo);
        assert_eq!(parse_token("#4").unwrap(), Command::Preset(4));
    }

    #[test]
    fn packed_keystrokes_split_per_character() {
        assert_eq!(
            events("12+3="),
            vec![
                InputEvent::digit('1').unwrap(),
                InputEvent::digit('2').unwrap(),
                InputEvent::Operator(Operator::Add),
                InputEvent::digit('3').unwrap(),
                InputEvent::Equals,
            ]
        );
    }

    #[test]
    fn gst_token_carries_rate() {
        assert_eq!(events("gst18"), vec![InputEvent::tax(18.0).unwrap()]);
        assert!(parse_token("gst-5").is_err());
        assert!(parse_token("gstx").is_err());
    }

    #[test]
    fn unknown_characters_are_rejected() {
        assert!(parse_token("12a").is_err());
    }

    #[test]
    fn commands_drive_the_session() {
        let mut session = Session::new();
        for token in ["9", "m+", "*", "2", "=", "#4"] {
            run_command(&mut session, parse_token(token).unwrap()).unwrap();
        }
        assert_eq!(session.snapshot().display, "21.24");
        assert_eq!(session.snapshot().memory, 9.0);
        assert!(run_command(&mut session, Command::Preset(42)).is_err());
    }
}
