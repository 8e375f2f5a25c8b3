//! Command-line glue: runs a game from placement and guess text and renders
//! the events as text or JSON lines.

#![cfg(feature = "std")]

use std::io::{self, Write};

use serde_json::json;

use crate::common::LoadError;
use crate::game::{Event, GameSession, GameStatus};

/// How events are written to the output stream.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One result string per line, e.g. `hit` or `A sunk`.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The fleet was rejected; the diagnostic has been written.
    Rejected(LoadError),
    /// Guesses were replayed until the end of input or game over.
    Finished(GameSession),
}

/// Write one event in the chosen format.
pub fn write_event<W: Write>(out: &mut W, event: &Event, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", event),
        OutputFormat::Json => {
            let value = match event {
                Event::Guess(report) => json!({
                    "event": "guess",
                    "x": report.x,
                    "y": report.y,
                    "result": report.result,
                    "game_over": report.game_over,
                    "message": report.result.to_string(),
                }),
                Event::GameOver => json!({
                    "event": "game_over",
                    "message": event.to_string(),
                }),
            };
            writeln!(out, "{}", value)
        }
    }
}

/// Write a load diagnostic in the chosen format.
pub fn write_load_error<W: Write>(
    out: &mut W,
    err: &LoadError,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", err),
        OutputFormat::Json => {
            let value = json!({
                "event": "error",
                "kind": err.kind(),
                "line": err.line(),
                "message": err.to_string(),
            });
            writeln!(out, "{}", value)
        }
    }
}

/// Build a session from placement text. A rejected fleet is reported on
/// `out` before its error is handed back.
pub fn load_fleet<W: Write>(
    placements: &str,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<Result<GameSession, LoadError>> {
    let loaded = GameSession::load(placements.lines());
    if let Err(err) = &loaded {
        log::warn!("fleet rejected: {}", err.kind());
        write_load_error(out, err, format)?;
        out.flush()?;
    }
    Ok(loaded)
}

/// Replay guess text against `session`, writing every event to `out`.
pub fn replay_guesses<W: Write>(
    session: &mut GameSession,
    guesses: &str,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<GameStatus> {
    let mut write_err = None;
    let status = session.replay(guesses.lines(), |event| {
        if write_err.is_none() {
            write_err = write_event(out, &event, format).err();
        }
    })?;
    if let Some(err) = write_err {
        return Err(err.into());
    }
    out.flush()?;
    Ok(status)
}

/// Load the fleet from `placements`, then replay `guesses`. Load failures are
/// reported on `out` and end the run normally; malformed guesses and write
/// failures are errors.
pub fn run_game<W: Write>(
    placements: &str,
    guesses: &str,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<RunOutcome> {
    let mut session = match load_fleet(placements, format, out)? {
        Ok(session) => session,
        Err(err) => return Ok(RunOutcome::Rejected(err)),
    };
    replay_guesses(&mut session, guesses, format, out)?;
    Ok(RunOutcome::Finished(session))
}
