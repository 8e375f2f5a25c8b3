//! Commonly used types and utilities for ease of import.

pub use crate::{
    Event, Fleet, GameSession, GameStatus, Grid, GuessReport, GuessResult, LoadError, Position,
    Ship, ShipKind,
};

#[cfg(feature = "std")]
pub use crate::cli::{run_game, OutputFormat, RunOutcome};
