//! Common types: grid positions, load/guess errors and guess results.

use alloc::string::String;
use core::fmt;
use core::num::IntErrorKind;

use crate::config::BOARD_SIZE;
use crate::ship::ShipKind;

/// A cell coordinate on the grid. Only constructed for in-range values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Converts raw input coordinates, returning `None` outside `[0, BOARD_SIZE)`.
    pub fn checked(x: i64, y: i64) -> Option<Self> {
        let range = 0..BOARD_SIZE as i64;
        if range.contains(&x) && range.contains(&y) {
            Some(Self::new(x as u8, y as u8))
        } else {
            None
        }
    }
}

/// Parse an integer coordinate token. Values beyond `i64` saturate to
/// `i64::MIN`/`i64::MAX` so they still read as off the grid; `None` means the
/// token is not an integer at all.
pub fn parse_coordinate(token: &str) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(value) => Some(value),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Fatal errors raised while loading the fleet. Each maps to one diagnostic
/// line; the ones tied to a placement line carry its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Duplicate or unknown ship type, or not exactly five ships.
    Composition,
    /// Placement line does not have a type and four integers.
    Malformed(String),
    /// A coordinate lies outside the grid.
    OutOfBounds(String),
    /// Endpoints differ on both axes.
    NotStraight(String),
    /// Cell count does not match the ship type's length.
    WrongSize(String),
    /// Ship shares a cell with an already placed ship.
    Overlap(String),
}

impl LoadError {
    /// Short machine-readable name of the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Composition => "composition",
            LoadError::Malformed(_) => "malformed",
            LoadError::OutOfBounds(_) => "out_of_bounds",
            LoadError::NotStraight(_) => "not_straight",
            LoadError::WrongSize(_) => "wrong_size",
            LoadError::Overlap(_) => "overlap",
        }
    }

    /// Placement line that caused the failure, if any.
    pub fn line(&self) -> Option<&str> {
        match self {
            LoadError::Composition => None,
            LoadError::Malformed(l)
            | LoadError::OutOfBounds(l)
            | LoadError::NotStraight(l)
            | LoadError::WrongSize(l)
            | LoadError::Overlap(l) => Some(l),
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Composition => write!(f, "ERROR: fleet composition incorrect"),
            LoadError::Malformed(l) => write!(f, "ERROR: malformed ship line: {}", l),
            LoadError::OutOfBounds(l) => write!(f, "ERROR: ship out-of-bounds: {}", l),
            LoadError::NotStraight(l) => {
                write!(f, "ERROR: ship not horizontal or vertical: {}", l)
            }
            LoadError::WrongSize(l) => write!(f, "ERROR: incorrect ship size: {}", l),
            LoadError::Overlap(l) => write!(f, "ERROR: overlapping ship: {}", l),
        }
    }
}

/// Errors raised while reading guesses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Guess line is not two integers.
    Malformed(String),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessError::Malformed(l) => write!(f, "malformed guess line: {:?}", l),
        }
    }
}

/// Outcome of resolving one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum GuessResult {
    /// Coordinate outside the grid; nothing changed.
    Illegal,
    /// First guess on open water.
    Miss,
    /// Repeat guess on open water.
    MissAgain,
    /// First hit on a ship that is still afloat.
    Hit,
    /// Repeat guess on a hit cell, or any cell of a sunk ship.
    HitAgain,
    /// Hit that took the ship's last hit point.
    Sunk(ShipKind),
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessResult::Illegal => write!(f, "illegal guess"),
            GuessResult::Miss => write!(f, "miss"),
            GuessResult::MissAgain => write!(f, "miss (again)"),
            GuessResult::Hit => write!(f, "hit"),
            GuessResult::HitAgain => write!(f, "hit (again)"),
            GuessResult::Sunk(kind) => write!(f, "{} sunk", kind.code()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LoadError {}

#[cfg(feature = "std")]
impl std::error::Error for GuessError {}
