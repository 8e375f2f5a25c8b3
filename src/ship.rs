//! Ship types, placement parsing and validation.

use alloc::string::{String, ToString};
use core::fmt;

use crate::common::{parse_coordinate, LoadError, Position};
use crate::config::{BOARD_SIZE, SHIPS};
use crate::mask::CellMask;

/// One of the five fleet units, identified in input files by a one-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShipKind {
    #[cfg_attr(feature = "std", serde(rename = "A"))]
    Carrier,
    #[cfg_attr(feature = "std", serde(rename = "B"))]
    Battleship,
    #[cfg_attr(feature = "std", serde(rename = "S"))]
    Submarine,
    #[cfg_attr(feature = "std", serde(rename = "D"))]
    Destroyer,
    #[cfg_attr(feature = "std", serde(rename = "P"))]
    PatrolBoat,
}

impl ShipKind {
    /// Letter used for this ship in placement files and output.
    pub const fn code(self) -> char {
        match self {
            ShipKind::Carrier => 'A',
            ShipKind::Battleship => 'B',
            ShipKind::Submarine => 'S',
            ShipKind::Destroyer => 'D',
            ShipKind::PatrolBoat => 'P',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Aircraft carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::PatrolBoat => "Patrol boat",
        }
    }

    /// Number of cells the ship must cover.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Submarine | ShipKind::Destroyer => 3,
            ShipKind::PatrolBoat => 2,
        }
    }

    /// Slot of this kind in [`SHIPS`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse a type token. Only the exact single-letter codes are accepted.
    pub fn from_code(token: &str) -> Option<Self> {
        SHIPS
            .iter()
            .copied()
            .find(|kind| token.len() == 1 && token.starts_with(kind.code()))
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A placement line split into its type and raw endpoint coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub kind: ShipKind,
    pub start: (i64, i64),
    pub end: (i64, i64),
    line: String,
}

impl Placement {
    /// Parse `<Type> <x1> <y1> <x2> <y2>`.
    pub fn parse(line: &str) -> Result<Self, LoadError> {
        let line = line.trim();
        let malformed = || LoadError::Malformed(line.to_string());
        let mut tokens = line.split_whitespace();
        let kind = tokens
            .next()
            .ok_or_else(malformed)
            .map(ShipKind::from_code)?
            .ok_or(LoadError::Composition)?;
        let mut coords = [0i64; 4];
        for slot in coords.iter_mut() {
            *slot = tokens
                .next()
                .and_then(parse_coordinate)
                .ok_or_else(malformed)?;
        }
        if tokens.next().is_some() {
            return Err(malformed());
        }
        Ok(Placement {
            kind,
            start: (coords[0], coords[1]),
            end: (coords[2], coords[3]),
            line: line.to_string(),
        })
    }

    /// The trimmed source line, used in diagnostics.
    pub fn line(&self) -> &str {
        &self.line
    }
}

/// A validated ship with its hit-point counter.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    orientation: Orientation,
    origin: Position,
    len: u8,
    remaining: u8,
}

impl Ship {
    /// Parse and validate a placement line.
    pub fn from_line(line: &str) -> Result<Self, LoadError> {
        Self::from_placement(&Placement::parse(line)?)
    }

    /// Validate a parsed placement: bounds, then orientation, then size.
    pub fn from_placement(p: &Placement) -> Result<Self, LoadError> {
        let (x1, y1) = p.start;
        let (x2, y2) = p.end;
        let bounds = 0..BOARD_SIZE as i64;
        if [x1, y1, x2, y2].iter().any(|v| !bounds.contains(v)) {
            return Err(LoadError::OutOfBounds(p.line().to_string()));
        }
        if x1 != x2 && y1 != y2 {
            return Err(LoadError::NotStraight(p.line().to_string()));
        }

        // A single-cell span counts as vertical; no ship type is one cell long.
        let (orientation, origin, span) = if x1 == x2 {
            let origin = Position::new(x1 as u8, y1.min(y2) as u8);
            (Orientation::Vertical, origin, (y1 - y2).unsigned_abs() + 1)
        } else {
            let origin = Position::new(x1.min(x2) as u8, y1 as u8);
            (Orientation::Horizontal, origin, (x1 - x2).unsigned_abs() + 1)
        };
        if span as usize != p.kind.length() {
            return Err(LoadError::WrongSize(p.line().to_string()));
        }

        Ok(Ship {
            kind: p.kind,
            orientation,
            origin,
            len: span as u8,
            remaining: span as u8,
        })
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Lowest-coordinate end of the ship.
    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Hit points left.
    pub fn remaining(&self) -> usize {
        self.remaining as usize
    }

    /// Occupied cells, from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let Position { x, y } = self.origin;
        (0..self.len).map(move |i| match self.orientation {
            Orientation::Horizontal => Position::new(x + i, y),
            Orientation::Vertical => Position::new(x, y + i),
        })
    }

    /// Occupied cells as a grid mask.
    pub fn mask(&self) -> CellMask<u128, { BOARD_SIZE as usize }> {
        // cells are bounds-checked at construction
        CellMask::from_positions(self.cells()).unwrap_or_default()
    }

    /// Take one hit point. Never drops below zero.
    pub fn hit(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {}, origin: ({}, {}), orientation: {:?}, remaining: {}/{} }}",
            self.kind.code(),
            self.origin.x,
            self.origin.y,
            self.orientation,
            self.remaining,
            self.len,
        )
    }
}
