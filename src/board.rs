//! The 10x10 grid: cell ownership, placement checks and guessed flags.

use core::fmt;

use crate::common::Position;
use crate::config::BOARD_SIZE;
use crate::mask::CellMask;
use crate::ship::{Ship, ShipKind};

type Mask = CellMask<u128, { BOARD_SIZE as usize }>;

const SIZE: usize = BOARD_SIZE as usize;

/// Errors returned by [`Grid`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// The ship would cover a cell already owned by `with`.
    Overlap { at: Position, with: ShipKind },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Overlap { at, with } => {
                write!(f, "cell ({}, {}) already holds {}", at.x, at.y, with.code())
            }
        }
    }
}

/// Snapshot of a single grid cell.
///
/// Two cells are equal when they sit at the same position, whatever their
/// contents.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub position: Position,
    /// Owning ship; `None` is open water.
    pub ship: Option<ShipKind>,
    pub guessed: bool,
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Cell {}

/// Cell state for the whole board. Ships are referenced by kind; the
/// [`Fleet`](crate::Fleet) owns the hit counters.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    owners: [[Option<ShipKind>; SIZE]; SIZE],
    occupied: Mask,
    guessed: Mask,
}

impl Grid {
    /// Empty board: all water, nothing guessed.
    pub fn new() -> Self {
        Grid {
            owners: [[None; SIZE]; SIZE],
            occupied: Mask::new(),
            guessed: Mask::new(),
        }
    }

    /// Write `ship` into the grid. Either every cell is claimed or, on
    /// overlap, none is.
    pub fn place(&mut self, ship: &Ship) -> Result<(), GridError> {
        let mask = ship.mask();
        if self.occupied.intersects(&mask) {
            // report the first clashing cell
            if let Some(at) = (self.occupied & mask).iter().next() {
                let with = self.owners[at.y as usize][at.x as usize]
                    .unwrap_or_else(|| ship.kind());
                return Err(GridError::Overlap { at, with });
            }
        }
        for pos in ship.cells() {
            self.owners[pos.y as usize][pos.x as usize] = Some(ship.kind());
        }
        self.occupied |= mask;
        Ok(())
    }

    /// Look up the cell at `pos`.
    ///
    /// `pos` must lie on the grid (`x, y < BOARD_SIZE`); callers validate raw
    /// input with [`Position::checked`] first. Panics otherwise.
    pub fn cell_at(&self, pos: Position) -> Cell {
        Cell {
            position: pos,
            ship: self.owners[pos.y as usize][pos.x as usize],
            guessed: self.guessed.contains(pos).unwrap_or(false),
        }
    }

    /// Set the guessed flag on `pos`.
    pub fn mark_guessed(&mut self, pos: Position) {
        let _ = self.guessed.insert(pos);
    }

    /// Cells covered by any ship.
    pub fn occupied(&self) -> Mask {
        self.occupied
    }

    /// Cells that carry the guessed flag.
    pub fn guessed(&self) -> Mask {
        self.guessed
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("occupied", &self.occupied)
            .field("guessed", &self.guessed)
            .finish()
    }
}

/// Renders the top row (y = 9) first. `.` water, `o` guessed water, the ship
/// code for an untouched ship cell, `x` for a hit.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_SIZE).rev() {
            write!(f, "{} ", y)?;
            for x in 0..BOARD_SIZE {
                let cell = self.cell_at(Position::new(x, y));
                let ch = match (cell.ship, cell.guessed) {
                    (None, false) => '.',
                    (None, true) => 'o',
                    (Some(kind), false) => kind.code(),
                    (Some(_), true) => 'x',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for x in 0..BOARD_SIZE {
            write!(f, " {}", x)?;
        }
        Ok(())
    }
}
