//! Fleet registry: one ship per kind, composition checks and random layouts.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use log::trace;
use rand::Rng;

use crate::common::LoadError;
use crate::config::{BOARD_SIZE, NUM_SHIPS, SHIPS};
use crate::ship::{Ship, ShipKind};

/// Check the first token of every placement line: exactly five lines, each
/// naming a distinct, known ship type. Geometry is not looked at.
pub fn validate_composition<'a, I>(lines: I) -> Result<(), LoadError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = [false; NUM_SHIPS];
    let mut count = 0usize;
    for line in lines {
        let kind = line
            .split_whitespace()
            .next()
            .and_then(ShipKind::from_code)
            .ok_or(LoadError::Composition)?;
        if seen[kind.index()] {
            trace!("duplicate ship type {}", kind.code());
            return Err(LoadError::Composition);
        }
        seen[kind.index()] = true;
        count += 1;
    }
    if count != NUM_SHIPS {
        trace!("fleet has {} ships, expected {}", count, NUM_SHIPS);
        return Err(LoadError::Composition);
    }
    Ok(())
}

/// Ships indexed by [`ShipKind::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fleet {
    ships: [Option<Ship>; NUM_SHIPS],
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `ship` under its kind. Returns the ship it replaced, if any.
    pub fn insert(&mut self, ship: Ship) -> Option<Ship> {
        self.ships[ship.kind().index()].replace(ship)
    }

    pub fn get(&self, kind: ShipKind) -> Option<&Ship> {
        self.ships[kind.index()].as_ref()
    }

    pub fn get_mut(&mut self, kind: ShipKind) -> Option<&mut Ship> {
        self.ships[kind.index()].as_mut()
    }

    /// Registered ships in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True once every kind has a ship.
    pub fn is_complete(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// Cells covered by the registered ships.
    pub fn cell_count(&self) -> usize {
        self.iter().map(Ship::len).sum()
    }

    /// True when every registered ship has no hit points left.
    pub fn all_sunk(&self) -> bool {
        self.iter().all(Ship::is_sunk)
    }

    /// Hit points left across the fleet.
    pub fn remaining(&self) -> usize {
        self.iter().map(Ship::remaining).sum()
    }
}

/// Generate five valid, non-overlapping placement lines in canonical order.
pub fn random_layout<R: Rng>(rng: &mut R) -> Vec<String> {
    let size = BOARD_SIZE as i64;
    let mut taken = [[false; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    let mut lines = Vec::with_capacity(NUM_SHIPS);
    for kind in SHIPS {
        let len = kind.length() as i64;
        // at most 17 of the 100 cells are ever taken
        loop {
            let vertical: bool = rng.random();
            let (max_x, max_y) = if vertical {
                (size - 1, size - len)
            } else {
                (size - len, size - 1)
            };
            let x = rng.random_range(0..=max_x);
            let y = rng.random_range(0..=max_y);
            let cells: Vec<(usize, usize)> = (0..len)
                .map(|i| if vertical { (x, y + i) } else { (x + i, y) })
                .map(|(cx, cy)| (cx as usize, cy as usize))
                .collect();
            if cells.iter().any(|&(cx, cy)| taken[cy][cx]) {
                continue;
            }
            for &(cx, cy) in &cells {
                taken[cy][cx] = true;
            }
            let (x2, y2) = if vertical { (x, y + len - 1) } else { (x + len - 1, y) };
            // randomise endpoint order; both directions are valid input
            let line = if rng.random() {
                format!("{} {} {} {} {}", kind.code(), x, y, x2, y2)
            } else {
                format!("{} {} {} {} {}", kind.code(), x2, y2, x, y)
            };
            lines.push(line);
            break;
        }
    }
    lines
}
