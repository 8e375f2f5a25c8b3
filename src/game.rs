use alloc::string::ToString;
use core::fmt;
use log::{debug, info, trace, warn};

use crate::{
    board::{Grid, GridError},
    common::{parse_coordinate, GuessError, GuessResult, LoadError, Position},
    config::TOTAL_SHIP_CELLS,
    fleet::{validate_composition, Fleet},
    ship::{Placement, Ship},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum GameStatus {
    InProgress,
    AllSunk,
}

/// Result of one guess together with the coordinates as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GuessReport {
    pub x: i64,
    pub y: i64,
    pub result: GuessResult,
    /// Set when this guess sank the last ship afloat.
    pub game_over: bool,
}

/// Something the session wants shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Guess(GuessReport),
    GameOver,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Guess(report) => write!(f, "{}", report.result),
            Event::GameOver => write!(f, "all ships sunk: game over"),
        }
    }
}

/// Parse a guess line. Blank lines yield `None`.
pub fn parse_guess(line: &str) -> Result<Option<(i64, i64)>, GuessError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let malformed = || GuessError::Malformed(line.to_string());
    let mut tokens = line.split_whitespace();
    let mut coord = || -> Result<i64, GuessError> {
        tokens
            .next()
            .and_then(parse_coordinate)
            .ok_or_else(malformed)
    };
    let x = coord()?;
    let y = coord()?;
    if tokens.next().is_some() {
        return Err(malformed());
    }
    Ok(Some((x, y)))
}

/// A loaded board and fleet, replaying guesses until every ship is sunk.
#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    fleet: Fleet,
    status: GameStatus,
    guesses: usize,
}

impl GameSession {
    /// Build the board from placement lines.
    ///
    /// Composition is checked on the whole file first; then each line, in
    /// order, is parsed, validated and placed. The first failure is returned
    /// and no session is produced. Whitespace-only lines are skipped.
    pub fn load<'a, I>(lines: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: Clone,
    {
        let lines = lines.into_iter().filter(|l| !l.trim().is_empty());
        validate_composition(lines.clone())?;

        let mut grid = Grid::new();
        let mut fleet = Fleet::new();
        for line in lines {
            let placement = Placement::parse(line)?;
            let ship = Ship::from_placement(&placement)?;
            grid.place(&ship).map_err(|e| match e {
                GridError::Overlap { .. } => {
                    debug!("rejecting {}: {}", placement.kind.code(), e);
                    LoadError::Overlap(placement.line().to_string())
                }
            })?;
            trace!("placed {:?}", ship);
            fleet.insert(ship);
        }
        debug_assert_eq!(fleet.cell_count(), TOTAL_SHIP_CELLS);
        info!("fleet loaded: {} ships, {} cells", fleet.len(), fleet.cell_count());
        Ok(Self::from_parts(grid, fleet))
    }

    fn from_parts(grid: Grid, fleet: Fleet) -> Self {
        let status = if fleet.all_sunk() {
            GameStatus::AllSunk
        } else {
            GameStatus::InProgress
        };
        Self {
            grid,
            fleet,
            status,
            guesses: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of guesses resolved so far, illegal ones included.
    pub fn guess_count(&self) -> usize {
        self.guesses
    }

    /// Resolve one guess against the board.
    pub fn resolve(&mut self, x: i64, y: i64) -> GuessReport {
        self.guesses += 1;
        let result = match Position::checked(x, y) {
            None => GuessResult::Illegal,
            Some(pos) => self.fire(pos),
        };
        trace!("guess ({}, {}) -> {}", x, y, result);

        if matches!(result, GuessResult::Sunk(_)) && self.fleet.all_sunk() {
            info!("all ships sunk after {} guesses", self.guesses);
            self.status = GameStatus::AllSunk;
        }
        GuessReport {
            x,
            y,
            result,
            game_over: self.status == GameStatus::AllSunk,
        }
    }

    fn fire(&mut self, pos: Position) -> GuessResult {
        let cell = self.grid.cell_at(pos);
        let Some(kind) = cell.ship else {
            if cell.guessed {
                return GuessResult::MissAgain;
            }
            self.grid.mark_guessed(pos);
            return GuessResult::Miss;
        };
        let Some(ship) = self.fleet.get_mut(kind) else {
            // every cell owner is registered by a successful load
            debug_assert!(
                false,
                "cell ({}, {}) owned by unregistered {}",
                pos.x,
                pos.y,
                kind.code()
            );
            warn!("cell ({}, {}) owned by unregistered ship {}", pos.x, pos.y, kind.code());
            return GuessResult::Miss;
        };
        if cell.guessed || ship.is_sunk() {
            return GuessResult::HitAgain;
        }
        ship.hit();
        self.grid.mark_guessed(pos);
        if ship.is_sunk() {
            debug!("{} sunk", kind.name());
            GuessResult::Sunk(kind)
        } else {
            GuessResult::Hit
        }
    }

    /// Replay guess lines in order, handing each event to `sink`.
    ///
    /// Stops right after [`Event::GameOver`]; later lines are not read.
    /// Blank lines are skipped. A malformed line aborts the replay.
    pub fn replay<'a, I, F>(&mut self, lines: I, mut sink: F) -> Result<GameStatus, GuessError>
    where
        I: IntoIterator<Item = &'a str>,
        F: FnMut(Event),
    {
        if self.status == GameStatus::AllSunk {
            return Ok(self.status);
        }
        for line in lines {
            let Some((x, y)) = parse_guess(line)? else {
                continue;
            };
            let report = self.resolve(x, y);
            sink(Event::Guess(report));
            if report.game_over {
                sink(Event::GameOver);
                break;
            }
        }
        Ok(self.status)
    }
}
