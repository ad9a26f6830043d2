//! Board contents: a fixed-length array of cells.
//!
//! ## Cells
//!
//! A cell is empty, holds a queen, or is burned by an arrow. Burned cells
//! never change again.
//!
//! ## Text format
//!
//! `Display` and `FromStr` share a 10x10 grid, row 0 first:
//! `.` empty, `B` queen of `First`, `R` queen of `Second`, `#` burned.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

use super::geometry::{self, CellIndex, BOARD_SIZE, CELL_COUNT, DIRECTIONS, QUEENS_PER_PLAYER};
use super::player::Player;
use crate::error::ParseError;

/// Cells reachable from one square along the 8 queen lines.
///
/// 36 covers the longest possible reach on a 10x10 board.
pub type Reach = SmallVec<[CellIndex; 36]>;

/// Wire code of a burned cell.
const BURNED_CODE: i8 = 2;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Cell {
    #[default]
    Empty,
    /// A live queen.
    Queen(Player),
    /// Blocked by an arrow.
    Burned,
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the queen on this cell, if any.
    #[must_use]
    pub fn queen(self) -> Option<Player> {
        match self {
            Cell::Queen(player) => Some(player),
            _ => None,
        }
    }

    fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Queen(Player::First) => 'B',
            Cell::Queen(Player::Second) => 'R',
            Cell::Burned => '#',
        }
    }

    fn from_glyph(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'B' => Some(Cell::Queen(Player::First)),
            'R' => Some(Cell::Queen(Player::Second)),
            '#' => Some(Cell::Burned),
            _ => None,
        }
    }
}

impl From<Cell> for i8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => 0,
            Cell::Queen(player) => player.code(),
            Cell::Burned => BURNED_CODE,
        }
    }
}

impl TryFrom<i8> for Cell {
    type Error = ParseError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::Empty),
            BURNED_CODE => Ok(Cell::Burned),
            other => Player::try_from(other)
                .map(Cell::Queen)
                .map_err(|_| ParseError::BadCellCode(other)),
        }
    }
}

/// The 10x10 board, indexed by flat cell index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<Cell>", try_from = "Vec<Cell>")]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Starting cells of `First`'s queens.
    pub const FIRST_START: [CellIndex; QUEENS_PER_PLAYER] = [3, 6, 30, 39];

    /// Starting cells of `Second`'s queens.
    pub const SECOND_START: [CellIndex; QUEENS_PER_PLAYER] = [60, 69, 93, 96];

    /// No queens and no arrows. Only a starting point for `standard`.
    fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// The canonical starting layout.
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for cell in Self::FIRST_START {
            board.cells[cell] = Cell::Queen(Player::First);
        }
        for cell in Self::SECOND_START {
            board.cells[cell] = Cell::Queen(Player::Second);
        }
        board
    }

    /// Build a board from raw cells, checking the queen count of each side.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Result<Self, ParseError> {
        let board = Self { cells };
        for player in Player::ALL {
            let found = board.queens(player).count();
            if found != QUEENS_PER_PLAYER {
                return Err(ParseError::QueenCount { player, found });
            }
        }
        Ok(board)
    }

    /// Contents of a cell. Panics if `cell` is off the board.
    #[must_use]
    pub fn get(&self, cell: CellIndex) -> Cell {
        self.cells[cell]
    }

    /// Contents of a cell, or `None` if `cell` is off the board.
    #[must_use]
    pub fn try_get(&self, cell: CellIndex) -> Option<Cell> {
        self.cells.get(cell).copied()
    }

    pub(crate) fn set(&mut self, cell: CellIndex, value: Cell) {
        self.cells[cell] = value;
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Cells holding a queen of `player`, in index order.
    pub fn queens(&self, player: Player) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == Cell::Queen(player))
            .map(|(i, _)| i)
    }

    /// Number of burned cells.
    #[must_use]
    pub fn burned_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell == Cell::Burned).count()
    }

    /// Every empty cell reachable from `from` by sliding along a queen line.
    ///
    /// Each line stops at the first non-empty cell or the board edge. `from`
    /// itself is never included.
    #[must_use]
    pub fn reachable_from(&self, from: CellIndex) -> Reach {
        let mut reach = Reach::new();
        for dir in DIRECTIONS {
            reach.extend(geometry::ray(from, dir).take_while(|&cell| self.cells[cell].is_empty()));
        }
        reach
    }

    /// Check whether `from` has at least one empty neighbour on a queen line.
    #[must_use]
    pub fn has_reach(&self, from: CellIndex) -> bool {
        DIRECTIONS.iter().any(|&dir| {
            geometry::step(from, dir).is_some_and(|cell| self.cells[cell].is_empty())
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<Board> for Vec<Cell> {
    fn from(board: Board) -> Self {
        board.cells.to_vec()
    }
}

impl TryFrom<Vec<Cell>> for Board {
    type Error = ParseError;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        let len = cells.len();
        let cells: [Cell; CELL_COUNT] = cells.try_into().map_err(|_| ParseError::BadCellCount(len))?;
        Self::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(BOARD_SIZE) {
            let line: String = row.iter().map(|cell| cell.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{self})")
    }
}

impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ParseError::EmptyString);
        }
        if lines.len() != BOARD_SIZE {
            return Err(ParseError::BadLineCount(lines.len()));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != BOARD_SIZE {
                return Err(ParseError::BadLineLen(len));
            }
            for (col, c) in line.chars().enumerate() {
                cells[geometry::index(row, col)] = Cell::from_glyph(c).ok_or(ParseError::BadChar(c))?;
            }
        }
        Self::from_cells(cells)
    }
}
