//! Move representation: queen displacement plus arrow shot.
//!
//! A move is one atomic triple. Coordinate notation is `a1-a5/c3`: column
//! letter `a`..`j`, row number `1`..`10` where row 1 is row index 0.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::geometry::{self, CellIndex, BOARD_SIZE};
use crate::error::ParseError;

/// A complete Amazons move.
///
/// ## Example
///
/// ```
/// use amazons::core::Move;
///
/// let mv = Move::new(3, 33, 3);
/// assert_eq!(mv.to_string(), "d1-d4/d1");
/// assert_eq!("d1-d4/d1".parse::<Move>().unwrap(), mv);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Cell the queen leaves.
    pub queen_from: CellIndex,
    /// Cell the queen lands on.
    pub queen_to: CellIndex,
    /// Cell the arrow burns.
    pub arrow_to: CellIndex,
}

impl Move {
    #[must_use]
    pub const fn new(queen_from: CellIndex, queen_to: CellIndex, arrow_to: CellIndex) -> Self {
        Self {
            queen_from,
            queen_to,
            arrow_to,
        }
    }
}

fn write_cell(f: &mut fmt::Formatter<'_>, cell: CellIndex) -> fmt::Result {
    if !geometry::is_valid_cell(cell) {
        return write!(f, "#{cell}");
    }
    let (row, col) = geometry::coords(cell);
    write!(f, "{}{}", (b'a' + col as u8) as char, row + 1)
}

fn parse_cell(s: &str) -> Result<CellIndex, ParseError> {
    let bad = || ParseError::BadSquare(s.to_string());
    let mut chars = s.chars();
    let file = chars.next().ok_or_else(bad)?;
    if !file.is_ascii_lowercase() {
        return Err(bad());
    }
    let col = (file as u8 - b'a') as usize;
    let row: usize = chars.as_str().parse()?;
    if col >= BOARD_SIZE || row == 0 || row > BOARD_SIZE {
        return Err(bad());
    }
    Ok(geometry::index(row - 1, col))
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_cell(f, self.queen_from)?;
        f.write_str("-")?;
        write_cell(f, self.queen_to)?;
        f.write_str("/")?;
        write_cell(f, self.arrow_to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::EmptyString);
        }
        let (queen, arrow) = s
            .split_once('/')
            .ok_or_else(|| ParseError::BadMove(s.to_string()))?;
        let (from, to) = queen
            .split_once('-')
            .ok_or_else(|| ParseError::BadMove(s.to_string()))?;
        Ok(Move::new(parse_cell(from)?, parse_cell(to)?, parse_cell(arrow)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Move::new(0, 99, 9).to_string(), "a1-j10/j1");
        assert_eq!(Move::new(60, 62, 82).to_string(), "a7-c7/c9");
        assert_eq!(Move::new(0, 100, 1).to_string(), "a1-#100/b1");
    }

    #[test]
    fn test_parse() {
        assert_eq!("a7-c7/c9".parse::<Move>().unwrap(), Move::new(60, 62, 82));
        assert_eq!(" j10-a1/e5 ".parse::<Move>().unwrap(), Move::new(99, 0, 44));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Move>(), Err(ParseError::EmptyString));
        assert_eq!("a1-a2".parse::<Move>(), Err(ParseError::BadMove("a1-a2".to_string())));
        assert_eq!("a1a2/a3".parse::<Move>(), Err(ParseError::BadMove("a1a2/a3".to_string())));
        assert_eq!("k1-a2/a3".parse::<Move>(), Err(ParseError::BadSquare("k1".to_string())));
        assert_eq!("a0-a2/a3".parse::<Move>(), Err(ParseError::BadSquare("a0".to_string())));
        assert_eq!("a11-a2/a3".parse::<Move>(), Err(ParseError::BadSquare("a11".to_string())));
        assert!(matches!("ax-a2/a3".parse::<Move>(), Err(ParseError::BadInt(_))));
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::new(3, 33, 43);
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"queen_from":3,"queen_to":33,"arrow_to":43}"#);
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);
    }
}
