//! Board geometry: coordinate/index conversion and queen-line stepping.
//!
//! Cells are addressed by a flat index `row * BOARD_SIZE + col`. Row 0 is
//! the first rank in text output. All functions here are pure.

/// Side length of the standard board.
pub const BOARD_SIZE: usize = 10;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Queens per player. Queens are relocated, never captured.
pub const QUEENS_PER_PLAYER: usize = 4;

/// Flat cell index (`row * BOARD_SIZE + col`).
pub type CellIndex = usize;

/// Unit step `(d_row, d_col)` along a queen line.
pub type Direction = (i32, i32);

/// The 8 queen directions: orthogonals first, then diagonals.
pub const DIRECTIONS: [Direction; 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Check whether signed coordinates lie on the board.
#[must_use]
pub fn is_on_board(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// Flat index of an on-board cell.
///
/// Callers must pass coordinates below `BOARD_SIZE`; use [`try_index`] for
/// coordinates that may be off the board.
#[must_use]
pub fn index(row: usize, col: usize) -> CellIndex {
    debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE, "({row}, {col}) is off the board");
    row * BOARD_SIZE + col
}

/// Flat index of signed coordinates, or `None` if they are off the board.
#[must_use]
pub fn try_index(row: i32, col: i32) -> Option<CellIndex> {
    is_on_board(row, col).then(|| index(row as usize, col as usize))
}

/// Row and column of a flat index.
#[must_use]
pub fn coords(cell: CellIndex) -> (usize, usize) {
    (cell / BOARD_SIZE, cell % BOARD_SIZE)
}

/// Check whether a flat index addresses a cell of the board.
#[must_use]
pub fn is_valid_cell(cell: CellIndex) -> bool {
    cell < CELL_COUNT
}

/// The neighbour of `cell` one step along `dir`, if it is on the board.
#[must_use]
pub fn step(cell: CellIndex, dir: Direction) -> Option<CellIndex> {
    let (row, col) = coords(cell);
    try_index(row as i32 + dir.0, col as i32 + dir.1)
}

/// Cells from `from` (exclusive) along `dir` up to the board edge.
pub fn ray(from: CellIndex, dir: Direction) -> impl Iterator<Item = CellIndex> {
    std::iter::successors(step(from, dir), move |&cell| step(cell, dir))
}

/// Unit direction from `from` to `to` if both share a row, column or diagonal.
///
/// Returns `None` for identical cells and for cells not on a common queen line.
#[must_use]
pub fn direction_between(from: CellIndex, to: CellIndex) -> Option<Direction> {
    let (fr, fc) = coords(from);
    let (tr, tc) = coords(to);
    let dr = tr as i32 - fr as i32;
    let dc = tc as i32 - fc as i32;

    if (dr, dc) == (0, 0) {
        return None;
    }
    if dr == 0 || dc == 0 || dr.abs() == dc.abs() {
        Some((dr.signum(), dc.signum()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_and_coords() {
        assert_eq!(index(0, 0), 0);
        assert_eq!(index(0, 3), 3);
        assert_eq!(index(3, 9), 39);
        assert_eq!(index(9, 6), 96);
        assert_eq!(coords(69), (6, 9));

        for cell in 0..CELL_COUNT {
            let (row, col) = coords(cell);
            assert_eq!(index(row, col), cell);
        }
    }

    #[test]
    fn test_is_on_board() {
        assert!(is_on_board(0, 0));
        assert!(is_on_board(9, 9));
        assert!(!is_on_board(-1, 0));
        assert!(!is_on_board(0, 10));
        assert!(!is_on_board(10, 5));
        assert_eq!(try_index(-1, 4), None);
        assert_eq!(try_index(4, 4), Some(44));
    }

    #[test]
    fn test_directions_are_distinct_units() {
        for (i, a) in DIRECTIONS.iter().enumerate() {
            assert!(a.0.abs() <= 1 && a.1.abs() <= 1);
            assert_ne!(*a, (0, 0));
            for b in &DIRECTIONS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_step_stops_at_edges() {
        assert_eq!(step(0, (-1, 0)), None);
        assert_eq!(step(0, (0, -1)), None);
        assert_eq!(step(0, (1, 1)), Some(11));
        assert_eq!(step(9, (0, 1)), None);
        assert_eq!(step(90, (1, 0)), None);
    }

    #[test]
    fn test_ray_runs_to_edge() {
        let east: Vec<_> = ray(index(4, 6), (0, 1)).collect();
        assert_eq!(east, vec![47, 48, 49]);

        let diagonal: Vec<_> = ray(0, (1, 1)).collect();
        assert_eq!(diagonal.len(), 9);
        assert_eq!(diagonal.last(), Some(&99));

        assert_eq!(ray(99, (1, 1)).count(), 0);
    }

    #[test]
    fn test_direction_between() {
        assert_eq!(direction_between(3, 93), Some((1, 0)));
        assert_eq!(direction_between(39, 30), Some((0, -1)));
        assert_eq!(direction_between(0, 99), Some((1, 1)));
        assert_eq!(direction_between(9, 90), Some((1, -1)));
        assert_eq!(direction_between(0, 12), None);
        assert_eq!(direction_between(44, 44), None);
    }
}
