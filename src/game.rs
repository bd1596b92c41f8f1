use std::fmt;
use std::ops::Index;

pub mod history;
pub mod state;

/// Three board indices forming a row, column or diagonal.
pub type Line = [usize; 3];

pub const CELLS: usize = 9;

/// Checked in order: the first complete line wins.
pub const WIN_LINES: [Line; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // middle column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The player to move once `step` moves have been played.
    pub fn for_step(step: usize) -> Player {
        if step % 2 == 0 { Player::X } else { Player::O }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(p) => Some(p),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "."),
            Cell::Occupied(p) => write!(f, "{p}"),
        }
    }
}

/// Returns the first line in [`WIN_LINES`] held entirely by one player.
pub fn winning_line(cells: &[Cell; CELLS]) -> Option<Line> {
    WIN_LINES.into_iter().find(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    pub fn winning_line(&self) -> Option<Line> {
        winning_line(&self.cells)
    }

    pub fn winner(&self) -> Option<Player> {
        self.winning_line()
            .and_then(|[a, _, _]| self.cells[a].player())
    }

    /// Copy of this board with `player` placed at `index`.
    ///
    /// The caller checks that `index` is in bounds and empty.
    pub(crate) fn with_mark(&self, index: usize, player: Player) -> Board {
        let mut next = *self;
        next.cells[index] = Cell::Occupied(player);
        next
    }
}

impl Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Cell {
        &self.cells[index]
    }
}

/// Single-line form for logs, rows separated by `/`: `X../.O./...`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(3).enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            row.iter().try_for_each(|cell| write!(f, "{cell}"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn board_from(xs: &[usize], os: &[usize]) -> Board {
    let mut board = Board::default();
    for &i in xs {
        board = board.with_mark(i, Player::X);
    }
    for &i in os {
        board = board.with_mark(i, Player::O);
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::default();
        assert_eq!(board.winning_line(), None);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WIN_LINES {
            let board = board_from(&line, &[]);
            assert_eq!(board.winning_line(), Some(line));
            assert_eq!(board.winner(), Some(Player::X));

            let board = board_from(&[], &line);
            assert_eq!(board.winning_line(), Some(line));
            assert_eq!(board.winner(), Some(Player::O));
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_from(&[0, 1], &[2]);
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // top row and left column both complete
        let board = board_from(&[0, 1, 2, 3, 6], &[]);
        assert_eq!(board.winning_line(), Some([0, 1, 2]));

        // left column and main diagonal both complete
        let board = board_from(&[0, 3, 6, 4, 8], &[]);
        assert_eq!(board.winning_line(), Some([0, 3, 6]));
    }

    #[test]
    fn test_full_board_without_line() {
        let board = board_from(&[0, 1, 5, 6, 8], &[2, 3, 4, 7]);
        assert!(board.is_full());
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_player_for_step_alternates() {
        assert_eq!(Player::for_step(0), Player::X);
        assert_eq!(Player::for_step(1), Player::O);
        assert_eq!(Player::for_step(4), Player::X);
        assert_eq!(Player::X.opponent(), Player::O);
    }

    #[test]
    fn test_board_display() {
        let board = board_from(&[0, 4], &[8]);
        assert_eq!(board.to_string(), "X../.X./..O");
        assert_eq!(Board::default().to_string(), ".../.../...");
    }
}
