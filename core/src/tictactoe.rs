use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

pub const BOARD_CELLS: usize = 9;

/// Row, column and diagonal triples scanned for a win.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Player marks, X always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

/// Derived from the board on demand, never stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Status {
    Turn(Mark),
    Won(Mark),
    Draw,
}

impl Status {
    pub const fn is_final(self) -> bool {
        !matches!(self, Status::Turn(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PlaceOutcome {
    Placed,
    NoChange,
}

impl PlaceOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Placed)
    }
}

/// Two-player local board: the cells plus whose turn it is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: [Option<Mark>; BOARD_CELLS],
    next: Mark,
}

impl TicTacToe {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
            next: Mark::X,
        }
    }

    pub fn cell_at(&self, idx: usize) -> Option<Mark> {
        self.cells[idx]
    }

    pub fn next_mark(&self) -> Mark {
        self.next
    }

    pub fn status(&self) -> Status {
        if let Some(mark) = self.winner() {
            Status::Won(mark)
        } else if self.cells.iter().all(Option::is_some) {
            Status::Draw
        } else {
            Status::Turn(self.next)
        }
    }

    fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            match (self.cells[a], self.cells[b], self.cells[c]) {
                (Some(m), Some(n), Some(o)) if m == n && n == o => Some(m),
                _ => None,
            }
        })
    }

    /// Place the current player's mark. Occupied cells and finished games
    /// are ordinary no-ops.
    pub fn place(&mut self, idx: usize) -> Result<PlaceOutcome> {
        if idx >= BOARD_CELLS {
            return Err(GameError::InvalidCell);
        }

        if self.status().is_final() || self.cells[idx].is_some() {
            return Ok(PlaceOutcome::NoChange);
        }

        self.cells[idx] = Some(self.next);
        log::debug!("{} placed at cell {}", self.next.as_str(), idx);
        self.next = self.next.opponent();
        Ok(PlaceOutcome::Placed)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(board: &mut TicTacToe, moves: &[usize]) {
        for &idx in moves {
            assert_eq!(board.place(idx).unwrap(), PlaceOutcome::Placed);
        }
    }

    #[test]
    fn row_of_three_wins_for_x() {
        let mut board = TicTacToe::new();

        play_all(&mut board, &[0, 3, 1, 4, 2]);

        assert_eq!(board.status(), Status::Won(Mark::X));
    }

    #[test]
    fn occupied_cell_changes_nothing() {
        let mut board = TicTacToe::new();
        board.place(4).unwrap();
        let before = board.clone();

        assert_eq!(board.place(4).unwrap(), PlaceOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn full_board_without_winner_is_a_draw() {
        let mut board = TicTacToe::new();

        // X O X / X O O / O X X
        play_all(&mut board, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(board.status(), Status::Draw);
    }

    #[test]
    fn moves_after_a_win_are_ignored() {
        let mut board = TicTacToe::new();
        play_all(&mut board, &[0, 3, 1, 4, 2]);
        let before = board.clone();

        assert_eq!(board.place(8).unwrap(), PlaceOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn turns_alternate_starting_with_x() {
        let mut board = TicTacToe::new();

        assert_eq!(board.next_mark(), Mark::X);
        board.place(0).unwrap();
        assert_eq!(board.next_mark(), Mark::O);
        board.place(1).unwrap();
        assert_eq!(board.next_mark(), Mark::X);
        assert_eq!(board.cell_at(0), Some(Mark::X));
        assert_eq!(board.cell_at(1), Some(Mark::O));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut board = TicTacToe::new();

        assert_eq!(board.place(9), Err(GameError::InvalidCell));
    }

    #[test]
    fn reset_restores_the_initial_position() {
        let mut board = TicTacToe::new();
        play_all(&mut board, &[0, 3, 1]);

        board.reset();

        assert_eq!(board, TicTacToe::new());
        assert_eq!(board.status(), Status::Turn(Mark::X));
    }
}
