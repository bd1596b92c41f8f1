use std::fmt;

use tracing::{debug, instrument, trace};

use super::history::{History, HistoryEntry};
use super::{Board, CELLS, Cell, Line, Player};

/// Visual order of the move list.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Order {
    #[default]
    Direct,
    Reversed,
}

impl Order {
    pub fn toggled(self) -> Order {
        match self {
            Order::Direct => Order::Reversed,
            Order::Reversed => Order::Direct,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Direct => write!(f, "direct"),
            Order::Reversed => write!(f, "reversed"),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    /// Place the next mark on a cell.
    Move(usize),
    /// Show the board as it was after `step` moves.
    JumpTo(usize),
    ToggleOrder,
}

/// Why an event left the game unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Debug, derive_more::Display)]
pub enum Rejection {
    #[display("cell {} is out of bounds", _0)]
    OutOfBounds(usize),
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),
    #[display("game already won by {}", _0)]
    AlreadyWon(Player),
    #[display("step {} is outside a history of {} entries", step, len)]
    StepOutOfRange { step: usize, len: usize },
}

impl std::error::Error for Rejection {}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    InProgress(Player),
    Won(Player),
    Draw,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress(p) => write!(f, "Next player: {p}"),
            Status::Won(p) => write!(f, "Winner: {p}!"),
            Status::Draw => write!(f, "No one wins"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    history: History,
    step: usize,
    next_player: Player,
    order: Order,
}

impl GameState {
    pub fn new(order: Order) -> Self {
        GameState {
            history: History::new(),
            step: 0,
            next_player: Player::X,
            order,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn next_player(&self) -> Player {
        self.next_player
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn current(&self) -> &HistoryEntry {
        // `step` is kept in range by every transition
        &self.history.entries()[self.step]
    }

    pub fn board(&self) -> &Board {
        self.current().board()
    }

    pub fn winning_line(&self) -> Option<Line> {
        self.board().winning_line()
    }

    pub fn status(&self) -> Status {
        let board = self.board();
        if let Some([a, _, _]) = self.winning_line()
            && let Cell::Occupied(player) = board[a]
        {
            Status::Won(player)
        } else if board.is_full() {
            Status::Draw
        } else {
            Status::InProgress(self.next_player())
        }
    }

    /// Applies `event`, leaving the state untouched when it is not allowed.
    #[instrument(level = "debug", skip(self), fields(step = self.step))]
    pub fn transition(self, event: Event) -> Self {
        let mut next = self;
        let outcome = match event {
            Event::Move(index) => next.play(index),
            Event::JumpTo(step) => next.jump_to(step),
            Event::ToggleOrder => {
                next.toggle_order();
                Ok(())
            }
        };
        if let Err(rejection) = outcome {
            debug!(%rejection, "ignoring event");
        }
        next
    }

    /// Places the next mark at `index`, discarding any entries after the
    /// current step.
    pub fn play(&mut self, index: usize) -> Result<(), Rejection> {
        if index >= CELLS {
            return Err(Rejection::OutOfBounds(index));
        }
        let board = *self.board();
        if let Some(winner) = board.winner() {
            return Err(Rejection::AlreadyWon(winner));
        }
        if board[index] != Cell::Empty {
            return Err(Rejection::Occupied(index));
        }

        let player = self.next_player;
        let entry = HistoryEntry::new(board.with_mark(index, player), index);
        self.step = self.history.branch(self.step, entry);
        self.next_player = player.opponent();
        debug!(%player, index, step = self.step, "move played");
        trace!(board = %self.board(), "board after move");
        Ok(())
    }

    pub fn jump_to(&mut self, step: usize) -> Result<(), Rejection> {
        let len = self.history.len();
        if step >= len {
            return Err(Rejection::StepOutOfRange { step, len });
        }
        self.step = step;
        self.next_player = Player::for_step(step);
        Ok(())
    }

    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new(Order::default())
    }
}
