use super::Board;

/// A board snapshot and the cell whose move produced it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct HistoryEntry {
    board: Board,
    last_move: Option<usize>,
}

impl HistoryEntry {
    pub fn new(board: Board, last_move: usize) -> Self {
        HistoryEntry {
            board,
            last_move: Some(last_move),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    /// 1-based `(col, row)` of the last move.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        self.last_move().map(|i| (i % 3 + 1, i / 3 + 1))
    }

    /// Label for the move list button of the entry at `step`.
    pub fn label(&self, step: usize) -> String {
        if step == 0 {
            return "Go to start".to_string();
        }
        match self.coordinates() {
            Some((col, row)) => format!("Go to move #{step} ({col}, {row})"),
            None => format!("Go to move #{step}"),
        }
    }
}

/// Snapshots in play order. Always holds at least the empty starting board.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

#[allow(clippy::len_without_is_empty)] // never empty
impl History {
    pub fn new() -> Self {
        History {
            entries: vec![HistoryEntry::default()],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Drops every entry after `step`, then appends `entry`. Returns the new
    /// entry's step.
    pub fn branch(&mut self, step: usize, entry: HistoryEntry) -> usize {
        self.entries.truncate(step + 1);
        self.entries.push(entry);
        self.entries.len() - 1
    }
}

impl Default for History {
    fn default() -> Self {
        History::new()
    }
}
