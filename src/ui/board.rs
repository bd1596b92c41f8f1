use raylib::prelude::*;

use super::{GRID_LINE, Layout, Pointer, cell};
use crate::game::{Board, CELLS, Line};

pub fn is_winning(winner: Option<Line>, index: usize) -> bool {
    winner.is_some_and(|line| line.contains(&index))
}

/// Draws the 3x3 grid row by row. `on_click` receives the index of an
/// activated cell.
pub fn render(
    d: &mut impl RaylibDraw,
    layout: Layout,
    board: &Board,
    winner: Option<Line>,
    pointer: &Pointer,
    on_click: &mut impl FnMut(usize),
) {
    let frame = layout.board_rect();
    d.draw_rectangle_lines(frame.x - 2, frame.y - 2, frame.w + 4, frame.h + 4, GRID_LINE);
    for index in 0..CELLS {
        cell::render(
            d,
            layout.cell_rect(index),
            board[index],
            is_winning(winner, index),
            pointer,
            || on_click(index),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_flags_nothing() {
        assert!((0..CELLS).all(|i| !is_winning(None, i)));
    }

    #[test]
    fn test_winner_flags_exactly_its_line() {
        let flagged: Vec<usize> = (0..CELLS)
            .filter(|&i| is_winning(Some([2, 4, 6]), i))
            .collect();
        assert_eq!(flagged, vec![2, 4, 6]);
    }
}
