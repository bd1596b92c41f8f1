use raylib::color::Color;
use raylib::prelude::*;

use super::{GRID_LINE, Pointer, Rect};
use crate::game::{Cell, Player};

const EMPTY_BACKGROUND: Color = Color::WHITE;
const WINNING_BACKGROUND: Color = Color::new(255, 215, 90, 255);
const X_BACKGROUND: Color = Color::new(235, 242, 255, 255);
const O_BACKGROUND: Color = Color::new(255, 238, 238, 255);
const X_MARK: Color = Color::new(40, 90, 200, 255);
const O_MARK: Color = Color::new(210, 60, 60, 255);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellStyle {
    Empty,
    Filled(Player),
    Winning,
}

impl CellStyle {
    /// The winning highlight takes precedence over the mark colour.
    pub fn of(cell: Cell, winning: bool) -> CellStyle {
        match cell {
            _ if winning => CellStyle::Winning,
            Cell::Occupied(player) => CellStyle::Filled(player),
            Cell::Empty => CellStyle::Empty,
        }
    }

    fn background(self) -> Color {
        match self {
            CellStyle::Winning => WINNING_BACKGROUND,
            CellStyle::Filled(Player::X) => X_BACKGROUND,
            CellStyle::Filled(Player::O) => O_BACKGROUND,
            CellStyle::Empty => EMPTY_BACKGROUND,
        }
    }
}

fn mark_colour(player: Player) -> Color {
    match player {
        Player::X => X_MARK,
        Player::O => O_MARK,
    }
}

/// Draws one cell and calls `on_click` if the pointer activated it.
pub fn render(
    d: &mut impl RaylibDraw,
    rect: Rect,
    cell: Cell,
    winning: bool,
    pointer: &Pointer,
    on_click: impl FnOnce(),
) {
    let style = CellStyle::of(cell, winning);
    d.draw_rectangle(rect.x, rect.y, rect.w, rect.h, style.background());
    d.draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, GRID_LINE);

    if let Some(player) = cell.player() {
        let size = rect.h * 3 / 5;
        // default font glyphs are roughly half as wide as they are tall
        let x = rect.x + (rect.w - size / 2) / 2;
        let y = rect.y + (rect.h - size) / 2;
        d.draw_text(&player.to_string(), x, y, size, mark_colour(player));
    }

    if pointer.activates(rect) {
        on_click();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_precedence() {
        assert_eq!(CellStyle::of(Cell::Empty, false), CellStyle::Empty);
        assert_eq!(
            CellStyle::of(Cell::Occupied(Player::O), false),
            CellStyle::Filled(Player::O)
        );
        assert_eq!(CellStyle::of(Cell::Occupied(Player::X), true), CellStyle::Winning);
    }

    #[test]
    fn test_winning_background() {
        let x = Cell::Occupied(Player::X);
        assert_eq!(CellStyle::of(x, true).background(), WINNING_BACKGROUND);
        assert_eq!(CellStyle::of(x, false).background(), X_BACKGROUND);
        assert_eq!(CellStyle::of(Cell::Empty, false).background(), EMPTY_BACKGROUND);
        assert_ne!(mark_colour(Player::X), mark_colour(Player::O));
    }
}
