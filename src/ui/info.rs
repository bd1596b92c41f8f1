use raylib::prelude::*;

use super::{BUTTON, BUTTON_CURRENT, FONT_SIZE, Layout, Pointer, Rect, TEXT};
use crate::game::state::{Event, GameState, Order};

/// One row of the move list.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MoveItem {
    pub step: usize,
    pub label: String,
    pub current: bool,
}

impl MoveItem {
    /// List numbering follows play order whichever way the list is shown.
    pub fn number(&self) -> usize {
        self.step + 1
    }
}

/// Move list items in the order they are shown on screen.
pub fn move_items(state: &GameState) -> Vec<MoveItem> {
    let mut items: Vec<MoveItem> = state
        .history()
        .entries()
        .iter()
        .enumerate()
        .map(|(step, entry)| MoveItem {
            step,
            label: entry.label(step),
            current: step == state.step(),
        })
        .collect();
    if state.order() == Order::Reversed {
        items.reverse();
    }
    items
}

pub fn toggle_label(order: Order) -> String {
    format!("Order: {order}")
}

fn button(d: &mut impl RaylibDraw, rect: Rect, label: &str, current: bool) {
    let fill = if current { BUTTON_CURRENT } else { BUTTON };
    d.draw_rectangle(rect.x, rect.y, rect.w, rect.h, fill);
    d.draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, TEXT);
    let y = rect.y + (rect.h - FONT_SIZE) / 2;
    d.draw_text(label, rect.x + 8, y, FONT_SIZE, TEXT);
    if current {
        // no bold face in the default font
        d.draw_text(label, rect.x + 9, y, FONT_SIZE, TEXT);
    }
}

/// Draws the status line, the order toggle and the move list, reporting
/// activations through `on_event`.
pub fn render(
    d: &mut impl RaylibDraw,
    layout: Layout,
    state: &GameState,
    pointer: &Pointer,
    on_event: &mut impl FnMut(Event),
) {
    let (x, y) = layout.status_origin();
    d.draw_text(&state.status().to_string(), x, y, FONT_SIZE, TEXT);

    let toggle = layout.toggle_rect();
    button(d, toggle, &toggle_label(state.order()), false);
    if pointer.activates(toggle) {
        on_event(Event::ToggleOrder);
    }

    for (slot, item) in move_items(state).iter().enumerate() {
        let rect = layout.move_rect(slot);
        d.draw_text(
            &format!("{}.", item.number()),
            layout.status_origin().0,
            rect.y + (rect.h - FONT_SIZE) / 2,
            FONT_SIZE,
            TEXT,
        );
        button(d, rect, &item.label, item.current);
        if pointer.activates(rect) {
            on_event(Event::JumpTo(item.step));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(moves: &[usize]) -> GameState {
        moves
            .iter()
            .fold(GameState::default(), |state, &i| state.transition(Event::Move(i)))
    }

    #[test]
    fn test_items_in_play_order() {
        let state = played(&[4, 2]);
        let items = move_items(&state);
        let labels: Vec<&str> = items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Go to start", "Go to move #1 (2, 2)", "Go to move #2 (3, 1)"]
        );
        assert_eq!(
            items.iter().map(|i| i.current).collect::<Vec<_>>(),
            vec![false, false, true]
        );
    }

    #[test]
    fn test_current_item_follows_jump() {
        let state = played(&[4, 2]).transition(Event::JumpTo(0));
        let items = move_items(&state);
        assert!(items[0].current);
        assert_eq!(items.iter().filter(|i| i.current).count(), 1);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_reversed_order_keeps_numbers() {
        let state = played(&[4, 2]).transition(Event::ToggleOrder);
        let items = move_items(&state);
        let steps: Vec<usize> = items.iter().map(|i| i.step).collect();
        assert_eq!(steps, vec![2, 1, 0]);
        let numbers: Vec<usize> = items.iter().map(MoveItem::number).collect();
        assert_eq!(numbers, vec![3, 2, 1]);
        assert_eq!(state.history().entries()[2].last_move(), Some(2));
    }

    #[test]
    fn test_toggle_twice_restores_list() {
        let state = played(&[0, 8, 4]);
        let before = move_items(&state);
        let after = move_items(
            &state
                .clone()
                .transition(Event::ToggleOrder)
                .transition(Event::ToggleOrder),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn test_toggle_label() {
        assert_eq!(toggle_label(Order::Direct), "Order: direct");
        assert_eq!(toggle_label(Order::Reversed), "Order: reversed");
    }
}
