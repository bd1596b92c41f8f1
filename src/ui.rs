use raylib::color::Color;

pub mod board;
pub mod cell;
pub mod client;
pub mod info;

pub const DEFAULT_CELL_SIZE: i32 = 100;
const MIN_CELL_SIZE: i32 = 48;
const MAX_CELL_SIZE: i32 = 400;

const PADDING: i32 = 24;
const GAP: i32 = 4;
const PANEL_WIDTH: i32 = 320;
const ROW_HEIGHT: i32 = 30;
const FONT_SIZE: i32 = 20;
// start entry plus one per cell
const MAX_ENTRIES: usize = 10;

const BACKGROUND: Color = Color::new(245, 245, 245, 255);
const GRID_LINE: Color = Color::new(153, 153, 153, 255);
const TEXT: Color = Color::new(30, 30, 30, 255);
const BUTTON: Color = Color::new(225, 225, 225, 255);
const BUTTON_CURRENT: Color = Color::new(200, 215, 240, 255);

/// Axis-aligned rectangle in window pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn contains(self, x: f32, y: f32) -> bool {
        x >= self.x as f32
            && x < (self.x + self.w) as f32
            && y >= self.y as f32
            && y < (self.y + self.h) as f32
    }
}

/// Mouse state sampled once at the start of a frame.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
    pub pressed: bool,
}

impl Pointer {
    pub fn activates(&self, rect: Rect) -> bool {
        self.pressed && rect.contains(self.x, self.y)
    }
}

/// Window geometry: the board on the left, the game info panel on the right.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Layout {
    cell_size: i32,
}

impl Layout {
    pub fn new(cell_size: i32) -> Self {
        Layout {
            cell_size: cell_size.clamp(MIN_CELL_SIZE, MAX_CELL_SIZE),
        }
    }

    fn board_extent(self) -> i32 {
        3 * self.cell_size + 2 * GAP
    }

    pub fn board_rect(self) -> Rect {
        Rect::new(PADDING, PADDING, self.board_extent(), self.board_extent())
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn cell_rect(self, index: usize) -> Rect {
        let row = (index / 3) as i32;
        let col = (index % 3) as i32;
        let stride = self.cell_size + GAP;
        Rect::new(
            PADDING + col * stride,
            PADDING + row * stride,
            self.cell_size,
            self.cell_size,
        )
    }

    fn panel_x(self) -> i32 {
        2 * PADDING + self.board_extent()
    }

    pub fn status_origin(self) -> (i32, i32) {
        (self.panel_x(), PADDING)
    }

    pub fn toggle_rect(self) -> Rect {
        Rect::new(self.panel_x(), PADDING + ROW_HEIGHT, 180, ROW_HEIGHT - 4)
    }

    /// Button of the `slot`-th visible move list item, counted from the top.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn move_rect(self, slot: usize) -> Rect {
        let top = PADDING + 3 * ROW_HEIGHT;
        Rect::new(
            self.panel_x() + 36,
            top + slot as i32 * ROW_HEIGHT,
            PANEL_WIDTH - 36,
            ROW_HEIGHT - 4,
        )
    }

    pub fn window_size(self) -> (i32, i32) {
        let width = self.panel_x() + PANEL_WIDTH + PADDING;
        let list_bottom = self.move_rect(MAX_ENTRIES - 1).y + ROW_HEIGHT;
        let height = (2 * PADDING + self.board_extent()).max(list_bottom + PADDING);
        (width, height)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::new(DEFAULT_CELL_SIZE)
    }
}
