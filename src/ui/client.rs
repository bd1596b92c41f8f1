use once_cell::sync::OnceCell;
use raylib::prelude::*;
use std::thread;

use super::{BACKGROUND, Layout, Pointer, board, info};
use crate::game::state::{Event, GameState};

// Thread that opened the window; raylib draw calls are only valid there.
static MAIN_THREAD_ID: OnceCell<thread::ThreadId> = OnceCell::new();

#[derive(Debug)]
pub struct Client {
    layout: Layout,
    rl: RaylibHandle,
    thread: RaylibThread,
}

impl Client {
    pub fn new(layout: Layout, fps: u32) -> Self {
        let (width, height) = layout.window_size();
        let (mut rl, thread) = raylib::init()
            .size(width, height)
            .title("Tic-Tac-Toe")
            .build();
        rl.set_target_fps(fps);

        Client { layout, rl, thread }
    }

    pub fn should_close(&self) -> bool {
        self.rl.window_should_close()
    }

    fn pointer(&self) -> Pointer {
        let pos = self.rl.get_mouse_position();
        Pointer {
            x: pos.x,
            y: pos.y,
            pressed: self
                .rl
                .is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
        }
    }

    /// Draws `state` and returns the events the user triggered this frame,
    /// in the order they were hit.
    pub fn frame(&mut self, state: &GameState) -> Vec<Event> {
        // first frame pins the render thread
        let main_thread_id = MAIN_THREAD_ID.get_or_init(|| thread::current().id());
        assert_eq!(
            *main_thread_id,
            thread::current().id(),
            "frames must be drawn on the thread that opened the window"
        );

        // TAB switches between windowed and fullscreen
        if self.rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            self.rl.toggle_fullscreen();
        }

        let pointer = self.pointer();
        let layout = self.layout;
        let mut events = Vec::new();

        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(BACKGROUND);

        board::render(
            &mut d,
            layout,
            state.board(),
            state.winning_line(),
            &pointer,
            &mut |index| events.push(Event::Move(index)),
        );
        info::render(&mut d, layout, state, &pointer, &mut |event| {
            events.push(event);
        });

        events
    }
}
