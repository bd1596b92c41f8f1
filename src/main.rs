#![warn(clippy::all, clippy::pedantic)]

mod game;
mod ui;

use argh::FromArgs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use game::state::{GameState, Order};
use ui::Layout;
use ui::client::Client;

#[derive(FromArgs, Debug)]
/// Tic-tac-toe with a move list for jumping back to earlier boards.
struct Args {
    /// side of a board cell in pixels, 48 to 400
    #[argh(option, default = "ui::DEFAULT_CELL_SIZE")]
    cell_size: i32,

    /// show the move list newest first
    #[argh(switch)]
    reversed: bool,

    /// frame rate cap
    #[argh(option, default = "60")]
    fps: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Args = argh::from_env();
    info!(?args, "starting tic-tac-toe");

    let order = if args.reversed {
        Order::Reversed
    } else {
        Order::Direct
    };
    let mut state = GameState::new(order);
    let mut client = Client::new(Layout::new(args.cell_size), args.fps);

    while !client.should_close() {
        for event in client.frame(&state) {
            state = state.transition(event);
        }
    }

    info!(
        moves = state.history().len() - 1,
        status = %state.status(),
        "window closed"
    );
}
