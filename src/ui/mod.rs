// Text menu - the face of tunedeck
// Plain line-oriented stdin/stdout, no raw mode or alternate screen

mod app;        // menu loop: prompts, dispatch, output
pub mod events; // numbered menu choices

pub use app::{menu_text, App, BANNER};
pub use events::MenuChoice;

use crate::audio::TokioClock;
use tokio::io::{self, BufReader, Stdin, Stdout};

/// The real session: stdin in, stdout out, wall-clock playback
pub type StdioApp = App<BufReader<Stdin>, Stdout, TokioClock>;

pub fn stdio_app() -> StdioApp {
    App::new(BufReader::new(io::stdin()), io::stdout(), TokioClock)
}
