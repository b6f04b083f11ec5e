// tunedeck library - playlist + simulated player behind a text menu
// The binary is a thin shell over these modules

pub mod audio;  // tracks, playlist, player state machine, playback clock
pub mod config; // optional settings file
pub mod ui;     // interactive menu loop

// Export the stuff other modules actually use
pub use audio::{Player, PlayerError, PlayerEvent, Playlist, Track};
pub use config::Config;
pub use ui::App;
