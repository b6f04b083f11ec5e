use std::fmt;

use thiserror::Error;

/// Everything that can go wrong while driving the player.
/// None of these are fatal - the menu prints the message and carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayerError {
    #[error("Invalid song index.")]
    InvalidIndex,
    #[error("No song selected to {0}.")]
    NoSelection(&'static str),
    #[error("No songs {0}.")]
    EmptyLibrary(EmptyContext),
    #[error("Invalid equalizer setting. Choose a value between 0 and 10.")]
    OutOfRange,
    #[error("No song found matching: {0}")]
    NotFound(String),
    #[error("Invalid choice. Please try again.")]
    InvalidChoice(String),
}

/// Which operation ran into the empty playlist - decides the wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyContext {
    Listing,
    Playback,
}

impl fmt::Display for EmptyContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyContext::Listing => write!(f, "in playlist"),
            EmptyContext::Playback => write!(f, "to play"),
        }
    }
}
