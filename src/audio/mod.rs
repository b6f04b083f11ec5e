pub mod clock;
pub mod error;
pub mod player;
pub mod playlist;
pub mod track;

pub use clock::{PlaybackClock, TokioClock};
pub use error::{EmptyContext, PlayerError};
pub use player::{EqualizerLevel, PlayReport, PlaybackState, Player, PlayerEvent, PLAYBACK_DURATION};
pub use playlist::{ListEntry, Listing, Playlist};
pub use track::Track;
