use super::clock::PlaybackClock;
use super::error::{EmptyContext, PlayerError};
use super::playlist::{Listing, Playlist};
use super::track::Track;
use std::fmt;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How long a simulated play holds the session
pub const PLAYBACK_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Equalizer setting, always within 0..=10
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EqualizerLevel(u8);

impl EqualizerLevel {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 10;

    pub fn new(level: i64) -> Result<Self, PlayerError> {
        match u8::try_from(level) {
            Ok(level) if level <= Self::MAX => Ok(Self(level)),
            _ => Err(PlayerError::OutOfRange),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for EqualizerLevel {
    fn default() -> Self {
        Self(5)
    }
}

impl fmt::Display for EqualizerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the player has to say after a successful operation.
/// `Display` renders the line(s) shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerEvent {
    TrackSelected { title: String },
    TrackStarted { title: String, artist: String, equalizer: EqualizerLevel },
    TrackFinished { title: String },
    TrackPaused { title: String },
    AlreadyPaused,
    NothingToPause,
    TrackStopped { title: String },
    NothingToStop,
    FavoriteChanged(bool),
    EqualizerChanged(EqualizerLevel),
}

impl fmt::Display for PlayerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerEvent::TrackSelected { title } => write!(f, "Selected: {}", title),
            PlayerEvent::TrackStarted { title, artist, equalizer } => {
                write!(f, "Playing: {} by {}\nEqualizer Setting: {}", title, artist, equalizer)
            }
            PlayerEvent::TrackFinished { .. } => write!(f, "Audio playback finished."),
            PlayerEvent::TrackPaused { title } => write!(f, "Paused: {}", title),
            PlayerEvent::AlreadyPaused => write!(f, "Already paused."),
            PlayerEvent::NothingToPause => write!(f, "Nothing is playing to pause."),
            PlayerEvent::TrackStopped { title } => write!(f, "Stopped: {}", title),
            PlayerEvent::NothingToStop => write!(f, "Nothing is playing to stop."),
            PlayerEvent::FavoriteChanged(true) => write!(f, "Marked as Favorite."),
            PlayerEvent::FavoriteChanged(false) => write!(f, "Marked as Not Favorite."),
            PlayerEvent::EqualizerChanged(level) => {
                write!(f, "Equalizer adjusted to setting: {}", level)
            }
        }
    }
}

/// Outcome of a full play: the start announcement plus whether the
/// track was still playing once the simulated duration ran out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    pub started: PlayerEvent,
    pub finished: Option<PlayerEvent>,
}

/// Playlist plus selection, transport state and equalizer.
///
/// `selected` only ever points at an existing track: tracks are never removed,
/// so an index that was valid at selection time stays valid.
#[derive(Debug, Default)]
pub struct Player {
    playlist: Playlist,
    selected: Option<usize>,
    state: PlaybackState,
    equalizer: EqualizerLevel,
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a song. Selection and transport state are left alone.
    pub fn add_track(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        format: impl Into<String>,
    ) -> &Track {
        self.playlist.add(title, artist, format)
    }

    pub fn list(&self) -> Result<Listing<'_>, PlayerError> {
        self.playlist.list()
    }

    pub fn search(&self, query: &str) -> Result<Vec<&Track>, PlayerError> {
        self.playlist.search(query)
    }

    /// Select by 1-based position. Resets transport to stopped.
    pub fn select(&mut self, position: i64) -> Result<PlayerEvent, PlayerError> {
        let index = usize::try_from(position).ok().and_then(|p| p.checked_sub(1));
        let track = index
            .and_then(|i| self.playlist.get(i))
            .ok_or_else(|| {
                warn!("Rejected selection {} (playlist has {} tracks)", position, self.playlist.len());
                PlayerError::InvalidIndex
            })?;

        let title = track.title.clone();
        self.selected = index;
        self.state = PlaybackState::Stopped;
        info!("Selected track {}: '{}'", position, title);

        Ok(PlayerEvent::TrackSelected { title })
    }

    /// Start playing the selected track. Does not wait - pair with
    /// [`Player::simulate_playback`], or use [`Player::play_through`].
    pub fn play(&mut self) -> Result<PlayerEvent, PlayerError> {
        if self.playlist.is_empty() {
            return Err(PlayerError::EmptyLibrary(EmptyContext::Playback));
        }
        let index = self.selected.ok_or(PlayerError::NoSelection("play"))?;

        let track = self
            .playlist
            .get(index)
            .ok_or(PlayerError::NoSelection("play"))?;
        let event = PlayerEvent::TrackStarted {
            title: track.title.clone(),
            artist: track.artist.clone(),
            equalizer: self.equalizer,
        };

        self.state = PlaybackState::Playing;
        info!("Playback started for track {} at equalizer {}", index + 1, self.equalizer);

        Ok(event)
    }

    /// Hold for [`PLAYBACK_DURATION`], then report completion if the
    /// track is still playing (paused counts as playing).
    ///
    /// Nothing else touches the player during the wait, so right after a
    /// `play` this currently always reports completion.
    pub async fn simulate_playback<C: PlaybackClock>(&self, clock: &C) -> Option<PlayerEvent> {
        debug!("Simulating playback for {:?}", PLAYBACK_DURATION);
        clock.wait(PLAYBACK_DURATION).await;

        if !self.is_playing() {
            debug!("Playback no longer active after wait");
            return None;
        }

        let title = self.selected_title();
        info!("Playback finished: '{}'", title);
        Some(PlayerEvent::TrackFinished { title })
    }

    /// `play` followed by the simulated wait
    pub async fn play_through<C: PlaybackClock>(
        &mut self,
        clock: &C,
    ) -> Result<PlayReport, PlayerError> {
        let started = self.play()?;
        let finished = self.simulate_playback(clock).await;
        Ok(PlayReport { started, finished })
    }

    pub fn pause(&mut self) -> PlayerEvent {
        match self.state {
            PlaybackState::Playing => {
                self.state = PlaybackState::Paused;
                let title = self.selected_title();
                info!("Paused '{}'", title);
                PlayerEvent::TrackPaused { title }
            }
            PlaybackState::Paused => PlayerEvent::AlreadyPaused,
            PlaybackState::Stopped => PlayerEvent::NothingToPause,
        }
    }

    pub fn stop(&mut self) -> PlayerEvent {
        if !self.is_playing() {
            return PlayerEvent::NothingToStop;
        }

        self.state = PlaybackState::Stopped;
        let title = self.selected_title();
        info!("Stopped '{}'", title);
        PlayerEvent::TrackStopped { title }
    }

    pub fn toggle_favorite(&mut self) -> Result<PlayerEvent, PlayerError> {
        let index = self.selected.ok_or(PlayerError::NoSelection("mark as favorite"))?;
        let track = self
            .playlist
            .get_mut(index)
            .ok_or(PlayerError::NoSelection("mark as favorite"))?;

        let favorite = track.toggle_favorite();
        info!("Track '{}' favorite = {}", track.title, favorite);
        Ok(PlayerEvent::FavoriteChanged(favorite))
    }

    pub fn adjust_equalizer(&mut self, level: i64) -> Result<PlayerEvent, PlayerError> {
        let level = EqualizerLevel::new(level).map_err(|e| {
            warn!("Rejected equalizer level {}", level);
            e
        })?;

        self.equalizer = level;
        info!("Equalizer set to {}", level);
        Ok(PlayerEvent::EqualizerChanged(level))
    }

    pub fn tracks(&self) -> &Playlist {
        &self.playlist
    }

    /// 0-based index of the selected track
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.selected.and_then(|i| self.playlist.get(i))
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// True while a track is playing or paused
    pub fn is_playing(&self) -> bool {
        self.state != PlaybackState::Stopped
    }

    pub fn is_paused(&self) -> bool {
        self.state == PlaybackState::Paused
    }

    pub fn equalizer(&self) -> EqualizerLevel {
        self.equalizer
    }

    fn selected_title(&self) -> String {
        self.selected_track().map(|t| t.title.clone()).unwrap_or_default()
    }
}
