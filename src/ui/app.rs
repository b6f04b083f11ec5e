use super::events::MenuChoice;
use crate::audio::{PlaybackClock, Player, PlayerError, PlayerEvent};
use anyhow::Result;
use std::fmt::{self, Display, Write as _};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

pub const BANNER: &str = "🎵 tunedeck - Terminal Playlist Manager";

const PROMPT_TITLE: &str = "Enter song title: ";
const PROMPT_ARTIST: &str = "Enter artist name: ";
const PROMPT_FORMAT: &str = "Enter audio format (e.g., mp3, wav): ";
const PROMPT_SEARCH: &str = "Enter song or artist to search: ";
const PROMPT_SELECT: &str = "Enter song number to select: ";
const PROMPT_EQUALIZER: &str = "Enter equalizer setting (0-10): ";

/// The numbered menu, ending in the choice prompt (no trailing newline)
pub fn menu_text() -> String {
    let mut text = String::from("\nMusic Player Menu:\n");
    for choice in MenuChoice::ALL {
        // writing into a String can't fail
        let _ = writeln!(text, "{}", choice);
    }
    text.push_str("Enter choice: ");
    text
}

/// Line-oriented menu session: reads choices from `input`, drives the
/// player, writes every message to `output`.
pub struct App<R, W, C> {
    player: Player,
    input: R,
    output: W,
    clock: C,
    show_banner: bool,
    pub should_quit: bool,
}

impl<R, W, C> App<R, W, C>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    C: PlaybackClock,
{
    pub fn new(input: R, output: W, clock: C) -> Self {
        Self {
            player: Player::new(),
            input,
            output,
            clock,
            show_banner: false,
            should_quit: false,
        }
    }

    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run until Exit is chosen or input runs dry
    pub async fn run(&mut self) -> Result<()> {
        info!("Menu session started");
        if self.show_banner {
            self.say(BANNER).await?;
        }

        while !self.should_quit {
            self.write(&menu_text()).await?;

            let Some(line) = self.read_line().await? else {
                info!("Input closed, leaving menu");
                break;
            };

            match line.parse::<MenuChoice>() {
                Ok(choice) => {
                    debug!("Menu choice: {:?}", choice);
                    self.handle_choice(choice).await?;
                }
                Err(e) => {
                    warn!("Unrecognized menu input: {:?}", line);
                    self.say(e).await?;
                }
            }
        }

        self.output.flush().await?;
        info!("Menu session ended");
        Ok(())
    }

    async fn handle_choice(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::AddSong => {
                let Some(title) = self.prompt(PROMPT_TITLE).await? else { return Ok(()) };
                let Some(artist) = self.prompt(PROMPT_ARTIST).await? else { return Ok(()) };
                let Some(format) = self.prompt(PROMPT_FORMAT).await? else { return Ok(()) };
                self.player.add_track(title, artist, format);
            }
            MenuChoice::ShowPlaylist => {
                let text = match self.player.list() {
                    Ok(listing) => {
                        let mut text = String::from("Playlist:");
                        for entry in listing {
                            let _ = write!(text, "\n{}", entry);
                        }
                        text
                    }
                    Err(e) => e.to_string(),
                };
                self.say(text).await?;
            }
            MenuChoice::SearchSong => {
                let Some(query) = self.prompt(PROMPT_SEARCH).await? else { return Ok(()) };
                let text = match self.player.search(&query) {
                    Ok(hits) => hits
                        .iter()
                        .map(|t| format!("Found: {} by {}", t.title, t.artist))
                        .collect::<Vec<_>>()
                        .join("\n"),
                    Err(e) => e.to_string(),
                };
                self.say(text).await?;
            }
            MenuChoice::SelectSong => {
                let Some(raw) = self.prompt(PROMPT_SELECT).await? else { return Ok(()) };
                let result = parse_number(&raw)
                    .ok_or(PlayerError::InvalidIndex)
                    .and_then(|position| self.player.select(position));
                self.report(result).await?;
            }
            MenuChoice::Play => self.play().await?,
            MenuChoice::Pause => {
                let event = self.player.pause();
                self.say(event).await?;
            }
            MenuChoice::Stop => {
                let event = self.player.stop();
                self.say(event).await?;
            }
            MenuChoice::ToggleFavorite => {
                let result = self.player.toggle_favorite();
                self.report(result).await?;
            }
            MenuChoice::AdjustEqualizer => {
                let Some(raw) = self.prompt(PROMPT_EQUALIZER).await? else { return Ok(()) };
                let result = parse_number(&raw)
                    .ok_or(PlayerError::OutOfRange)
                    .and_then(|level| self.player.adjust_equalizer(level));
                self.report(result).await?;
            }
            MenuChoice::Exit => {
                self.say("Exiting the music player.").await?;
                self.should_quit = true;
            }
        }
        Ok(())
    }

    async fn play(&mut self) -> Result<()> {
        let started = match self.player.play() {
            Ok(event) => event,
            Err(e) => return self.say(e).await,
        };
        self.say(started).await?;
        self.say("Simulating audio playback...").await?;

        let finished = self.player.simulate_playback(&self.clock).await;
        if let Some(event) = finished {
            self.say(event).await?;
        }
        Ok(())
    }

    async fn report(&mut self, result: Result<PlayerEvent, PlayerError>) -> Result<()> {
        match result {
            Ok(event) => self.say(event).await,
            Err(e) => {
                debug!("Operation rejected: {:?}", e);
                self.say(e).await
            }
        }
    }

    /// Show a prompt and read one line; `None` means input is gone
    async fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.write(text).await?;
        let line = self.read_line().await?;
        if line.is_none() {
            info!("Input closed mid-prompt");
            self.should_quit = true;
        }
        Ok(line)
    }

    /// One line of input, terminator stripped. Bytes that aren't UTF-8
    /// are replaced rather than ending the session.
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    async fn say(&mut self, message: impl Display) -> Result<()> {
        self.write(&format!("{}\n", message)).await
    }

    async fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}

impl<R, W, C> fmt::Debug for App<R, W, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("player", &self.player)
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

fn parse_number(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
