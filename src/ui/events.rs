use std::fmt;
use std::str::FromStr;

use crate::audio::PlayerError;

/// The ten numbered menu actions, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    // Library
    AddSong,
    ShowPlaylist,
    SearchSong,
    SelectSong,

    // Playback
    Play,
    Pause,
    Stop,

    // Track / sound
    ToggleFavorite,
    AdjustEqualizer,

    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 10] = [
        MenuChoice::AddSong,
        MenuChoice::ShowPlaylist,
        MenuChoice::SearchSong,
        MenuChoice::SelectSong,
        MenuChoice::Play,
        MenuChoice::Pause,
        MenuChoice::Stop,
        MenuChoice::ToggleFavorite,
        MenuChoice::AdjustEqualizer,
        MenuChoice::Exit,
    ];

    /// Number the user types for this action
    pub fn number(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).map_or(0, |i| i + 1)
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddSong => "Add Song",
            MenuChoice::ShowPlaylist => "Show Playlist",
            MenuChoice::SearchSong => "Search Song",
            MenuChoice::SelectSong => "Select Song",
            MenuChoice::Play => "Play",
            MenuChoice::Pause => "Pause",
            MenuChoice::Stop => "Stop",
            MenuChoice::ToggleFavorite => "Mark as Favorite",
            MenuChoice::AdjustEqualizer => "Adjust Equalizer",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

impl FromStr for MenuChoice {
    type Err = PlayerError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| PlayerError::InvalidChoice(input.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_follow_menu_order() {
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.number(), i + 1);
            assert_eq!(format!("{}", i + 1).parse::<MenuChoice>().unwrap(), *choice);
        }
        assert_eq!(MenuChoice::Exit.to_string(), "10. Exit");
        assert_eq!(MenuChoice::ToggleFavorite.to_string(), "8. Mark as Favorite");
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(" 5 \n".parse::<MenuChoice>().unwrap(), MenuChoice::Play);
    }

    #[test]
    fn test_parse_rejects_unknown_input() {
        for bad in ["0", "11", "-3", "play", "", "4.5"] {
            assert_eq!(
                bad.parse::<MenuChoice>().unwrap_err(),
                PlayerError::InvalidChoice(bad.to_string())
            );
        }
    }
}
