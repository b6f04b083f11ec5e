/// One song in the playlist. Only the favorite flag changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub format: String, // free-form, whatever the user typed ("mp3", "wav", ...)
    pub favorite: bool,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            format: format.into(),
            favorite: false,
        }
    }

    /// Flip the favorite flag and hand back the new value
    pub fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }

    /// Case-sensitive substring match against title or artist
    pub fn matches(&self, query: &str) -> bool {
        self.title.contains(query) || self.artist.contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_track_is_not_favorite() {
        let track = Track::new("Song A", "Artist A", "mp3");
        assert!(!track.favorite);
        assert_eq!(track.format, "mp3");
    }

    #[test]
    fn test_toggle_favorite_round_trips() {
        let mut track = Track::new("Song B", "Artist B", "wav");
        assert!(track.toggle_favorite());
        assert!(!track.toggle_favorite());
        assert!(!track.favorite);
    }

    #[test]
    fn test_matches_is_case_sensitive_substring() {
        let track = Track::new("Heavy Is the Crown", "Linkin Park", "m4a");

        assert!(track.matches("Crown"));
        assert!(track.matches("Park"));
        assert!(track.matches("")); // empty query is a substring of everything
        assert!(!track.matches("crown"));
        assert!(!track.matches("m4a")); // format is not searched
    }
}
