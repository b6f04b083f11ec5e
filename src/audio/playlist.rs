use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

use tracing::{debug, info};

use super::error::{EmptyContext, PlayerError};
use super::track::Track;

/// Ordered, append-only collection of tracks. Insertion order is play order
/// and duplicates are fine.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track. Never fails, never dedupes.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        format: impl Into<String>,
    ) -> &Track {
        let track = Track::new(title, artist, format);
        info!(
            "Added track '{}' by '{}' at position {}",
            track.title,
            track.artist,
            self.tracks.len() + 1
        );
        self.tracks.push(track);
        &self.tracks[self.tracks.len() - 1]
    }

    /// Lazy view over the playlist, or `EmptyLibrary` when there is nothing to show
    pub fn list(&self) -> Result<Listing<'_>, PlayerError> {
        if self.tracks.is_empty() {
            return Err(PlayerError::EmptyLibrary(EmptyContext::Listing));
        }
        Ok(Listing {
            tracks: &self.tracks,
        })
    }

    /// Every track whose title or artist contains `query` (case-sensitive)
    pub fn search(&self, query: &str) -> Result<Vec<&Track>, PlayerError> {
        let hits: Vec<&Track> = self.tracks.iter().filter(|t| t.matches(query)).collect();
        debug!("Search for '{}' matched {} of {} tracks", query, hits.len(), self.tracks.len());

        if hits.is_empty() {
            Err(PlayerError::NotFound(query.to_string()))
        } else {
            Ok(hits)
        }
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Track> {
        self.tracks.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// Restartable view handed out by [`Playlist::list`]. Copying it is free,
/// so iterate it as many times as you like.
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    tracks: &'a [Track],
}

impl<'a> Listing<'a> {
    pub fn iter(&self) -> Entries<'a> {
        Entries {
            inner: self.tracks.iter().enumerate(),
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Always false - an empty playlist never hands out a listing
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl<'a> IntoIterator for Listing<'a> {
    type Item = ListEntry<'a>;
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One row of the playlist with its 1-based position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEntry<'a> {
    pub position: usize,
    pub title: &'a str,
    pub artist: &'a str,
    pub format: &'a str,
    pub favorite: bool,
}

impl fmt::Display for ListEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {} - {} [{}]", self.position, self.title, self.artist, self.format)?;
        if self.favorite {
            write!(f, " (Favorite)")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: Enumerate<slice::Iter<'a, Track>>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = ListEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(idx, track)| ListEntry {
            position: idx + 1,
            title: &track.title,
            artist: &track.artist,
            format: &track.format,
            favorite: track.favorite,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}
impl FusedIterator for Entries<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_song_playlist() -> Playlist {
        let mut playlist = Playlist::new();
        playlist.add("Song A", "Artist A", "mp3");
        playlist.add("Song B", "Artist B", "wav");
        playlist
    }

    #[test]
    fn test_list_keeps_insertion_order_with_one_based_positions() {
        let playlist = two_song_playlist();

        let rows: Vec<_> = playlist
            .list()
            .unwrap()
            .iter()
            .map(|e| (e.position, e.title, e.artist, e.format, e.favorite))
            .collect();

        assert_eq!(
            rows,
            vec![
                (1, "Song A", "Artist A", "mp3", false),
                (2, "Song B", "Artist B", "wav", false),
            ]
        );
    }

    #[test]
    fn test_list_is_restartable() {
        let playlist = two_song_playlist();
        let listing = playlist.list().unwrap();

        let first: Vec<_> = listing.iter().collect();
        let second: Vec<_> = listing.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(listing.len(), 2);
        assert!(!listing.is_empty());
        assert_eq!(listing.iter().len(), 2);
    }

    #[test]
    fn test_list_empty_playlist_signals_empty() {
        let playlist = Playlist::new();
        assert_eq!(
            playlist.list().unwrap_err(),
            PlayerError::EmptyLibrary(EmptyContext::Listing)
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut playlist = Playlist::new();
        playlist.add("Same", "Band", "mp3");
        playlist.add("Same", "Band", "mp3");

        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.search("Same").unwrap().len(), 2);
    }

    #[test]
    fn test_search_matches_title_or_artist_substring() {
        let mut playlist = two_song_playlist();
        playlist.add("Bohemian Rhapsody", "Queen", "flac");

        let hits = playlist.search("Song").unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Song A");
        assert_eq!(hits[1].title, "Song B");

        let hits = playlist.search("ueen").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Bohemian Rhapsody");
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let playlist = two_song_playlist();
        assert_eq!(
            playlist.search("song a").unwrap_err(),
            PlayerError::NotFound("song a".to_string())
        );
    }

    #[test]
    fn test_search_empty_playlist_is_not_found() {
        let playlist = Playlist::new();
        assert!(matches!(playlist.search(""), Err(PlayerError::NotFound(_))));
    }

    #[test]
    fn test_entry_display_format() {
        let mut playlist = two_song_playlist();
        playlist.get_mut(1).unwrap().toggle_favorite();

        let lines: Vec<String> = playlist.list().unwrap().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "1. Song A - Artist A [mp3]".to_string(),
                "2. Song B - Artist B [wav] (Favorite)".to_string(),
            ]
        );
    }
}
