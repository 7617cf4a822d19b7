use super::song::fold_case;
use super::Song;
use std::collections::HashMap;
use thiserror::Error;

/// Errors surfaced by catalog queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("Song not found")]
    NotFound,
}

impl QueryError {
    pub fn invalid_song_id() -> Self {
        Self::InvalidArgument("Invalid song ID".to_owned())
    }
}

/// Non-fatal issues found while building a catalog.
#[derive(Debug, PartialEq, Eq)]
pub enum Problem {
    DuplicateId { id: i64, count: usize },
}

pub struct CatalogBuildResult {
    pub catalog: Catalog,
    pub problems: Vec<Problem>,
}

/// The immutable, ordered collection of songs served by the application.
///
/// Insertion order is file order and is preserved by every query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    pub fn new(songs: Vec<Song>) -> Catalog {
        Catalog { songs }
    }

    /// Builds a catalog, reporting duplicated ids without rejecting them.
    pub fn build(songs: Vec<Song>) -> CatalogBuildResult {
        let mut counts: HashMap<i64, usize> = HashMap::new();
        let mut first_seen: Vec<i64> = vec![];
        for song in songs.iter() {
            let count = counts.entry(song.id).or_insert(0);
            if *count == 0 {
                first_seen.push(song.id);
            }
            *count += 1;
        }

        let problems = first_seen
            .into_iter()
            .filter_map(|id| match counts[&id] {
                count if count > 1 => Some(Problem::DuplicateId { id, count }),
                _ => None,
            })
            .collect();

        CatalogBuildResult {
            catalog: Catalog::new(songs),
            problems,
        }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Every song, in stored order.
    pub fn list(&self) -> &[Song] {
        &self.songs
    }

    /// First song whose id equals `id`, in stored order.
    pub fn get_song(&self, id: i64) -> Result<&Song, QueryError> {
        self.songs
            .iter()
            .find(|song| song.id == id)
            .ok_or(QueryError::NotFound)
    }

    /// Songs whose title or artist contains `query`, ignoring case.
    ///
    /// An empty query is rejected instead of matching everything.
    pub fn search(&self, query: &str) -> Result<Vec<&Song>, QueryError> {
        if query.is_empty() {
            return Err(QueryError::InvalidArgument("Empty search query".to_owned()));
        }
        let query = fold_case(query);
        Ok(self.songs.iter().filter(|song| song.matches(&query)).collect())
    }
}

/// Parses a caller-supplied song identifier.
pub fn parse_song_id(raw: &str) -> Result<i64, QueryError> {
    raw.parse::<i64>().map_err(|_| QueryError::invalid_song_id())
}
