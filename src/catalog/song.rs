use std::fmt;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Serialize;

/// A single catalog record.
///
/// Decoding is lenient: unknown fields are ignored, and missing or `null`
/// fields keep the zero value of their type. Keys match field names
/// case-insensitively, and when a key repeats the last value wins. A `null`
/// record decodes to an all-default song.
#[derive(Clone, Serialize, Debug, PartialEq, Eq, Default)]
pub struct Song {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub music_director: String,
    pub lyrics: String,
}

/// Lower-cases one char at a time with the simple (single char) mapping,
/// so `'İ'` becomes `'i'` and a final `'Σ'` becomes `'σ'`.
pub(crate) fn fold_case(s: &str) -> String {
    s.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

enum SongField {
    Id,
    Title,
    Artist,
    MusicDirector,
    Lyrics,
    Unknown,
}

impl SongField {
    fn from_key(key: &str) -> Self {
        match fold_case(key).as_str() {
            "id" => Self::Id,
            "title" => Self::Title,
            "artist" => Self::Artist,
            "music_director" => Self::MusicDirector,
            "lyrics" => Self::Lyrics,
            _ => Self::Unknown,
        }
    }
}

/// Overwrites `field` unless the incoming value is `null`.
fn assign<'de, A, T>(map: &mut A, field: &mut T) -> Result<(), A::Error>
where
    A: MapAccess<'de>,
    T: Deserialize<'de>,
{
    if let Some(value) = map.next_value::<Option<T>>()? {
        *field = value;
    }
    Ok(())
}

struct SongVisitor;

impl<'de> Visitor<'de> for SongVisitor {
    type Value = Song;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a song object")
    }

    fn visit_none<E: de::Error>(self) -> Result<Song, E> {
        Ok(Song::default())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Song, E> {
        Ok(Song::default())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Song, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(self)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Song, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut song = Song::default();
        while let Some(key) = map.next_key::<String>()? {
            match SongField::from_key(&key) {
                SongField::Id => assign(&mut map, &mut song.id)?,
                SongField::Title => assign(&mut map, &mut song.title)?,
                SongField::Artist => assign(&mut map, &mut song.artist)?,
                SongField::MusicDirector => assign(&mut map, &mut song.music_director)?,
                SongField::Lyrics => assign(&mut map, &mut song.lyrics)?,
                SongField::Unknown => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(song)
    }
}

impl<'de> Deserialize<'de> for Song {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(SongVisitor)
    }
}

impl Song {
    /// True if `folded_query` (already passed through [`fold_case`]) is
    /// contained in the folded title or artist.
    pub fn matches(&self, folded_query: &str) -> bool {
        fold_case(&self.title).contains(folded_query)
            || fold_case(&self.artist).contains(folded_query)
    }
}
