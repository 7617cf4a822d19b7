//! Test fixture creation for the songs data file

use super::constants::*;
use anyhow::Result;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes `content` as `data.json` in a fresh temporary directory.
/// Returns (temp_dir, data_file_path)
pub fn write_data_file(content: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("data.json");
    fs::write(&path, content)?;
    Ok((dir, path))
}

/// Creates a temporary data file with the 4 fixture songs.
/// Returns (temp_dir, data_file_path)
pub fn write_test_data_file() -> Result<(TempDir, PathBuf)> {
    let songs = json!([
        {
            "id": SONG_1_ID,
            "title": SONG_1_TITLE,
            "artist": SONG_1_ARTIST,
            "music_director": SONG_1_MUSIC_DIRECTOR,
            "lyrics": "Yesterday, all my troubles seemed so far away"
        },
        {
            "id": SONG_2_ID,
            "title": SONG_2_TITLE,
            "artist": SONG_2_ARTIST,
            "music_director": "Phil Spector",
            "lyrics": "Imagine there's no heaven"
        },
        {
            "id": SONG_3_ID,
            "title": SONG_3_TITLE,
            "artist": SONG_3_ARTIST,
            "music_director": "Dan Wilson",
            "lyrics": "I heard that you're settled down"
        },
        {
            "id": SONG_4_ID,
            "title": SONG_4_TITLE,
            "artist": SONG_1_ARTIST
        }
    ]);
    write_data_file(&serde_json::to_string_pretty(&songs)?)
}
