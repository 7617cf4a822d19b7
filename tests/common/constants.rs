//! Shared constants for end-to-end tests
//!
//! When the fixture songs change, update only this file.

// ============================================================================
// Test Catalog
// ============================================================================

/// "Yesterday" by The Beatles
pub const SONG_1_ID: i64 = 1;
pub const SONG_1_TITLE: &str = "Yesterday";
pub const SONG_1_ARTIST: &str = "The Beatles";
pub const SONG_1_MUSIC_DIRECTOR: &str = "George Martin";

/// "Imagine" by John Lennon
pub const SONG_2_ID: i64 = 2;
pub const SONG_2_TITLE: &str = "Imagine";
pub const SONG_2_ARTIST: &str = "John Lennon";

/// "Someone Like You" by Adele
pub const SONG_3_ID: i64 = 3;
pub const SONG_3_TITLE: &str = "Someone Like You";
pub const SONG_3_ARTIST: &str = "Adele";

/// "Let It Be" by The Beatles, no music director and no lyrics in the file
pub const SONG_4_ID: i64 = 4;
pub const SONG_4_TITLE: &str = "Let It Be";

/// Number of songs in the fixture file
pub const SONGS_COUNT: usize = 4;

/// An id that is not in the fixture file
pub const MISSING_SONG_ID: i64 = 9;

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the test server to accept requests
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Delay between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;

/// Timeout for a single test request
pub const REQUEST_TIMEOUT_SECS: u64 = 5;
