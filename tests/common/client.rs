//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all song catalog endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use std::time::Duration;

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET /
    pub async fn get_stats(&self) -> Response {
        self.get("/").await
    }

    /// GET /songs
    pub async fn get_songs(&self) -> Response {
        self.get("/songs").await
    }

    /// GET /song/{id}
    ///
    /// Takes the raw path segment so tests can send non-numeric ids.
    pub async fn get_song(&self, id: &str) -> Response {
        self.get(&format!("/song/{}", id)).await
    }

    /// GET /search?q={query}
    pub async fn search(&self, query: &str) -> Response {
        self.client
            .get(format!("{}/search", self.base_url))
            .query(&[("q", query)])
            .send()
            .await
            .expect("Search request failed")
    }

    /// GET /search with no query parameter
    pub async fn search_without_query(&self) -> Response {
        self.get("/search").await
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap_or_else(|err| panic!("GET {} failed: {}", path, err))
    }
}
