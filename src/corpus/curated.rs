//! Curated keyword source.
//!
//! Reads the hand-maintained keyword list that seeds the candidate set:
//! `{ "keywords": [ { "keyword": "..." }, ... ] }`. A missing or malformed
//! file is non-fatal — the run proceeds with an empty set and a warning.

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CuratedFile {
    #[serde(default)]
    keywords: Vec<CuratedEntry>,
}

#[derive(Debug, Deserialize)]
struct CuratedEntry {
    #[serde(default)]
    keyword: String,
}

/// Load the curated keyword list, never failing the run.
pub fn load_curated_keywords(path: &Path) -> Vec<String> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "curated keywords unavailable; continuing without them");
            return Vec::new();
        }
    };
    match serde_json::from_str::<CuratedFile>(&raw) {
        Ok(file) => file
            .keywords
            .into_iter()
            .map(|entry| entry.keyword)
            .filter(|keyword| !keyword.is_empty())
            .collect(),
        Err(error) => {
            tracing::warn!(%error, path = %path.display(), "curated keywords unparseable; continuing without them");
            Vec::new()
        }
    }
}
