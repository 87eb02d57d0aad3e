//! Modification-time keyed token cache.
//!
//! External tagger output is expensive to recompute, so tokens are cached
//! per document id and invalidated when the source file's mtime changes.
//! The cache is an explicit collaborator handed to the caller, not ambient
//! state: loading, lookup, and persistence are all named operations. A
//! missing or corrupt cache file degrades to an empty cache with a warning.

use crate::corpus::CorpusError;
use crate::tagging::TaggedToken;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CacheEntry {
    modified_secs: u64,
    tokens: Vec<TaggedToken>,
}

/// Token cache persisted as a single JSON file.
#[derive(Debug, Clone, Default)]
pub struct TokenCache {
    entries: BTreeMap<String, CacheEntry>,
    dirty: bool,
}

impl TokenCache {
    /// Load a cache file. Missing or unreadable caches start empty.
    pub fn load(path: &Path) -> Self {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str::<BTreeMap<String, CacheEntry>>(&raw) {
            Ok(entries) => Self {
                entries,
                dirty: false,
            },
            Err(error) => {
                tracing::warn!(%error, path = %path.display(), "token cache unreadable; starting empty");
                Self::default()
            }
        }
    }

    /// Cached tokens for a document, valid only while the mtime matches.
    pub fn lookup(&self, id: &str, modified_secs: u64) -> Option<&[TaggedToken]> {
        self.entries
            .get(id)
            .filter(|entry| entry.modified_secs == modified_secs)
            .map(|entry| entry.tokens.as_slice())
    }

    pub fn store(&mut self, id: impl Into<String>, modified_secs: u64, tokens: Vec<TaggedToken>) {
        self.entries.insert(
            id.into(),
            CacheEntry {
                modified_secs,
                tokens,
            },
        );
        self.dirty = true;
    }

    /// Whether entries changed since loading.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Persist the cache if it changed since loading.
    pub fn save(&self, path: &Path) -> Result<(), CorpusError> {
        if !self.dirty {
            return Ok(());
        }
        let rendered = serde_json::to_string(&self.entries).map_err(|error| CorpusError::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        })?;
        fs::write(path, rendered).map_err(|error| CorpusError::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tokens() -> Vec<TaggedToken> {
        vec![TaggedToken::new("東京", "名詞,固有名詞", "")]
    }

    #[test]
    fn lookup_requires_a_matching_mtime() {
        let mut cache = TokenCache::default();
        cache.store("ep01.md", 100, sample_tokens());

        assert!(cache.lookup("ep01.md", 100).is_some());
        assert!(cache.lookup("ep01.md", 101).is_none());
        assert!(cache.lookup("ep02.md", 100).is_none());
    }

    #[test]
    fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let mut cache = TokenCache::default();
        cache.store("ep01.md", 100, sample_tokens());
        cache.save(&path).unwrap();

        let reloaded = TokenCache::load(&path);
        assert_eq!(reloaded.lookup("ep01.md", 100), Some(&sample_tokens()[..]));
        assert!(!reloaded.is_dirty());
    }

    #[test]
    fn clean_caches_are_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let cache = TokenCache::default();
        cache.save(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn corrupt_cache_files_degrade_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "not json at all").unwrap();

        let cache = TokenCache::load(&path);
        assert!(cache.is_empty());
    }
}
