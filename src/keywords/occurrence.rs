//! Candidate-to-document occurrence mapping.
//!
//! The candidate set can run into the thousands, so candidates are batched
//! and each batch is compiled once into a multi-pattern matcher; every
//! document is then scanned once per batch. Cost is O(documents × batches)
//! rather than O(documents × candidates). Matching is overlapping, so a
//! candidate is reported even when it only occurs inside a longer candidate
//! from the same batch — "contains as a literal substring" is exact.

use crate::corpus::Document;
use aho_corasick::AhoCorasick;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Default number of candidate surfaces compiled into one matcher.
pub const DEFAULT_BATCH_SIZE: usize = 500;

/// keyword → ids of the documents containing it, in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl OccurrenceMap {
    /// Documents a keyword occurs in, if it occurs anywhere.
    pub fn document_ids(&self, keyword: &str) -> Option<&[String]> {
        self.entries.get(keyword).map(Vec::as_slice)
    }

    /// Number of documents a keyword occurs in.
    pub fn document_count(&self, keyword: &str) -> usize {
        self.entries.get(keyword).map_or(0, Vec::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Failure to compile a candidate batch into a matcher.
#[derive(Debug, Clone)]
pub struct MatcherBuildError(pub String);

impl fmt::Display for MatcherBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not build candidate matcher: {}", self.0)
    }
}

impl std::error::Error for MatcherBuildError {}

/// Map every non-empty candidate to the documents containing it.
///
/// An empty candidate set or corpus degrades to an empty map.
pub fn map_occurrences(
    candidates: &BTreeSet<String>,
    documents: &[Document],
    batch_size: usize,
) -> Result<OccurrenceMap, MatcherBuildError> {
    let patterns: Vec<&str> = candidates
        .iter()
        .filter(|surface| !surface.is_empty())
        .map(String::as_str)
        .collect();
    if patterns.is_empty() || documents.is_empty() {
        return Ok(OccurrenceMap::default());
    }

    let batch_size = batch_size.max(1);
    let mut batches = Vec::new();
    for batch in patterns.chunks(batch_size) {
        let matcher =
            AhoCorasick::new(batch).map_err(|error| MatcherBuildError(error.to_string()))?;
        batches.push((matcher, batch));
    }

    let mut entries: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for document in documents {
        let mut found: BTreeSet<&str> = BTreeSet::new();
        for (matcher, batch) in &batches {
            for matched in matcher.find_overlapping_iter(&document.content) {
                found.insert(batch[matched.pattern().as_usize()]);
            }
        }
        for keyword in found {
            entries
                .entry(keyword.to_string())
                .or_default()
                .push(document.id.clone());
        }
    }

    tracing::debug!(
        candidates = patterns.len(),
        batches = batches.len(),
        documents = documents.len(),
        "occurrence mapping complete"
    );
    Ok(OccurrenceMap { entries })
}
