//! End-to-end analysis pipeline.
//!
//! Runs the component chain in dependency order: per document, classify →
//! base-chunk → parse → harvest; then corpus-wide pattern extraction and
//! curated seeding, occurrence mapping, and the filtering stages. Each
//! document is processed to completion before the next; all cross-document
//! state lives in the candidate set accumulated here.

pub mod artifacts;

use crate::chunking::chunk_tokens;
use crate::config::KakariConfig;
use crate::corpus::Document;
use crate::keywords::candidates::CandidateSet;
use crate::keywords::filter::{apply_filters, FilterThresholds};
use crate::keywords::occurrence::{map_occurrences, MatcherBuildError};
use crate::parsing::parse;
use crate::tagging::{classify, TaggedToken, Token};
use self::artifacts::AnalysisArtifacts;
use std::collections::BTreeMap;
use std::fmt;

/// Errors terminating an analysis run.
#[derive(Debug)]
pub enum AnalysisError {
    Matcher(MatcherBuildError),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::Matcher(inner) => write!(f, "{}", inner),
        }
    }
}

impl std::error::Error for AnalysisError {}

impl From<MatcherBuildError> for AnalysisError {
    fn from(inner: MatcherBuildError) -> Self {
        AnalysisError::Matcher(inner)
    }
}

/// One configured analysis run.
#[derive(Debug, Clone)]
pub struct Analyzer {
    thresholds: FilterThresholds,
    batch_size: usize,
}

impl Analyzer {
    pub fn new(thresholds: FilterThresholds, batch_size: usize) -> Self {
        Self {
            thresholds,
            batch_size,
        }
    }

    pub fn from_config(config: &KakariConfig) -> Self {
        Self::new(config.filter.thresholds(), config.occurrence.batch_size)
    }

    /// Analyze a corpus: documents, their tagged token streams (keyed by
    /// document id), and the curated seed keywords.
    pub fn analyze(
        &self,
        documents: &[Document],
        tokens_by_document: &BTreeMap<String, Vec<TaggedToken>>,
        curated: &[String],
    ) -> Result<AnalysisArtifacts, AnalysisError> {
        let mut candidates = CandidateSet::new();
        let mut complete_parses = 0usize;

        for document in documents {
            let Some(tagged) = tokens_by_document.get(&document.id) else {
                tracing::warn!(document = %document.id, "no token stream; phrase chunking skipped");
                continue;
            };
            let tokens: Vec<Token> = tagged.iter().map(classify).collect();
            let outcome = parse(chunk_tokens(&tokens));
            if outcome.complete {
                complete_parses += 1;
            } else {
                tracing::debug!(
                    document = %document.id,
                    roots = outcome.forest.len(),
                    "partial parse harvested"
                );
            }
            candidates.record_forest(&outcome);
        }
        tracing::info!(
            documents = documents.len(),
            complete_parses,
            phrases = candidates.phrase_count(),
            "phrase harvesting complete"
        );

        for document in documents {
            candidates.extract_patterns(&document.content);
        }
        for keyword in curated {
            candidates.add_literal(keyword.clone());
        }

        let surfaces = candidates.surfaces();
        tracing::info!(candidates = surfaces.len(), "candidate surfaces aggregated");

        let occurrences = map_occurrences(&surfaces, documents, self.batch_size)?;
        let keyword_to_documents =
            apply_filters(&occurrences, &candidates, documents.len(), &self.thresholds);

        Ok(AnalysisArtifacts::assemble(
            keyword_to_documents,
            documents,
            curated,
        ))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(
            FilterThresholds::default(),
            crate::keywords::occurrence::DEFAULT_BATCH_SIZE,
        )
    }
}
