//! Corpus-wide keyword candidate aggregation.
//!
//! Candidates come from four sources: phrase chunks harvested from every
//! parse forest (with the set of roles each surface was observed under),
//! the curated keyword list, katakana-script runs, and alphanumeric tokens.
//! The pattern and curated sources carry no role information; the role sets
//! only feed the short-noun cleanup stage later in the pipeline.
//!
//! All containers are ordered so aggregation is idempotent and output is
//! deterministic across runs.

use crate::chunking::chunk::Chunk;
use crate::parsing::engine::ParseOutcome;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};

/// Katakana runs of three or more characters (loanword candidates).
static KATAKANA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{30A0}-\x{30FF}]{3,}").unwrap());

/// Alphanumeric tokens of three or more characters, optionally space-joined
/// with further alphanumeric tokens.
static ALPHANUMERIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9]{3,}(?: [a-zA-Z0-9]+)*").unwrap());

/// Minimum surface length, in characters, for a phrase chunk to qualify.
const MIN_PHRASE_CHARS: usize = 2;

/// The corpus-wide candidate pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    phrase_roles: BTreeMap<String, BTreeSet<String>>,
    literals: BTreeSet<String>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record every phrase chunk in a parse forest, including all merged
    /// intermediates and the base chunks beneath them.
    pub fn record_forest(&mut self, outcome: &ParseOutcome) {
        outcome.walk(&mut |chunk| self.record_chunk(chunk));
    }

    /// Record a single chunk if it qualifies as a phrase candidate.
    pub fn record_chunk(&mut self, chunk: &Chunk) {
        if chunk.role.is_phrase() && chunk.char_len() >= MIN_PHRASE_CHARS {
            self.phrase_roles
                .entry(chunk.surface.clone())
                .or_default()
                .insert(chunk.role.label().to_string());
        }
    }

    /// Add a literal candidate with no observed grammatical role.
    pub fn add_literal(&mut self, surface: impl Into<String>) {
        let surface = surface.into();
        if !surface.is_empty() {
            self.literals.insert(surface);
        }
    }

    /// Extract loanword and alphanumeric candidates from raw content.
    pub fn extract_patterns(&mut self, content: &str) {
        for found in KATAKANA_PATTERN.find_iter(content) {
            self.literals.insert(found.as_str().to_string());
        }
        for found in ALPHANUMERIC_PATTERN.find_iter(content) {
            self.literals.insert(found.as_str().to_string());
        }
    }

    /// Union of all candidate surfaces, engine-derived and literal.
    pub fn surfaces(&self) -> BTreeSet<String> {
        self.phrase_roles
            .keys()
            .chain(self.literals.iter())
            .cloned()
            .collect()
    }

    /// Role labels a surface was observed under, if it came from the engine.
    pub fn roles_of(&self, surface: &str) -> Option<&BTreeSet<String>> {
        self.phrase_roles.get(surface)
    }

    /// Number of distinct engine-derived phrase surfaces.
    pub fn phrase_count(&self) -> usize {
        self.phrase_roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrase_roles.is_empty() && self.literals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::chunk::ChunkRole;
    use crate::chunking::chunk_tokens;
    use crate::parsing::parse;
    use crate::testing::{classify_all, noun, particle, verb};

    #[test]
    fn forest_harvest_records_intermediate_phrases_with_roles() {
        let tokens = classify_all(&[
            noun("東京"),
            noun("タワー"),
            particle("の", "連体化"),
            noun("歴史"),
        ]);
        let outcome = parse(chunk_tokens(&tokens));
        let mut candidates = CandidateSet::new();
        candidates.record_forest(&outcome);

        let surfaces = candidates.surfaces();
        assert!(surfaces.contains("東京タワーの歴史"));
        assert!(surfaces.contains("東京タワー"));
        assert!(surfaces.contains("歴史"));
        assert_eq!(
            candidates.roles_of("東京タワー").map(|r| r.len()),
            Some(1)
        );
        assert!(candidates.roles_of("東京タワー").unwrap().contains("NP"));
    }

    #[test]
    fn single_character_phrases_and_particles_are_skipped() {
        let tokens = classify_all(&[noun("本"), particle("を", "格助詞"), verb("読む", "基本形")]);
        let outcome = parse(chunk_tokens(&tokens));
        let mut candidates = CandidateSet::new();
        candidates.record_forest(&outcome);

        let surfaces = candidates.surfaces();
        assert!(surfaces.contains("本を読む"));
        assert!(surfaces.contains("読む"));
        assert!(!surfaces.contains("本"), "one-char surface must not qualify");
        assert!(!surfaces.contains("を"), "particles are not phrases");
    }

    #[test]
    fn a_surface_accumulates_every_role_it_appears_under() {
        let mut candidates = CandidateSet::new();
        let as_np = Chunk::base(
            ChunkRole::NounPhrase,
            classify_all(&[noun("読"), noun("み")]),
        );
        let as_vp = Chunk::base(ChunkRole::VerbPhrase, classify_all(&[verb("読み", "連用形")]));
        candidates.record_chunk(&as_np);
        candidates.record_chunk(&as_vp);

        let roles = candidates.roles_of("読み").unwrap();
        assert!(roles.contains("NP") && roles.contains("VP"));
    }

    #[test]
    fn katakana_pattern_requires_three_characters() {
        let mut candidates = CandidateSet::new();
        candidates.extract_patterns("タワーとカフェオレ、アベでなくて。");
        let surfaces = candidates.surfaces();
        assert!(surfaces.contains("タワー"));
        assert!(surfaces.contains("カフェオレ"));
        assert!(!surfaces.contains("アベ"));
    }

    #[test]
    fn alphanumeric_pattern_joins_space_separated_tokens() {
        let mut candidates = CandidateSet::new();
        candidates.extract_patterns("Tokyo Tower 2023、ab cd");
        let surfaces = candidates.surfaces();
        assert!(surfaces.contains("Tokyo Tower 2023"));
        assert!(!surfaces.contains("ab cd"), "tokens under three chars don't start a match");
    }

    #[test]
    fn empty_literals_are_rejected() {
        let mut candidates = CandidateSet::new();
        candidates.add_literal("");
        assert!(candidates.is_empty());
    }
}
