//! Keyword filtering pipeline.
//!
//! Three ordered stages, each shrinking the keyword set handed to the next:
//!
//! 1. Frequency bounds — drop keywords occurring in too few documents
//!    (hapax noise) or in too large a share of the corpus (stop-phrases).
//! 2. Substring dominance — longest first, remove any surviving keyword
//!    that is a contiguous substring of a longer survivor with a
//!    statistically indistinguishable document count.
//! 3. Short-noun cleanup — drop very short survivors that were only ever
//!    observed as bare noun phrases.
//!
//! Stage 2 runs before stage 3 on the stage-1 survivors only; the frequency
//! pass shrinks the set enough to make the O(n × L²) substring enumeration
//! affordable. Stage 2's processing order decides removal conflicts, so the
//! ordering is fully deterministic: character length descending, then
//! lexicographic.

use crate::keywords::candidates::CandidateSet;
use crate::keywords::occurrence::OccurrenceMap;
use std::collections::{BTreeMap, BTreeSet};

/// Thresholds for the three filter stages.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterThresholds {
    /// Strict lower bound on document count: keep only `count > min_documents`.
    pub min_documents: usize,
    /// Keep only `count / total < max_document_ratio`.
    pub max_document_ratio: f64,
    /// Document-count window, as a share of the corpus, within which a
    /// substring counts as dominated by its superstring.
    pub dominance_window: f64,
    /// Surfaces of at most this many characters are subject to cleanup.
    pub short_phrase_chars: usize,
}

impl Default for FilterThresholds {
    fn default() -> Self {
        Self {
            min_documents: 2,
            max_document_ratio: 0.8,
            dominance_window: 0.05,
            short_phrase_chars: 2,
        }
    }
}

/// Run all three stages and return the final keyword → documents mapping.
pub fn apply_filters(
    occurrences: &OccurrenceMap,
    candidates: &CandidateSet,
    total_documents: usize,
    thresholds: &FilterThresholds,
) -> BTreeMap<String, Vec<String>> {
    let frequent = frequency_filter(occurrences, total_documents, thresholds);
    tracing::info!(keywords = frequent.len(), "frequency filter applied");

    let surviving = dominance_filter(&frequent, total_documents, thresholds);
    tracing::info!(keywords = surviving.len(), "substring-dominance filter applied");

    let kept = short_noun_cleanup(surviving, candidates, thresholds);
    tracing::info!(keywords = kept.len(), "short-noun cleanup applied");

    frequent
        .into_iter()
        .filter(|(keyword, _)| kept.contains(keyword))
        .collect()
}

/// Stage 1: frequency bounds.
pub fn frequency_filter(
    occurrences: &OccurrenceMap,
    total_documents: usize,
    thresholds: &FilterThresholds,
) -> BTreeMap<String, Vec<String>> {
    if total_documents == 0 {
        return BTreeMap::new();
    }
    occurrences
        .iter()
        .filter(|(_, documents)| {
            let count = documents.len();
            count > thresholds.min_documents
                && (count as f64 / total_documents as f64) < thresholds.max_document_ratio
        })
        .map(|(keyword, documents)| (keyword.clone(), documents.clone()))
        .collect()
}

/// Stage 2: substring dominance. Returns the surviving keywords.
pub fn dominance_filter(
    frequent: &BTreeMap<String, Vec<String>>,
    total_documents: usize,
    thresholds: &FilterThresholds,
) -> BTreeSet<String> {
    let window = total_documents as f64 * thresholds.dominance_window;
    let mut removed: BTreeSet<String> = BTreeSet::new();

    let mut longest_first: Vec<&String> = frequent.keys().collect();
    longest_first.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    for longer in longest_first {
        if removed.contains(longer.as_str()) {
            continue;
        }
        let longer_count = frequent[longer].len();
        for shorter in proper_substrings(longer) {
            if removed.contains(&shorter) {
                continue;
            }
            let Some(shorter_documents) = frequent.get(&shorter) else {
                continue;
            };
            if shorter_documents.is_empty() {
                continue;
            }
            let difference = (longer_count as f64 - shorter_documents.len() as f64).abs();
            if difference <= window {
                removed.insert(shorter);
            }
        }
    }

    frequent
        .keys()
        .filter(|keyword| !removed.contains(keyword.as_str()))
        .cloned()
        .collect()
}

/// Every unique contiguous substring of `surface`, excluding the full
/// surface and the empty string. Substrings are cut on char boundaries.
fn proper_substrings(surface: &str) -> BTreeSet<String> {
    let mut boundaries: Vec<usize> = surface.char_indices().map(|(offset, _)| offset).collect();
    boundaries.push(surface.len());

    let mut out = BTreeSet::new();
    for (index, &start) in boundaries.iter().enumerate() {
        for &end in &boundaries[index + 1..] {
            let sub = &surface[start..end];
            if sub.len() < surface.len() {
                out.insert(sub.to_string());
            }
        }
    }
    out
}

/// Stage 3: drop short survivors only ever observed as bare noun phrases.
/// Candidates with no role information (curated or pattern-sourced) are
/// never dropped here.
pub fn short_noun_cleanup(
    surviving: BTreeSet<String>,
    candidates: &CandidateSet,
    thresholds: &FilterThresholds,
) -> BTreeSet<String> {
    let mut kept = BTreeSet::new();
    let mut dropped = 0usize;
    for keyword in surviving {
        let noun_only = keyword.chars().count() <= thresholds.short_phrase_chars
            && candidates
                .roles_of(&keyword)
                .is_some_and(|roles| roles.iter().all(|role| role == "NP"));
        if noun_only {
            dropped += 1;
        } else {
            kept.insert(keyword);
        }
    }
    tracing::debug!(dropped, "short noun-only keywords removed");
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::occurrence::map_occurrences;
    use crate::testing::document;
    use crate::corpus::Document;

    fn corpus_where(keyword: &str, occurring: usize, total: usize) -> Vec<Document> {
        (0..total)
            .map(|i| {
                let content = if i < occurring {
                    format!("{} を含む文書 {}", keyword, i)
                } else {
                    format!("無関係な文書 {}", i)
                };
                document(&format!("doc{:02}.md", i), &content)
            })
            .collect()
    }

    fn occurrences_for(keyword: &str, occurring: usize, total: usize) -> OccurrenceMap {
        let docs = corpus_where(keyword, occurring, total);
        let candidates = [keyword.to_string()].into_iter().collect();
        map_occurrences(&candidates, &docs, 500).unwrap()
    }

    #[test]
    fn two_documents_is_not_enough() {
        let map = occurrences_for("外苑前", 2, 10);
        assert!(frequency_filter(&map, 10, &FilterThresholds::default()).is_empty());
    }

    #[test]
    fn three_documents_passes_the_lower_bound() {
        let map = occurrences_for("外苑前", 3, 10);
        let frequent = frequency_filter(&map, 10, &FilterThresholds::default());
        assert_eq!(frequent["外苑前"].len(), 3);
    }

    #[test]
    fn near_universal_keywords_are_dropped() {
        let at_bound = occurrences_for("東京", 8, 10);
        assert!(frequency_filter(&at_bound, 10, &FilterThresholds::default()).is_empty());

        let below_bound = occurrences_for("東京", 7, 10);
        assert_eq!(
            frequency_filter(&below_bound, 10, &FilterThresholds::default()).len(),
            1
        );
    }

    fn frequent_with_counts(entries: &[(&str, usize)]) -> BTreeMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(keyword, count)| {
                let documents = (0..*count).map(|i| format!("doc{:02}.md", i)).collect();
                (keyword.to_string(), documents)
            })
            .collect()
    }

    #[test]
    fn dominated_substring_is_removed_and_superstring_survives() {
        // Counts differ by 1 with a window of 0.05 × 50 = 2.5.
        let frequent = frequent_with_counts(&[("ABC", 10), ("AB", 11)]);
        let surviving = dominance_filter(&frequent, 50, &FilterThresholds::default());
        assert!(surviving.contains("ABC"));
        assert!(!surviving.contains("AB"));
    }

    #[test]
    fn distinguishable_substring_survives() {
        let frequent = frequent_with_counts(&[("ABC", 10), ("AB", 20)]);
        let surviving = dominance_filter(&frequent, 50, &FilterThresholds::default());
        assert!(surviving.contains("ABC"));
        assert!(surviving.contains("AB"));
    }

    #[test]
    fn removed_keywords_are_skipped_in_later_passes() {
        // ABCD dominates ABC; once ABC is removed it can no longer remove AB,
        // and AB's count keeps it clear of ABCD itself.
        let frequent = frequent_with_counts(&[("ABCD", 10), ("ABC", 11), ("AB", 13)]);
        let surviving = dominance_filter(&frequent, 50, &FilterThresholds::default());
        assert!(surviving.contains("ABCD"));
        assert!(!surviving.contains("ABC"));
        assert!(surviving.contains("AB"));
    }

    #[test]
    fn substrings_are_cut_on_char_boundaries() {
        let subs = proper_substrings("東京タワー");
        assert!(subs.contains("東京"));
        assert!(subs.contains("タワー"));
        assert!(subs.contains("京タワ"));
        assert!(!subs.contains("東京タワー"));
        assert!(!subs.contains(""));
    }

    #[test]
    fn noun_only_bigram_is_cleaned_up_but_verb_bigram_survives() {
        use crate::chunking::chunk::{Chunk, ChunkRole};
        use crate::testing::{classify_all, noun, verb};

        let mut candidates = CandidateSet::new();
        candidates.record_chunk(&Chunk::base(
            ChunkRole::NounPhrase,
            classify_all(&[noun("駅"), noun("前")]),
        ));
        candidates.record_chunk(&Chunk::base(
            ChunkRole::VerbPhrase,
            classify_all(&[verb("読む", "基本形")]),
        ));

        let surviving: BTreeSet<String> = ["駅前".to_string(), "読む".to_string()]
            .into_iter()
            .collect();
        let kept = short_noun_cleanup(surviving, &candidates, &FilterThresholds::default());
        assert!(!kept.contains("駅前"));
        assert!(kept.contains("読む"));
    }

    #[test]
    fn roleless_short_candidates_are_kept() {
        let candidates = CandidateSet::new();
        let surviving: BTreeSet<String> = ["営業".to_string()].into_iter().collect();
        let kept = short_noun_cleanup(surviving, &candidates, &FilterThresholds::default());
        assert!(kept.contains("営業"));
    }
}
