//! Shift-reduce phrase combination engine.
//!
//! State is an output stack and an input queue of base chunks. The loop
//! reduces greedily: while any rule's right-hand side matches the stack tail
//! (rules tried in declaration order), the matched chunks are popped and
//! replaced by one merged chunk. When no rule matches, one chunk is shifted
//! from the queue and reduction resumes. When the queue is empty and the
//! stack still holds more than one chunk with no applicable rule, parsing
//! stops in a failure state and the partial forest is returned as-is — an
//! expected outcome for ambiguous or ungrammatical input, not an error.
//!
//! Termination: every shift shrinks the queue and every reduction shrinks
//! the stack, so the loop is bounded by O(n²) steps for n base chunks.

use crate::chunking::chunk::Chunk;
use crate::parsing::grammar::{Rule, RULES};
use std::collections::VecDeque;

/// Result of parsing one document's base chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    /// Top-level chunks left on the stack, in order. A single element is a
    /// maximal parse; more than one is the partial forest of a failed parse.
    pub forest: Vec<Chunk>,
    /// Whether the input reduced to at most one top-level chunk.
    pub complete: bool,
}

impl ParseOutcome {
    /// Visit every chunk in the forest, including all descendants.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Chunk)) {
        for root in &self.forest {
            root.walk(visit);
        }
    }
}

/// Parse a sequence of base chunks into a phrase forest.
pub fn parse(base_chunks: Vec<Chunk>) -> ParseOutcome {
    let mut stack: Vec<Chunk> = Vec::new();
    let mut queue: VecDeque<Chunk> = base_chunks.into();

    while !queue.is_empty() || stack.len() > 1 {
        let mut reduced_in_pass = false;
        while let Some((rule, len)) = match_stack_tail(&stack) {
            let constituents = stack.split_off(stack.len() - len);
            let merged = Chunk::merged(rule.produces.role(), constituents);
            tracing::trace!(rule = rule.name, surface = %merged.surface, "reduce");
            stack.push(merged);
            reduced_in_pass = true;
        }

        if let Some(chunk) = queue.pop_front() {
            stack.push(chunk);
        } else if !reduced_in_pass && stack.len() > 1 {
            tracing::debug!(
                remaining = stack.len(),
                "input exhausted before reducing to a single phrase"
            );
            return ParseOutcome {
                forest: stack,
                complete: false,
            };
        }
    }

    ParseOutcome {
        complete: stack.len() <= 1,
        forest: stack,
    }
}

/// Find the first rule whose right-hand side matches the stack tail.
fn match_stack_tail(stack: &[Chunk]) -> Option<(&'static Rule, usize)> {
    for rule in RULES {
        let len = rule.pattern.len();
        if stack.len() < len {
            continue;
        }
        let tail = &stack[stack.len() - len..];
        let roles_match = rule
            .pattern
            .iter()
            .zip(tail)
            .all(|(sym, chunk)| sym.matches(&chunk.role));
        if !roles_match {
            continue;
        }
        if let Some(guard) = rule.guard {
            if !guard(tail) {
                continue;
            }
        }
        return Some((rule, len));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::chunk::ChunkRole;
    use crate::chunking::chunk_tokens;
    use crate::testing::{classify_all, noun, particle, verb};

    #[test]
    fn empty_input_yields_an_empty_complete_forest() {
        let outcome = parse(Vec::new());
        assert!(outcome.complete);
        assert!(outcome.forest.is_empty());
    }

    #[test]
    fn attributive_join_reduces_to_one_noun_phrase() {
        let tokens = classify_all(&[
            noun("東京"),
            noun("タワー"),
            particle("の", "連体化"),
            noun("歴史"),
        ]);
        let outcome = parse(chunk_tokens(&tokens));
        assert!(outcome.complete);
        assert_eq!(outcome.forest.len(), 1);
        assert_eq!(outcome.forest[0].role, ChunkRole::NounPhrase);
        assert_eq!(outcome.forest[0].surface, "東京タワーの歴史");
        assert_eq!(outcome.forest[0].children.len(), 3);
    }

    #[test]
    fn irreducible_stack_returns_the_partial_forest() {
        // NP P_obj NP matches no rule: the object marker needs a following VP.
        let tokens = classify_all(&[noun("本"), particle("を", "格助詞"), noun("机")]);
        let outcome = parse(chunk_tokens(&tokens));
        assert!(!outcome.complete);
        assert_eq!(outcome.forest.len(), 3);
    }

    #[test]
    fn walk_visits_merged_chunks_and_their_constituents() {
        let tokens = classify_all(&[noun("本"), particle("を", "格助詞"), verb("読む", "基本形")]);
        let outcome = parse(chunk_tokens(&tokens));
        assert!(outcome.complete);
        let mut surfaces = Vec::new();
        outcome.walk(&mut |chunk| surfaces.push(chunk.surface.clone()));
        assert_eq!(surfaces, vec!["本を読む", "本", "を", "読む"]);
    }
}
