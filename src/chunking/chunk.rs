//! Chunk tree types shared by the base chunker and the phrase engine.
//!
//! A chunk is a contiguous span of tokens merged into one labeled unit. Base
//! chunks own their tokens; merged chunks own their constituent chunks by
//! value, so each document's tree is a plain owned structure discarded after
//! harvesting. The surface of any chunk is the ordered concatenation of its
//! constituents' surfaces — the constructors are the only way to build a
//! chunk, which keeps that invariant true at every merge step.

use crate::tagging::{LexicalRole, ParticleKind, Token};
use std::fmt;

/// Role of one chunk. Open on the `Other` side: tokens the grammar has no
/// use for keep a label derived from their lexical role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkRole {
    NounPhrase,
    VerbPhrase,
    AdjectivePhrase,
    Modifier,
    Clause,
    Particle(ParticleKind),
    Other(String),
}

impl ChunkRole {
    /// Wire label used in role sets and rendered output.
    pub fn label(&self) -> &str {
        match self {
            ChunkRole::NounPhrase => "NP",
            ChunkRole::VerbPhrase => "VP",
            ChunkRole::AdjectivePhrase => "ADJP",
            ChunkRole::Modifier => "MOD",
            ChunkRole::Clause => "Clause",
            ChunkRole::Particle(kind) => match kind {
                ParticleKind::Attributive => "P_attr",
                ParticleKind::Object => "P_obj",
                ParticleKind::Subject => "P_subj",
                ParticleKind::Connective => "P_conn",
                ParticleKind::Coordinating => "P_para",
                ParticleKind::Causal => "P_reason",
                ParticleKind::Plain => "P",
            },
            ChunkRole::Other(raw) => raw,
        }
    }

    /// Roles harvested as keyword candidates.
    pub fn is_phrase(&self) -> bool {
        matches!(
            self,
            ChunkRole::NounPhrase | ChunkRole::VerbPhrase | ChunkRole::AdjectivePhrase
        )
    }
}

impl fmt::Display for ChunkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A labeled span of tokens, possibly built from smaller chunks.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub surface: String,
    pub role: ChunkRole,
    /// Source tokens; populated for base chunks, empty for merged chunks.
    pub tokens: Vec<Token>,
    /// Constituents in original order; empty for base chunks.
    pub children: Vec<Chunk>,
}

impl Chunk {
    /// Build a base chunk from a run of tokens.
    pub fn base(role: ChunkRole, tokens: Vec<Token>) -> Self {
        let surface = tokens.iter().map(|t| t.surface.as_str()).collect();
        Self {
            surface,
            role,
            tokens,
            children: Vec::new(),
        }
    }

    /// Build a merged chunk from constituent chunks.
    pub fn merged(role: ChunkRole, children: Vec<Chunk>) -> Self {
        let surface = children.iter().map(|c| c.surface.as_str()).collect();
        Self {
            surface,
            role,
            tokens: Vec::new(),
            children,
        }
    }

    /// Surface length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.surface.chars().count()
    }

    /// Visit this chunk and every descendant, depth first.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Chunk)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Last source token of the span.
    pub fn last_token(&self) -> Option<&Token> {
        if let Some(child) = self.children.last() {
            return child.last_token();
        }
        self.tokens.last()
    }

    /// Rightmost token classified as a verb — the head of a Japanese
    /// predicate, which sits at the end of its span.
    pub fn head_verb(&self) -> Option<&Token> {
        for child in self.children.iter().rev() {
            if let Some(found) = child.head_verb() {
                return Some(found);
            }
        }
        self.tokens
            .iter()
            .rev()
            .find(|t| matches!(t.role, LexicalRole::Verb))
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.role, self.surface)
    }
}
