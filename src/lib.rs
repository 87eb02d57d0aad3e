//! # kakari
//!
//! Keyword phrase extraction for tagged Japanese text corpora.
//!
//! The pipeline runs in dependency order: raw tagged tokens are classified
//! into lexical roles ([`tagging`]), merged into base chunks ([`chunking`]),
//! combined into nested phrases by a shift-reduce engine over an ordered
//! grammar ([`parsing`]), and harvested corpus-wide into keyword candidates
//! that are occurrence-mapped and filtered down to a final keyword set
//! ([`keywords`]). The [`pipeline`] module orchestrates a full run and emits
//! the result artifacts; [`corpus`] holds the collaborator seams (document
//! source, tokenizer, token cache, curated keywords).
//!
//! Parsing is heuristic by design: the engine over-generates phrase
//! candidates and relies on the filtering stages to prune, so a parse that
//! fails to reduce to a single phrase is an expected outcome, not an error.

pub mod chunking;
pub mod config;
pub mod corpus;
pub mod keywords;
pub mod parsing;
pub mod pipeline;
pub mod tagging;
pub mod testing;
