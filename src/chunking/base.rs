//! Base chunker: one linear pass merging same-role token runs.
//!
//! The scan applies a fixed, ordered rule list at the cursor; the first
//! applicable rule wins and the cursor advances past everything it consumed.
//! Rules:
//!
//! 1. Maximal run of nominal tokens (名詞/接頭詞) → one NP chunk.
//! 2. A verb followed by its auxiliary run → one VP chunk.
//! 3. A single adjective → ADJP; a single adverb/determiner → MOD.
//! 4. A single particle → particle chunk carrying its resolved subtype.
//! 5. Anything else → a single-token chunk labeled with its role.
//!
//! The output covers the input exactly once: concatenating all chunk
//! surfaces in order reproduces the concatenated token surfaces.

use crate::chunking::chunk::{Chunk, ChunkRole};
use crate::tagging::{LexicalRole, Token};

/// Chunk one document's classified token stream.
pub fn chunk_tokens(tokens: &[Token]) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        match &tokens[i].role {
            LexicalRole::Noun | LexicalRole::Prefix => {
                let mut j = i;
                while j < tokens.len() && tokens[j].role.is_nominal() {
                    j += 1;
                }
                chunks.push(Chunk::base(ChunkRole::NounPhrase, tokens[i..j].to_vec()));
                i = j;
            }
            LexicalRole::Verb => {
                let mut j = i + 1;
                while j < tokens.len() && tokens[j].role == LexicalRole::Auxiliary {
                    j += 1;
                }
                chunks.push(Chunk::base(ChunkRole::VerbPhrase, tokens[i..j].to_vec()));
                i = j;
            }
            LexicalRole::Adjective => {
                chunks.push(Chunk::base(
                    ChunkRole::AdjectivePhrase,
                    vec![tokens[i].clone()],
                ));
                i += 1;
            }
            LexicalRole::Modifier => {
                chunks.push(Chunk::base(ChunkRole::Modifier, vec![tokens[i].clone()]));
                i += 1;
            }
            LexicalRole::Particle(kind) => {
                chunks.push(Chunk::base(
                    ChunkRole::Particle(*kind),
                    vec![tokens[i].clone()],
                ));
                i += 1;
            }
            LexicalRole::Auxiliary => {
                // An auxiliary with no preceding verb stands alone.
                chunks.push(Chunk::base(
                    ChunkRole::Other("AUX".to_string()),
                    vec![tokens[i].clone()],
                ));
                i += 1;
            }
            LexicalRole::Other(raw) => {
                chunks.push(Chunk::base(
                    ChunkRole::Other(raw.clone()),
                    vec![tokens[i].clone()],
                ));
                i += 1;
            }
        }
    }
    chunks
}
