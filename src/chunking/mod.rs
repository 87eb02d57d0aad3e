//! Base chunking: classified tokens → maximal same-role chunks.

pub mod base;
pub mod chunk;

pub use base::chunk_tokens;
pub use chunk::{Chunk, ChunkRole};
