//! Document corpus collaborators.
//!
//! Everything in this module sits at the seams of the core pipeline:
//! loading documents, producing tagged tokens, caching tokenizer output,
//! and reading the curated keyword list. Each collaborator is passed in
//! explicitly; the core never touches ambient state.

pub mod cache;
pub mod curated;
pub mod tokenizer;

use ignore::WalkBuilder;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// One document in the corpus. Immutable for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Errors raised while loading documents.
#[derive(Debug, Clone)]
pub enum CorpusError {
    Io { path: String, message: String },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Io { path, message } => {
                write!(f, "Corpus I/O error at {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for CorpusError {}

/// Source of documents for one analysis run.
pub trait DocumentSource {
    fn load(&self) -> Result<Vec<Document>, CorpusError>;
}

/// A loaded document together with its file modification time, which keys
/// the token cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFile {
    pub document: Document,
    pub modified_secs: u64,
}

/// Loads documents from a directory tree, filtered by file extension.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    extension: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Matching file paths under the root, sorted for determinism.
    fn paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = WalkBuilder::new(&self.root)
            .build()
            .filter_map(Result::ok)
            .map(|entry| entry.into_path())
            .filter(|path| path.is_file())
            .filter(|path| {
                path.extension()
                    .map_or(false, |ext| ext == self.extension.as_str())
            })
            .collect();
        paths.sort();
        paths
    }

    /// Load documents together with their modification times.
    pub fn load_files(&self) -> Result<Vec<CorpusFile>, CorpusError> {
        let mut files = Vec::new();
        for path in self.paths() {
            let raw = fs::read_to_string(&path).map_err(|error| CorpusError::Io {
                path: path.display().to_string(),
                message: error.to_string(),
            })?;
            let Some(document) = document_from_source(&path, &raw) else {
                continue;
            };
            let modified_secs = fs::metadata(&path)
                .ok()
                .and_then(|meta| meta.modified().ok())
                .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
                .map_or(0, |duration| duration.as_secs());
            files.push(CorpusFile {
                document,
                modified_secs,
            });
        }
        Ok(files)
    }
}

impl DocumentSource for DirectorySource {
    fn load(&self) -> Result<Vec<Document>, CorpusError> {
        Ok(self
            .load_files()?
            .into_iter()
            .map(|file| file.document)
            .collect())
    }
}

/// Derive a document from file contents. The first line carries the title
/// (everything before " - "); the remaining lines are the content. Empty
/// files yield no document.
fn document_from_source(path: &Path, raw: &str) -> Option<Document> {
    let mut lines = raw.lines();
    let first = lines.next()?;
    let title = first.trim().split(" - ").next().unwrap_or(first).to_string();
    let content = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    let id = path.file_name()?.to_string_lossy().into_owned();
    Some(Document { id, title, content })
}
