//! Result artifacts and their serialization.
//!
//! The sink contract fixes three shapes: the keyword → documents mapping,
//! the derived document → keywords index, and the subset of curated
//! keywords that survived filtering. Each artifact is written to its own
//! file in the output directory, as JSON or YAML.

use crate::corpus::Document;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Final outputs of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisArtifacts {
    pub keyword_to_documents: BTreeMap<String, Vec<String>>,
    pub document_to_keywords: BTreeMap<String, Vec<String>>,
    pub curated_keywords: Vec<String>,
}

impl AnalysisArtifacts {
    /// Derive the document index and the retained curated subset from the
    /// final keyword mapping.
    pub fn assemble(
        keyword_to_documents: BTreeMap<String, Vec<String>>,
        documents: &[Document],
        curated: &[String],
    ) -> Self {
        let mut document_to_keywords = BTreeMap::new();
        for document in documents {
            // Sorted by construction: keys iterate in order.
            let found: Vec<String> = keyword_to_documents
                .keys()
                .filter(|keyword| document.content.contains(keyword.as_str()))
                .cloned()
                .collect();
            if !found.is_empty() {
                document_to_keywords.insert(document.id.clone(), found);
            }
        }

        let mut curated_keywords: Vec<String> = curated
            .iter()
            .filter(|keyword| keyword_to_documents.contains_key(*keyword))
            .cloned()
            .collect();
        curated_keywords.sort();
        curated_keywords.dedup();

        Self {
            keyword_to_documents,
            document_to_keywords,
            curated_keywords,
        }
    }

    /// Write one file per artifact into `dir`, returning the paths written.
    pub fn write_to_dir(
        &self,
        dir: &Path,
        format: OutputFormat,
    ) -> Result<Vec<PathBuf>, ArtifactError> {
        fs::create_dir_all(dir).map_err(|error| ArtifactError::Io {
            path: dir.display().to_string(),
            message: error.to_string(),
        })?;
        Ok(vec![
            write_file(dir, "keyword_to_documents", format, &self.keyword_to_documents)?,
            write_file(dir, "document_to_keywords", format, &self.document_to_keywords)?,
            write_file(dir, "curated_keywords", format, &self.curated_keywords)?,
        ])
    }
}

/// Supported sink serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }

    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

/// Errors raised while emitting artifacts.
#[derive(Debug)]
pub enum ArtifactError {
    Io { path: String, message: String },
    Serialize(String),
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::Io { path, message } => {
                write!(f, "Artifact I/O error at {}: {}", path, message)
            }
            ArtifactError::Serialize(message) => {
                write!(f, "Artifact serialization error: {}", message)
            }
        }
    }
}

impl std::error::Error for ArtifactError {}

fn write_file<T: Serialize>(
    dir: &Path,
    stem: &str,
    format: OutputFormat,
    value: &T,
) -> Result<PathBuf, ArtifactError> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|error| ArtifactError::Serialize(error.to_string()))?,
        OutputFormat::Yaml => serde_yaml::to_string(value)
            .map_err(|error| ArtifactError::Serialize(error.to_string()))?,
    };
    let path = dir.join(format!("{}.{}", stem, format.extension()));
    fs::write(&path, rendered).map_err(|error| ArtifactError::Io {
        path: path.display().to_string(),
        message: error.to_string(),
    })?;
    Ok(path)
}
