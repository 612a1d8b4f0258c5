/*!
 * Loading and saving exercise files.
 *
 * The whole file is read once and written once. Saving truncates the
 * original in place; there is no temporary file or rename step.
 */

use log::{debug, info};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::DocumentError;
use crate::exercise::Document;
use crate::file_utils::FileManager;

/// An exercise file on disk
#[derive(Debug, Clone)]
pub struct ExerciseStore {
    path: PathBuf,
}

impl ExerciseStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file
    pub fn load(&self) -> Result<Document, DocumentError> {
        if !FileManager::file_exists(&self.path) {
            return Err(DocumentError::NotFound {
                path: self.path.clone(),
            });
        }

        let content = FileManager::read_to_string(&self.path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                DocumentError::NotFound {
                    path: self.path.clone(),
                }
            } else {
                DocumentError::Unreadable {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        let document = parse_document(&content).map_err(|source| {
            if source.is_data() {
                DocumentError::UnsupportedShape {
                    path: self.path.clone(),
                }
            } else {
                DocumentError::Malformed {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        info!("Loaded {} exercise(s) from {:?}", document.len(), self.path);
        Ok(document)
    }

    /// Serializes the document and overwrites the file with it
    pub fn save(&self, document: &Document) -> Result<(), DocumentError> {
        let content = render_document(document).map_err(|source| DocumentError::Unrenderable {
            path: self.path.clone(),
            source,
        })?;

        FileManager::write_to_file(&self.path, &content).map_err(|source| {
            DocumentError::Unwritable {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!("Wrote {} bytes to {:?}", content.len(), self.path);
        info!("Saved exercises to {:?}", self.path);
        Ok(())
    }
}

/// Parses exercise JSON into a [`Document`]
pub fn parse_document(content: &str) -> serde_json::Result<Document> {
    serde_json::from_str(content)
}

/// Pretty prints with two-space indentation, leaving non-ASCII text unescaped
pub fn render_document(document: &Document) -> serde_json::Result<String> {
    serde_json::to_string_pretty(document)
}
