//! File selection: validating candidates and holding the chosen document.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::workflow::error::SelectError;

/// The locally held reference to the user's selected plain-text file.
///
/// Holds the path, not the contents; bytes are read back lazily at
/// submission time so a multi-megabyte document costs nothing while the
/// user is still adjusting parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    name: String,
    size_bytes: u64,
    path: PathBuf,
}

impl Document {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document's raw bytes from disk.
    pub fn read_bytes(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }
}

/// Validates and holds the currently selected document.
///
/// Every input channel (CLI argument, typed path) funnels through
/// [`select`](Self::select); validation is never duplicated per channel.
/// On rejection the previously held document is left untouched.
#[derive(Debug, Default)]
pub struct FileSelection {
    current: Option<Document>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Document> {
        self.current.as_ref()
    }

    /// Validate `path` and, on acceptance, replace the held document
    /// wholesale.
    ///
    /// A candidate is accepted only when its detected content type is
    /// exactly `text/plain` and it is a readable regular file.
    pub fn select(&mut self, path: &Path) -> Result<&Document, SelectError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let detected = mime_guess::from_path(path).first();
        if detected != Some(mime_guess::mime::TEXT_PLAIN) {
            tracing::debug!(file = %name, ?detected, "selection rejected: not text/plain");
            return Err(SelectError::UnsupportedType { name });
        }

        let metadata = fs::metadata(path).map_err(|source| SelectError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        if !metadata.is_file() {
            return Err(SelectError::Unreadable {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            });
        }

        tracing::info!(file = %name, size = metadata.len(), "document selected");
        self.current = Some(Document {
            name,
            size_bytes: metadata.len(),
            path: path.to_path_buf(),
        });
        Ok(self.current.as_ref().expect("document just stored"))
    }
}
