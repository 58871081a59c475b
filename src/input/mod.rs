//! Resolving the reading material: a file on disk or literal text.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("file is not valid UTF-8: {}", .0.display())]
    InvalidEncoding(PathBuf),
}

/// Where the text comes from. An argument naming an existing file is a
/// file reference; anything else is the text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Literal(String),
}

impl InputSource {
    pub fn resolve(arg: &str) -> Self {
        let path = Path::new(arg);
        if path.is_file() {
            InputSource::File(path.to_path_buf())
        } else {
            InputSource::Literal(arg.to_string())
        }
    }

    /// Produces the raw text. Decode failures surface here so the engine
    /// can assume valid text on entry.
    pub fn load(&self) -> Result<String, LoadError> {
        match self {
            InputSource::Literal(text) => Ok(text.clone()),
            InputSource::File(path) => {
                let bytes = fs::read(path).map_err(|source| LoadError::Io {
                    path: path.clone(),
                    source,
                })?;
                let content = String::from_utf8(bytes)
                    .map_err(|_| LoadError::InvalidEncoding(path.clone()))?;
                if content.trim().is_empty() {
                    return Err(LoadError::EmptyFile(path.clone()));
                }
                Ok(content)
            }
        }
    }
}
