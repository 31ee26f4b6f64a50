use std::{fs, path::Path};

use tracing::debug;

use crate::{
    error::SourceError,
    interpreter::source::{Source, SourceChar, StringSource},
};

/// A source reading the contents of a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    inner: StringSource,
}

impl FileSource {
    /// Opens the file at `path`.
    ///
    /// # Errors
    /// Returns [`SourceError::InvalidPath`] if nothing exists at `path`, and
    /// [`SourceError::ReadFile`] if the file cannot be read as UTF-8 text.
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        if !path.exists() {
            return Err(SourceError::InvalidPath { path: path.to_path_buf() });
        }

        let text = fs::read_to_string(path).map_err(|source| SourceError::ReadFile { path: path.to_path_buf(),
                                                                                      source })?;
        debug!(target: "matlang::source", path = %path.display(), length = text.len(), "Opened file source");

        Ok(Self { inner: StringSource::new(&text) })
    }
}

impl Source for FileSource {
    fn current(&self) -> SourceChar {
        self.inner.current()
    }

    fn advance(&mut self) -> Result<SourceChar, SourceError> {
        self.inner.advance()
    }

    fn close(&mut self) {
        self.inner.close();
    }
}
