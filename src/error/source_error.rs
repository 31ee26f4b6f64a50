use std::{io, path::PathBuf};

use crate::interpreter::source::Position;

/// Represents all errors raised by character sources.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The given path does not point to an existing file.
    #[error("'{}' is not a valid path.", .path.display())]
    InvalidPath {
        /// The rejected path.
        path: PathBuf,
    },
    /// The file exists but could not be read.
    #[error("Failed to read '{}': {source}", .path.display())]
    ReadFile {
        /// The file being read.
        path:   PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The listening socket could not be bound.
    #[error("Failed to listen on port {port}: {source}")]
    Bind {
        /// The requested port.
        port:   u16,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// No connection could be accepted on the listening socket.
    #[error("Failed to accept a connection: {source}")]
    Accept {
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// Reading the next character failed.
    #[error("Error at {position}: Failed to read the next character: {source}")]
    Read {
        /// Position of the character that could not be read.
        position: Position,
        /// The underlying I/O failure.
        source:   io::Error,
    },
}
