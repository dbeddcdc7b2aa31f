//! Game output sinks.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::LogError;

/// An append-only sink for game summaries.
///
/// The game loop hands each completed round summary and the final summary to
/// this collaborator. A failed write is fatal and stops the game.
pub trait GameLog {
    /// Appends one round summary to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Write`] if the sink rejects the write.
    fn append_round(&mut self, summary: &str) -> Result<(), LogError>;

    /// Appends the final game summary to the sink.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Write`] if the sink rejects the write.
    fn append_final(&mut self, summary: &str) -> Result<(), LogError>;
}

/// A [`GameLog`] that writes summaries to a file.
///
/// The file is opened (and truncated) once at creation and closed on drop.
#[derive(Debug)]
pub struct FileLog {
    /// The open output file.
    file: File,
}

impl FileLog {
    /// Creates the output file, truncating any previous contents.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be created.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let file = File::create(path).map_err(LogError::Open)?;
        Ok(Self { file })
    }

    fn append(&mut self, text: &str) -> Result<(), LogError> {
        self.file
            .write_all(text.as_bytes())
            .map_err(LogError::Write)
    }
}

impl GameLog for FileLog {
    fn append_round(&mut self, summary: &str) -> Result<(), LogError> {
        self.append(summary)
    }

    fn append_final(&mut self, summary: &str) -> Result<(), LogError> {
        self.append(summary)
    }
}
