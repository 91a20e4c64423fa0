//! Read-only puzzle input store
//!
//! Inputs live under `{input_dir}/{year}/`:
//! - `dayDD.txt` for the real puzzle input
//! - `dayDD_example.txt` for the example from the puzzle text
//!
//! Files are only ever read; a missing file is reported, never created.

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::error::InputError;

/// Which input file to read for a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Puzzle,
    Example,
}

/// Locates and reads input files
#[derive(Debug, Clone)]
pub struct InputStore {
    base_dir: PathBuf,
    kind: InputKind,
}

impl InputStore {
    pub fn new(base_dir: PathBuf, kind: InputKind) -> Self {
        Self { base_dir, kind }
    }

    /// Path of the input file for a year/day
    pub fn path(&self, year: u16, day: u8) -> PathBuf {
        let file = match self.kind {
            InputKind::Puzzle => format!("day{:02}.txt", day),
            InputKind::Example => format!("day{:02}_example.txt", day),
        };
        self.base_dir.join(year.to_string()).join(file)
    }

    /// Read the input for a year/day
    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.path(year, day);
        debug!(path = %path.display(), "reading input");
        std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::NotFound { path },
            _ => InputError::Io { path, source },
        })
    }
}
