//! Reference-list loading for the transcript scoring pipeline.
//!
//! A reference list is a tabular text file consumed one row at a time, in
//! file order; each row contributes its first comma-separated field. Order
//! is load-bearing: the matcher walks the list front to back and mutates the
//! transcript as it goes, so a reordered list produces different counts.
//! Entries are kept raw here; normalization happens at match time.
//!
//! Lists are loaded once per process and shared read-only afterwards, so
//! concurrent scoring of independent transcripts needs no locking.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read reference list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An ordered list of raw reference words, one per source row.
#[derive(Debug, Clone)]
pub struct WordList {
    entries: Vec<String>,
}

impl WordList {
    /// Read a reference list from a tabular text file.
    ///
    /// Rows are taken in file order; only the first comma-separated field of
    /// each row is kept. A UTF-8 byte-order mark on the first line and
    /// trailing carriage returns are stripped, and fully blank lines are
    /// skipped. Any read or decode failure aborts the whole load; no partial
    /// list is ever returned.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexiconError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LexiconError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let row = if lineno == 0 {
                line.trim_start_matches('\u{feff}')
            } else {
                line.as_str()
            };
            let row = row.trim_end_matches('\r');
            if row.trim().is_empty() {
                continue;
            }
            let field = row.split(',').next().unwrap_or_default().trim();
            entries.push(field.to_string());
        }

        info!("loaded {} entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// Build a list from already-loaded entries, preserving their order.
    pub fn from_entries(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The two reference lists the scoring pipeline consumes.
#[derive(Debug, Clone)]
pub struct Lexicon {
    pub size_adjectives: WordList,
    pub animals: WordList,
}

impl Lexicon {
    /// Load both reference lists. Either failing aborts the whole load.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        size_path: P,
        animal_path: Q,
    ) -> Result<Self, LexiconError> {
        let size_adjectives = WordList::load(size_path)?;
        let animals = WordList::load(animal_path)?;
        Ok(Self {
            size_adjectives,
            animals,
        })
    }
}
