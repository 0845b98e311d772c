//! Candidate archive files in the offline tiles directory.
//!
//! A candidate is a regular file whose name carries a non-empty extension
//! (text after the final `.`). Subdirectories are skipped, never recursed
//! into. Entries are returned sorted lexicographically by file name so that
//! "first match" does not depend on native filesystem listing order.

use std::path::{Path, PathBuf};

use serde::Serialize;

use super::registry::ArchiveFormatRegistry;

/// Extract the archive extension from a file name.
///
/// Returns the text after the final `.`, lowercased. Names without a dot,
/// or with nothing after the final dot, have no extension.
pub fn archive_extension(file_name: &str) -> Option<String> {
    let dot = file_name.rfind('.')?;
    let ext = &file_name[dot + 1..];
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// A directory entry that passed the candidate filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateFile {
    /// File name as listed.
    pub name: String,

    /// Full path to the file.
    pub path: PathBuf,

    /// Lowercase extension, without the dot.
    pub extension: String,
}

/// How the scanner classified a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryDisposition {
    /// Regular file with a usable extension.
    Candidate,

    /// Subdirectory; the scan is flat and does not recurse.
    Directory,

    /// No `.` in the name, or nothing after the final `.`.
    NoExtension,
}

/// A directory entry with its classification, for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct ScanEntry {
    /// Entry name as listed.
    pub name: String,

    /// How the scanner classified this entry.
    pub disposition: EntryDisposition,

    /// Lowercase extension for candidate entries.
    pub extension: Option<String>,
}

/// Scans a flat directory for candidate archive files.
#[derive(Debug, Clone)]
pub struct CandidateScan {
    dir: PathBuf,
}

impl CandidateScan {
    /// Create a scan over the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the scanned directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Check whether the directory exists.
    pub fn exists(&self) -> bool {
        self.dir.exists() && self.dir.is_dir()
    }

    /// List candidate files, sorted lexicographically by file name.
    ///
    /// Subdirectories and extension-less entries are excluded. Registry
    /// membership is not checked here; see [`CandidateScan::first_registered`].
    pub fn candidate_files(&self) -> Result<Vec<CandidateFile>, std::io::Error> {
        let mut candidates = Vec::new();

        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().to_string();
            let Some(extension) = archive_extension(&name) else {
                continue;
            };

            candidates.push(CandidateFile {
                name,
                path,
                extension,
            });
        }

        candidates.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(candidates)
    }

    /// First candidate whose extension is registered, in lexicographic order.
    pub fn first_registered(
        &self,
        registry: &dyn ArchiveFormatRegistry,
    ) -> Result<Option<CandidateFile>, std::io::Error> {
        Ok(self
            .candidate_files()?
            .into_iter()
            .find(|c| registry.is_extension_registered(&c.extension)))
    }

    /// List all directory entries with their classification, sorted by name.
    ///
    /// Used by diagnostics tooling to explain why entries were skipped.
    pub fn entries(&self) -> Result<Vec<ScanEntry>, std::io::Error> {
        let mut entries = Vec::new();

        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            let (disposition, extension) = if path.is_dir() {
                (EntryDisposition::Directory, None)
            } else {
                match archive_extension(&name) {
                    Some(ext) => (EntryDisposition::Candidate, Some(ext)),
                    None => (EntryDisposition::NoExtension, None),
                }
            };

            entries.push(ScanEntry {
                name,
                disposition,
                extension,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(entries)
    }
}
