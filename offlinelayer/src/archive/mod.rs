//! Offline tile archive discovery.
//!
//! This module covers the filesystem half of the setup procedure: listing
//! the offline tiles directory, filtering entries down to candidate archive
//! files, and deciding which file extensions the host mapping library has a
//! driver for.

mod candidates;
mod registry;

pub use candidates::{archive_extension, CandidateFile, CandidateScan, EntryDisposition, ScanEntry};
pub use registry::{ArchiveFormatRegistry, ExtensionRegistry, DEFAULT_ARCHIVE_EXTENSIONS};
