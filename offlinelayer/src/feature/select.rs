//! Pure archive selection.
//!
//! Separated from the side-effecting apply step in [`super::FileTileFeature`]
//! so the scan logic can be exercised without a map view or a real archive
//! driver.

use std::path::Path;

use crate::archive::{ArchiveFormatRegistry, CandidateScan};
use crate::provider::{TileProvider, TileProviderFactory};

use super::outcome::{DefaultReason, Selection};

/// A selection outcome plus the provider it constructed, if any.
///
/// The provider rides along so the apply step can attach it to the view
/// without reopening the archive.
pub struct SelectionResult {
    /// Data-only outcome of the scan.
    pub outcome: Selection,

    /// Provider constructed for the chosen archive. Present for both
    /// `Selected` and `Default` outcomes.
    pub provider: Option<Box<dyn TileProvider>>,
}

/// Select the first usable offline archive in `dir`.
///
/// Candidates are visited in lexicographic file-name order. The first entry
/// whose extension is registered is attempted; if it fails to open, the scan
/// stops rather than falling through to the next candidate. Construction
/// errors are logged and surfaced as [`Selection::NoUsableArchive`].
pub fn select_offline_source(
    dir: &Path,
    registry: &dyn ArchiveFormatRegistry,
    providers: &dyn TileProviderFactory,
) -> SelectionResult {
    let scan = CandidateScan::new(dir);

    if !scan.exists() {
        tracing::debug!("Offline tiles directory {} not found", dir.display());
        return SelectionResult {
            outcome: Selection::DirectoryMissing,
            provider: None,
        };
    }

    let candidates = match scan.candidate_files() {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::warn!("Failed to list {}: {}", dir.display(), e);
            Vec::new()
        }
    };

    let candidate = candidates
        .into_iter()
        .find(|c| registry.is_extension_registered(&c.extension));

    let Some(candidate) = candidate else {
        return SelectionResult {
            outcome: Selection::NoUsableArchive,
            provider: None,
        };
    };

    tracing::debug!("Trying archive candidate {}", candidate.path.display());

    // One-shot attempt: a failure here does not resume the scan at the
    // next candidate file.
    let provider = match providers.open_provider(std::slice::from_ref(&candidate.path)) {
        Ok(provider) => provider,
        Err(e) => {
            tracing::warn!("Failed to open {}: {}", candidate.path.display(), e);
            return SelectionResult {
                outcome: Selection::NoUsableArchive,
                provider: None,
            };
        }
    };

    let outcome = match provider.archives().first() {
        None => Selection::Default {
            archive: candidate.path.clone(),
            reason: DefaultReason::NoArchivesOpened,
        },
        Some(archive) => match archive.tile_source_names().into_iter().next() {
            None => Selection::Default {
                archive: candidate.path.clone(),
                reason: DefaultReason::NoTileSources,
            },
            Some(source) => Selection::Selected {
                archive: candidate.path.clone(),
                source,
            },
        },
    };

    SelectionResult {
        outcome,
        provider: Some(provider),
    }
}
