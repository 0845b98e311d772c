//! Selection outcomes.

use std::path::PathBuf;

use serde::Serialize;

/// Why a selected archive fell back to the default online source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultReason {
    /// The provider opened but produced zero usable archive handles.
    NoArchivesOpened,

    /// The first opened archive contained no tile-source names.
    NoTileSources,
}

impl std::fmt::Display for DefaultReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefaultReason::NoArchivesOpened => write!(f, "no archives opened"),
            DefaultReason::NoTileSources => write!(f, "no tile sources in archive"),
        }
    }
}

/// Outcome of the offline archive selection.
///
/// Re-evaluated fresh on every setup run; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Selection {
    /// An archive was selected and a tile source resolved from it.
    Selected {
        /// Path of the chosen archive file.
        archive: PathBuf,
        /// Resolved tile-source name.
        source: String,
    },

    /// An archive was selected but yielded no usable tile source; the
    /// default online source applies. The provider stays attached.
    Default {
        /// Path of the chosen archive file.
        archive: PathBuf,
        /// Why the archive was unusable.
        reason: DefaultReason,
    },

    /// No entry with a registered extension could be used.
    NoUsableArchive,

    /// The offline tiles directory does not exist.
    DirectoryMissing,
}

impl Selection {
    /// Check whether an archive was selected with a resolved source.
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected { .. })
    }

    /// Path of the chosen archive, when one was chosen.
    pub fn archive(&self) -> Option<&PathBuf> {
        match self {
            Selection::Selected { archive, .. } | Selection::Default { archive, .. } => {
                Some(archive)
            }
            _ => None,
        }
    }
}
