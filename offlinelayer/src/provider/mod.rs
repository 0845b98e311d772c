//! Tile provider seams over the host mapping library.
//!
//! The mapping library owns archive parsing and tile loading; this crate
//! only decides *which* archive file to hand it. These traits are the
//! boundary: the host implements them over its real provider objects, and
//! tests substitute mocks.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while constructing an offline tile provider.
#[derive(Debug, Error, Clone)]
pub enum ProviderError {
    /// The archive file could not be opened by any driver.
    #[error("Failed to open tile archive {path}: {reason}")]
    ArchiveOpen {
        /// Path of the archive that failed to open.
        path: PathBuf,
        /// Driver-reported reason.
        reason: String,
    },

    /// No driver is registered for the file's format.
    #[error("Unsupported archive format: {0}")]
    UnsupportedFormat(String),

    /// I/O error while reading the archive.
    #[error("I/O error: {0}")]
    Io(String),
}

/// A single opened tile archive inside a provider.
pub trait TileArchive: Send + Sync {
    /// Names of the tile sources contained in this archive.
    ///
    /// Returned as a sorted set so "first" is deterministic.
    fn tile_source_names(&self) -> BTreeSet<String>;

    /// Path of the backing archive file.
    fn path(&self) -> &Path;
}

/// Supplies tile images to a map view from opened offline archives.
pub trait TileProvider: Send + Sync {
    /// Archives this provider managed to open.
    ///
    /// May be empty when construction succeeded but no driver produced a
    /// usable archive handle.
    fn archives(&self) -> &[Box<dyn TileArchive>];
}

/// Opens offline tile providers over candidate archive files.
pub trait TileProviderFactory: Send + Sync {
    /// Construct a provider scoped to exactly the given files.
    ///
    /// The setup procedure always passes a single file; the slice mirrors
    /// the host library's API, which accepts several.
    fn open_provider(&self, files: &[PathBuf]) -> Result<Box<dyn TileProvider>, ProviderError>;
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Archive backed by a fixed set of tile source names.
    pub struct MockArchive {
        pub path: PathBuf,
        pub sources: BTreeSet<String>,
    }

    impl TileArchive for MockArchive {
        fn tile_source_names(&self) -> BTreeSet<String> {
            self.sources.clone()
        }

        fn path(&self) -> &Path {
            &self.path
        }
    }

    /// Provider over a fixed list of archives.
    pub struct MockProvider {
        pub archives: Vec<Box<dyn TileArchive>>,
    }

    impl TileProvider for MockProvider {
        fn archives(&self) -> &[Box<dyn TileArchive>] {
            &self.archives
        }
    }

    /// What a [`MockProviderFactory`] should do when asked to open.
    pub enum MockBehavior {
        /// Fail with [`ProviderError::ArchiveOpen`].
        Fail(String),
        /// Succeed with zero opened archives.
        NoArchives,
        /// Succeed with one archive per inner list of source names.
        Archives(Vec<Vec<String>>),
    }

    /// Factory with scripted behavior, recording the files it was given.
    pub struct MockProviderFactory {
        pub behavior: MockBehavior,
        pub opened: std::sync::Mutex<Vec<PathBuf>>,
    }

    impl MockProviderFactory {
        pub fn new(behavior: MockBehavior) -> Self {
            Self {
                behavior,
                opened: std::sync::Mutex::new(Vec::new()),
            }
        }

        /// Files passed to `open_provider`, across all calls.
        pub fn opened_files(&self) -> Vec<PathBuf> {
            self.opened.lock().unwrap().clone()
        }
    }

    impl TileProviderFactory for MockProviderFactory {
        fn open_provider(
            &self,
            files: &[PathBuf],
        ) -> Result<Box<dyn TileProvider>, ProviderError> {
            self.opened.lock().unwrap().extend(files.iter().cloned());
            let path = files.first().cloned().unwrap_or_default();

            match &self.behavior {
                MockBehavior::Fail(reason) => Err(ProviderError::ArchiveOpen {
                    path,
                    reason: reason.clone(),
                }),
                MockBehavior::NoArchives => Ok(Box::new(MockProvider {
                    archives: Vec::new(),
                })),
                MockBehavior::Archives(sets) => {
                    let archives = sets
                        .iter()
                        .map(|names| {
                            Box::new(MockArchive {
                                path: path.clone(),
                                sources: names.iter().cloned().collect(),
                            }) as Box<dyn TileArchive>
                        })
                        .collect();
                    Ok(Box::new(MockProvider { archives }))
                }
            }
        }
    }

    #[test]
    fn test_mock_factory_records_files() {
        let factory = MockProviderFactory::new(MockBehavior::NoArchives);
        let files = vec![PathBuf::from("/tiles/city.mbtiles")];

        let provider = factory.open_provider(&files).unwrap();

        assert!(provider.archives().is_empty());
        assert_eq!(factory.opened_files(), files);
    }

    #[test]
    fn test_mock_factory_failure() {
        let factory = MockProviderFactory::new(MockBehavior::Fail("corrupt header".into()));
        let result = factory.open_provider(&[PathBuf::from("/tiles/bad.zip")]);

        assert!(matches!(result, Err(ProviderError::ArchiveOpen { .. })));
    }

    #[test]
    fn test_mock_archive_sources_sorted() {
        let factory = MockProviderFactory::new(MockBehavior::Archives(vec![vec![
            "zulu".to_string(),
            "alpha".to_string(),
        ]]));

        let provider = factory
            .open_provider(&[PathBuf::from("/tiles/multi.gemf")])
            .unwrap();
        let names = provider.archives()[0].tile_source_names();

        assert_eq!(names.into_iter().next().unwrap(), "alpha");
    }
}
