//! Archive format registry.
//!
//! The host mapping library ships drivers for a fixed set of archive
//! formats, keyed by file extension. The registry answers the one question
//! the scanner needs: "is there a driver for this extension?"

use std::collections::BTreeSet;

/// Extensions the host mapping library registers drivers for by default.
pub const DEFAULT_ARCHIVE_EXTENSIONS: &[&str] = &["gemf", "mbtiles", "sqlite", "sqlitedb", "zip"];

/// Reports whether a file extension has a registered archive driver.
///
/// Extensions are compared lowercase; implementations must accept input in
/// any case.
pub trait ArchiveFormatRegistry: Send + Sync {
    /// Check whether `extension` (without the leading dot) is registered.
    fn is_extension_registered(&self, extension: &str) -> bool;
}

/// In-memory extension registry.
///
/// Holds the set of registered extensions, normalized to lowercase. Use
/// [`ExtensionRegistry::with_defaults`] for the formats the host mapping
/// library supports out of the box.
#[derive(Debug, Clone)]
pub struct ExtensionRegistry {
    extensions: BTreeSet<String>,
}

impl ExtensionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            extensions: BTreeSet::new(),
        }
    }

    /// Create a registry seeded with [`DEFAULT_ARCHIVE_EXTENSIONS`].
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for ext in DEFAULT_ARCHIVE_EXTENSIONS {
            registry.register(*ext);
        }
        registry
    }

    /// Register an extension. Stored lowercase; the leading dot, if any,
    /// is not stripped and should not be passed.
    pub fn register(&mut self, extension: impl Into<String>) {
        self.extensions.insert(extension.into().to_ascii_lowercase());
    }

    /// Remove an extension from the registry. Returns `true` if it was
    /// registered.
    pub fn unregister(&mut self, extension: &str) -> bool {
        self.extensions.remove(&extension.to_ascii_lowercase())
    }

    /// Iterate over registered extensions in sorted order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ArchiveFormatRegistry for ExtensionRegistry {
    fn is_extension_registered(&self, extension: &str) -> bool {
        self.extensions.contains(&extension.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_registered() {
        let registry = ExtensionRegistry::with_defaults();
        for ext in DEFAULT_ARCHIVE_EXTENSIONS {
            assert!(
                registry.is_extension_registered(ext),
                "{} should be registered by default",
                ext
            );
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = ExtensionRegistry::with_defaults();
        assert!(registry.is_extension_registered("MBTiles"));
        assert!(registry.is_extension_registered("SQLITEDB"));
    }

    #[test]
    fn test_unknown_extension_is_not_registered() {
        let registry = ExtensionRegistry::with_defaults();
        assert!(!registry.is_extension_registered("txt"));
        assert!(!registry.is_extension_registered(""));
    }

    #[test]
    fn test_register_normalizes_case() {
        let mut registry = ExtensionRegistry::new();
        registry.register("GEMF");
        assert!(registry.is_extension_registered("gemf"));
    }

    #[test]
    fn test_unregister() {
        let mut registry = ExtensionRegistry::with_defaults();
        assert!(registry.unregister("zip"));
        assert!(!registry.is_extension_registered("zip"));
        assert!(!registry.unregister("zip"));
    }

    #[test]
    fn test_extensions_sorted() {
        let registry = ExtensionRegistry::with_defaults();
        let listed: Vec<&str> = registry.extensions().collect();
        assert_eq!(listed, DEFAULT_ARCHIVE_EXTENSIONS);
    }
}
