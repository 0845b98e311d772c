//! Tile source descriptors and resolution.
//!
//! A tile source is a named scheme describing how to address and style map
//! tiles. Names discovered inside offline archives resolve to file-based
//! descriptors; when selection falls back, the well-known default online
//! source applies.

use serde::{Deserialize, Serialize};

/// Name of the default online tile source registered by the host mapping
/// library.
pub const DEFAULT_ONLINE_SOURCE: &str = "Mapnik";

/// Where a tile source's tiles come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileSourceKind {
    /// Tiles read from a local archive file.
    FileBased,

    /// Tiles fetched from a network endpoint.
    Online,
}

impl TileSourceKind {
    /// Check if this is a file-based source.
    pub fn is_file_based(&self) -> bool {
        matches!(self, TileSourceKind::FileBased)
    }
}

impl std::fmt::Display for TileSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileSourceKind::FileBased => write!(f, "file-based"),
            TileSourceKind::Online => write!(f, "online"),
        }
    }
}

/// A renderable tile source handed to the map view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSourceDescriptor {
    /// Source name (e.g., an archive's tile source name, or "Mapnik").
    pub name: String,

    /// Whether tiles come from a local archive or the network.
    pub kind: TileSourceKind,
}

impl TileSourceDescriptor {
    /// Create a file-based descriptor for a source name found in an archive.
    pub fn file_based(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TileSourceKind::FileBased,
        }
    }

    /// Create an online descriptor.
    pub fn online(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TileSourceKind::Online,
        }
    }

    /// Check if this descriptor reads from a local archive.
    pub fn is_file_based(&self) -> bool {
        self.kind.is_file_based()
    }
}

/// Maps tile-source names to renderable descriptors.
pub trait TileSourceResolver: Send + Sync {
    /// Resolve a tile-source name found in an archive.
    fn resolve(&self, name: &str) -> TileSourceDescriptor;

    /// The registered default online source used when selection falls back.
    fn default_online_source(&self) -> TileSourceDescriptor;
}

/// Resolver that maps archive source names to file-based descriptors.
#[derive(Debug, Clone)]
pub struct FileBasedSourceResolver {
    default_source: String,
}

impl FileBasedSourceResolver {
    /// Create a resolver with [`DEFAULT_ONLINE_SOURCE`] as the fallback.
    pub fn new() -> Self {
        Self {
            default_source: DEFAULT_ONLINE_SOURCE.to_string(),
        }
    }

    /// Create a resolver with a custom default online source name.
    pub fn with_default_source(name: impl Into<String>) -> Self {
        Self {
            default_source: name.into(),
        }
    }
}

impl Default for FileBasedSourceResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSourceResolver for FileBasedSourceResolver {
    fn resolve(&self, name: &str) -> TileSourceDescriptor {
        TileSourceDescriptor::file_based(name)
    }

    fn default_online_source(&self) -> TileSourceDescriptor {
        TileSourceDescriptor::online(&self.default_source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_file_based() {
        let resolver = FileBasedSourceResolver::new();
        let descriptor = resolver.resolve("osm");

        assert_eq!(descriptor.name, "osm");
        assert!(descriptor.is_file_based());
    }

    #[test]
    fn test_default_online_source() {
        let resolver = FileBasedSourceResolver::new();
        let descriptor = resolver.default_online_source();

        assert_eq!(descriptor.name, DEFAULT_ONLINE_SOURCE);
        assert!(!descriptor.is_file_based());
    }

    #[test]
    fn test_custom_default_source() {
        let resolver = FileBasedSourceResolver::with_default_source("CustomBase");
        assert_eq!(resolver.default_online_source().name, "CustomBase");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TileSourceKind::FileBased.to_string(), "file-based");
        assert_eq!(TileSourceKind::Online.to_string(), "online");
    }
}
