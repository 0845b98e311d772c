//! OfflineLayer - offline tile archive selection for map views
//!
//! This library scans a local directory for offline map-tile archive files,
//! selects the first one whose format is recognized by the archive-format
//! registry, and configures a map view to render tiles from that archive
//! instead of a network tile source.
//!
//! The underlying mapping library is consumed only through narrow trait
//! seams: [`archive::ArchiveFormatRegistry`], [`provider::TileProviderFactory`],
//! [`source::TileSourceResolver`], [`view::MapView`] and [`notify::Notifier`].
//! Everything behind those seams (archive parsing, tile loading, rendering)
//! is the host mapping library's business.
//!
//! # High-Level API
//!
//! ```ignore
//! use offlinelayer::config::FeatureConfig;
//! use offlinelayer::feature::{FileTileFeature, MapFeature};
//!
//! let config = FeatureConfig::default();
//! let mut feature = FileTileFeature::with_defaults(config, provider_factory);
//!
//! // Attach the first usable offline archive to the map view, or fall
//! // back to the default online source.
//! feature.add_to_map(&mut map_view);
//! ```

pub mod archive;
pub mod config;
pub mod feature;
pub mod logging;
pub mod notify;
pub mod provider;
pub mod source;
pub mod view;

/// Version of the OfflineLayer library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
