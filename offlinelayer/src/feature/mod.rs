//! The offline tile setup feature.
//!
//! [`select_offline_source`] is the pure scanning half; [`FileTileFeature`]
//! applies its outcome to a map view, reports it to the user, and carries
//! the zoom-bound pass-through fields the enclosing UI framework sets.

mod outcome;
mod select;

pub use outcome::{DefaultReason, Selection};
pub use select::{select_offline_source, SelectionResult};

use std::sync::Arc;

use crate::archive::{ArchiveFormatRegistry, ExtensionRegistry};
use crate::config::FeatureConfig;
use crate::notify::{LogNotifier, Notifier};
use crate::provider::TileProviderFactory;
use crate::source::{FileBasedSourceResolver, TileSourceResolver};
use crate::view::MapView;

/// A feature that can be attached to and detached from a map view.
pub trait MapFeature {
    /// Attach the feature to the view.
    fn add_to_map(&mut self, view: &mut dyn MapView);

    /// Detach the feature, restoring the view's default tile source.
    fn remove_from_map(&mut self, view: &mut dyn MapView);
}

/// Renders tiles from a local archive file instead of a network source.
///
/// Each [`FileTileFeature::setup`] run re-evaluates the offline tiles
/// directory from scratch; nothing is cached across invocations.
pub struct FileTileFeature {
    config: FeatureConfig,
    registry: Arc<dyn ArchiveFormatRegistry>,
    providers: Arc<dyn TileProviderFactory>,
    sources: Arc<dyn TileSourceResolver>,
    notifier: Arc<dyn Notifier>,
    minimum_zoom: f32,
    maximum_zoom: f32,
}

impl FileTileFeature {
    /// Create a feature with explicit collaborators.
    pub fn new(
        config: FeatureConfig,
        registry: Arc<dyn ArchiveFormatRegistry>,
        providers: Arc<dyn TileProviderFactory>,
        sources: Arc<dyn TileSourceResolver>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let minimum_zoom = config.minimum_zoom;
        let maximum_zoom = config.maximum_zoom;
        Self {
            config,
            registry,
            providers,
            sources,
            notifier,
            minimum_zoom,
            maximum_zoom,
        }
    }

    /// Create a feature with the default registry, resolver and notifier.
    ///
    /// Only the provider factory has no in-crate default; it wraps the host
    /// mapping library.
    pub fn with_defaults(config: FeatureConfig, providers: Arc<dyn TileProviderFactory>) -> Self {
        Self::new(
            config,
            Arc::new(ExtensionRegistry::with_defaults()),
            providers,
            Arc::new(FileBasedSourceResolver::new()),
            Arc::new(LogNotifier),
        )
    }

    /// Minimum zoom level, stored pass-through for the map view layer.
    pub fn minimum_zoom(&self) -> f32 {
        self.minimum_zoom
    }

    /// Maximum zoom level, stored pass-through for the map view layer.
    pub fn maximum_zoom(&self) -> f32 {
        self.maximum_zoom
    }

    /// Set the minimum zoom level.
    pub fn set_minimum_zoom(&mut self, zoom: f32) {
        self.minimum_zoom = zoom;
    }

    /// Set the maximum zoom level.
    pub fn set_maximum_zoom(&mut self, zoom: f32) {
        self.maximum_zoom = zoom;
    }

    /// Run the selection and apply its outcome to the view.
    ///
    /// On `Selected` and `Default` the constructed provider is attached and
    /// a redraw requested; on `NoUsableArchive` and `DirectoryMissing` the
    /// view's provider and source are left untouched. The outcome is
    /// reported via the notifier and returned. Never fails.
    pub fn setup(&self, view: &mut dyn MapView) -> Selection {
        if self.config.debug {
            tracing::info!(
                "Scanning {} for offline tile archives",
                self.config.offline_dir.display()
            );
        }

        let SelectionResult { outcome, provider } = select_offline_source(
            &self.config.offline_dir,
            self.registry.as_ref(),
            self.providers.as_ref(),
        );

        match &outcome {
            Selection::Selected { archive, source } => {
                if let Some(provider) = provider {
                    view.set_tile_provider(provider);
                }
                view.set_tile_source(self.sources.resolve(source));
                view.invalidate();
                self.notifier
                    .notify(&format!("Using {} {}", archive.display(), source));
            }
            Selection::Default { archive, reason } => {
                tracing::warn!(
                    "Archive {} selected but unusable ({}); using default online source",
                    archive.display(),
                    reason
                );
                if let Some(provider) = provider {
                    view.set_tile_provider(provider);
                }
                view.set_tile_source(self.sources.default_online_source());
                view.invalidate();
                self.notifier.notify(&format!("Using {}", archive.display()));
            }
            Selection::NoUsableArchive => {
                self.notifier.notify(&format!(
                    "{} did not have any usable tile archives",
                    self.config.offline_dir.display()
                ));
            }
            Selection::DirectoryMissing => {
                self.notifier.notify(&format!(
                    "{} dir not found",
                    self.config.offline_dir.display()
                ));
            }
        }

        outcome
    }

    /// Reset the view to the default online source and re-enable DPI
    /// scaling. Unconditional; has no failure modes.
    pub fn teardown(&self, view: &mut dyn MapView) {
        view.set_tile_source(self.sources.default_online_source());
        view.set_scale_tiles_to_density(true);
    }
}

impl MapFeature for FileTileFeature {
    fn add_to_map(&mut self, view: &mut dyn MapView) {
        self.setup(view);
        // Independent of the setup outcome.
        view.set_use_network(false);
        view.set_scale_tiles_to_density(true);
    }

    fn remove_from_map(&mut self, view: &mut dyn MapView) {
        self.teardown(view);
    }
}
