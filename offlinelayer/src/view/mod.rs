//! Map view seam.
//!
//! The five mutations the offline tile feature performs on the host map
//! widget. Implementations wrap the real view; tests use
//! [`tests::RecordingMapView`].

use crate::provider::TileProvider;
use crate::source::TileSourceDescriptor;

/// Mutable handle on the host map widget.
pub trait MapView {
    /// Replace the view's active tile provider.
    fn set_tile_provider(&mut self, provider: Box<dyn TileProvider>);

    /// Replace the view's active tile source.
    fn set_tile_source(&mut self, source: TileSourceDescriptor);

    /// Enable or disable network tile fetching.
    fn set_use_network(&mut self, enabled: bool);

    /// Enable or disable scaling tiles to the display density.
    fn set_scale_tiles_to_density(&mut self, enabled: bool);

    /// Request a visual redraw.
    fn invalidate(&mut self);
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Map view double that records every mutation.
    #[derive(Default)]
    pub struct RecordingMapView {
        pub provider: Option<Box<dyn TileProvider>>,
        pub provider_sets: usize,
        pub tile_source: Option<TileSourceDescriptor>,
        pub use_network: Option<bool>,
        pub scale_tiles_to_density: Option<bool>,
        pub invalidations: usize,
    }

    impl MapView for RecordingMapView {
        fn set_tile_provider(&mut self, provider: Box<dyn TileProvider>) {
            self.provider = Some(provider);
            self.provider_sets += 1;
        }

        fn set_tile_source(&mut self, source: TileSourceDescriptor) {
            self.tile_source = Some(source);
        }

        fn set_use_network(&mut self, enabled: bool) {
            self.use_network = Some(enabled);
        }

        fn set_scale_tiles_to_density(&mut self, enabled: bool) {
            self.scale_tiles_to_density = Some(enabled);
        }

        fn invalidate(&mut self) {
            self.invalidations += 1;
        }
    }

    #[test]
    fn test_recording_view_tracks_mutations() {
        let mut view = RecordingMapView::default();

        view.set_use_network(false);
        view.set_tile_source(TileSourceDescriptor::online("Mapnik"));
        view.invalidate();

        assert_eq!(view.use_network, Some(false));
        assert_eq!(view.tile_source.as_ref().unwrap().name, "Mapnik");
        assert_eq!(view.invalidations, 1);
        assert!(view.provider.is_none());
    }
}
