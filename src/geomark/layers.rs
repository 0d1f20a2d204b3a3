//! Tile-layer registry and the zoom control model.
//!
//! Purely presentational: a fixed mapping from display name to tile-source
//! configuration, plus a zoom control that delegates to a map view's clamped
//! zoom primitives. No runtime logic beyond construction.

/// One base-layer entry: URL template plus display metadata, as Leaflet's
/// `tileLayer` options spell them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileLayer {
    pub name: &'static str,
    pub url_template: &'static str,
    pub attribution: &'static str,
    pub max_zoom: u8,
    /// Subdomain set for `{s}` templates; empty when the template has none.
    pub subdomains: &'static [&'static str],
}

/// The fixed base-layer registry offered in the layer picker.
pub const BASE_LAYERS: &[TileLayer] = &[
    TileLayer {
        name: "OpenStreetMap",
        url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        attribution: "© OpenStreetMap",
        max_zoom: 19,
        subdomains: &[],
    },
    TileLayer {
        name: "OpenStreetMap HOT",
        url_template: "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png",
        attribution: "© OpenStreetMap contributors, Tiles style by Humanitarian OpenStreetMap Team hosted by OpenStreetMap France",
        max_zoom: 19,
        subdomains: &["a", "b", "c"],
    },
    TileLayer {
        name: "Esri World Imagery",
        url_template: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
        attribution: "Tiles © Esri — Source: Esri, Maxar, Earthstar Geographics",
        max_zoom: 18,
        subdomains: &[],
    },
    TileLayer {
        name: "Carto Light",
        url_template: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
        attribution: "© OpenStreetMap contributors © CARTO",
        max_zoom: 20,
        subdomains: &["a", "b", "c", "d"],
    },
    TileLayer {
        name: "Google Satellite",
        url_template: "https://mt1.google.com/vt/lyrs=s&x={x}&y={y}&z={z}",
        attribution: "© Google",
        max_zoom: 18,
        subdomains: &[],
    },
    TileLayer {
        name: "Google Hybrid",
        url_template: "https://mt1.google.com/vt/lyrs=y&x={x}&y={y}&z={z}",
        attribution: "© Google",
        max_zoom: 18,
        subdomains: &[],
    },
];

/// Look up a base layer by its display name.
pub fn base_layer(name: &str) -> Option<&'static TileLayer> {
    BASE_LAYERS.iter().find(|layer| layer.name == name)
}

/// The zoom aspect of a map view: a level clamped to `[min_zoom, max_zoom]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapView {
    zoom: u8,
    min_zoom: u8,
    max_zoom: u8,
}

impl MapView {
    pub fn new(zoom: u8, min_zoom: u8, max_zoom: u8) -> Self {
        Self {
            zoom: zoom.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
        }
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        if self.zoom < self.max_zoom {
            self.zoom += 1;
        }
    }

    pub fn zoom_out(&mut self) {
        if self.zoom > self.min_zoom {
            self.zoom -= 1;
        }
    }
}

/// Screen corner a map control is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

/// The custom zoom control: two buttons delegating to the map's zoom
/// primitives. Stateless beyond its anchor position.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoomControl {
    pub position: ControlPosition,
}

impl ZoomControl {
    pub fn new(position: ControlPosition) -> Self {
        Self { position }
    }

    pub fn press_zoom_in(&self, map: &mut MapView) {
        map.zoom_in();
    }

    pub fn press_zoom_out(&self, map: &mut MapView) {
        map.zoom_out();
    }
}
