//! Marker map view.
//!
//! The map library is reached only through [`MapBackend`]. Bounding boxes
//! are computed here so every backend fits the viewport the same way.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::MapConfig;
use crate::record::{Coordinates, LabId, LabRecord};

use super::Viewport;

/// A point on the map in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for LatLng {
    fn from(value: Coordinates) -> Self {
        Self::new(value.latitude, value.longitude)
    }
}

/// An axis-aligned box of map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Returns the smallest box holding every point, or `None` for no points.
    pub fn from_points(points: impl IntoIterator<Item = LatLng>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self {
            south_west: first,
            north_east: first,
        };
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Grows the box to include `point`.
    pub fn extend(&mut self, point: LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Expands each side by `ratio` of the box's extent on that axis.
    pub fn pad(&self, ratio: f64) -> Self {
        let lat_buffer = (self.north_east.lat - self.south_west.lat).abs() * ratio;
        let lng_buffer = (self.north_east.lng - self.south_west.lng).abs() * ratio;
        Self {
            south_west: LatLng::new(
                self.south_west.lat - lat_buffer,
                self.south_west.lng - lng_buffer,
            ),
            north_east: LatLng::new(
                self.north_east.lat + lat_buffer,
                self.north_east.lng + lng_buffer,
            ),
        }
    }

    /// Returns whether `point` lies inside or on the edge of the box.
    pub fn contains(&self, point: LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}

/// Round marker style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    pub color: &'static str,
    /// Diameter in pixels; the anchor is the center.
    pub size: u32,
}

/// Popup text for a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PopupContent {
    pub name: String,
    pub location: String,
    pub description: String,
}

impl PopupContent {
    pub fn from_record(record: &LabRecord) -> Self {
        Self {
            name: record.name.clone(),
            location: record.location.clone(),
            description: record.description.clone(),
        }
    }
}

/// Capabilities the map view needs from a mapping library.
pub trait MapBackend {
    /// Handle for a placed marker.
    type Marker: Clone + fmt::Debug;

    fn create_map(&mut self, center: LatLng, zoom: u8);

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str);

    /// Places a marker with a bound popup. Clicks on it are reported to the
    /// host with `lab`.
    fn add_marker(
        &mut self,
        position: LatLng,
        icon: &MarkerIcon,
        popup: &PopupContent,
        lab: LabId,
    ) -> Self::Marker;

    fn remove_marker(&mut self, marker: &Self::Marker);

    fn open_popup(&mut self, marker: &Self::Marker);

    fn fit_bounds(&mut self, bounds: LatLngBounds);

    fn set_view(&mut self, center: LatLng, zoom: u8);

    /// Makes the map re-read its container size.
    fn invalidate_size(&mut self);
}

#[derive(Debug, Clone)]
struct PlacedMarker<M> {
    lab: LabId,
    position: LatLng,
    handle: M,
}

/// Renders the visible records with coordinates as markers.
pub struct MapView<B: MapBackend> {
    backend: B,
    config: MapConfig,
    initialized: bool,
    markers: Vec<PlacedMarker<B::Marker>>,
    fitted_bounds: Option<LatLngBounds>,
}

impl<B: MapBackend> MapView<B> {
    pub fn new(backend: B, config: MapConfig) -> Self {
        Self {
            backend,
            config,
            initialized: false,
            markers: Vec::new(),
            fitted_bounds: None,
        }
    }

    /// Creates the map and its tile layer. Calling it again does nothing.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.backend
            .create_map(self.config.center, self.config.zoom);
        self.backend
            .add_tile_layer(&self.config.tile_url, &self.config.attribution);
        self.initialized = true;
        tracing::info!(
            lat = self.config.center.lat,
            lng = self.config.center.lng,
            zoom = self.config.zoom,
            "Map initialized"
        );
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Returns the labs that currently have a marker, in placement order.
    pub fn marker_labs(&self) -> Vec<LabId> {
        self.markers.iter().map(|m| m.lab).collect()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Returns the handle of the marker placed for `lab`.
    pub fn marker_for(&self, lab: LabId) -> Option<&B::Marker> {
        self.markers
            .iter()
            .find(|m| m.lab == lab)
            .map(|m| &m.handle)
    }

    /// Returns the padded bounds of the last viewport fit.
    pub fn fitted_bounds(&self) -> Option<LatLngBounds> {
        self.fitted_bounds
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn clear_markers(&mut self) {
        for marker in self.markers.drain(..) {
            self.backend.remove_marker(&marker.handle);
        }
    }

    fn icon_for(&self, record: &LabRecord) -> MarkerIcon {
        MarkerIcon {
            color: record.region.marker_color(),
            size: self.config.marker_size,
        }
    }
}

impl<B: MapBackend> Viewport for MapView<B> {
    fn render(&mut self, visible: &[&LabRecord]) {
        if !self.initialized {
            tracing::debug!("Map not initialized, skipping marker render");
            return;
        }

        self.clear_markers();

        for record in visible {
            let Some(coordinates) = record.coordinates else {
                continue;
            };
            let position = LatLng::from(coordinates);
            let icon = self.icon_for(record);
            let popup = PopupContent::from_record(record);
            let handle = self.backend.add_marker(position, &icon, &popup, record.id);
            self.markers.push(PlacedMarker {
                lab: record.id,
                position,
                handle,
            });
        }

        if let Some(bounds) = LatLngBounds::from_points(self.markers.iter().map(|m| m.position)) {
            let padded = bounds.pad(self.config.fit_padding);
            self.backend.fit_bounds(padded);
            self.fitted_bounds = Some(padded);
        }

        tracing::debug!(
            visible = visible.len(),
            markers = self.markers.len(),
            "Rendered map markers"
        );
    }

    fn center_on(&mut self, record: &LabRecord) {
        if !self.initialized {
            return;
        }
        let Some(coordinates) = record.coordinates else {
            return;
        };
        self.backend
            .set_view(coordinates.into(), self.config.focus_zoom);
        if let Some(marker) = self.marker_for(record.id).cloned() {
            self.backend.open_popup(&marker);
        }
    }

    fn resize(&mut self) {
        if self.initialized {
            self.backend.invalidate_size();
        }
    }
}
