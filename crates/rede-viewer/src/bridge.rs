//! Leaflet bridge.
//!
//! The webview owns the Leaflet map; Rust drives it by evaluating short
//! scripts. Markers live in `window.redeMarkers` keyed by a Rust-assigned
//! handle. Marker clicks and window resizes flow back through one
//! long-lived eval channel opened with [`LISTENER_SCRIPT`].

use dioxus::prelude::*;
use serde::Deserialize;

use rede_directory::{LabId, LatLng, LatLngBounds, MapBackend, MarkerIcon, PopupContent};

/// Element id of the map container.
pub const MAP_CONTAINER_ID: &str = "lab-map";

/// Installs `window.redeBridge` and reports window resizes.
pub const LISTENER_SCRIPT: &str = r#"
window.redeBridge = function (message) { dioxus.send(message); };
window.addEventListener('resize', function () {
    dioxus.send({ kind: 'resized', width: window.innerWidth });
});
dioxus.send({ kind: 'resized', width: window.innerWidth });
await new Promise(function () {});
"#;

/// A message sent from the webview.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BridgeEvent {
    MarkerClicked { lab: usize },
    Resized { width: u32 },
}

/// Builds the scripts evaluated by [`LeafletMap`].
pub mod script {
    use super::*;

    /// Encodes `value` as a JS literal.
    fn js<T: serde::Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
    }

    pub fn create_map(center: LatLng, zoom: u8) -> String {
        format!(
            r#"(function () {{
    var el = document.getElementById({container});
    if (!el || typeof L === 'undefined') return;
    if (window.redeMap) window.redeMap.remove();
    window.redeMap = L.map(el).setView([{lat}, {lng}], {zoom});
    window.redeMarkers = {{}};
}})();"#,
            container = js(MAP_CONTAINER_ID),
            lat = center.lat,
            lng = center.lng,
        )
    }

    pub fn add_tile_layer(url_template: &str, attribution: &str) -> String {
        format!(
            "if (window.redeMap) L.tileLayer({url}, {{ attribution: {attribution} }}).addTo(window.redeMap);",
            url = js(url_template),
            attribution = js(attribution),
        )
    }

    pub fn add_marker(
        handle: u64,
        position: LatLng,
        icon: &MarkerIcon,
        popup: &PopupContent,
        lab: LabId,
    ) -> String {
        let dot = format!(
            r#"<div class="marker-dot" style="background-color: {color}; width: {size}px; height: {size}px;"></div>"#,
            color = icon.color,
            size = icon.size,
        );
        format!(
            r#"(function () {{
    var map = window.redeMap;
    if (!map) return;
    var icon = L.divIcon({{
        className: 'custom-marker',
        html: {dot},
        iconSize: [{size}, {size}],
        iconAnchor: [{anchor}, {anchor}]
    }});
    var popup = {popup};
    var content = document.createElement('div');
    content.className = 'popup-content';
    [['popup-title', popup.name], ['popup-location', popup.location], ['popup-description', popup.description]]
        .forEach(function (part) {{
            var row = document.createElement('div');
            row.className = part[0];
            row.textContent = part[1];
            content.appendChild(row);
        }});
    var marker = L.marker([{lat}, {lng}], {{ icon: icon }}).addTo(map).bindPopup(content);
    marker.on('click', function () {{
        if (window.redeBridge) window.redeBridge({{ kind: 'marker_clicked', lab: {lab} }});
    }});
    window.redeMarkers[{handle}] = marker;
}})();"#,
            dot = js(&dot),
            size = icon.size,
            anchor = icon.size / 2,
            popup = js(popup),
            lat = position.lat,
            lng = position.lng,
            lab = lab.index(),
        )
    }

    pub fn remove_marker(handle: u64) -> String {
        format!(
            "(function () {{ var m = window.redeMarkers && window.redeMarkers[{handle}]; if (m && window.redeMap) {{ window.redeMap.removeLayer(m); delete window.redeMarkers[{handle}]; }} }})();"
        )
    }

    pub fn open_popup(handle: u64) -> String {
        format!(
            "(function () {{ var m = window.redeMarkers && window.redeMarkers[{handle}]; if (m) m.openPopup(); }})();"
        )
    }

    pub fn fit_bounds(bounds: LatLngBounds) -> String {
        format!(
            "if (window.redeMap) window.redeMap.fitBounds([[{}, {}], [{}, {}]]);",
            bounds.south_west.lat, bounds.south_west.lng, bounds.north_east.lat, bounds.north_east.lng,
        )
    }

    pub fn set_view(center: LatLng, zoom: u8) -> String {
        format!(
            "if (window.redeMap) window.redeMap.setView([{}, {}], {zoom});",
            center.lat, center.lng,
        )
    }

    pub fn invalidate_size() -> String {
        "if (window.redeMap) window.redeMap.invalidateSize();".to_string()
    }

    pub fn scroll_into_view(element_id: &str) -> String {
        format!(
            "(function () {{ var el = document.getElementById({}); if (el) el.scrollIntoView({{ behavior: 'smooth', block: 'nearest' }}); }})();",
            js(element_id),
        )
    }
}

/// [`MapBackend`] that drives Leaflet in the webview.
#[derive(Debug, Default)]
pub struct LeafletMap {
    next_handle: u64,
}

impl LeafletMap {
    pub fn new() -> Self {
        Self::default()
    }

    fn run(&self, script: String) {
        document::eval(&script);
    }
}

impl MapBackend for LeafletMap {
    type Marker = u64;

    fn create_map(&mut self, center: LatLng, zoom: u8) {
        self.run(script::create_map(center, zoom));
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) {
        self.run(script::add_tile_layer(url_template, attribution));
    }

    fn add_marker(
        &mut self,
        position: LatLng,
        icon: &MarkerIcon,
        popup: &PopupContent,
        lab: LabId,
    ) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.run(script::add_marker(handle, position, icon, popup, lab));
        handle
    }

    fn remove_marker(&mut self, marker: &u64) {
        self.run(script::remove_marker(*marker));
    }

    fn open_popup(&mut self, marker: &u64) {
        self.run(script::open_popup(*marker));
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.run(script::fit_bounds(bounds));
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        self.run(script::set_view(center, zoom));
    }

    fn invalidate_size(&mut self) {
        self.run(script::invalidate_size());
    }
}
