//! Lab directory core for the Rede network pages.
//!
//! Holds the lab records, filters them by region and free text, and keeps a
//! sidebar list and a marker map in sync over the same visible subset. The
//! list and map are driven through backend traits so any UI toolkit (or a
//! test mock) can host them.
//!
//! # Example
//!
//! ```ignore
//! use rede_directory::prelude::*;
//!
//! let store = RecordStore::from_json_str(include_str!("labs.json"))?;
//! let mut controller = DirectoryController::new(store, list_backend, map_backend, MapConfig::default());
//! controller.start();
//! controller.set_region(RegionFilter::parse("sul"));
//! controller.set_search_term("Fab");
//! ```

pub mod config;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod nav;
pub mod prefs;
pub mod record;
pub mod region;
pub mod selection;
pub mod store;
pub mod view;

pub use config::{DirectoryConfig, MapConfig};
pub use controller::DirectoryController;
pub use error::{ConfigError, DatasetError, PreferenceError};
pub use filter::{recompute, FilterState, SearchTerm};
pub use nav::NavMenu;
pub use prefs::{FileStore, Language, MemoryStore, PreferenceStore, Preferences, Theme};
pub use record::{Coordinates, LabId, LabRecord, RawLabRecord};
pub use region::{Region, RegionFilter};
pub use selection::{Selection, SelectionCoordinator};
pub use store::RecordStore;
pub use view::{
    LatLng, LatLngBounds, ListBackend, ListEntry, ListView, MapBackend, MapView, MarkerIcon,
    PopupContent, Viewport,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{DirectoryConfig, MapConfig};
    pub use crate::controller::DirectoryController;
    pub use crate::filter::{FilterState, SearchTerm};
    pub use crate::record::{LabId, LabRecord};
    pub use crate::region::{Region, RegionFilter};
    pub use crate::selection::Selection;
    pub use crate::store::RecordStore;
    pub use crate::view::{ListBackend, MapBackend, Viewport};
}
