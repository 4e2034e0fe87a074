//! The directory controller.
//!
//! Owns the record store, filter state, selection and both views. Every
//! input runs one synchronous pass: recompute, render the list, render the
//! map, reconcile the selection.

use crate::config::MapConfig;
use crate::filter::{FilterState, SearchTerm};
use crate::record::{LabId, LabRecord};
use crate::region::RegionFilter;
use crate::selection::{Selection, SelectionCoordinator};
use crate::store::RecordStore;
use crate::view::{ListBackend, ListView, MapBackend, MapView, Viewport};

/// Application state for one lab directory.
pub struct DirectoryController<L: ListBackend, M: MapBackend> {
    store: RecordStore,
    filter: FilterState,
    selection: SelectionCoordinator,
    list: ListView<L>,
    map: MapView<M>,
}

impl<L: ListBackend, M: MapBackend> DirectoryController<L, M> {
    /// Creates a controller. Nothing is rendered until [`refresh`](Self::refresh)
    /// or [`start`](Self::start).
    pub fn new(store: RecordStore, list_backend: L, map_backend: M, map_config: MapConfig) -> Self {
        Self {
            store,
            filter: FilterState::new(),
            selection: SelectionCoordinator::new(),
            list: ListView::new(list_backend),
            map: MapView::new(map_backend, map_config),
        }
    }

    /// Initializes the map and renders both views.
    pub fn start(&mut self) {
        self.map.init();
        self.refresh();
    }

    /// Recomputes the visible subset and re-renders both views from it.
    pub fn refresh(&mut self) {
        self.store.apply(&self.filter);
        let visible: Vec<&LabRecord> = self.store.visible_records();
        self.list.render(&visible);
        self.map.render(&visible);
        self.selection.reconcile(&mut self.list);
    }

    /// Applies raw search box input.
    pub fn set_search_term(&mut self, raw: &str) {
        self.filter.search_term = SearchTerm::new(raw);
        self.refresh();
    }

    /// Applies a region filter button.
    pub fn set_region(&mut self, region: RegionFilter) {
        tracing::debug!(region = %region.identifier(), "Region filter changed");
        self.filter.active_region = region;
        self.refresh();
    }

    /// Handles a click on the list entry at `position`.
    ///
    /// Selects the record and, when it has coordinates, centers the map on it
    /// and opens its popup.
    pub fn click_list_entry(&mut self, position: usize) -> Option<LabId> {
        let id = self.list.entry_at(position)?;
        self.selection.select(id, &mut self.list);
        if let Some(record) = self.store.get(id) {
            if record.has_coordinates() {
                self.map.center_on(record);
            }
        }
        Some(id)
    }

    /// Handles a click on the marker placed for `id`.
    pub fn click_marker(&mut self, id: LabId) -> bool {
        self.selection.select(id, &mut self.list)
    }

    /// Handles a change of the layout dimensions.
    pub fn resize(&mut self) {
        self.map.resize();
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn selection(&self) -> Selection {
        self.selection.selection()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected_index()
    }

    pub fn visible_records(&self) -> Vec<&LabRecord> {
        self.store.visible_records()
    }

    pub fn list(&self) -> &ListView<L> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView<L> {
        &mut self.list
    }

    pub fn map(&self) -> &MapView<M> {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut MapView<M> {
        &mut self.map
    }
}
