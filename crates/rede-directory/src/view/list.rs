//! Sidebar list view.

use crate::record::{LabId, LabRecord};

use super::Viewport;

/// Display data for one list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: LabId,
    pub name: String,
    pub location: String,
    pub description: String,
}

impl ListEntry {
    pub fn from_record(record: &LabRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            location: record.location.clone(),
            description: record.description.clone(),
        }
    }
}

/// Toolkit half of the list view.
pub trait ListBackend {
    /// Replaces all entries.
    fn replace_entries(&mut self, entries: Vec<ListEntry>);

    /// Adds or removes the highlight on the entry at `position`.
    fn set_highlighted(&mut self, position: usize, highlighted: bool);

    /// Smoothly scrolls the entry at `position` into view, leaving the
    /// scroll position alone when it is already visible.
    fn scroll_into_view(&mut self, position: usize);
}

/// Renders the visible records as a clickable list.
#[derive(Debug)]
pub struct ListView<B> {
    backend: B,
    rendered: Vec<LabId>,
}

impl<B: ListBackend> ListView<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            rendered: Vec::new(),
        }
    }

    /// Resolves a clicked position to the record it shows.
    pub fn entry_at(&self, position: usize) -> Option<LabId> {
        self.rendered.get(position).copied()
    }

    /// Returns the position of the entry showing `id`.
    pub fn position_of(&self, id: LabId) -> Option<usize> {
        self.rendered.iter().position(|rendered| *rendered == id)
    }

    pub fn set_highlighted(&mut self, position: usize, highlighted: bool) {
        if position < self.rendered.len() {
            self.backend.set_highlighted(position, highlighted);
        }
    }

    pub fn scroll_into_view(&mut self, position: usize) {
        if position < self.rendered.len() {
            self.backend.scroll_into_view(position);
        }
    }

    /// Returns the ids currently shown, in order.
    pub fn rendered(&self) -> &[LabId] {
        &self.rendered
    }

    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

impl<B: ListBackend> Viewport for ListView<B> {
    fn render(&mut self, visible: &[&LabRecord]) {
        self.rendered = visible.iter().map(|r| r.id).collect();
        self.backend
            .replace_entries(visible.iter().map(|r| ListEntry::from_record(r)).collect());
    }

    fn center_on(&mut self, record: &LabRecord) {
        if let Some(position) = self.position_of(record.id) {
            self.backend.scroll_into_view(position);
        }
    }
}
