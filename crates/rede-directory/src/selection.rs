//! Selection coordination between the list and the map.
//!
//! The coordinator owns the list highlight only. Centering the map is the
//! caller's job, so a marker click and a list click share one code path for
//! the list side.

use crate::record::LabId;
use crate::view::{ListBackend, ListView};

/// Which record is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(LabId),
}

/// Tracks the current selection and its highlighted list entry.
#[derive(Debug, Clone, Default)]
pub struct SelectionCoordinator {
    current: Option<LabId>,
    highlighted: Option<usize>,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Selection {
        match self.current {
            Some(id) => Selection::Selected(id),
            None => Selection::Unselected,
        }
    }

    pub fn selected(&self) -> Option<LabId> {
        self.current
    }

    /// Position of the highlighted entry in the visible list.
    pub fn selected_index(&self) -> Option<usize> {
        self.highlighted
    }

    /// Selects `id`: clears the previous highlight, highlights the matching
    /// entry and scrolls it into view.
    ///
    /// Returns `false` and leaves nothing selected when `id` is not in the
    /// list.
    pub fn select<B: ListBackend>(&mut self, id: LabId, list: &mut ListView<B>) -> bool {
        self.clear_highlight(list);

        let Some(position) = list.position_of(id) else {
            self.current = None;
            tracing::debug!(lab = %id, "Selected lab is not in the list");
            return false;
        };

        list.set_highlighted(position, true);
        list.scroll_into_view(position);
        self.current = Some(id);
        self.highlighted = Some(position);
        tracing::debug!(lab = %id, position, "Selected lab");
        true
    }

    /// Re-applies the selection after the list was re-rendered.
    ///
    /// A selection that is still listed is highlighted at its new position
    /// without scrolling; one that was filtered out is cleared.
    pub fn reconcile<B: ListBackend>(&mut self, list: &mut ListView<B>) {
        // The old highlight went away with the re-render.
        self.highlighted = None;

        let Some(id) = self.current else {
            return;
        };

        match list.position_of(id) {
            Some(position) => {
                list.set_highlighted(position, true);
                self.highlighted = Some(position);
            }
            None => {
                tracing::debug!(lab = %id, "Selected lab filtered out, clearing selection");
                self.current = None;
            }
        }
    }

    /// Drops the selection and its highlight.
    pub fn clear<B: ListBackend>(&mut self, list: &mut ListView<B>) {
        self.clear_highlight(list);
        self.current = None;
    }

    fn clear_highlight<B: ListBackend>(&mut self, list: &mut ListView<B>) {
        if let Some(position) = self.highlighted.take() {
            list.set_highlighted(position, false);
        }
    }
}
