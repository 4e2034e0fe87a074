//! Record store: the full dataset plus the currently visible subset.

use std::collections::HashSet;

use crate::filter::FilterState;
use crate::record::{LabId, LabRecord, RawLabRecord};

/// Holds the immutable dataset and the ids of the visible records.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<LabRecord>,
    visible: Vec<LabId>,
}

impl RecordStore {
    /// Creates a store from raw records, assigning ids in dataset order.
    ///
    /// Everything is visible until the first [`apply`](Self::apply).
    pub fn from_raw(raw: Vec<RawLabRecord>) -> Self {
        let records: Vec<LabRecord> = raw
            .into_iter()
            .enumerate()
            .map(|(index, raw)| LabRecord::from_raw(LabId(index), raw))
            .collect();

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                tracing::warn!(lab = %record.name, id = %record.id, "Duplicate lab name in dataset");
            }
        }

        let visible = records.iter().map(|r| r.id).collect();
        Self { records, visible }
    }

    /// Returns the full dataset in source order.
    pub fn records(&self) -> &[LabRecord] {
        &self.records
    }

    /// Looks up a record by id.
    pub fn get(&self, id: LabId) -> Option<&LabRecord> {
        self.records.get(id.index()).filter(|r| r.id == id)
    }

    /// Returns the visible ids in display order.
    pub fn visible_ids(&self) -> &[LabId] {
        &self.visible
    }

    /// Returns the visible records in display order.
    pub fn visible_records(&self) -> Vec<&LabRecord> {
        self.visible
            .iter()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// Returns the position of `id` in the visible list.
    pub fn position_of(&self, id: LabId) -> Option<usize> {
        self.visible.iter().position(|visible| *visible == id)
    }

    pub fn is_visible(&self, id: LabId) -> bool {
        self.position_of(id).is_some()
    }

    /// Recomputes the visible subset and returns its size.
    pub fn apply(&mut self, filter: &FilterState) -> usize {
        self.visible = crate::filter::recompute(
            &self.records,
            &filter.active_region,
            &filter.search_term,
        )
        .into_iter()
        .map(|r| r.id)
        .collect();

        tracing::debug!(
            region = %filter.active_region.identifier(),
            term = %filter.search_term,
            visible = self.visible.len(),
            total = self.records.len(),
            "Recomputed visible labs"
        );
        self.visible.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
