//! The filter engine.
//!
//! A record is visible when it passes both the region filter and the text
//! query. Both filters always apply together; changing one never resets
//! the other.

use std::fmt;

use crate::record::LabRecord;
use crate::region::RegionFilter;

/// A normalized search query: trimmed and lowercased.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalizes raw input from the search box.
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The current region selection and search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub active_region: RegionFilter,
    pub search_term: SearchTerm,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether `record` passes both predicates.
    pub fn admits(&self, record: &LabRecord) -> bool {
        self.active_region.admits(&record.region) && record.matches_term(&self.search_term)
    }

    /// Returns whether neither filter restricts the dataset.
    pub fn is_unfiltered(&self) -> bool {
        self.active_region == RegionFilter::All && self.search_term.is_empty()
    }
}

/// Computes the visible subset of `dataset`, preserving dataset order.
pub fn recompute<'a>(
    dataset: &'a [LabRecord],
    active_region: &RegionFilter,
    search_term: &SearchTerm,
) -> Vec<&'a LabRecord> {
    dataset
        .iter()
        .filter(|record| active_region.admits(&record.region) && record.matches_term(search_term))
        .collect()
}
