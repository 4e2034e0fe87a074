//! List and map views over the visible records.
//!
//! Each view keeps the toolkit-independent half (what to show, which entry
//! maps to which record) and drives a backend for the toolkit half.

pub mod list;
pub mod map;

pub use list::*;
pub use map::*;

use crate::record::LabRecord;

/// A rendered surface showing the visible subset.
pub trait Viewport {
    /// Replaces everything shown with `visible`, in order.
    fn render(&mut self, visible: &[&LabRecord]);

    /// Brings `record` into focus. No-op by default.
    fn center_on(&mut self, _record: &LabRecord) {}

    /// Reacts to a change of the containing layout. No-op by default.
    fn resize(&mut self) {}
}
