//! Lab records and their identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::filter::SearchTerm;
use crate::region::Region;

/// Stable identifier assigned to a record when the dataset is loaded.
///
/// The value is the record's position in the source dataset, so ordering
/// by id is dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LabId(pub usize);

impl LabId {
    /// Returns the dataset position this id was assigned from.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lab-{}", self.0)
    }
}

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A record as it appears in the source dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLabRecord {
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    pub region: Region,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// One lab entry with display fields and optional coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LabRecord {
    pub id: LabId,
    pub name: String,
    pub location: String,
    pub description: String,
    pub region: Region,
    pub coordinates: Option<Coordinates>,
}

impl LabRecord {
    /// Builds a record from its raw form.
    ///
    /// Coordinates are kept only when both latitude and longitude are
    /// present; a half-specified position is dropped.
    pub fn from_raw(id: LabId, raw: RawLabRecord) -> Self {
        let coordinates = match (raw.latitude, raw.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates::new(latitude, longitude)),
            (None, None) => None,
            _ => {
                tracing::warn!(
                    lab = %raw.name,
                    "Record has only one coordinate; it will not be placed on the map"
                );
                None
            }
        };

        Self {
            id,
            name: raw.name,
            location: raw.location,
            description: raw.description,
            region: raw.region,
            coordinates,
        }
    }

    /// Returns whether the record can be placed on the map.
    pub fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }

    /// Returns whether the name, location or description contains `term`,
    /// ignoring case. An empty term matches every record.
    pub fn matches_term(&self, term: &SearchTerm) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.as_str();
        [&self.name, &self.location, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}
