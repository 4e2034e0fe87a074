//! Regions and the region filter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker color for regions outside the fixed set.
pub const DEFAULT_REGION_COLOR: &str = "#666666";

static KNOWN_REGIONS: [Region; 4] = [
    Region::Sudeste,
    Region::Sul,
    Region::Nordeste,
    Region::CentroOeste,
];

/// A coarse geographic grouping of labs.
///
/// Parsing is case-insensitive for the fixed set; any other identifier is
/// kept verbatim in [`Region::Other`] and compared exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Region {
    Sudeste,
    Sul,
    Nordeste,
    CentroOeste,
    Other(String),
}

impl Region {
    /// Parses a region identifier.
    pub fn parse(identifier: &str) -> Self {
        let trimmed = identifier.trim();
        KNOWN_REGIONS
            .iter()
            .find(|region| region.identifier().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| Region::Other(trimmed.to_string()))
    }

    /// Returns the canonical identifier, also used as the display name.
    pub fn identifier(&self) -> &str {
        match self {
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
            Region::Nordeste => "Nordeste",
            Region::CentroOeste => "Centro-Oeste",
            Region::Other(name) => name,
        }
    }

    /// Returns the marker fill color for this region.
    pub fn marker_color(&self) -> &'static str {
        match self {
            Region::Sudeste => "#e74c3c",
            Region::Sul => "#3498db",
            Region::Nordeste => "#f39c12",
            Region::CentroOeste => "#27ae60",
            Region::Other(_) => DEFAULT_REGION_COLOR,
        }
    }

    /// Returns the fixed set of regions, in filter-button order.
    pub fn known() -> &'static [Region] {
        &KNOWN_REGIONS
    }
}

impl From<String> for Region {
    fn from(value: String) -> Self {
        Region::parse(&value)
    }
}

impl From<Region> for String {
    fn from(value: Region) -> Self {
        value.identifier().to_string()
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Which regions are currently shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum RegionFilter {
    #[default]
    All,
    Only(Region),
}

impl RegionFilter {
    /// Parses a filter button identifier. `all`, `todos` and the empty
    /// string select every region.
    pub fn parse(identifier: &str) -> Self {
        let trimmed = identifier.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case("todos")
        {
            RegionFilter::All
        } else {
            RegionFilter::Only(Region::parse(trimmed))
        }
    }

    /// Returns whether a record in `region` passes this filter.
    pub fn admits(&self, region: &Region) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::Only(wanted) => wanted == region,
        }
    }

    /// Returns the identifier carried by the filter button.
    pub fn identifier(&self) -> &str {
        match self {
            RegionFilter::All => "all",
            RegionFilter::Only(region) => region.identifier(),
        }
    }

    /// Returns the filter buttons in display order, `All` first.
    pub fn buttons() -> Vec<RegionFilter> {
        std::iter::once(RegionFilter::All)
            .chain(Region::known().iter().cloned().map(RegionFilter::Only))
            .collect()
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionFilter::All => f.write_str("Todos"),
            RegionFilter::Only(region) => write!(f, "{region}"),
        }
    }
}
