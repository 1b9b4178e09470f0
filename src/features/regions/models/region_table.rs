use std::fs;
use std::path::Path;

use thiserror::Error;

use super::RegionRange;
use crate::shared::constants::{POSTAL_CODE_MAX, POSTAL_CODE_MIN};

/// Upper bound of the East Flanders range in the built-in table.
///
/// Published variants of this table disagree (9992, 9993, 9999). 9999 closes
/// the national range; confirm against bpost data before relying on codes
/// above 9992, or ship a table file via `REGION_TABLE_PATH`.
pub const EAST_FLANDERS_UPPER_BOUND: u16 = 9999;

const BRUSSELS: &str = "Brussels";
const FLANDERS: &str = "Flanders";
const WALLONIA: &str = "Wallonia";

/// Built-in Belgian table. Order is the tie-break order.
const BELGIAN_RANGES: &[(u16, u16, &str, &str)] = &[
    (1000, 1299, "Brussels Capital Region", BRUSSELS),
    (1300, 1499, "Walloon Brabant", WALLONIA),
    (1500, 1999, "Flemish Brabant", FLANDERS),
    (2000, 2999, "Antwerp", FLANDERS),
    (3000, 3499, "Flemish Brabant", FLANDERS),
    (3500, 3999, "Limburg", FLANDERS),
    (4000, 4999, "Liège", WALLONIA),
    (5000, 5999, "Namur", WALLONIA),
    (6000, 6599, "Hainaut", WALLONIA),
    (6600, 6999, "Luxembourg", WALLONIA),
    (7000, 7999, "Hainaut", WALLONIA),
    (8000, 8999, "West Flanders", FLANDERS),
    (9000, EAST_FLANDERS_UPPER_BOUND, "East Flanders", FLANDERS),
];

#[derive(Debug, Error)]
pub enum RegionTableError {
    #[error("region table is empty")]
    Empty,

    #[error("range #{index} ({lower}-{upper}) has its lower bound above its upper bound")]
    InvertedRange { index: usize, lower: u16, upper: u16 },

    #[error("range #{index} ({lower}-{upper}) lies outside the postal code range {min}-{max}")]
    OutOfBounds {
        index: usize,
        lower: u16,
        upper: u16,
        min: u16,
        max: u16,
    },

    #[error("range #{index} has an empty region name")]
    MissingRegion { index: usize },

    #[error("failed to read region table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse region table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered, immutable set of postal-code ranges.
///
/// Lookups scan in insertion order and stop at the first range containing
/// the value, so overlapping entries are legal and resolved by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionTable {
    ranges: Vec<RegionRange>,
}

impl RegionTable {
    pub fn new(ranges: Vec<RegionRange>) -> Result<Self, RegionTableError> {
        if ranges.is_empty() {
            return Err(RegionTableError::Empty);
        }

        for (index, range) in ranges.iter().enumerate() {
            if range.lower > range.upper {
                return Err(RegionTableError::InvertedRange {
                    index,
                    lower: range.lower,
                    upper: range.upper,
                });
            }
            if range.lower < POSTAL_CODE_MIN || range.upper > POSTAL_CODE_MAX {
                return Err(RegionTableError::OutOfBounds {
                    index,
                    lower: range.lower,
                    upper: range.upper,
                    min: POSTAL_CODE_MIN,
                    max: POSTAL_CODE_MAX,
                });
            }
            if range.region.trim().is_empty() {
                return Err(RegionTableError::MissingRegion { index });
            }
        }

        Ok(Self { ranges })
    }

    /// The built-in provinces of Belgium with their language community
    pub fn belgian() -> Self {
        let ranges = BELGIAN_RANGES
            .iter()
            .map(|&(lower, upper, region, macro_region)| {
                RegionRange::new(lower, upper, region).with_macro_region(macro_region)
            })
            .collect();

        Self { ranges }
    }

    /// Parse a JSON array of `{lower, upper, region, macroRegion?}` objects
    pub fn from_json_str(json: &str) -> Result<Self, RegionTableError> {
        let ranges: Vec<RegionRange> = serde_json::from_str(json)?;
        Self::new(ranges)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RegionTableError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// First range, in table order, containing `value`
    pub fn find(&self, value: u16) -> Option<&RegionRange> {
        self.ranges.iter().find(|range| range.contains(value))
    }

    /// Index pairs `(earlier, later)` of ranges sharing at least one value.
    /// The later range never wins for the shared values.
    pub fn overlaps(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.ranges.iter().enumerate() {
            for (j, b) in self.ranges.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    pub fn ranges(&self) -> &[RegionRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::belgian()
    }
}
