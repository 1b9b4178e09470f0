use serde::{Deserialize, Serialize};

/// One inclusive postal-code range mapped to a province and, optionally,
/// the macro-region (language community) it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionRange {
    pub lower: u16,
    pub upper: u16,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub macro_region: Option<String>,
}

impl RegionRange {
    pub fn new(lower: u16, upper: u16, region: impl Into<String>) -> Self {
        Self {
            lower,
            upper,
            region: region.into(),
            macro_region: None,
        }
    }

    pub fn with_macro_region(mut self, macro_region: impl Into<String>) -> Self {
        self.macro_region = Some(macro_region.into());
        self
    }

    /// Both bounds are inclusive
    #[inline]
    pub fn contains(&self, value: u16) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn overlaps(&self, other: &RegionRange) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let range = RegionRange::new(1000, 1299, "Brussels Capital Region");
        assert!(range.contains(1000));
        assert!(range.contains(1299));
        assert!(!range.contains(999));
        assert!(!range.contains(1300));
    }

    #[test]
    fn test_overlaps() {
        let a = RegionRange::new(1000, 2000, "A");
        let b = RegionRange::new(1500, 2500, "B");
        let c = RegionRange::new(2001, 3000, "C");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
    }

    #[test]
    fn test_deserialize_without_macro_region() {
        let range: RegionRange =
            serde_json::from_str(r#"{"lower": 1000, "upper": 1299, "region": "Brussels"}"#)
                .unwrap();
        assert_eq!(range, RegionRange::new(1000, 1299, "Brussels"));
    }
}
