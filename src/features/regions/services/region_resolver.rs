use std::sync::Arc;

use crate::features::regions::models::{Classification, RegionTable, ResolvedRegion};
use crate::shared::validation::POSTAL_CODE_REGEX;

/// Classifies Belgian postal codes against an injected region table.
///
/// The table is shared read-only, so one resolver can serve every request
/// concurrently.
#[derive(Debug, Clone)]
pub struct RegionResolver {
    table: Arc<RegionTable>,
}

impl RegionResolver {
    pub fn new(table: Arc<RegionTable>) -> Self {
        let overlaps = table.overlaps();
        for (earlier, later) in &overlaps {
            let ranges = table.ranges();
            tracing::warn!(
                "Region table ranges overlap: #{} {}-{} ({}) shadows #{} {}-{} ({})",
                earlier,
                ranges[*earlier].lower,
                ranges[*earlier].upper,
                ranges[*earlier].region,
                later,
                ranges[*later].lower,
                ranges[*later].upper,
                ranges[*later].region,
            );
        }

        Self { table }
    }

    /// Classify an already-trimmed postal code.
    ///
    /// Anything that is not exactly four ASCII digits, or that no range
    /// contains, is `Unresolved`.
    pub fn classify(&self, postal_code: &str) -> Classification {
        if !POSTAL_CODE_REGEX.is_match(postal_code) {
            return Classification::Unresolved;
        }

        let Ok(value) = postal_code.parse::<u16>() else {
            return Classification::Unresolved;
        };

        match self.table.find(value) {
            Some(range) => Classification::Resolved(ResolvedRegion {
                region: range.region.clone(),
                macro_region: range.macro_region.clone(),
            }),
            None => Classification::Unresolved,
        }
    }

    pub fn table(&self) -> &RegionTable {
        &self.table
    }
}
