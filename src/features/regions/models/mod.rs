mod classification;
mod region_range;
mod region_table;

pub use classification::{Classification, ResolvedRegion, UnresolvedPostalCode};
pub use region_range::RegionRange;
pub use region_table::{RegionTable, RegionTableError, EAST_FLANDERS_UPPER_BOUND};
