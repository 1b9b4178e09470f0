/// Lowest Belgian postal code
pub const POSTAL_CODE_MIN: u16 = 1000;

/// Highest Belgian postal code
pub const POSTAL_CODE_MAX: u16 = 9999;
