use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for Belgian postal codes
    /// Exactly four ASCII digits, nothing else
    /// - Valid: "1000", "9999", "0999"
    /// - Invalid: "999", "10000", " 1000", "10a0", "+100"
    pub static ref POSTAL_CODE_REGEX: Regex = Regex::new(r"^[0-9]{4}$").unwrap();
}
