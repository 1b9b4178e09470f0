use serde::{Deserialize, Deserializer, Serialize};

/// One locality of the Belgian ZIP code reference file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipCodeEntry {
    #[serde(deserialize_with = "zip_from_string_or_number")]
    pub zip: String,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

/// Reference exports carry the ZIP either as `"1000"` or as `1000`
fn zip_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawZip {
        Text(String),
        Number(u32),
    }

    Ok(match RawZip::deserialize(deserializer)? {
        RawZip::Text(s) => s.trim().to_string(),
        RawZip::Number(n) => format!("{:04}", n),
    })
}
