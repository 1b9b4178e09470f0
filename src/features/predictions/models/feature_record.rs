use serde::Serialize;

/// One row of model input.
///
/// Field names and categorical spellings match the training data; fields a
/// model was not trained on stay `None` and are left out of the payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRecord {
    pub zip_code: String,
    pub total_area_sqm: f64,
    pub nbr_bedrooms: u32,
    pub construction_year: i32,
    pub state_building: String,
    pub province: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heating_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terrace_sqm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub garden_sqm: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fl_furnished: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fl_double_glazing: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fl_terrace: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fl_floodzone: Option<u8>,
}

/// 0/1 encoding used for every `fl_*` feature
pub fn flag(value: bool) -> u8 {
    u8::from(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_features_are_not_serialized() {
        let record = FeatureRecord {
            zip_code: "1000".to_string(),
            total_area_sqm: 75.0,
            nbr_bedrooms: 2,
            construction_year: 2000,
            state_building: "GOOD".to_string(),
            province: "BRUSSELS CAPITAL REGION".to_string(),
            region: None,
            heating_type: None,
            latitude: None,
            longitude: None,
            terrace_sqm: None,
            garden_sqm: None,
            fl_furnished: Some(flag(false)),
            fl_double_glazing: None,
            fl_terrace: None,
            fl_floodzone: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object["fl_furnished"], 0);
        assert!(!object.contains_key("region"));
        assert!(!object.contains_key("garden_sqm"));
    }
}
