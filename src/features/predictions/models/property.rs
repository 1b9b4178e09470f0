use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of property; each kind is priced by its own model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Apartment,
    House,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::Apartment => write!(f, "apartment"),
            PropertyType::House => write!(f, "house"),
        }
    }
}

/// State of the building, spelled the way the models were trained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BuildingState {
    #[serde(rename = "NEW")]
    New,
    #[serde(rename = "GOOD")]
    Good,
    #[serde(rename = "JUST RENOVATED", alias = "JUST_RENOVATED")]
    JustRenovated,
    #[serde(rename = "TO RENOVATE", alias = "TO_RENOVATE")]
    ToRenovate,
    #[serde(rename = "TO RESTORE", alias = "TO_RESTORE")]
    ToRestore,
    #[serde(rename = "OTHER")]
    Other,
}

impl BuildingState {
    pub fn as_feature(&self) -> &'static str {
        match self {
            BuildingState::New => "NEW",
            BuildingState::Good => "GOOD",
            BuildingState::JustRenovated => "JUST RENOVATED",
            BuildingState::ToRenovate => "TO RENOVATE",
            BuildingState::ToRestore => "TO RESTORE",
            BuildingState::Other => "OTHER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_state_accepts_spaces_and_underscores() {
        let state: BuildingState = serde_json::from_str(r#""JUST RENOVATED""#).unwrap();
        assert_eq!(state, BuildingState::JustRenovated);

        let state: BuildingState = serde_json::from_str(r#""TO_RESTORE""#).unwrap();
        assert_eq!(state, BuildingState::ToRestore);
        assert_eq!(state.as_feature(), "TO RESTORE");
    }

    #[test]
    fn test_property_type_serde() {
        let kind: PropertyType = serde_json::from_str(r#""house""#).unwrap();
        assert_eq!(kind, PropertyType::House);
        assert_eq!(serde_json::to_string(&PropertyType::Apartment).unwrap(), r#""apartment""#);
        assert_eq!(PropertyType::House.to_string(), "house");
    }
}
