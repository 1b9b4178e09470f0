mod feature_record;
mod model_profile;
mod property;

pub use feature_record::{flag, FeatureRecord};
pub use model_profile::{ModelMetrics, ModelProfile, APARTMENT_PROFILE, HOUSE_PROFILE};
pub use property::{BuildingState, PropertyType};
