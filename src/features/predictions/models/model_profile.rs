use super::PropertyType;

/// Hold-out accuracy of a trained model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelMetrics {
    pub r_squared: f64,
    /// Mean absolute error, in euros
    pub mae: f64,
    /// Median absolute error, in euros
    pub median_ae: f64,
}

/// Static facts about the model serving one property type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelProfile {
    pub property_type: PropertyType,
    pub metrics: ModelMetrics,
    /// The model predicts `ln(1 + price)` and its output must go through `expm1`
    pub log_target: bool,
}

pub const APARTMENT_PROFILE: ModelProfile = ModelProfile {
    property_type: PropertyType::Apartment,
    metrics: ModelMetrics {
        r_squared: 0.7078,
        mae: 38692.80,
        median_ae: 25947.45,
    },
    log_target: true,
};

pub const HOUSE_PROFILE: ModelProfile = ModelProfile {
    property_type: PropertyType::House,
    metrics: ModelMetrics {
        r_squared: 0.7352,
        mae: 45213.67,
        median_ae: 31548.32,
    },
    log_target: false,
};

impl ModelProfile {
    pub fn for_property(property_type: PropertyType) -> Self {
        match property_type {
            PropertyType::Apartment => APARTMENT_PROFILE,
            PropertyType::House => HOUSE_PROFILE,
        }
    }

    /// Convert a raw model output to a price in euros
    pub fn to_price(&self, raw: f64) -> f64 {
        if self.log_target {
            raw.exp_m1()
        } else {
            raw
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_property() {
        assert_eq!(
            ModelProfile::for_property(PropertyType::Apartment),
            APARTMENT_PROFILE
        );
        assert_eq!(ModelProfile::for_property(PropertyType::House), HOUSE_PROFILE);
    }

    #[test]
    fn test_to_price_inverts_log_target() {
        let raw = 250_000f64.ln_1p();
        let price = APARTMENT_PROFILE.to_price(raw);
        assert!((price - 250_000.0).abs() < 1e-6);
    }

    #[test]
    fn test_to_price_passes_raw_target_through() {
        assert_eq!(HOUSE_PROFILE.to_price(325_000.0), 325_000.0);
    }
}
