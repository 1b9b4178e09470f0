use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::predictions::models::FeatureRecord;

/// A trained regression model, seen as a black box.
///
/// Returns the raw model output; log-target inversion is applied by the caller.
#[async_trait]
pub trait PricePredictor: Send + Sync {
    async fn predict(&self, record: &FeatureRecord) -> Result<f64>;
}
