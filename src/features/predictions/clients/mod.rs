mod http_model_client;
mod price_predictor;

pub use http_model_client::HttpModelClient;
pub use price_predictor::PricePredictor;
