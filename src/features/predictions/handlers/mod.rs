mod prediction_handler;

pub use prediction_handler::*;
