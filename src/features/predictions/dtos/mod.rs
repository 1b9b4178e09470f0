pub mod prediction_dto;

pub use prediction_dto::{
    ModelInfoDto, ModelMetricsDto, PredictionRequestDto, PredictionResponseDto,
};
