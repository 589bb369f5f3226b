mod train_dto;

pub use train_dto::{CreateTrainDto, TrainResponseDto};
