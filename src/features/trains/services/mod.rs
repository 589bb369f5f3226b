mod train_service;

pub use train_service::TrainService;
