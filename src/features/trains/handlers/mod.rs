pub mod train_handler;

pub use train_handler::*;
