mod train;

pub use train::Train;
