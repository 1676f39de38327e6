pub mod batch;
pub mod decoder;
pub mod event;
