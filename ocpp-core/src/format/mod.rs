pub mod frame;
pub mod message;
pub mod timestamp;
