// Repositories module - data access layer

pub mod seed;
pub mod storage;

pub use storage::{MemStorage, Storage};
