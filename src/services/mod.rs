pub mod storage;

pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
