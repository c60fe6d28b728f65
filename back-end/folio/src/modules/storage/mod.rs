pub mod kv;
pub mod memory;

pub use kv::{KvConfig, KvError, KvStore, RocksDbKvStore};
pub use memory::MemoryKvStore;
