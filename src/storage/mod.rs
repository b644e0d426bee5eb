mod filesystem;
mod memory;
mod store;

pub use filesystem::FileKeyValueStore;
pub use memory::MemoryKeyValueStore;
pub use store::KeyValueStore;
