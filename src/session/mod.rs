/// Session lifecycle events
pub mod events;
/// Auth data storage abstraction
pub mod storage;

pub use events::SessionEvent;
pub use storage::{AuthStorage, FileStore, KeyValueStore, MemoryStore, Persistence, SessionState};
