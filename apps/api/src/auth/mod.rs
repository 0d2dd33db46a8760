pub mod handlers;
pub mod state_store;

pub use state_store::{InMemoryStateStore, RedisStateStore, StateStore};
