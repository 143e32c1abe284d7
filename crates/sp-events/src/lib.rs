pub mod bus;
pub mod types;

pub use crate::bus::{ListenerBus, ListenerId};
pub use crate::types::{EventRecord, EventSource};
