//! # Registry Components
//!
//! The message-identifier registry itself: the entry value type, the
//! three-way indexed store, the definition-file loader, the fixed field
//! slots, and the snapshot wrapper for shared use.
//!
//! ## Components
//! - **Entry**: one packet definition (id, direction, hash, name)
//! - **Store**: synchronized id/name/hash indices over shared entries
//! - **Loader**: section-scoped definition-file parsing and id resolution
//! - **Slots**: compile-time named accessors for well-known messages
//! - **Shared**: atomic snapshot publication for concurrent readers

pub mod entry;
pub mod loader;
pub mod shared;
pub mod slots;
pub mod store;

pub use entry::{Direction, MessageEntry, UNRESOLVED_ID};
pub use shared::SharedRegistry;
pub use slots::{FieldSlots, NoSlots};
pub use store::MessageRegistry;
