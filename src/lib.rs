//! # packet-registry
//!
//! Message-identifier registry core for reverse-engineered game
//! protocols.
//!
//! A protocol message has three names: the numeric id the wire uses, the
//! symbolic name tool authors write, and a structural hash that survives
//! the id churn between client builds. This crate keeps the three in sync
//! behind one lookup structure so interception and synthesis tooling can
//! translate freely between them.
//!
//! ## Components
//! - [`MessageRegistry`]: three synchronized indices (id, name, hash)
//!   over shared [`MessageEntry`] values, one registry per direction
//! - Definition loader: section-scoped `name = hashSuffix` text files,
//!   resolved against a per-build [`HashResolver`] table
//! - [`message_slots!`]: fixed named accessors for well-known messages
//! - [`SharedRegistry`]: atomic snapshot publication for hot reloads
//! - [`RegistryConfig`]: TOML-backed settings for the file location and
//!   section names
//!
//! ## Example
//! ```
//! use std::collections::HashMap;
//! use packet_registry::{Direction, MessageRegistry};
//!
//! // Per-build table from an external hash resolver.
//! let table: HashMap<String, Vec<u16>> =
//!     HashMap::from([("PingMessageEvent".to_string(), vec![4000])]);
//!
//! let mut incoming: MessageRegistry = MessageRegistry::new(Direction::Incoming, "Incoming");
//! incoming.load_from_str(&table, "[Incoming]\nPing = Ping\n");
//!
//! assert_eq!(incoming.name_of(4000), Some("Ping"));
//! assert_eq!(incoming.get_by_identifier("Ping").unwrap().id, 4000);
//! ```
//!
//! ## Unresolved entries
//! A declared name whose hash has zero or several candidate ids in the
//! current build is the expected, common case — it stays queryable by
//! name with the [`UNRESOLVED_ID`] sentinel and never aborts a load.

pub mod config;
pub mod error;
pub mod registry;
pub mod resolver;

pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use registry::{
    Direction, FieldSlots, MessageEntry, MessageRegistry, NoSlots, SharedRegistry, UNRESOLVED_ID,
};
pub use resolver::HashResolver;
