//! # Indexed Store
//!
//! Three synchronized mappings (by id, by name, by hash) over shared
//! message entries, enforcing one direction per store and add-if-missing
//! insertion.
//!
//! ## Index consistency
//! Every entry is stored once as an `Arc<MessageEntry>` and referenced
//! from whichever indices its populated fields allow: the id index skips
//! [`UNRESOLVED_ID`], the name and hash indices skip empty strings. A
//! lookup through any index therefore returns the identical logical entry.
//!
//! ## Concurrency
//! Single-threaded access model; `load` clears then rebuilds and is not
//! atomic with respect to concurrent readers. Callers that need hot
//! reloads should publish snapshots through
//! [`SharedRegistry`](crate::registry::shared::SharedRegistry) instead of
//! sharing a store directly.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{RegistryError, Result};
use crate::registry::entry::{Direction, MessageEntry};
use crate::registry::slots::{FieldSlots, NoSlots};

/// Registry of message identifiers for one travel direction.
///
/// `S` is the optional fixed slot set kept in sync with the name index;
/// see [`crate::message_slots`]. The default [`NoSlots`] makes the
/// projector a no-op.
#[derive(Debug, Clone)]
pub struct MessageRegistry<S: FieldSlots = NoSlots> {
    pub(crate) direction: Direction,
    pub(crate) section: String,
    pub(crate) by_id: HashMap<u16, Arc<MessageEntry>>,
    pub(crate) by_name: HashMap<String, Arc<MessageEntry>>,
    pub(crate) by_hash: HashMap<String, Arc<MessageEntry>>,
    pub(crate) slots: S,
}

impl<S: FieldSlots + Default> MessageRegistry<S> {
    /// Create an empty registry.
    ///
    /// `section` selects which group of the shared definition file this
    /// registry reads, e.g. `"Incoming"` or `"Outgoing"`.
    pub fn new(direction: Direction, section: impl Into<String>) -> Self {
        Self::with_capacity(direction, section, 0)
    }

    /// Create an empty registry pre-sized for `capacity` entries.
    pub fn with_capacity(direction: Direction, section: impl Into<String>, capacity: usize) -> Self {
        Self {
            direction,
            section: section.into(),
            by_id: HashMap::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
            by_hash: HashMap::with_capacity(capacity),
            slots: S::default(),
        }
    }

    /// Build a registry from a pre-resolved entry list, bypassing the
    /// definition-file format.
    ///
    /// Unlike [`add_or_update`](Self::add_or_update), conflicts here are
    /// hard errors: the caller handed us a supposedly consistent build
    /// snapshot, so a duplicate id or name means the snapshot is broken.
    /// Duplicate hashes keep the first mapping.
    pub fn from_entries(
        direction: Direction,
        section: impl Into<String>,
        entries: Vec<MessageEntry>,
    ) -> Result<Self> {
        let mut registry = Self::with_capacity(direction, section, entries.len());
        for mut entry in entries {
            entry.direction = direction;
            let entry = Arc::new(entry);

            if entry.is_resolved() {
                if registry.by_id.contains_key(&entry.id) {
                    return Err(RegistryError::DuplicateId(entry.id));
                }
                registry.by_id.insert(entry.id, Arc::clone(&entry));
            }
            if !entry.hash.is_empty() {
                registry
                    .by_hash
                    .entry(entry.hash.clone())
                    .or_insert_with(|| Arc::clone(&entry));
            }
            if !entry.name.is_empty() {
                if registry.by_name.contains_key(&entry.name) {
                    return Err(RegistryError::DuplicateName(entry.name.clone()));
                }
                registry.by_name.insert(entry.name.clone(), Arc::clone(&entry));
                registry.slots.bind(&entry.name, &entry);
            }
        }
        debug!(
            direction = %registry.direction,
            entries = registry.by_id.len(),
            "Registry built from entry list"
        );
        Ok(registry)
    }
}

impl<S: FieldSlots> MessageRegistry<S> {
    /// Number of entries reachable by id.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Definition-file section this registry reads.
    pub fn section(&self) -> &str {
        &self.section
    }

    /// The fixed slot set, for direct named access.
    pub fn fields(&self) -> &S {
        &self.slots
    }

    /// Look up an entry by wire id.
    pub fn get_by_id(&self, id: u16) -> Option<Arc<MessageEntry>> {
        self.by_id.get(&id).cloned()
    }

    /// Look up an entry by hash or name.
    ///
    /// The hash index is consulted first; a name that collides with some
    /// other entry's hash string resolves to the hash-indexed entry. This
    /// precedence is part of the contract, not an accident.
    pub fn get_by_identifier(&self, identifier: &str) -> Option<Arc<MessageEntry>> {
        if let Some(hashed) = self.by_hash.get(identifier) {
            return Some(Arc::clone(hashed));
        }
        self.by_name.get(identifier).cloned()
    }

    /// Name of the entry with the given id, if any.
    pub fn name_of(&self, id: u16) -> Option<&str> {
        self.by_id.get(&id).map(|entry| entry.name.as_str())
    }

    /// Hash of the entry with the given id, if any.
    pub fn hash_of(&self, id: u16) -> Option<&str> {
        self.by_id.get(&id).map(|entry| entry.hash.as_str())
    }

    /// Direction of the entry with the given id, if any.
    pub fn is_outgoing(&self, id: u16) -> Option<bool> {
        self.by_id.get(&id).map(|entry| entry.direction.is_outgoing())
    }

    /// Insert an entry into every index its populated fields allow.
    ///
    /// The entry's direction is forced to the registry's before insertion.
    /// Insertion is add-if-missing on all three indices — an existing id,
    /// name, or hash mapping is never replaced; callers needing
    /// replacement must [`remove`](Self::remove) first. Entries carrying
    /// [`UNRESOLVED_ID`] skip the id index.
    pub fn add_or_update(&mut self, mut entry: MessageEntry) {
        entry.direction = self.direction;
        let entry = Arc::new(entry);

        if entry.is_resolved() {
            self.by_id.entry(entry.id).or_insert_with(|| Arc::clone(&entry));
        }
        if !entry.name.is_empty() && !self.by_name.contains_key(&entry.name) {
            self.by_name.insert(entry.name.clone(), Arc::clone(&entry));
            // Slot follows the name index, so only a successful name
            // insertion rebinds it.
            self.slots.bind(&entry.name, &entry);
        }
        if !entry.hash.is_empty() {
            self.by_hash
                .entry(entry.hash.clone())
                .or_insert_with(|| Arc::clone(&entry));
        }
        trace!(id = entry.id, name = %entry.name, "Entry added");
    }

    /// Remove an entry's mappings from every index.
    ///
    /// Removal is key-based: the id, hash, and name mappings for the
    /// entry's populated fields are dropped regardless of which entry
    /// currently occupies them. A removed entry is unreachable through
    /// all of its populated keys afterwards.
    pub fn remove(&mut self, entry: &MessageEntry) {
        self.by_id.remove(&entry.id);
        if !entry.hash.is_empty() {
            self.by_hash.remove(&entry.hash);
        }
        if !entry.name.is_empty() {
            self.by_name.remove(&entry.name);
            self.slots.clear(&entry.name);
        }
        trace!(id = entry.id, name = %entry.name, "Entry removed");
    }

    /// Iterate over all entries reachable via the id index.
    ///
    /// Order is the id index's iteration order; insertion order is not
    /// guaranteed.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<MessageEntry>> {
        self.by_id.values()
    }

    pub(crate) fn clear(&mut self) {
        self.by_id.clear();
        self.by_name.clear();
        self.by_hash.clear();
        self.slots.clear_all();
    }
}

impl<'a, S: FieldSlots> IntoIterator for &'a MessageRegistry<S> {
    type Item = &'a Arc<MessageEntry>;
    type IntoIter = std::collections::hash_map::Values<'a, u16, Arc<MessageEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.by_id.values()
    }
}
