//! # Definition Loader
//!
//! (Re)populates a registry from the shared, build-independent definition
//! file and a per-build hash table.
//!
//! ## File format
//! Line-oriented text. `[SectionName]` opens a section; entry lines inside
//! the registry's own section have the shape `name = hashSuffix` (split on
//! the first `=`, both sides trimmed). Lines in other sections are skipped
//! entirely. No escaping, comments, or multi-line values.
//!
//! ## Resolution
//! Each declared suffix is tagged with the registry direction and looked
//! up in the [`HashResolver`]. Exactly one candidate id means resolved;
//! zero or several mean unresolved — ambiguity means don't guess, the
//! entry keeps the sentinel id and stays reachable by name only.
//!
//! ## Malformed lines
//! Blank lines are separators. Any other non-header line without an `=`
//! is skipped with a diagnostic; one bad build mapping must not block the
//! rest of the registry.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::Result;
use crate::registry::entry::{MessageEntry, UNRESOLVED_ID};
use crate::registry::slots::FieldSlots;
use crate::registry::store::MessageRegistry;
use crate::resolver::HashResolver;

impl<S: FieldSlots> MessageRegistry<S> {
    /// Rebuild the registry from the definition file at `path`.
    ///
    /// This is a full replace, not a merge: all three indices and every
    /// slot are cleared before parsing begins. A missing or unreadable
    /// file surfaces as [`RegistryError::Io`](crate::RegistryError::Io)
    /// with the registry left cleared; hot-reloaders that must never
    /// expose that window should go through
    /// [`SharedRegistry`](crate::registry::shared::SharedRegistry).
    pub fn load(&mut self, resolver: &impl HashResolver, path: impl AsRef<Path>) -> Result<()> {
        self.clear();
        let contents = fs::read_to_string(path.as_ref())?;
        self.parse(resolver, &contents);
        Ok(())
    }

    /// Rebuild the registry from in-memory definition text.
    ///
    /// Same semantics as [`load`](Self::load) without the file read.
    pub fn load_from_str(&mut self, resolver: &impl HashResolver, text: &str) {
        self.clear();
        self.parse(resolver, text);
    }

    fn parse(&mut self, resolver: &impl HashResolver, text: &str) {
        let mut in_section = false;
        let mut declared = 0usize;
        let mut resolved = 0usize;
        let mut skipped = 0usize;

        for (number, line) in text.lines().enumerate() {
            if line.starts_with('[') && line.ends_with(']') {
                in_section = line.len() >= 2 && line[1..line.len() - 1] == self.section;
                continue;
            }
            if !in_section || line.trim().is_empty() {
                continue;
            }
            let Some((name, suffix)) = line.split_once('=') else {
                warn!(
                    section = %self.section,
                    line = number + 1,
                    "Skipping malformed definition line (no '=' separator)"
                );
                skipped += 1;
                continue;
            };
            let name = name.trim();
            let hash = format!("{}{}", suffix.trim(), self.direction.tag());
            declared += 1;

            let id = match resolver.candidates(&hash) {
                Some(&[id]) => id,
                _ => UNRESOLVED_ID,
            };

            let entry = Arc::new(MessageEntry {
                id,
                direction: self.direction,
                hash: hash.clone(),
                name: name.to_string(),
            });

            if entry.is_resolved() {
                resolved += 1;
                // First declaration of a hash owns the hash mapping; the
                // id mapping follows the latest declaration.
                self.by_hash.entry(hash).or_insert_with(|| Arc::clone(&entry));
                self.by_id.insert(id, Arc::clone(&entry));
            }
            // Every declared name stays queryable, resolved or not, so
            // tooling keeps working across client builds where the id has
            // not been recovered yet. Anonymous entries skip the name
            // index and the slots.
            if !name.is_empty() {
                self.by_name.insert(name.to_string(), Arc::clone(&entry));
                self.slots.bind(name, &entry);
            }
        }

        debug!(
            section = %self.section,
            direction = %self.direction,
            declared,
            resolved,
            skipped,
            "Definition file loaded"
        );
    }
}
