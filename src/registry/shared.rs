//! # Shared Snapshots
//!
//! `load` on a bare [`MessageRegistry`] is clear-then-rebuild and not
//! atomic; a reader poking the store mid-load can see a partially built
//! state. This wrapper publishes complete, immutable snapshots instead:
//! readers clone an `Arc` under a short read lock, reloads build the next
//! registry off-line and swap it in with a single pointer write.

use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::registry::slots::{FieldSlots, NoSlots};
use crate::registry::store::MessageRegistry;
use crate::resolver::HashResolver;

/// Thread-safe holder of the current registry snapshot.
pub struct SharedRegistry<S: FieldSlots = NoSlots> {
    inner: RwLock<Arc<MessageRegistry<S>>>,
}

impl<S: FieldSlots> SharedRegistry<S> {
    /// Wrap an already-populated registry as the first snapshot.
    pub fn new(registry: MessageRegistry<S>) -> Self {
        Self {
            inner: RwLock::new(Arc::new(registry)),
        }
    }

    /// The current snapshot. Always a complete, consistent store.
    pub fn snapshot(&self) -> Result<Arc<MessageRegistry<S>>> {
        let guard = self.inner.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(Arc::clone(&guard))
    }

    /// Replace the published snapshot.
    pub fn publish(&self, registry: MessageRegistry<S>) -> Result<()> {
        let mut guard = self.inner.write().map_err(|_| RegistryError::LockPoisoned)?;
        *guard = Arc::new(registry);
        Ok(())
    }
}

impl<S: FieldSlots + Default> SharedRegistry<S> {
    /// Rebuild from the definition file and publish atomically.
    ///
    /// The fresh registry inherits the current snapshot's direction and
    /// section. On any load error the published snapshot is left
    /// untouched — readers never observe a partially-cleared store.
    pub fn reload(&self, resolver: &impl HashResolver, path: impl AsRef<Path>) -> Result<()> {
        let current = self.snapshot()?;
        let mut fresh: MessageRegistry<S> =
            MessageRegistry::new(current.direction(), current.section().to_string());
        fresh.load(resolver, path)?;

        debug!(
            section = current.section(),
            entries = fresh.len(),
            "Publishing reloaded registry snapshot"
        );
        self.publish(fresh)
    }
}
