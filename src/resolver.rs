//! # Hash Resolver Boundary
//!
//! The registry does not derive structural hashes itself; an external
//! process inspects the current client build and produces a table mapping
//! each direction-tagged hash to the wire ids sharing it. The loader only
//! borrows that data, read-only, for the duration of a load.

use std::collections::HashMap;

/// Read-only view of the current build's hash table.
///
/// Implemented for plain `HashMap<String, Vec<u16>>` so a resolver dump
/// can be fed to the loader directly; richer resolvers implement the
/// trait over their own storage.
pub trait HashResolver {
    /// Candidate wire ids sharing `hash` in the current build, or `None`
    /// when the hash is unknown.
    ///
    /// More than one candidate means the hash is ambiguous in this build;
    /// the loader treats that the same as unknown.
    fn candidates(&self, hash: &str) -> Option<&[u16]>;
}

impl HashResolver for HashMap<String, Vec<u16>> {
    fn candidates(&self, hash: &str) -> Option<&[u16]> {
        self.get(hash).map(Vec::as_slice)
    }
}

impl<T: HashResolver + ?Sized> HashResolver for &T {
    fn candidates(&self, hash: &str) -> Option<&[u16]> {
        (**self).candidates(hash)
    }
}
