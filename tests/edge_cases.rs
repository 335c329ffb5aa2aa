#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for the registry: boundary inputs, error scenarios,
//! and identifier collisions.

use std::collections::HashMap;
use std::io::Write;

use packet_registry::{
    Direction, MessageEntry, MessageRegistry, RegistryError, UNRESOLVED_ID,
};
use tempfile::NamedTempFile;

fn table(pairs: &[(&str, &[u16])]) -> HashMap<String, Vec<u16>> {
    pairs
        .iter()
        .map(|(hash, ids)| (hash.to_string(), ids.to_vec()))
        .collect()
}

// ============================================================================
// LOAD ERROR SCENARIOS
// ============================================================================

#[test]
fn missing_file_is_an_io_error_and_clears_the_store() {
    let mut registry: MessageRegistry = MessageRegistry::new(Direction::Incoming, "Incoming");
    registry.add_or_update(MessageEntry::resolved(1, Direction::Incoming, "", "Stale"));

    let empty: HashMap<String, Vec<u16>> = HashMap::new();
    let result = registry.load(&empty, "/no/such/path/messages.ini");
    assert!(matches!(result, Err(RegistryError::Io(_))));

    // Load clears before reading; a failed read leaves the store empty,
    // which is the documented non-atomic contract.
    assert!(registry.is_empty());
    assert!(registry.get_by_identifier("Stale").is_none());
}

#[test]
fn empty_file_loads_an_empty_registry() {
    let file = NamedTempFile::new().unwrap();
    let mut registry: MessageRegistry = MessageRegistry::new(Direction::Incoming, "Incoming");
    registry.load(&table(&[]), file.path()).unwrap();
    assert!(registry.is_empty());
}

#[test]
fn file_with_only_foreign_sections_loads_nothing() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[Outgoing]\nPong = Pong\n[Meta]\nVersion = 1\n").unwrap();

    let mut registry: MessageRegistry = MessageRegistry::new(Direction::Incoming, "Incoming");
    registry
        .load(&table(&[("PongMessageComposer", &[1])]), file.path())
        .unwrap();
    assert!(registry.is_empty());
    assert!(registry.get_by_identifier("Pong").is_none());
}

// ============================================================================
// FORMAT BOUNDARIES
// ============================================================================

#[test]
fn section_header_match_is_exact() {
    let mut registry: MessageRegistry = MessageRegistry::new(Direction::Incoming, "Incoming");
    // Trailing space after the bracket means the line is not this
    // registry's header, so the following entries are never entered.
    registry.load_from_str(
        &table(&[("PingMessageEvent", &[1])]),
        "[Incoming] \nPing = Ping\n",
    );
    assert!(registry.get_by_identifier("Ping").is_none());

    registry.load_from_str(
        &table(&[("PingMessageEvent", &[1])]),
        "[incoming]\nPing = Ping\n",
    );
    assert!(registry.get_by_identifier("Ping").is_none(), "section names are case-sensitive");
}

#[test]
fn entry_lines_are_trimmed_around_the_first_equals() {
    let mut registry: MessageRegistry = MessageRegistry::new(Direction::Incoming, "Incoming");
    registry.load_from_str(
        &table(&[("PingMessageEvent", &[5])]),
        "[Incoming]\n   Ping   =   Ping   \n",
    );
    assert_eq!(registry.get_by_identifier("Ping").unwrap().id, 5);
}

#[test]
fn split_happens_on_the_first_equals_only() {
    // "A = B = C" declares name "A" with suffix "B = C".
    let mut registry: MessageRegistry = MessageRegistry::new(Direction::Incoming, "Incoming");
    registry.load_from_str(
        &table(&[("B = CMessageEvent", &[9])]),
        "[Incoming]\nA = B = C\n",
    );
    assert_eq!(registry.get_by_identifier("A").unwrap().id, 9);
}

#[test]
fn blank_lines_are_separators() {
    let mut registry: MessageRegistry = MessageRegistry::new(Direction::Incoming, "Incoming");
    registry.load_from_str(
        &table(&[("PingMessageEvent", &[1]), ("ChatMessageEvent", &[2])]),
        "[Incoming]\n\nPing = Ping\n\n\nChat = Chat\n",
    );
    assert_eq!(registry.len(), 2);
}

// ============================================================================
// IDENTIFIER COLLISIONS
// ============================================================================

#[test]
fn name_matching_a_foreign_hash_resolves_to_the_hash_entry() {
    let mut registry: MessageRegistry = MessageRegistry::new(Direction::Incoming, "Incoming");
    registry.load_from_str(
        &table(&[
            ("PingMessageEvent", &[1]),
            ("TrapMessageEvent", &[2]),
        ]),
        // Second line names an entry literally "PingMessageEvent".
        "[Incoming]\nPing = Ping\nPingMessageEvent = Trap\n",
    );

    let hit = registry.get_by_identifier("PingMessageEvent").unwrap();
    assert_eq!(hit.id, 1, "hash index wins over name index");
    // The shadowed entry is still reachable by id and hash.
    assert_eq!(registry.get_by_id(2).unwrap().hash, "TrapMessageEvent");
    assert_eq!(registry.get_by_identifier("TrapMessageEvent").unwrap().id, 2);
}

// ============================================================================
// MUTATION BOUNDARIES
// ============================================================================

#[test]
fn removing_an_entry_with_partial_keys_only_touches_those_keys() {
    let mut registry: MessageRegistry = MessageRegistry::new(Direction::Incoming, "Incoming");
    registry.add_or_update(MessageEntry::resolved(1, Direction::Incoming, "", "NameOnly"));
    registry.add_or_update(MessageEntry::resolved(2, Direction::Incoming, "HashOnlyMessageEvent", ""));

    let name_only = registry.get_by_id(1).unwrap();
    registry.remove(&name_only);
    assert!(registry.get_by_id(1).is_none());
    assert!(registry.get_by_identifier("NameOnly").is_none());
    // The unrelated entry is untouched.
    assert!(registry.get_by_id(2).is_some());

    let hash_only = registry.get_by_id(2).unwrap();
    registry.remove(&hash_only);
    assert!(registry.get_by_id(2).is_none());
    assert!(registry.get_by_identifier("HashOnlyMessageEvent").is_none());
}

#[test]
fn removing_an_unresolved_entry_never_disturbs_resolved_ids() {
    let mut registry: MessageRegistry = MessageRegistry::new(Direction::Incoming, "Incoming");
    registry.add_or_update(MessageEntry::unresolved(Direction::Incoming, "", "Ghost"));
    registry.add_or_update(MessageEntry::resolved(1, Direction::Incoming, "", "Real"));

    let ghost = registry.get_by_identifier("Ghost").unwrap();
    assert_eq!(ghost.id, UNRESOLVED_ID);
    registry.remove(&ghost);

    assert!(registry.get_by_identifier("Ghost").is_none());
    assert!(registry.get_by_id(1).is_some());
}

#[test]
fn add_after_load_respects_existing_mappings() {
    let mut registry: MessageRegistry = MessageRegistry::new(Direction::Incoming, "Incoming");
    registry.load_from_str(
        &table(&[("PingMessageEvent", &[4000])]),
        "[Incoming]\nPing = Ping\n",
    );

    registry.add_or_update(MessageEntry::resolved(
        4000,
        Direction::Incoming,
        "ImpostorMessageEvent",
        "Impostor",
    ));

    // The loaded entry keeps id 4000; the newcomer gets its other keys.
    assert_eq!(registry.get_by_id(4000).unwrap().name, "Ping");
    assert_eq!(registry.get_by_identifier("Impostor").unwrap().hash, "ImpostorMessageEvent");
}

#[test]
fn sentinel_id_is_never_occupied() {
    let mut registry: MessageRegistry = MessageRegistry::new(Direction::Outgoing, "Outgoing");
    registry.add_or_update(MessageEntry::unresolved(Direction::Outgoing, "", "A"));
    registry.add_or_update(MessageEntry::unresolved(Direction::Outgoing, "", "B"));

    assert!(registry.get_by_id(UNRESOLVED_ID).is_none());
    assert_eq!(registry.len(), 0);
    // Both unresolved entries still answer by name.
    assert!(registry.get_by_identifier("A").is_some());
    assert!(registry.get_by_identifier("B").is_some());
}
