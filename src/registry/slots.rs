//! # Field Slots
//!
//! Optional named accessors over well-known entries: a registry subtype
//! declares a fixed slot set with [`message_slots!`](crate::message_slots)
//! and each slot tracks the name-indexed entry of the same name as it is
//! loaded, added, or removed.
//!
//! Slots are a derived view. They carry no invariants of their own and
//! their contents are always derivable from the name index. The binding
//! table is generated at compile time as a plain `match` — there is no
//! runtime name lookup to silently miss.

use std::sync::Arc;

use crate::registry::entry::MessageEntry;

/// A fixed set of named entry slots kept in sync with a registry's name
/// index.
///
/// Implementations are generated by [`message_slots!`](crate::message_slots);
/// a name with no matching slot is ignored.
pub trait FieldSlots {
    /// Bind `entry` into the slot named `name`, overwriting any previous
    /// binding. No-op when no such slot exists.
    fn bind(&mut self, name: &str, entry: &Arc<MessageEntry>);

    /// Clear the slot named `name`, if one exists.
    fn clear(&mut self, name: &str);

    /// Clear every slot.
    fn clear_all(&mut self);
}

/// Slot set with no slots, for registries that only need index lookups.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoSlots;

impl FieldSlots for NoSlots {
    fn bind(&mut self, _name: &str, _entry: &Arc<MessageEntry>) {}
    fn clear(&mut self, _name: &str) {}
    fn clear_all(&mut self) {}
}

/// Declare a fixed slot struct for well-known message names.
///
/// Each `"Name" => field` pair becomes a public
/// `Option<Arc<MessageEntry>>` field bound whenever an entry named
/// `"Name"` lands in the registry's name index.
///
/// ```
/// use packet_registry::{message_slots, Direction, MessageEntry, MessageRegistry};
///
/// message_slots! {
///     pub struct IncomingSlots {
///         "Ping" => ping,
///         "Chat" => chat,
///     }
/// }
///
/// let mut registry: MessageRegistry<IncomingSlots> =
///     MessageRegistry::new(Direction::Incoming, "Incoming");
/// registry.add_or_update(MessageEntry::resolved(
///     4000,
///     Direction::Incoming,
///     "PingMessageEvent",
///     "Ping",
/// ));
/// assert_eq!(registry.fields().ping.as_ref().map(|e| e.id), Some(4000));
/// assert!(registry.fields().chat.is_none());
/// ```
#[macro_export]
macro_rules! message_slots {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($slot:literal => $field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Default, Clone)]
        $vis struct $name {
            $(pub $field: ::std::option::Option<::std::sync::Arc<$crate::MessageEntry>>,)+
        }

        impl $crate::FieldSlots for $name {
            fn bind(&mut self, name: &str, entry: &::std::sync::Arc<$crate::MessageEntry>) {
                match name {
                    $($slot => self.$field = Some(::std::sync::Arc::clone(entry)),)+
                    _ => {}
                }
            }

            fn clear(&mut self, name: &str) {
                match name {
                    $($slot => self.$field = None,)+
                    _ => {}
                }
            }

            fn clear_all(&mut self) {
                $(self.$field = None;)+
            }
        }
    };
}
