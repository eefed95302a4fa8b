//! Signal/slot system for Combofield.
//!
//! This module provides a type-safe, Qt-inspired signal/slot mechanism. A
//! host surface (text field, toggle control, list surface) owns one signal
//! per event it reports; the combobox controller connects slots to them at
//! construction and disconnects them on disposal.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//!
//! # Dispatch Model
//!
//! Slots are invoked directly on the emitting thread, in connection order,
//! and `emit` returns only after every slot has run. There is no queuing and
//! no cross-thread hand-off: the UI hosts this crate targets deliver events
//! from a single dispatch loop, one at a time. `Signal` is still `Send +
//! Sync` so surfaces can be shared behind `Arc` without ceremony.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke.
    slot: Box<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked synchronously
/// with a reference to the provided arguments.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments.
///
/// # Example
///
/// ```
/// use combofield_core::Signal;
///
/// let text_changed = Signal::<String>::new();
///
/// let conn_id = text_changed.connect(|text| {
///     println!("Text changed to: {}", text);
/// });
///
/// text_changed.emit("Hello, World!".to_string());
///
/// text_changed.disconnect(conn_id);
/// ```
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot
    /// later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Box::new(slot),
        })
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false`
    /// otherwise.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` will do nothing. This is useful
    /// during initialization or batch updates to prevent cascading
    /// notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// If the signal is blocked, this does nothing. Slots run synchronously
    /// on the calling thread; `emit` returns after the last one completes.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "combofield_core::signal", "signal blocked, skipping emit");
            return;
        }

        let connections = self.connections.lock();
        tracing::trace!(target: "combofield_core::signal", connection_count = connections.len(), "emitting signal");

        for (_, conn) in connections.iter() {
            (conn.slot)(&args);
        }
    }
}
