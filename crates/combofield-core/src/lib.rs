//! Core systems for Combofield.
//!
//! This crate provides the foundation the combobox controller is wired on:
//!
//! - **Signal/Slot System**: Type-safe notification between the host's input
//!   surfaces and the controller
//! - **Logging targets**: `tracing` target constants for filtering
//!
//! Dispatch is synchronous and single-threaded: a slot runs to completion on
//! the emitting thread before `emit` returns, and emissions never interleave
//! for a given signal. This matches the cooperative event model of the UI
//! hosts the combobox integrates with, where the runtime serializes event
//! delivery and handlers never suspend.
//!
//! # Signal/Slot Example
//!
//! ```
//! use combofield_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};
