//! Logging facilities for Combofield.
//!
//! Combofield uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "combofield_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "combofield_core::signal";
    /// Combobox controller target.
    pub const COMBO: &str = "combofield::combo";
}
