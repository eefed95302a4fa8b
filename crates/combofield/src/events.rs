//! Input events and per-surface signal bundles.
//!
//! The combobox listens to three logical surfaces: the host text field, the
//! toggle control, and the list surface. Each surface owns one signal per
//! event it reports; the controller connects to them at construction and
//! disconnects on disposal.

use combofield_core::Signal;

/// The logical surface an input event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// The host text field.
    TextField,
    /// The toggle control that opens/closes the list.
    Toggle,
    /// The selectable list surface.
    List,
}

/// The keys the combobox interprets.
///
/// Anything else maps to [`Key::Other`] and is left to the host's default
/// handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Escape key.
    Escape,
    /// Enter/Return key.
    Enter,
    /// Space bar.
    Space,
    /// Tab key.
    Tab,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Any key the combobox does not interpret.
    Other,
}

impl Key {
    /// Map a DOM-style key name to a `Key`.
    ///
    /// Accepts both the standard names (`"Escape"`, `"ArrowUp"`, `" "`) and
    /// the legacy names older engines report (`"Esc"`, `"Up"`,
    /// `"Spacebar"`).
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Self::Escape,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Tab" => Self::Tab,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            _ => Self::Other,
        }
    }

    /// Whether this is one of the vertical arrow keys.
    pub fn is_arrow(&self) -> bool {
        matches!(self, Self::ArrowUp | Self::ArrowDown)
    }
}

/// Signals a host text field emits.
///
/// Owned by the [`TextEntry`](crate::TextEntry) implementation; the host
/// runtime emits them as the user interacts with the field.
#[derive(Default)]
pub struct FieldSignals {
    /// The field's text changed through user input. Carries the new text.
    pub text_changed: Signal<String>,
    /// The field lost focus.
    pub focus_out: Signal<()>,
    /// A key was pressed while the field had focus.
    pub key_down: Signal<Key>,
    /// A key was released while the field had focus.
    pub key_up: Signal<Key>,
}

impl FieldSignals {
    /// Create a fresh, unconnected bundle.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Signals a toggle control emits.
#[derive(Default)]
pub struct ToggleSignals {
    /// Pointer pressed down on the toggle.
    pub pressed: Signal<()>,
    /// Pointer released over the toggle.
    pub released: Signal<()>,
    /// The toggle was clicked (press + release).
    pub clicked: Signal<()>,
}

impl ToggleSignals {
    /// Create a fresh, unconnected bundle.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Signals a list surface emits.
#[derive(Default)]
pub struct ListSignals {
    /// An entry was clicked (`Some(key)`), or the surface itself was
    /// clicked outside any entry (`None`).
    pub clicked: Signal<Option<String>>,
    /// A key was pressed while the list had focus.
    pub key_down: Signal<Key>,
    /// A key was released while the list had focus.
    pub key_up: Signal<Key>,
    /// The list lost focus.
    pub focus_out: Signal<()>,
}

impl ListSignals {
    /// Create a fresh, unconnected bundle.
    pub fn new() -> Self {
        Self::default()
    }
}
