//! Host text field contract.
//!
//! The combobox augments an existing single-line text entry owned by the
//! host application. The host adapts its input element to [`TextEntry`];
//! the combobox reads and writes the value, requests focus, and subscribes
//! to the field's signals. It never creates or destroys the field.

use crate::events::FieldSignals;

/// What kind of input control the host element is.
///
/// Only single-line text-entry-capable kinds ([`Text`](EntryKind::Text) and
/// [`Search`](EntryKind::Search)) can back a combobox; construction fails
/// for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A plain single-line text input.
    Text,
    /// A single-line search input.
    Search,
    /// A multi-line text area.
    MultiLine,
    /// Any other control (button, checkbox, ...).
    Other,
}

impl EntryKind {
    /// Whether a combobox may be attached to this kind of control.
    pub fn is_combobox_capable(&self) -> bool {
        matches!(self, Self::Text | Self::Search)
    }

    /// Display name used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Search => "search",
            Self::MultiLine => "multi-line",
            Self::Other => "other",
        }
    }
}

/// Geometry of the host field, handed to the presenter's positioning pass.
///
/// All values are in the host's own coordinate space; the combobox never
/// interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldMetrics {
    /// Left edge of the field.
    pub x: f32,
    /// Top edge of the field.
    pub y: f32,
    /// Outer width of the field.
    pub width: f32,
    /// Outer height of the field.
    pub height: f32,
    /// Font size, so decorations can match the field's text scale.
    pub font_size: f32,
}

/// The host text field the combobox is attached to.
///
/// Methods take `&self`: implementations are shared behind `Arc` with the
/// host runtime and are expected to manage interior mutability themselves
/// (the host element they wrap already does).
pub trait TextEntry: Send + Sync {
    /// What kind of control this is. Checked once at construction.
    fn kind(&self) -> EntryKind;

    /// The field's current text.
    fn value(&self) -> String;

    /// Overwrite the field's text.
    ///
    /// The combobox calls this only when a selection is committed.
    fn set_value(&self, value: &str);

    /// Move input focus to the field.
    fn focus(&self);

    /// Current geometry, for the presenter's positioning pass.
    fn metrics(&self) -> FieldMetrics {
        FieldMetrics::default()
    }

    /// The signal bundle the field emits on.
    fn events(&self) -> &FieldSignals;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combobox_capable_kinds() {
        assert!(EntryKind::Text.is_combobox_capable());
        assert!(EntryKind::Search.is_combobox_capable());
        assert!(!EntryKind::MultiLine.is_combobox_capable());
        assert!(!EntryKind::Other.is_combobox_capable());
    }
}
