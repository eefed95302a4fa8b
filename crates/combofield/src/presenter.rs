//! Decoration contracts: the toggle control, the list surface, and the
//! presenter that creates, positions, and destroys them.
//!
//! These are the combobox's passive collaborators. The controller decides
//! *when* the list is shown, hidden, or focused and *which* entry is
//! highlighted; everything visual -- element construction, pixel offsets,
//! scrolling the highlight into view -- lives behind these traits. The
//! controller never manipulates geometry itself.

use std::sync::Arc;

use crate::candidate::Candidate;
use crate::events::{ListSignals, ToggleSignals};
use crate::field::FieldMetrics;

/// The clickable control that opens/closes the list.
///
/// Created by the presenter at construction, destroyed at disposal. Shared
/// behind `Arc` like the host field, so methods take `&self`.
pub trait ToggleControl: Send + Sync {
    /// The label the toggle was created with.
    fn label(&self) -> String;

    /// The signal bundle the toggle emits on.
    fn events(&self) -> &ToggleSignals;
}

/// The selectable overlay presenting the sorted candidate set.
///
/// The surface always contains the full candidate set, in store order; the
/// combobox addresses entries by index. Highlight state lives here because
/// the host's list element owns it (hover can move it without the
/// controller's involvement), but only the controller triggers programmatic
/// moves.
pub trait ListSurface: Send + Sync {
    /// Index of the currently highlighted entry, if any.
    fn highlighted(&self) -> Option<usize>;

    /// Highlight the entry at `index`. Out-of-range indices are ignored.
    fn highlight(&self, index: usize);

    /// Key of the currently highlighted entry, if any.
    fn highlighted_key(&self) -> Option<String>;

    /// Mirror a field value into the surface: highlight the first entry
    /// whose key equals `value`, or clear the highlight if none matches.
    fn set_value(&self, value: &str);

    /// Move input focus to the surface.
    fn focus(&self);

    /// The signal bundle the surface emits on.
    fn events(&self) -> &ListSignals;
}

/// Creates, positions, shows/hides, and destroys the decoration elements.
///
/// The presenter owns all visual side effects. Show/hide requests are
/// idempotent from the controller's point of view: hiding an already hidden
/// list must be safe.
pub trait DecorationPresenter: Send {
    /// Create the toggle control with the given label and style class.
    fn create_toggle(&mut self, label: &str, class: &str) -> Arc<dyn ToggleControl>;

    /// Create the list surface over the full candidate set, showing
    /// `visible_rows` rows at a time. `class_prefix` namespaces the style
    /// classes of the surface and its entries. The surface starts hidden
    /// or visible at the presenter's discretion; the controller always
    /// requests an explicit hide before it finishes construction.
    fn create_list(
        &mut self,
        candidates: &[Candidate],
        visible_rows: usize,
        class_prefix: &str,
    ) -> Arc<dyn ListSurface>;

    /// Present the list surface.
    fn show_list(&mut self, list: &Arc<dyn ListSurface>);

    /// Hide the list surface.
    fn hide_list(&mut self, list: &Arc<dyn ListSurface>);

    /// Align the decorations with the host field. `button_inside` asks for
    /// the toggle to sit inside the field's right edge.
    fn position(
        &mut self,
        toggle: &Arc<dyn ToggleControl>,
        list: &Arc<dyn ListSurface>,
        metrics: &FieldMetrics,
        button_inside: bool,
    );

    /// Tear down the toggle control.
    fn destroy_toggle(&mut self, toggle: Arc<dyn ToggleControl>);

    /// Tear down the list surface.
    fn destroy_list(&mut self, list: Arc<dyn ListSurface>);
}
