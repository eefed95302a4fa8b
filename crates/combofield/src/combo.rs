//! The combobox interaction core.
//!
//! [`ComboBox`] augments a host text field with combobox behavior: a toggle
//! control that reveals a scrollable selectable list, keyboard and pointer
//! navigation between the two surfaces, and synchronization of the field
//! value with the selected entry.
//!
//! The hard part is the interaction state machine: when the list is shown
//! or hidden, how focus moves between the field and the list without
//! spuriously closing the list, how keyboard input is interpreted per
//! surface, and how free-typed text is reconciled against the sorted
//! candidate set. All of that lives here; element construction and
//! geometry live behind the [`DecorationPresenter`] contract.
//!
//! # Event delivery
//!
//! Handlers run synchronously inside the host's dispatch loop and never
//! overlap: the host must deliver events one at a time and must not emit a
//! surface signal re-entrantly from inside `focus()`, `set_value()`, or a
//! presenter call. Focus side effects are expected to surface as ordinary
//! queued events on the next dispatch turn.
//!
//! # Example
//!
//! ```ignore
//! use combofield::{ComboBox, ComboOptions};
//!
//! let combo = ComboBox::new(
//!     field,                       // Arc<dyn TextEntry> from the host
//!     ["apple", "banana", "cherry"],
//!     ComboOptions::default(),
//!     presenter,                   // Box<dyn DecorationPresenter>
//! )?;
//!
//! // ... the host runtime drives the surfaces' signals ...
//!
//! combo.dispose()?;
//! ```

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::candidate::{CandidateSource, CandidateStore};
use crate::error::{Error, Result};
use crate::events::{Key, Surface};
use crate::field::TextEntry;
use crate::options::ComboOptions;
use crate::presenter::{DecorationPresenter, ListSurface, ToggleControl};

// ============================================================================
// Interaction State
// ============================================================================

/// The per-combobox interaction record.
///
/// Created at construction, mutated exclusively by the event handlers,
/// gone when the combobox is disposed. [`ComboBox::state`] hands out
/// snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionState {
    /// Whether the selectable list is currently presented.
    pub list_visible: bool,
    /// True while a gesture spanning two surfaces is in progress (pointer
    /// held on the toggle, or an arrow-driven hand-off from field to
    /// list), so the focus-out it causes is not misread as "user is done".
    pub suppress_blur_close: bool,
    /// The field's current authoritative value.
    pub committed_value: String,
}

// ============================================================================
// Subscriptions
// ============================================================================

/// The signal connections made at construction, held as a scoped resource.
///
/// Each entry knows how to disconnect itself; releasing the set guarantees
/// no handler fires after disposal.
struct Subscriptions {
    releasers: Vec<Box<dyn FnOnce() + Send>>,
}

impl Subscriptions {
    fn new() -> Self {
        Self {
            releasers: Vec::new(),
        }
    }

    fn add(&mut self, release: impl FnOnce() + Send + 'static) {
        self.releasers.push(Box::new(release));
    }

    fn release_all(&mut self) {
        for release in self.releasers.drain(..) {
            release();
        }
    }
}

// ============================================================================
// Controller internals
// ============================================================================

struct ComboInner {
    state: InteractionState,
    store: CandidateStore,
    field: Arc<dyn TextEntry>,
    toggle: Arc<dyn ToggleControl>,
    list: Arc<dyn ListSurface>,
    presenter: Box<dyn DecorationPresenter>,
    disposed: bool,
}

impl ComboInner {
    /// Present the list, mirroring the field's current value into it first
    /// so focus-follow selection has a reference point.
    ///
    /// Idempotent: opening an already open list only re-mirrors the value.
    fn open_list(&mut self) {
        tracing::trace!(target: "combofield::combo", "opening list");
        self.list.set_value(&self.field.value());
        self.presenter.show_list(&self.list);
        self.state.list_visible = true;
    }

    /// Hide the list, committing `value` into the field first if given.
    ///
    /// This is the sole path by which the combobox writes the field.
    /// Always succeeds; safe to call when already closed.
    fn close_list(&mut self, value: Option<&str>) {
        tracing::trace!(target: "combofield::combo", commit = value.is_some(), "closing list");
        if let Some(value) = value {
            self.field.set_value(value);
            self.state.committed_value = value.to_string();
        }
        self.presenter.hide_list(&self.list);
        self.state.list_visible = false;
    }

    fn begin_interaction(&mut self) {
        self.state.suppress_blur_close = true;
    }

    fn end_interaction(&mut self) {
        self.state.suppress_blur_close = false;
    }

    fn on_key_down(&mut self, surface: Surface, key: Key) {
        // Escape bails out from either surface.
        if key == Key::Escape {
            self.close_list(None);
            self.field.focus();
            return;
        }

        match surface {
            Surface::List => match key {
                Key::Enter | Key::Space => {
                    let selected = self.list.highlighted_key();
                    self.close_list(selected.as_deref());
                    self.field.focus();
                }
                Key::Tab => {
                    // Tab never traverses out of the list; it hands focus
                    // back to the field.
                    self.close_list(None);
                    self.field.focus();
                }
                // Navigating past the top edge exits the list.
                Key::ArrowUp if self.list.highlighted() == Some(0) => {
                    self.close_list(None);
                    self.field.focus();
                }
                // Symmetric exit at the bottom edge.
                Key::ArrowDown if self.list.highlighted() == Some(self.store.last_index()) => {
                    self.close_list(None);
                    self.field.focus();
                }
                _ => {}
            },
            Surface::TextField => match key {
                Key::ArrowUp => {
                    self.begin_interaction();
                    self.open_list();
                    self.list.highlight(self.store.last_index());
                    self.list.focus();
                }
                Key::ArrowDown => {
                    self.begin_interaction();
                    self.open_list();
                    self.list.highlight(0);
                    self.list.focus();
                }
                _ => {}
            },
            Surface::Toggle => {}
        }
    }

    fn on_key_up(&mut self, _surface: Surface, key: Key) {
        // The arrow hand-off ends on key release no matter which surface
        // reports it, so an abandoned gesture cannot leave the suppression
        // flag stuck.
        if key.is_arrow() {
            self.end_interaction();
        }
    }

    fn on_toggle_clicked(&mut self) {
        if self.state.list_visible {
            self.close_list(None);
        } else {
            self.open_list();
            self.list.focus();
        }
    }

    fn on_list_clicked(&mut self, entry_key: Option<&str>) {
        // A click on the surface outside any entry commits whatever is
        // highlighted.
        let value = match entry_key {
            Some(key) => Some(key.to_string()),
            None => self.list.highlighted_key(),
        };
        self.close_list(value.as_deref());
        self.field.focus();
    }

    fn on_text_changed(&mut self, text: &str) {
        self.state.committed_value = text.to_string();
        if !self.state.list_visible {
            self.open_list();
        }
        // Type-ahead: highlight the first candidate at or after the typed
        // text; leave the highlight alone when nothing qualifies.
        if let Some(index) = self.store.nearest_match(text) {
            self.list.highlight(index);
        }
    }

    fn on_focus_out(&mut self, surface: Surface) {
        if self.state.suppress_blur_close {
            tracing::trace!(target: "combofield::combo", ?surface, "focus out during interaction, keeping list");
            return;
        }
        self.close_list(None);
    }
}

// ============================================================================
// ComboBox
// ============================================================================

/// A combobox attached to a host text field.
///
/// Owns the interaction state and the sorted candidate set; receives raw
/// input events from the field, toggle, and list surfaces through signal
/// subscriptions and decides state transitions, focus moves, and value
/// writes. See the [module documentation](self) for the event-delivery
/// contract.
pub struct ComboBox {
    inner: Arc<Mutex<ComboInner>>,
    subscriptions: Subscriptions,
}

impl ComboBox {
    /// Attach combobox behavior to a host text field.
    ///
    /// Builds the sorted candidate list, asks the presenter to create the
    /// toggle control and list surface, positions them (when
    /// `auto_position` is set), wires the event subscriptions, and leaves
    /// the list hidden.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidHost`] if the field is not a single-line
    ///   text-entry-capable control.
    /// - [`Error::EmptyCandidates`] if the source holds no entries.
    ///
    /// Both are checked before any decoration is created, so a failed
    /// construction leaves nothing attached to the host.
    pub fn new(
        field: Arc<dyn TextEntry>,
        source: impl Into<CandidateSource>,
        options: ComboOptions,
        mut presenter: Box<dyn DecorationPresenter>,
    ) -> Result<Self> {
        let kind = field.kind();
        if !kind.is_combobox_capable() {
            return Err(Error::invalid_host(kind.name()));
        }

        let store = CandidateStore::from_source(source.into(), &options.item_label_generator)?;
        tracing::debug!(
            target: "combofield::combo",
            candidates = store.len(),
            "attaching combobox"
        );

        let toggle = presenter.create_toggle(
            &options.button_label,
            &format!("{}button", options.class_prefix),
        );
        let list = presenter.create_list(store.entries(), options.list_size, &options.class_prefix);

        if options.auto_position {
            presenter.position(&toggle, &list, &field.metrics(), options.button_inside);
        }

        let inner = Arc::new(Mutex::new(ComboInner {
            state: InteractionState {
                list_visible: false,
                suppress_blur_close: false,
                committed_value: field.value(),
            },
            store,
            field,
            toggle,
            list,
            presenter,
            disposed: false,
        }));

        // Start hidden.
        inner.lock().close_list(None);

        let mut subscriptions = Subscriptions::new();
        Self::wire(&inner, &mut subscriptions);

        Ok(Self {
            inner,
            subscriptions,
        })
    }

    /// Connect the controller to every surface signal.
    ///
    /// Handlers capture the controller weakly: a combobox that has been
    /// dropped (or is mid-teardown) silently stops reacting even before
    /// the disconnects land.
    fn wire(inner: &Arc<Mutex<ComboInner>>, subscriptions: &mut Subscriptions) {
        let (field, toggle, list) = {
            let guard = inner.lock();
            (guard.field.clone(), guard.toggle.clone(), guard.list.clone())
        };

        // --- text field ---
        {
            let weak = Arc::downgrade(inner);
            let id = field.events().key_down.connect(move |key| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().on_key_down(Surface::TextField, *key);
                }
            });
            let field = field.clone();
            subscriptions.add(move || {
                field.events().key_down.disconnect(id);
            });
        }
        {
            let weak = Arc::downgrade(inner);
            let id = field.events().key_up.connect(move |key| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().on_key_up(Surface::TextField, *key);
                }
            });
            let field = field.clone();
            subscriptions.add(move || {
                field.events().key_up.disconnect(id);
            });
        }
        {
            let weak = Arc::downgrade(inner);
            let id = field.events().text_changed.connect(move |text| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().on_text_changed(text);
                }
            });
            let field = field.clone();
            subscriptions.add(move || {
                field.events().text_changed.disconnect(id);
            });
        }
        {
            let weak = Arc::downgrade(inner);
            let id = field.events().focus_out.connect(move |_| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().on_focus_out(Surface::TextField);
                }
            });
            let field = field.clone();
            subscriptions.add(move || {
                field.events().focus_out.disconnect(id);
            });
        }

        // --- toggle control ---
        {
            let weak = Arc::downgrade(inner);
            let id = toggle.events().pressed.connect(move |_| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().begin_interaction();
                }
            });
            let toggle = toggle.clone();
            subscriptions.add(move || {
                toggle.events().pressed.disconnect(id);
            });
        }
        {
            let weak = Arc::downgrade(inner);
            let id = toggle.events().released.connect(move |_| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().end_interaction();
                }
            });
            let toggle = toggle.clone();
            subscriptions.add(move || {
                toggle.events().released.disconnect(id);
            });
        }
        {
            let weak = Arc::downgrade(inner);
            let id = toggle.events().clicked.connect(move |_| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().on_toggle_clicked();
                }
            });
            let toggle = toggle.clone();
            subscriptions.add(move || {
                toggle.events().clicked.disconnect(id);
            });
        }

        // --- list surface ---
        {
            let weak = Arc::downgrade(inner);
            let id = list.events().key_down.connect(move |key| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().on_key_down(Surface::List, *key);
                }
            });
            let list = list.clone();
            subscriptions.add(move || {
                list.events().key_down.disconnect(id);
            });
        }
        {
            let weak = Arc::downgrade(inner);
            let id = list.events().key_up.connect(move |key| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().on_key_up(Surface::List, *key);
                }
            });
            let list = list.clone();
            subscriptions.add(move || {
                list.events().key_up.disconnect(id);
            });
        }
        {
            let weak = Arc::downgrade(inner);
            let id = list.events().clicked.connect(move |entry| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().on_list_clicked(entry.as_deref());
                }
            });
            let list = list.clone();
            subscriptions.add(move || {
                list.events().clicked.disconnect(id);
            });
        }
        {
            let weak = Arc::downgrade(inner);
            let id = list.events().focus_out.connect(move |_| {
                if let Some(inner) = weak.upgrade() {
                    inner.lock().on_focus_out(Surface::List);
                }
            });
            let list = list.clone();
            subscriptions.add(move || {
                list.events().focus_out.disconnect(id);
            });
        }
    }

    /// Lock the controller, rejecting the call if it has been disposed.
    fn guard(&self) -> Result<MutexGuard<'_, ComboInner>> {
        let inner = self.inner.lock();
        if inner.disposed {
            return Err(Error::Disposed);
        }
        Ok(inner)
    }

    /// Present the list. Idempotent; see the transition rules in the
    /// module docs.
    pub fn open_list(&self) -> Result<()> {
        self.guard()?.open_list();
        Ok(())
    }

    /// Hide the list, committing `value` into the field first if given.
    pub fn close_list(&self, value: Option<&str>) -> Result<()> {
        self.guard()?.close_list(value);
        Ok(())
    }

    /// A snapshot of the current interaction state.
    pub fn state(&self) -> Result<InteractionState> {
        Ok(self.guard()?.state.clone())
    }

    /// Whether this combobox has been disposed.
    pub fn is_disposed(&self) -> bool {
        self.inner.lock().disposed
    }

    /// Detach from the host: release every event subscription and tear
    /// down the decoration elements. No handler fires after this returns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Disposed`] when called a second time; disposing
    /// twice is a programming error and is reported rather than ignored.
    pub fn dispose(&mut self) -> Result<()> {
        {
            let mut inner = self.inner.lock();
            if inner.disposed {
                return Err(Error::Disposed);
            }
            inner.disposed = true;
        }

        self.subscriptions.release_all();

        let mut inner = self.inner.lock();
        let toggle = inner.toggle.clone();
        let list = inner.list.clone();
        inner.presenter.destroy_toggle(toggle);
        inner.presenter.destroy_list(list);

        tracing::debug!(target: "combofield::combo", "combobox disposed");
        Ok(())
    }
}

impl Drop for ComboBox {
    fn drop(&mut self) {
        if !self.is_disposed() {
            let _ = self.dispose();
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
