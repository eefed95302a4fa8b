//! Test doubles for the host-field and decoration contracts.
//!
//! The mocks record every call so tests can assert on the exact sequence of
//! presenter interactions, and expose the signal bundles so tests can drive
//! the combobox the way a host runtime would.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::candidate::Candidate;
use crate::events::{FieldSignals, ListSignals, ToggleSignals};
use crate::field::{EntryKind, FieldMetrics, TextEntry};
use crate::presenter::{DecorationPresenter, ListSurface, ToggleControl};

// ============================================================================
// MockField
// ============================================================================

/// An in-memory host text field.
pub struct MockField {
    kind: EntryKind,
    value: Mutex<String>,
    focus_count: AtomicUsize,
    signals: FieldSignals,
}

impl MockField {
    pub fn new(kind: EntryKind, value: &str) -> Arc<Self> {
        Arc::new(Self {
            kind,
            value: Mutex::new(value.to_string()),
            focus_count: AtomicUsize::new(0),
            signals: FieldSignals::new(),
        })
    }

    /// How many times the combobox has focused the field.
    pub fn focus_count(&self) -> usize {
        self.focus_count.load(Ordering::SeqCst)
    }

    /// Simulate the user typing: update the value, then emit
    /// `text_changed` the way a host runtime would.
    pub fn type_text(&self, text: &str) {
        *self.value.lock() = text.to_string();
        self.signals.text_changed.emit(text.to_string());
    }
}

impl TextEntry for MockField {
    fn kind(&self) -> EntryKind {
        self.kind
    }

    fn value(&self) -> String {
        self.value.lock().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.lock() = value.to_string();
    }

    fn focus(&self) {
        self.focus_count.fetch_add(1, Ordering::SeqCst);
    }

    fn metrics(&self) -> FieldMetrics {
        FieldMetrics {
            x: 10.0,
            y: 20.0,
            width: 200.0,
            height: 24.0,
            font_size: 12.0,
        }
    }

    fn events(&self) -> &FieldSignals {
        &self.signals
    }
}

// ============================================================================
// MockToggle / MockList
// ============================================================================

pub struct MockToggle {
    label: String,
    signals: ToggleSignals,
}

impl ToggleControl for MockToggle {
    fn label(&self) -> String {
        self.label.clone()
    }

    fn events(&self) -> &ToggleSignals {
        &self.signals
    }
}

pub struct MockList {
    keys: Vec<String>,
    labels: Vec<String>,
    highlighted: Mutex<Option<usize>>,
    focus_count: AtomicUsize,
    signals: ListSignals,
}

impl MockList {
    /// Candidate keys in presentation order.
    pub fn keys(&self) -> Vec<String> {
        self.keys.clone()
    }

    /// Candidate display labels in presentation order.
    pub fn labels(&self) -> Vec<String> {
        self.labels.clone()
    }

    /// How many times the combobox has focused the list.
    pub fn focus_count(&self) -> usize {
        self.focus_count.load(Ordering::SeqCst)
    }
}

impl ListSurface for MockList {
    fn highlighted(&self) -> Option<usize> {
        *self.highlighted.lock()
    }

    fn highlight(&self, index: usize) {
        if index < self.keys.len() {
            *self.highlighted.lock() = Some(index);
        }
    }

    fn highlighted_key(&self) -> Option<String> {
        self.highlighted().and_then(|i| self.keys.get(i).cloned())
    }

    fn set_value(&self, value: &str) {
        *self.highlighted.lock() = self.keys.iter().position(|k| k == value);
    }

    fn focus(&self) {
        self.focus_count.fetch_add(1, Ordering::SeqCst);
    }

    fn events(&self) -> &ListSignals {
        &self.signals
    }
}

// ============================================================================
// MockPresenter
// ============================================================================

/// One recorded presenter interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    CreateToggle { label: String, class: String },
    CreateList { count: usize, rows: usize, prefix: String },
    Show,
    Hide,
    Position { inside: bool },
    DestroyToggle,
    DestroyList,
}

/// Shared recording of everything a [`MockPresenter`] was asked to do,
/// plus handles to the decorations it created.
#[derive(Default)]
pub struct PresenterLog {
    calls: Mutex<Vec<PresenterCall>>,
    toggle: Mutex<Option<Arc<MockToggle>>>,
    list: Mutex<Option<Arc<MockList>>>,
}

impl PresenterLog {
    pub fn calls(&self) -> Vec<PresenterCall> {
        self.calls.lock().clone()
    }

    pub fn toggle(&self) -> Arc<MockToggle> {
        self.toggle.lock().clone().expect("toggle not created")
    }

    pub fn list(&self) -> Arc<MockList> {
        self.list.lock().clone().expect("list not created")
    }
}

/// A [`DecorationPresenter`] that builds mock decorations and records every
/// call into a shared [`PresenterLog`].
pub struct MockPresenter {
    log: Arc<PresenterLog>,
}

impl MockPresenter {
    pub fn new() -> (Box<dyn DecorationPresenter>, Arc<PresenterLog>) {
        let log = Arc::new(PresenterLog::default());
        (Box::new(Self { log: log.clone() }), log)
    }
}

impl DecorationPresenter for MockPresenter {
    fn create_toggle(&mut self, label: &str, class: &str) -> Arc<dyn ToggleControl> {
        self.log.calls.lock().push(PresenterCall::CreateToggle {
            label: label.to_string(),
            class: class.to_string(),
        });
        let toggle = Arc::new(MockToggle {
            label: label.to_string(),
            signals: ToggleSignals::new(),
        });
        *self.log.toggle.lock() = Some(toggle.clone());
        toggle
    }

    fn create_list(
        &mut self,
        candidates: &[Candidate],
        visible_rows: usize,
        class_prefix: &str,
    ) -> Arc<dyn ListSurface> {
        self.log.calls.lock().push(PresenterCall::CreateList {
            count: candidates.len(),
            rows: visible_rows,
            prefix: class_prefix.to_string(),
        });
        let list = Arc::new(MockList {
            keys: candidates.iter().map(|c| c.key.clone()).collect(),
            labels: candidates.iter().map(|c| c.label.clone()).collect(),
            highlighted: Mutex::new(None),
            focus_count: AtomicUsize::new(0),
            signals: ListSignals::new(),
        });
        *self.log.list.lock() = Some(list.clone());
        list
    }

    fn show_list(&mut self, _list: &Arc<dyn ListSurface>) {
        self.log.calls.lock().push(PresenterCall::Show);
    }

    fn hide_list(&mut self, _list: &Arc<dyn ListSurface>) {
        self.log.calls.lock().push(PresenterCall::Hide);
    }

    fn position(
        &mut self,
        _toggle: &Arc<dyn ToggleControl>,
        _list: &Arc<dyn ListSurface>,
        _metrics: &FieldMetrics,
        button_inside: bool,
    ) {
        self.log.calls.lock().push(PresenterCall::Position {
            inside: button_inside,
        });
    }

    fn destroy_toggle(&mut self, _toggle: Arc<dyn ToggleControl>) {
        self.log.calls.lock().push(PresenterCall::DestroyToggle);
    }

    fn destroy_list(&mut self, _list: Arc<dyn ListSurface>) {
        self.log.calls.lock().push(PresenterCall::DestroyList);
    }
}
