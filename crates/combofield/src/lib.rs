//! Combobox interaction behavior for host text fields.
//!
//! `combofield` turns an existing single-line text entry into a combobox:
//! a toggle control reveals a sorted, selectable candidate list; arrow keys
//! hand focus between the field and the list; typing highlights the nearest
//! candidate; selecting an entry writes its key back into the field.
//!
//! The crate owns *behavior* only. The host supplies the text field behind
//! the [`TextEntry`] trait and the visuals behind the
//! [`DecorationPresenter`] trait; the combobox decides when the list opens
//! and closes, where the highlight sits, and what value the field ends up
//! with.
//!
//! # Quick start
//!
//! ```ignore
//! use combofield::{ComboBox, ComboOptions};
//!
//! let combo = ComboBox::new(
//!     field,                          // Arc<dyn TextEntry>
//!     [("a1", "Apple"), ("b2", "Banana")],
//!     ComboOptions::default().with_list_size(5),
//!     presenter,                      // Box<dyn DecorationPresenter>
//! )?;
//! ```
//!
//! Candidate sources can be flat lists (`Vec<String>`, `&[&str]`) or
//! key/value maps; map entries display through a configurable label
//! generator while the *key* is what gets committed into the field.
//!
//! # Crate layout
//!
//! - [`combo`] -- the [`ComboBox`] controller and its state machine
//! - [`candidate`] -- candidate sources and the sorted store
//! - [`field`] -- the host text field contract
//! - [`presenter`] -- the decoration contracts
//! - [`events`] -- keys, surfaces, and per-surface signal bundles
//! - [`options`] -- construction options
//! - [`error`] -- the error taxonomy

pub mod candidate;
pub mod combo;
pub mod error;
pub mod events;
pub mod field;
pub mod options;
pub mod presenter;

#[cfg(test)]
pub(crate) mod testing;

pub use candidate::{Candidate, CandidateSource, CandidateStore};
pub use combo::{ComboBox, InteractionState};
pub use error::{Error, Result};
pub use events::{FieldSignals, Key, ListSignals, Surface, ToggleSignals};
pub use field::{EntryKind, FieldMetrics, TextEntry};
pub use options::{default_label_generator, ComboOptions, LabelGenerator};
pub use presenter::{DecorationPresenter, ListSurface, ToggleControl};

pub use combofield_core::{ConnectionId, Signal};
