//! Construction options for a combobox.

use std::fmt;
use std::sync::Arc;

/// Produces the display label for a candidate from its key and associated
/// value.
///
/// For flat (list) candidate sources the key is passed as its own value.
pub type LabelGenerator = Arc<dyn Fn(&str, &str) -> String + Send + Sync>;

/// The default label generator: `"{key}: {value}"`.
pub fn default_label_generator() -> LabelGenerator {
    Arc::new(|key, value| format!("{key}: {value}"))
}

/// Options recognized at combobox construction.
///
/// Every option has a documented default; construct with
/// [`ComboOptions::default`] and override via the builder methods.
///
/// # Example
///
/// ```
/// use combofield::ComboOptions;
///
/// let options = ComboOptions::default()
///     .with_list_size(5)
///     .with_button_label("open");
/// assert_eq!(options.list_size, 5);
/// ```
#[derive(Clone)]
pub struct ComboOptions {
    /// Label shown on the toggle control. Default: `"▼"` (U+25BC).
    pub button_label: String,
    /// Whether the toggle is positioned inside the field's right edge
    /// rather than next to it. Purely a hint for the presenter's
    /// positioning pass. Default: `true`.
    pub button_inside: bool,
    /// Number of visible rows in the list surface. Default: `10`.
    pub list_size: usize,
    /// Namespacing prefix for the style classes handed to the presenter.
    /// Default: `"Combofield_"`.
    pub class_prefix: String,
    /// Whether to run the presenter's positioning pass at construction.
    /// Default: `true`.
    pub auto_position: bool,
    /// Label generator for candidates. Default: `"{key}: {value}"`.
    pub item_label_generator: LabelGenerator,
}

impl Default for ComboOptions {
    fn default() -> Self {
        Self {
            button_label: "\u{25bc}".to_string(),
            button_inside: true,
            list_size: 10,
            class_prefix: "Combofield_".to_string(),
            auto_position: true,
            item_label_generator: default_label_generator(),
        }
    }
}

impl ComboOptions {
    /// Set the toggle label using builder pattern.
    pub fn with_button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = label.into();
        self
    }

    /// Set toggle placement using builder pattern.
    pub fn with_button_inside(mut self, inside: bool) -> Self {
        self.button_inside = inside;
        self
    }

    /// Set the visible row count using builder pattern. Clamped to at
    /// least 1.
    pub fn with_list_size(mut self, rows: usize) -> Self {
        self.list_size = rows.max(1);
        self
    }

    /// Set the style class prefix using builder pattern.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set auto-positioning using builder pattern.
    pub fn with_auto_position(mut self, auto: bool) -> Self {
        self.auto_position = auto;
        self
    }

    /// Set a custom label generator using builder pattern.
    pub fn with_label_generator<F>(mut self, generator: F) -> Self
    where
        F: Fn(&str, &str) -> String + Send + Sync + 'static,
    {
        self.item_label_generator = Arc::new(generator);
        self
    }
}

impl fmt::Debug for ComboOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboOptions")
            .field("button_label", &self.button_label)
            .field("button_inside", &self.button_inside)
            .field("list_size", &self.list_size)
            .field("class_prefix", &self.class_prefix)
            .field("auto_position", &self.auto_position)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ComboOptions::default();
        assert_eq!(options.button_label, "\u{25bc}");
        assert!(options.button_inside);
        assert_eq!(options.list_size, 10);
        assert_eq!(options.class_prefix, "Combofield_");
        assert!(options.auto_position);
        assert_eq!((options.item_label_generator)("a", "Apple"), "a: Apple");
    }

    #[test]
    fn test_builder_overrides() {
        let options = ComboOptions::default()
            .with_button_label("+")
            .with_button_inside(false)
            .with_list_size(0)
            .with_class_prefix("Custom_")
            .with_auto_position(false)
            .with_label_generator(|key, _| key.to_uppercase());

        assert_eq!(options.button_label, "+");
        assert!(!options.button_inside);
        assert_eq!(options.list_size, 1); // clamped
        assert_eq!(options.class_prefix, "Custom_");
        assert!(!options.auto_position);
        assert_eq!((options.item_label_generator)("a", "Apple"), "A");
    }
}
