#![forbid(unsafe_code)]

//! Entries shown in list panels.

/// One selectable row: an opaque value plus what the row displays.
///
/// The value is never inspected by the engine; it is handed back through
/// the owning widget's callback on commit.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<V> {
    pub value: V,
    pub label: String,
    /// Icon name rendered before the label.
    pub icon: Option<String>,
}

impl<V> Entry<V> {
    /// Create an entry without an icon.
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            icon: None,
        }
    }

    /// Attach an icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl<V> From<(V, &str)> for Entry<V> {
    fn from((value, label): (V, &str)) -> Self {
        Self::new(value, label)
    }
}
