//! Item types shared by the loader, navigation and widget layers

use serde::{Deserialize, Serialize};

/// A value that can be listed, navigated and selected in a dropdown.
///
/// Items are opaque to the core: it only reads their selection identity,
/// whether they can be navigated to, and a default label for rendering.
pub trait Item {
    /// Identity used to compare against the selected item, if any
    fn value(&self) -> Option<&str>;

    /// Disabled items stay visible but are never navigable or selectable
    fn is_disabled(&self) -> bool {
        false
    }

    /// Text shown for this item
    fn label(&self) -> String;
}

impl Item for String {
    fn value(&self) -> Option<&str> {
        Some(self)
    }

    fn label(&self) -> String {
        self.clone()
    }
}

/// A plain value/label pair, as found in a static options list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    pub label: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    /// Pre-selected when the list is first shown
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

impl Choice {
    /// Create a choice whose value equals its label
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: Some(label.clone()),
            label,
            disabled: false,
            selected: false,
        }
    }

    /// Set an explicit value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Mark as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Mark as pre-selected
    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }
}

impl Item for Choice {
    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    fn is_disabled(&self) -> bool {
        self.disabled
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// A rendered item, tagged with the search term that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    pub item: T,
    pub term: String,
}

impl<T: Item> Entry<T> {
    pub fn new(item: T, term: impl Into<String>) -> Self {
        Self {
            item,
            term: term.into(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.item.is_disabled()
    }
}

/// True when both items carry a value and the values are equal
pub fn same_value<T: Item>(a: &T, b: &T) -> bool {
    matches!((a.value(), b.value()), (Some(x), Some(y)) if x == y)
}
