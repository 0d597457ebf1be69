//! Script Filter wire model
//!
//! Types here serialize field-for-field to the JSON shape Alfred's Script
//! Filter consumes. Optional tags (`uid`, `type`, `icon.type`) disappear
//! from the output when empty; display and action fields always serialize,
//! even as empty strings.

use serde::{Deserialize, Serialize};

/// Icon descriptor for a result item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconInfo {
    /// How `path` should be interpreted, e.g. "filetype". Empty means the
    /// default interpretation: `path` names an icon file.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Location or identifier of the icon asset
    pub path: String,
}

impl IconInfo {
    /// Icon loaded from an icon file
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            kind: String::new(),
            path: path.into(),
        }
    }

    /// Icon resolved through an interpretation tag, e.g. `"filetype"`
    pub fn with_kind(kind: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            path: path.into(),
        }
    }
}

/// One result row shown by the launcher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Primary display string
    pub title: String,

    /// Secondary display string, may be empty
    #[serde(default)]
    pub subtitle: String,

    #[serde(default)]
    pub icon: IconInfo,

    /// Payload handed back to the host when the item is invoked; empty
    /// means no argument
    #[serde(default)]
    pub arg: String,

    /// Text the host completes the query with when the item is selected
    /// without being invoked
    #[serde(default)]
    pub autocomplete: String,

    /// Stable identifier hosts use for result ordering and learning
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,

    /// Item type tag; hosts treat empty as "default"
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub item_type: String,

    /// When false the item can be browsed and autocompleted but not invoked
    #[serde(default)]
    pub valid: bool,
}

impl Item {
    /// Create an invocable item with the given title and all other fields
    /// empty
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: String::new(),
            icon: IconInfo::default(),
            arg: String::new(),
            autocomplete: String::new(),
            uid: String::new(),
            item_type: String::new(),
            valid: true,
        }
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Set the icon
    pub fn with_icon(mut self, icon: IconInfo) -> Self {
        self.icon = icon;
        self
    }

    /// Set the action argument
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.arg = arg.into();
        self
    }

    /// Set the autocomplete text
    pub fn with_autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = autocomplete.into();
        self
    }

    /// Set the stable identifier
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    /// Set the item type tag
    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    /// Set whether the item can be invoked
    pub fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }
}

/// Whether a candidate title matches the current query.
///
/// An empty query matches every title; otherwise the title must contain the
/// query as a case-sensitive contiguous substring. No ranking is implied.
pub fn matches_query(query: &str, title: &str) -> bool {
    query.is_empty() || title.contains(query)
}
