//! Script Filter response builder
//!
//! A [`Response`] accumulates result items in display order together with
//! the workflow variables the host passes on to downstream actions. It is
//! grown only through append operations and consumed by the render methods
//! in [`crate::render`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{matches_query, IconInfo, Item};

/// Wrapper object carrying the variable map on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct WorkflowEnv {
    pub(crate) variables: BTreeMap<String, String>,
}

impl WorkflowEnv {
    pub(crate) fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}

/// Ordered set of result items plus named workflow variables.
///
/// Created empty, grown only by append operations (items are never
/// removed), and terminally consumed by [`Response::to_json`]. The
/// `alfredworkflow` wrapper and the `items` array are each omitted from the
/// rendered output while empty.
///
/// A `Response` provides no internal locking; callers sharing one across
/// threads must synchronize externally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(
        rename = "alfredworkflow",
        default,
        skip_serializing_if = "WorkflowEnv::is_empty"
    )]
    pub(crate) workflow: WorkflowEnv,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) items: Vec<Item>,
}

impl Response {
    /// Create an empty response
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a workflow variable, overwriting any previous value for the key.
    /// Keys and values are unconstrained; there is no removal operation.
    pub fn set_variable(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.workflow.variables.insert(key.into(), value.into());
    }

    /// Append an item. Display order is insertion order; no field is
    /// validated.
    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Append `item` only when its title matches `query` (see
    /// [`matches_query`]). A non-match is a silent no-op so callers can feed
    /// every candidate through.
    pub fn add_item_if_matches(&mut self, query: &str, item: Item) {
        if matches_query(query, &item.title) {
            self.items.push(item);
        }
    }

    /// Matched entry that can be browsed and autocompleted but not invoked.
    /// The uid is synthesized as `title + "." + subtitle`.
    pub fn add_matched_browsable(
        &mut self,
        query: &str,
        title: &str,
        subtitle: &str,
        icon_path: &str,
        autocomplete: &str,
    ) {
        self.add_item_if_matches(
            query,
            Item::new(title)
                .with_subtitle(subtitle)
                .with_icon(IconInfo::from_path(icon_path))
                .with_autocomplete(autocomplete)
                .with_uid(format!("{}.{}", title, subtitle))
                .with_type("default")
                .with_valid(false),
        );
    }

    /// Matched entry the host can invoke directly, handing back `arg`.
    /// The uid is synthesized as `title + "." + subtitle`.
    pub fn add_matched_invocable(
        &mut self,
        query: &str,
        title: &str,
        subtitle: &str,
        icon_path: &str,
        autocomplete: &str,
        arg: &str,
    ) {
        self.add_item_if_matches(
            query,
            Item::new(title)
                .with_subtitle(subtitle)
                .with_icon(IconInfo::from_path(icon_path))
                .with_arg(arg)
                .with_autocomplete(autocomplete)
                .with_uid(format!("{}.{}", title, subtitle))
                .with_type("default")
                .with_valid(true),
        );
    }

    /// Append every item from the iterator, preserving its order
    pub fn extend(&mut self, items: impl IntoIterator<Item = Item>) {
        self.items.extend(items);
    }

    /// Items in display order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Workflow variables set so far
    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.workflow.variables
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items have been added
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for Response {
    type Item = Item;
    type IntoIter = std::vec::IntoIter<Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<Item> for Response {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self {
            workflow: WorkflowEnv::default(),
            items: iter.into_iter().collect(),
        }
    }
}
