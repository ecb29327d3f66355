//! Generic list operations shared by every interactive content list.
//!
//! Every page keeps an independent in-memory list; toggles are applied
//! optimistically and touch exactly one item, leaving the rest
//! structurally unchanged.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::counted_flag::CountedFlag;

/// Identifier of a content item within its page list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub String);

impl ContentId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for ContentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Anything that lives in a page-level content list.
pub trait ContentItem {
    fn id(&self) -> &ContentId;
}

/// Toggles a counted flag on the item with the given id.
///
/// Absent ids are a silent no-op. Returns whether an item was changed.
pub fn toggle_counted<T, F>(items: &mut [T], id: &ContentId, flag: F) -> bool
where
    T: ContentItem,
    F: FnOnce(&mut T) -> &mut CountedFlag,
{
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            flag(item).toggle();
            true
        }
        None => false,
    }
}

/// Toggles a plain boolean (bookmarks) on the item with the given id.
///
/// Absent ids are a silent no-op. Returns whether an item was changed.
pub fn toggle_flag<T, F>(items: &mut [T], id: &ContentId, flag: F) -> bool
where
    T: ContentItem,
    F: FnOnce(&mut T) -> &mut bool,
{
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            let value = flag(item);
            *value = !*value;
            true
        }
        None => false,
    }
}

/// New items go to the front of the list.
pub fn prepend<T: ContentItem>(items: &mut Vec<T>, item: T) {
    items.insert(0, item);
}

/// Splits a comma-separated tag string, trimming whitespace and
/// dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
