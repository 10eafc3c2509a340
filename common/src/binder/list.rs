use std::fmt;

use uuid::Uuid;

use super::{BindError, ListKind};

/// Stable identity of a list entry, assigned when the entry is created and
/// kept across edits, additions and deletions of other entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(Uuid);

impl ItemId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry<T> {
    pub id: ItemId,
    pub item: T,
}

/// Ordered `(ItemId, item)` sequence backing one list section of the form.
///
/// Positions are 1-based and always derived from the current order.
#[derive(Debug, Clone)]
pub struct ItemList<T> {
    kind: ListKind,
    entries: Vec<ListEntry<T>>,
}

impl<T: Clone> ItemList<T> {
    pub fn new(kind: ListKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ListEntry<T>] {
        &self.entries
    }

    /// Items in display order.
    pub fn items(&self) -> Vec<T> {
        self.entries.iter().map(|e| e.item.clone()).collect()
    }

    /// Drops every entry and rebuilds the list from `items` with fresh ids.
    pub fn replace(&mut self, items: Vec<T>) {
        self.entries = items
            .into_iter()
            .map(|item| ListEntry {
                id: ItemId::new(),
                item,
            })
            .collect();
    }

    pub fn push(&mut self, item: T) -> ItemId {
        let id = ItemId::new();
        self.entries.push(ListEntry { id, item });
        id
    }

    /// 1-based position of `id`.
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id).map(|i| i + 1)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Result<&mut T, BindError> {
        let kind = self.kind;
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| &mut e.item)
            .ok_or(BindError::NoSuchItem { kind })
    }

    /// Removes the entry at 1-based `position`. The last remaining entry is
    /// never removed.
    pub fn remove_at(&mut self, position: usize) -> Result<T, BindError> {
        let len = self.entries.len();
        if position == 0 || position > len {
            return Err(BindError::NoSuchPosition {
                kind: self.kind,
                position,
                len,
            });
        }
        if len == 1 {
            return Err(BindError::LastItem { kind: self.kind });
        }
        Ok(self.entries.remove(position - 1).item)
    }

    pub fn remove(&mut self, id: ItemId) -> Result<T, BindError> {
        let position = self
            .position_of(id)
            .ok_or(BindError::NoSuchItem { kind: self.kind })?;
        self.remove_at(position)
    }
}
