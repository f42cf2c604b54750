// Current selection of an editing surface
// Members keep the order they were selected in; the anchor is the last selected entity.

use crate::chart::handle::{Handle, resolve_insert_index};
use std::fmt;

/// Ordered selection set with an anchor
pub struct Selection<T> {
    members: Vec<Handle<T>>,
    anchor: Option<Handle<T>>,
}

impl<T> Selection<T> {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            anchor: None,
        }
    }

    pub fn members(&self) -> &[Handle<T>] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, entity: &Handle<T>) -> bool {
        self.position(entity).is_some()
    }

    pub fn position(&self, entity: &Handle<T>) -> Option<usize> {
        self.members.iter().position(|m| m.ptr_eq(entity))
    }

    /// The last selected entity, used as the anchor for range selection
    pub fn anchor(&self) -> Option<&Handle<T>> {
        self.anchor.as_ref()
    }

    pub fn set_anchor(&mut self, anchor: Option<Handle<T>>) {
        self.anchor = anchor;
    }

    /// Add `entity` if it is not already a member
    ///
    /// Returns true if it was added.
    pub fn insert(&mut self, index: isize, entity: Handle<T>) -> bool {
        if self.contains(&entity) {
            return false;
        }
        let at = resolve_insert_index(index, self.members.len());
        self.members.insert(at, entity);
        true
    }

    /// Remove `entity` by identity, returning the index it was at
    pub fn remove(&mut self, entity: &Handle<T>) -> Option<usize> {
        let index = self.position(entity)?;
        self.members.remove(index);
        Some(index)
    }

    /// Check whether the anchor is `entity`
    pub fn anchor_is(&self, entity: &Handle<T>) -> bool {
        self.anchor.as_ref().is_some_and(|a| a.ptr_eq(entity))
    }
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("members", &self.members.iter().map(Handle::id).collect::<Vec<_>>())
            .field("anchor", &self.anchor.as_ref().map(Handle::id))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut selection = Selection::new();
        let a = Handle::new(1);

        assert!(selection.insert(-1, a.clone()));
        assert!(!selection.insert(-1, a.clone()));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_remove_reports_index() {
        let mut selection = Selection::new();
        let a = Handle::new(1);
        let b = Handle::new(1);
        selection.insert(-1, a.clone());
        selection.insert(-1, b.clone());

        assert_eq!(selection.remove(&b), Some(1));
        assert_eq!(selection.remove(&b), None);
        assert!(selection.contains(&a));
    }

    #[test]
    fn test_anchor() {
        let mut selection = Selection::new();
        let a = Handle::new("a");
        selection.set_anchor(Some(a.clone()));
        assert!(selection.anchor_is(&a));
        assert!(!selection.anchor_is(&Handle::new("a")));
    }
}
