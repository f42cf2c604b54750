// Entity handles and ordered entity collections
// Every document entity lives behind a Handle so operations can hold the exact
// instance they mutate. Identity is pointer identity, never value equality.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Stable identifier for a document entity (visible in logs and snapshots)
pub type EntityId = Uuid;

struct Entity<T> {
    id: EntityId,
    value: RefCell<T>,
}

/// Shared reference to a document entity
///
/// Cloning a handle shares the entity. Two handles are the same entity only if
/// [`Handle::ptr_eq`] says so; value-equal siblings stay distinguishable.
pub struct Handle<T> {
    inner: Rc<Entity<T>>,
}

impl<T> Handle<T> {
    /// Wrap a value into a new entity with a fresh id
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Entity {
                id: Uuid::new_v4(),
                value: RefCell::new(value),
            }),
        }
    }

    pub fn id(&self) -> EntityId {
        self.inner.id
    }

    /// Immutable access to the entity
    ///
    /// # Panics
    /// Panics if the entity is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.value.borrow()
    }

    /// Mutable access to the entity
    ///
    /// # Panics
    /// Panics if the entity is currently borrowed.
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.inner.value.borrow_mut()
    }

    /// Identity comparison
    pub fn ptr_eq(&self, other: &Handle<T>) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.value.try_borrow() {
            Ok(value) => f
                .debug_struct("Handle")
                .field("id", &self.inner.id)
                .field("value", &*value)
                .finish(),
            Err(_) => f
                .debug_struct("Handle")
                .field("id", &self.inner.id)
                .finish_non_exhaustive(),
        }
    }
}

/// Resolve a requested insertion index against the current collection length
///
/// Indices outside `[0, len)` resolve to `len` (append), never to a clamped
/// position.
pub fn resolve_insert_index(index: isize, len: usize) -> usize {
    match usize::try_from(index) {
        Ok(i) if i < len => i,
        _ => len,
    }
}

/// Shared, ordered collection of entities
///
/// Order is playback/render order and is preserved by every operation.
pub struct EntityList<T> {
    items: Rc<RefCell<Vec<Handle<T>>>>,
}

impl<T> EntityList<T> {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Create a list holding the given entities, in order
    pub fn from_handles(handles: Vec<Handle<T>>) -> Self {
        Self {
            items: Rc::new(RefCell::new(handles)),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Get the entity at `index`
    pub fn get(&self, index: usize) -> Option<Handle<T>> {
        self.items.borrow().get(index).cloned()
    }

    /// Clone out the current handles in order
    pub fn handles(&self) -> Vec<Handle<T>> {
        self.items.borrow().clone()
    }

    /// Position of `entity` in this list, by identity
    pub fn position(&self, entity: &Handle<T>) -> Option<usize> {
        self.items.borrow().iter().position(|h| h.ptr_eq(entity))
    }

    pub fn contains(&self, entity: &Handle<T>) -> bool {
        self.position(entity).is_some()
    }

    /// Append an entity at the end
    pub fn push(&self, entity: Handle<T>) {
        self.items.borrow_mut().push(entity);
    }

    /// Insert at `index`, or append if `index` is outside `[0, len)`
    ///
    /// Returns the index the entity actually landed at.
    pub fn insert_or_append(&self, index: isize, entity: Handle<T>) -> usize {
        let mut items = self.items.borrow_mut();
        let at = resolve_insert_index(index, items.len());
        items.insert(at, entity);
        at
    }

    /// Remove `entity` by identity
    ///
    /// Returns the index it was removed from, or `None` if it was not present.
    pub fn remove_entity(&self, entity: &Handle<T>) -> Option<usize> {
        let mut items = self.items.borrow_mut();
        let index = items.iter().position(|h| h.ptr_eq(entity))?;
        items.remove(index);
        Some(index)
    }

    /// Exchange the entities at two indices
    ///
    /// Returns false (and leaves the list untouched) if either index is out of
    /// range.
    pub fn swap(&self, a: usize, b: usize) -> bool {
        let mut items = self.items.borrow_mut();
        if a >= items.len() || b >= items.len() {
            return false;
        }
        items.swap(a, b);
        true
    }

    /// Remove all entities
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }

    /// Identity comparison of the collections themselves
    pub fn ptr_eq(&self, other: &EntityList<T>) -> bool {
        Rc::ptr_eq(&self.items, &other.items)
    }

    /// Map every entity in order
    pub fn map<R>(&self, mut f: impl FnMut(&Handle<T>) -> R) -> Vec<R> {
        self.items.borrow().iter().map(|h| f(h)).collect()
    }
}

impl<T> Clone for EntityList<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T> Default for EntityList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EntityList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<EntityId> = self.items.borrow().iter().map(|h| h.id()).collect();
        f.debug_struct("EntityList").field("ids", &ids).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_identity() {
        let a = Handle::new(1);
        let b = Handle::new(1);
        let a2 = a.clone();

        assert!(a.ptr_eq(&a2));
        assert!(!a.ptr_eq(&b));
        assert_eq!(a.id(), a2.id());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_handle_shares_mutation() {
        let a = Handle::new(String::from("A"));
        let a2 = a.clone();
        *a2.borrow_mut() = "B".to_string();
        assert_eq!(*a.borrow(), "B");
    }

    #[test]
    fn test_resolve_insert_index() {
        assert_eq!(resolve_insert_index(0, 0), 0);
        assert_eq!(resolve_insert_index(0, 3), 0);
        assert_eq!(resolve_insert_index(2, 3), 2);
        assert_eq!(resolve_insert_index(3, 3), 3);
        assert_eq!(resolve_insert_index(10, 3), 3);
        assert_eq!(resolve_insert_index(-1, 3), 3);
        assert_eq!(resolve_insert_index(isize::MIN, 3), 3);
    }

    #[test]
    fn test_insert_or_append() {
        let list = EntityList::new();
        let a = Handle::new('a');
        let b = Handle::new('b');
        let c = Handle::new('c');

        assert_eq!(list.insert_or_append(5, a.clone()), 0);
        assert_eq!(list.insert_or_append(-1, b.clone()), 1);
        assert_eq!(list.insert_or_append(0, c.clone()), 0);

        let order: Vec<char> = list.map(|h| *h.borrow());
        assert_eq!(order, vec!['c', 'a', 'b']);
    }

    #[test]
    fn test_remove_by_identity_among_equal_values() {
        let list = EntityList::new();
        let first = Handle::new(7);
        let second = Handle::new(7);
        list.push(first.clone());
        list.push(second.clone());

        assert_eq!(list.remove_entity(&second), Some(1));
        assert_eq!(list.len(), 1);
        assert!(list.get(0).is_some_and(|h| h.ptr_eq(&first)));
        assert_eq!(list.remove_entity(&second), None);
    }

    #[test]
    fn test_swap_out_of_range_is_ignored() {
        let list = EntityList::new();
        list.push(Handle::new(1));
        list.push(Handle::new(2));

        assert!(list.swap(0, 1));
        assert_eq!(list.map(|h| *h.borrow()), vec![2, 1]);
        assert!(!list.swap(0, 2));
        assert_eq!(list.map(|h| *h.borrow()), vec![2, 1]);
    }

    #[test]
    fn test_cloned_list_is_same_collection() {
        let list: EntityList<i32> = EntityList::new();
        let alias = list.clone();
        alias.push(Handle::new(3));
        assert_eq!(list.len(), 1);
        assert!(list.ptr_eq(&alias));
        assert!(!list.ptr_eq(&EntityList::new()));
    }
}
