// Setter abstraction for field edits
// A setter is a location that accepts a value of type T, bound once when the edit is built.

use crate::chart::error::DocumentResult;
use crate::chart::handle::Handle;

/// A writable location holding a value of type `T`
pub trait Setter<T> {
    /// Write `value` into the location
    ///
    /// Entities may validate the value and reject it.
    fn set(&self, value: T) -> DocumentResult<()>;
}

/// A field of a specific entity, written through a plain function
///
/// The write function is usually an entity setter (`Layer::set_name`) or a
/// non-capturing closure for public fields.
pub struct Field<E, T> {
    entity: Handle<E>,
    write: fn(&mut E, T) -> DocumentResult<()>,
}

impl<E, T> Field<E, T> {
    pub fn new(entity: &Handle<E>, write: fn(&mut E, T) -> DocumentResult<()>) -> Self {
        Self {
            entity: entity.clone(),
            write,
        }
    }

    pub fn entity(&self) -> &Handle<E> {
        &self.entity
    }
}

impl<E, T> Setter<T> for Field<E, T> {
    fn set(&self, value: T) -> DocumentResult<()> {
        (self.write)(&mut *self.entity.borrow_mut(), value)
    }
}

/// A location described by a closure, for targets that need captured context
/// (for example a specific stage slot)
pub struct BoundSetter<T> {
    write: Box<dyn Fn(T) -> DocumentResult<()>>,
}

impl<T> BoundSetter<T> {
    pub fn new(write: impl Fn(T) -> DocumentResult<()> + 'static) -> Self {
        Self {
            write: Box::new(write),
        }
    }
}

impl<T> Setter<T> for BoundSetter<T> {
    fn set(&self, value: T) -> DocumentResult<()> {
        (self.write)(value)
    }
}
