// Generic edit primitives the operation catalogue is built from
//
// - FieldEdit: write new/old value through a bound setter
// - InsertEntity / RemoveEntity: collection membership with append-fallback
// - SwapEntities / SwapStageSongs: self-inverse exchanges
// - SelectEntity / DeselectEntity: selection membership plus anchor

use crate::chart::handle::{EntityList, Handle};
use crate::chart::selection::Selection;
use crate::chart::stage::{Stage, StageSlot};
use crate::command::setter::Setter;
use crate::command::trait_def::{CommandResult, Reversible};
use std::cell::Cell;

/// Edit of a single value
///
/// Old and new values are captured at construction and never change.
pub struct FieldEdit<T> {
    description: String,
    target: Box<dyn Setter<T>>,
    old: T,
    new: T,
}

impl<T: Clone> FieldEdit<T> {
    pub fn new(
        description: impl Into<String>,
        target: impl Setter<T> + 'static,
        old: T,
        new: T,
    ) -> Self {
        Self {
            description: description.into(),
            target: Box::new(target),
            old,
            new,
        }
    }

    pub fn old_value(&self) -> &T {
        &self.old
    }

    pub fn new_value(&self) -> &T {
        &self.new
    }
}

impl<T: Clone> Reversible for FieldEdit<T> {
    fn apply(&self) -> CommandResult<()> {
        self.target.set(self.new.clone())?;
        Ok(())
    }

    fn revert(&self) -> CommandResult<()> {
        self.target.set(self.old.clone())?;
        Ok(())
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}

/// Insert an entity into a collection
///
/// If the index is outside `[0, len)` when applied, the entity is appended.
pub struct InsertEntity<T> {
    what: &'static str,
    list: EntityList<T>,
    entity: Handle<T>,
    index: isize,
}

impl<T> InsertEntity<T> {
    pub fn new(what: &'static str, list: &EntityList<T>, entity: Handle<T>, index: isize) -> Self {
        Self {
            what,
            list: list.clone(),
            entity,
            index,
        }
    }

    pub fn entity(&self) -> &Handle<T> {
        &self.entity
    }
}

impl<T> Reversible for InsertEntity<T> {
    fn apply(&self) -> CommandResult<()> {
        let at = self.list.insert_or_append(self.index, self.entity.clone());
        log::trace!("Inserted {} {} at {}", self.what, self.entity.id(), at);
        Ok(())
    }

    fn revert(&self) -> CommandResult<()> {
        self.list.remove_entity(&self.entity);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add {}", self.what)
    }
}

/// Remove an entity from a collection, by identity
///
/// The index is captured at construction; reverting re-inserts there, or
/// appends if this collection has since become too short. An entity that was
/// not in the collection when applied is left out on revert as well.
pub struct RemoveEntity<T> {
    what: &'static str,
    list: EntityList<T>,
    entity: Handle<T>,
    index: Option<usize>,
    removed: Cell<bool>,
}

impl<T> RemoveEntity<T> {
    pub fn new(what: &'static str, list: &EntityList<T>, entity: Handle<T>) -> Self {
        let index = list.position(&entity);
        Self {
            what,
            list: list.clone(),
            entity,
            index,
            removed: Cell::new(false),
        }
    }

    pub fn entity(&self) -> &Handle<T> {
        &self.entity
    }

    /// Position at construction, `None` if the entity was absent
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

impl<T> Reversible for RemoveEntity<T> {
    fn apply(&self) -> CommandResult<()> {
        let removed = self.list.remove_entity(&self.entity).is_some();
        if !removed {
            log::warn!("{} {} was not in its collection", self.what, self.entity.id());
        }
        self.removed.set(removed);
        Ok(())
    }

    fn revert(&self) -> CommandResult<()> {
        if !self.removed.replace(false) {
            return Ok(());
        }
        let index = self
            .index
            .and_then(|i| isize::try_from(i).ok())
            .unwrap_or(-1);
        self.list.insert_or_append(index, self.entity.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove {}", self.what)
    }
}

/// Exchange two entities of a collection
pub struct SwapEntities<T> {
    what: &'static str,
    list: EntityList<T>,
    first: usize,
    second: usize,
}

impl<T> SwapEntities<T> {
    pub fn new(what: &'static str, list: &EntityList<T>, first: usize, second: usize) -> Self {
        Self {
            what,
            list: list.clone(),
            first,
            second,
        }
    }

    fn swap(&self) {
        if !self.list.swap(self.first, self.second) {
            log::warn!(
                "Ignored swap of {} {} and {} (collection has {})",
                self.what,
                self.first,
                self.second,
                self.list.len()
            );
        }
    }
}

impl<T> Reversible for SwapEntities<T> {
    fn apply(&self) -> CommandResult<()> {
        self.swap();
        Ok(())
    }

    fn revert(&self) -> CommandResult<()> {
        self.swap();
        Ok(())
    }

    fn description(&self) -> String {
        format!("Reorder {}", self.what)
    }
}

/// Exchange the songs of two stage slots
pub struct SwapStageSongs {
    stage: Handle<Stage>,
    first: StageSlot,
    second: StageSlot,
}

impl SwapStageSongs {
    pub fn new(stage: &Handle<Stage>, first: StageSlot, second: StageSlot) -> Self {
        Self {
            stage: stage.clone(),
            first,
            second,
        }
    }
}

impl Reversible for SwapStageSongs {
    fn apply(&self) -> CommandResult<()> {
        self.stage.borrow_mut().swap_songs(self.first, self.second);
        Ok(())
    }

    fn revert(&self) -> CommandResult<()> {
        self.apply()
    }

    fn description(&self) -> String {
        format!("Swap stage {} and {}", self.first, self.second)
    }
}

/// Add an entity to a selection and make it the anchor
pub struct SelectEntity<T> {
    what: &'static str,
    selection: Handle<Selection<T>>,
    entity: Handle<T>,
    was_member: bool,
    previous_anchor: Option<Handle<T>>,
}

impl<T> SelectEntity<T> {
    pub fn new(what: &'static str, selection: &Handle<Selection<T>>, entity: Handle<T>) -> Self {
        let (was_member, previous_anchor) = {
            let current = selection.borrow();
            (current.contains(&entity), current.anchor().cloned())
        };
        Self {
            what,
            selection: selection.clone(),
            entity,
            was_member,
            previous_anchor,
        }
    }
}

impl<T> Reversible for SelectEntity<T> {
    fn apply(&self) -> CommandResult<()> {
        let mut selection = self.selection.borrow_mut();
        selection.insert(-1, self.entity.clone());
        selection.set_anchor(Some(self.entity.clone()));
        Ok(())
    }

    fn revert(&self) -> CommandResult<()> {
        let mut selection = self.selection.borrow_mut();
        if !self.was_member {
            selection.remove(&self.entity);
        }
        selection.set_anchor(self.previous_anchor.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Select {}", self.what)
    }
}

/// Remove an entity from a selection
///
/// Clears the anchor if it pointed at the entity; reverting restores the
/// member at its old position and the previous anchor.
pub struct DeselectEntity<T> {
    what: &'static str,
    selection: Handle<Selection<T>>,
    entity: Handle<T>,
    index: Option<usize>,
    previous_anchor: Option<Handle<T>>,
}

impl<T> DeselectEntity<T> {
    pub fn new(what: &'static str, selection: &Handle<Selection<T>>, entity: Handle<T>) -> Self {
        let (index, previous_anchor) = {
            let current = selection.borrow();
            (current.position(&entity), current.anchor().cloned())
        };
        Self {
            what,
            selection: selection.clone(),
            entity,
            index,
            previous_anchor,
        }
    }
}

impl<T> Reversible for DeselectEntity<T> {
    fn apply(&self) -> CommandResult<()> {
        let mut selection = self.selection.borrow_mut();
        selection.remove(&self.entity);
        if selection.anchor_is(&self.entity) {
            selection.set_anchor(None);
        }
        Ok(())
    }

    fn revert(&self) -> CommandResult<()> {
        let mut selection = self.selection.borrow_mut();
        if let Some(index) = self.index {
            selection.insert(isize::try_from(index).unwrap_or(-1), self.entity.clone());
        }
        selection.set_anchor(self.previous_anchor.clone());
        Ok(())
    }

    fn description(&self) -> String {
        format!("Deselect {}", self.what)
    }
}
