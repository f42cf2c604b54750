// CompositeOperation - several operations recorded as one history entry

use crate::command::operation::Operation;
use crate::command::trait_def::{CommandResult, Reversible};

/// An ordered, fixed bundle of operations representing one user action
///
/// Sub-operations are applied in list order and reverted in reverse order,
/// so an edit made to an entity inserted earlier in the bundle is undone
/// before the insertion itself.
///
/// An empty composite, or one nesting only empty composites, is a no-op: the
/// history branch drops it without applying or recording it.
pub struct CompositeOperation {
    description: String,
    operations: Vec<Operation>,
}

impl CompositeOperation {
    pub fn new(description: impl Into<String>, operations: Vec<Operation>) -> Self {
        Self {
            description: description.into(),
            operations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

impl Reversible for CompositeOperation {
    fn apply(&self) -> CommandResult<()> {
        for (i, op) in self.operations.iter().enumerate() {
            log::trace!("Applying {}", op.description());
            if let Err(err) = op.apply() {
                // Roll back what already ran so the bundle stays atomic
                for done in self.operations[..i].iter().rev() {
                    if let Err(rollback) = done.revert() {
                        log::warn!("Rollback of '{}' failed: {}", done.description(), rollback);
                    }
                }
                return Err(err);
            }
        }
        Ok(())
    }

    fn revert(&self) -> CommandResult<()> {
        for op in self.operations.iter().rev() {
            log::trace!("Reverting {}", op.description());
            op.revert()?;
        }
        Ok(())
    }

    fn description(&self) -> String {
        self.description.clone()
    }
}
