// HistoryBranch - undo/redo stacks for one editing surface

use crate::command::notify::{ChangeNotifier, SubscriptionId};
use crate::command::operation::Operation;
use crate::command::trait_def::{CommandResult, Reversible};
use crate::config::HistoryConfig;
use std::collections::VecDeque;

/// Linear undo/redo history with change notification
///
/// The branch maintains two stacks:
/// - Undo stack: operations that have been applied and can be reverted
/// - Redo stack: operations that have been reverted and can be re-applied
///
/// Pushing a new operation:
/// 1. Applies it
/// 2. Pushes it onto the undo stack
/// 3. Clears the redo stack (the undone future is discarded)
/// 4. Notifies listeners
///
/// # Failures
/// If an operation fails to apply or revert, both stacks are left as they
/// were and listeners are not notified. A failed push drops the operation; a
/// failed undo or redo puts it back where it came from.
///
/// # Memory Management
/// History is unbounded by default. With `max_depth` set, the oldest entry is
/// dropped once the undo stack grows past it.
pub struct HistoryBranch {
    /// Operations that can be undone (most recent at the back)
    undo_stack: VecDeque<Operation>,

    /// Operations that can be redone (most recent at the back)
    redo_stack: Vec<Operation>,

    max_depth: Option<usize>,

    notifier: ChangeNotifier,
}

impl HistoryBranch {
    /// Create an unbounded branch
    pub fn new() -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: None,
            notifier: ChangeNotifier::new(),
        }
    }

    /// Create a branch capped at the configured depth
    ///
    /// A depth of 0 is raised to 1 so the latest edit can always be undone.
    pub fn with_config(config: &HistoryConfig) -> Self {
        let max_depth = config.max_depth.map(|depth| {
            if depth == 0 {
                log::warn!("History max_depth of 0 raised to 1");
            }
            depth.max(1)
        });
        Self {
            max_depth,
            ..Self::new()
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Apply an operation and record it
    ///
    /// An empty composite is ignored: nothing is applied, recorded or
    /// notified, and the redo stack is kept.
    ///
    /// # Errors
    /// Returns the apply error; the operation is dropped and the history is
    /// unchanged.
    pub fn push(&mut self, operation: Operation) -> CommandResult<()> {
        if operation.is_empty_composite() {
            log::trace!("Ignoring empty '{}'", operation.description());
            return Ok(());
        }

        if let Err(err) = operation.apply() {
            log::warn!("Push of '{}' failed: {}", operation.description(), err);
            return Err(err);
        }
        log::debug!("Push: {}", operation.description());

        self.undo_stack.push_back(operation);
        self.redo_stack.clear();

        if let Some(max_depth) = self.max_depth {
            while self.undo_stack.len() > max_depth {
                if let Some(dropped) = self.undo_stack.pop_front() {
                    log::trace!("History full, dropping '{}'", dropped.description());
                }
            }
        }

        self.notifier.notify();
        Ok(())
    }

    /// Revert the most recent operation
    ///
    /// Returns `Ok(None)` without notifying when there is nothing to undo.
    ///
    /// # Errors
    /// Returns the revert error; the operation stays on the undo stack.
    pub fn undo(&mut self) -> CommandResult<Option<&Operation>> {
        let Some(operation) = self.undo_stack.pop_back() else {
            return Ok(None);
        };

        if let Err(err) = operation.revert() {
            log::warn!("Undo of '{}' failed: {}", operation.description(), err);
            self.undo_stack.push_back(operation);
            return Err(err);
        }
        log::debug!("Undo: {}", operation.description());

        self.redo_stack.push(operation);
        self.notifier.notify();
        Ok(self.redo_stack.last())
    }

    /// Re-apply the most recently undone operation
    ///
    /// Returns `Ok(None)` without notifying when there is nothing to redo.
    ///
    /// # Errors
    /// Returns the apply error; the operation stays on the redo stack.
    pub fn redo(&mut self) -> CommandResult<Option<&Operation>> {
        let Some(operation) = self.redo_stack.pop() else {
            return Ok(None);
        };

        if let Err(err) = operation.apply() {
            log::warn!("Redo of '{}' failed: {}", operation.description(), err);
            self.redo_stack.push(operation);
            return Err(err);
        }
        log::debug!("Redo: {}", operation.description());

        self.undo_stack.push_back(operation);
        self.notifier.notify();
        Ok(self.undo_stack.back())
    }

    /// Drop all history without touching the document
    ///
    /// Always notifies, even when both stacks were already empty.
    pub fn clear(&mut self) {
        log::debug!(
            "Clear: {} undo, {} redo",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.notifier.notify();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get a description of the operation that would be undone
    pub fn undo_description(&self) -> Option<String> {
        self.undo_stack.back().map(|op| op.description())
    }

    /// Get a description of the operation that would be redone
    pub fn redo_description(&self) -> Option<String> {
        self.redo_stack.last().map(|op| op.description())
    }

    /// Descriptions of the undo stack, most recent first
    pub fn undo_descriptions(&self) -> impl Iterator<Item = String> + '_ {
        self.undo_stack.iter().rev().map(|op| op.description())
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Register a listener called after every state-changing call
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }
}

impl Default for HistoryBranch {
    fn default() -> Self {
        Self::new()
    }
}
