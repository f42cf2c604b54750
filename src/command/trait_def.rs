// Reversible trait definition

use crate::chart::error::DocumentError;

/// Result type for command operations
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors that can occur while applying or reverting an operation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    /// A document entity rejected the value written by an edit
    #[error("Edit rejected: {0}")]
    Rejected(#[from] DocumentError),
}

/// Trait for edits that can be applied and reverted
///
/// Every operation captures its target handles and old/new values when it is
/// constructed, so `apply` and `revert` take no context. Calls must alternate,
/// starting with `apply`; calling `revert` first or calling either twice in a
/// row is unsupported.
///
/// # Example
/// ```
/// use chart_studio::chart::{Handle, Layer};
/// use chart_studio::command::trait_def::{CommandResult, Reversible};
///
/// struct ToggleLock {
///     layer: Handle<Layer>,
/// }
///
/// impl Reversible for ToggleLock {
///     fn apply(&self) -> CommandResult<()> {
///         let mut layer = self.layer.borrow_mut();
///         layer.locked = !layer.locked;
///         Ok(())
///     }
///
///     fn revert(&self) -> CommandResult<()> {
///         self.apply()
///     }
///
///     fn description(&self) -> String {
///         "Toggle layer lock".to_string()
///     }
/// }
/// ```
pub trait Reversible {
    /// Mutate the target forward
    fn apply(&self) -> CommandResult<()>;

    /// Restore the exact state from before `apply`
    fn revert(&self) -> CommandResult<()>;

    /// Get a human-readable description of the edit
    ///
    /// Used for UI display (e.g., "Undo: Rename layer to Drums")
    fn description(&self) -> String;
}
