// Reversible-edit history engine
//
// Every edit of a chart, stage or cosmetic item goes through an Operation so it
// can be undone and redone exactly.
//
// Architecture:
// - Reversible trait: apply(), revert(), description()
// - Edit primitives (edits.rs): field edits, collection insert/remove/swap, selection
// - Operation: closed enum of every edit kind, built by the constructors in commands.rs
// - CompositeOperation: several operations recorded as one history entry
// - HistoryBranch: undo/redo stacks plus change notification
// - EditorHistories: one branch per editing surface
//
// Operations hold the exact handles they mutate, resolved when they are built.

pub mod branch;
pub mod builders;
pub mod commands;
pub mod composite;
pub mod edits;
pub mod notify;
pub mod operation;
pub mod setter;
pub mod surfaces;
pub mod trait_def;

pub use branch::HistoryBranch;
pub use composite::CompositeOperation;
pub use notify::{ChangeNotifier, SubscriptionId};
pub use operation::Operation;
pub use setter::{BoundSetter, Field, Setter};
pub use surfaces::{EditorHistories, SurfaceKind};
pub use trait_def::{CommandError, CommandResult, Reversible};
