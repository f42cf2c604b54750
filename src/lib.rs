// Chart Studio - Library exports for the editor, tests and benchmarks

pub mod chart;
pub mod command;
pub mod config;

// Re-export commonly used types for convenience
pub use chart::{
    Chart, ChartEvent, ChartSnapshot, CosmeticItem, DocumentError, Handle, Layer, Note, NoteKind,
    Selection, Stage, StageSlot,
};
pub use command::{
    CommandError, EditorHistories, HistoryBranch, Operation, Reversible, SurfaceKind,
};
pub use config::{ConfigError, EditorConfig, HistoryConfig};
