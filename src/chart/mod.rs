// Chart document graph
// The mutable entity tree the history engine operates on: charts, layers, notes,
// events, stages and cosmetic items, all reachable through shared handles.

pub mod cosmetic;
pub mod document;
pub mod error;
pub mod event;
pub mod handle;
pub mod layer;
pub mod note;
pub mod selection;
pub mod snapshot;
pub mod stage;
pub mod timeline;

pub use cosmetic::{CosmeticItem, Rarity};
pub use document::{Bookmark, Chart, ChartMetadata, LaneToggle};
pub use error::{DocumentError, DocumentResult};
pub use event::{ChartEvent, EventKind};
pub use handle::{EntityId, EntityList, Handle};
pub use layer::Layer;
pub use note::{HoldPoint, Note, NoteKind};
pub use selection::Selection;
pub use snapshot::ChartSnapshot;
pub use stage::{SongRef, Stage, StageSlot};
pub use timeline::{Tempo, TimeSignature};
