// Operation - the closed set of edits the history engine records
//
// One variant per edit kind. `as_reversible` is the single exhaustive match
// every apply/revert/description call goes through, so adding a variant
// without wiring it is a compile error.

use crate::chart::cosmetic::Rarity;
use crate::chart::document::{Bookmark, LaneToggle};
use crate::chart::event::ChartEvent;
use crate::chart::layer::Layer;
use crate::chart::note::{HoldPoint, Note, NoteKind};
use crate::chart::stage::SongRef;
use crate::chart::timeline::TimeSignature;
use crate::command::composite::CompositeOperation;
use crate::command::edits::{
    DeselectEntity, FieldEdit, InsertEntity, RemoveEntity, SelectEntity, SwapEntities,
    SwapStageSongs,
};
use crate::command::trait_def::{CommandResult, Reversible};
use std::fmt;

/// A reversible edit of the document graph
pub enum Operation {
    // Chart metadata
    SetChartTitle(FieldEdit<String>),
    SetChartArtist(FieldEdit<String>),
    SetChartCharter(FieldEdit<String>),
    SetChartLevel(FieldEdit<u32>),
    SetAudioOffset(FieldEdit<i32>),

    // Layers
    AddLayer(InsertEntity<Layer>),
    RemoveLayer(RemoveEntity<Layer>),
    SwapLayers(SwapEntities<Layer>),
    RenameLayer(FieldEdit<String>),
    SetLayerVisible(FieldEdit<bool>),
    SetLayerLocked(FieldEdit<bool>),

    // Notes
    AddNote(InsertEntity<Note>),
    RemoveNote(RemoveEntity<Note>),
    SwapNotes(SwapEntities<Note>),
    SetNoteTime(FieldEdit<f64>),
    SetNoteLane(FieldEdit<i32>),
    SetNoteWidth(FieldEdit<f32>),
    SetNoteKind(FieldEdit<NoteKind>),

    // Hold points
    AddHoldPoint(InsertEntity<HoldPoint>),
    RemoveHoldPoint(RemoveEntity<HoldPoint>),
    SetHoldPointTime(FieldEdit<f64>),
    SetHoldPointLane(FieldEdit<i32>),

    // Events (layer-local or global)
    AddEvent(InsertEntity<ChartEvent>),
    RemoveEvent(RemoveEntity<ChartEvent>),
    SwapEvents(SwapEntities<ChartEvent>),
    SetEventTime(FieldEdit<f64>),
    SetTempo(FieldEdit<f64>),
    SetMetre(FieldEdit<TimeSignature>),
    SetSpeed(FieldEdit<f64>),
    SetVisibility(FieldEdit<bool>),
    SetMarkerLabel(FieldEdit<String>),

    // Bookmarks
    AddBookmark(InsertEntity<Bookmark>),
    RemoveBookmark(RemoveEntity<Bookmark>),
    SetBookmarkTime(FieldEdit<f64>),
    SetBookmarkLabel(FieldEdit<String>),

    // Lane toggles
    AddLaneToggle(InsertEntity<LaneToggle>),
    RemoveLaneToggle(RemoveEntity<LaneToggle>),
    SetLaneToggleTime(FieldEdit<f64>),
    SetLaneToggleLane(FieldEdit<i32>),
    SetLaneToggleEnabled(FieldEdit<bool>),

    // Stage
    RenameStage(FieldEdit<String>),
    SetStageBackground(FieldEdit<String>),
    SetStageSong(FieldEdit<Option<SongRef>>),
    SwapStageSongs(SwapStageSongs),

    // Cosmetic item
    SetItemName(FieldEdit<String>),
    SetItemDescription(FieldEdit<String>),
    SetItemRarity(FieldEdit<Rarity>),
    SetItemPrice(FieldEdit<u32>),
    SetItemIcon(FieldEdit<String>),

    // Selection
    SelectNote(SelectEntity<Note>),
    DeselectNote(DeselectEntity<Note>),
    SelectEvent(SelectEntity<ChartEvent>),
    DeselectEvent(DeselectEntity<ChartEvent>),

    Composite(CompositeOperation),
}

impl Operation {
    fn as_reversible(&self) -> &dyn Reversible {
        match self {
            Operation::SetChartTitle(op)
            | Operation::SetChartArtist(op)
            | Operation::SetChartCharter(op)
            | Operation::RenameLayer(op)
            | Operation::SetMarkerLabel(op)
            | Operation::SetBookmarkLabel(op)
            | Operation::RenameStage(op)
            | Operation::SetStageBackground(op)
            | Operation::SetItemName(op)
            | Operation::SetItemDescription(op)
            | Operation::SetItemIcon(op) => op,

            Operation::SetChartLevel(op) | Operation::SetItemPrice(op) => op,

            Operation::SetAudioOffset(op)
            | Operation::SetNoteLane(op)
            | Operation::SetHoldPointLane(op)
            | Operation::SetLaneToggleLane(op) => op,

            Operation::SetLayerVisible(op)
            | Operation::SetLayerLocked(op)
            | Operation::SetVisibility(op)
            | Operation::SetLaneToggleEnabled(op) => op,

            Operation::SetNoteTime(op)
            | Operation::SetHoldPointTime(op)
            | Operation::SetEventTime(op)
            | Operation::SetTempo(op)
            | Operation::SetSpeed(op)
            | Operation::SetBookmarkTime(op)
            | Operation::SetLaneToggleTime(op) => op,

            Operation::SetNoteWidth(op) => op,
            Operation::SetNoteKind(op) => op,
            Operation::SetMetre(op) => op,
            Operation::SetStageSong(op) => op,
            Operation::SetItemRarity(op) => op,

            Operation::AddLayer(op) => op,
            Operation::RemoveLayer(op) => op,
            Operation::SwapLayers(op) => op,

            Operation::AddNote(op) => op,
            Operation::RemoveNote(op) => op,
            Operation::SwapNotes(op) => op,

            Operation::AddHoldPoint(op) => op,
            Operation::RemoveHoldPoint(op) => op,

            Operation::AddEvent(op) => op,
            Operation::RemoveEvent(op) => op,
            Operation::SwapEvents(op) => op,

            Operation::AddBookmark(op) => op,
            Operation::RemoveBookmark(op) => op,

            Operation::AddLaneToggle(op) => op,
            Operation::RemoveLaneToggle(op) => op,

            Operation::SwapStageSongs(op) => op,

            Operation::SelectNote(op) => op,
            Operation::DeselectNote(op) => op,
            Operation::SelectEvent(op) => op,
            Operation::DeselectEvent(op) => op,

            Operation::Composite(op) => op,
        }
    }

    /// Check if this is a composite that holds nothing but empty composites
    pub fn is_empty_composite(&self) -> bool {
        match self {
            Operation::Composite(composite) => composite
                .operations()
                .iter()
                .all(Operation::is_empty_composite),
            _ => false,
        }
    }

    /// Wrap several operations into one history entry
    pub fn composite(description: impl Into<String>, operations: Vec<Operation>) -> Self {
        Operation::Composite(CompositeOperation::new(description, operations))
    }
}

impl Reversible for Operation {
    fn apply(&self) -> CommandResult<()> {
        self.as_reversible().apply()
    }

    fn revert(&self) -> CommandResult<()> {
        self.as_reversible().revert()
    }

    fn description(&self) -> String {
        self.as_reversible().description()
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Operation").field(&self.description()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Handle;
    use crate::command::commands;

    #[test]
    fn test_dispatch_reaches_payload() {
        let layer = Handle::new(Layer::new("A").unwrap());
        let op = commands::rename_layer(&layer, "B");

        op.apply().unwrap();
        assert_eq!(layer.borrow().name(), "B");
        op.revert().unwrap();
        assert_eq!(layer.borrow().name(), "A");
        assert_eq!(op.description(), "Rename layer to B");
    }

    #[test]
    fn test_is_empty_composite() {
        assert!(Operation::composite("Nothing", Vec::new()).is_empty_composite());

        let layer = Handle::new(Layer::new("A").unwrap());
        let op = Operation::composite("One", vec![commands::set_layer_locked(&layer, true)]);
        assert!(!op.is_empty_composite());
        assert!(!commands::set_layer_locked(&layer, true).is_empty_composite());
    }

    #[test]
    fn test_nested_empty_composite_is_empty() {
        let nested = Operation::composite(
            "Outer",
            vec![
                Operation::composite("Inner", Vec::new()),
                Operation::composite("Deeper", vec![Operation::composite("Leaf", Vec::new())]),
            ],
        );
        assert!(nested.is_empty_composite());

        let layer = Handle::new(Layer::new("A").unwrap());
        let mixed = Operation::composite(
            "Outer",
            vec![
                Operation::composite("Inner", Vec::new()),
                commands::set_layer_locked(&layer, true),
            ],
        );
        assert!(!mixed.is_empty_composite());
    }

    #[test]
    fn test_debug_shows_description() {
        let layer = Handle::new(Layer::new("A").unwrap());
        let op = commands::set_layer_visible(&layer, false);
        assert_eq!(format!("{:?}", op), "Operation(\"Hide layer\")");
    }
}
