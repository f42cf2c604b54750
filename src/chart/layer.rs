// Layer - an ordered group of notes and layer-local events
// A layer is like a "track" of the chart: it can be hidden or locked as a whole.

use crate::chart::error::{DocumentResult, validate_name};
use crate::chart::event::ChartEvent;
use crate::chart::handle::EntityList;
use crate::chart::note::Note;

/// A chart layer
#[derive(Debug)]
pub struct Layer {
    name: String,

    /// Hidden layers are not rendered or judged
    pub visible: bool,

    /// Locked layers ignore pointer edits in the editor surfaces
    pub locked: bool,

    /// Notes in playback order
    pub notes: EntityList<Note>,

    /// Events that only affect this layer
    pub events: EntityList<ChartEvent>,
}

impl Layer {
    /// Create a new empty, visible, unlocked layer
    pub fn new(name: impl Into<String>) -> DocumentResult<Self> {
        Ok(Self {
            name: validate_name("Layer name", name.into())?,
            visible: true,
            locked: false,
            notes: EntityList::new(),
            events: EntityList::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) -> DocumentResult<()> {
        self.name = validate_name("Layer name", name)?;
        Ok(())
    }

    /// Get the number of notes
    pub fn note_count(&self) -> usize {
        self.notes.len()
    }

    /// Check if layer has no notes and no events
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.events.is_empty()
    }
}
