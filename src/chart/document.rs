// Chart - the root document of the editor
// Holds metadata and the ordered top-level collections every editing surface works on.

use crate::chart::error::{DocumentResult, validate_name, validate_time};
use crate::chart::event::ChartEvent;
use crate::chart::handle::{EntityList, Handle};
use crate::chart::layer::Layer;
use crate::chart::note::Note;

/// Descriptive chart metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ChartMetadata {
    pub title: String,
    pub artist: String,
    pub charter: String,

    /// Difficulty level shown in song select
    pub level: u32,

    /// Offset between audio start and beat 0, in milliseconds
    pub audio_offset_ms: i32,
}

impl ChartMetadata {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: String::new(),
            charter: String::new(),
            level: 1,
            audio_offset_ms: 0,
        }
    }
}

/// A labelled position on the timeline, for navigation only
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    time: f64,
    pub label: String,
}

impl Bookmark {
    pub fn new(time: f64, label: impl Into<String>) -> DocumentResult<Self> {
        Ok(Self {
            time: validate_time(time)?,
            label: label.into(),
        })
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_time(&mut self, time: f64) -> DocumentResult<()> {
        self.time = validate_time(time)?;
        Ok(())
    }
}

/// Turns a lane on or off from a time onward
#[derive(Debug, Clone, PartialEq)]
pub struct LaneToggle {
    time: f64,
    pub lane: i32,
    pub enabled: bool,
}

impl LaneToggle {
    pub fn new(time: f64, lane: i32, enabled: bool) -> DocumentResult<Self> {
        Ok(Self {
            time: validate_time(time)?,
            lane,
            enabled,
        })
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_time(&mut self, time: f64) -> DocumentResult<()> {
        self.time = validate_time(time)?;
        Ok(())
    }
}

/// The chart document
///
/// The chart itself is a plain owner of handles: every mutable part is
/// reachable through a [`Handle`] or an [`EntityList`] so operations can bind
/// to it directly.
#[derive(Debug)]
pub struct Chart {
    pub metadata: Handle<ChartMetadata>,

    /// Layers in render order (first is drawn at the bottom)
    pub layers: EntityList<Layer>,

    /// Events that affect the whole chart
    pub global_events: EntityList<ChartEvent>,

    pub bookmarks: EntityList<Bookmark>,
    pub lane_toggles: EntityList<LaneToggle>,
}

impl Chart {
    /// Create an empty chart with one default layer
    pub fn new(title: impl Into<String>) -> DocumentResult<Self> {
        let title = validate_name("Chart title", title.into())?;
        let chart = Self::empty(ChartMetadata::new(title));
        chart.layers.push(Handle::new(Layer::new("Layer 1")?));
        Ok(chart)
    }

    /// Create a chart with no layers
    pub fn empty(metadata: ChartMetadata) -> Self {
        Self {
            metadata: Handle::new(metadata),
            layers: EntityList::new(),
            global_events: EntityList::new(),
            bookmarks: EntityList::new(),
            lane_toggles: EntityList::new(),
        }
    }

    /// Total number of notes across all layers
    pub fn note_count(&self) -> usize {
        self.layers
            .map(|layer| layer.borrow().note_count())
            .into_iter()
            .sum()
    }

    /// Find the layer owning `note`, by identity
    pub fn layer_of(&self, note: &Handle<Note>) -> Option<Handle<Layer>> {
        self.layers
            .handles()
            .into_iter()
            .find(|layer| layer.borrow().notes.contains(note))
    }
}
