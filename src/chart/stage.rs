// Stage configuration - a fixed set of three songs played back to back

use crate::chart::error::{DocumentResult, validate_name};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a chart that can be placed in a stage slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRef {
    /// Identifier of the chart in the song library
    pub chart_id: String,

    /// Difficulty the chart is played at
    pub difficulty: String,
}

impl SongRef {
    pub fn new(chart_id: impl Into<String>, difficulty: impl Into<String>) -> Self {
        Self {
            chart_id: chart_id.into(),
            difficulty: difficulty.into(),
        }
    }
}

/// One of the three song slots of a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageSlot {
    First,
    Second,
    Third,
}

impl StageSlot {
    pub const ALL: [StageSlot; 3] = [StageSlot::First, StageSlot::Second, StageSlot::Third];

    pub fn index(self) -> usize {
        match self {
            StageSlot::First => 0,
            StageSlot::Second => 1,
            StageSlot::Third => 2,
        }
    }
}

impl fmt::Display for StageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot {}", self.index() + 1)
    }
}

/// Stage configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    name: String,

    /// Background asset path
    pub background: String,

    songs: [Option<SongRef>; 3],
}

impl Stage {
    /// Create a stage with empty song slots
    pub fn new(name: impl Into<String>) -> DocumentResult<Self> {
        Ok(Self {
            name: validate_name("Stage name", name.into())?,
            background: String::new(),
            songs: [None, None, None],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: String) -> DocumentResult<()> {
        self.name = validate_name("Stage name", name)?;
        Ok(())
    }

    pub fn song(&self, slot: StageSlot) -> Option<&SongRef> {
        self.songs[slot.index()].as_ref()
    }

    pub fn set_song(&mut self, slot: StageSlot, song: Option<SongRef>) {
        self.songs[slot.index()] = song;
    }

    /// Exchange the songs of two slots
    pub fn swap_songs(&mut self, a: StageSlot, b: StageSlot) {
        self.songs.swap(a.index(), b.index());
    }

    pub fn songs(&self) -> &[Option<SongRef>; 3] {
        &self.songs
    }

    /// Check if every slot holds a song
    pub fn is_complete(&self) -> bool {
        self.songs.iter().all(Option::is_some)
    }
}
