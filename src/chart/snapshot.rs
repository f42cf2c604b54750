// Serializable value snapshots of the document graph
// Snapshots are what external persistence and tests consume; history itself is never serialized.

use crate::chart::cosmetic::{CosmeticItem, Rarity};
use crate::chart::document::{Bookmark, Chart, LaneToggle};
use crate::chart::event::{ChartEvent, EventKind};
use crate::chart::handle::{EntityId, EntityList, Handle};
use crate::chart::layer::Layer;
use crate::chart::note::{HoldPoint, Note, NoteKind};
use crate::chart::selection::Selection;
use crate::chart::stage::{SongRef, Stage};
use serde::{Deserialize, Serialize};

/// Serializable chart structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub title: String,
    pub artist: String,
    pub charter: String,
    pub level: u32,
    pub audio_offset_ms: i32,
    pub layers: Vec<LayerSnapshot>,
    pub global_events: Vec<EventSnapshot>,
    pub bookmarks: Vec<BookmarkSnapshot>,
    pub lane_toggles: Vec<LaneToggleSnapshot>,
}

/// Serializable layer structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerSnapshot {
    pub id: EntityId,
    pub name: String,
    pub visible: bool,
    pub locked: bool,
    pub notes: Vec<NoteSnapshot>,
    pub events: Vec<EventSnapshot>,
}

/// Serializable note structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteSnapshot {
    pub id: EntityId,
    pub time: f64,
    pub lane: i32,
    pub width: f32,
    pub kind: NoteKind,
    pub hold_points: Vec<HoldPointSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldPointSnapshot {
    pub id: EntityId,
    pub time: f64,
    pub lane: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSnapshot {
    pub id: EntityId,
    pub time: f64,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookmarkSnapshot {
    pub id: EntityId,
    pub time: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneToggleSnapshot {
    pub id: EntityId,
    pub time: f64,
    pub lane: i32,
    pub enabled: bool,
}

/// Serializable stage structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageSnapshot {
    pub name: String,
    pub background: String,
    pub songs: [Option<SongRef>; 3],
}

/// Serializable cosmetic item structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CosmeticSnapshot {
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub price: u32,
    pub icon: String,
}

/// Serializable selection structure (ids only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    pub members: Vec<EntityId>,
    pub anchor: Option<EntityId>,
}

fn snapshot_list<T, S>(list: &EntityList<T>, f: impl Fn(EntityId, &T) -> S) -> Vec<S> {
    list.map(|h| f(h.id(), &*h.borrow()))
}

fn snapshot_event(id: EntityId, event: &ChartEvent) -> EventSnapshot {
    EventSnapshot {
        id,
        time: event.time(),
        kind: event.kind().clone(),
    }
}

fn snapshot_hold_point(id: EntityId, point: &HoldPoint) -> HoldPointSnapshot {
    HoldPointSnapshot {
        id,
        time: point.time(),
        lane: point.lane,
    }
}

fn snapshot_note(id: EntityId, note: &Note) -> NoteSnapshot {
    NoteSnapshot {
        id,
        time: note.time(),
        lane: note.lane,
        width: note.width(),
        kind: note.kind,
        hold_points: snapshot_list(&note.hold_points, snapshot_hold_point),
    }
}

fn snapshot_layer(id: EntityId, layer: &Layer) -> LayerSnapshot {
    LayerSnapshot {
        id,
        name: layer.name().to_string(),
        visible: layer.visible,
        locked: layer.locked,
        notes: snapshot_list(&layer.notes, snapshot_note),
        events: snapshot_list(&layer.events, snapshot_event),
    }
}

fn snapshot_bookmark(id: EntityId, bookmark: &Bookmark) -> BookmarkSnapshot {
    BookmarkSnapshot {
        id,
        time: bookmark.time(),
        label: bookmark.label.clone(),
    }
}

fn snapshot_lane_toggle(id: EntityId, toggle: &LaneToggle) -> LaneToggleSnapshot {
    LaneToggleSnapshot {
        id,
        time: toggle.time(),
        lane: toggle.lane,
        enabled: toggle.enabled,
    }
}

impl Chart {
    /// Capture the full chart as plain values
    pub fn snapshot(&self) -> ChartSnapshot {
        let metadata = self.metadata.borrow();
        ChartSnapshot {
            title: metadata.title.clone(),
            artist: metadata.artist.clone(),
            charter: metadata.charter.clone(),
            level: metadata.level,
            audio_offset_ms: metadata.audio_offset_ms,
            layers: snapshot_list(&self.layers, snapshot_layer),
            global_events: snapshot_list(&self.global_events, snapshot_event),
            bookmarks: snapshot_list(&self.bookmarks, snapshot_bookmark),
            lane_toggles: snapshot_list(&self.lane_toggles, snapshot_lane_toggle),
        }
    }
}

impl Stage {
    pub fn snapshot(&self) -> StageSnapshot {
        StageSnapshot {
            name: self.name().to_string(),
            background: self.background.clone(),
            songs: self.songs().clone(),
        }
    }
}

impl CosmeticItem {
    pub fn snapshot(&self) -> CosmeticSnapshot {
        CosmeticSnapshot {
            name: self.name.clone(),
            description: self.description.clone(),
            rarity: self.rarity,
            price: self.price,
            icon: self.icon.clone(),
        }
    }
}

impl<T> Selection<T> {
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            members: self.members().iter().map(Handle::id).collect(),
            anchor: self.anchor().map(Handle::id),
        }
    }
}
