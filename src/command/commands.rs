// Concrete operation constructors
//
// Each constructor resolves the exact entity or collection it edits and reads
// the current value as the old value. Edits are not applied here; push the
// returned operation onto a history branch.

use crate::chart::cosmetic::{CosmeticItem, Rarity};
use crate::chart::document::{Bookmark, Chart, ChartMetadata, LaneToggle};
use crate::chart::error::DocumentResult;
use crate::chart::event::ChartEvent;
use crate::chart::handle::{EntityList, Handle};
use crate::chart::layer::Layer;
use crate::chart::note::{HoldPoint, Note, NoteKind};
use crate::chart::selection::Selection;
use crate::chart::stage::{SongRef, Stage, StageSlot};
use crate::chart::timeline::TimeSignature;
use crate::command::edits::{
    DeselectEntity, FieldEdit, InsertEntity, RemoveEntity, SelectEntity, SwapEntities,
    SwapStageSongs,
};
use crate::command::operation::Operation;
use crate::command::setter::{BoundSetter, Field};

// ---------------------------------------------------------------------------
// Chart metadata
// ---------------------------------------------------------------------------

pub fn set_chart_title(metadata: &Handle<ChartMetadata>, title: impl Into<String>) -> Operation {
    let title = title.into();
    let old = metadata.borrow().title.clone();
    Operation::SetChartTitle(FieldEdit::new(
        format!("Set title to {}", title),
        Field::new(metadata, |m: &mut ChartMetadata, v: String| {
            m.title = v;
            Ok(())
        }),
        old,
        title,
    ))
}

pub fn set_chart_artist(metadata: &Handle<ChartMetadata>, artist: impl Into<String>) -> Operation {
    let artist = artist.into();
    let old = metadata.borrow().artist.clone();
    Operation::SetChartArtist(FieldEdit::new(
        format!("Set artist to {}", artist),
        Field::new(metadata, |m: &mut ChartMetadata, v: String| {
            m.artist = v;
            Ok(())
        }),
        old,
        artist,
    ))
}

pub fn set_chart_charter(
    metadata: &Handle<ChartMetadata>,
    charter: impl Into<String>,
) -> Operation {
    let charter = charter.into();
    let old = metadata.borrow().charter.clone();
    Operation::SetChartCharter(FieldEdit::new(
        format!("Set charter to {}", charter),
        Field::new(metadata, |m: &mut ChartMetadata, v: String| {
            m.charter = v;
            Ok(())
        }),
        old,
        charter,
    ))
}

pub fn set_chart_level(metadata: &Handle<ChartMetadata>, level: u32) -> Operation {
    let old = metadata.borrow().level;
    Operation::SetChartLevel(FieldEdit::new(
        format!("Set level to {}", level),
        Field::new(metadata, |m: &mut ChartMetadata, v: u32| {
            m.level = v;
            Ok(())
        }),
        old,
        level,
    ))
}

pub fn set_audio_offset(metadata: &Handle<ChartMetadata>, offset_ms: i32) -> Operation {
    let old = metadata.borrow().audio_offset_ms;
    Operation::SetAudioOffset(FieldEdit::new(
        format!("Set audio offset to {} ms", offset_ms),
        Field::new(metadata, |m: &mut ChartMetadata, v: i32| {
            m.audio_offset_ms = v;
            Ok(())
        }),
        old,
        offset_ms,
    ))
}

// ---------------------------------------------------------------------------
// Layers
// ---------------------------------------------------------------------------

pub fn add_layer(chart: &Chart, layer: Handle<Layer>, index: isize) -> Operation {
    Operation::AddLayer(InsertEntity::new("layer", &chart.layers, layer, index))
}

pub fn remove_layer(chart: &Chart, layer: &Handle<Layer>) -> Operation {
    Operation::RemoveLayer(RemoveEntity::new("layer", &chart.layers, layer.clone()))
}

pub fn swap_layers(chart: &Chart, first: usize, second: usize) -> Operation {
    Operation::SwapLayers(SwapEntities::new("layers", &chart.layers, first, second))
}

pub fn rename_layer(layer: &Handle<Layer>, name: impl Into<String>) -> Operation {
    let name = name.into();
    let old = layer.borrow().name().to_string();
    Operation::RenameLayer(FieldEdit::new(
        format!("Rename layer to {}", name),
        Field::new(layer, Layer::set_name),
        old,
        name,
    ))
}

pub fn set_layer_visible(layer: &Handle<Layer>, visible: bool) -> Operation {
    let old = layer.borrow().visible;
    let description = if visible { "Show layer" } else { "Hide layer" };
    Operation::SetLayerVisible(FieldEdit::new(
        description,
        Field::new(layer, |l: &mut Layer, v: bool| {
            l.visible = v;
            Ok(())
        }),
        old,
        visible,
    ))
}

pub fn set_layer_locked(layer: &Handle<Layer>, locked: bool) -> Operation {
    let old = layer.borrow().locked;
    let description = if locked { "Lock layer" } else { "Unlock layer" };
    Operation::SetLayerLocked(FieldEdit::new(
        description,
        Field::new(layer, |l: &mut Layer, v: bool| {
            l.locked = v;
            Ok(())
        }),
        old,
        locked,
    ))
}

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

pub fn add_note(layer: &Handle<Layer>, note: Handle<Note>, index: isize) -> Operation {
    Operation::AddNote(InsertEntity::new("note", &layer.borrow().notes, note, index))
}

pub fn remove_note(layer: &Handle<Layer>, note: &Handle<Note>) -> Operation {
    Operation::RemoveNote(RemoveEntity::new(
        "note",
        &layer.borrow().notes,
        note.clone(),
    ))
}

pub fn swap_notes(layer: &Handle<Layer>, first: usize, second: usize) -> Operation {
    Operation::SwapNotes(SwapEntities::new(
        "notes",
        &layer.borrow().notes,
        first,
        second,
    ))
}

pub fn set_note_time(note: &Handle<Note>, time: f64) -> Operation {
    let old = note.borrow().time();
    Operation::SetNoteTime(FieldEdit::new(
        format!("Move note to beat {}", time),
        Field::new(note, Note::set_time),
        old,
        time,
    ))
}

pub fn set_note_lane(note: &Handle<Note>, lane: i32) -> Operation {
    let old = note.borrow().lane;
    Operation::SetNoteLane(FieldEdit::new(
        format!("Move note to lane {}", lane),
        Field::new(note, |n: &mut Note, v: i32| {
            n.lane = v;
            Ok(())
        }),
        old,
        lane,
    ))
}

pub fn set_note_width(note: &Handle<Note>, width: f32) -> Operation {
    let old = note.borrow().width();
    Operation::SetNoteWidth(FieldEdit::new(
        format!("Set note width to {}", width),
        Field::new(note, Note::set_width),
        old,
        width,
    ))
}

pub fn set_note_kind(note: &Handle<Note>, kind: NoteKind) -> Operation {
    let old = note.borrow().kind;
    Operation::SetNoteKind(FieldEdit::new(
        format!("Change note to {:?}", kind),
        Field::new(note, |n: &mut Note, v: NoteKind| {
            n.kind = v;
            Ok(())
        }),
        old,
        kind,
    ))
}

// ---------------------------------------------------------------------------
// Hold points
// ---------------------------------------------------------------------------

pub fn add_hold_point(note: &Handle<Note>, point: Handle<HoldPoint>, index: isize) -> Operation {
    Operation::AddHoldPoint(InsertEntity::new(
        "hold point",
        &note.borrow().hold_points,
        point,
        index,
    ))
}

pub fn remove_hold_point(note: &Handle<Note>, point: &Handle<HoldPoint>) -> Operation {
    Operation::RemoveHoldPoint(RemoveEntity::new(
        "hold point",
        &note.borrow().hold_points,
        point.clone(),
    ))
}

pub fn set_hold_point_time(point: &Handle<HoldPoint>, time: f64) -> Operation {
    let old = point.borrow().time();
    Operation::SetHoldPointTime(FieldEdit::new(
        format!("Move hold point to beat {}", time),
        Field::new(point, HoldPoint::set_time),
        old,
        time,
    ))
}

pub fn set_hold_point_lane(point: &Handle<HoldPoint>, lane: i32) -> Operation {
    let old = point.borrow().lane;
    Operation::SetHoldPointLane(FieldEdit::new(
        format!("Move hold point to lane {}", lane),
        Field::new(point, |p: &mut HoldPoint, v: i32| {
            p.lane = v;
            Ok(())
        }),
        old,
        lane,
    ))
}

// ---------------------------------------------------------------------------
// Events
//
// Event collections are passed directly so the same constructors serve a
// layer's events and the chart's global events.
// ---------------------------------------------------------------------------

pub fn add_event(
    events: &EntityList<ChartEvent>,
    event: Handle<ChartEvent>,
    index: isize,
) -> Operation {
    Operation::AddEvent(InsertEntity::new("event", events, event, index))
}

pub fn remove_event(events: &EntityList<ChartEvent>, event: &Handle<ChartEvent>) -> Operation {
    Operation::RemoveEvent(RemoveEntity::new("event", events, event.clone()))
}

pub fn swap_events(events: &EntityList<ChartEvent>, first: usize, second: usize) -> Operation {
    Operation::SwapEvents(SwapEntities::new("events", events, first, second))
}

pub fn set_event_time(event: &Handle<ChartEvent>, time: f64) -> Operation {
    let old = event.borrow().time();
    Operation::SetEventTime(FieldEdit::new(
        format!("Move event to beat {}", time),
        Field::new(event, ChartEvent::set_time),
        old,
        time,
    ))
}

/// Change the BPM of a tempo event
///
/// Fails if the event is not a tempo event.
pub fn set_tempo(event: &Handle<ChartEvent>, bpm: f64) -> DocumentResult<Operation> {
    let old = event.borrow().tempo_bpm()?;
    Ok(Operation::SetTempo(FieldEdit::new(
        format!("Set tempo to {} BPM", bpm),
        Field::new(event, ChartEvent::set_tempo_bpm),
        old,
        bpm,
    )))
}

pub fn set_metre(
    event: &Handle<ChartEvent>,
    time_signature: TimeSignature,
) -> DocumentResult<Operation> {
    let old = event.borrow().time_signature()?;
    Ok(Operation::SetMetre(FieldEdit::new(
        format!("Set metre to {}", time_signature),
        Field::new(event, ChartEvent::set_metre),
        old,
        time_signature,
    )))
}

pub fn set_speed(event: &Handle<ChartEvent>, multiplier: f64) -> DocumentResult<Operation> {
    let old = event.borrow().speed_multiplier()?;
    Ok(Operation::SetSpeed(FieldEdit::new(
        format!("Set speed to {}x", multiplier),
        Field::new(event, ChartEvent::set_speed),
        old,
        multiplier,
    )))
}

pub fn set_visibility(event: &Handle<ChartEvent>, visible: bool) -> DocumentResult<Operation> {
    let old = event.borrow().visible()?;
    let description = if visible {
        "Show notes from event"
    } else {
        "Hide notes from event"
    };
    Ok(Operation::SetVisibility(FieldEdit::new(
        description,
        Field::new(event, ChartEvent::set_visible),
        old,
        visible,
    )))
}

pub fn set_marker_label(
    event: &Handle<ChartEvent>,
    label: impl Into<String>,
) -> DocumentResult<Operation> {
    let label = label.into();
    let old = event.borrow().marker_label()?;
    Ok(Operation::SetMarkerLabel(FieldEdit::new(
        format!("Rename marker to {}", label),
        Field::new(event, ChartEvent::set_marker_label),
        old,
        label,
    )))
}

// ---------------------------------------------------------------------------
// Bookmarks
// ---------------------------------------------------------------------------

pub fn add_bookmark(chart: &Chart, bookmark: Handle<Bookmark>, index: isize) -> Operation {
    Operation::AddBookmark(InsertEntity::new(
        "bookmark",
        &chart.bookmarks,
        bookmark,
        index,
    ))
}

pub fn remove_bookmark(chart: &Chart, bookmark: &Handle<Bookmark>) -> Operation {
    Operation::RemoveBookmark(RemoveEntity::new(
        "bookmark",
        &chart.bookmarks,
        bookmark.clone(),
    ))
}

pub fn set_bookmark_time(bookmark: &Handle<Bookmark>, time: f64) -> Operation {
    let old = bookmark.borrow().time();
    Operation::SetBookmarkTime(FieldEdit::new(
        format!("Move bookmark to beat {}", time),
        Field::new(bookmark, Bookmark::set_time),
        old,
        time,
    ))
}

pub fn set_bookmark_label(bookmark: &Handle<Bookmark>, label: impl Into<String>) -> Operation {
    let label = label.into();
    let old = bookmark.borrow().label.clone();
    Operation::SetBookmarkLabel(FieldEdit::new(
        format!("Rename bookmark to {}", label),
        Field::new(bookmark, |b: &mut Bookmark, v: String| {
            b.label = v;
            Ok(())
        }),
        old,
        label,
    ))
}

// ---------------------------------------------------------------------------
// Lane toggles
// ---------------------------------------------------------------------------

pub fn add_lane_toggle(chart: &Chart, toggle: Handle<LaneToggle>, index: isize) -> Operation {
    Operation::AddLaneToggle(InsertEntity::new(
        "lane toggle",
        &chart.lane_toggles,
        toggle,
        index,
    ))
}

pub fn remove_lane_toggle(chart: &Chart, toggle: &Handle<LaneToggle>) -> Operation {
    Operation::RemoveLaneToggle(RemoveEntity::new(
        "lane toggle",
        &chart.lane_toggles,
        toggle.clone(),
    ))
}

pub fn set_lane_toggle_time(toggle: &Handle<LaneToggle>, time: f64) -> Operation {
    let old = toggle.borrow().time();
    Operation::SetLaneToggleTime(FieldEdit::new(
        format!("Move lane toggle to beat {}", time),
        Field::new(toggle, LaneToggle::set_time),
        old,
        time,
    ))
}

pub fn set_lane_toggle_lane(toggle: &Handle<LaneToggle>, lane: i32) -> Operation {
    let old = toggle.borrow().lane;
    Operation::SetLaneToggleLane(FieldEdit::new(
        format!("Move lane toggle to lane {}", lane),
        Field::new(toggle, |t: &mut LaneToggle, v: i32| {
            t.lane = v;
            Ok(())
        }),
        old,
        lane,
    ))
}

pub fn set_lane_toggle_enabled(toggle: &Handle<LaneToggle>, enabled: bool) -> Operation {
    let old = toggle.borrow().enabled;
    let description = if enabled {
        "Enable lane toggle"
    } else {
        "Disable lane toggle"
    };
    Operation::SetLaneToggleEnabled(FieldEdit::new(
        description,
        Field::new(toggle, |t: &mut LaneToggle, v: bool| {
            t.enabled = v;
            Ok(())
        }),
        old,
        enabled,
    ))
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

pub fn rename_stage(stage: &Handle<Stage>, name: impl Into<String>) -> Operation {
    let name = name.into();
    let old = stage.borrow().name().to_string();
    Operation::RenameStage(FieldEdit::new(
        format!("Rename stage to {}", name),
        Field::new(stage, Stage::set_name),
        old,
        name,
    ))
}

pub fn set_stage_background(stage: &Handle<Stage>, background: impl Into<String>) -> Operation {
    let background = background.into();
    let old = stage.borrow().background.clone();
    Operation::SetStageBackground(FieldEdit::new(
        format!("Set stage background to {}", background),
        Field::new(stage, |s: &mut Stage, v: String| {
            s.background = v;
            Ok(())
        }),
        old,
        background,
    ))
}

/// Put a song into one stage slot, or empty it with `None`
pub fn set_stage_song(stage: &Handle<Stage>, slot: StageSlot, song: Option<SongRef>) -> Operation {
    let old = stage.borrow().song(slot).cloned();
    let description = match &song {
        Some(song) => format!("Set {} to {}", slot, song.chart_id),
        None => format!("Clear {}", slot),
    };
    let target = stage.clone();
    Operation::SetStageSong(FieldEdit::new(
        description,
        BoundSetter::new(move |value: Option<SongRef>| {
            target.borrow_mut().set_song(slot, value);
            Ok(())
        }),
        old,
        song,
    ))
}

pub fn swap_stage_songs(stage: &Handle<Stage>, first: StageSlot, second: StageSlot) -> Operation {
    Operation::SwapStageSongs(SwapStageSongs::new(stage, first, second))
}

// ---------------------------------------------------------------------------
// Cosmetic item
// ---------------------------------------------------------------------------

pub fn set_item_name(item: &Handle<CosmeticItem>, name: impl Into<String>) -> Operation {
    let name = name.into();
    let old = item.borrow().name.clone();
    Operation::SetItemName(FieldEdit::new(
        format!("Rename item to {}", name),
        Field::new(item, |i: &mut CosmeticItem, v: String| {
            i.name = v;
            Ok(())
        }),
        old,
        name,
    ))
}

pub fn set_item_description(
    item: &Handle<CosmeticItem>,
    description: impl Into<String>,
) -> Operation {
    let description = description.into();
    let old = item.borrow().description.clone();
    Operation::SetItemDescription(FieldEdit::new(
        "Edit item description",
        Field::new(item, |i: &mut CosmeticItem, v: String| {
            i.description = v;
            Ok(())
        }),
        old,
        description,
    ))
}

pub fn set_item_rarity(item: &Handle<CosmeticItem>, rarity: Rarity) -> Operation {
    let old = item.borrow().rarity;
    Operation::SetItemRarity(FieldEdit::new(
        format!("Set rarity to {:?}", rarity),
        Field::new(item, |i: &mut CosmeticItem, v: Rarity| {
            i.rarity = v;
            Ok(())
        }),
        old,
        rarity,
    ))
}

pub fn set_item_price(item: &Handle<CosmeticItem>, price: u32) -> Operation {
    let old = item.borrow().price;
    Operation::SetItemPrice(FieldEdit::new(
        format!("Set price to {}", price),
        Field::new(item, |i: &mut CosmeticItem, v: u32| {
            i.price = v;
            Ok(())
        }),
        old,
        price,
    ))
}

pub fn set_item_icon(item: &Handle<CosmeticItem>, icon: impl Into<String>) -> Operation {
    let icon = icon.into();
    let old = item.borrow().icon.clone();
    Operation::SetItemIcon(FieldEdit::new(
        format!("Set icon to {}", icon),
        Field::new(item, |i: &mut CosmeticItem, v: String| {
            i.icon = v;
            Ok(())
        }),
        old,
        icon,
    ))
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

pub fn select_note(selection: &Handle<Selection<Note>>, note: &Handle<Note>) -> Operation {
    Operation::SelectNote(SelectEntity::new("note", selection, note.clone()))
}

pub fn deselect_note(selection: &Handle<Selection<Note>>, note: &Handle<Note>) -> Operation {
    Operation::DeselectNote(DeselectEntity::new("note", selection, note.clone()))
}

pub fn select_event(
    selection: &Handle<Selection<ChartEvent>>,
    event: &Handle<ChartEvent>,
) -> Operation {
    Operation::SelectEvent(SelectEntity::new("event", selection, event.clone()))
}

pub fn deselect_event(
    selection: &Handle<Selection<ChartEvent>>,
    event: &Handle<ChartEvent>,
) -> Operation {
    Operation::DeselectEvent(DeselectEntity::new("event", selection, event.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::event::EventKind;
    use crate::command::trait_def::{CommandError, Reversible};

    fn round_trip<T: PartialEq + std::fmt::Debug>(op: &Operation, read: impl Fn() -> T) {
        let before = read();
        op.apply().unwrap();
        let after = read();
        assert_ne!(before, after, "{} did not change anything", op.description());
        op.revert().unwrap();
        assert_eq!(read(), before, "{} did not restore", op.description());
        op.apply().unwrap();
        assert_eq!(read(), after, "{} did not re-apply", op.description());
    }

    #[test]
    fn test_chart_metadata_edits() {
        let chart = Chart::new("Song").unwrap();
        let meta = chart.metadata.clone();

        round_trip(&set_chart_title(&meta, "Other"), || meta.borrow().title.clone());
        round_trip(&set_chart_artist(&meta, "Band"), || meta.borrow().artist.clone());
        round_trip(&set_chart_charter(&meta, "Me"), || meta.borrow().charter.clone());
        round_trip(&set_chart_level(&meta, 12), || meta.borrow().level);
        round_trip(&set_audio_offset(&meta, -35), || meta.borrow().audio_offset_ms);
    }

    #[test]
    fn test_layer_collection_edits() {
        let chart = Chart::new("Song").unwrap();
        let first = chart.layers.get(0).unwrap();
        let second = Handle::new(Layer::new("Second").unwrap());

        let ids = || chart.layers.map(|l| l.id());
        round_trip(&add_layer(&chart, second.clone(), -1), ids);
        round_trip(&swap_layers(&chart, 0, 1), ids);
        round_trip(&remove_layer(&chart, &first), ids);

        round_trip(&rename_layer(&second, "Renamed"), || {
            second.borrow().name().to_string()
        });
        round_trip(&set_layer_visible(&second, false), || second.borrow().visible);
        round_trip(&set_layer_locked(&second, true), || second.borrow().locked);
    }

    #[test]
    fn test_note_edits() {
        let layer = Handle::new(Layer::new("Main").unwrap());
        let a = Handle::new(Note::tap(0.0, 0).unwrap());
        let b = Handle::new(Note::tap(1.0, 1).unwrap());
        layer.borrow().notes.push(a.clone());

        let ids = || layer.borrow().notes.map(|n| n.id());
        round_trip(&add_note(&layer, b.clone(), 0), ids);
        round_trip(&swap_notes(&layer, 0, 1), ids);
        round_trip(&remove_note(&layer, &a), ids);

        round_trip(&set_note_time(&b, 2.5), || b.borrow().time());
        round_trip(&set_note_lane(&b, 3), || b.borrow().lane);
        round_trip(&set_note_width(&b, 2.0), || b.borrow().width());
        round_trip(&set_note_kind(&b, NoteKind::Flick), || b.borrow().kind);
    }

    #[test]
    fn test_hold_point_edits() {
        let note = Handle::new(Note::new(0.0, 0, NoteKind::Hold).unwrap());
        let point = Handle::new(HoldPoint::new(1.0, 0).unwrap());

        round_trip(&add_hold_point(&note, point.clone(), 0), || {
            note.borrow().hold_points.len()
        });
        round_trip(&set_hold_point_time(&point, 2.0), || point.borrow().time());
        round_trip(&set_hold_point_lane(&point, 2), || point.borrow().lane);

        let remove = remove_hold_point(&note, &point);
        remove.apply().unwrap();
        assert!(note.borrow().hold_points.is_empty());
        remove.revert().unwrap();
        assert!(note.borrow().hold_points.contains(&point));
    }

    #[test]
    fn test_event_edits_on_global_list() {
        let chart = Chart::new("Song").unwrap();
        let tempo = Handle::new(ChartEvent::tempo(0.0, 120.0).unwrap());
        let marker = Handle::new(ChartEvent::marker(4.0, "Drop").unwrap());
        chart.global_events.push(tempo.clone());

        let ids = || chart.global_events.map(|e| e.id());
        round_trip(&add_event(&chart.global_events, marker.clone(), 7), ids);
        round_trip(&swap_events(&chart.global_events, 0, 1), ids);
        round_trip(&remove_event(&chart.global_events, &tempo), ids);

        round_trip(&set_event_time(&marker, 8.0), || marker.borrow().time());
        round_trip(&set_tempo(&tempo, 175.0).unwrap(), || {
            tempo.borrow().tempo_bpm().unwrap()
        });
        round_trip(&set_marker_label(&marker, "Bridge").unwrap(), || {
            marker.borrow().marker_label().unwrap()
        });
    }

    #[test]
    fn test_event_kind_edits() {
        let metre = Handle::new(ChartEvent::metre(0.0, 4, 4).unwrap());
        let speed = Handle::new(ChartEvent::speed(0.0, 1.0).unwrap());
        let hide = Handle::new(ChartEvent::new(0.0, EventKind::Visibility(true)).unwrap());

        let three_four = TimeSignature::new(3, 4).unwrap();
        round_trip(&set_metre(&metre, three_four).unwrap(), || {
            metre.borrow().time_signature().unwrap()
        });
        round_trip(&set_speed(&speed, 1.5).unwrap(), || {
            speed.borrow().speed_multiplier().unwrap()
        });
        round_trip(&set_visibility(&hide, false).unwrap(), || {
            hide.borrow().visible().unwrap()
        });
    }

    #[test]
    fn test_event_kind_mismatch_fails_at_construction() {
        let marker = Handle::new(ChartEvent::marker(0.0, "Intro").unwrap());
        assert!(set_tempo(&marker, 150.0).is_err());
        assert!(set_speed(&marker, 2.0).is_err());
        assert!(set_visibility(&marker, false).is_err());
    }

    #[test]
    fn test_invalid_tempo_rejected_on_apply() {
        let tempo = Handle::new(ChartEvent::tempo(0.0, 120.0).unwrap());
        let op = set_tempo(&tempo, 5000.0).unwrap();

        let err = op.apply().unwrap_err();
        assert!(matches!(err, CommandError::Rejected(_)));
        assert_eq!(tempo.borrow().tempo_bpm().unwrap(), 120.0);
    }

    #[test]
    fn test_bookmark_and_lane_toggle_edits() {
        let chart = Chart::new("Song").unwrap();
        let bookmark = Handle::new(Bookmark::new(16.0, "Chorus").unwrap());
        let toggle = Handle::new(LaneToggle::new(8.0, 5, true).unwrap());

        round_trip(&add_bookmark(&chart, bookmark.clone(), 0), || {
            chart.bookmarks.len()
        });
        round_trip(&set_bookmark_time(&bookmark, 32.0), || bookmark.borrow().time());
        round_trip(&set_bookmark_label(&bookmark, "Outro"), || {
            bookmark.borrow().label.clone()
        });
        round_trip(&remove_bookmark(&chart, &bookmark), || chart.bookmarks.len());

        round_trip(&add_lane_toggle(&chart, toggle.clone(), 0), || {
            chart.lane_toggles.len()
        });
        round_trip(&set_lane_toggle_time(&toggle, 9.0), || toggle.borrow().time());
        round_trip(&set_lane_toggle_lane(&toggle, 6), || toggle.borrow().lane);
        round_trip(&set_lane_toggle_enabled(&toggle, false), || {
            toggle.borrow().enabled
        });
        round_trip(&remove_lane_toggle(&chart, &toggle), || {
            chart.lane_toggles.len()
        });
    }

    #[test]
    fn test_stage_edits() {
        let stage = Handle::new(Stage::new("Finals").unwrap());
        let song = SongRef::new("opening", "hard");

        round_trip(&rename_stage(&stage, "Semis"), || {
            stage.borrow().name().to_string()
        });
        round_trip(&set_stage_background(&stage, "city.png"), || {
            stage.borrow().background.clone()
        });
        round_trip(
            &set_stage_song(&stage, StageSlot::First, Some(song.clone())),
            || stage.borrow().songs().clone(),
        );
        round_trip(
            &swap_stage_songs(&stage, StageSlot::First, StageSlot::Third),
            || stage.borrow().songs().clone(),
        );
        assert_eq!(stage.borrow().song(StageSlot::Third), Some(&song));

        let clear = set_stage_song(&stage, StageSlot::Third, None);
        assert_eq!(clear.description(), "Clear slot 3");
    }

    #[test]
    fn test_cosmetic_edits() {
        let item = Handle::new(CosmeticItem::new("Hat"));

        round_trip(&set_item_name(&item, "Crown"), || item.borrow().name.clone());
        round_trip(&set_item_description(&item, "Shiny"), || {
            item.borrow().description.clone()
        });
        round_trip(&set_item_rarity(&item, Rarity::Legendary), || {
            item.borrow().rarity
        });
        round_trip(&set_item_price(&item, 300), || item.borrow().price);
        round_trip(&set_item_icon(&item, "crown.png"), || item.borrow().icon.clone());
    }

    #[test]
    fn test_selection_edits() {
        let notes = Handle::new(Selection::new());
        let events = Handle::new(Selection::new());
        let note = Handle::new(Note::tap(0.0, 0).unwrap());
        let event = Handle::new(ChartEvent::marker(0.0, "A").unwrap());

        round_trip(&select_note(&notes, &note), || notes.borrow().len());
        round_trip(&deselect_note(&notes, &note), || notes.borrow().len());
        round_trip(&select_event(&events, &event), || events.borrow().len());
        round_trip(&deselect_event(&events, &event), || events.borrow().len());
    }

    #[test]
    fn test_descriptions() {
        let layer = Handle::new(Layer::new("A").unwrap());
        let note = Handle::new(Note::tap(0.0, 0).unwrap());
        assert_eq!(add_note(&layer, note.clone(), 0).description(), "Add note");
        assert_eq!(remove_note(&layer, &note).description(), "Remove note");
        assert_eq!(set_note_lane(&note, 2).description(), "Move note to lane 2");
        assert_eq!(set_layer_locked(&layer, true).description(), "Lock layer");
    }
}
