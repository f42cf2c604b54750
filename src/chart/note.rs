// Note representation for a chart layer
// A note sits on a lane at a time (in beats); hold notes own an ordered path of hold points.

use crate::chart::error::{DocumentError, DocumentResult, validate_time};
use crate::chart::handle::EntityList;
use serde::{Deserialize, Serialize};

/// Kind of a playable note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NoteKind {
    #[default]
    Tap,
    Hold,
    Flick,
    Drag,
}

/// A point along a hold note's path
#[derive(Debug, Clone, PartialEq)]
pub struct HoldPoint {
    /// Time in beats
    time: f64,

    /// Lane the path passes through at `time`
    pub lane: i32,
}

impl HoldPoint {
    /// Creates a new hold point
    pub fn new(time: f64, lane: i32) -> DocumentResult<Self> {
        Ok(Self {
            time: validate_time(time)?,
            lane,
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

/// A playable note in a chart layer
///
/// Not `Clone`: the hold point list is a shared collection, so a copy would
/// alias it.
#[derive(Debug)]
pub struct Note {
    /// Time in beats from the chart start
    time: f64,

    /// Lane index (may be negative for off-screen lanes)
    pub lane: i32,

    /// Width in lanes
    width: f32,

    pub kind: NoteKind,

    /// Path points, only meaningful for hold notes
    pub hold_points: EntityList<HoldPoint>,
}

impl Note {
    /// Creates a new note of width 1
    pub fn new(time: f64, lane: i32, kind: NoteKind) -> DocumentResult<Self> {
        Ok(Self {
            time: validate_time(time)?,
            lane,
            width: 1.0,
            kind,
            hold_points: EntityList::new(),
        })
    }

    /// Creates a tap note
    pub fn tap(time: f64, lane: i32) -> DocumentResult<Self> {
        Self::new(time, lane, NoteKind::Tap)
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn set_time(&mut self, time: f64) -> DocumentResult<()> {
        self.time = validate_time(time)?;
        Ok(())
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn set_width(&mut self, width: f32) -> DocumentResult<()> {
        if !width.is_finite() || width <= 0.0 {
            return Err(DocumentError::InvalidWidth(width));
        }
        self.width = width;
        Ok(())
    }

    /// Time of the last hold point, or the note time for non-hold notes
    pub fn end_time(&self) -> f64 {
        self.hold_points
            .map(|p| p.borrow().time())
            .into_iter()
            .fold(self.time, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::handle::Handle;

    #[test]
    fn test_note_creation() {
        let note = Note::new(4.0, 2, NoteKind::Flick).unwrap();

        assert_eq!(note.time(), 4.0);
        assert_eq!(note.lane, 2);
        assert_eq!(note.width(), 1.0);
        assert_eq!(note.kind, NoteKind::Flick);
        assert!(note.hold_points.is_empty());
    }

    #[test]
    fn test_invalid_note_time() {
        assert!(Note::tap(-1.0, 0).is_err());
        assert!(Note::tap(f64::NAN, 0).is_err());
    }

    #[test]
    fn test_invalid_width() {
        let mut note = Note::tap(0.0, 0).unwrap();
        assert!(note.set_width(0.0).is_err());
        assert!(note.set_width(f32::INFINITY).is_err());
        assert_eq!(note.width(), 1.0);
        note.set_width(2.5).unwrap();
        assert_eq!(note.width(), 2.5);
    }

    #[test]
    fn test_hold_end_time() {
        let note = Note::new(1.0, 0, NoteKind::Hold).unwrap();
        assert_eq!(note.end_time(), 1.0);

        note.hold_points.push(Handle::new(HoldPoint::new(3.0, 1).unwrap()));
        note.hold_points.push(Handle::new(HoldPoint::new(2.0, 2).unwrap()));
        assert_eq!(note.end_time(), 3.0);
    }
}
