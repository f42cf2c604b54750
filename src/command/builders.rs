// Multi-entity edits built from several operations
//
// Every builder returns one composite, so the user action is a single undo
// step. Index-capturing sub-operations are ordered by descending index: each
// one then sees the collection exactly as it was when the builder ran.

use crate::chart::document::Chart;
use crate::chart::event::ChartEvent;
use crate::chart::handle::Handle;
use crate::chart::layer::Layer;
use crate::chart::note::Note;
use crate::chart::selection::Selection;
use crate::command::commands;
use crate::command::operation::Operation;

fn plural(count: usize, what: &str) -> String {
    if count == 1 {
        format!("1 {}", what)
    } else {
        format!("{} {}s", count, what)
    }
}

/// Delete notes from whichever layers hold them
///
/// Selected notes are deselected first so the selection never points at a
/// deleted note. Notes not found in any layer are skipped, and a note listed
/// more than once is deleted once.
pub fn delete_notes(
    chart: &Chart,
    selection: &Handle<Selection<Note>>,
    notes: &[Handle<Note>],
) -> Operation {
    let mut unique: Vec<&Handle<Note>> = Vec::with_capacity(notes.len());
    for note in notes {
        if !unique.iter().any(|seen| seen.ptr_eq(note)) {
            unique.push(note);
        }
    }

    let mut deselect: Vec<(usize, &Handle<Note>)> = {
        let current = selection.borrow();
        unique
            .iter()
            .filter_map(|&note| current.position(note).map(|i| (i, note)))
            .collect()
    };
    deselect.sort_by(|a, b| b.0.cmp(&a.0));

    let mut remove: Vec<(usize, Handle<Layer>, &Handle<Note>)> = unique
        .iter()
        .filter_map(|&note| {
            let layer = chart.layer_of(note)?;
            let index = layer.borrow().notes.position(note)?;
            Some((index, layer, note))
        })
        .collect();
    remove.sort_by(|a, b| b.0.cmp(&a.0));

    if remove.len() < unique.len() {
        log::warn!(
            "Skipping {} not owned by any layer",
            plural(unique.len() - remove.len(), "note")
        );
    }

    let description = format!("Delete {}", plural(remove.len(), "note"));
    let mut operations = Vec::with_capacity(deselect.len() + remove.len());
    operations.extend(
        deselect
            .into_iter()
            .map(|(_, note)| commands::deselect_note(selection, note)),
    );
    operations.extend(
        remove
            .into_iter()
            .map(|(_, layer, note)| commands::remove_note(&layer, note)),
    );

    Operation::composite(description, operations)
}

/// Move notes in time by `delta` beats
///
/// A shift that would put any note before beat 0 is rejected on apply and
/// leaves every note where it was.
pub fn shift_notes(notes: &[Handle<Note>], delta: f64) -> Operation {
    let operations = notes
        .iter()
        .map(|note| {
            let time = note.borrow().time() + delta;
            commands::set_note_time(note, time)
        })
        .collect();

    Operation::composite(
        format!("Shift {} by {} beats", plural(notes.len(), "note"), delta),
        operations,
    )
}

/// Deselect every selected note
pub fn clear_note_selection(selection: &Handle<Selection<Note>>) -> Operation {
    let members = selection.borrow().members().to_vec();
    let operations = members
        .iter()
        .rev()
        .map(|note| commands::deselect_note(selection, note))
        .collect();

    Operation::composite("Clear note selection", operations)
}

/// Deselect every selected event
pub fn clear_event_selection(selection: &Handle<Selection<ChartEvent>>) -> Operation {
    let members = selection.borrow().members().to_vec();
    let operations = members
        .iter()
        .rev()
        .map(|event| commands::deselect_event(selection, event))
        .collect();

    Operation::composite("Clear event selection", operations)
}

/// Move a note from one layer to another at `index`
///
/// Yields an empty composite when `from` does not hold the note.
pub fn move_note_to_layer(
    from: &Handle<Layer>,
    to: &Handle<Layer>,
    note: &Handle<Note>,
    index: isize,
) -> Operation {
    let description = format!("Move note to {}", to.borrow().name());
    if !from.borrow().notes.contains(note) {
        log::warn!(
            "Note {} is not in layer {}, nothing to move",
            note.id(),
            from.borrow().name()
        );
        return Operation::composite(description, Vec::new());
    }
    Operation::composite(
        description,
        vec![
            commands::remove_note(from, note),
            commands::add_note(to, note.clone(), index),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::trait_def::Reversible;

    fn chart_with_notes(count: usize) -> (Chart, Handle<Layer>, Vec<Handle<Note>>) {
        let chart = Chart::new("Song").unwrap();
        let layer = chart.layers.get(0).unwrap();
        let notes: Vec<_> = (0..count)
            .map(|i| Handle::new(Note::tap(i as f64, 0).unwrap()))
            .collect();
        for note in &notes {
            layer.borrow().notes.push(note.clone());
        }
        (chart, layer, notes)
    }

    #[test]
    fn test_delete_notes_restores_order_and_selection() {
        let (chart, layer, notes) = chart_with_notes(4);
        let selection = Handle::new(Selection::new());
        for note in [&notes[3], &notes[0], &notes[2]] {
            commands::select_note(&selection, note).apply().unwrap();
        }
        let before = selection.borrow().snapshot();

        let op = delete_notes(&chart, &selection, &[notes[0].clone(), notes[2].clone()]);
        assert_eq!(op.description(), "Delete 2 notes");

        op.apply().unwrap();
        let ids = layer.borrow().notes.map(|n| n.id());
        assert_eq!(ids, vec![notes[1].id(), notes[3].id()]);
        assert_eq!(selection.borrow().len(), 1);
        assert!(selection.borrow().anchor().is_none());

        op.revert().unwrap();
        let ids = layer.borrow().notes.map(|n| n.id());
        assert_eq!(ids, notes.iter().map(|n| n.id()).collect::<Vec<_>>());
        assert_eq!(selection.borrow().snapshot(), before);
    }

    #[test]
    fn test_delete_notes_across_layers() {
        let (chart, first, notes) = chart_with_notes(2);
        let second = Handle::new(Layer::new("Second").unwrap());
        let other = Handle::new(Note::tap(5.0, 1).unwrap());
        second.borrow().notes.push(other.clone());
        chart.layers.push(second.clone());
        let selection = Handle::new(Selection::new());

        let op = delete_notes(&chart, &selection, &[notes[1].clone(), other.clone()]);
        op.apply().unwrap();
        assert_eq!(first.borrow().note_count(), 1);
        assert!(second.borrow().is_empty());

        op.revert().unwrap();
        assert_eq!(chart.note_count(), 3);
        assert!(second.borrow().notes.contains(&other));
    }

    #[test]
    fn test_delete_nothing_is_empty_composite() {
        let (chart, _, _) = chart_with_notes(1);
        let selection = Handle::new(Selection::new());
        let stray = Handle::new(Note::tap(0.0, 0).unwrap());

        assert!(delete_notes(&chart, &selection, &[]).is_empty_composite());
        assert!(delete_notes(&chart, &selection, &[stray]).is_empty_composite());
    }

    #[test]
    fn test_shift_notes() {
        let (_, _, notes) = chart_with_notes(3);
        let op = shift_notes(&notes, 2.0);

        op.apply().unwrap();
        let times: Vec<f64> = notes.iter().map(|n| n.borrow().time()).collect();
        assert_eq!(times, vec![2.0, 3.0, 4.0]);

        op.revert().unwrap();
        let times: Vec<f64> = notes.iter().map(|n| n.borrow().time()).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_shift_before_zero_is_atomic() {
        let (_, _, notes) = chart_with_notes(3);
        // Note 0 would land on -0.5, notes 1 and 2 are fine
        let op = shift_notes(&[notes[2].clone(), notes[1].clone(), notes[0].clone()], -0.5);

        assert!(op.apply().is_err());
        let times: Vec<f64> = notes.iter().map(|n| n.borrow().time()).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_clear_selection_round_trip() {
        let (_, _, notes) = chart_with_notes(3);
        let selection = Handle::new(Selection::new());
        for note in [&notes[1], &notes[0], &notes[2]] {
            commands::select_note(&selection, note).apply().unwrap();
        }
        let before = selection.borrow().snapshot();

        let op = clear_note_selection(&selection);
        op.apply().unwrap();
        assert!(selection.borrow().is_empty());
        assert!(selection.borrow().anchor().is_none());

        op.revert().unwrap();
        assert_eq!(selection.borrow().snapshot(), before);
    }

    #[test]
    fn test_clear_event_selection() {
        let selection = Handle::new(Selection::new());
        let event = Handle::new(ChartEvent::marker(0.0, "A").unwrap());
        commands::select_event(&selection, &event).apply().unwrap();

        let op = clear_event_selection(&selection);
        op.apply().unwrap();
        assert!(selection.borrow().is_empty());
        op.revert().unwrap();
        assert!(selection.borrow().anchor_is(&event));
    }

    #[test]
    fn test_move_note_to_layer() {
        let (_, from, notes) = chart_with_notes(2);
        let to = Handle::new(Layer::new("Fills").unwrap());

        let op = move_note_to_layer(&from, &to, &notes[0], 0);
        assert_eq!(op.description(), "Move note to Fills");
        op.apply().unwrap();
        assert_eq!(from.borrow().note_count(), 1);
        assert!(to.borrow().notes.contains(&notes[0]));

        op.revert().unwrap();
        assert!(to.borrow().is_empty());
        assert_eq!(from.borrow().notes.position(&notes[0]), Some(0));
    }

    #[test]
    fn test_delete_repeated_note_once() {
        let (chart, layer, notes) = chart_with_notes(2);
        let selection = Handle::new(Selection::new());
        commands::select_note(&selection, &notes[0]).apply().unwrap();

        let op = delete_notes(&chart, &selection, &[notes[0].clone(), notes[0].clone()]);
        assert_eq!(op.description(), "Delete 1 note");

        op.apply().unwrap();
        assert_eq!(layer.borrow().note_count(), 1);
        op.revert().unwrap();
        let ids = layer.borrow().notes.map(|n| n.id());
        assert_eq!(ids, vec![notes[0].id(), notes[1].id()]);
        assert_eq!(selection.borrow().len(), 1);
    }

    #[test]
    fn test_move_from_layer_without_the_note_does_nothing() {
        let (_, owner, notes) = chart_with_notes(1);
        let other = Handle::new(Layer::new("Other").unwrap());

        let op = move_note_to_layer(&other, &owner, &notes[0], 0);
        assert!(op.is_empty_composite());
        op.apply().unwrap();
        op.revert().unwrap();
        assert_eq!(owner.borrow().note_count(), 1);
        assert!(other.borrow().is_empty());
    }
}
