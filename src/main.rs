// Chart Studio - scripted editing session through the history engine
// Run with: cargo run -- [config.ron]
// Set RUST_LOG=debug to see each push/undo/redo.

use chart_studio::chart::{ChartEvent, CosmeticItem, Rarity, SongRef};
use chart_studio::command::{builders, commands};
use chart_studio::{
    Chart, EditorConfig, EditorHistories, Handle, Layer, Note, NoteKind, Selection, Stage,
    StageSlot, SurfaceKind,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => EditorConfig::load(&path)?,
        None => EditorConfig::default(),
    };

    println!("=== Chart Studio ===");
    match config.history.max_depth {
        Some(depth) => println!("History depth: {} steps per surface\n", depth),
        None => println!("History depth: unbounded\n"),
    }

    let mut histories = EditorHistories::new(&config);
    let chart = Chart::new("Demo Song")?;
    let main_layer = chart
        .layers
        .get(0)
        .ok_or("new chart has no default layer")?;
    let selection = Handle::new(Selection::new());

    // Chart surface: lay down a short phrase
    let meta = chart.metadata.clone();
    histories.push(commands::set_chart_artist(&meta, "Demo Artist"))?;
    histories.push(commands::set_chart_level(&meta, 9))?;

    let tempo = Handle::new(ChartEvent::tempo(0.0, 128.0)?);
    histories.push(commands::add_event(&chart.global_events, tempo.clone(), -1))?;

    let notes: Vec<Handle<Note>> = (0..4)
        .map(|beat| Note::tap(beat as f64, beat % 4).map(Handle::new))
        .collect::<Result<_, _>>()?;
    let placements = notes
        .iter()
        .map(|note| commands::add_note(&main_layer, note.clone(), -1))
        .collect();
    histories.push(chart_studio::Operation::composite("Place phrase", placements))?;

    histories.push(commands::set_note_kind(&notes[3], NoteKind::Flick))?;
    histories.push(commands::select_note(&selection, &notes[1]))?;
    histories.push(commands::select_note(&selection, &notes[2]))?;
    histories.push(builders::shift_notes(&notes[1..3], 0.5))?;

    let fills = Handle::new(Layer::new("Fills")?);
    histories.push(commands::add_layer(&chart, fills.clone(), -1))?;
    histories.push(builders::move_note_to_layer(&main_layer, &fills, &notes[0], 0))?;
    histories.push(commands::set_tempo(&tempo, 140.0)?)?;

    // A rejected edit leaves the history untouched
    if let Err(err) = histories.push(commands::set_tempo(&tempo, 4000.0)?) {
        println!("Rejected: {}", err);
    }

    println!("\nChart history (most recent first):");
    for label in histories.active_branch().undo_descriptions() {
        println!("  - {}", label);
    }

    for _ in 0..2 {
        if let Some(label) = histories.undo()? {
            println!("Undo: {}", label);
        }
    }
    if let Some(label) = histories.redo()? {
        println!("Redo: {}", label);
    }

    // Stage and cosmetic surfaces keep their own histories
    let stage = Handle::new(Stage::new("Finals")?);
    histories.set_active(SurfaceKind::Stage);
    histories.push(commands::set_stage_song(
        &stage,
        StageSlot::First,
        Some(SongRef::new("demo-song", "hard")),
    ))?;
    histories.push(commands::swap_stage_songs(&stage, StageSlot::First, StageSlot::Third))?;

    let item = Handle::new(CosmeticItem::new("Neon Trail"));
    histories.set_active(SurfaceKind::Cosmetic);
    histories.push(commands::set_item_rarity(&item, Rarity::Epic))?;
    histories.push(commands::set_item_price(&item, 1200))?;

    println!();
    for surface in SurfaceKind::ALL {
        let branch = histories.branch(surface);
        println!(
            "{:<9} undo: {:>2}  redo: {:>2}",
            surface.to_string(),
            branch.undo_count(),
            branch.redo_count()
        );
    }

    println!("\nFinal chart:");
    println!("{}", serde_json::to_string_pretty(&chart.snapshot())?);
    println!("\nFinal stage:");
    println!("{}", serde_json::to_string_pretty(&stage.borrow().snapshot())?);
    println!("\nFinal item:");
    println!("{}", serde_json::to_string_pretty(&item.borrow().snapshot())?);

    Ok(())
}
