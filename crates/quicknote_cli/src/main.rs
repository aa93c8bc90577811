//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `quicknote_core` linkage with a deterministic probe.
//! - Print the derived list of the starter notes for an optional query.
//!
//! Logging is enabled when `QUICKNOTE_LOG_DIR` is set; the level comes from
//! `QUICKNOTE_LOG_LEVEL` or the build-mode default.

use log::info;
use quicknote_core::{
    core_version, default_log_level, init_logging, ping, FuzzyRanker, InMemoryNoteStore,
    NoteService, SystemClock,
};

fn main() {
    println!("quicknote_core ping={}", ping());
    println!("quicknote_core version={}", core_version());

    if let Ok(log_dir) = std::env::var("QUICKNOTE_LOG_DIR") {
        let level = std::env::var("QUICKNOTE_LOG_LEVEL")
            .unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let mut service = NoteService::new(
        InMemoryNoteStore::with_welcome_notes(SystemClock),
        SystemClock,
        FuzzyRanker::default(),
    );
    service.set_search_query(query);

    let view = service.displayed_notes();
    info!(
        "event=cli_list module=cli status=ok total={} shown={}",
        view.total,
        view.items.len()
    );
    if let Some(empty) = view.empty_state {
        println!("{}: {}", empty.title(), empty.hint());
        return;
    }
    for note in &view.items {
        println!("{}\t{}\t{}", note.updated_at, note.heading, note.description);
    }
}
