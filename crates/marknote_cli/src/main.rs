//! Terminal driver for the MarkNote core.
//!
//! # Responsibility
//! - Exercise the compose/decorate/save flow end-to-end from a terminal.
//! - Keep output deterministic for quick local sanity checks.

use marknote_core::db::open_db;
use marknote_core::{
    core_version, default_log_level, init_logging, live_markup, EditorService, SqliteKeyValueStore,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "marknote.sqlite3";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let db_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME));

    // Logging failure downgrades to stderr notice; composing must still work.
    let log_dir = std::env::temp_dir().join("marknote-logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("logging disabled: {err}");
    }

    let conn = open_db(&db_path)?;
    let kv = SqliteKeyValueStore::try_new(&conn)?;
    let mut service = EditorService::open(kv);

    println!(
        "marknote {} — {} saved note(s) in {}",
        core_version(),
        service.rendered().len(),
        db_path.display()
    );
    println!("type lines to compose; `:save` commits, `:list` shows saved notes, `:quit` exits");

    let stdin = io::stdin();
    let mut composed: Vec<String> = Vec::new();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match line.as_str() {
            ":quit" => break,
            ":list" => {
                for (index, note) in service.rendered().iter().enumerate() {
                    println!("[{index}] {}", note.html);
                }
            }
            ":save" => match service.save() {
                Ok(id) => {
                    println!("saved note {id}");
                    composed.clear();
                }
                Err(err) => eprintln!("save failed, note kept in editor: {err}"),
            },
            _ => {
                composed.push(line);
                service.on_change(composed.join("\n"));
                let last_block = composed.len() - 1;
                if let Some(decoration) = service
                    .decorations()
                    .into_iter()
                    .find(|decoration| decoration.block == last_block)
                {
                    let markup = live_markup(decoration.treatment);
                    println!("  ^ styled as <{} class=\"{}\">", markup.tag, markup.class);
                }
            }
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
