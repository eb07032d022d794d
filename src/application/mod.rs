// src/application/mod.rs
pub mod catalog;
pub mod history;
pub mod note_generator;
pub mod preferences;
pub mod storage;

pub use catalog::CatalogBrowser;
pub use history::HistoryLog;
pub use note_generator::{NoteGenerator, NoteService};
pub use preferences::PreferenceStore;
pub use storage::KeyValueStore;
