// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use application::{CatalogBrowser, HistoryLog, NoteGenerator, PreferenceStore};
use chrono::Local;
use domain::Preferences;
use infrastructure::config::default_config_path;
use infrastructure::{Config, ContentRenderer, FileStore, HttpNoteService};
use ports::{HtmlPresenter, TextPresenter};
use tracing::{debug, info, warn};
use crate::cli::args::{Args, Command, OutputFormat};

/// Options of a single `generate` invocation
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub topic: String,
    pub subject: Option<String>,
    pub note_type: Option<String>,
    pub format: OutputFormat,
    pub print: bool,
    pub output: Option<PathBuf>,
    pub download: Option<PathBuf>,
}

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notegen with arguments");

    let config = load_config(args.config.as_deref())?;
    let server = args
        .server
        .clone()
        .unwrap_or_else(|| config.server.base_url.clone());
    let data_dir = match args.data_dir.clone() {
        Some(dir) => dir,
        None => config.data_dir()?,
    };
    debug!(%server, data_dir = %data_dir.display(), "Resolved settings");
    let store = FileStore::new(data_dir);

    match args.command {
        Command::Generate {
            topic,
            subject,
            note_type,
            format,
            print,
            output,
            download,
        } => {
            let service = HttpNoteService::new(&server, config.timeout())?;
            let options = GenerateOptions {
                topic,
                subject,
                note_type,
                format,
                print,
                output,
                download,
            };
            generate(service, store, &config, options).await
        }
        Command::History { clear } => show_history(store, clear),
        Command::Prefs { subject, note_type } => update_preferences(store, &config, subject, note_type),
        Command::Subjects => {
            let browser = CatalogBrowser::new(HttpNoteService::new(&server, config.timeout())?);
            for subject in browser.subjects().await? {
                println!("{}\t{}", subject.id, subject.name);
            }
            Ok(())
        }
        Command::Topics { subject } => {
            let browser = CatalogBrowser::new(HttpNoteService::new(&server, config.timeout())?);
            for topic in browser.topics(&subject).await? {
                println!("{topic}");
            }
            Ok(())
        }
    }
}

/// Explicit config path must exist; the default location is optional
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => match default_config_path() {
            Ok(path) => Config::load_or_default(path),
            Err(e) => {
                debug!(error = %e, "No config location, using defaults");
                Ok(Config::default())
            }
        },
    }
}

pub async fn generate<S>(
    service: S,
    store: FileStore,
    config: &Config,
    options: GenerateOptions,
) -> Result<()>
where
    S: application::NoteService,
{
    let mut preferences =
        PreferenceStore::with_fallback(store.clone(), config.default_preferences());
    let saved = preferences.load();
    let explicit = options.subject.is_some() || options.note_type.is_some();
    let prefs = Preferences {
        subject: options.subject.unwrap_or(saved.subject),
        note_type: options.note_type.unwrap_or(saved.note_type),
    };
    if explicit {
        if let Err(e) = preferences.save(&prefs) {
            warn!(error = %e, "Failed to save preferences");
        }
    }

    let mut generator = NoteGenerator::new(service, store);
    info!(topic = %options.topic, subject = %prefs.subject, note_type = %prefs.note_type, "Generating notes");
    let response = generator
        .generate(&options.topic, &prefs.subject, &prefs.note_type)
        .await?;

    let mut renderer = ContentRenderer::new();
    let text = response
        .notes
        .as_ref()
        .map(|notes| TextPresenter::new().render(notes, Local::now().date_naive()));

    match options.format {
        OutputFormat::Html => {
            let presenter = HtmlPresenter::new();
            let html = if options.print {
                presenter.render_for_print(&response)
            } else {
                presenter.render(&response)
            };
            debug!(len = html.len(), "Generated HTML");

            match &options.output {
                Some(path) => {
                    renderer.write_file(path, &html)?;
                    info!(path = %path.display(), "Notes page written");
                }
                None => {
                    let temp_path = renderer.create_temp_file(&html)?;
                    renderer.open_in_browser(&temp_path)?;
                }
            }
        }
        OutputFormat::Text => match &text {
            Some(text) => println!("{text}"),
            None => warn!("No notes data received"),
        },
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&response)
                .context("Failed to serialize notes")?;
            println!("{json}");
        }
    }

    if let Some(dir) = &options.download {
        match &text {
            Some(text) => {
                let path = renderer.write_download(dir, &options.topic, text)?;
                info!(path = %path.display(), "Notes downloaded");
            }
            None => warn!("Nothing to download"),
        }
    }

    Ok(())
}

pub fn show_history(store: FileStore, clear: bool) -> Result<()> {
    let mut history = HistoryLog::new(store);
    if clear {
        history.clear()?;
        info!("History cleared");
        return Ok(());
    }

    let entries = history.entries()?;
    if entries.is_empty() {
        println!("No history yet");
    }
    for entry in entries {
        println!(
            "{}  {} ({})",
            entry.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            entry.topic,
            entry.subject
        );
    }
    Ok(())
}

pub fn update_preferences(
    store: FileStore,
    config: &Config,
    subject: Option<String>,
    note_type: Option<String>,
) -> Result<()> {
    let mut preferences = PreferenceStore::with_fallback(store, config.default_preferences());
    let mut prefs = preferences.load();

    if subject.is_some() || note_type.is_some() {
        if let Some(subject) = subject {
            prefs.subject = subject;
        }
        if let Some(note_type) = note_type {
            prefs.note_type = note_type;
        }
        preferences.save(&prefs)?;
        info!("Preferences saved");
    }

    println!("subject:   {}", prefs.subject);
    println!("note type: {}", prefs.note_type);
    Ok(())
}
