// src/infrastructure/renderer.rs
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use crate::util::text::download_filename;
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};
use tracing::{debug, instrument};

/// Writes rendered notes to disk and hands pages to the browser
#[derive(Debug, Default)]
pub struct ContentRenderer {
    // Keep last temp dir alive to prevent deletion
    temp_dir: Option<TempDir>,
}

impl ContentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_temp_file(&mut self, content: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("notegen-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join("notes.html");

        File::create(&file_path)
            .with_context(|| format!("Failed to create temp file at {}", file_path.display()))?
            .write_all(content.as_bytes())
            .context("Failed to write content to temporary file")?;

        self.temp_dir = Some(temp_dir);

        Ok(file_path)
    }

    /// Write `content` to `path`, creating parent directories
    pub fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(path = %path.display(), "Wrote file");
        Ok(())
    }

    /// Save a text export as `<dir>/<topic>_notes.txt`
    pub fn write_download(&self, dir: &Path, topic: &str, text: &str) -> Result<PathBuf> {
        let path = dir.join(download_filename(topic));
        self.write_file(&path, text)?;
        Ok(path)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        // Keep the temp directory alive briefly
        std::thread::sleep(std::time::Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_html_when_creating_temp_file_then_file_holds_content() {
        let mut renderer = ContentRenderer::new();

        let path = renderer.create_temp_file("<p>notes</p>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>notes</p>");
        assert!(path.ends_with("notes.html"));
    }

    #[test]
    fn given_text_when_downloading_then_writes_topic_named_file() {
        let temp_dir = TempDir::new().unwrap();
        let renderer = ContentRenderer::new();

        let path = renderer
            .write_download(temp_dir.path(), "Machine Learning", "Title\n=====")
            .unwrap();

        assert_eq!(path, temp_dir.path().join("machine_learning_notes.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), "Title\n=====");
    }

    #[test]
    fn given_nested_output_path_when_writing_then_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a/b/notes.html");

        ContentRenderer::new().write_file(&path, "x").unwrap();

        assert!(path.exists());
    }
}
