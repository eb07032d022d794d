// src/util/text.rs
use regex::Regex;
use std::sync::LazyLock;

static PICTOGRAPHS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\x{FE0F}\x{200D}]").expect("valid pictograph pattern")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Remove emoji from a section title, with their variation selectors and joiners.
///
/// # Examples
///
/// ```
/// use notegen::util::text::clean_section_title;
///
/// assert_eq!(clean_section_title("⚡ Quick Reference"), "Quick Reference");
/// ```
pub fn clean_section_title(title: &str) -> String {
    PICTOGRAPHS.replace_all(title, "").trim().to_string()
}

/// File name for a downloaded text export of `topic`.
///
/// Whitespace runs become `_`, the result is lowercased and path
/// separators are neutralised. An empty topic falls back to `notes`.
///
/// # Examples
///
/// ```
/// use notegen::util::text::download_filename;
///
/// assert_eq!(download_filename("World War II"), "world_war_ii_notes.txt");
/// ```
pub fn download_filename(topic: &str) -> String {
    let topic = topic.trim();
    let topic = if topic.is_empty() { "notes" } else { topic };
    let slug = WHITESPACE
        .replace_all(topic, "_")
        .to_lowercase()
        .replace(['/', '\\'], "_");
    format!("{slug}_notes.txt")
}
