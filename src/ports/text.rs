// src/ports/text.rs
use crate::constants::TEXT_SEPARATOR_WIDTH;
use crate::domain::Notes;
use crate::ports::markup::strip_inline;
use crate::ports::{paragraph_lines, SectionBody};
use crate::util::text::clean_section_title;
use chrono::NaiveDate;
use std::fmt::Write;

/// Plain-text rendition of notes, used for copying and downloading
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, notes: &Notes, date: NaiveDate) -> String {
        let title = notes.title_or_default();
        let mut text = String::new();

        let _ = write!(text, "{title}\n{}\n\n", underline('=', title));
        let _ = write!(text, "{}\n\n", notes.metadata_labels().join(" | "));
        let _ = write!(text, "{}\n\n", "-".repeat(TEXT_SEPARATOR_WIDTH));

        for section in &notes.sections {
            let section_title = clean_section_title(&section.title);
            let _ = writeln!(text, "{section_title}\n{}", underline('-', &section_title));

            match SectionBody::of(&section.content) {
                SectionBody::List(items) => {
                    for item in items {
                        let item = item.trim_start();
                        if item.starts_with('•') {
                            let _ = writeln!(text, "{item}");
                        } else {
                            let _ = writeln!(text, "• {item}");
                        }
                    }
                }
                SectionBody::Paragraphs(items) => {
                    for line in paragraph_lines(items, strip_inline) {
                        let _ = writeln!(text, "{line}");
                    }
                }
                SectionBody::Text(content) => {
                    let _ = writeln!(text, "{content}");
                }
                SectionBody::Nothing => {}
            }
            text.push('\n');
        }

        text.push_str("\nGenerated by Student Note Generator");
        let _ = write!(text, "\nDate: {}", date.format("%Y-%m-%d"));
        text
    }
}

fn underline(mark: char, text: &str) -> String {
    mark.to_string().repeat(text.chars().count())
}
