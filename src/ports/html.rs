// src/ports/html.rs
use crate::domain::{GenerateResponse, Notes, Section};
use crate::ports::markup::format_inline;
use crate::ports::{paragraph_lines, SectionBody};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write;
use tracing::{instrument, warn};

/// Font Awesome icon and colour per section type
const SECTION_ICONS: &[(&str, &str, &str)] = &[
    ("concepts", "fa-lightbulb", "#fbbf24"),
    ("points", "fa-list", "#4f46e5"),
    ("tips", "fa-tips", "#10b981"),
    ("intro", "fa-book-open", "#4f46e5"),
    ("analysis", "fa-chart-line", "#ef4444"),
    ("examples", "fa-code", "#8b5cf6"),
    ("practice", "fa-pencil-alt", "#ec4899"),
    ("quick", "fa-bolt", "#f59e0b"),
    ("memory", "fa-brain", "#6366f1"),
    ("overview", "fa-eye", "#14b8a6"),
    ("objectives", "fa-bullseye", "#f43f5e"),
    ("takeaways", "fa-star", "#fbbf24"),
    ("general", "fa-file-alt", "#4f46e5"),
];

#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Icon markup for a section type, `general` for unknown types
    pub fn section_icon(section_type: &str) -> String {
        let (_, class, color) = SECTION_ICONS
            .iter()
            .find(|(kind, _, _)| *kind == section_type)
            .or_else(|| SECTION_ICONS.last())
            .copied()
            .unwrap_or(("general", "fa-file-alt", "#4f46e5"));
        format!(r#"<i class="fas {class}" style="color: {color};"></i>"#)
    }

    /// Notes container content: one block per section, in input order
    pub fn render_sections(&self, notes: &Notes) -> String {
        notes
            .sections
            .iter()
            .map(|section| self.render_section(section))
            .collect()
    }

    #[instrument(level = "trace", skip(self), fields(title = %section.title))]
    fn render_section(&self, section: &Section) -> String {
        let content_html = match SectionBody::of(&section.content) {
            SectionBody::Paragraphs(items) => {
                let mut html = String::from(r#"<div class="section-content">"#);
                for line in paragraph_lines(items, |item| format_inline(&encode_text(item))) {
                    let _ = write!(html, "<p>{line}</p>");
                }
                html.push_str("</div>");
                html
            }
            SectionBody::List(items) => {
                let mut html = String::from("<ul>");
                for item in items {
                    let _ = write!(html, "<li>{}</li>", encode_text(item));
                }
                html.push_str("</ul>");
                html
            }
            SectionBody::Text(text) => format!("<p>{}</p>", encode_text(text)),
            SectionBody::Nothing => String::new(),
        };

        format!(
            r#"
        <div class="note-section" data-section-type="{kind}">
            <h3>
                {icon}
                {title}
            </h3>
            {content_html}
        </div>"#,
            kind = encode_double_quoted_attribute(section.kind()),
            icon = Self::section_icon(section.kind()),
            title = encode_text(&section.title),
        )
    }

    fn render_metadata(&self, notes: &Notes) -> String {
        let icons = ["fa-book", "fa-clock", "fa-signal", "fa-layer-group"];
        notes
            .metadata_labels()
            .iter()
            .zip(icons)
            .map(|(label, icon)| {
                format!(
                    r#"<span><i class="fas {icon}"></i> {}</span>"#,
                    encode_text(label)
                )
            })
            .collect::<Vec<_>>()
            .join("\n            ")
    }

    pub fn render(&self, response: &GenerateResponse) -> String {
        self.render_page(response, false)
    }

    /// Same page, opening the print dialog once loaded
    pub fn render_for_print(&self, response: &GenerateResponse) -> String {
        self.render_page(response, true)
    }

    fn render_page(&self, response: &GenerateResponse, auto_print: bool) -> String {
        let (title, metadata, sections) = match &response.notes {
            Some(notes) => (
                encode_text(notes.title_or_default()).into_owned(),
                self.render_metadata(notes),
                self.render_sections(notes),
            ),
            None => {
                warn!("No notes data received");
                ("Study Notes".to_string(), String::new(), String::new())
            }
        };
        let print_script = if auto_print {
            "<script>window.addEventListener('load', () => window.print());</script>"
        } else {
            ""
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 800px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #f5f5f5;
        }}
        .notes {{
            background: white;
            border-radius: 8px;
            padding: 2rem;
            box-shadow: 0 2px 4px rgba(0,0,0,0.1);
        }}
        .notes-metadata {{
            display: flex;
            flex-wrap: wrap;
            gap: 1rem;
            font-size: 0.9em;
            color: #666;
            padding-bottom: 1rem;
            border-bottom: 2px solid #eee;
        }}
        .note-section {{
            margin-top: 1.5rem;
        }}
        .note-section h3 {{
            display: flex;
            align-items: center;
            gap: 0.5rem;
        }}
        .section-content p {{
            margin: 0.3em 0;
        }}
        @media print {{
            body {{
                background: white;
                margin: 0;
            }}
            .notes {{
                box-shadow: none;
                padding: 0;
            }}
            .note-section {{
                page-break-inside: avoid;
            }}
        }}
    </style>
    {print_script}
</head>
<body>
    <div class="notes">
        <h2 id="notesTitle">{title}</h2>
        <div class="notes-metadata">
            {metadata}
        </div>
        <div id="notesContent">{sections}
        </div>
    </div>
</body>
</html>"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SectionContent;
    use rstest::rstest;

    fn section(title: &str, kind: Option<&str>, content: SectionContent) -> Section {
        Section {
            title: title.to_string(),
            section_type: kind.map(str::to_string),
            content,
        }
    }

    fn items(values: &[&str]) -> SectionContent {
        SectionContent::Items(values.iter().map(|v| v.to_string()).collect())
    }

    #[rstest]
    #[case("concepts", "fa-lightbulb")]
    #[case("memory", "fa-brain")]
    #[case("general", "fa-file-alt")]
    #[case("unheard-of", "fa-file-alt")]
    fn given_section_type_when_choosing_icon_then_maps_or_falls_back(
        #[case] kind: &str,
        #[case] class: &str,
    ) {
        assert!(HtmlPresenter::section_icon(kind).contains(class));
    }

    #[test]
    fn given_plain_items_when_rendering_then_produces_list() {
        let presenter = HtmlPresenter::new();
        let html = presenter.render_section(&section(
            "Key Points",
            Some("points"),
            items(&["• Limits", "• Derivatives"]),
        ));

        assert!(html.contains("<ul><li>• Limits</li><li>• Derivatives</li></ul>"));
        assert!(html.contains(r#"data-section-type="points""#));
    }

    #[test]
    fn given_marked_up_items_when_rendering_then_produces_paragraphs() {
        let presenter = HtmlPresenter::new();
        let html = presenter.render_section(&section(
            "Introduction",
            Some("intro"),
            items(&["**Overview of algebra**", "  • Understand concepts"]),
        ));

        assert!(html.contains(r#"<div class="section-content">"#));
        assert!(html.contains("<p><strong>Overview of algebra</strong></p>"));
        assert!(html.contains("<p>&nbsp;&nbsp;&bull; Understand concepts</p>"));
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn given_string_content_when_rendering_then_produces_single_paragraph() {
        let presenter = HtmlPresenter::new();
        let html = presenter.render_section(&section(
            "Summary",
            None,
            SectionContent::Text("All in one".to_string()),
        ));

        assert!(html.contains("<p>All in one</p>"));
        assert!(html.contains(r#"data-section-type="general""#));
    }

    #[test]
    fn given_html_in_content_when_rendering_then_escapes_it() {
        let presenter = HtmlPresenter::new();
        let html = presenter.render_section(&section(
            "<script>x</script>",
            Some(r#"a"b"#),
            items(&["**<b>bold</b>**"]),
        ));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<strong>&lt;b&gt;bold&lt;/b&gt;</strong>"));
        assert!(html.contains(r#"data-section-type="a&quot;b""#));
    }

    #[test]
    fn given_auto_print_when_rendering_then_adds_print_script() {
        let presenter = HtmlPresenter::new();
        let response = GenerateResponse::default();

        assert!(presenter.render_for_print(&response).contains("window.print()"));
        assert!(!presenter.render(&response).contains("window.print()"));
    }
}
