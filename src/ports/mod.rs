// src/ports/mod.rs
pub mod html;
pub mod markup;
pub mod text;

pub use html::HtmlPresenter;
pub use text::TextPresenter;

use crate::domain::SectionContent;

/// Renderable shape of a section body, shared by the presenters
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SectionBody<'a> {
    /// Items without markup, shown as a bullet list
    List(&'a [String]),
    /// Items with markup, shown as paragraphs
    Paragraphs(&'a [String]),
    /// A single string, shown as one paragraph
    Text(&'a str),
    Nothing,
}

impl<'a> SectionBody<'a> {
    pub(crate) fn of(content: &'a SectionContent) -> Self {
        match content {
            SectionContent::Items(items) if markup::has_markup(items) => Self::Paragraphs(items),
            SectionContent::Items(items) => Self::List(items),
            SectionContent::Text(text) => Self::Text(text),
            SectionContent::Empty => Self::Nothing,
        }
    }
}

/// Expand converted items into paragraph lines.
///
/// Items spanning several lines contribute one paragraph per non-blank line;
/// single-line items are kept as they are, even when empty.
pub(crate) fn paragraph_lines<F>(items: &[String], convert: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    let mut lines = Vec::new();
    for item in items {
        let converted = convert(item);
        if converted.contains('\n') {
            lines.extend(
                converted
                    .split('\n')
                    .filter(|line| !line.trim().is_empty())
                    .map(str::to_string),
            );
        } else {
            lines.push(converted);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_marked_up_items_when_classifying_then_uses_paragraphs() {
        let content = SectionContent::Items(vec!["**a**".to_string(), "b".to_string()]);
        assert!(matches!(SectionBody::of(&content), SectionBody::Paragraphs(_)));
    }

    #[test]
    fn given_plain_items_when_classifying_then_uses_list() {
        let content = SectionContent::Items(vec!["• a".to_string()]);
        assert!(matches!(SectionBody::of(&content), SectionBody::List(_)));
    }

    #[test]
    fn given_multiline_item_when_expanding_then_drops_blank_lines() {
        let items = vec!["one\n\n  \ntwo".to_string(), String::new()];

        let lines = paragraph_lines(&items, str::to_string);

        assert_eq!(lines, vec!["one", "two", ""]);
    }
}
