// src/ports/markup.rs
//! Lightweight inline markup used in generated note content.
//!
//! Supported: `**bold**`, `*italic*`, a leading `# ` or `## ` heading marker,
//! the `•` bullet glyph and double spaces used for indentation. Substitution
//! is a single ordered pass with no nesting rules.
use regex::Regex;
use std::sync::LazyLock;

static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid bold pattern"));
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("valid italic pattern"));
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# (.*)$").expect("valid heading pattern"));
static SUBHEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^## (.*)$").expect("valid subheading pattern"));

/// True when any item carries emphasis or heading markers
pub fn has_markup<S: AsRef<str>>(items: &[S]) -> bool {
    items
        .iter()
        .any(|item| item.as_ref().contains('*') || item.as_ref().contains('#'))
}

/// Convert one content item to presentation markup.
///
/// The input is expected to be HTML-escaped already.
pub fn format_inline(text: &str) -> String {
    let text = BOLD.replace_all(text, "<strong>$1</strong>");
    let text = ITALIC.replace_all(&text, "<em>$1</em>");
    let text = HEADING.replace(&text, "<h4>$1</h4>");
    let text = SUBHEADING.replace(&text, "<h5>$1</h5>");
    text.replace('•', "&bull;").replace("  ", "&nbsp;&nbsp;")
}

/// Drop emphasis and heading markers, keeping the words
pub fn strip_inline(text: &str) -> String {
    let text = BOLD.replace_all(text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = HEADING.replace(&text, "$1");
    SUBHEADING.replace(&text, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("**Topic**: algebra", "<strong>Topic</strong>: algebra")]
    #[case("*note* and *more*", "<em>note</em> and <em>more</em>")]
    #[case("**a** then *b*", "<strong>a</strong> then <em>b</em>")]
    #[case("# Heading", "<h4>Heading</h4>")]
    #[case("## Sub", "<h5>Sub</h5>")]
    #[case("text # not heading", "text # not heading")]
    #[case("• point", "&bull; point")]
    #[case("  • nested", "&nbsp;&nbsp;&bull; nested")]
    #[case("unclosed **bold", "unclosed <em></em>bold")]
    fn given_markup_when_formatting_then_substitutes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(format_inline(input), expected);
    }

    #[rstest]
    #[case("Photosynthesis converts light into chemical energy")]
    #[case("1. What are the main concepts of calculus?")]
    #[case("")]
    fn given_plain_text_when_formatting_then_unchanged(#[case] input: &str) {
        let once = format_inline(input);
        assert_eq!(once, input);
        assert_eq!(format_inline(&once), input);
    }

    #[rstest]
    #[case("**Overview of algebra**", "Overview of algebra")]
    #[case("**Subject Area**: *math*", "Subject Area: math")]
    #[case("## Formulas", "Formulas")]
    #[case("• **Mnemonic**: acronym", "• Mnemonic: acronym")]
    fn given_markup_when_stripping_then_keeps_words(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(strip_inline(input), expected);
    }

    #[test]
    fn given_items_when_detecting_markup_then_checks_stars_and_hashes() {
        assert!(has_markup(&["plain", "**bold**"]));
        assert!(has_markup(&["# heading"]));
        assert!(!has_markup(&["• bullet only", "plain"]));
        assert!(!has_markup::<&str>(&[]));
    }
}
