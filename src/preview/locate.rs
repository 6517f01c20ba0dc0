use serde::Serialize;

use crate::preview::parse_terms;

const ELLIPSIS: &str = "...";

/// A bounded excerpt of a field and the terms to emphasize inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub text: String,
    /// Every parsed query term when a match was found, empty otherwise.
    pub highlights: Vec<String>,
}

struct Match {
    offset: usize,
    len: usize,
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Char offset of the first case-insensitive occurrence of `needle`.
fn find_ignore_case(haystack: &[char], needle: &str) -> Option<usize> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return Some(0);
    }
    if needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|candidate| {
        candidate
            .iter()
            .zip(&needle)
            .all(|(&a, &b)| chars_eq_ignore_case(a, b))
    })
}

/// The whole query first, then the first term (in query order) found anywhere.
fn find_match(query: &str, terms: &[&str], content: &[char]) -> Option<Match> {
    if terms.is_empty() {
        return None;
    }
    if let Some(offset) = find_ignore_case(content, query) {
        return Some(Match {
            offset,
            len: query.chars().count(),
        });
    }
    terms.iter().find_map(|term| {
        find_ignore_case(content, term).map(|offset| Match {
            offset,
            len: term.chars().count(),
        })
    })
}

/// Whitespace as the browser's `String.prototype.trim` sees it: unicode
/// white space plus the BOM, minus NEL.
fn is_page_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Trims `text` with the same character set the page uses for previews and
/// result links.
pub fn trim_page_text(text: &str) -> &str {
    text.trim_matches(is_page_whitespace)
}

fn collect_trimmed(chars: &[char]) -> String {
    trim_page_text(&chars.iter().collect::<String>()).to_string()
}

fn leading_window(chars: &[char], window: usize) -> String {
    let mut text = collect_trimmed(&chars[..window.min(chars.len())]);
    if chars.len() > window {
        text.push_str(ELLIPSIS);
    }
    text
}

fn window_around(chars: &[char], found: &Match, window: usize) -> String {
    // Bounds are doubled so an odd window splits into exact halves.
    let len = chars.len() as i64;
    let window = window as i64;
    let start = 2 * found.offset as i64 - window;
    let end = if start > 0 {
        2 * (found.offset + found.len) as i64 + window
    } else {
        2 * window
    };

    let from = (start.max(0) / 2) as usize;
    let to = (end / 2).min(len) as usize;

    let mut text = String::new();
    if start > 0 {
        text.push_str(ELLIPSIS);
    }
    text.push_str(&collect_trimmed(&chars[from..to]));
    if end < 2 * len {
        text.push_str(ELLIPSIS);
    }
    text
}

/// Picks the excerpt of `content` to show for `query`.
///
/// `window` bounds the excerpt in chars; `None` or `Some(0)` means twice the
/// content length, which in practice keeps the whole field.
pub fn locate(query: &str, content: &str, window: Option<usize>) -> Preview {
    let chars: Vec<char> = content.chars().collect();
    let window = match window {
        Some(size) if size > 0 => size,
        _ => chars.len() * 2,
    };
    let terms = parse_terms(query);

    match find_match(query, &terms, &chars) {
        Some(found) => Preview {
            text: window_around(&chars, &found, window),
            highlights: terms.into_iter().map(str::to_string).collect(),
        },
        None => Preview {
            text: leading_window(&chars, window),
            highlights: vec![],
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::preview::{locate, trim_page_text, Preview};
    use proptest::prelude::*;

    #[test]
    fn interior_match_gets_both_affixes() {
        let preview = locate("spring", "... the Spring Framework provides ...", Some(10));
        assert_eq!(preview.text, "...the Spring Fram...");
        assert_eq!(preview.highlights, vec!["spring"]);
    }

    #[test]
    fn whole_query_is_preferred_over_terms() {
        let content = "log4j is mentioned early, but the log4j cve only here";
        let preview = locate("log4j cve", content, Some(20));
        assert_eq!(preview.text, "..., but the log4j cve only here");
        assert_eq!(preview.highlights, vec!["log4j", "cve"]);
    }

    #[test]
    fn terms_tried_in_query_order() {
        let content = "0123456789 zebra 0123456789 alphabetical";
        let preview = locate("alphabetical zebra", content, Some(6));
        assert_eq!(preview.text, "...89 alphabetical");
        assert_eq!(preview.highlights, vec!["alphabetical", "zebra"]);
    }

    #[test]
    fn all_terms_highlighted_even_if_only_one_matched() {
        let preview = locate("missing Teams", "Manage teams and permissions.", None);
        assert_eq!(preview.text, "Manage teams and permissions.");
        assert_eq!(preview.highlights, vec!["missing", "Teams"]);
    }

    #[test]
    fn match_near_start_uses_leading_window() {
        let preview = locate("teams", "Manage teams and permissions for every project.", Some(20));
        assert_eq!(preview.text, "Manage teams and per...");
    }

    #[test]
    fn odd_window_splits_in_halves() {
        // start = 3 - 2.5 = 0.5, so the prefix is shown though extraction starts at 0
        let preview = locate("d", "abcdefghij", Some(5));
        assert_eq!(preview.text, "...abcdef...");
    }

    #[test]
    fn no_match_takes_leading_window() {
        let preview = locate("a b", "xyz xyz xyz", Some(4));
        assert_eq!(
            preview,
            Preview {
                text: "xyz...".to_string(),
                highlights: vec![],
            }
        );
    }

    #[test]
    fn no_match_short_content_has_no_affix() {
        let preview = locate("kubernetes", "  Short body  ", Some(170));
        assert_eq!(preview.text, "Short body");
        assert!(preview.highlights.is_empty());
    }

    #[test]
    fn empty_query_never_matches() {
        let preview = locate("", "Dependency-Track documentation", Some(10));
        assert_eq!(preview.text, "Dependency...");
        assert!(preview.highlights.is_empty());

        let preview = locate("   ", "Title", None);
        assert_eq!(preview.text, "Title");
        assert!(preview.highlights.is_empty());
    }

    #[test]
    fn zero_window_means_default() {
        let preview = locate("nothing", "Component Analysis", Some(0));
        assert_eq!(preview.text, "Component Analysis");
    }

    #[test]
    fn offsets_count_chars_not_bytes() {
        let preview = locate("naïve", "ééééé ééééé naïve ééééé", Some(4));
        assert_eq!(preview.text, "...é naïve é...");
    }

    #[test]
    fn trims_like_the_browser() {
        assert_eq!(trim_page_text("\u{feff} Teams\u{a0}\n"), "Teams");
        assert_eq!(trim_page_text("\u{85}Teams\u{85}"), "\u{85}Teams\u{85}");
        assert_eq!(locate("nothing", "\u{feff}Teams\u{feff}", None).text, "Teams");
        assert_eq!(locate("teams", "\u{85}Teams", None).text, "\u{85}Teams");
    }

    #[test]
    fn empty_content() {
        assert_eq!(locate("log4j", "", Some(170)), Preview::default());
        assert_eq!(locate("log4j", "", None), Preview::default());
    }

    fn first_offset(content: &str, query: &str) -> usize {
        content
            .to_lowercase()
            .find(&query.to_lowercase())
            .expect("query is a substring")
    }

    proptest! {
        #[test]
        fn literal_substring_is_kept_in_window(
            before in "[a-zA-Z ]{0,80}",
            query in "[a-zA-Z]{1,12}",
            after in "[a-zA-Z ]{0,80}",
            extra in 0usize..40,
        ) {
            let content = format!("{before}{query}{after}");
            let window = 2 * query.len() + extra;
            let preview = locate(&query, &content, Some(window));
            let offset = first_offset(&content, &query);

            prop_assert!(preview.text.to_lowercase().contains(&query.to_lowercase()));
            prop_assert_eq!(preview.text.starts_with("..."), 2 * offset > window);

            let end = if 2 * offset > window {
                2 * (offset + query.len()) + window
            } else {
                2 * window
            };
            prop_assert_eq!(preview.text.ends_with("..."), end < 2 * content.len());
            prop_assert_eq!(preview.highlights, vec![query.clone()]);
        }

        #[test]
        fn unmatched_query_takes_leading_window(
            content in "[a-m ]{0,200}",
            query in "[n-z]{1,6}( [n-z]{1,6}){0,3}",
            window in 1usize..250,
        ) {
            let preview = locate(&query, &content, Some(window));
            let mut expected = content.chars().take(window).collect::<String>().trim().to_string();
            if content.len() > window {
                expected.push_str("...");
            }
            prop_assert_eq!(preview.text, expected);
            prop_assert!(preview.highlights.is_empty());
        }
    }
}
