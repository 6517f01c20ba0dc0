use std::collections::HashSet;

use regex::{Match, Regex, RegexBuilder};
use serde::Serialize;

use crate::page::{Element, Tag};
use crate::tantivy_util::SearchError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Segment {
    Plain(String),
    Emphasis(String),
}

/// Alternatives per compiled pattern. Long queries are spread over several
/// patterns so each one stays inside the regex size limit.
const TERMS_PER_PATTERN: usize = 256;

/// Cuts `text` into plain and emphasized runs, in original order and casing.
/// Empty runs are dropped.
pub fn segments(text: &str, highlights: &[String]) -> Result<Vec<Segment>, SearchError> {
    let mut lowered: HashSet<String> = HashSet::new();
    let mut terms: Vec<&str> = Vec::new();
    for term in highlights.iter().filter(|term| !term.is_empty()) {
        if lowered.insert(term.to_lowercase()) {
            terms.push(term.as_str());
        }
    }
    if terms.is_empty() {
        return Ok(plain(text));
    }

    let patterns = terms
        .chunks(TERMS_PER_PATTERN)
        .map(alternation)
        .collect::<Result<Vec<_>, _>>()?;

    let classify = |part: &str| {
        if lowered.contains(&part.to_lowercase()) {
            Segment::Emphasis(part.to_string())
        } else {
            Segment::Plain(part.to_string())
        }
    };

    let mut out = Vec::new();
    let mut last = 0;
    while let Some(found) = next_match(&patterns, text, last) {
        if found.is_empty() {
            break;
        }
        if found.start() > last {
            out.push(classify(&text[last..found.start()]));
        }
        out.push(classify(found.as_str()));
        last = found.end();
    }
    if last < text.len() {
        out.push(classify(&text[last..]));
    }
    Ok(out)
}

fn alternation(terms: &[&str]) -> Result<Regex, SearchError> {
    let alternation = terms
        .iter()
        .map(|term| regex::escape(term))
        .collect::<Vec<_>>()
        .join("|");
    Ok(RegexBuilder::new(&alternation)
        .case_insensitive(true)
        .build()?)
}

/// Earliest match at or after `at`. On a tie the earlier pattern wins, which
/// keeps leftmost-first priority across the whole term list.
fn next_match<'t>(patterns: &[Regex], text: &'t str, at: usize) -> Option<Match<'t>> {
    patterns
        .iter()
        .filter_map(|pattern| pattern.find_at(text, at))
        .min_by_key(|found| found.start())
}

fn plain(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        vec![]
    } else {
        vec![Segment::Plain(text.to_string())]
    }
}

/// Replaces the children of `target` with `text`, wrapping every highlight
/// occurrence in `<strong>`.
pub fn render(target: &mut Element, text: &str, highlights: &[String]) -> Result<(), SearchError> {
    target.clear();
    if highlights.is_empty() {
        target.append_text(text);
        return Ok(());
    }

    for segment in segments(text, highlights)? {
        match segment {
            Segment::Plain(part) => target.append_text(&part),
            Segment::Emphasis(part) => {
                let mut strong = Element::new(Tag::Strong);
                strong.append_text(&part);
                target.append_child(strong);
            }
        }
    }
    Ok(())
}
