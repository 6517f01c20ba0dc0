use std::borrow::Cow;

pub const QUERY_VARIABLE: &str = "q";

/// Splits a raw query into its whitespace-delimited terms, in order.
pub fn parse_terms(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}

/// Value of the first `name=value` pair in a URL query part. A leading `?` is
/// ignored. A matching pair without `=` yields `None`.
pub fn query_variable<'a>(search: &'a str, name: &str) -> Option<&'a str> {
    let search = search.strip_prefix('?').unwrap_or(search);
    let mut pair = search.split('&').map(|pair| pair.split('=')).find_map(|mut pair| {
        if pair.next() == Some(name) {
            Some(pair)
        } else {
            None
        }
    })?;
    pair.next()
}

fn has_malformed_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().any(|(pos, &byte)| {
        byte == b'%'
            && !(bytes.get(pos + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(pos + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}

/// Form-style decoding: `+` is a space, then percent escapes. Anything that
/// does not decode cleanly to UTF-8 becomes the empty query.
pub fn decode_query_value(raw: &str) -> String {
    let raw = raw.replace('+', "%20");
    if has_malformed_escape(&raw) {
        return String::new();
    }
    urlencoding::decode(&raw)
        .map(Cow::into_owned)
        .unwrap_or_default()
}

pub fn query_from_location(search: &str) -> String {
    query_variable(search, QUERY_VARIABLE)
        .map(decode_query_value)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use crate::preview::{decode_query_value, parse_terms, query_from_location, query_variable};

    #[test]
    fn terms_in_order() {
        assert_eq!(parse_terms("spring  Framework log4j"), vec!["spring", "Framework", "log4j"]);
        assert_eq!(parse_terms("a b a"), vec!["a", "b", "a"]);
    }

    #[test]
    fn empty_queries_have_no_terms() {
        assert!(parse_terms("").is_empty());
        assert!(parse_terms("   ").is_empty());
    }

    #[test]
    fn first_matching_variable_wins() {
        assert_eq!(query_variable("?page=2&q=first&q=second", "q"), Some("first"));
        assert_eq!(query_variable("q=a=b", "q"), Some("a"));
        assert_eq!(query_variable("?qq=x", "q"), None);
        assert_eq!(query_variable("?q&q=later", "q"), None);
        assert_eq!(query_variable("", "q"), None);
    }

    #[test]
    fn decodes_plus_and_escapes() {
        assert_eq!(decode_query_value("spring+framework"), "spring framework");
        assert_eq!(decode_query_value("caf%C3%A9%2Bbar"), "café+bar");
        assert_eq!(decode_query_value("%3Cscript%3E"), "<script>");
    }

    #[test]
    fn malformed_values_become_empty() {
        assert_eq!(decode_query_value("100%"), "");
        assert_eq!(decode_query_value("%zz"), "");
        assert_eq!(decode_query_value("%FF"), "");
    }

    #[test]
    fn location_without_query() {
        assert_eq!(query_from_location("?lang=en"), "");
        assert_eq!(query_from_location("?q=log4j+cve"), "log4j cve");
    }
}
