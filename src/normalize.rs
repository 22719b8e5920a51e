//! Path and query normalization.
//!
//! Matching is defined over normalized paths only: a leading slash, no
//! duplicate separators, no trailing slash (except the root itself).
//! Query maps use `BTreeMap` so that encoding the same parameters always
//! produces the same string.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex_lite::Regex;

fn separator_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/{2,}").expect("valid literal regex"))
}

/// Normalize a raw path component.
///
/// Guarantees a leading slash, collapses duplicate separators, and strips
/// the trailing slash unless the path is the root itself.
pub fn normalize_path(raw: &str) -> String {
    let raw = raw.trim();
    let prefixed = if raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("/{raw}")
    };
    let mut path = separator_runs().replace_all(&prefixed, "/").into_owned();
    while path.len() > 1 && path.ends_with('/') {
        path.pop();
    }
    path
}

/// Parse a raw query string (without the leading `?`) into an ordered map.
///
/// A parameter without `=` maps to the empty string. Later duplicates win.
pub fn parse_query(raw: &str) -> BTreeMap<String, String> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

/// Encode an ordered query map back into a query string.
pub fn encode_query(query: &BTreeMap<String, String>) -> String {
    query
        .iter()
        .map(|(key, value)| {
            if value.is_empty() {
                key.clone()
            } else {
                format!("{key}={value}")
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
