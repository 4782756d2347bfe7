use crate::constants::is_simple_request_header;
use indexmap::IndexSet;
use std::collections::BTreeSet;

/// Splits an `Access-Control-Request-Headers` value into lower-cased names.
///
/// Spaces and tabs are removed anywhere in the value before splitting on
/// commas. An empty value yields an empty set; otherwise empty entries
/// (`"a,,b"`, a trailing comma) are kept as `""` and never match.
pub fn parse_request_headers(value: &str) -> BTreeSet<String> {
    let compact: String = value
        .chars()
        .filter(|ch| *ch != ' ' && *ch != '\t')
        .collect::<String>()
        .to_lowercase();
    if compact.is_empty() {
        return BTreeSet::new();
    }

    compact.split(',').map(str::to_string).collect()
}

/// Requested header names that `accepted` does not cover.
pub fn unacceptable_headers(value: &str, accepted: &IndexSet<String>) -> BTreeSet<String> {
    let mut requested = parse_request_headers(value);
    requested.retain(|name| !accepted.contains(name.as_str()));
    requested
}

/// Accepted headers worth advertising: everything but the simple baseline, sorted.
pub fn exposed_headers(accepted: &IndexSet<String>) -> BTreeSet<&str> {
    accepted
        .iter()
        .map(String::as_str)
        .filter(|name| !is_simple_request_header(name))
        .collect()
}

#[cfg(test)]
#[path = "request_headers_test.rs"]
mod request_headers_test;
