use endpoint_cors_rs::Headers;

pub fn header_value<'a>(headers: &'a Headers, name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v.as_str())
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    header_value(headers, name).is_some()
}

pub fn has_cors_headers(headers: &Headers) -> bool {
    headers
        .keys()
        .any(|name| name.to_ascii_lowercase().starts_with("access-control-"))
}
