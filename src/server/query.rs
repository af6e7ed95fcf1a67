//! `application/x-www-form-urlencoded` query strings.

use percent_encoding::percent_decode_str;

/// Decode `a=1&b=two+words` into owned pairs. Pairs without `=` get an empty
/// value; empty segments are skipped.
pub fn parse_query(query: Option<&str>) -> Vec<(String, String)> {
    let Some(query) = query else { return Vec::new() };
    query.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
