//! # Query String Helpers
//!
//! Parsing follows what browsers do for `location.search`: a leading `?` is optional,
//! pairs are separated by `&`, `+` stands for a space and everything else is
//! percent-decoded. A key without `=` carries an empty value.

/// Decode a single query component.
///
/// Returns `None` when the percent-decoded bytes are not valid UTF-8.
///
/// ```rust
/// use shared::url::decode_component;
///
/// assert_eq!(decode_component("a%40b.com").as_deref(), Some("a@b.com"));
/// assert_eq!(decode_component("hello+world").as_deref(), Some("hello world"));
/// assert_eq!(decode_component("%FF"), None);
/// ```
pub fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|value| value.into_owned())
}

/// Marks that `encodeURIComponent` leaves alone but `urlencoding` escapes.
const UNESCAPED_MARKS: &[char] = &['!', '\'', '(', ')', '*'];

/// Percent-encode a value for use inside a query string, byte for byte like
/// `encodeURIComponent`.
pub fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    let mut buf = [0u8; 4];
    for c in value.chars() {
        if UNESCAPED_MARKS.contains(&c) {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    encoded
}

/// Parse a raw query string into ordered key/value pairs.
///
/// Keys are decoded leniently (undecodable keys are kept verbatim). Values that fail
/// to decode are kept as `None` so callers can tell "present but not text" apart
/// from "absent".
pub fn parse_query(query: &str) -> Vec<(String, Option<String>)> {
    let query_string = query.strip_prefix('?').unwrap_or(query);

    query_string
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(key).unwrap_or_else(|| key.to_string());
            (key, decode_component(value))
        })
        .collect()
}

/// First decoded value of `key`, if present and decodable.
pub fn get_query_param(query: &str, key: &str) -> Option<String> {
    parse_query(query)
        .into_iter()
        .find(|(param_key, _)| param_key == key)
        .and_then(|(_, value)| value)
}
