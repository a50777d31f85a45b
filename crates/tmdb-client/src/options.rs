//! Query-option formatting.

use std::collections::HashMap;

/// Caller-supplied optional query parameters for an endpoint call.
///
/// Keys are passed through to the remote API verbatim; no validation is
/// performed here.
pub type Options = HashMap<String, String>;

/// Escapes a value for use in a URL query string.
pub(crate) fn escape(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Serializes an options map into a `&key=value` query suffix.
///
/// Values are URL-escaped; an absent or empty map yields an empty string.
pub(crate) fn fmt_options(options: Option<&Options>) -> String {
    let mut suffix = String::new();
    if let Some(options) = options {
        for (key, value) in options {
            suffix.push('&');
            suffix.push_str(key);
            suffix.push('=');
            suffix.push_str(&escape(value));
        }
    }
    suffix
}
