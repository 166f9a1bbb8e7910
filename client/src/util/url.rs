//! URL component encoding for REST paths and query strings.
//!
//! Activity names and emails are user-visible strings that routinely contain
//! spaces, `@`, `+`, and `/`. Both the path segment and the query value are
//! encoded with the same byte set the browser's `encodeURIComponent` leaves
//! untouched, so a name like `Chess Club` round-trips to the backend as
//! `Chess%20Club`.

#[cfg(test)]
#[path = "url_test.rs"]
mod url_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped in a URI component: everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single path segment or query value.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}
