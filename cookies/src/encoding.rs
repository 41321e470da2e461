use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::borrow::Cow;

/// Everything except the RFC 3986 unreserved set (`A-Z a-z 0-9 - _ . ~`).
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a cookie name or value as a URI component, using
/// uppercase hex. Borrows when nothing needed escaping.
pub(crate) fn encode(s: &str) -> Cow<'_, str> {
    utf8_percent_encode(s, COMPONENT).into()
}

/// RFC 9110 tchar
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}

/// A cookie-name is a non-empty token (RFC 6265 §4.1.1).
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_token_byte)
}

/// Attribute values may not terminate the attribute early or smuggle in
/// control characters.
pub(crate) fn is_valid_attribute_value(value: &str) -> bool {
    !value.chars().any(|c| c == ';' || c.is_control())
}
