#![forbid(unsafe_code)]
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

/*!
# Header storage for kiln

This crate holds the response-side header collection that the rest of
kiln writes into. Header names are either a [`KnownHeaderName`] or an
arbitrary token, and every name maps to an ordered [`HeaderValues`].

```
use kiln_http::{Headers, KnownHeaderName};

let mut headers = Headers::new();
headers.append(KnownHeaderName::SetCookie, "a=1");
headers.append("set-cookie", "b=2");

let values = headers.get_values(KnownHeaderName::SetCookie).unwrap();
assert_eq!(values.len(), 2);
assert_eq!(values[0], "a=1");
assert_eq!(headers.get_str("Set-Cookie"), Some("b=2"));
```
*/

mod error;
pub use error::{Error, Result};

mod headers;
pub use headers::{HeaderName, HeaderValue, HeaderValues, Headers, KnownHeaderName};
