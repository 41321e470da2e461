#![forbid(unsafe_code)]
#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

/*!

# kiln `Set-Cookie` encoding

Turns a cookie name, a value, and a set of [`CookieOptions`] into one
`Set-Cookie` header value and appends it to a response's
[`Headers`](kiln_http::Headers).

Values are always percent-encoded as a URI component: everything except
`A-Z a-z 0-9 - _ . ~` becomes `%XX`. Names are emitted as-is unless
[`CookieConfig::with_cookie_name_encoding`] is enabled, in which case
they are encoded the same way.

## example
```
use kiln_cookies::{CookieConfig, CookieOptions, CookiesHeadersExt, SameSite};
use kiln_http::Headers;
use std::time::Duration;

// read once at startup
let config = CookieConfig::from_env();

let mut headers = Headers::new();
let mut cookies = headers.response_cookies_with_config(config);
cookies.append_with_options(
    "session",
    "QUI+REU/Rw==",
    &CookieOptions::new()
        .with_max_age(Duration::from_secs(60 * 60))
        .with_same_site(SameSite::Strict)
        .with_secure(true)
        .with_http_only(true),
)?;
cookies.delete("previous-session")?;

assert_eq!(
    headers.set_cookies().collect::<Vec<_>>(),
    [
        "session=QUI%2BREU%2FRw%3D%3D; path=/; max-age=3600; samesite=strict; secure; httponly",
        "previous-session=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT",
    ]
);
# Ok::<(), kiln_cookies::Error>(())
```
*/

mod config;
pub use config::{COOKIE_NAME_ENCODING_ENV, CookieConfig};

mod cookie_options;
pub use cookie_options::CookieOptions;

mod cookies_headers_ext;
pub use cookies_headers_ext::CookiesHeadersExt;

mod encoding;

mod error;
pub use error::{Error, Result};

mod response_cookies;
pub use response_cookies::ResponseCookies;

mod same_site;
pub use same_site::{SameSite, SameSiteParseError};
