use crate::{CookieConfig, ResponseCookies};
use kiln_http::{HeaderValue, Headers, KnownHeaderName::SetCookie};

/**
Extension trait adding cookie capacities to [`Headers`].

```
use kiln_cookies::{CookieConfig, CookiesHeadersExt};
use kiln_http::Headers;

let mut headers = Headers::new();
headers.response_cookies().append("plain", "value")?;
headers
    .response_cookies_with_config(CookieConfig::new().with_cookie_name_encoding(true))
    .append("ke@y", "value")?;

assert_eq!(
    headers.set_cookies().collect::<Vec<_>>(),
    ["plain=value; path=/", "ke%40y=value; path=/"]
);
# Ok::<(), kiln_cookies::Error>(())
```
*/
pub trait CookiesHeadersExt {
    /// a cookie writer over these headers using the default config
    fn response_cookies(&mut self) -> ResponseCookies<'_>;

    /// a cookie writer over these headers using the provided config
    fn response_cookies_with_config(&mut self, config: CookieConfig) -> ResponseCookies<'_>;

    /// every `Set-Cookie` value, in the order they were appended
    fn set_cookies(&self) -> impl Iterator<Item = &str>;
}

impl CookiesHeadersExt for Headers {
    fn response_cookies(&mut self) -> ResponseCookies<'_> {
        ResponseCookies::new(self)
    }

    fn response_cookies_with_config(&mut self, config: CookieConfig) -> ResponseCookies<'_> {
        ResponseCookies::with_config(self, config)
    }

    fn set_cookies(&self) -> impl Iterator<Item = &str> {
        self.get_values(SetCookie)
            .into_iter()
            .flatten()
            .filter_map(HeaderValue::as_str)
    }
}
