use crate::{
    CookieConfig, CookieOptions, Error, Result, SameSite,
    encoding::{encode, is_valid_name},
};
use kiln_http::{Headers, KnownHeaderName::SetCookie};
use std::{borrow::Cow, time::UNIX_EPOCH};

/**
Writes cookies into a response's [`Headers`] as `Set-Cookie` values.

Every successful call appends exactly one new `Set-Cookie` value per
cookie. Earlier values are never replaced or merged, even when they
share a cookie name.

```
use kiln_cookies::{CookieOptions, ResponseCookies, SameSite};
use kiln_http::{Headers, KnownHeaderName};

let mut headers = Headers::new();
let mut cookies = ResponseCookies::new(&mut headers);
cookies.append("session", "QUI+REU/Rw==")?;
cookies.append_with_options(
    "theme",
    "dark",
    &CookieOptions::new().with_same_site(SameSite::Lax),
)?;
cookies.delete("legacy")?;

let values = headers.get_values(KnownHeaderName::SetCookie).unwrap();
assert_eq!(values[0], "session=QUI%2BREU%2FRw%3D%3D; path=/");
assert_eq!(values[1], "theme=dark; path=/; samesite=lax");
assert_eq!(values[2], "legacy=; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT");
# Ok::<(), kiln_cookies::Error>(())
```
*/
#[derive(Debug)]
pub struct ResponseCookies<'a> {
    headers: &'a mut Headers,
    config: CookieConfig,
}

impl<'a> ResponseCookies<'a> {
    /// Builds a cookie writer over these headers using the default
    /// [`CookieConfig`]
    pub fn new(headers: &'a mut Headers) -> Self {
        Self::with_config(headers, CookieConfig::default())
    }

    /// Builds a cookie writer over these headers with an explicit
    /// [`CookieConfig`]
    pub fn with_config(headers: &'a mut Headers, config: CookieConfig) -> Self {
        Self { headers, config }
    }

    /// the config this writer encodes with
    pub fn config(&self) -> CookieConfig {
        self.config
    }

    /// Appends a cookie with the default [`CookieOptions`]
    pub fn append(&mut self, name: &str, value: &str) -> Result<()> {
        self.append_with_options(name, value, &CookieOptions::default())
    }

    /**
    Appends a cookie with the provided options.

    The value is always percent-encoded. The name is percent-encoded
    only when [`CookieConfig::cookie_name_encoding`] is enabled, and
    must otherwise already be a valid token.

    # Errors

    Returns [`Error::InvalidCookieName`] if the emitted name would be
    empty or not a token, and [`Error::InvalidAttribute`] if a string
    attribute contains `;` or a control character. Nothing is appended
    on error.
    */
    pub fn append_with_options(
        &mut self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<()> {
        options.validate()?;
        let header = self.set_cookie_value(name, value, options)?;
        log::trace!("appending set-cookie {header}");
        self.headers.append(SetCookie, header);
        Ok(())
    }

    /**
    Appends one cookie per `(name, value)` pair, all sharing the same
    options.

    Every pair is checked before any header is written, so either all
    of the cookies are appended or none are.
    */
    pub fn append_all<I, N, V>(&mut self, pairs: I, options: &CookieOptions) -> Result<()>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        options.validate()?;
        let values = pairs
            .into_iter()
            .map(|(name, value)| self.set_cookie_value(name.as_ref(), value.as_ref(), options))
            .collect::<Result<Vec<_>>>()?;

        if values.is_empty() {
            return Ok(());
        }

        log::trace!("appending {} set-cookie values", values.len());
        self.headers.append(SetCookie, values);
        Ok(())
    }

    /// Instructs the client to discard a cookie set at the default path
    pub fn delete(&mut self, name: &str) -> Result<()> {
        self.delete_with_options(name, &CookieOptions::default())
    }

    /**
    Instructs the client to discard a cookie.

    The domain, path and every other attribute are kept as provided so
    that the deletion matches the scope of the original cookie. The
    `expires` attribute is always replaced with the unix epoch,
    `Thu, 01 Jan 1970 00:00:00 GMT`.
    */
    pub fn delete_with_options(&mut self, name: &str, options: &CookieOptions) -> Result<()> {
        let options = options.clone().with_expires(UNIX_EPOCH);
        self.append_with_options(name, "", &options)
    }

    fn set_cookie_value(
        &self,
        name: &str,
        value: &str,
        options: &CookieOptions,
    ) -> Result<String> {
        let name = if self.config.cookie_name_encoding {
            encode(name)
        } else {
            Cow::Borrowed(name)
        };

        if !is_valid_name(&name) {
            return Err(Error::InvalidCookieName(name.into_owned()));
        }

        if options.same_site() == SameSite::None && !options.is_secure() {
            log::warn!(
                "cookie {name} has samesite=none without secure and will be rejected by most clients"
            );
        }

        let mut header = format!("{name}={}", encode(value));
        for attribute in options.attributes() {
            header.push_str("; ");
            header.push_str(&attribute);
        }

        Ok(header)
    }
}
