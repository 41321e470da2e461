use crate::{Error, Result, SameSite, encoding::is_valid_attribute_value};
use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// 9999-12-31T23:59:59Z, the last instant an IMF-fixdate can represent
const MAX_HTTP_DATE: Duration = Duration::from_secs(253_402_300_799);

/**
The attributes that accompany a cookie's `name=value` pair in a
`Set-Cookie` header.

Every attribute is independently optional. The defaults are a `path` of
`/` and nothing else:

```
use kiln_cookies::{CookieOptions, SameSite};
use std::time::Duration;

assert_eq!(CookieOptions::default().to_string(), "path=/");

let options = CookieOptions::new()
    .with_domain("example.com")
    .with_max_age(Duration::from_secs(60 * 60))
    .with_same_site(SameSite::Lax)
    .with_secure(true)
    .with_http_only(true);

assert_eq!(
    options.to_string(),
    "domain=example.com; path=/; max-age=3600; samesite=lax; secure; httponly"
);
```
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CookieOptions {
    domain: Option<String>,
    path: Option<String>,
    expires: Option<SystemTime>,
    max_age: Option<Duration>,
    secure: bool,
    http_only: bool,
    same_site: SameSite,
    extensions: Vec<String>,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            domain: None,
            path: Some(String::from("/")),
            expires: None,
            max_age: None,
            secure: false,
            http_only: false,
            same_site: SameSite::Unspecified,
            extensions: Vec::new(),
        }
    }
}

impl CookieOptions {
    /// Constructs the default options. Alias for [`CookieOptions::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scopes the cookie to this host. Emitted verbatim.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Scopes the cookie to this path prefix. Defaults to `/`.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Omits the `path` attribute, leaving the client to use the
    /// request path's directory
    #[must_use]
    pub fn without_path(mut self) -> Self {
        self.path = None;
        self
    }

    /// Sets an absolute expiry
    #[must_use]
    pub fn with_expires(mut self, expires: SystemTime) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Sets a relative expiry. Only whole seconds are emitted.
    #[must_use]
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Restricts the cookie to secure transports
    #[must_use]
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    /// Hides the cookie from client-side script
    #[must_use]
    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    /// Sets the cross-site policy
    #[must_use]
    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    /// Adds an attribute that is emitted verbatim after all of the
    /// others, such as `partitioned` or `priority=high`
    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extensions.push(extension.into());
        self
    }

    /// the `domain` attribute, if set
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// the `path` attribute, if set
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// the `expires` attribute, if set
    pub fn expires(&self) -> Option<SystemTime> {
        self.expires
    }

    /// the `max-age` attribute, if set
    pub fn max_age(&self) -> Option<Duration> {
        self.max_age
    }

    /// whether the `secure` flag is set
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// whether the `httponly` flag is set
    pub fn is_http_only(&self) -> bool {
        self.http_only
    }

    /// the `samesite` policy
    pub fn same_site(&self) -> SameSite {
        self.same_site
    }

    /// extension attributes, in the order they were added
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /**
    The attribute fragments, in the order they are written to the
    header: `domain`, `path`, `expires`, `max-age`, `samesite`,
    `secure`, `httponly`, then any extensions.
    */
    pub fn attributes(&self) -> Vec<Cow<'_, str>> {
        let mut attributes = Vec::new();

        if let Some(domain) = self.domain().filter(|d| !d.is_empty()) {
            attributes.push(Cow::Owned(format!("domain={domain}")));
        }

        if let Some(path) = self.path().filter(|p| !p.is_empty()) {
            attributes.push(Cow::Owned(format!("path={path}")));
        }

        if let Some(expires) = self.expires {
            attributes.push(Cow::Owned(format!("expires={}", fmt_expires(expires))));
        }

        if let Some(max_age) = self.max_age {
            attributes.push(Cow::Owned(format!("max-age={}", max_age.as_secs())));
        }

        if let Some(same_site) = self.same_site.as_attribute_value() {
            attributes.push(Cow::Owned(format!("samesite={same_site}")));
        }

        if self.secure {
            attributes.push(Cow::Borrowed("secure"));
        }

        if self.http_only {
            attributes.push(Cow::Borrowed("httponly"));
        }

        attributes.extend(self.extensions.iter().map(|e| Cow::Borrowed(e.as_str())));

        attributes
    }

    /// Checks that no string attribute would break out of its position
    /// in the header
    pub(crate) fn validate(&self) -> Result<()> {
        let strings = self
            .domain
            .iter()
            .map(|domain| ("domain", domain))
            .chain(self.path.iter().map(|path| ("path", path)))
            .chain(self.extensions.iter().map(|ext| ("extension", ext)));

        for (attribute, value) in strings {
            if !is_valid_attribute_value(value) {
                return Err(Error::InvalidAttribute {
                    attribute,
                    value: value.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Display for CookieOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, attribute) in self.attributes().iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            f.write_str(attribute)?;
        }
        Ok(())
    }
}

/// IMF-fixdate in GMT. Instants outside of what the format can express
/// are clamped to its bounds.
fn fmt_expires(expires: SystemTime) -> String {
    httpdate::fmt_http_date(expires.clamp(UNIX_EPOCH, UNIX_EPOCH + MAX_HTTP_DATE))
}
