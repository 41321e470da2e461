/// The environment variable read by [`CookieConfig::from_env`]
pub const COOKIE_NAME_ENCODING_ENV: &str = "KILN_ENABLE_COOKIE_NAME_ENCODING";

pub(crate) const DEFAULT_CONFIG: CookieConfig = CookieConfig {
    cookie_name_encoding: false,
};

/**
# Encoding policy for [`ResponseCookies`](crate::ResponseCookies).

This is a deployment-time switch. Build it once when the application
starts and hand a copy to every writer; it never changes while requests
are in flight.

## `cookie_name_encoding`

When disabled, cookie names are emitted verbatim and must already be a
valid token, so names like `key,` or `ke@y` are rejected. When enabled,
cookie names are percent-encoded exactly like values, which allows any
name except the empty string. Cookie values are always percent-encoded.

Enabling this changes the bytes sent for any name containing reserved
characters, so existing cookies with such names will no longer be
matched by clients. It is off by default for that reason.

**Default**: `false`

**Environment**: `KILN_ENABLE_COOKIE_NAME_ENCODING`, see [`CookieConfig::from_env`]
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CookieConfig {
    pub(crate) cookie_name_encoding: bool,
}

impl CookieConfig {
    /// Constructs the default config. Alias for [`CookieConfig::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// See [`cookie_name_encoding`][CookieConfig#cookie_name_encoding]
    #[must_use]
    pub fn with_cookie_name_encoding(mut self, cookie_name_encoding: bool) -> Self {
        self.cookie_name_encoding = cookie_name_encoding;
        self
    }

    /// See [`cookie_name_encoding`][CookieConfig#cookie_name_encoding]
    pub fn cookie_name_encoding(&self) -> bool {
        self.cookie_name_encoding
    }

    /**
    Builds a config from the process environment. This is intended to
    be called once at startup.

    `KILN_ENABLE_COOKIE_NAME_ENCODING` enables cookie name encoding when
    set to `1`, `true`, `yes` or `on` (ignoring case). Any other value
    leaves it disabled, and unrecognized values are logged.
    */
    pub fn from_env() -> Self {
        let cookie_name_encoding = std::env::var(COOKIE_NAME_ENCODING_ENV)
            .ok()
            .and_then(|value| {
                let parsed = parse_switch(&value);
                if parsed.is_none() {
                    log::warn!(
                        "ignoring unrecognized {COOKIE_NAME_ENCODING_ENV} value {value:?}"
                    );
                }
                parsed
            })
            .unwrap_or(DEFAULT_CONFIG.cookie_name_encoding);

        log::debug!("cookie name encoding enabled: {cookie_name_encoding}");
        Self::default().with_cookie_name_encoding(cookie_name_encoding)
    }
}

impl Default for CookieConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_legacy_names() {
        assert!(!CookieConfig::default().cookie_name_encoding());
        assert_eq!(CookieConfig::new(), DEFAULT_CONFIG);
    }

    #[test]
    fn builder() {
        let config = CookieConfig::new().with_cookie_name_encoding(true);
        assert!(config.cookie_name_encoding());
        assert!(!config.with_cookie_name_encoding(false).cookie_name_encoding());
    }

    #[test]
    fn switch_values() {
        for on in ["1", "true", "TRUE", " yes ", "On"] {
            assert_eq!(parse_switch(on), Some(true), "{on}");
        }
        for off in ["0", "false", "No", "off", ""] {
            assert_eq!(parse_switch(off), Some(false), "{off}");
        }
        assert_eq!(parse_switch("sometimes"), None);
    }
}
