use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/**
The [`SameSite`](https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Set-Cookie#samesitesamesite-value)
cookie attribute, which constrains whether a cookie is sent along with
cross-site requests.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SameSite {
    /// No `samesite` attribute is emitted and the client applies its
    /// own default
    #[default]
    Unspecified,

    /// `samesite=none`: sent with cross-site requests. Clients require
    /// `secure` alongside this.
    None,

    /// `samesite=lax`: sent with top-level cross-site navigations
    Lax,

    /// `samesite=strict`: only sent with same-site requests
    Strict,
}

impl SameSite {
    /// the lower-case attribute value, or None for [`SameSite::Unspecified`]
    pub fn as_attribute_value(&self) -> Option<&'static str> {
        match self {
            Self::Unspecified => None,
            Self::None => Some("none"),
            Self::Lax => Some("lax"),
            Self::Strict => Some("strict"),
        }
    }

    /// returns true unless this is [`SameSite::Unspecified`]
    pub fn is_specified(&self) -> bool {
        !matches!(self, Self::Unspecified)
    }
}

impl Display for SameSite {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attribute_value().unwrap_or_default())
    }
}

/// An error returned when a string is not `none`, `lax` or `strict`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SameSiteParseError;
impl std::error::Error for SameSiteParseError {}
impl Display for SameSiteParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("samesite must be one of none, lax or strict")
    }
}

impl FromStr for SameSite {
    type Err = SameSiteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "lax" => Ok(Self::Lax),
            "strict" => Ok(Self::Strict),
            _ => Err(SameSiteParseError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(SameSite::None.to_string(), "none");
        assert_eq!(SameSite::Lax.to_string(), "lax");
        assert_eq!(SameSite::Strict.to_string(), "strict");
        assert_eq!(SameSite::Unspecified.to_string(), "");
    }

    #[test]
    fn parse() {
        assert_eq!("Lax".parse::<SameSite>(), Ok(SameSite::Lax));
        assert_eq!(" STRICT ".parse::<SameSite>(), Ok(SameSite::Strict));
        assert_eq!("none".parse::<SameSite>(), Ok(SameSite::None));
        assert_eq!("".parse::<SameSite>(), Err(SameSiteParseError));
        assert_eq!("unspecified".parse::<SameSite>(), Err(SameSiteParseError));
    }
}
