use super::{HeaderName, header_name::HeaderNameInner};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};
use HeaderNameInner::{KnownHeader, UnknownHeader};

impl Display for KnownHeaderName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<KnownHeaderName> for HeaderName<'_> {
    fn from(khn: KnownHeaderName) -> Self {
        Self(KnownHeader(khn))
    }
}

impl PartialEq<HeaderName<'_>> for KnownHeaderName {
    fn eq(&self, other: &HeaderName<'_>) -> bool {
        match &other.0 {
            KnownHeader(k) => self == k,
            UnknownHeader(_) => false,
        }
    }
}

macro_rules! known_headers {
    (
        $(
            ($capitalized:literal, $variant:tt)
        ),+
    ) => {

        /// A short nonexhaustive enum of response-side headers that
        /// kiln can represent without allocating. Use a
        /// `KnownHeaderName` variant instead of a &'static str anywhere
        /// possible.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        #[repr(u8)]
        pub enum KnownHeaderName {
            $(
                #[doc = concat!("The [", $capitalized, "](https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/", $capitalized, ") header.")]
                $variant,
            )+
        }

        impl AsRef<str> for KnownHeaderName {
            fn as_ref(&self) -> &str {
                match self {
                    $( Self::$variant => $capitalized, )+
                }
            }
        }

        impl FromStr for KnownHeaderName {
            type Err = ();
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if !s.is_ascii() { return Err(()); }

                $( if s.eq_ignore_ascii_case($capitalized) { Ok(Self::$variant) } else )+
                { Err(()) }
            }
        }
    }
}

known_headers! {
    ("Date", Date),
    ("Age", Age),
    ("Cache-Control", CacheControl),
    ("Clear-Site-Data", ClearSiteData),
    ("Connection", Connection),
    ("Content-Length", ContentLength),
    ("Content-Type", ContentType),
    ("Cookie", Cookie),
    ("ETag", Etag),
    ("Expires", Expires),
    ("Last-Modified", LastModified),
    ("Location", Location),
    ("Pragma", Pragma),
    ("Server", Server),
    ("Set-Cookie", SetCookie),
    ("Strict-Transport-Security", StrictTransportSecurity),
    ("Vary", Vary)
}
