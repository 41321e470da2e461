use kiln_cookies::{
    CookieConfig, CookieOptions, CookiesHeadersExt, Error, ResponseCookies, SameSite,
};
use kiln_http::{Headers, KnownHeaderName};
use pretty_assertions::assert_eq;
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use test_harness::test;

const EPOCH: &str = "expires=Thu, 01 Jan 1970 00:00:00 GMT";

fn harness<F: FnOnce() -> R, R>(test: F) -> R {
    let _ = env_logger::builder().is_test(true).try_init();
    test()
}

fn set_cookies(headers: &Headers) -> Vec<String> {
    headers.set_cookies().map(String::from).collect()
}

fn name_encoding() -> CookieConfig {
    CookieConfig::new().with_cookie_name_encoding(true)
}

#[test(harness)]
fn delete_cookie_should_set_default_path() {
    let mut headers = Headers::new();
    ResponseCookies::new(&mut headers).delete("TestCookie").unwrap();

    let values = set_cookies(&headers);
    assert_eq!(values.len(), 1);
    assert!(values[0].starts_with("TestCookie="));
    assert!(values[0].contains("path=/"));
    assert!(values[0].contains(EPOCH));
}

#[test(harness)]
fn delete_cookie_with_options_keeps_properties() {
    let mut headers = Headers::new();
    let time = UNIX_EPOCH + Duration::from_millis(946_688_461_001);
    let options = CookieOptions::new()
        .with_secure(true)
        .with_http_only(true)
        .with_path("/")
        .with_expires(time)
        .with_domain("example.com")
        .with_same_site(SameSite::Lax);

    ResponseCookies::new(&mut headers)
        .delete_with_options("TestCookie", &options)
        .unwrap();

    let values = set_cookies(&headers);
    assert_eq!(values.len(), 1);
    assert_eq!(
        values[0],
        "TestCookie=; domain=example.com; path=/; expires=Thu, 01 Jan 1970 00:00:00 GMT; \
         samesite=lax; secure; httponly"
    );
    assert!(!values[0].contains("2000"));
}

#[test(harness)]
fn delete_keeps_max_age_and_extensions() {
    let mut headers = Headers::new();
    let options = CookieOptions::new()
        .with_path("/account")
        .with_max_age(Duration::ZERO)
        .with_extension("partitioned");

    headers
        .response_cookies()
        .delete_with_options("id", &options)
        .unwrap();

    assert_eq!(
        set_cookies(&headers),
        [format!("id=; path=/account; {EPOCH}; max-age=0; partitioned")]
    );
}

#[test(harness)]
fn no_params_delete_after_append() {
    let mut headers = Headers::new();
    let mut cookies = ResponseCookies::new(&mut headers);
    cookies.append("TestCookie", "TestCookie").unwrap();
    cookies.delete("TestCookie").unwrap();

    let values = set_cookies(&headers);
    assert_eq!(
        values,
        [
            "TestCookie=TestCookie; path=/".to_string(),
            format!("TestCookie=; path=/; {EPOCH}"),
        ]
    );
}

#[test(harness)]
fn provides_max_age() {
    let mut headers = Headers::new();
    let options = CookieOptions::new().with_max_age(Duration::from_secs(60 * 60));
    ResponseCookies::new(&mut headers)
        .append_with_options("TestCookie", "TestCookie", &options)
        .unwrap();

    let values = set_cookies(&headers);
    assert_eq!(values.len(), 1);
    assert!(values[0].contains("max-age=3600"));
}

#[test(harness)]
fn escapes_values_before_setting_cookie() {
    for (value, expected) in [
        ("value", "key=value"),
        ("!value", "key=%21value"),
        ("val^ue", "key=val%5Eue"),
        ("QUI+REU/Rw==", "key=QUI%2BREU%2FRw%3D%3D"),
    ] {
        let mut headers = Headers::new();
        ResponseCookies::new(&mut headers)
            .append("key", value)
            .unwrap();

        let values = set_cookies(&headers);
        assert_eq!(values.len(), 1);
        assert!(values[0].starts_with(expected), "{value}: {}", values[0]);
    }
}

#[test(harness)]
fn invalid_keys_fail() {
    for key in ["key,", "ke@y"] {
        let mut headers = Headers::new();
        assert_eq!(
            ResponseCookies::new(&mut headers).append(key, "1"),
            Err(Error::InvalidCookieName(key.to_string()))
        );
        assert!(!headers.has_header(KnownHeaderName::SetCookie));
    }
}

#[test(harness)]
fn name_encoding_escapes_keys_and_values() {
    for (key, value, expected) in [
        ("key", "value", "key=value"),
        ("key,", "!value", "key%2C=%21value"),
        ("ke#y,", "val^ue", "ke%23y%2C=val%5Eue"),
        ("base64", "QUI+REU/Rw==", "base64=QUI%2BREU%2FRw%3D%3D"),
    ] {
        let mut headers = Headers::new();
        ResponseCookies::with_config(&mut headers, name_encoding())
            .append(key, value)
            .unwrap();

        let values = set_cookies(&headers);
        assert_eq!(values.len(), 1);
        assert!(values[0].starts_with(expected), "{key}: {}", values[0]);
    }
}

#[test(harness)]
fn name_encoding_applies_to_delete() {
    let mut headers = Headers::new();
    headers
        .response_cookies_with_config(name_encoding())
        .delete("ke@y")
        .unwrap();
    assert_eq!(set_cookies(&headers), [format!("ke%40y=; path=/; {EPOCH}")]);
}

#[test(harness)]
fn writers_with_different_configs_share_headers() {
    let mut headers = Headers::new();
    assert!(headers.response_cookies().append("ke#y,", "1").is_err());
    headers
        .response_cookies_with_config(name_encoding())
        .append("ke#y,", "1")
        .unwrap();
    headers.response_cookies().append("ke#y", "2").unwrap();

    assert_eq!(
        set_cookies(&headers),
        ["ke%23y%2C=1; path=/", "ke#y=2; path=/"]
    );
}

#[test(harness)]
fn append_never_overwrites() {
    let mut headers = Headers::new();
    headers.append(KnownHeaderName::SetCookie, "existing=1");
    let mut cookies = ResponseCookies::new(&mut headers);
    for n in 0..5 {
        cookies.append("same", &n.to_string()).unwrap();
    }
    cookies.append("other", "x").unwrap();

    assert_eq!(
        set_cookies(&headers),
        [
            "existing=1",
            "same=0; path=/",
            "same=1; path=/",
            "same=2; path=/",
            "same=3; path=/",
            "same=4; path=/",
            "other=x; path=/",
        ]
    );
}

#[test(harness)]
fn delete_always_pins_expires_to_epoch() {
    let now = SystemTime::now();
    for expires in [
        UNIX_EPOCH,
        now,
        now + Duration::from_secs(365 * 24 * 60 * 60),
        UNIX_EPOCH + Duration::from_secs(4_102_444_800),
    ] {
        let mut headers = Headers::new();
        let options = CookieOptions::new().with_expires(expires);
        headers
            .response_cookies()
            .delete_with_options("k", &options)
            .unwrap();
        let values = set_cookies(&headers);
        assert_eq!(values, [format!("k=; path=/; {EPOCH}")]);
    }
}

#[test(harness)]
fn full_wire_format() {
    let mut headers = Headers::new();
    let options = CookieOptions::new()
        .with_domain("example.com")
        .with_path("/app")
        .with_expires(UNIX_EPOCH + Duration::from_secs(1_700_000_000))
        .with_max_age(Duration::from_secs(86_400))
        .with_same_site(SameSite::None)
        .with_secure(true)
        .with_http_only(true);

    headers
        .response_cookies()
        .append_with_options("session", "a b;c", &options)
        .unwrap();

    assert_eq!(
        set_cookies(&headers),
        [
            "session=a%20b%3Bc; domain=example.com; path=/app; \
             expires=Tue, 14 Nov 2023 22:13:20 GMT; max-age=86400; samesite=none; secure; httponly"
        ]
    );
}

#[test(harness)]
fn append_all_shares_options() {
    let mut headers = Headers::new();
    let options = CookieOptions::new().with_same_site(SameSite::Strict);
    headers
        .response_cookies()
        .append_all([("a", "1"), ("b", "2")], &options)
        .unwrap();
    headers
        .response_cookies()
        .append_all([("c".to_string(), "3".to_string())], &options)
        .unwrap();

    assert_eq!(
        set_cookies(&headers),
        [
            "a=1; path=/; samesite=strict",
            "b=2; path=/; samesite=strict",
            "c=3; path=/; samesite=strict",
        ]
    );

    let mut empty = Headers::new();
    empty
        .response_cookies()
        .append_all(Vec::<(String, String)>::new(), &options)
        .unwrap();
    assert!(empty.is_empty());
}

#[test(harness)]
fn injection_through_attributes_is_rejected() {
    let mut headers = Headers::new();
    let options = CookieOptions::new().with_path("/\r\nset-cookie: admin=1");
    let result = headers
        .response_cookies()
        .append_with_options("key", "value", &options);
    assert!(matches!(
        result,
        Err(Error::InvalidAttribute {
            attribute: "path",
            ..
        })
    ));
    assert!(headers.is_empty());
}

#[test(harness)]
fn values_never_rejected() {
    let mut headers = Headers::new();
    let nasty = "\r\n; \"quoted\", \\ é \0";
    headers.response_cookies().append("key", nasty).unwrap();
    let value = headers.get(KnownHeaderName::SetCookie).unwrap();
    assert!(value.is_valid());
    assert_eq!(
        value.as_str().unwrap(),
        "key=%0D%0A%3B%20%22quoted%22%2C%20%5C%20%C3%A9%20%00; path=/"
    );
}

#[test(harness)]
fn error_messages() {
    assert_eq!(
        Error::InvalidCookieName("ke@y".into()).to_string(),
        r#"invalid cookie name "ke@y""#
    );
    assert_eq!(
        Error::InvalidAttribute {
            attribute: "path",
            value: "/;".into()
        }
        .to_string(),
        r#"invalid cookie path attribute "/;""#
    );
}
