use kiln_cookies::{CookieConfig, CookieOptions, CookiesHeadersExt, SameSite};
use kiln_http::Headers;
use std::time::Duration;

pub fn main() -> kiln_cookies::Result<()> {
    env_logger::init();
    let config = CookieConfig::from_env();

    let mut headers = Headers::new();
    let mut cookies = headers.response_cookies_with_config(config);
    cookies.append("some_cookie", "some-cookie-value")?;
    cookies.append_with_options(
        "session",
        "QUI+REU/Rw==",
        &CookieOptions::new()
            .with_max_age(Duration::from_secs(60 * 60))
            .with_same_site(SameSite::Lax)
            .with_secure(true)
            .with_http_only(true),
    )?;
    cookies.delete("stale_cookie")?;

    for value in headers.set_cookies() {
        println!("Set-Cookie: {value}");
    }

    Ok(())
}
