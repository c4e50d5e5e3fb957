use std::borrow::Cow;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use subtle::ConstantTimeEq;

use crate::helper::{from_env_or, generate_token, parse_env_or};

const DEFAULT_COOKIE_NAME: &str = "formwright_csrf";
const DEFAULT_TOKEN_LENGTH: usize = 32;

#[derive(Debug)]
pub(crate) struct Config {
    cookie_name: Cow<'static, str>,
    token_length: usize,
    secure: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cookie_name: Cow::Borrowed(DEFAULT_COOKIE_NAME),
            token_length: DEFAULT_TOKEN_LENGTH,
            secure: false,
        }
    }
}

impl Config {
    pub(crate) fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            cookie_name: from_env_or("CSRF_COOKIE_NAME", DEFAULT_COOKIE_NAME),
            token_length: parse_env_or("CSRF_TOKEN_LENGTH", DEFAULT_TOKEN_LENGTH)?,
            secure: parse_env_or("CSRF_COOKIE_SECURE", false)?,
        })
    }

    pub(crate) fn build(self) -> Manager {
        Manager {
            cookie_name: self.cookie_name,
            token_length: self.token_length,
            secure: self.secure,
        }
    }
}

/// Keeps the CSRF token of a visitor in a cookie.
#[derive(Clone, Debug)]
pub(crate) struct Manager {
    cookie_name: Cow<'static, str>,
    token_length: usize,
    secure: bool,
}

impl Manager {
    pub fn cookie_name(&self) -> &str {
        self.cookie_name.as_ref()
    }

    pub fn token(&self, jar: &CookieJar) -> Option<CsrfToken> {
        jar.get(self.cookie_name())
            .map(|cookie| cookie.value())
            .filter(|value| !value.is_empty())
            .map(|value| CsrfToken(value.to_owned()))
    }

    /// Returns the visitor token, creating it when the cookie is missing.
    pub fn resolve(&self, jar: CookieJar) -> (CookieJar, CsrfToken) {
        if let Some(token) = self.token(&jar) {
            return (jar, token);
        }
        tracing::debug!("generating a new csrf token");
        let token = CsrfToken(generate_token(self.token_length));
        let cookie = Cookie::build((self.cookie_name.to_string(), token.0.clone()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Strict)
            .secure(self.secure);
        (jar.add(cookie), token)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CsrfToken(String);

impl CsrfToken {
    pub fn verify(&self, submitted: Option<&str>) -> bool {
        let Some(submitted) = submitted else {
            return false;
        };
        self.0.as_bytes().ct_eq(submitted.as_bytes()).into()
    }
}

impl formwright_ui::Session for CsrfToken {
    fn csrf_token(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.0.as_str())
    }
}

#[cfg(test)]
impl CsrfToken {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
    use axum_extra::extract::cookie::CookieJar;

    use super::{Config, CsrfToken};

    #[test]
    fn should_create_token_when_cookie_missing() {
        let manager = Config::default().build();
        let (jar, token) = manager.resolve(CookieJar::new());
        let cookie = jar.get("formwright_csrf").unwrap();
        assert_eq!(cookie.value().len(), 32);
        assert_eq!(manager.token(&jar), Some(token));
    }

    #[test]
    fn should_reuse_token_from_cookie() {
        let manager = Config::default().build();
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("formwright_csrf=abcdef"));
        let (_, token) = manager.resolve(CookieJar::from_headers(&headers));
        assert_eq!(token, CsrfToken::new("abcdef"));
    }

    #[test]
    fn should_verify_submitted_token() {
        let token = CsrfToken::new("abcdef");
        assert!(token.verify(Some("abcdef")));
        assert!(!token.verify(Some("abcdeg")));
        assert!(!token.verify(Some("abc")));
        assert!(!token.verify(Some("abcdefg")));
        assert!(!token.verify(Some("")));
        assert!(!token.verify(None));
    }
}
