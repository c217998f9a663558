//! Structural validation of command models and list queries.
//!
//! Rules only look at the shape of a single request body. Failures are
//! collected per field (camelCase, with `[i]` for list elements) and surface
//! as [`CoreError::Validation`].

use flashgen_core::{CoreError, FieldErrors};
use url::Url;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_DECK_NAME_LEN: usize = 100;
pub const MAX_DECK_DESCRIPTION_LEN: usize = 500;
pub const MAX_CARD_FRONT_LEN: usize = 200;
pub const MAX_CARD_BACK_LEN: usize = 500;
pub const MIN_SOURCE_TEXT_LEN: usize = 1000;
pub const MAX_SOURCE_TEXT_LEN: usize = 10_000;
pub const MAX_SEARCH_LEN: usize = 100;

/// Field key used for errors about the body as a whole.
pub const BODY_FIELD: &str = "body";

pub trait Validate {
    fn validate(&self) -> Result<(), CoreError>;
}

/// Canonical form of a request body, the one written to storage. User text
/// is trimmed; passwords and ids pass through untouched.
pub trait Normalize: Sized {
    fn normalize(self) -> Self {
        self
    }
}

/// Trimmed text, `None` when nothing is left.
pub fn trim_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Accumulates field errors so one response reports every problem.
#[derive(Debug, Default)]
pub struct Violations {
    errors: FieldErrors,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn check(&mut self, field: impl Into<String>, result: Result<(), String>) {
        if let Err(message) = result {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), CoreError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.errors))
        }
    }
}

/// `local@domain` with no whitespace and a dot somewhere in the domain.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email is required".to_string());
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err("Email must be a valid email address".to_string())
    }
}

pub fn validate_new_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    Ok(())
}

pub fn validate_required(value: &str, what: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(format!("{what} is required"));
    }
    Ok(())
}

/// Absolute `http://` or `https://` URL with a host part.
pub fn validate_redirect_url(raw: &str) -> Result<(), String> {
    let invalid = || "Redirect URL must be an absolute http(s) URL".to_string();
    // The parser strips tabs and newlines instead of rejecting them.
    if raw.chars().any(|c| c.is_control() || c.is_whitespace()) {
        return Err(invalid());
    }
    let url = Url::parse(raw).map_err(|_| invalid())?;
    match (url.scheme(), url.host_str()) {
        ("http" | "https", Some(host)) if !host.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Length of `value` after trimming, counted in characters, within `min..=max`.
pub fn validate_text_len(value: &str, what: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len == 0 && min > 0 {
        return Err(format!("{what} must not be empty"));
    }
    if len < min {
        return Err(format!("{what} must be at least {min} characters"));
    }
    if len > max {
        return Err(format!("{what} must be at most {max} characters"));
    }
    Ok(())
}

pub fn validate_limit(limit: Option<u32>) -> Result<(), String> {
    match limit {
        Some(l) if l == 0 || l > crate::query::MAX_LIMIT => Err(format!(
            "Limit must be between 1 and {}",
            crate::query::MAX_LIMIT
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_rules() {
        assert!(validate_email("ann@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("ann.example.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ann@localhost").is_err());
        assert!(validate_email("ann@ex@ample.com").is_err());
        assert!(validate_email("a nn@example.com").is_err());
        assert!(validate_email("ann@example.").is_err());
    }

    #[test]
    fn password_length_counts_chars() {
        assert!(validate_new_password("12345").is_err());
        assert!(validate_new_password("123456").is_ok());
        assert!(validate_new_password("ééééé").is_err());
    }

    #[test]
    fn redirect_url_rules() {
        assert!(validate_redirect_url("https://app.example.com/verified").is_ok());
        assert!(validate_redirect_url("http://localhost:4321").is_ok());
        assert!(validate_redirect_url("/verified").is_err());
        assert!(validate_redirect_url("https://").is_err());
        assert!(validate_redirect_url("ftp://example.com").is_err());
        assert!(validate_redirect_url("https://app.example.com:8443/cb?next=%2Fdecks").is_ok());
        for bad in [
            "https://?x",
            "https://#frag",
            "https://:80",
            "http://\texample.com",
            "https://exa\nmple.com",
            "https://exa mple.com",
            "mailto:ann@example.com",
        ] {
            assert!(validate_redirect_url(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn blank_text_becomes_none() {
        assert_eq!(trim_to_none(None), None);
        assert_eq!(trim_to_none(Some(" \t ".into())), None);
        assert_eq!(trim_to_none(Some("  Irregular verbs ".into())), Some("Irregular verbs".into()));
    }

    #[test]
    fn text_len_trims_before_counting() {
        assert!(validate_text_len("   ", "Front", 1, 10).is_err());
        assert!(validate_text_len("  ab  ", "Front", 1, 2).is_ok());
        let err = validate_text_len("abc", "Front", 1, 2).unwrap_err();
        assert_eq!(err, "Front must be at most 2 characters");
        let err = validate_text_len("abc", "Text", 5, 10).unwrap_err();
        assert_eq!(err, "Text must be at least 5 characters");
    }

    #[test]
    fn limit_bounds() {
        assert!(validate_limit(None).is_ok());
        assert!(validate_limit(Some(1)).is_ok());
        assert!(validate_limit(Some(100)).is_ok());
        assert!(validate_limit(Some(0)).is_err());
        assert!(validate_limit(Some(101)).is_err());
    }

    #[test]
    fn violations_collect_per_field() {
        let mut v = Violations::new();
        assert!(v.is_empty());
        v.add("name", "a");
        v.add("name", "b");
        v.check("front", Ok(()));
        v.check("back", Err("c".to_string()));
        let Err(CoreError::Validation(errors)) = v.into_result() else {
            panic!("expected validation error");
        };
        assert_eq!(errors["name"], vec!["a", "b"]);
        assert_eq!(errors["back"], vec!["c"]);
        assert!(!errors.contains_key("front"));
    }
}
