//! The safety-tagged URL value.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::classify::{classify, Verdict};
use crate::html;

/// Value used in place of any URL that fails validation.
///
/// `about:invalid` references a non-existent document with a generic error
/// condition (CSS Values, RFC 6694 section 2.1). The fragment does not change
/// that.
pub const INNOCUOUS_URL: &str = "about:invalid#zGoSafez";

/// A URL that will not cause script execution when used as a hyperlink.
///
/// Only obtainable through [`sanitize`], [`sanitize_with_verdict`] or
/// [`SanitizedUrl::innocuous`]. It says
/// nothing about the resource the URL points to, so it must not be used where
/// that resource is run as code (e.g. a script `src`). HTML attribute escaping
/// is still required when writing it into markup; see
/// [`SanitizedUrl::to_href_attr`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SanitizedUrl {
    value: String,
}

impl SanitizedUrl {
    /// The placeholder URL, [`INNOCUOUS_URL`].
    pub fn innocuous() -> Self {
        Self {
            value: INNOCUOUS_URL.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// True if this holds the placeholder.
    pub fn is_innocuous(&self) -> bool {
        self.value == INNOCUOUS_URL
    }

    /// Renders `href="..."` with the value attribute-escaped.
    pub fn to_href_attr(&self) -> String {
        format!("href=\"{}\"", html::escape_attr(&self.value))
    }
}

/// Returns a [`SanitizedUrl`] holding `url` unchanged if it is safe, otherwise
/// holding [`INNOCUOUS_URL`].
///
/// Allowed are http, https, ftp and mailto URLs, relative URLs
/// (scheme-relative, absolute-path-relative, path-relative) and base64 data
/// URLs with an allowlisted audio, image or video type. No percent-decoding
/// or UTF-8 validation of the decoded form is attempted.
pub fn sanitize(url: &str) -> SanitizedUrl {
    sanitize_with_verdict(url).0
}

/// Like [`sanitize`], also returning the verdict that picked the value.
pub fn sanitize_with_verdict(url: &str) -> (SanitizedUrl, Verdict) {
    let verdict = classify(url);
    let sanitized = match verdict.reason() {
        None => SanitizedUrl {
            value: url.to_string(),
        },
        Some(reason) => {
            tracing::debug!(%reason, len = url.len(), "replacing unsafe url");
            SanitizedUrl::innocuous()
        }
    };
    (sanitized, verdict)
}

impl fmt::Display for SanitizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for SanitizedUrl {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl From<SanitizedUrl> for String {
    fn from(url: SanitizedUrl) -> Self {
        url.value
    }
}

impl Serialize for SanitizedUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

/// Deserialized input is sanitized, never trusted.
impl<'de> Deserialize<'de> for SanitizedUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(sanitize(&raw))
    }
}
