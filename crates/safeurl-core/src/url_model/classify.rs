//! Safety classification of raw URL strings.

use super::pattern::{DATA_URL, SAFE_MIME_TYPE, SAFE_URL};

/// Why a URL was refused. Informational only; sanitization never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RejectReason {
    /// The URL has a scheme that is not in the allowlist.
    #[error("disallowed scheme {scheme:?}")]
    DisallowedScheme { scheme: String },
    /// Well-formed base64 data URL whose media type is not allowlisted.
    #[error("data URL media type {media_type:?} is not allowed")]
    UnsafeDataUrl { media_type: String },
    /// `data:` URL that is not `data:<type>;base64,<payload>`.
    #[error("data URL is not a base64 payload with a plain media type")]
    MalformedDataUrl,
}

/// Outcome of [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Safe,
    Unsafe(RejectReason),
}

impl Verdict {
    /// True for [`Verdict::Safe`].
    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe)
    }

    /// The rejection reason, or `None` when safe.
    pub fn reason(&self) -> Option<&RejectReason> {
        match self {
            Verdict::Safe => None,
            Verdict::Unsafe(reason) => Some(reason),
        }
    }
}

/// Classifies `url` for use as a hyperlink in an HTML document.
///
/// Safe when `url`:
/// - starts with `http:`, `https:`, `mailto:` or `ftp:`; or
/// - has no scheme, i.e. `:` only appears after one of `/`, `?`, `#`; or
/// - is a base64 data URL with an allowlisted audio, image or video type.
///
/// Matching is ASCII case-insensitive.
pub fn classify(url: &str) -> Verdict {
    let url = url.to_ascii_lowercase();
    if SAFE_URL.is_match(&url) {
        return Verdict::Safe;
    }

    if let Some(caps) = DATA_URL.captures(&url) {
        let media_type = &caps[1];
        if SAFE_MIME_TYPE.is_match(media_type) {
            return Verdict::Safe;
        }
        return Verdict::Unsafe(RejectReason::UnsafeDataUrl {
            media_type: media_type.to_string(),
        });
    }

    if url.starts_with("data:") {
        return Verdict::Unsafe(RejectReason::MalformedDataUrl);
    }

    // SAFE_URL failed, so a ':' precedes every '/', '?' and '#'.
    let scheme = url.split(':').next().unwrap_or_default();
    Verdict::Unsafe(RejectReason::DisallowedScheme {
        scheme: scheme.to_string(),
    })
}

/// Returns true when `url` is safe to use in a hyperlink context. See [`classify`].
pub fn is_safe_url(url: &str) -> bool {
    classify(url).is_safe()
}
