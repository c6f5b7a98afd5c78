//! URL sanitization for hyperlink contexts in HTML documents.
//!
//! Raw strings are classified against a scheme allowlist and a data URL
//! media type allowlist. Safe strings are wrapped verbatim in a
//! [`SanitizedUrl`]; anything else becomes [`INNOCUOUS_URL`].

mod classify;
mod pattern;
mod sanitized;

pub use classify::{classify, is_safe_url, RejectReason, Verdict};
pub use sanitized::{sanitize, sanitize_with_verdict, SanitizedUrl, INNOCUOUS_URL};
