pub mod config;
pub mod html;
pub mod logging;
pub mod url_model;

pub use url_model::{
    classify, is_safe_url, sanitize, sanitize_with_verdict, RejectReason, SanitizedUrl, Verdict,
    INNOCUOUS_URL,
};
