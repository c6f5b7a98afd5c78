//! Compiled allowlist patterns. All patterns expect ASCII-lowercased input.

use regex::Regex;
use std::sync::LazyLock;

/// Matches URLs that either start with an allowlisted scheme (http, https,
/// mailto, ftp) or contain no scheme at all.
///
/// The first `:` decides whether a URL is absolute. A colon after `#` is in
/// the fragment, after `?` in the query, after `/` in the path or authority.
/// So a URL is scheme-less when one of `/?#` (or the end of input) comes
/// before any `:`.
pub(super) static SAFE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:https?|mailto|ftp):|[^:/?#]*(?:[/?#]|$))")
        .expect("safe url pattern compiles")
});

/// Base64 data URLs (RFC 2397). Capture group 1 is the media type.
///
/// Media types with parameters (`data:text/javascript;charset=UTF-8;base64,...`)
/// do not match. None of the allowlisted types need parameters.
pub(super) static DATA_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:([^;,]*);base64,[a-z0-9+/]+=*$").expect("data url pattern compiles")
});

/// Audio, image and video MIME types that are safe inside a data URL.
pub(super) static SAFE_MIME_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"audio/(?:3gpp2|3gpp|aac|midi|mp3|mp4|mpeg|oga|ogg|opus|x-m4a|x-matroska|x-wav|wav|webm)",
        r"|image/(?:bmp|gif|jpeg|jpg|png|tiff|webp|x-icon)",
        r"|video/(?:mpeg|mp4|ogg|webm|x-matroska)",
        r")$",
    ))
    .expect("mime type pattern compiles")
});
