//! HTML escaping for attribute values.

use std::borrow::Cow;

/// Escapes `&`, `<`, `>`, `"` and `'` for use inside a quoted HTML attribute.
/// Borrows the input when nothing needs escaping.
pub fn escape_attr(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 16);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
