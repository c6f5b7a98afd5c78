//! `safeurl href <url>` – print a ready-to-embed href attribute.

use anyhow::Result;
use safeurl_core::sanitize;
use std::io::Write;

pub fn run_href(url: &str, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", sanitize(url).to_href_attr())?;
    Ok(())
}
