//! `safeurl check <url>` – report the verdict for one URL.

use anyhow::Result;
use safeurl_core::classify;
use std::io::Write;

/// Prints `safe` or `unsafe: <reason>`. With `strict`, an unsafe URL is an error.
pub fn run_check(url: &str, strict: bool, out: &mut dyn Write) -> Result<()> {
    let verdict = classify(url);
    match verdict.reason() {
        None => writeln!(out, "safe")?,
        Some(reason) => {
            writeln!(out, "unsafe: {reason}")?;
            if strict {
                return Err(anyhow::Error::new(reason.clone()).context("url rejected"));
            }
        }
    }
    Ok(())
}
