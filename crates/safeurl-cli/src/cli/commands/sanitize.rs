//! `safeurl sanitize [URL]...` – sanitize arguments or stdin lines.

use anyhow::{Context, Result};
use safeurl_core::config::OutputFormat;
use safeurl_core::{sanitize_with_verdict, SanitizedUrl};
use serde::Serialize;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone)]
pub struct SanitizeOptions {
    pub format: OutputFormat,
    pub log_rejections: bool,
    pub skip_blank_lines: bool,
}

/// One line of `--format json` output.
#[derive(Serialize)]
struct Record<'a> {
    input: &'a str,
    output: &'a SanitizedUrl,
    safe: bool,
}

/// Sanitize `urls`, or every stdin line when `urls` is empty.
pub fn run_sanitize(urls: &[String], opts: &SanitizeOptions, out: &mut dyn Write) -> Result<()> {
    let rejected = if urls.is_empty() {
        sanitize_lines(io::stdin().lock(), opts, out)?
    } else {
        let mut rejected = 0;
        for url in urls {
            if !write_one(url, opts, out)? {
                rejected += 1;
            }
        }
        rejected
    };
    report_rejections(rejected, opts);
    Ok(())
}

/// Per-input rejection events come from the core at debug level; this is
/// the one summary for the whole batch.
fn report_rejections(rejected: usize, opts: &SanitizeOptions) {
    if opts.log_rejections && rejected > 0 {
        tracing::info!(rejected, "replaced unsafe urls with placeholder");
    } else {
        tracing::debug!(rejected, "sanitize finished");
    }
}

/// Returns the number of rejected inputs.
pub(super) fn sanitize_lines<R: BufRead>(
    reader: R,
    opts: &SanitizeOptions,
    out: &mut dyn Write,
) -> Result<usize> {
    let mut rejected = 0;
    for (n, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("read input line {}", n + 1))?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if opts.skip_blank_lines && line.trim().is_empty() {
            continue;
        }
        if !write_one(line, opts, out)? {
            rejected += 1;
        }
    }
    Ok(rejected)
}

/// Writes the sanitized form of `input`; returns whether it was safe.
fn write_one(input: &str, opts: &SanitizeOptions, out: &mut dyn Write) -> Result<bool> {
    let (url, verdict) = sanitize_with_verdict(input);
    match opts.format {
        OutputFormat::Plain => writeln!(out, "{}", url)?,
        OutputFormat::Json => {
            let record = Record {
                input,
                output: &url,
                safe: verdict.is_safe(),
            };
            serde_json::to_writer(&mut *out, &record).context("serialize result")?;
            writeln!(out)?;
        }
    }
    Ok(verdict.is_safe())
}

#[cfg(test)]
mod tests {
    use super::*;
    use safeurl_core::INNOCUOUS_URL;

    fn opts(format: OutputFormat, skip_blank_lines: bool) -> SanitizeOptions {
        SanitizeOptions {
            format,
            log_rejections: false,
            skip_blank_lines,
        }
    }

    #[test]
    fn plain_arguments() {
        let mut out = Vec::new();
        let urls = vec![
            "https://example.com".to_string(),
            "javascript:alert(1)".to_string(),
        ];
        run_sanitize(&urls, &opts(OutputFormat::Plain, true), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("https://example.com\n{INNOCUOUS_URL}\n")
        );
    }

    #[test]
    fn json_lines() {
        let mut out = Vec::new();
        let input = "/ok\r\nvbscript:x\n";
        let rejected =
            sanitize_lines(input.as_bytes(), &opts(OutputFormat::Json, true), &mut out).unwrap();
        assert_eq!(rejected, 1);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["input"], "/ok");
        assert_eq!(lines[0]["output"], "/ok");
        assert_eq!(lines[0]["safe"], true);
        assert_eq!(lines[1]["input"], "vbscript:x");
        assert_eq!(lines[1]["output"], INNOCUOUS_URL);
        assert_eq!(lines[1]["safe"], false);
    }

    #[test]
    fn blank_lines_skipped_or_kept() {
        let input = "a\n\n  \nb\n";

        let mut out = Vec::new();
        sanitize_lines(input.as_bytes(), &opts(OutputFormat::Plain, true), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\nb\n");

        let mut out = Vec::new();
        sanitize_lines(input.as_bytes(), &opts(OutputFormat::Plain, false), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\n\n  \nb\n");
    }
}
