//! CLI for the safeurl hyperlink sanitizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use safeurl_core::config::{self, OutputFormat};
use std::io;

use commands::{run_check, run_completions, run_href, run_man, run_sanitize, SanitizeOptions};

/// Top-level CLI for safeurl.
#[derive(Debug, Parser)]
#[command(name = "safeurl")]
#[command(about = "Sanitize URLs for safe use in HTML hyperlinks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Output format accepted by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Plain,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Plain => OutputFormat::Plain,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the sanitized form of each URL (reads stdin lines when none are given).
    Sanitize {
        /// URLs to sanitize.
        urls: Vec<String>,
        /// Output format; defaults to the `output` setting in config.toml.
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Report whether a URL is safe, and why not if it isn't.
    Check {
        /// URL to classify.
        url: String,
        /// Exit with an error when the URL is unsafe.
        #[arg(long)]
        strict: bool,
    },

    /// Print an escaped href attribute for the sanitized URL.
    Href {
        /// URL to sanitize.
        url: String,
    },

    /// Generate shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let stdout = io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::Sanitize { urls, format } => {
                let cfg = config::load_or_default()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let opts = SanitizeOptions {
                    format: format.map(Into::into).unwrap_or(cfg.output),
                    log_rejections: cfg.log_rejections,
                    skip_blank_lines: cfg.skip_blank_lines,
                };
                run_sanitize(&urls, &opts, &mut out)?;
            }
            CliCommand::Check { url, strict } => run_check(&url, strict, &mut out)?,
            CliCommand::Href { url } => run_href(&url, &mut out)?,
            CliCommand::Completions { shell } => run_completions(shell, &mut out),
            CliCommand::Man => run_man(&mut out)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
