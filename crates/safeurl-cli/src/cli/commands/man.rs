//! `safeurl man` – render the man page.

use anyhow::{Context, Result};
use clap::CommandFactory;
use std::io::Write;

use crate::cli::Cli;

pub fn run_man(out: &mut dyn Write) -> Result<()> {
    clap_mangen::Man::new(Cli::command())
        .render(out)
        .context("render man page")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_roff() {
        let mut out = Vec::new();
        run_man(&mut out).unwrap();
        let page = String::from_utf8(out).unwrap();
        assert!(page.contains(".TH"));
        assert!(page.contains("safeurl"));
    }
}
