//! Command-line arguments.

use clap::Parser;
use std::ffi::OsString;

/// Print the RugCheck risk report for a Solana token.
#[derive(Parser, Debug)]
#[command(name = "rugcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Token contract (mint) address
    #[arg(short = 't', long = "token", value_name = "ADDRESS")]
    pub token: Option<String>,

    /// Disable colored severity output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parses process arguments, also accepting the single-dash `-token` form.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// The token address, if a non-empty one was given. It is not trimmed.
    pub fn token_address(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.is_empty())
    }
}

/// Rewrites `-token` and `-token=<value>` to their `--token` spelling.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some("-token") => OsString::from("--token"),
            Some(s) if s.starts_with("-token=") => OsString::from(format!("-{}", s)),
            _ => arg,
        })
        .collect()
}
