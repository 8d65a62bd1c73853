#![forbid(unsafe_code)]

//! Command-line argument parsing for the exporter.
//!
//! Parses args manually to keep the binary lean. Supports environment
//! variable overrides via the `TEEMS_SITE_*` prefix.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use teems_core::logging::LogFormat;

use crate::seo::DEFAULT_BASE_URL;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
teems-site: static exporter for the NatCap TEEMs site

USAGE:
    teems-site [OPTIONS]

OPTIONS:
    --out-dir=DIR        Output directory (default: dist)
    --base-url=URL       Public origin for canonical links and the sitemap
                         (default: https://umn-natcap-tee-ms-mock-site.vercel.app)
    --log-format=FORMAT  Log line format: 'pretty' (default) or 'json'
    --help, -h           Show this help message
    --version, -V        Show version

OUTPUT:
    <out>/index.html, <out>/<route>/index.html, <out>/404.html,
    <out>/sitemap.xml, <out>/robots.txt

ENVIRONMENT VARIABLES:
    TEEMS_SITE_OUT_DIR   Override --out-dir
    TEEMS_SITE_BASE_URL  Override --base-url
    TEEMS_LOG_FORMAT     Override --log-format (pretty|json)
    TEEMS_LOG            Log filter directives (default: info)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Directory receiving the export.
    pub out_dir: PathBuf,
    /// Public origin.
    pub base_url: String,
    /// Log line format.
    pub log_format: LogFormat,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            base_url: DEFAULT_BASE_URL.to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// Outcome of parsing that does not yield options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliExit {
    /// `--help` was requested.
    Help,
    /// `--version` was requested.
    Version,
    /// The arguments were invalid.
    Invalid(String),
}

impl fmt::Display for CliExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Help => f.write_str(HELP_TEXT),
            Self::Version => write!(f, "teems-site {VERSION}"),
            Self::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl Opts {
    /// Parse process arguments and environment, exiting on `--help`,
    /// `--version`, or invalid input.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(args, |key| env::var(key).ok()) {
            Ok(opts) => opts,
            Err(CliExit::Invalid(msg)) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
            Err(exit) => {
                println!("{exit}");
                process::exit(0);
            }
        }
    }

    /// Parse `args` with environment lookups through `lookup`.
    ///
    /// Environment variables take precedence over defaults but are
    /// overridden by explicit command-line flags.
    pub fn parse_from<I, S>(args: I, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliExit>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = lookup("TEEMS_SITE_OUT_DIR")
            && !val.is_empty()
        {
            opts.out_dir = PathBuf::from(val);
        }
        if let Some(val) = lookup("TEEMS_SITE_BASE_URL")
            && !val.is_empty()
        {
            opts.base_url = val;
        }
        if let Some(val) = lookup("TEEMS_LOG_FORMAT")
            && let Ok(format) = val.parse()
        {
            opts.log_format = format;
        }

        // Parse command-line args (override env vars)
        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Err(CliExit::Help),
                "--version" | "-V" => return Err(CliExit::Version),
                other => {
                    if let Some(val) = other.strip_prefix("--out-dir=") {
                        if val.is_empty() {
                            return Err(CliExit::Invalid("--out-dir needs a value".into()));
                        }
                        opts.out_dir = PathBuf::from(val);
                    } else if let Some(val) = other.strip_prefix("--base-url=") {
                        if !(val.starts_with("http://") || val.starts_with("https://")) {
                            return Err(CliExit::Invalid(format!("Invalid --base-url value: {val}")));
                        }
                        opts.base_url = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--log-format=") {
                        opts.log_format = val
                            .parse()
                            .map_err(|e| CliExit::Invalid(format!("Invalid --log-format value: {e}")))?;
                    } else {
                        return Err(CliExit::Invalid(format!("Unknown argument: {other}")));
                    }
                }
            }
        }

        Ok(opts)
    }
}
