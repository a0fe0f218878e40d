//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::core::config::{self, Config};
use crate::core::error::ConfigError;
use crate::core::render::{OutputFormat, RenderConfig};
use crate::flows::count::{run_count, CountOptions};

/// codewords - count the words hiding in a JavaScript code base.
#[derive(Parser, Debug)]
#[command(name = "codewords")]
#[command(
    author,
    version,
    about,
    long_about = r#"codewords walks a project tree, tokenizes every JavaScript file and
counts the words found in the selected tokens.

Identifiers are split into words by default (fooBar -> foo, bar;
HTTPServer -> http, server), so the result reads as the vocabulary of the
code base. The table is written as data.js (a getData() function returning
[{text, count}, ...]), ready for a word cloud, and optionally as a CSV report.

Files that cannot be read or tokenized are reported and skipped; the rest of
the tree is still counted.

Examples:
    codewords .
    codewords ./app --tokens Identifier,String --split "[./']+"
    codewords ./app --drop i,e,err --exclude node_modules,dist --report
    codewords ./app --no-decamel --format json -o words.json
"#
)]
pub struct Cli {
    /// Project root to scan.
    #[arg(value_name = "ROOT", env = "CODEWORDS_ROOT")]
    pub root: Option<PathBuf>,

    /// Token types to count (comma-separated).
    #[arg(
        long,
        value_name = "TYPES",
        value_delimiter = ',',
        default_value = "Identifier",
        env = "CODEWORDS_TOKENS",
        long_help = "Token types whose values are counted, comma-separated.\n\n\
Known types: Boolean, Identifier, Keyword, Null, Numeric, Punctuator, String,\n\
RegularExpression, Template.\n\n\
Use \"all\" to count every token."
    )]
    pub tokens: Vec<String>,

    /// Do not split identifiers into words.
    #[arg(
        long,
        long_help = "Disable decamelization. By default token values are split at case\n\
changes and at '_' / '-' and lower-cased (fooBar -> foo, bar)."
    )]
    pub no_decamel: bool,

    /// Do not split token values on whitespace.
    #[arg(long)]
    pub no_whitespace_split: bool,

    /// Additional split pattern (regex).
    #[arg(
        long,
        value_name = "REGEX",
        env = "CODEWORDS_SPLIT",
        long_help = "Split words further on every match of this regular expression.\n\n\
Applied after decamelization and whitespace splitting. An invalid pattern\n\
aborts before any file is read.\n\n\
Example: --split \"[./'\\\"]+\""
    )]
    pub split: Option<String>,

    /// Words to drop (comma-separated, exact match).
    #[arg(
        long,
        value_name = "WORDS",
        value_delimiter = ',',
        env = "CODEWORDS_DROP"
    )]
    pub drop: Vec<String>,

    /// Folder names to skip (comma-separated).
    #[arg(
        long,
        value_name = "NAMES",
        value_delimiter = ',',
        default_value = "node_modules,coverage,tests",
        env = "CODEWORDS_EXCLUDE"
    )]
    pub exclude: Vec<String>,

    /// File names to skip (comma-separated).
    #[arg(
        long,
        value_name = "NAMES",
        value_delimiter = ',',
        env = "CODEWORDS_EXCLUDE_FILES"
    )]
    pub exclude_files: Vec<String>,

    /// File extensions to scan (comma-separated).
    #[arg(long, value_name = "EXTS", value_delimiter = ',', default_value = "js")]
    pub ext: Vec<String>,

    /// Output file.
    #[arg(short, long, value_name = "PATH", default_value = "data.js")]
    pub output: PathBuf,

    /// Output format (js/json).
    #[arg(
        long,
        default_value = "js",
        value_name = "FORMAT",
        long_help = "Select the output format.\n\n\
Supported values:\n\
- js (default): function getData() { return [...] }\n\
- json: the bare JSON array"
    )]
    pub format: String,

    /// Also write a `text,count` CSV report.
    #[arg(
        long,
        long_help = "Also write each word as a `text,count` line. No header, no quoting:\n\
a word containing ',' or a line break makes its line ambiguous."
    )]
    pub report: bool,

    /// Path of the CSV report.
    #[arg(long, value_name = "PATH", default_value = "data.csv")]
    pub report_path: PathBuf,

    /// Write compact JSON instead of indented JSON.
    #[arg(long)]
    pub compact: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (no status lines; skipped files are still reported).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the flags into a validated run configuration
    pub fn config(&self) -> Result<Config, ConfigError> {
        let token_types = config::parse_token_types(&self.tokens)?;
        let config = Config::default()
            .with_token_types(token_types)
            .with_decamelize(!self.no_decamel)
            .with_split_on_whitespace(!self.no_whitespace_split)
            .with_split_pattern(self.split.as_deref())?
            .with_drop_words(&self.drop)
            .with_excluded_folders(&self.exclude)
            .with_excluded_files(&self.exclude_files)
            .with_extensions(&self.ext);
        Ok(config)
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins over the flags.
///
/// `--quiet` only silences status lines: skipped files are still warned about.
fn init_logging(cli: &Cli) {
    let level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(&cli);

    let root = config::resolve_root(cli.root.as_deref())?;
    let run_config = cli.config()?;

    let format: OutputFormat = cli.format.parse().map_err(anyhow::Error::msg)?;
    let options = CountOptions {
        output: cli.output.clone(),
        render: RenderConfig::with_pretty(format, !cli.compact),
        report: cli.report.then(|| cli.report_path.clone()),
        quiet: cli.quiet,
    };

    run_count(&root, &run_config, &options)?;
    Ok(())
}
