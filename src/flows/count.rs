//! Count flow - Build the word frequency table of a source tree
//!
//! scan -> read -> tokenize -> normalize -> count -> merge -> render.
//!
//! Per-file failures (unreadable file, invalid token) are logged and the file
//! counts as contributing nothing, so the rest of the corpus is still
//! processed. The summary reports how many files were skipped this way; a
//! non-zero `files_failed` means the counts are low.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::backends::file_reader::read_source;
use crate::backends::scan::collect_files;
use crate::backends::tokenizer::tokenize;
use crate::core::aggregate::{aggregate, aggregate_file};
use crate::core::config::Config;
use crate::core::error::ScanError;
use crate::core::model::WordCount;
use crate::core::normalize::Normalizer;
use crate::core::paths::display_path;
use crate::core::render::{render_report, RenderConfig, Renderer};

/// Where and how to write the results
#[derive(Debug, Clone)]
pub struct CountOptions {
    pub output: PathBuf,
    pub render: RenderConfig,
    /// Path of the `text,count` report, if requested
    pub report: Option<PathBuf>,
    /// Suppress status lines
    pub quiet: bool,
}

/// Outcome of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountSummary {
    /// Files selected by the scan
    pub files_scanned: usize,
    /// Files that could not be read or tokenized
    pub files_failed: usize,
    pub distinct_words: usize,
    pub total_words: u64,
}

/// Count the words of a single file
pub fn count_file(path: &Path, normalizer: &Normalizer) -> Result<WordCount, ScanError> {
    let text = read_source(path)?;
    let tokens = tokenize(&text).map_err(|source| ScanError::Tokenize {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(aggregate_file(&tokens, normalizer))
}

/// Count every file and merge the results in file order
pub fn count_corpus(
    root: &Path,
    files: &[PathBuf],
    normalizer: &Normalizer,
    quiet: bool,
) -> (WordCount, CountSummary) {
    let mut failed = 0;

    let announce = |path: &Path| {
        if !quiet {
            eprintln!("{} {}", "processing".cyan(), display_path(path, root));
        }
        tracing::debug!(path = %path.display(), "counting file");
    };

    #[cfg(feature = "parallel")]
    let corpus = {
        use rayon::prelude::*;

        let results: Vec<_> = files
            .par_iter()
            .map(|path| {
                announce(path);
                count_file(path, normalizer)
            })
            .collect();

        aggregate(
            files
                .iter()
                .zip(results)
                .map(|(path, result)| settle(root, path, result, &mut failed)),
        )
    };

    #[cfg(not(feature = "parallel"))]
    let corpus = aggregate(files.iter().map(|path| {
        announce(path);
        let result = count_file(path, normalizer);
        settle(root, path, result, &mut failed)
    }));

    let summary = CountSummary {
        files_scanned: files.len(),
        files_failed: failed,
        distinct_words: corpus.len(),
        total_words: corpus.total(),
    };
    (corpus, summary)
}

/// A file that could not be read or tokenized contributes nothing
fn settle(
    root: &Path,
    path: &Path,
    result: Result<WordCount, ScanError>,
    failed: &mut usize,
) -> WordCount {
    match result {
        Ok(counts) => counts,
        Err(err) => {
            *failed += 1;
            let cause = std::error::Error::source(&err)
                .map(|s| s.to_string())
                .unwrap_or_default();
            tracing::warn!(
                path = %display_path(path, root),
                error = %cause,
                "skipping file"
            );
            WordCount::new()
        }
    }
}

/// Write `contents` to `path`, mapping failures to [`ScanError::Write`]
fn write_output(path: &Path, contents: &str) -> Result<(), ScanError> {
    fs::write(path, contents).map_err(|source| ScanError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Run the count command
pub fn run_count(root: &Path, config: &Config, options: &CountOptions) -> Result<CountSummary> {
    if !options.quiet {
        eprintln!("{} {}", "scanning".green().bold(), root.display());
    }

    let files = collect_files(root, config).context("Failed to scan project root")?;
    tracing::debug!(files = files.len(), "scan complete");

    let normalizer = Normalizer::from_config(config);
    let stages: Vec<_> = normalizer.stages().iter().map(|s| s.name()).collect();
    tracing::debug!(?stages, "normalizer ready");
    let (corpus, summary) = count_corpus(root, &files, &normalizer, options.quiet);
    if corpus.is_empty() {
        tracing::debug!("no token matched the type filter");
    }

    let renderer = Renderer::with_config(options.render);
    write_output(&options.output, &renderer.render(&corpus))?;

    if let Some(report) = &options.report {
        write_output(report, &render_report(&corpus))?;
    }

    if !options.quiet {
        print_summary(&summary, options);
    }

    Ok(summary)
}

fn print_summary(summary: &CountSummary, options: &CountOptions) {
    eprintln!(
        "{} {} files, {} distinct words, {} total",
        "counted".green().bold(),
        summary.files_scanned - summary.files_failed,
        summary.distinct_words,
        summary.total_words
    );
    if summary.files_failed > 0 {
        eprintln!(
            "{} {} files skipped (unreadable or invalid tokens), counts are incomplete",
            "warning:".yellow().bold(),
            summary.files_failed
        );
    }
    eprintln!("{} {}", "wrote".green().bold(), options.output.display());
    if let Some(report) = &options.report {
        eprintln!("{} {}", "wrote".green().bold(), report.display());
    }
}
