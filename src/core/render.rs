//! Renderer module
//!
//! Renders the corpus WordCount to the output artifact (js/json) and to the
//! optional `text,count` report.

use crate::core::model::WordCount;

/// Artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `function getData() { return [...] }`, loadable with a script tag
    #[default]
    Js,
    /// Bare JSON array of entries
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "js" | "javascript" => Ok(OutputFormat::Js),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: true,
        }
    }
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for word counts
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render the artifact to a string
    pub fn render(&self, counts: &WordCount) -> String {
        match self.config.format {
            OutputFormat::Js => self.render_js(counts),
            OutputFormat::Json => format!("{}\n", self.render_json(counts)),
        }
    }

    fn render_json(&self, counts: &WordCount) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(counts).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(counts).unwrap_or_else(|_| "[]".to_string())
        }
    }

    fn render_js(&self, counts: &WordCount) -> String {
        format!(
            "function getData() {{\n    return {}\n}}\n",
            self.render_json(counts)
        )
    }
}

/// Render the `text,count` report, one entry per line.
///
/// Words are written verbatim. A word containing `,` or a line break makes
/// its line ambiguous; the format has no quoting.
pub fn render_report(counts: &WordCount) -> String {
    let mut output = String::new();
    for entry in counts.entries() {
        output.push_str(&format!("{},{}\n", entry.text, entry.count));
    }
    output
}
