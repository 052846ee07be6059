//! Output formats for token streams
//!
//!     - `tag`: one line per token, `kind "text"` with escapes (see [tag]).
//!     - `json` / `yaml`: the token list serialized with serde.
//!     - `html`: Pygments-compatible highlighted markup (see [html]).
//!     - `text`: the detokenized source, byte for byte (see [detokenizer]).

pub mod detokenizer;
pub mod html;
pub mod tag;

use crate::jam::config::JamlexConfig;
use crate::jam::error::{Error, Result};
use crate::jam::token::Token;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

pub use detokenizer::detokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Tag,
    Json,
    Yaml,
    Html,
    Text,
}

pub const OUTPUT_FORMATS: &[OutputFormat] = &[
    OutputFormat::Tag,
    OutputFormat::Json,
    OutputFormat::Yaml,
    OutputFormat::Html,
    OutputFormat::Text,
];

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Tag => "tag",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Html => "html",
            OutputFormat::Text => "text",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            OutputFormat::Tag => "One token per line: kind and quoted text",
            OutputFormat::Json => "Token list as JSON",
            OutputFormat::Yaml => "Token list as YAML",
            OutputFormat::Html => "Highlighted HTML using Pygments CSS classes",
            OutputFormat::Text => "Reconstructed source text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        OUTPUT_FORMATS
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// Render `tokens` in `format`, using the format options from `config`.
pub fn render(tokens: &[Token<'_>], format: OutputFormat, config: &JamlexConfig) -> Result<String> {
    match format {
        OutputFormat::Tag => Ok(tag::to_tag_string(tokens, config.tag.show_offsets)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(tokens)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => Ok(serde_yaml::to_string(tokens)?),
        OutputFormat::Html => Ok(html::to_html(tokens, &config.html)),
        OutputFormat::Text => Ok(detokenize(tokens)),
    }
}
