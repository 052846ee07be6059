//! Configuration of the jamlex tool
//!
//! Every key has a value in `defaults/jamlex.default.toml`, which is compiled in. A project
//! may carry a `jamlex.toml` next to its Jamroot, `--config` names another file, and flags
//! such as `--format` override single keys. [Loader] stacks these and deserializes the result
//! into [JamlexConfig].

use crate::jam::error::Result;
use crate::jam::formats::OutputFormat;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

const DEFAULT_TOML: &str = include_str!("../../defaults/jamlex.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct JamlexConfig {
    pub output: OutputConfig,
    pub tag: TagConfig,
    pub html: HtmlConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagConfig {
    pub show_offsets: bool,
}

/// Options of the HTML highlighter.
#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub wrap_pre: bool,
    pub css_prefix: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

/// Name of the per-project file picked up from the working directory.
pub const PROJECT_FILE: &str = "jamlex.toml";

/// Builds a [JamlexConfig] from layers, later layers winning: the embedded defaults, then
/// TOML files in the order they are added, then single-key overrides.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Loader {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer an explicitly named file; `build` fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer `dir/jamlex.toml` if there is one.
    pub fn with_project_file(self, dir: impl AsRef<Path>) -> Self {
        self.layer(&dir.as_ref().join(PROJECT_FILE), false)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        debug!(path = %path.display(), required, "config layer");
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `output.format`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<JamlexConfig> {
        Ok(self.builder.build()?.try_deserialize()?)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<JamlexConfig> {
    Loader::new().build()
}
