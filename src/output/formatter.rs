use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Serialize `data` for the machine-readable formats. Returns `None` for
    /// `Human`, which has a dedicated formatter per record type.
    pub fn render<T: Serialize + ?Sized>(&self, data: &T) -> Result<Option<String>> {
        match self {
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(data)?)),
            OutputFormat::Yaml => Ok(Some(serde_yaml::to_string(data)?)),
            OutputFormat::Human => Ok(None),
        }
    }
}
