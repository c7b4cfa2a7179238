//! Application configuration loaded from `config.toml`.
//!
//! ```toml
//! [generation]
//! width = 80
//! height = 45
//! use_random_seed = false
//! seed = "S1"
//!
//! [output]
//! format = "ascii"
//! legend = true
//! ```

use anyhow::Context;
use reefgen_core::GenerationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One symbol per cell.
    #[default]
    Ascii,
    /// Full grid as JSON.
    Json,
    /// Seed, fingerprint and category counts only.
    Summary,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub legend: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Ascii,
            legend: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub generation: GenerationConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Rejects configurations the generator cannot run.
    ///
    /// Percentages are left alone here; the generator clamps them.
    pub fn validate(&self) -> anyhow::Result<()> {
        let gen = &self.generation;
        anyhow::ensure!(gen.width > 0, "Grid width must be positive");
        anyhow::ensure!(gen.height > 0, "Grid height must be positive");

        let cells = gen.width as usize * gen.height as usize;
        if gen.artefact_count * 2 > cells {
            tracing::warn!(
                "artefact_count {} is more than half of the {} cells; placement may stall",
                gen.artefact_count,
                cells
            );
        }
        Ok(())
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::info!("{} not found, using default configuration", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Stable hash of the generation parameters.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.generation).as_bytes());
        hex::encode(hasher.finalize())
    }
}
