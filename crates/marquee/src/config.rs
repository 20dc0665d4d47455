//! Layered configuration for the engine and the binary.
//!
//! Sources, later ones overriding earlier ones key by key:
//! - Bundled defaults (include_str! from marquee.toml)
//! - `~/.config/marquee/marquee.toml`
//! - `./marquee.toml`

use config::{Config, File, FileFormat};
use marquee_catalog::{PlatformRuleOverride, PlatformRuleTable};
use marquee_error::{ConfigError, MarqueeError, MarqueeResult};
use marquee_interface::TextGenerator;
use marquee_models::{EndpointConfig, FileBrandContext};
use marquee_orchestrator::{GenerationConfig, GenerationOrchestrator};
use marquee_prompt::{PromptAssembler, load_catalogs};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Top-level Marquee configuration.
///
/// # Example
///
/// ```no_run
/// use marquee::MarqueeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MarqueeConfig::load()?;
/// let rules = config.rule_table();
/// println!("twitter limit: {}", rules.rules_for("twitter").max_chars());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarqueeConfig {
    /// Fan-out tuning
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Generation service endpoint
    #[serde(default)]
    pub endpoint: EndpointConfig,

    /// Partial platform rule overrides, keyed by platform
    #[serde(default)]
    pub platforms: HashMap<String, PlatformRuleOverride>,

    /// Extra template and tone catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_file: Option<PathBuf>,

    /// Text file read as brand context on every request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_file: Option<PathBuf>,
}

fn build_error(e: config::ConfigError) -> MarqueeError {
    MarqueeError::from(ConfigError::new(format!(
        "Failed to build configuration: {}",
        e
    )))
}

fn parse_error(e: config::ConfigError) -> MarqueeError {
    MarqueeError::from(ConfigError::new(format!(
        "Failed to parse configuration: {}",
        e
    )))
}

impl MarqueeConfig {
    /// Load configuration from one file, without the bundled defaults.
    ///
    /// Missing sections take their built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> MarqueeResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
            .build()
            .map_err(|e| {
                MarqueeError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(parse_error)?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file is malformed or a value is invalid.
    #[instrument]
    pub fn load() -> MarqueeResult<Self> {
        Self::load_with(None)
    }

    /// Like [`load`](Self::load), with `extra` applied last.
    ///
    /// An explicitly named file must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is malformed or a value is invalid.
    #[instrument(skip(extra))]
    pub fn load_with(extra: Option<&Path>) -> MarqueeResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../marquee.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/marquee/marquee.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("marquee").required(false));

        if let Some(path) = extra {
            debug!(path = %path.display(), "Adding explicit configuration file");
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        let config: Self = builder
            .build()
            .map_err(build_error)?
            .try_deserialize()
            .map_err(parse_error)?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and override keys.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` naming the offending key.
    pub fn validate(&self) -> MarqueeResult<()> {
        self.generation.validate()?;
        if self.endpoint.base_url().trim().is_empty() {
            return Err(ConfigError::new("endpoint.base_url must not be empty").into());
        }
        for (platform, rule) in &self.platforms {
            if platform.trim().is_empty() {
                return Err(ConfigError::new("platforms keys must not be empty").into());
            }
            if rule.max_chars == Some(0) {
                return Err(ConfigError::new(format!(
                    "platforms.{}.max_chars must be positive",
                    platform
                ))
                .into());
            }
        }
        Ok(())
    }

    /// Built-in platform rules with the configured overrides applied.
    pub fn rule_table(&self) -> PlatformRuleTable {
        PlatformRuleTable::builtin().with_overrides(&self.platforms)
    }

    /// Prompt assembler over the configured rules and catalogs.
    ///
    /// # Errors
    ///
    /// Returns an error if `templates_file` cannot be loaded.
    pub fn assembler(&self) -> MarqueeResult<PromptAssembler> {
        let (templates, tones) = load_catalogs(self.templates_file.as_deref())?;
        Ok(PromptAssembler::new(
            Arc::new(self.rule_table()),
            Arc::new(templates),
            Arc::new(tones),
        ))
    }

    /// Orchestrator wired to `generator` and this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the catalogs
    /// cannot be loaded.
    #[instrument(skip(self, generator), fields(provider = generator.provider_name()))]
    pub fn build_orchestrator(
        &self,
        generator: Arc<dyn TextGenerator>,
    ) -> MarqueeResult<GenerationOrchestrator> {
        self.validate()?;
        let mut orchestrator = GenerationOrchestrator::new(generator, self.assembler()?)
            .with_config(self.generation.clone());
        if let Some(path) = &self.brand_file {
            debug!(path = %path.display(), "Using brand context file");
            orchestrator = orchestrator.with_brand_provider(Arc::new(FileBrandContext::new(path)));
        }
        Ok(orchestrator)
    }
}
