//! Shared configuration loader for the doku toolchain.
//!
//! `defaults/doku.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`DokuConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use doku_babel::{
    BatchOptions, ConvertError, Converter, LiteralFixup, PatternRule, RuleSet, TitleMode,
    Variant, VotingTemplate,
};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/doku.default.toml");

/// Top-level configuration consumed by doku applications.
#[derive(Debug, Clone, Deserialize)]
pub struct DokuConfig {
    pub convert: ConvertConfig,
    pub batch: BatchConfig,
    pub rules: RulesConfig,
}

/// Which rule table to run and how to treat RFC titles.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub variant: Variant,
    pub title_mode: TitleMode,
    pub voting: VotingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VotingConfig {
    pub enabled: bool,
    pub snippet_token: String,
    pub title_token: String,
    pub template: String,
}

impl From<&VotingConfig> for VotingTemplate {
    fn from(config: &VotingConfig) -> Self {
        VotingTemplate::new(config.template.clone())
            .with_title_token(config.title_token.clone())
            .with_snippet_token(config.snippet_token.clone())
    }
}

/// Directory driver settings.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extension: String,
}

/// User rules appended to the selected variant.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub extra: Vec<RuleConfig>,
    #[serde(default)]
    pub fixups: Vec<FixupConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RuleConfig {
    pub name: String,
    pub pattern: String,
    pub replacement: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixupConfig {
    pub from: String,
    pub to: String,
}

impl DokuConfig {
    /// The variant's rule set with the user rules appended.
    pub fn build_rule_set(&self) -> Result<RuleSet, ConvertError> {
        let mut rules = RuleSet::for_variant(self.convert.variant)?;
        for rule in &self.rules.extra {
            rules.push(PatternRule::new(
                rule.name.clone(),
                &rule.pattern,
                rule.replacement.clone(),
            )?);
        }
        for fixup in &self.rules.fixups {
            rules.push_fixup(LiteralFixup::new(fixup.from.clone(), fixup.to.clone()));
        }
        Ok(rules)
    }

    /// A converter for this configuration. Pattern errors surface here, at startup.
    pub fn build_converter(&self) -> Result<Converter, ConvertError> {
        let converter =
            Converter::new(self.build_rule_set()?).with_title_mode(self.convert.title_mode);
        if self.convert.variant.inserts_voting() && self.convert.voting.enabled {
            Ok(converter.with_voting(VotingTemplate::from(&self.convert.voting)))
        } else {
            Ok(converter)
        }
    }

    /// Batch options; a relative output directory lives inside the input directory.
    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions::new(&self.batch.input_dir)
            .with_output_dir(self.batch.input_dir.join(&self.batch.output_dir))
            .with_extension(self.batch.extension.clone())
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<DokuConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<DokuConfig, ConfigError> {
    Loader::new().build()
}
