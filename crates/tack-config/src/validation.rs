//! Pluggable config validation strategies
//!
//! Separates filesystem validation (for CLI use) from schema validation (for library use).

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::build::{BuildConfiguration, PluginDescriptor};
use crate::error::{ConfigError, Result};

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()>;
}

/// Schema-only validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use tack_config::{assemble, ConfigValidator, Mode, SchemaValidator};
///
/// SchemaValidator.validate(&assemble(Mode::Production)).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        if config.entry.trim().is_empty() {
            return Err(ConfigError::MissingEntry);
        }

        if config.dev_server.port == 0 {
            return Err(ConfigError::InvalidPort);
        }

        for rule in &config.rules {
            rule.test.compile()?;
            if let Some(exclude) = &rule.exclude {
                exclude.compile()?;
            }
            if rule.steps.is_empty() {
                return Err(ConfigError::EmptyPipeline {
                    pattern: rule.test.to_string(),
                });
            }
        }

        // Production output must be cache-busted; development output must not be.
        for template in config.output_templates() {
            if template.hashed != config.mode.is_production() {
                return Err(ConfigError::HashPolicy {
                    template: template.render(),
                    mode: config.mode,
                });
            }
        }

        for plugin in &config.plugins {
            let PluginDescriptor::CopyAssets(options) = plugin else {
                continue;
            };
            for pattern in &options.patterns {
                if pattern.from.as_os_str().is_empty() {
                    return Err(ConfigError::EmptyCopyPath { side: "from" });
                }
                if pattern.to.as_os_str().is_empty() {
                    return Err(ConfigError::EmptyCopyPath { side: "to" });
                }
            }
        }

        Ok(())
    }
}

/// Filesystem validator (for CLI use)
///
/// Checks that the entry, the HTML template and every static asset source
/// exist under the project root.
///
/// # Example
///
/// ```no_run
/// use tack_config::{assemble, ConfigValidator, FsValidator, Mode};
///
/// FsValidator::new(".").validate(&assemble(Mode::Development)).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    fn require(&self, kind: &'static str, path: PathBuf) -> Result<()> {
        debug!(kind, path = %path.display(), "checking path");
        if path.exists() {
            Ok(())
        } else {
            Err(ConfigError::PathNotFound { kind, path })
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfiguration) -> Result<()> {
        SchemaValidator.validate(config)?;

        let context = self.root.join(&config.context);
        self.require("entry", context.join(&config.entry))?;

        for plugin in &config.plugins {
            match plugin {
                PluginDescriptor::HtmlTemplate(options) => {
                    self.require("HTML template", context.join(&options.template))?;
                }
                PluginDescriptor::CopyAssets(options) => {
                    for pattern in &options.patterns {
                        self.require("static asset directory", self.root.join(&pattern.from))?;
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfiguration) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation
pub fn validate_fs(config: &BuildConfiguration, root: impl AsRef<Path>) -> Result<()> {
    FsValidator::new(root).validate(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{CopyPattern, LoaderStep, Rule};
    use crate::{Mode, assemble};

    #[test]
    fn schema_validator_accepts_assembled_configs() {
        assert!(SchemaValidator.validate(&assemble(Mode::Development)).is_ok());
        assert!(SchemaValidator.validate(&assemble(Mode::Production)).is_ok());
    }

    #[test]
    fn schema_validator_rejects_empty_entry() {
        let mut config = assemble(Mode::Development);
        config.entry = "  ".to_string();
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::MissingEntry
        ));
    }

    #[test]
    fn schema_validator_rejects_zero_port() {
        let mut config = assemble(Mode::Production);
        config.dev_server.port = 0;
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::InvalidPort
        ));
    }

    #[test]
    fn schema_validator_rejects_broken_pattern() {
        let mut config = assemble(Mode::Development);
        config
            .rules
            .push(Rule::new(r"\.(tsx", vec![LoaderStep::babel_preset_env()]));
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::InvalidPattern { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_empty_pipeline() {
        let mut config = assemble(Mode::Development);
        config.rules[0].steps.clear();
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::EmptyPipeline { .. }
        ));
    }

    #[test]
    fn schema_validator_rejects_unhashed_production_output() {
        let mut config = assemble(Mode::Production);
        config.output.filename.hashed = false;
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::HashPolicy {
                mode: Mode::Production,
                ..
            }
        ));
    }

    #[test]
    fn schema_validator_rejects_empty_copy_path() {
        let mut config = assemble(Mode::Development);
        for plugin in &mut config.plugins {
            if let PluginDescriptor::CopyAssets(options) = plugin {
                options.patterns.push(CopyPattern::new("src/fonts", ""));
            }
        }
        assert!(matches!(
            SchemaValidator.validate(&config).unwrap_err(),
            ConfigError::EmptyCopyPath { side: "to" }
        ));
    }
}
