//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use arcade_core::{LogLevel, StorefrontConfig};

use crate::output::Output;

/// Config file names searched for, nearest directory first.
const CONFIG_NAMES: [&str; 3] = ["arcade.toml", ".arcade.toml", "arcade.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: StorefrontConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
}

impl Context {
    /// Load context from an explicit config file or the nearest one found
    /// from the current directory upwards.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let (mut config, config_path) = match config_path {
            Some(path) => (StorefrontConfig::load(path)?, Some(PathBuf::from(path))),
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                match find_config(&cwd) {
                    Some(path) => (StorefrontConfig::load(&path)?, Some(path)),
                    None => (StorefrontConfig::default(), None),
                }
            }
        };

        if output.is_verbose() {
            config.logging.level = LogLevel::Debug;
        }

        Ok(Self {
            config,
            config_path,
            output,
        })
    }

    /// Install the tracing subscriber described by the configuration.
    pub fn init_logging(&self) -> Result<()> {
        arcade_observability::init(&self.config.logging).context("Failed to initialise logging")
    }
}

/// Find a config file in `start` or any parent directory.
fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("arcade.json"), "{}").unwrap();

        assert_eq!(find_config(&nested), Some(dir.path().join("arcade.json")));
    }

    #[test]
    fn test_verbose_raises_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arcade.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();

        let quiet = Context::load(path.to_str(), Output::new(false, false)).unwrap();
        assert_eq!(quiet.config.logging.level, LogLevel::Warn);

        let loud = Context::load(path.to_str(), Output::new(true, false)).unwrap();
        assert_eq!(loud.config.logging.level, LogLevel::Debug);
        assert_eq!(loud.config_path, Some(path));
    }
}
