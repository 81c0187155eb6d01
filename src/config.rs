use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rich_text::{Attributes, Color, Font};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub baseline: BaselineConfig,
    pub parser: ParserConfig,
    pub reconciler: ReconcilerConfig,
}

/// Attributes applied to any text no style run covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaselineConfig {
    pub font: Font,
    pub foreground: Color,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            font: Font::default(),
            foreground: Color::from("#000000"),
        }
    }
}

impl BaselineConfig {
    pub fn attributes(&self) -> Attributes {
        Attributes {
            font: Some(self.font.clone()),
            foreground: Some(self.foreground.clone()),
            ..Attributes::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Open containers allowed at once; deeper tags stay literal text.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconcilerConfig {
    pub locate: Locate,
}

/// How a text leaf is found again in the source rich text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locate {
    /// First occurrence of the leaf's content. Repeated substrings may pick
    /// up styling from the wrong place.
    #[default]
    FirstOccurrence,
    /// The byte range captured while parsing, when it still matches.
    CapturedRange,
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{Config, ConfigError, Locate};
    use crate::rich_text::{Color, Font};

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r##"
[baseline]
foreground = "#333333"

[reconciler]
locate = "captured_range"
"##,
        )
        .unwrap();

        assert_eq!(config.baseline.foreground, Color::from("#333333"));
        assert_eq!(config.baseline.font, Font::default());
        assert_eq!(config.parser.max_depth, 64);
        assert_eq!(config.reconciler.locate, Locate::CapturedRange);
    }

    #[test]
    fn baseline_font_fields() {
        let config = Config::from_toml("[baseline.font]\nsize = 14.0\nmonospace = true\n").unwrap();
        assert_eq!(
            config.baseline.font,
            Font {
                size: 14.0,
                monospace: true,
                ..Font::default()
            }
        );
    }

    #[test]
    fn rejects_unknown_locate_strategy() {
        assert!(Config::from_toml("[reconciler]\nlocate = \"last_occurrence\"\n").is_err());
    }

    #[test]
    fn missing_file() {
        let path = Path::new("/nonexistent/post-markup.toml");
        assert!(matches!(Config::load(path), Err(ConfigError::Read { .. })));
        assert_eq!(Config::load_or_default(path).unwrap(), Config::default());
    }
}
