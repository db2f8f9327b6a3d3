use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

/// Runtime configuration for the import pipeline.
#[derive(Debug, Clone)]
pub struct Config {
    /// `chrono` format string the date field of every imported line must
    /// match. Default is ISO-8601 (`%Y-%m-%d`).
    pub date_format: String,
    /// Field separator between the date and the title. Default is a comma.
    pub delimiter: char,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    date_format: Option<String>,
    delimiter: Option<char>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            delimiter: ',',
        }
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults for anything left unset.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or(FileConfig {
            date_format: None,
            delimiter: None,
        });
        let defaults = Self::default();

        Ok(Self {
            date_format: file_config.date_format.unwrap_or(defaults.date_format),
            delimiter: file_config.delimiter.unwrap_or(defaults.delimiter),
        })
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("daybook")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("daybook").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig {
            date_format: None,
            delimiter: None,
        })
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
