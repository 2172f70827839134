//! Raw TOML configuration loading.
//!
//! `RawConfig` finds the configuration files that apply to a working
//! directory, merges them over the built-in defaults, and applies
//! environment overrides. The result is a single TOML table that serde turns
//! into a [`Config`].
//
// ## LICENSING
//
// Based on Cargo's [`config` module](https://github.com/rust-lang/cargo/tree/master/src/cargo/util/config)
// with substantial modifications.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, anyhow, bail};
use toml::{Table, Value};

use crate::{CONFIG_FILE_NAME, Config};

pub(crate) use key::ConfigKey;

mod key;

/// Keys without a default value that may still be set from the environment.
const OPTIONAL_KEYS: &[(&str, &str)] = &[("grid", "snap-size")];

/// Configuration sources for a working directory.
#[derive(Debug)]
pub(crate) struct RawConfig {
    /// The directory configuration files are searched from.
    cwd: PathBuf,
    /// Directory where config file searching should stop (inclusive).
    search_stop_path: Option<PathBuf>,
    /// Environment variable snapshot.
    env: HashMap<String, String>,
}

impl RawConfig {
    /// Creates a new [`RawConfig`] that reads the process environment.
    pub(crate) fn new(cwd: PathBuf) -> RawConfig {
        RawConfig {
            cwd,
            search_stop_path: None,
            env: std::env::vars().collect(),
        }
    }

    /// Replaces the environment snapshot.
    pub(crate) fn set_env(&mut self, env: HashMap<String, String>) {
        self.env = env;
    }

    /// Sets the path where ancestor config file searching will stop. The
    /// given path is included, but its ancestors are not.
    #[cfg(test)]
    pub(crate) fn set_search_stop_path<P: Into<PathBuf>>(&mut self, path: P) {
        let path = path.into();
        debug_assert!(self.cwd.starts_with(&path));
        self.search_stop_path = Some(path);
    }

    /// The configuration files that apply, closest to the working directory first.
    pub(crate) fn config_files(&self) -> Vec<PathBuf> {
        let stop = self.search_stop_path.as_deref();
        let mut files = Vec::new();
        for dir in self.cwd.ancestors() {
            let path = dir.join(CONFIG_FILE_NAME);
            if path.is_file() {
                files.push(path);
            }
            if Some(dir) == stop {
                break;
            }
        }
        files
    }

    /// Loads, merges and deserializes the configuration.
    pub(crate) fn load(&self) -> Result<Config> {
        let table = self.load_table()?;
        Value::Table(table)
            .try_into()
            .context("invalid layout configuration")
    }

    /// Builds the merged configuration table.
    pub(crate) fn load_table(&self) -> Result<Table> {
        let mut table = Table::new();
        for path in self.config_files() {
            log::debug!("loading configuration from `{}`", path.display());
            let file = load_file(&path)?;
            merge(&mut table, file)
                .with_context(|| format!("failed to merge configuration at `{}`", path.display()))?;
        }

        let defaults = match Value::try_from(Config::default())? {
            Value::Table(defaults) => defaults,
            _ => bail!("default configuration is not a table"),
        };
        merge(&mut table, defaults.clone())?;

        self.apply_env(&mut table, &defaults)?;
        Ok(table)
    }

    /// Overrides every known key that has a matching environment variable.
    fn apply_env(&self, table: &mut Table, defaults: &Table) -> Result<()> {
        let mut keys: Vec<(String, String, Option<&Value>)> = Vec::new();
        for (section, values) in defaults {
            if let Value::Table(values) = values {
                for (name, default) in values {
                    keys.push((section.clone(), name.clone(), Some(default)));
                }
            }
        }
        for (section, name) in OPTIONAL_KEYS {
            keys.push((section.to_string(), name.to_string(), None));
        }

        for (section, name, default) in keys {
            let mut key = ConfigKey::new();
            key.push(&section);
            key.push(&name);
            let Some(raw) = self.env.get(key.as_env_key()) else {
                continue;
            };
            log::debug!("`{}` set from environment variable {}", key, key.as_env_key());
            let value = env_value(raw, default);
            match table
                .entry(section)
                .or_insert_with(|| Value::Table(Table::new()))
            {
                Value::Table(section) => {
                    section.insert(name, value);
                }
                _ => bail!("cannot set `{}`: its parent is not a table", key),
            }
        }
        Ok(())
    }
}

/// Parses one configuration file.
fn load_file(path: &Path) -> Result<Table> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read configuration file `{}`", path.display()))?;
    source
        .parse()
        .map_err(|e| anyhow::Error::from(e).context("could not parse input as TOML"))
}

/// Interprets an environment variable value.
///
/// Strings stay strings where the default is a string; otherwise the value
/// is parsed as a TOML scalar, falling back to a string.
fn env_value(raw: &str, default: Option<&Value>) -> Value {
    if let Some(Value::String(_)) = default {
        return Value::String(raw.to_string());
    }
    format!("v = {raw}")
        .parse::<Table>()
        .ok()
        .and_then(|mut t| t.remove("v"))
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

/// Merges `from` into `into`.
///
/// Tables merge key by key. Otherwise, existing values are kept.
fn merge(into: &mut Table, from: Table) -> Result<()> {
    for (key, value) in from {
        match (into.get_mut(&key), value) {
            (None, value) => {
                into.insert(key, value);
            }
            (Some(Value::Table(old)), Value::Table(new)) => {
                merge(old, new).with_context(|| format!("failed to merge key `{key}`"))?;
            }
            (Some(Value::Table(_)), found) | (Some(_), found @ Value::Table(_)) => {
                return Err(anyhow!(
                    "failed to merge key `{key}`: expected a table on both sides, found {}",
                    found.type_str()
                ));
            }
            (Some(_), _) => {}
        }
    }
    Ok(())
}
