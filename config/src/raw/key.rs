//! Key type for querying/merging configuration values.
//
// ## LICENSING
//
// Based on Cargo's [`config` module](https://github.com/rust-lang/cargo/tree/master/src/cargo/util/config)
// with substantial modifications.

use std::fmt;

/// Key for a configuration variable.
///
/// Tracks both the dotted TOML path of a value and the environment variable
/// that overrides it, eg. `field.seed-count` and `SUNFLOWER_FIELD_SEED_COUNT`.
#[derive(Debug, Clone)]
pub(crate) struct ConfigKey {
    // The environment variable this key maps to, grown by `push`.
    env: String,
    parts: Vec<String>,
}

impl ConfigKey {
    /// Creates a new blank configuration key.
    pub(crate) fn new() -> ConfigKey {
        ConfigKey {
            env: "SUNFLOWER".to_string(),
            parts: Vec::new(),
        }
    }

    /// Pushes a new sub-key, equivalent to accessing a sub-table in TOML.
    ///
    /// The environment key gets `name` upper-cased, with dashes turned into
    /// underscores.
    pub(crate) fn push(&mut self, name: &str) {
        let env = name.replace('-', "_").to_uppercase();
        self.parts.push(name.to_string());
        self.env.push('_');
        self.env.push_str(&env);
    }

    /// Returns the environment variable for this key.
    pub(crate) fn as_env_key(&self) -> &str {
        &self.env
    }

    /// Returns an iterator of the key parts as strings.
    pub(crate) fn parts(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(String::as_str)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<_> = self.parts().collect();
        parts.join(".").fmt(f)
    }
}
