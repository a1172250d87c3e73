//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use rpg_core::GameConfig;
use rpg_runtime::RuntimeConfig;

/// How each published snapshot is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnapshotFormat {
    /// Map, player status and event log as plain text.
    #[default]
    Text,
    /// One JSON summary per line.
    Json,
}

impl FromStr for SnapshotFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown snapshot format '{other}'")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding the `.map` files and `world.txt`.
    pub content_dir: PathBuf,
    pub runtime: RuntimeConfig,
    /// Write logs to `<dir>/rpg.log` instead of stderr.
    pub log_dir: Option<PathBuf>,
    pub snapshot_format: SnapshotFormat,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../game/content/maps")),
            runtime: RuntimeConfig::default(),
            log_dir: None,
            snapshot_format: SnapshotFormat::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RPG_CONTENT_DIR` - content directory
    /// - `RPG_EVENT_LOG_CAPACITY` - entries kept per level log (default: 10)
    /// - `RPG_INPUT_BUFFER` - input queue capacity (default: 32)
    /// - `RPG_SNAPSHOT_BUFFER` - per-observer snapshot capacity (default: 16)
    /// - `RPG_LOG_DIR` - log to a file in this directory
    /// - `RPG_SNAPSHOT_FORMAT` - `text` or `json` (default: text)
    ///
    /// Unparsable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("RPG_CONTENT_DIR") {
            config.content_dir = PathBuf::from(dir);
        }
        if let Some(capacity) = read_var::<usize>(&lookup, "RPG_EVENT_LOG_CAPACITY") {
            config.runtime.game_config = GameConfig::with_event_log_capacity(capacity);
        }
        if let Some(size) = read_var::<usize>(&lookup, "RPG_INPUT_BUFFER") {
            config.runtime.input_buffer_size = size.max(1);
        }
        if let Some(size) = read_var::<usize>(&lookup, "RPG_SNAPSHOT_BUFFER") {
            config.runtime.snapshot_buffer_size = size.max(1);
        }
        if let Some(dir) = lookup("RPG_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(dir));
        }
        if let Some(format) = read_var::<SnapshotFormat>(&lookup, "RPG_SNAPSHOT_FORMAT") {
            config.snapshot_format = format;
        }

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: FromStr,
{
    lookup(key)?.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);

        assert_eq!(config.runtime.input_buffer_size, 32);
        assert_eq!(config.runtime.snapshot_buffer_size, 16);
        assert_eq!(config.runtime.game_config.event_log_capacity, 10);
        assert_eq!(config.snapshot_format, SnapshotFormat::Text);
        assert!(config.log_dir.is_none());
        assert!(config.content_dir.ends_with("maps"));
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("RPG_CONTENT_DIR", "/srv/rpg"),
            ("RPG_EVENT_LOG_CAPACITY", "4"),
            ("RPG_INPUT_BUFFER", "8"),
            ("RPG_SNAPSHOT_BUFFER", "2"),
            ("RPG_LOG_DIR", "/tmp/rpg-logs"),
            ("RPG_SNAPSHOT_FORMAT", "JSON"),
        ]);

        assert_eq!(config.content_dir, PathBuf::from("/srv/rpg"));
        assert_eq!(config.runtime.game_config.event_log_capacity, 4);
        assert_eq!(config.runtime.input_buffer_size, 8);
        assert_eq!(config.runtime.snapshot_buffer_size, 2);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/rpg-logs")));
        assert_eq!(config.snapshot_format, SnapshotFormat::Json);
    }

    #[test]
    fn unparsable_values_keep_defaults_and_sizes_stay_positive() {
        let config = config_from(&[
            ("RPG_INPUT_BUFFER", "lots"),
            ("RPG_SNAPSHOT_BUFFER", "0"),
            ("RPG_SNAPSHOT_FORMAT", "yaml"),
        ]);

        assert_eq!(config.runtime.input_buffer_size, 32);
        assert_eq!(config.runtime.snapshot_buffer_size, 1);
        assert_eq!(config.snapshot_format, SnapshotFormat::Text);
    }
}
