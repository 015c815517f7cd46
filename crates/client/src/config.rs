//! Client configuration, read from the environment at start-up.

use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_STORAGE_PATH: &str = "LINKFEED_STORAGE_PATH";
pub const ENV_SEED_DATA: &str = "LINKFEED_SEED_DATA";
pub const ENV_SHELL: &str = "LINKFEED_SHELL";

/// Shell variant for UI layout selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShellKind {
    #[default]
    Desktop,
    Mobile,
}

impl FromStr for ShellKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" => Ok(Self::Desktop),
            "mobile" => Ok(Self::Mobile),
            other => Err(format!("unknown shell kind: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub shell: ShellKind,
    /// Start with the seed posts and the default identity
    pub seed_data: bool,
    /// Desktop storage file; the platform config directory when unset
    pub storage_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            shell: ShellKind::default(),
            seed_data: true,
            storage_path: None,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SHELL) {
            match raw.parse() {
                Ok(shell) => config.shell = shell,
                Err(e) => tracing::warn!(error = %e, "Ignoring {ENV_SHELL}"),
            }
        }

        if let Some(raw) = lookup(ENV_SEED_DATA) {
            match parse_flag(&raw) {
                Some(flag) => config.seed_data = flag,
                None => tracing::warn!(value = %raw, "Ignoring {ENV_SEED_DATA}: expected true or false"),
            }
        }

        config.storage_path = lookup(ENV_STORAGE_PATH)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        config
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ClientConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ClientConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(config(&[]), ClientConfig::default());
        assert!(ClientConfig::default().seed_data);
    }

    #[test]
    fn reads_every_setting() {
        let cfg = config(&[
            (ENV_SHELL, " Mobile "),
            (ENV_SEED_DATA, "false"),
            (ENV_STORAGE_PATH, "/tmp/linkfeed.json"),
        ]);
        assert_eq!(cfg.shell, ShellKind::Mobile);
        assert!(!cfg.seed_data);
        assert_eq!(cfg.storage_path, Some(PathBuf::from("/tmp/linkfeed.json")));
    }

    #[test]
    fn invalid_values_fall_back_to_defaults() {
        let cfg = config(&[
            (ENV_SHELL, "tablet"),
            (ENV_SEED_DATA, "maybe"),
            (ENV_STORAGE_PATH, "  "),
        ]);
        assert_eq!(cfg, ClientConfig::default());
    }

    #[test]
    fn shell_kind_rejects_unknown() {
        assert!("watch".parse::<ShellKind>().is_err());
        assert_eq!("DESKTOP".parse::<ShellKind>(), Ok(ShellKind::Desktop));
    }
}
