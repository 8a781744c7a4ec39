//! Console configuration stored in an optional TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Console configuration (TOML).
///
/// Missing fields default to the values the proxy deployment expects:
/// all interfaces, port 3000, `block_list.txt` in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Address to bind the HTTP server to.
    pub bind: String,

    pub port: u16,

    /// File the proxy reads its block set from.
    pub block_list_path: PathBuf,

    /// Seed the in-memory list from `block_list_path` at startup.
    pub load_existing: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 3000,
            block_list_path: PathBuf::from("block_list.txt"),
            load_existing: false,
        }
    }
}

impl ConsoleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.bind.trim().is_empty() {
            return Err(anyhow!("bind must be a non-empty address"));
        }
        if self.port == 0 {
            return Err(anyhow!("port must be > 0"));
        }
        if self.block_list_path.as_os_str().is_empty() {
            return Err(anyhow!("block_list_path must be non-empty"));
        }
        Ok(())
    }

    /// `bind:port`, bracketing IPv6 literals.
    pub fn listen_addr(&self) -> String {
        if self.bind.contains(':') && !self.bind.starts_with('[') {
            format!("[{}]:{}", self.bind, self.port)
        } else {
            format!("{}:{}", self.bind, self.port)
        }
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ConsoleConfig::default()`.
pub fn load_config(path: &Path) -> Result<ConsoleConfig> {
    if !path.exists() {
        let cfg = ConsoleConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ConsoleConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ConsoleConfig::default());
        assert_eq!(cfg.listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("console.toml");
        fs::write(&path, "port = 8081\nblock_list_path = \"/srv/proxy/blocked.txt\"\n")
            .expect("write");

        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.port, 8081);
        assert_eq!(cfg.block_list_path, PathBuf::from("/srv/proxy/blocked.txt"));
        assert_eq!(cfg.bind, "0.0.0.0");
        assert!(!cfg.load_existing);
    }

    #[test]
    fn zero_port_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("console.toml");
        fs::write(&path, "port = 0\n").expect("write");

        let err = load_config(&path).expect_err("invalid");
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn malformed_toml_reports_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("console.toml");
        fs::write(&path, "port = \"not a number\"\n").expect("write");

        let err = load_config(&path).expect_err("invalid");
        assert!(err.to_string().contains("console.toml"));
    }

    #[test]
    fn ipv6_bind_is_bracketed() {
        let cfg = ConsoleConfig {
            bind: "::".to_string(),
            ..ConsoleConfig::default()
        };
        assert_eq!(cfg.listen_addr(), "[::]:3000");
    }
}
