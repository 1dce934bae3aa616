use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cluster::{AgentPoolProfile, ClusterProperties, OrchestratorType};

/// Default cluster description loaded from `~/.config/vmname/config.toml`.
///
/// Every field can be overridden on the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmnameConfig {
    /// Explicit cluster ID (8 characters). When unset, derived from `dns_prefix`.
    #[serde(default)]
    pub cluster_id: Option<String>,
    /// DNS prefix of the cluster, used to derive a cluster ID.
    #[serde(default)]
    pub dns_prefix: Option<String>,
    /// Hosted control plane: names use `aks` instead of `k8s`.
    #[serde(default)]
    pub hosted: bool,
    #[serde(default)]
    pub orchestrator: OrchestratorType,
    /// Ordered agent pools; position is the pool index in Windows names.
    #[serde(default)]
    pub agent_pools: Vec<AgentPoolProfile>,
}

impl VmnameConfig {
    pub fn to_properties(&self) -> ClusterProperties {
        ClusterProperties {
            cluster_id: self.cluster_id.clone(),
            dns_prefix: self.dns_prefix.clone(),
            hosted: self.hosted,
            orchestrator: self.orchestrator,
            agent_pools: self.agent_pools.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vmname")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VmnameConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VmnameConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<VmnameConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: VmnameConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
