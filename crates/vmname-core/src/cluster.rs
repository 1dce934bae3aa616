//! Cluster and agent-pool model consumed by the naming codec.
//!
//! These records are normally produced by provisioning logic elsewhere and
//! are assumed to be validated already. Only the fields that influence VM
//! names are modelled here.

use std::hash::Hasher;

use fnv::FnvHasher;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::lagged_fib;

/// Name prefix used by self-managed Kubernetes clusters.
pub const DEFAULT_ORCHESTRATOR_NAME: &str = "k8s";
/// Name prefix used by clusters with a hosted control plane.
pub const HOSTED_ORCHESTRATOR_NAME: &str = "aks";
/// Length of a cluster ID (the name suffix embedded in VM names).
pub const CLUSTER_ID_LEN: usize = 8;
/// Number of cluster ID characters that prefix a Windows VM name.
pub const WINDOWS_PREFIX_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OsType {
    #[serde(alias = "linux")]
    Linux,
    #[serde(alias = "windows")]
    Windows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrchestratorType {
    #[default]
    Kubernetes,
    #[serde(rename = "DCOS")]
    Dcos,
    Swarm,
    SwarmMode,
}

impl std::fmt::Display for OrchestratorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrchestratorType::Kubernetes => "Kubernetes",
            OrchestratorType::Dcos => "DCOS",
            OrchestratorType::Swarm => "Swarm",
            OrchestratorType::SwarmMode => "SwarmMode",
        };
        f.write_str(s)
    }
}

/// A group of identically configured VMs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPoolProfile {
    pub name: String,
    #[serde(default)]
    pub vm_size: String,
    #[serde(default)]
    pub count: u32,
    pub os_type: OsType,
}

impl AgentPoolProfile {
    pub fn new(name: impl Into<String>, os_type: OsType) -> Self {
        Self {
            name: name.into(),
            vm_size: String::new(),
            count: 0,
            os_type,
        }
    }

    pub fn is_windows(&self) -> bool {
        self.os_type == OsType::Windows
    }
}

/// The subset of cluster properties that VM naming depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterProperties {
    /// Explicit cluster ID. When absent one is derived from `dns_prefix`.
    #[serde(default)]
    pub cluster_id: Option<String>,
    #[serde(default)]
    pub dns_prefix: Option<String>,
    /// True when the control plane is hosted (names use the `aks` prefix).
    #[serde(default)]
    pub hosted: bool,
    #[serde(default)]
    pub orchestrator: OrchestratorType,
    /// Ordered pool list; a pool's position is its pool index.
    #[serde(default)]
    pub agent_pools: Vec<AgentPoolProfile>,
}

impl ClusterProperties {
    /// Returns the cluster ID, deriving a stable one when none was set.
    ///
    /// The derivation seeds from the DNS prefix, falling back to the first
    /// agent pool's name.
    pub fn cluster_id(&self) -> String {
        if let Some(id) = self.cluster_id.as_deref().filter(|id| !id.is_empty()) {
            return id.to_string();
        }
        let seed = self
            .dns_prefix
            .as_deref()
            .or_else(|| self.agent_pools.first().map(|p| p.name.as_str()))
            .unwrap_or_default();
        derive_cluster_id(seed)
    }

    /// Name prefix for VMs in this cluster: `aks` when hosted, else `k8s`.
    pub fn orchestrator_name(&self) -> Result<&'static str, FormatError> {
        match self.orchestrator {
            OrchestratorType::Kubernetes if self.hosted => Ok(HOSTED_ORCHESTRATOR_NAME),
            OrchestratorType::Kubernetes => Ok(DEFAULT_ORCHESTRATOR_NAME),
            other => Err(FormatError::UnsupportedOrchestrator(other.to_string())),
        }
    }

    /// The identity VM names in this cluster carry.
    ///
    /// Fails unless the cluster ID is the 8 hex digits the name decoders expect.
    pub fn identity(&self) -> Result<ClusterIdentity, FormatError> {
        let orchestrator_name = self.orchestrator_name()?;
        let cluster_id = self.cluster_id();
        if cluster_id.len() != CLUSTER_ID_LEN || !cluster_id.bytes().all(|b| b.is_ascii_hexdigit())
        {
            return Err(FormatError::ClusterId {
                cluster_id,
                reason: format!("must be {CLUSTER_ID_LEN} hex digits"),
            });
        }
        Ok(ClusterIdentity::new(orchestrator_name, cluster_id))
    }

    /// Position of the named pool within `agent_pools`.
    pub fn pool_index(&self, pool_name: &str) -> Option<usize> {
        self.agent_pools.iter().position(|p| p.name == pool_name)
    }
}

/// Hashes `seed` into an 8-digit decimal cluster ID.
///
/// The FNV-1a hash of `seed` seeds the ID generator; its first draw, zero
/// padded to 8 digits and cut to 8 characters, is the ID.
pub fn derive_cluster_id(seed: &str) -> String {
    let mut hasher = FnvHasher::default();
    hasher.write(seed.as_bytes());
    let n = lagged_fib::first_u32(hasher.finish() as i64);
    let mut id = format!("{n:08}");
    id.truncate(CLUSTER_ID_LEN);
    id
}

/// What a VM name encodes about its cluster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClusterIdentity {
    pub orchestrator_name: String,
    pub cluster_id: String,
}

impl ClusterIdentity {
    pub fn new(orchestrator_name: impl Into<String>, cluster_id: impl Into<String>) -> Self {
        Self {
            orchestrator_name: orchestrator_name.into(),
            cluster_id: cluster_id.into(),
        }
    }

    /// Leading cluster ID characters used as the Windows name prefix.
    pub fn windows_prefix(&self) -> Result<&str, FormatError> {
        self.cluster_id
            .get(..WINDOWS_PREFIX_LEN)
            .ok_or_else(|| FormatError::ClusterId {
                cluster_id: self.cluster_id.clone(),
                reason: format!("need at least {WINDOWS_PREFIX_LEN} ASCII characters"),
            })
    }
}
