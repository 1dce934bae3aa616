//! Linux agent names: `<orch>-<pool>-<clusterID>-<index>`.

use serde::{Deserialize, Serialize};

use super::{parse_digits, split_pool_and_suffix};
use crate::cluster::ClusterIdentity;
use crate::error::FormatError;

/// Fields of a Linux agent VM name, e.g. `k8s-agentpool1-38988164-10`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolNameParts {
    pub pool_identifier: String,
    pub name_suffix: String,
    pub agent_index: u32,
}

impl PoolNameParts {
    /// Decodes `vm_name`, requiring its prefix and suffix to match `identity`.
    ///
    /// A zero-padded index (`...-007`) is accepted as 7; re-encoding writes it
    /// unpadded.
    pub fn parse_linux(identity: &ClusterIdentity, vm_name: &str) -> Result<Self, FormatError> {
        let (head, index) = vm_name
            .rsplit_once('-')
            .ok_or_else(|| FormatError::linux(vm_name, "expected <orch>-<pool>-<suffix>-<index>"))?;
        let agent_index = parse_digits(index).ok_or_else(|| {
            FormatError::linux(vm_name, format!("agent index {index:?} is not a number"))
        })?;
        let (pool, suffix) =
            split_pool_and_suffix(identity, head).map_err(|r| FormatError::linux(vm_name, r))?;

        tracing::debug!(vm_name, pool, agent_index, "parsed Linux VM name");
        Ok(Self {
            pool_identifier: pool.to_string(),
            name_suffix: suffix.to_string(),
            agent_index,
        })
    }

    pub fn to_linux_name(&self, identity: &ClusterIdentity) -> String {
        format!(
            "{}-{}-{}-{}",
            identity.orchestrator_name, self.pool_identifier, self.name_suffix, self.agent_index
        )
    }
}
