//! Scale-set names: `<orch>-<pool>-<clusterID>-vmss`.

use serde::{Deserialize, Serialize};

use super::split_pool_and_suffix;
use crate::cluster::ClusterIdentity;
use crate::error::FormatError;

/// Literal segment that ends every scale-set name.
pub const VMSS_MARKER: &str = "vmss";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VmssNameParts {
    pub pool_identifier: String,
    pub name_suffix: String,
}

impl VmssNameParts {
    pub fn parse(identity: &ClusterIdentity, vmss_name: &str) -> Result<Self, FormatError> {
        let head = vmss_name
            .strip_suffix(VMSS_MARKER)
            .and_then(|h| h.strip_suffix('-'))
            .ok_or_else(|| {
                FormatError::vmss(vmss_name, format!("missing trailing \"-{VMSS_MARKER}\""))
            })?;
        let (pool, suffix) =
            split_pool_and_suffix(identity, head).map_err(|r| FormatError::vmss(vmss_name, r))?;

        Ok(Self {
            pool_identifier: pool.to_string(),
            name_suffix: suffix.to_string(),
        })
    }

    pub fn to_vmss_name(&self, identity: &ClusterIdentity) -> String {
        format!(
            "{}-{}-{}-{VMSS_MARKER}",
            identity.orchestrator_name, self.pool_identifier, self.name_suffix
        )
    }
}
