//! Name derivation and index extraction on top of the per-OS codecs.

use super::{PoolNameParts, VmssNameParts, WindowsNameParts};
use crate::cluster::{AgentPoolProfile, ClusterIdentity, ClusterProperties, OsType};
use crate::error::FormatError;

/// Returns the agent index encoded in `vm_name`.
///
/// Linux names are checked against `identity`; Windows names carry only a
/// truncated cluster ID and are decoded positionally.
pub fn vm_name_index(
    identity: &ClusterIdentity,
    os_type: OsType,
    vm_name: &str,
) -> Result<u32, FormatError> {
    match os_type {
        OsType::Linux => PoolNameParts::parse_linux(identity, vm_name).map(|p| p.agent_index),
        OsType::Windows => WindowsNameParts::parse(vm_name).map(|p| p.agent_index),
    }
}

/// Canonical VM name for slot `agent_index` of `pool`.
///
/// `pool` must be one of `properties.agent_pools`; its position in that list
/// is the pool index encoded in Windows names.
pub fn k8s_vm_name(
    properties: &ClusterProperties,
    pool: &AgentPoolProfile,
    agent_index: u32,
) -> Result<String, FormatError> {
    let pool_index = properties
        .pool_index(&pool.name)
        .ok_or_else(|| FormatError::UnknownAgentPool {
            pool: pool.name.clone(),
        })?;
    let identity = properties.identity()?;

    let name = match pool.os_type {
        OsType::Linux => PoolNameParts {
            pool_identifier: pool.name.clone(),
            name_suffix: identity.cluster_id.clone(),
            agent_index,
        }
        .to_linux_name(&identity),
        OsType::Windows => WindowsNameParts {
            pool_prefix: identity.windows_prefix()?.to_string(),
            orchestrator: identity.orchestrator_name.clone(),
            pool_index: u32::try_from(pool_index).unwrap_or(u32::MAX),
            agent_index,
        }
        .to_name()?,
    };
    tracing::debug!(pool = %pool.name, pool_index, agent_index, %name, "derived VM name");
    Ok(name)
}

/// Scale-set name for `pool`.
pub fn vmss_name(
    properties: &ClusterProperties,
    pool: &AgentPoolProfile,
) -> Result<String, FormatError> {
    if properties.pool_index(&pool.name).is_none() {
        return Err(FormatError::UnknownAgentPool {
            pool: pool.name.clone(),
        });
    }
    let identity = properties.identity()?;
    Ok(VmssNameParts {
        pool_identifier: pool.name.clone(),
        name_suffix: identity.cluster_id.clone(),
    }
    .to_vmss_name(&identity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosted_properties() -> ClusterProperties {
        ClusterProperties {
            dns_prefix: Some("foo".to_string()),
            hosted: true,
            agent_pools: vec![
                AgentPoolProfile {
                    name: "linux1".to_string(),
                    vm_size: "Standard_D2_v2".to_string(),
                    count: 3,
                    os_type: OsType::Linux,
                },
                AgentPoolProfile {
                    name: "windows2".to_string(),
                    vm_size: "Standard_D2_v2".to_string(),
                    count: 2,
                    os_type: OsType::Windows,
                },
                AgentPoolProfile {
                    name: "someotherpool".to_string(),
                    vm_size: "Standard_D2_v2".to_string(),
                    count: 5,
                    os_type: OsType::Linux,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn index_linux() {
        let id = ClusterIdentity::new("k8s", "38988164");
        assert_eq!(
            vm_name_index(&id, OsType::Linux, "k8s-agentpool1-38988164-65").unwrap(),
            65
        );
    }

    #[test]
    fn index_windows() {
        let id = ClusterIdentity::new("aks", "38988164");
        assert_eq!(vm_name_index(&id, OsType::Windows, "38988k8s90320").unwrap(), 20);
    }

    #[test]
    fn index_wrong_os() {
        let id = ClusterIdentity::new("k8s", "38988164");
        assert!(vm_name_index(&id, OsType::Windows, "k8s-agentpool1-38988164-65").is_err());
        assert!(vm_name_index(&id, OsType::Linux, "38988k8s90320").is_err());
    }

    #[test]
    fn vm_names_for_slots() {
        let p = hosted_properties();
        assert_eq!(
            k8s_vm_name(&p, &p.agent_pools[0], 2).unwrap(),
            "aks-linux1-28513887-2"
        );
        assert_eq!(k8s_vm_name(&p, &p.agent_pools[1], 1).unwrap(), "2851aks011");
        assert_eq!(
            k8s_vm_name(&p, &p.agent_pools[2], 4).unwrap(),
            "aks-someotherpool-28513887-4"
        );
    }

    #[test]
    fn derived_names_decode_back() {
        let p = hosted_properties();
        let id = p.identity().unwrap();
        let linux = k8s_vm_name(&p, &p.agent_pools[2], 7).unwrap();
        assert_eq!(vm_name_index(&id, OsType::Linux, &linux).unwrap(), 7);
        let windows = k8s_vm_name(&p, &p.agent_pools[1], 13).unwrap();
        let parts = WindowsNameParts::parse(&windows).unwrap();
        assert_eq!(parts.pool_index, 1);
        assert_eq!(parts.agent_index, 13);
    }

    #[test]
    fn unknown_pool_is_rejected() {
        let p = hosted_properties();
        let stray = AgentPoolProfile::new("gpu", OsType::Linux);
        assert_eq!(
            k8s_vm_name(&p, &stray, 0),
            Err(FormatError::UnknownAgentPool {
                pool: "gpu".to_string()
            })
        );
        assert!(vmss_name(&p, &stray).is_err());
    }

    #[test]
    fn malformed_cluster_id_is_rejected() {
        let mut p = hosted_properties();
        p.cluster_id = Some("1234".to_string());
        assert!(matches!(
            k8s_vm_name(&p, &p.agent_pools[0], 3),
            Err(FormatError::ClusterId { .. })
        ));
        assert!(k8s_vm_name(&p, &p.agent_pools[1], 3).is_err());
        assert!(vmss_name(&p, &p.agent_pools[0]).is_err());
    }

    #[test]
    fn vmss_name_for_pool() {
        let p = hosted_properties();
        assert_eq!(
            vmss_name(&p, &p.agent_pools[0]).unwrap(),
            "aks-linux1-28513887-vmss"
        );
    }
}
