//! `vmname vm-name` / `vmname vmss-name` – derive names for an agent pool.

use anyhow::Result;
use vmname_core::{k8s_vm_name, vmss_name, AgentPoolProfile, ClusterProperties, OsType};

use super::emit;

/// Finds `pool_name` in the configured pools or appends it, applying `os` when given.
fn resolve_pool(
    props: &mut ClusterProperties,
    pool_name: &str,
    os: Option<OsType>,
) -> AgentPoolProfile {
    match props.pool_index(pool_name) {
        Some(i) => {
            if let Some(os) = os {
                props.agent_pools[i].os_type = os;
            }
            props.agent_pools[i].clone()
        }
        None => {
            let pool = AgentPoolProfile::new(pool_name, os.unwrap_or(OsType::Linux));
            tracing::debug!(pool = pool_name, "pool not configured, appending");
            props.agent_pools.push(pool.clone());
            pool
        }
    }
}

pub fn run_vm_name(
    mut props: ClusterProperties,
    pool_name: &str,
    os: Option<OsType>,
    agent_index: u32,
    json: bool,
) -> Result<()> {
    let pool = resolve_pool(&mut props, pool_name, os);
    let name = k8s_vm_name(&props, &pool, agent_index)?;
    emit(json, &name, &name)
}

pub fn run_vmss_name(mut props: ClusterProperties, pool_name: &str, json: bool) -> Result<()> {
    let pool = resolve_pool(&mut props, pool_name, None);
    let name = vmss_name(&props, &pool)?;
    emit(json, &name, &name)
}
