//! `vmname cluster-id` – show the effective cluster identity.

use anyhow::Result;
use vmname_core::ClusterProperties;

use super::emit;

pub fn run_cluster_id(props: &ClusterProperties, json: bool) -> Result<()> {
    let identity = props.identity()?;
    let text = format!(
        "cluster ID: {}\norchestrator name: {}",
        identity.cluster_id, identity.orchestrator_name
    );
    emit(json, &identity, &text)
}
