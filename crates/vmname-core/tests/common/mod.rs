//! Shared cluster fixtures for integration tests.

use vmname_core::{AgentPoolProfile, ClusterIdentity, ClusterProperties, OsType};

pub const CLUSTER_ID: &str = "38988164";

/// Self-managed Kubernetes cluster with a fixed cluster ID.
pub fn k8s_identity() -> ClusterIdentity {
    ClusterIdentity::new("k8s", CLUSTER_ID)
}

/// Hosted cluster with one Windows pool between two Linux pools. The cluster
/// ID is derived from the `foo` DNS prefix.
pub fn hosted_properties() -> ClusterProperties {
    let pool = |name: &str, count: u32, os_type: OsType| AgentPoolProfile {
        name: name.to_string(),
        vm_size: "Standard_D2_v2".to_string(),
        count,
        os_type,
    };
    ClusterProperties {
        dns_prefix: Some("foo".to_string()),
        hosted: true,
        agent_pools: vec![
            pool("linux1", 3, OsType::Linux),
            pool("windows2", 2, OsType::Windows),
            pool("someotherpool", 5, OsType::Linux),
        ],
        ..Default::default()
    }
}
