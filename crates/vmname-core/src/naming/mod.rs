//! VM and scale-set naming conventions.
//!
//! Linux agents and scale sets use hyphen-delimited names
//! (`<orch>-<pool>-<clusterID>-<index>` and `<orch>-<pool>-<clusterID>-vmss`).
//! Windows agents use a compact positional name without delimiters, see
//! [`WindowsNameParts`].

mod derive;
mod linux;
mod vmss;
mod windows;

pub use derive::{k8s_vm_name, vm_name_index, vmss_name};
pub use linux::PoolNameParts;
pub use vmss::{VmssNameParts, VMSS_MARKER};
pub use windows::{WindowsNameLayout, WindowsNameParts};

use crate::cluster::{ClusterIdentity, CLUSTER_ID_LEN};

/// Width of the orchestrator tag that starts every Linux name.
const ORCHESTRATOR_LEN: usize = 3;

/// Splits `<orch>-<pool>-<suffix>` and checks it against `identity`.
///
/// The pool identifier may itself contain hyphens, so the orchestrator tag is
/// taken from the left and the suffix from the right.
fn split_pool_and_suffix<'a>(
    identity: &ClusterIdentity,
    head: &'a str,
) -> Result<(&'a str, &'a str), String> {
    let (orch, rest) = head
        .split_once('-')
        .ok_or_else(|| "missing orchestrator prefix".to_string())?;
    if orch.len() != ORCHESTRATOR_LEN || !orch.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(format!(
            "orchestrator prefix {orch:?} must be {ORCHESTRATOR_LEN} alphanumeric characters"
        ));
    }
    let (pool, suffix) = rest
        .rsplit_once('-')
        .ok_or_else(|| "missing pool identifier or name suffix".to_string())?;
    if pool.is_empty() {
        return Err("empty pool identifier".to_string());
    }
    if suffix.len() != CLUSTER_ID_LEN || !suffix.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!(
            "name suffix {suffix:?} must be {CLUSTER_ID_LEN} hex digits"
        ));
    }
    if orch != identity.orchestrator_name {
        return Err(format!(
            "orchestrator prefix {orch:?} does not match {:?}",
            identity.orchestrator_name
        ));
    }
    if suffix != identity.cluster_id {
        return Err(format!(
            "name suffix {suffix:?} does not match cluster ID {:?}",
            identity.cluster_id
        ));
    }
    Ok((pool, suffix))
}

/// Parses a non-empty run of ASCII digits. `str::parse` alone would accept a
/// leading `+`.
fn parse_digits(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> ClusterIdentity {
        ClusterIdentity::new("k8s", "38988164")
    }

    #[test]
    fn split_keeps_hyphens_in_pool() {
        let (pool, suffix) = split_pool_and_suffix(&identity(), "k8s-agent-pool-1-38988164").unwrap();
        assert_eq!(pool, "agent-pool-1");
        assert_eq!(suffix, "38988164");
    }

    #[test]
    fn split_rejects_bad_prefix() {
        assert!(split_pool_and_suffix(&identity(), "kubernetes-pool-38988164").is_err());
        assert!(split_pool_and_suffix(&identity(), "k_s-pool-38988164").is_err());
        assert!(split_pool_and_suffix(&identity(), "aks-pool-38988164").is_err());
    }

    #[test]
    fn split_rejects_bad_suffix() {
        assert!(split_pool_and_suffix(&identity(), "k8s-pool-3898816").is_err());
        assert!(split_pool_and_suffix(&identity(), "k8s-pool-3898816z").is_err());
        assert!(split_pool_and_suffix(&identity(), "k8s-pool-11111111").is_err());
    }

    #[test]
    fn split_rejects_empty_pool() {
        assert!(split_pool_and_suffix(&identity(), "k8s--38988164").is_err());
        assert!(split_pool_and_suffix(&identity(), "k8s-38988164").is_err());
    }

    #[test]
    fn digits_only() {
        assert_eq!(parse_digits("065"), Some(65));
        assert_eq!(parse_digits("+5"), None);
        assert_eq!(parse_digits(""), None);
        assert_eq!(parse_digits("99999999999"), None);
    }
}
