//! Error type shared by every codec operation.

use thiserror::Error;

/// Returned when an input string does not follow the expected naming or URI
/// convention, or when a required field is absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("resource name was missing from identifier")]
    MissingResourceName,

    #[error("invalid Linux VM name {name:?}: {reason}")]
    LinuxVmName { name: String, reason: String },

    #[error("invalid VMSS name {name:?}: {reason}")]
    VmssName { name: String, reason: String },

    #[error("invalid Windows VM name {name:?}: {reason}")]
    WindowsVmName { name: String, reason: String },

    #[error(
        "cannot encode Windows VM name from prefix {pool_prefix:?}, orchestrator \
         {orchestrator:?}, pool {pool_index}, agent {agent_index}: {reason}"
    )]
    WindowsEncode {
        pool_prefix: String,
        orchestrator: String,
        pool_index: u32,
        agent_index: u32,
        reason: String,
    },

    #[error("invalid blob URI {uri:?}: {reason}")]
    BlobUri { uri: String, reason: String },

    #[error("agent pool {pool:?} is not part of the cluster properties")]
    UnknownAgentPool { pool: String },

    #[error("orchestrator {0} has no VM naming convention")]
    UnsupportedOrchestrator(String),

    #[error("invalid cluster ID {cluster_id:?}: {reason}")]
    ClusterId { cluster_id: String, reason: String },
}

impl FormatError {
    pub(crate) fn linux(name: &str, reason: impl Into<String>) -> Self {
        Self::LinuxVmName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn vmss(name: &str, reason: impl Into<String>) -> Self {
        Self::VmssName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn windows(name: &str, reason: impl Into<String>) -> Self {
        Self::WindowsVmName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn blob(uri: &str, reason: impl Into<String>) -> Self {
        Self::BlobUri {
            uri: uri.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_resource_name_message() {
        assert_eq!(
            FormatError::MissingResourceName.to_string(),
            "resource name was missing from identifier"
        );
    }

    #[test]
    fn messages_carry_offending_input() {
        let err = FormatError::linux("k8s-x", "too few segments");
        assert_eq!(
            err.to_string(),
            "invalid Linux VM name \"k8s-x\": too few segments"
        );
        let err = FormatError::UnknownAgentPool {
            pool: "gpu".to_string(),
        };
        assert!(err.to_string().contains("\"gpu\""));
    }

    #[test]
    fn encode_message_names_every_field() {
        let err = FormatError::WindowsEncode {
            pool_prefix: "2851".to_string(),
            orchestrator: "aks".to_string(),
            pool_index: 100,
            agent_index: 1,
            reason: "pool index exceeds 99".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot encode Windows VM name from prefix \"2851\", orchestrator \"aks\", \
             pool 100, agent 1: pool index exceeds 99"
        );
    }
}
