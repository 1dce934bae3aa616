//! Blob storage URIs and resource identifiers.

use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Location of a blob: `https://<account>.<service-suffix>/<container>/<path>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlobLocator {
    pub account: String,
    pub container: String,
    pub blob_path: String,
}

/// Splits a blob URI into account, container and blob path.
///
/// The path is returned as it appears in the parsed URI (percent-encoded).
pub fn split_blob_uri(uri: &str) -> Result<BlobLocator, FormatError> {
    let parsed = url::Url::parse(uri).map_err(|e| FormatError::blob(uri, e.to_string()))?;
    if parsed.scheme() != "https" {
        return Err(FormatError::blob(
            uri,
            format!("scheme must be https, got {:?}", parsed.scheme()),
        ));
    }

    let host = parsed
        .domain()
        .ok_or_else(|| FormatError::blob(uri, "host must be a domain name"))?;
    let account = match host.split_once('.') {
        Some((account, suffix)) if !account.is_empty() && !suffix.is_empty() => account,
        _ => {
            return Err(FormatError::blob(
                uri,
                "host must be <account>.<service-suffix>",
            ))
        }
    };

    let path = parsed.path().trim_start_matches('/');
    let (container, blob_path) = path
        .split_once('/')
        .filter(|(c, p)| !c.is_empty() && !p.is_empty())
        .ok_or_else(|| FormatError::blob(uri, "path must be /<container>/<blob path>"))?;

    Ok(BlobLocator {
        account: account.to_string(),
        container: container.to_string(),
        blob_path: blob_path.to_string(),
    })
}

/// Returns the last `/`-separated segment of a resource identifier or URI.
pub fn resource_name(id: &str) -> Result<&str, FormatError> {
    match id.rsplit('/').next() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(FormatError::MissingResourceName),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISK_URI: &str =
        "https://vhdstorage8h8pjybi9hbsl6.blob.core.windows.net/vhds/osdisks/disk1234.vhd";

    #[test]
    fn split_disk_uri() {
        let b = split_blob_uri(DISK_URI).unwrap();
        assert_eq!(b.account, "vhdstorage8h8pjybi9hbsl6");
        assert_eq!(b.container, "vhds");
        assert_eq!(b.blob_path, "osdisks/disk1234.vhd");
    }

    #[test]
    fn split_single_segment_blob() {
        let b = split_blob_uri("https://acct.blob.core.windows.net/vhds/disk.vhd").unwrap();
        assert_eq!(b.container, "vhds");
        assert_eq!(b.blob_path, "disk.vhd");
    }

    #[test]
    fn split_requires_container_and_path() {
        assert!(split_blob_uri("https://acct.blob.core.windows.net/vhds").is_err());
        assert!(split_blob_uri("https://acct.blob.core.windows.net/vhds/").is_err());
        assert!(split_blob_uri("https://acct.blob.core.windows.net/").is_err());
    }

    #[test]
    fn split_requires_https_and_account_host() {
        assert!(split_blob_uri("http://acct.blob.core.windows.net/vhds/d.vhd").is_err());
        assert!(split_blob_uri("https://localhost/vhds/d.vhd").is_err());
        assert!(split_blob_uri("https://10.0.0.1/vhds/d.vhd").is_err());
        assert!(split_blob_uri("not a uri").is_err());
    }

    #[test]
    fn resource_name_from_uri() {
        assert_eq!(resource_name(DISK_URI).unwrap(), "disk1234.vhd");
    }

    #[test]
    fn resource_name_from_arm_id() {
        let id = "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Compute/virtualMachines/k8s-agentpool1-38988164-0";
        assert_eq!(resource_name(id).unwrap(), "k8s-agentpool1-38988164-0");
        assert_eq!(resource_name("plain").unwrap(), "plain");
    }

    #[test]
    fn resource_name_missing() {
        let err = resource_name(
            "https://vhdstorage8h8pjybi9hbsl6.blob.core.windows.net/vhds/osdisks/",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "resource name was missing from identifier");
        assert!(resource_name("").is_err());
    }
}
