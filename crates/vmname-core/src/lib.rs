pub mod config;
pub mod logging;

pub mod blob;
pub mod cluster;
pub mod error;
mod lagged_fib;
pub mod naming;

pub use blob::{resource_name, split_blob_uri, BlobLocator};
pub use cluster::{AgentPoolProfile, ClusterIdentity, ClusterProperties, OrchestratorType, OsType};
pub use error::FormatError;
pub use naming::{
    k8s_vm_name, vm_name_index, vmss_name, PoolNameParts, VmssNameParts, WindowsNameLayout,
    WindowsNameParts,
};
