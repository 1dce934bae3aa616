//! `vmname index --os <os> <name>` – agent index of a VM name.

use anyhow::Result;
use vmname_core::{vm_name_index, ClusterProperties, OsType};

use super::emit;

pub fn run_index(props: &ClusterProperties, os: OsType, name: &str, json: bool) -> Result<()> {
    let identity = props.identity()?;
    let index = vm_name_index(&identity, os, name)?;
    emit(json, &index, &index.to_string())
}
