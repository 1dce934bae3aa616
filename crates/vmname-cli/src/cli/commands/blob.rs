//! `vmname split-blob <uri>` and `vmname resource-name <id>`.

use anyhow::Result;
use vmname_core::{resource_name, split_blob_uri};

use super::{emit, render};

fn split_blob_report(uri: &str, json: bool) -> Result<String> {
    let blob = split_blob_uri(uri)?;
    let text = format!(
        "account: {}\ncontainer: {}\nblob path: {}",
        blob.account, blob.container, blob.blob_path
    );
    render(json, &blob, &text)
}

pub fn run_split_blob(uri: &str, json: bool) -> Result<()> {
    println!("{}", split_blob_report(uri, json)?);
    Ok(())
}

pub fn run_resource_name(id: &str, json: bool) -> Result<()> {
    let name = resource_name(id)?;
    emit(json, name, name)
}
