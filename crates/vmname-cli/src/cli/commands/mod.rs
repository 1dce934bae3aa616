//! CLI command handlers. Each command is in its own file for clarity.

mod blob;
mod cluster_id;
mod completions;
mod index;
mod parse;
mod vm_name;

pub use blob::{run_resource_name, run_split_blob};
pub use cluster_id::run_cluster_id;
pub use completions::run_completions;
pub use index::run_index;
pub use parse::{run_parse_linux, run_parse_vmss, run_parse_windows};
pub use vm_name::{run_vm_name, run_vmss_name};

use anyhow::Result;
use serde::Serialize;

/// `value` as pretty JSON when `json` is set, otherwise `text`.
fn render<T: Serialize + ?Sized>(json: bool, value: &T, text: &str) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text.to_string())
    }
}

/// Print what [`render`] produces.
fn emit<T: Serialize + ?Sized>(json: bool, value: &T, text: &str) -> Result<()> {
    println!("{}", render(json, value, text)?);
    Ok(())
}
