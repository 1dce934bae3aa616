//! `vmname parse-linux|parse-vmss|parse-windows <name>` – decode a VM or scale-set name.

use anyhow::Result;
use vmname_core::{ClusterProperties, PoolNameParts, VmssNameParts, WindowsNameParts};

use super::{emit, render};

pub fn run_parse_linux(props: &ClusterProperties, name: &str, json: bool) -> Result<()> {
    let identity = props.identity()?;
    let parts = PoolNameParts::parse_linux(&identity, name)?;
    let text = format!(
        "pool: {}\nname suffix: {}\nagent index: {}",
        parts.pool_identifier, parts.name_suffix, parts.agent_index
    );
    emit(json, &parts, &text)
}

pub fn run_parse_vmss(props: &ClusterProperties, name: &str, json: bool) -> Result<()> {
    let identity = props.identity()?;
    let parts = VmssNameParts::parse(&identity, name)?;
    let text = format!(
        "pool: {}\nname suffix: {}",
        parts.pool_identifier, parts.name_suffix
    );
    emit(json, &parts, &text)
}

fn parse_windows_report(name: &str, json: bool) -> Result<String> {
    let parts = WindowsNameParts::parse(name)?;
    let mut text = format!(
        "pool prefix: {}\norchestrator: {}\npool index: {}\nagent index: {}",
        parts.pool_prefix, parts.orchestrator, parts.pool_index, parts.agent_index
    );
    if let Some(layout) = parts.layout() {
        text.push_str(&format!("\nlayout: {layout}"));
    }
    render(json, &parts, &text)
}

pub fn run_parse_windows(name: &str, json: bool) -> Result<()> {
    println!("{}", parse_windows_report(name, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_text_names_the_layout() {
        let out = parse_windows_report("38988k8s90312", false).unwrap();
        assert!(out.ends_with("\nlayout: legacy"), "{out}");
        let out = parse_windows_report("2314k8s0310", false).unwrap();
        assert!(out.ends_with("\nlayout: current"), "{out}");
    }

    #[test]
    fn windows_json() {
        let out = parse_windows_report("2851aks011", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["pool_prefix"], "2851");
        assert_eq!(value["pool_index"], 1);
        assert_eq!(value["agent_index"], 1);
    }
}
