//! CLI for the vmname naming codec.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use vmname_core::config;
use vmname_core::{ClusterProperties, OsType};

use commands::{
    run_cluster_id, run_completions, run_index, run_parse_linux, run_parse_vmss,
    run_parse_windows, run_resource_name, run_split_blob, run_vm_name, run_vmss_name,
};

/// Top-level CLI for vmname.
#[derive(Debug, Parser)]
#[command(name = "vmname")]
#[command(about = "vmname: encode and decode cluster VM names and blob URIs", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub cluster: ClusterArgs,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Overrides for the cluster described in config.toml.
#[derive(Debug, Default, Args)]
pub struct ClusterArgs {
    /// Cluster ID embedded in VM names.
    #[arg(long, global = true, value_name = "ID")]
    pub cluster_id: Option<String>,

    /// DNS prefix used to derive the cluster ID when none is set.
    #[arg(long, global = true, value_name = "PREFIX")]
    pub dns_prefix: Option<String>,

    /// Cluster has a hosted control plane (names use the `aks` prefix).
    #[arg(long, global = true)]
    pub hosted: bool,
}

impl ClusterArgs {
    /// Layers the command-line overrides on top of configured properties.
    pub fn apply(&self, mut props: ClusterProperties) -> ClusterProperties {
        if let Some(id) = &self.cluster_id {
            props.cluster_id = Some(id.clone());
        }
        if let Some(prefix) = &self.dns_prefix {
            props.dns_prefix = Some(prefix.clone());
        }
        if self.hosted {
            props.hosted = true;
        }
        props
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OsArg {
    Linux,
    Windows,
}

impl From<OsArg> for OsType {
    fn from(os: OsArg) -> Self {
        match os {
            OsArg::Linux => OsType::Linux,
            OsArg::Windows => OsType::Windows,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decode a Linux agent VM name (<orch>-<pool>-<clusterID>-<index>).
    ParseLinux {
        /// VM name.
        name: String,
    },

    /// Decode a scale-set name (<orch>-<pool>-<clusterID>-vmss).
    ParseVmss {
        /// Scale-set name.
        name: String,
    },

    /// Decode a Windows agent VM name.
    ParseWindows {
        /// VM name.
        name: String,
    },

    /// Print the agent index encoded in a VM name.
    Index {
        /// OS convention the name follows.
        #[arg(long, value_enum)]
        os: OsArg,
        /// VM name.
        name: String,
    },

    /// Derive the VM name for a slot in an agent pool.
    VmName {
        /// Agent pool name; added to the configured pools if missing.
        #[arg(long)]
        pool: String,
        /// OS of the pool (defaults to the configured OS, else linux).
        #[arg(long, value_enum)]
        os: Option<OsArg>,
        /// Zero-based agent index within the pool.
        #[arg(long, default_value = "0", value_name = "N")]
        agent_index: u32,
    },

    /// Derive the scale-set name for an agent pool.
    VmssName {
        /// Agent pool name; added to the configured pools if missing.
        #[arg(long)]
        pool: String,
    },

    /// Split a blob URI into account, container and blob path.
    SplitBlob {
        /// https://<account>.<suffix>/<container>/<path>
        uri: String,
    },

    /// Print the last path segment of a resource identifier.
    ResourceName {
        /// Resource ID or URI.
        id: String,
    },

    /// Show the effective cluster ID and orchestrator name.
    ClusterId,

    /// Generate a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(());
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let props = cli.cluster.apply(cfg.to_properties());
        let json = cli.json;

        match cli.command {
            CliCommand::ParseLinux { name } => run_parse_linux(&props, &name, json)?,
            CliCommand::ParseVmss { name } => run_parse_vmss(&props, &name, json)?,
            CliCommand::ParseWindows { name } => run_parse_windows(&name, json)?,
            CliCommand::Index { os, name } => run_index(&props, os.into(), &name, json)?,
            CliCommand::VmName {
                pool,
                os,
                agent_index,
            } => run_vm_name(props, &pool, os.map(Into::into), agent_index, json)?,
            CliCommand::VmssName { pool } => run_vmss_name(props, &pool, json)?,
            CliCommand::SplitBlob { uri } => run_split_blob(&uri, json)?,
            CliCommand::ResourceName { id } => run_resource_name(&id, json)?,
            CliCommand::ClusterId => run_cluster_id(&props, json)?,
            CliCommand::Completions { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
