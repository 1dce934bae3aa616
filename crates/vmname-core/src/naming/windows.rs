//! Windows agent names.
//!
//! Windows computer names are short, so the name is a delimiter-free run of
//! fixed-width fields: `<prefix><orch><poolInfo>`. Field boundaries come from
//! the widths alone.
//!
//! | layout  | prefix      | orch          | poolInfo (3..=8 digits)            |
//! |---------|-------------|---------------|------------------------------------|
//! | current | 4 hex chars | 3 alnum chars | pool index (2 digits) + agent index |
//! | legacy  | 5 hex chars | 3 alnum chars | 900 + pool index (3 digits) + agent index |

use serde::{Deserialize, Serialize};

use super::parse_digits;
use crate::error::FormatError;

const ORCH_LEN: usize = 3;
const MIN_POOL_INFO_LEN: usize = 3;
const MAX_POOL_INFO_LEN: usize = 8;
const MAX_POOL_INDEX: u32 = 99;
const LEGACY_POOL_OFFSET: u32 = 900;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowsNameLayout {
    Current,
    Legacy,
}

impl WindowsNameLayout {
    pub fn prefix_len(self) -> usize {
        match self {
            WindowsNameLayout::Current => 4,
            WindowsNameLayout::Legacy => 5,
        }
    }

    fn pool_digits(self) -> usize {
        match self {
            WindowsNameLayout::Current => 2,
            WindowsNameLayout::Legacy => 3,
        }
    }

    fn from_prefix_len(len: usize) -> Option<Self> {
        match len {
            4 => Some(WindowsNameLayout::Current),
            5 => Some(WindowsNameLayout::Legacy),
            _ => None,
        }
    }

    /// Shortest name this layout can decode.
    fn min_len(self) -> usize {
        self.prefix_len() + ORCH_LEN + MIN_POOL_INFO_LEN
    }
}

impl std::fmt::Display for WindowsNameLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            WindowsNameLayout::Current => "current",
            WindowsNameLayout::Legacy => "legacy",
        })
    }
}

/// Fields of a Windows agent VM name, e.g. `2851aks011`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowsNameParts {
    pub pool_prefix: String,
    pub orchestrator: String,
    pub pool_index: u32,
    pub agent_index: u32,
}

impl WindowsNameParts {
    /// Decodes a Windows VM name, trying the current layout before the legacy one.
    pub fn parse(vm_name: &str) -> Result<Self, FormatError> {
        if !vm_name.is_ascii() {
            return Err(FormatError::windows(vm_name, "must be ASCII"));
        }
        let min = WindowsNameLayout::Current.min_len();
        if vm_name.len() < min {
            return Err(FormatError::windows(
                vm_name,
                format!("shorter than the minimum of {min} characters"),
            ));
        }

        let parts = match decode_layout(vm_name, WindowsNameLayout::Current) {
            Ok(parts) => parts,
            Err(current) => decode_layout(vm_name, WindowsNameLayout::Legacy).map_err(|legacy| {
                FormatError::windows(vm_name, format!("{current}; legacy layout: {legacy}"))
            })?,
        };
        tracing::debug!(
            vm_name,
            pool_index = parts.pool_index,
            agent_index = parts.agent_index,
            "parsed Windows VM name"
        );
        Ok(parts)
    }

    /// Layout implied by the prefix width.
    pub fn layout(&self) -> Option<WindowsNameLayout> {
        WindowsNameLayout::from_prefix_len(self.pool_prefix.len())
    }

    /// Encodes the parts, failing when a field does not fit its width.
    pub fn to_name(&self) -> Result<String, FormatError> {
        let layout = self.layout().ok_or_else(|| {
            self.encode_error("pool prefix must be 4 (current) or 5 (legacy) characters")
        })?;
        if !self.pool_prefix.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(self.encode_error("pool prefix must be hex digits"));
        }
        if self.orchestrator.len() != ORCH_LEN
            || !self.orchestrator.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(self.encode_error(format!(
                "orchestrator must be {ORCH_LEN} alphanumeric characters"
            )));
        }
        if self.pool_index > MAX_POOL_INDEX {
            return Err(self.encode_error(format!("pool index exceeds {MAX_POOL_INDEX}")));
        }

        let pool = match layout {
            WindowsNameLayout::Current => format!("{:02}", self.pool_index),
            WindowsNameLayout::Legacy => (LEGACY_POOL_OFFSET + self.pool_index).to_string(),
        };
        let agent = self.agent_index.to_string();
        if pool.len() + agent.len() > MAX_POOL_INFO_LEN {
            return Err(self.encode_error(format!(
                "pool info would exceed {MAX_POOL_INFO_LEN} digits"
            )));
        }
        Ok(format!("{}{}{pool}{agent}", self.pool_prefix, self.orchestrator))
    }

    fn encode_error(&self, reason: impl Into<String>) -> FormatError {
        FormatError::WindowsEncode {
            pool_prefix: self.pool_prefix.clone(),
            orchestrator: self.orchestrator.clone(),
            pool_index: self.pool_index,
            agent_index: self.agent_index,
            reason: reason.into(),
        }
    }
}

/// Splits `vm_name` at the fixed widths of `layout`. Callers guarantee ASCII.
fn decode_layout(vm_name: &str, layout: WindowsNameLayout) -> Result<WindowsNameParts, String> {
    if vm_name.len() < layout.min_len() {
        return Err(format!("shorter than {} characters", layout.min_len()));
    }
    let (prefix, rest) = vm_name.split_at(layout.prefix_len());
    let (orch, info) = rest.split_at(ORCH_LEN);

    if !prefix.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(format!("prefix {prefix:?} is not hex"));
    }
    if !orch.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(format!("orchestrator {orch:?} is not alphanumeric"));
    }
    if info.len() > MAX_POOL_INFO_LEN || !info.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!(
            "pool info {info:?} must be {MIN_POOL_INFO_LEN} to {MAX_POOL_INFO_LEN} digits"
        ));
    }

    let (pool, agent) = info.split_at(layout.pool_digits());
    let pool = parse_digits(pool).ok_or_else(|| format!("pool index {pool:?} is not a number"))?;
    let pool_index = match layout {
        WindowsNameLayout::Current => pool,
        WindowsNameLayout::Legacy => pool
            .checked_sub(LEGACY_POOL_OFFSET)
            .ok_or_else(|| format!("legacy pool index {pool} is below {LEGACY_POOL_OFFSET}"))?,
    };
    let agent_index =
        parse_digits(agent).ok_or_else(|| format!("agent index {agent:?} is not a number"))?;

    Ok(WindowsNameParts {
        pool_prefix: prefix.to_string(),
        orchestrator: orch.to_string(),
        pool_index,
        agent_index,
    })
}
