//! Host environment probing

use super::tool::{self, Tool};
use crate::config::HostContext;
use std::collections::BTreeSet;
use std::fmt;

/// Operating system family of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    MacOs,
    Ubuntu,
    Linux,
    Windows,
    Wsl,
    Other,
}

impl OsFamily {
    /// Classify the host from raw identification signals
    pub fn classify(signals: &OsSignals) -> Self {
        let wsl_kernel = signals.kernel_release.to_lowercase().contains("microsoft");
        let wsl_distro = signals
            .wsl_distro
            .as_deref()
            .is_some_and(|name| !name.is_empty());
        if wsl_kernel || wsl_distro {
            return OsFamily::Wsl;
        }

        match signals.platform.as_str() {
            "macos" => OsFamily::MacOs,
            "linux" => {
                let ubuntu = signals
                    .os_release
                    .as_deref()
                    .is_some_and(|data| data.to_lowercase().contains("ubuntu"));
                if ubuntu {
                    OsFamily::Ubuntu
                } else {
                    OsFamily::Linux
                }
            }
            "windows" => OsFamily::Windows,
            _ => OsFamily::Other,
        }
    }

    /// Families where a POSIX shell startup file is the natural alias target
    pub fn is_unix_like(&self) -> bool {
        matches!(
            self,
            OsFamily::MacOs | OsFamily::Ubuntu | OsFamily::Wsl | OsFamily::Linux
        )
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OsFamily::MacOs => "macOS",
            OsFamily::Ubuntu => "Ubuntu",
            OsFamily::Linux => "Linux",
            OsFamily::Windows => "Windows",
            OsFamily::Wsl => "WSL",
            OsFamily::Other => "unknown OS",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Raw OS identification signals read from the host
#[derive(Debug, Clone, Default)]
pub struct OsSignals {
    /// Platform name as reported by `std::env::consts::OS`
    pub platform: String,
    /// Kernel release string (empty when unavailable)
    pub kernel_release: String,
    /// Value of `WSL_DISTRO_NAME`
    pub wsl_distro: Option<String>,
    /// Contents of `/etc/os-release`
    pub os_release: Option<String>,
}

impl OsSignals {
    /// Read the signals of the running host; unreadable sources are left empty
    pub fn from_host() -> Self {
        Self {
            platform: std::env::consts::OS.to_string(),
            kernel_release: std::fs::read_to_string("/proc/sys/kernel/osrelease")
                .unwrap_or_default(),
            wsl_distro: std::env::var("WSL_DISTRO_NAME").ok(),
            os_release: std::fs::read_to_string("/etc/os-release").ok(),
        }
    }
}

/// Snapshot of the host taken once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostProfile {
    os_family: OsFamily,
    available_tools: BTreeSet<Tool>,
}

impl HostProfile {
    pub fn new(os_family: OsFamily, available_tools: impl IntoIterator<Item = Tool>) -> Self {
        Self {
            os_family,
            available_tools: available_tools.into_iter().collect(),
        }
    }

    pub fn os_family(&self) -> OsFamily {
        self.os_family
    }

    pub fn available_tools(&self) -> &BTreeSet<Tool> {
        &self.available_tools
    }

    pub fn has(&self, tool: Tool) -> bool {
        self.available_tools.contains(&tool)
    }
}

/// Probe the running host
pub fn probe(ctx: &HostContext) -> HostProfile {
    probe_with(ctx, &OsSignals::from_host())
}

/// Probe with explicit OS signals; tools are looked up on the context's PATH
pub fn probe_with(ctx: &HostContext, signals: &OsSignals) -> HostProfile {
    let os_family = OsFamily::classify(signals);

    let mut available = BTreeSet::new();
    for tool in [Tool::Pyenv, Tool::Poetry, Tool::PyenvVirtualenv] {
        // The plugin can only be exercised through its base tool
        if let Some(base) = tool.requires() {
            if !available.contains(&base) {
                tracing::debug!(tool = %tool, "skipped, {} unavailable", base);
                continue;
            }
        }
        let found = tool::is_available(tool, ctx.path_entries());
        tracing::debug!(tool = %tool, found, "tool lookup");
        if found {
            available.insert(tool);
        }
    }

    HostProfile::new(os_family, available)
}
