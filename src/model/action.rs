//! Actions: the operations an operator can pick from the main menu.

use std::fmt;

/// One selectable menu item, driving exactly one handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Refresh the package index and install nginx.
    InstallProxy,

    /// Validate and reload nginx, optionally issuing a Let's Encrypt certificate.
    ConfigureTls,

    /// Install ufw and open SSH and HTTP(S).
    SetupFirewall,

    /// Generate an upstream group and a proxy server block.
    ConfigureLoadBalancer,

    /// Replace the main nginx config with tuned connection handling.
    Optimize,

    /// Show the last hour of the service journal.
    Diagnose,

    /// Generate a docker-compose file for the proxy.
    GenerateComposeFile,

    /// Generate a GitLab pipeline and register a runner.
    SetupCi,

    Start,
    Stop,
    Status,

    /// Leave the console.
    Exit,
}

impl Action {
    /// Every action, in the order the menu presents them.
    pub const ALL: [Self; 12] = [
        Self::InstallProxy,
        Self::ConfigureTls,
        Self::SetupFirewall,
        Self::ConfigureLoadBalancer,
        Self::Optimize,
        Self::Diagnose,
        Self::GenerateComposeFile,
        Self::SetupCi,
        Self::Start,
        Self::Stop,
        Self::Status,
        Self::Exit,
    ];

    /// The menu label for this action.
    pub fn label(self) -> &'static str {
        match self {
            Self::InstallProxy => "Install nginx",
            Self::ConfigureTls => "Set up nginx (TLS)",
            Self::SetupFirewall => "Set up firewall",
            Self::ConfigureLoadBalancer => "Configure load balancer",
            Self::Optimize => "Optimize nginx",
            Self::Diagnose => "Diagnose errors",
            Self::GenerateComposeFile => "Generate docker-compose file",
            Self::SetupCi => "Set up GitLab CI/CD",
            Self::Start => "Start nginx",
            Self::Stop => "Stop nginx",
            Self::Status => "Show nginx status",
            Self::Exit => "Exit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_is_last() {
        assert_eq!(Action::ALL.last(), Some(&Action::Exit));
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Action::ALL.len());
    }
}
