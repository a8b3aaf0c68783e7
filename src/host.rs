//! Host command lines.
//!
//! Every command the handlers issue is spelled out here, so the exact
//! invocations live in one place. Operator-supplied values are shell-quoted.

use crate::config::Config;

/// Builds command lines for one host.
#[derive(Debug, Clone)]
pub struct HostCommands {
    privilege: String,
    service: String,
}

impl HostCommands {
    pub fn new(config: &Config) -> Self {
        Self {
            privilege: config.privilege.trim().to_string(),
            service: config.service.clone(),
        }
    }

    pub fn refresh_index(&self) -> String {
        self.privileged("apt update")
    }

    pub fn install(&self, packages: &str) -> String {
        self.privileged(&format!("apt install -y {packages}"))
    }

    /// Syntax-check the proxy configuration.
    pub fn test_config(&self) -> String {
        self.privileged("nginx -t")
    }

    /// `systemctl <verb> <service>`.
    pub fn systemctl(&self, verb: &str) -> String {
        self.privileged(&format!("systemctl {verb} {}", quote(&self.service)))
    }

    pub fn recent_logs(&self) -> String {
        self.privileged(&format!(
            "journalctl -u {} --since \"1 hour ago\" --no-pager",
            quote(&self.service)
        ))
    }

    pub fn issue_certificate(&self, domain: &str) -> String {
        self.privileged(&format!("certbot --nginx -d {}", quote(domain)))
    }

    /// `ufw <rule>`, with the rule passed through unquoted.
    pub fn ufw(&self, rule: &str) -> String {
        self.privileged(&format!("ufw {rule}"))
    }

    pub fn register_runner(&self, url: &str, token: &str, executor: &str) -> String {
        self.privileged(&format!(
            "gitlab-runner register --non-interactive --url {} --registration-token {} --executor {}",
            quote(url),
            quote(token),
            quote(executor),
        ))
    }

    fn privileged(&self, command: &str) -> String {
        if self.privilege.is_empty() {
            command.to_string()
        } else {
            format!("{} {command}", self.privilege)
        }
    }
}

/// Quote a value for `sh`. Plain words are left alone.
pub fn quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.:/@=+,".contains(c));
    if plain {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}
