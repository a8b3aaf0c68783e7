//! Host-level handlers: packages, firewall, service lifecycle, logs.
//!
//! None of these ask questions or write files; each is a fixed list of
//! commands.

use crate::report;

use super::{Context, HandlerError};

pub(super) fn install(cx: &mut Context<'_>) -> Result<(), HandlerError> {
    report::step("Installing nginx...");
    let commands = [cx.host.refresh_index(), cx.host.install("nginx")];
    let clean = cx.run_all(&commands);
    report::finished(clean, "nginx installed.");
    Ok(())
}

/// Allow SSH before enabling, so the operator's own session survives.
pub(super) fn setup_firewall(cx: &mut Context<'_>) -> Result<(), HandlerError> {
    report::step("Setting up the firewall...");
    let commands = [
        cx.host.install("ufw"),
        cx.host.ufw("allow OpenSSH"),
        cx.host.ufw("allow 'Nginx Full'"),
        cx.host.ufw("--force enable"),
    ];
    let clean = cx.run_all(&commands);
    report::finished(clean, "Firewall enabled for SSH, HTTP and HTTPS.");
    Ok(())
}

pub(super) fn diagnose(cx: &mut Context<'_>) -> Result<(), HandlerError> {
    report::step("Reading the last hour of nginx logs...");
    let command = cx.host.recent_logs();
    if !cx.run(&command) {
        report::notice("No errors found, or the journal is unavailable.");
    }
    Ok(())
}

/// `systemctl <verb>` on the proxy service.
pub(super) fn lifecycle(
    cx: &mut Context<'_>,
    verb: &str,
    message: &str,
) -> Result<(), HandlerError> {
    report::step(&progress(verb, &cx.config.service));
    let command = cx.host.systemctl(verb);
    let clean = cx.run(&command);
    report::finished(clean, message);
    Ok(())
}

fn progress(verb: &str, service: &str) -> String {
    format!("Running systemctl {verb} {service}...")
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::progress;

    use crate::handlers::{Context, handle};
    use crate::model::Action;
    use crate::testing::{FakeExecutor, ScriptedPrompter, config_in};

    fn commands_for(action: Action, mut executor: FakeExecutor) -> Vec<String> {
        let dir = TempDir::new().unwrap();
        let config = config_in(dir.path());
        let mut prompter = ScriptedPrompter::default();

        let mut cx = Context::new(&config, &mut executor, &mut prompter);
        handle(action, &mut cx).unwrap();
        assert!(prompter.prompts.is_empty());
        executor.commands
    }

    #[test]
    fn install_refreshes_then_installs() {
        let commands = commands_for(Action::InstallProxy, FakeExecutor::new());
        assert_eq!(commands, vec!["sudo apt update", "sudo apt install -y nginx"]);
    }

    #[test]
    fn install_continues_after_failed_refresh() {
        let executor = FakeExecutor::new().failing_on("apt update");
        let commands = commands_for(Action::InstallProxy, executor);
        assert_eq!(commands.len(), 2);
    }

    #[test]
    fn firewall_allows_ssh_before_enabling() {
        let commands = commands_for(Action::SetupFirewall, FakeExecutor::new());
        assert_eq!(
            commands,
            vec![
                "sudo apt install -y ufw",
                "sudo ufw allow OpenSSH",
                "sudo ufw allow 'Nginx Full'",
                "sudo ufw --force enable",
            ]
        );
    }

    #[test]
    fn diagnose_reads_journal() {
        let executor = FakeExecutor::new().failing_on("journalctl");
        let commands = commands_for(Action::Diagnose, executor);
        assert_eq!(
            commands,
            vec!["sudo journalctl -u nginx --since \"1 hour ago\" --no-pager"]
        );
    }

    #[test]
    fn lifecycle_actions_map_to_systemctl() {
        for (action, expected) in [
            (Action::Start, "sudo systemctl start nginx"),
            (Action::Stop, "sudo systemctl stop nginx"),
            (Action::Status, "sudo systemctl status nginx"),
        ] {
            assert_eq!(commands_for(action, FakeExecutor::new()), vec![expected]);
        }
    }

    #[test]
    fn lifecycle_progress_names_verb_and_service() {
        assert_eq!(progress("start", "nginx"), "Running systemctl start nginx...");
        assert_eq!(progress("stop", "openresty"), "Running systemctl stop openresty...");
    }
}
