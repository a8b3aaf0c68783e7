//! Proxy configuration handlers: TLS, load balancing, tuning.

use crate::collect::collect;
use crate::model::{Action, AnswerField, AnswerSet};
use crate::report;
use crate::template::{self, load_balancer};

use super::{Context, HandlerError, not_an_option, not_blank, write_artifacts};

const ENABLE_TLS: &str = "enable_tls";
const DOMAIN: &str = "domain";

fn tls_fields() -> [AnswerField; 2] {
    [
        AnswerField::confirm(ENABLE_TLS, "Issue a Let's Encrypt certificate?", false),
        AnswerField::text(DOMAIN, "Domain name for the certificate")
            .validate(not_an_option)
            .visible_when(|answers| answers.flag(ENABLE_TLS)),
    ]
}

/// The domain to certify, if the operator asked for TLS and named one.
fn certificate_domain(answers: &AnswerSet) -> Option<&str> {
    if !answers.flag(ENABLE_TLS) {
        return None;
    }
    answers.text(DOMAIN).map(str::trim).filter(|d| !d.is_empty())
}

/// Validate and reload the base config, then issue a certificate if asked.
pub(super) fn configure_tls(cx: &mut Context<'_>) -> Result<(), HandlerError> {
    let answers = collect(cx.prompter, &tls_fields())?;

    report::step("Checking and reloading nginx...");
    let mut clean = cx.validate_and_reload();

    match certificate_domain(&answers) {
        Some(domain) => {
            report::step(&format!("Issuing a certificate for {domain}..."));
            let commands = [
                cx.host.refresh_index(),
                cx.host.install("certbot python3-certbot-nginx"),
                cx.host.issue_certificate(domain),
            ];
            clean &= cx.run_all(&commands);
            report::finished(clean, &format!("TLS configured for {domain}."));
        }
        None => {
            report::finished(clean, "nginx configured without TLS.");
        }
    }
    Ok(())
}

fn load_balancer_fields() -> [AnswerField; 2] {
    [
        AnswerField::text(load_balancer::UPSTREAM, "Upstream group name")
            .default("backend")
            .validate(not_blank),
        AnswerField::text(
            load_balancer::SERVERS,
            "Comma-separated servers (e.g. 192.168.0.1:8080,192.168.0.2:8080)",
        )
        .validate(load_balancer::validate_servers),
    ]
}

pub(super) fn configure_load_balancer(cx: &mut Context<'_>) -> Result<(), HandlerError> {
    let answers = collect(cx.prompter, &load_balancer_fields())?;
    let artifacts = template::render(Action::ConfigureLoadBalancer, &answers, &cx.config.paths)?;

    report::step("Writing load balancer configuration...");
    write_artifacts(&artifacts)?;

    let clean = cx.validate_and_reload();
    report::finished(clean, "Load balancer configuration applied.");
    Ok(())
}

/// Replace the main config with the tuned one, keeping a `.bak` of the old.
pub(super) fn optimize(cx: &mut Context<'_>) -> Result<(), HandlerError> {
    let artifacts = template::render(Action::Optimize, &AnswerSet::new(), &cx.config.paths)?;

    report::step("Optimizing nginx...");
    write_artifacts(&artifacts)?;

    let clean = cx.validate_and_reload();
    report::finished(clean, "Optimization complete.");
    Ok(())
}
