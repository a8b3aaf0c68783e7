//! Deployment descriptors: docker-compose and GitLab CI.

use crate::collect::collect;
use crate::model::{Action, AnswerField};
use crate::report;
use crate::template::{self, compose};

use super::{Context, HandlerError, argument, not_blank, write_artifacts};

const REPOSITORY_URL: &str = "repository_url";
const BRANCH: &str = "branch";
const RUNNER_TOKEN: &str = "runner_token";
const RUNNER_EXECUTOR: &str = "runner_executor";

fn compose_fields() -> [AnswerField; 3] {
    [
        AnswerField::text(compose::PROJECT, "Project name")
            .default("nginx_project")
            .validate(not_blank),
        AnswerField::text(compose::IMAGE, "nginx image")
            .default("nginx:latest")
            .validate(not_blank),
        AnswerField::text(compose::PORTS, "Comma-separated port mappings (host:container)")
            .default("80:80")
            .validate(compose::validate_ports),
    ]
}

pub(super) fn generate_compose_file(cx: &mut Context<'_>) -> Result<(), HandlerError> {
    let answers = collect(cx.prompter, &compose_fields())?;
    let artifacts = template::render(Action::GenerateComposeFile, &answers, &cx.config.paths)?;

    report::step("Writing docker-compose file...");
    write_artifacts(&artifacts)?;

    let path = cx.config.paths.compose_file();
    report::done(&format!(
        "Wrote {}. Start it with `docker compose up -d`.",
        path.display()
    ));
    Ok(())
}

fn ci_fields() -> [AnswerField; 4] {
    [
        AnswerField::text(REPOSITORY_URL, "GitLab URL").validate(argument),
        AnswerField::text(BRANCH, "Branch").default("main"),
        AnswerField::text(RUNNER_TOKEN, "Runner registration token").validate(argument),
        AnswerField::choice(RUNNER_EXECUTOR, "Runner executor", &["shell", "docker"]),
    ]
}

/// Write the pipeline, then install and register a runner.
///
/// The repository and branch only appear in the completion message;
/// the pipeline itself is fixed.
pub(super) fn setup_ci(cx: &mut Context<'_>) -> Result<(), HandlerError> {
    let answers = collect(cx.prompter, &ci_fields())?;
    let artifacts = template::render(Action::SetupCi, &answers, &cx.config.paths)?;

    let url = answers.text(REPOSITORY_URL).unwrap_or_default().trim();
    let branch = answers.text(BRANCH).unwrap_or_default().trim();
    let token = answers.text(RUNNER_TOKEN).unwrap_or_default().trim();
    let executor = answers.text(RUNNER_EXECUTOR).unwrap_or("shell");

    report::step("Setting up GitLab CI/CD...");
    write_artifacts(&artifacts)?;

    let commands = [
        cx.host.refresh_index(),
        cx.host.install("gitlab-runner"),
        cx.host.register_runner(url, token, executor),
    ];
    let clean = cx.run_all(&commands);
    report::finished(clean, &format!("GitLab CI/CD configured for {url} ({branch})."));
    Ok(())
}
