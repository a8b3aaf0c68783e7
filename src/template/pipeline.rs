//! CI pipeline rule: a fixed build, test, deploy pipeline for GitLab.

use crate::config::Paths;
use crate::model::ConfigArtifact;

const PIPELINE: &str = "\
stages:
  - build
  - test
  - deploy

build:
  stage: build
  script:
    - echo \"Building...\"

test:
  stage: test
  script:
    - echo \"Running tests...\"

deploy:
  stage: deploy
  script:
    - nginx -t
    - systemctl reload nginx
";

/// The pipeline does not depend on operator input.
pub fn render(paths: &Paths) -> ConfigArtifact {
    ConfigArtifact::new(paths.pipeline_file(), PIPELINE)
}
