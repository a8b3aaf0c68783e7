//! Container descriptor rule: a docker-compose file running the proxy.

use crate::config::Paths;
use crate::model::{AnswerSet, ConfigArtifact};

use super::{TemplateError, required, split_entries};

pub const PROJECT: &str = "project";
pub const IMAGE: &str = "image";
pub const PORTS: &str = "ports";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeProject {
    /// Prefix of the container name.
    pub project: String,

    /// Image reference, e.g. `nginx:1.25`.
    pub image: String,

    /// Comma-separated `host:container` mappings.
    pub ports: String,
}

impl ComposeProject {
    pub fn from_answers(answers: &AnswerSet) -> Result<Self, TemplateError> {
        Ok(Self {
            project: required(answers, PROJECT)?,
            image: required(answers, IMAGE)?,
            ports: answers
                .text(PORTS)
                .ok_or(TemplateError::MissingAnswer(PORTS))?
                .to_string(),
        })
    }

    /// The proxy's container name: `<project>_proxy`.
    pub fn container_name(&self) -> String {
        format!("{}_proxy", self.project.trim())
    }

    pub fn render(&self, paths: &Paths) -> Result<ConfigArtifact, TemplateError> {
        if self.project.trim().is_empty() {
            return Err(TemplateError::EmptyValue(PROJECT));
        }
        let image = self.image.trim();
        if image.is_empty() {
            return Err(TemplateError::EmptyValue(IMAGE));
        }

        let ports: String = port_mappings(&self.ports)?
            .iter()
            .map(|p| format!("      - \"{p}\"\n"))
            .collect();

        let content = format!(
            "services:\n  \
               nginx:\n    \
                 image: {image}\n    \
                 container_name: {container}\n    \
                 ports:\n\
             {ports}    \
                 restart: unless-stopped\n",
            container = self.container_name(),
        );

        Ok(ConfigArtifact::new(paths.compose_file(), content))
    }
}

/// Split and check `host:container` mappings.
fn port_mappings(list: &str) -> Result<Vec<String>, TemplateError> {
    let entries = split_entries(PORTS, list)?;
    for entry in &entries {
        match entry.rsplit_once(':') {
            Some((host, container)) if !host.is_empty() && !container.is_empty() => {}
            _ => return Err(TemplateError::MalformedPort(entry.clone())),
        }
    }
    Ok(entries)
}

/// Validator for the port list prompt.
pub fn validate_ports(input: &str) -> Result<(), String> {
    port_mappings(input).map(|_| ()).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    fn project(ports: &str) -> ComposeProject {
        ComposeProject {
            project: "demo".to_string(),
            image: "nginx:1.25".to_string(),
            ports: ports.to_string(),
        }
    }

    #[test]
    fn renders_single_proxy_service() {
        let paths = Paths {
            working_dir: PathBuf::from("/srv/demo"),
            ..Paths::default()
        };
        let artifact = project("8080:80").render(&paths).unwrap();

        let expected = "\
services:
  nginx:
    image: nginx:1.25
    container_name: demo_proxy
    ports:
      - \"8080:80\"
    restart: unless-stopped
";
        assert_eq!(artifact.content, expected);
        assert_eq!(artifact.destination, PathBuf::from("/srv/demo/docker-compose.yml"));
    }

    #[test]
    fn one_line_per_trimmed_mapping() {
        let artifact = project(" 80:80 , 443:443,80:80")
            .render(&Paths::default())
            .unwrap();
        assert!(artifact.content.contains(
            "      - \"80:80\"\n      - \"443:443\"\n      - \"80:80\"\n"
        ));
    }

    #[test]
    fn empty_mapping_fails_instead_of_emitting_blank_port() {
        let err = project("8080:80,").render(&Paths::default()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::EmptyEntry {
                field: PORTS,
                position: 2
            }
        );
    }

    #[test]
    fn mapping_needs_both_sides() {
        for bad in ["8080", ":80", "8080:"] {
            let err = project(bad).render(&Paths::default()).unwrap_err();
            assert_eq!(err, TemplateError::MalformedPort(bad.to_string()));
        }
        assert!(validate_ports("127.0.0.1:8080:80").is_ok());
    }

    #[test]
    fn blank_image_is_rejected() {
        let mut p = project("80:80");
        p.image = " ".to_string();
        assert_eq!(
            p.render(&Paths::default()).unwrap_err(),
            TemplateError::EmptyValue(IMAGE)
        );
    }
}
