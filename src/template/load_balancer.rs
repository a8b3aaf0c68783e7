//! Load balancer rule: an upstream group and a proxy server block in front of it.

use crate::config::Paths;
use crate::model::{AnswerSet, ConfigArtifact};

use super::{TemplateError, required, split_entries};

pub const UPSTREAM: &str = "upstream";
pub const SERVERS: &str = "servers";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancer {
    /// Upstream group name, also the `proxy_pass` host.
    pub upstream: String,

    /// Comma-separated backend addresses.
    pub servers: String,
}

impl LoadBalancer {
    pub fn from_answers(answers: &AnswerSet) -> Result<Self, TemplateError> {
        Ok(Self {
            upstream: required(answers, UPSTREAM)?,
            servers: answers
                .text(SERVERS)
                .ok_or(TemplateError::MissingAnswer(SERVERS))?
                .to_string(),
        })
    }

    pub fn render(&self, paths: &Paths) -> Result<ConfigArtifact, TemplateError> {
        let upstream = self.upstream.trim();
        if upstream.is_empty() {
            return Err(TemplateError::EmptyValue(UPSTREAM));
        }

        let servers: String = split_entries(SERVERS, &self.servers)?
            .iter()
            .map(|s| format!("  server {s};\n"))
            .collect();

        let content = format!(
            "upstream {upstream} {{\n\
             {servers}\
             }}\n\
             \n\
             server {{\n  \
               listen 80;\n\
             \n  \
               location / {{\n    \
                 proxy_pass http://{upstream};\n    \
                 proxy_set_header Host $host;\n    \
                 proxy_set_header X-Real-IP $remote_addr;\n    \
                 proxy_set_header X-Forwarded-For $proxy_add_x_forwarded_for;\n  \
               }}\n\
             }}\n"
        );

        Ok(ConfigArtifact::new(paths.load_balancer(), content))
    }
}

/// Validator for the server list prompt.
pub fn validate_servers(input: &str) -> Result<(), String> {
    split_entries(SERVERS, input)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    fn balancer(upstream: &str, servers: &str) -> LoadBalancer {
        LoadBalancer {
            upstream: upstream.to_string(),
            servers: servers.to_string(),
        }
    }

    #[test]
    fn renders_upstream_and_proxy_blocks() {
        let artifact = balancer("backend", "10.0.0.1:8080,10.0.0.2:8080")
            .render(&Paths::default())
            .unwrap();

        let expected = "\
upstream backend {
  server 10.0.0.1:8080;
  server 10.0.0.2:8080;
}

server {
  listen 80;

  location / {
    proxy_pass http://backend;
    proxy_set_header Host $host;
    proxy_set_header X-Real-IP $remote_addr;
    proxy_set_header X-Forwarded-For $proxy_add_x_forwarded_for;
  }
}
";
        assert_eq!(artifact.content, expected);
        assert_eq!(
            artifact.destination,
            PathBuf::from("/etc/nginx/conf.d/load_balancer.conf")
        );
        assert!(!artifact.backup);
    }

    #[test]
    fn server_entries_are_trimmed() {
        let artifact = balancer("pool", " a:1 ,  b:2 ")
            .render(&Paths::default())
            .unwrap();
        assert!(artifact.content.contains("  server a:1;\n  server b:2;\n"));
    }

    #[test]
    fn empty_server_entry_fails_instead_of_emitting_a_blank_server() {
        let err = balancer("backend", "10.0.0.1:8080, ,10.0.0.2:8080")
            .render(&Paths::default())
            .unwrap_err();
        assert_eq!(
            err,
            TemplateError::EmptyEntry {
                field: SERVERS,
                position: 2
            }
        );
    }

    #[test]
    fn blank_upstream_is_rejected() {
        let err = balancer("  ", "a:1").render(&Paths::default()).unwrap_err();
        assert_eq!(err, TemplateError::EmptyValue(UPSTREAM));
    }

    #[test]
    fn rendering_is_idempotent() {
        let lb = balancer("backend", "a:1, b:2, a:1");
        let first = lb.render(&Paths::default()).unwrap();
        let second = lb.render(&Paths::default()).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.content.matches("server a:1;").count(), 2);
    }

    #[test]
    fn validator_explains_the_problem() {
        assert!(validate_servers("a:1,b:2").is_ok());
        assert_eq!(
            validate_servers("a:1,").unwrap_err(),
            "servers entry 2 is empty"
        );
    }
}
