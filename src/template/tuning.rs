//! Performance tuning rule: connection handling for the main nginx config.

use crate::config::Paths;
use crate::model::ConfigArtifact;

/// Replaces the main config, so the caller must snapshot it first.
///
/// Site configs under `conf_d` stay included, or a load balancer written
/// earlier would stop being served.
pub fn render(paths: &Paths) -> ConfigArtifact {
    let content = format!(
        "\
events {{
  worker_connections 1024;
}}

http {{
  sendfile on;
  tcp_nopush on;
  tcp_nodelay on;
  keepalive_timeout 65;
  types_hash_max_size 2048;
  server_tokens off;

  include {}/*.conf;
}}
",
        paths.conf_d.display()
    );
    ConfigArtifact::new(&paths.nginx_conf, content).with_backup()
}
