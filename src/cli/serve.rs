use crate::cli::ServeArgs;
use crate::config::{Config, ServerConfig};
use crate::server;
use anyhow::Result;

/// Handle serve command - flags override the config file
pub fn handle(cmd: &ServeArgs, config: &Config) -> Result<()> {
    let server_config = resolve(cmd, &config.server);
    server::run_server(&server_config, config)
}

fn resolve(cmd: &ServeArgs, base: &ServerConfig) -> ServerConfig {
    ServerConfig {
        host: cmd.host.clone().unwrap_or_else(|| base.host.clone()),
        port: cmd.port.unwrap_or(base.port),
        workers: cmd.workers.unwrap_or(base.workers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_file() {
        let cmd = ServeArgs {
            host: None,
            port: Some(9000),
            workers: None,
        };
        let resolved = resolve(&cmd, &ServerConfig::default());
        assert_eq!(resolved.port, 9000);
        assert_eq!(resolved.host, "0.0.0.0");
        assert_eq!(resolved.workers, 4);
    }

    #[tokio::test]
    async fn test_host_flag_localhost_binds_loopback() {
        let cmd = ServeArgs {
            host: Some("localhost".to_string()),
            port: Some(0),
            workers: None,
        };
        let resolved = resolve(&cmd, &ServerConfig::default());
        let listener = server::bind_listener(&resolved).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }
}
