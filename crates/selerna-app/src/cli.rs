//! CLI argument definitions for the Selerna server.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use std::path::PathBuf;

/// Port used when neither the CLI, the environment, nor the config sets one.
pub const DEFAULT_PORT: u16 = 8000;

/// Selerna - reply dispatcher for the Selerna Group avatar chat widget.
#[derive(Parser, Debug)]
#[command(name = "selerna", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// HTTP server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Address to bind the HTTP server to.
    #[arg(short = 'b', long = "bind")]
    pub bind: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > SELERNA_CONFIG env var > ~/.selerna/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        self.resolve_config_path_from(|key| std::env::var(key).ok())
    }

    fn resolve_config_path_from<F>(&self, lookup: F) -> PathBuf
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Some(p) = lookup("SELERNA_CONFIG").filter(|p| !p.trim().is_empty()) {
            return PathBuf::from(p);
        }
        default_config_path(&lookup)
    }

    /// Resolve the HTTP port.
    ///
    /// Priority: --port flag > SELERNA_PORT env var > config file value > 8000.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        self.resolve_port_from(config_port, |key| std::env::var(key).ok())
    }

    fn resolve_port_from<F>(&self, config_port: u16, lookup: F) -> u16
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(p) = self.port {
            return p;
        }
        if let Some(p) = lookup("SELERNA_PORT").and_then(|v| v.trim().parse::<u16>().ok()) {
            return p;
        }
        if config_port != 0 {
            return config_port;
        }
        DEFAULT_PORT
    }
}

/// Default config file path for the current platform.
fn default_config_path<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    let home_var = if cfg!(target_os = "windows") {
        "USERPROFILE"
    } else {
        "HOME"
    };
    match lookup(home_var) {
        Some(home) => PathBuf::from(home).join(".selerna").join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn args(extra: &[&str]) -> CliArgs {
        let mut argv = vec!["selerna"];
        argv.extend_from_slice(extra);
        CliArgs::parse_from(argv)
    }

    #[test]
    fn test_parse_flags() {
        let cli = args(&["-c", "/etc/selerna.toml", "-p", "9000", "--bind", "127.0.0.1", "-l", "debug"]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/selerna.toml")));
        assert_eq!(cli.port, Some(9000));
        assert_eq!(cli.bind.as_deref(), Some("127.0.0.1"));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_config_path_priority() {
        let lookup = env(&[("SELERNA_CONFIG", "/env/config.toml"), ("HOME", "/home/u"), ("USERPROFILE", "/home/u")]);

        let cli = args(&["--config", "/cli/config.toml"]);
        assert_eq!(cli.resolve_config_path_from(&lookup), PathBuf::from("/cli/config.toml"));

        let cli = args(&[]);
        assert_eq!(cli.resolve_config_path_from(&lookup), PathBuf::from("/env/config.toml"));

        let lookup = env(&[("HOME", "/home/u"), ("USERPROFILE", "/home/u")]);
        assert_eq!(
            cli.resolve_config_path_from(&lookup),
            PathBuf::from("/home/u").join(".selerna").join("config.toml")
        );

        assert_eq!(cli.resolve_config_path_from(env(&[])), PathBuf::from("config.toml"));
    }

    #[test]
    fn test_port_priority() {
        let lookup = env(&[("SELERNA_PORT", "9100")]);

        assert_eq!(args(&["--port", "9200"]).resolve_port_from(8500, &lookup), 9200);
        assert_eq!(args(&[]).resolve_port_from(8500, &lookup), 9100);
        assert_eq!(args(&[]).resolve_port_from(8500, env(&[])), 8500);
        assert_eq!(args(&[]).resolve_port_from(0, env(&[])), DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_env_port_is_ignored() {
        let lookup = env(&[("SELERNA_PORT", "not-a-port")]);
        assert_eq!(args(&[]).resolve_port_from(8500, lookup), 8500);
    }
}
