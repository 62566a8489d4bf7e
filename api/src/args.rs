use clap::Parser;
use heuksal_core::domain::common::{
    DEFAULT_USDA_API_KEY, DEFAULT_USDA_BASE_URL, DEFAULT_USDA_TIMEOUT_SECS, HeuksalConfig,
    UsdaConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "heuksal-api", version, about = "Ingredient search aggregation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub usda: UsdaArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Prefix for every route, e.g. `/heuksal`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list, `*` allows any origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct UsdaArgs {
    #[arg(long = "usda-api-key", env = "USDA_API_KEY", default_value = DEFAULT_USDA_API_KEY)]
    pub api_key: String,

    #[arg(long = "usda-base-url", env = "USDA_BASE_URL", default_value = DEFAULT_USDA_BASE_URL)]
    pub base_url: String,

    #[arg(
        long = "usda-timeout-secs",
        env = "USDA_TIMEOUT_SECS",
        default_value_t = DEFAULT_USDA_TIMEOUT_SECS
    )]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for HeuksalConfig {
    fn from(args: Args) -> Self {
        Self {
            usda: UsdaConfig {
                api_key: args.usda.api_key,
                base_url: args.usda.base_url,
                timeout_secs: args.usda.timeout_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "heuksal-api",
            "--server-port",
            "8080",
            "--allowed-origins",
            "http://localhost:5173,https://heuksal.app",
            "--usda-api-key",
            "secret",
            "--usda-base-url",
            "http://127.0.0.1:9/fdc/v1",
            "--usda-timeout-secs",
            "2",
            "--log-filter",
            "debug",
            "--server-host",
            "127.0.0.1",
            "--server-root-path",
            "/heuksal",
            "--log-json",
        ])
        .unwrap();

        assert_eq!(args.server.port, 8080);
        assert_eq!(args.server.root_path, "/heuksal");
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://localhost:5173", "https://heuksal.app"]
        );
        assert!(args.log.json);

        let config = HeuksalConfig::from(args);
        assert_eq!(config.usda.api_key, "secret");
        assert_eq!(config.usda.base_url, "http://127.0.0.1:9/fdc/v1");
        assert_eq!(config.usda.timeout_secs, 2);
    }
}
