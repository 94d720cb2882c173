use serde::Deserialize;

fn default_listen_addr() -> String {
    "127.0.0.1:8000".to_string()
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Address the listener binds, e.g. "127.0.0.1:8000"
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Config {
    /// Loads configuration from the YAML file named by `MINIHTTPD_CONFIG`
    /// (default "minihttpd.yaml"), falling back to defaults when the file
    /// is absent. A `LISTEN` environment variable overrides the address.
    pub fn load() -> Self {
        let path = std::env::var("MINIHTTPD_CONFIG")
            .unwrap_or_else(|_| "minihttpd.yaml".to_string());

        let mut cfg = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_yaml::from_str(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Ignoring invalid config file {}: {}", path, e);
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }

        cfg
    }
}
