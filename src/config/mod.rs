use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::const_new();

mod config_dir;
pub use config_dir::{find_config_file, read_config, read_config_at};

mod error;
pub use error::{ConfigError, ConfigResult};
use tokio::sync::OnceCell;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    host: Host,
    app: App,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Host {
    bindto: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    /// Serve Swagger UI and the OpenAPI document.
    docs: bool,
    /// Load the demo catalog at startup.
    seed: bool,
}

impl Default for Host {
    fn default() -> Self {
        Self {
            bindto: String::from("127.0.0.1:3001"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            docs: false,
            seed: true,
        }
    }
}

impl Config {
    #[tracing::instrument]
    pub async fn get_or_init(use_local: bool) -> &'static Config {
        CONFIG
            .get_or_init(|| async {
                let read_cfg = |use_local| -> ConfigResult<Self> {
                    let bytes = read_config(use_local)?;
                    Self::from_toml(&bytes)
                };

                match read_cfg(use_local) {
                    Ok(c) => c,
                    Err(error::ConfigError::ConfigNotFound) => {
                        tracing::warn!("Config not found, using defaults.");
                        Self::default()
                    }
                    Err(e) => {
                        crate::error::log_error(&e);
                        tracing::error!("Config is invalid.");
                        std::process::exit(1);
                    }
                }
            })
            .await
    }

    pub fn from_toml(bytes: &[u8]) -> ConfigResult<Self> {
        Ok(toml::from_slice(bytes)?)
    }

    pub fn with_docs(mut self, docs: bool) -> Self {
        self.app.docs = docs;
        self
    }

    pub fn with_seed(mut self, seed: bool) -> Self {
        self.app.seed = seed;
        self
    }

    #[inline]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[inline]
    pub fn app(&self) -> &App {
        &self.app
    }
}

impl Host {
    #[inline]
    pub fn bindto(&self) -> &str {
        &self.bindto
    }
}

impl App {
    #[inline]
    pub fn docs(&self) -> bool {
        self.docs
    }

    #[inline]
    pub fn seed(&self) -> bool {
        self.seed
    }
}
