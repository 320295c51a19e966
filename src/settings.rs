use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServerSettings {
    pub bind: Option<String>,       // Listen address, e.g. "127.0.0.1"
    pub port: Option<u16>,
    pub log_filter: Option<String>, // tracing EnvFilter string, e.g. "patternforge=debug,info"
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("patternforge")
            .join("config.toml")
    }
}
