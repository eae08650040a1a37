use std::io;

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct PanelConfig {
    /// Base URL of the grinder backend.
    pub backend_url: String,

    /// Jog distance in inches used when `move` is given no distance.
    pub step_size: f64,
    /// Jog speed in inches per second used when `move` is given no speed.
    pub jog_speed: f64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://127.0.0.1:8000".to_string(),
            step_size: 0.001,
            jog_speed: 0.1,
        }
    }
}

fn config_path() -> String {
    match std::env::var("CONFIG_PATH") {
        Ok(path) => path,
        Err(_) => "grind_panel.toml".to_string(),
    }
}

pub fn load_config() -> io::Result<PanelConfig> {
    let config_path = config_path();

    let config_content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!(
                "Failed to read config file '{}': {}\nUsing default one",
                config_path, e
            );
            return Ok(PanelConfig::default());
        }
    };

    let config: PanelConfig = match toml::from_str(&config_content) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to parse config file '{}': {}", config_path, e);
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Failed to parse config file",
            ));
        }
    };

    Ok(config)
}

pub fn save_default_config() -> io::Result<()> {
    let default_config = PanelConfig::default();
    let config_path = config_path();

    let toml_content = toml::to_string(&default_config).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to serialize config: {}", e),
        )
    })?;

    std::fs::write(config_path, toml_content).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to write config file: {}", e),
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let default_config = PanelConfig::default();
        let serialized = toml::to_string(&default_config).unwrap();
        let parsed: PanelConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.backend_url, default_config.backend_url);
        assert_eq!(parsed.step_size, default_config.step_size);
        assert_eq!(parsed.jog_speed, default_config.jog_speed);
    }

    #[test]
    fn partial_config_is_rejected() {
        let result: Result<PanelConfig, _> = toml::from_str("step_size = 0.002");
        assert!(result.is_err());
    }
}
