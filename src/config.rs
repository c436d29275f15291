use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct FilesConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    #[serde(default = "default_map_prefix")]
    pub map_prefix: String,
    #[serde(default = "default_schedule_prefix")]
    pub schedule_prefix: String,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_render_enabled")]
    pub enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enable_trace_log: bool,
    #[serde(default = "default_trace_log_path")]
    pub trace_log_path: String,
}

// Default values
fn default_input_dir() -> String { "InputFiles".to_string() }
fn default_map_prefix() -> String { "map".to_string() }
fn default_schedule_prefix() -> String { "barber".to_string() }
fn default_render_enabled() -> bool { true }
fn default_trace_log_path() -> String { "trace_log.json".to_string() }

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            map_prefix: default_map_prefix(),
            schedule_prefix: default_schedule_prefix(),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: default_render_enabled(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enable_trace_log: false,
            trace_log_path: default_trace_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: FilesConfig::default(),
            render: RenderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, or use defaults if file doesn't exist
    pub fn load() -> Self {
        match fs::read_to_string("config.toml") {
            Ok(contents) => {
                match toml::from_str(&contents) {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config.toml: {}", e);
                        eprintln!("Using default configuration");
                        Config::default()
                    }
                }
            }
            Err(_) => Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.files.input_dir, "InputFiles");
        assert_eq!(config.files.map_prefix, "map");
        assert_eq!(config.files.schedule_prefix, "barber");
        assert!(config.render.enabled);
        assert!(!config.logging.enable_trace_log);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [files]
            input_dir = "scenarios"

            [logging]
            enable_trace_log = true
            "#,
        )
        .unwrap();

        assert_eq!(config.files.input_dir, "scenarios");
        assert_eq!(config.files.map_prefix, "map");
        assert!(config.render.enabled);
        assert!(config.logging.enable_trace_log);
        assert_eq!(config.logging.trace_log_path, "trace_log.json");
    }
}
