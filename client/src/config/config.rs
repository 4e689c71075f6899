use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{Mark, Mode};
use serde::{Deserialize, Serialize};

use super::LogConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

/// `custom_path` wins over the file next to the executable.
pub fn get_config_manager(
    custom_path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match custom_path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&get_config_path()),
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub default_mode: Mode,
    /// Re-applied after every restart so the symbol prompt is skipped.
    #[serde(default)]
    pub preferred_symbol: Option<Mark>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    fn sample_config() -> Config {
        Config {
            default_mode: Mode::VersusAi,
            preferred_symbol: Some(Mark::O),
            seed: Some(2024),
            log: LogConfig {
                enabled: true,
                prefix: Some("Client".to_string()),
            },
        }
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();

        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();

        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_can_be_saved_and_loaded_with_manager() {
        let config = sample_config();
        let file_path = get_temp_file_path();

        let mut manager = get_config_manager(Some(file_path.as_str()));
        manager.set_config(&config).unwrap();

        let mut fresh_manager = get_config_manager(Some(file_path.as_str()));
        assert_eq!(fresh_manager.get_config().unwrap(), config);
        assert_eq!(fresh_manager.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let mut manager = get_config_manager(Some("this_file_does_not_exist.yaml"));

        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_uses_defaults_for_missing_fields() {
        let serializer = YamlConfigSerializer::new();

        let config: Config = serializer.deserialize("preferred_symbol: X\n").unwrap();

        assert_eq!(config.preferred_symbol, Some(Mark::X));
        assert_eq!(config.default_mode, Mode::TwoPlayer);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            default_mode: VersusAi
            log:
              enabled: true
              prefix: "   "
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let mut manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(manager.get_config().is_err());

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_unknown_mode_cant_be_read() {
        let serializer = YamlConfigSerializer::new();

        let result: Result<Config, String> = serializer.deserialize("default_mode: Solo\n");

        assert!(result.is_err());
    }
}
