use serde::Serialize;
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::PathBuf;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigContentProvider {
    /// `Ok(None)` when there is nothing stored.
    fn get_config_content(&self) -> Result<Option<String>, String>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path.display(),
                err
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    Stored,
    Defaults,
}

/// A config as read from its provider. Not validated: callers apply their
/// overrides first and validate what they actually run with.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig<TConfig> {
    pub config: TConfig,
    pub origin: ConfigOrigin,
}

pub fn load_config<TConfig, TProvider>(provider: &TProvider) -> Result<LoadedConfig<TConfig>, String>
where
    TConfig: DeserializeOwned + Default,
    TProvider: ConfigContentProvider,
{
    match provider.get_config_content()? {
        Some(content) => Ok(LoadedConfig {
            config: from_yaml(&content)?,
            origin: ConfigOrigin::Stored,
        }),
        None => Ok(LoadedConfig {
            config: TConfig::default(),
            origin: ConfigOrigin::Defaults,
        }),
    }
}

pub fn from_yaml<TConfig: DeserializeOwned>(content: &str) -> Result<TConfig, String> {
    serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize config: {}", e))
}

pub fn to_yaml<TConfig: Serialize>(config: &TConfig) -> Result<String, String> {
    serde_yaml_ng::to_string(config).map_err(|e| format!("Failed to serialize config: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        games: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self { games: 3 }
        }
    }

    struct MemoryContentProvider(Option<String>);

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            Ok(self.0.clone())
        }
    }

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_engine_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_missing_content_loads_defaults() {
        let loaded: LoadedConfig<SampleConfig> = load_config(&MemoryContentProvider(None)).unwrap();
        assert_eq!(loaded.config, SampleConfig::default());
        assert_eq!(loaded.origin, ConfigOrigin::Defaults);
    }

    #[test]
    fn test_stored_content_is_loaded_without_validation() {
        let provider = MemoryContentProvider(Some("games: 0\n".to_string()));
        let loaded: LoadedConfig<SampleConfig> = load_config(&provider).unwrap();
        assert_eq!(loaded.config, SampleConfig { games: 0 });
        assert_eq!(loaded.origin, ConfigOrigin::Stored);
    }

    #[test]
    fn test_unparsable_content_is_an_error() {
        let provider = MemoryContentProvider(Some("games: [not a number]\n".to_string()));
        let err = load_config::<SampleConfig, _>(&provider).unwrap_err();
        assert!(err.starts_with("Failed to deserialize config"), "{}", err);
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = to_yaml(&SampleConfig { games: 12 }).unwrap();
        assert_eq!(yaml, "games: 12\n");
        assert_eq!(from_yaml::<SampleConfig>(&yaml).unwrap(), SampleConfig { games: 12 });
    }

    #[test]
    fn test_file_is_read_through_provider() {
        let file_path = get_temp_file_path();
        std::fs::write(&file_path, "games: 8\n").unwrap();

        let provider = FileContentConfigProvider::new(&file_path);
        let loaded: LoadedConfig<SampleConfig> = load_config(&provider).unwrap();
        assert_eq!(loaded.config, SampleConfig { games: 8 });

        let _ = std::fs::remove_file(&file_path);
    }

    #[test]
    fn test_file_does_not_exist_reads_as_none() {
        let provider = FileContentConfigProvider::new("this_file_does_not_exist.yaml");
        assert_eq!(provider.get_config_content().unwrap(), None);
    }
}
