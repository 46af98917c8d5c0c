use std::path::PathBuf;

use acad_ai::GeminiClient;
use acad_config::AcadConfig;
use acad_store::{FileKvStore, StudyStore};
use anyhow::Context;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: AcadConfig,
    pub store: StudyStore<FileKvStore>,
    pub data_dir: PathBuf,
}

impl AppContext {
    /// Open the snapshot store. `--data-dir` wins over `storage.data_dir`.
    pub fn init(config: AcadConfig, data_dir_override: Option<&str>) -> anyhow::Result<Self> {
        let data_dir = match data_dir_override {
            Some(dir) => PathBuf::from(dir),
            None => config
                .storage
                .resolve_data_dir()
                .context("failed to resolve data directory")?,
        };

        let kv = FileKvStore::open(&data_dir)
            .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
        let store = StudyStore::load(kv);

        Ok(Self {
            config,
            store,
            data_dir,
        })
    }

    /// Build the AI client; fails when the `ai` section is unusable.
    pub fn assistant(&self) -> anyhow::Result<GeminiClient> {
        self.config
            .ai
            .ensure_configured()
            .context("AI commands need an API key")?;
        GeminiClient::from_config(&self.config.ai).context("failed to initialize AI client")
    }
}

#[cfg(test)]
mod tests {
    use acad_config::{AcadConfig, AiConfig, StorageConfig};

    use super::AppContext;

    #[test]
    fn data_dir_flag_overrides_config() {
        let tmp = tempfile::tempdir().unwrap();
        let from_config = tmp.path().join("config-dir");
        let from_flag = tmp.path().join("flag-dir");
        let config = AcadConfig {
            storage: StorageConfig {
                data_dir: from_config.to_string_lossy().into_owned(),
            },
            ..AcadConfig::default()
        };

        let ctx = AppContext::init(config, Some(&from_flag.to_string_lossy())).unwrap();

        assert_eq!(ctx.data_dir, from_flag);
        assert!(from_flag.is_dir());
        assert!(!from_config.exists());
        assert!(ctx.store.subjects().is_empty());
    }

    #[test]
    fn assistant_requires_api_key() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = AcadConfig::default();
        config.storage.data_dir = tmp.path().to_string_lossy().into_owned();
        let ctx = AppContext::init(config, None).unwrap();
        let err = ctx.assistant().err().expect("should fail without api key");
        assert!(format!("{err:#}").contains("API key"));

        let mut config = AcadConfig::default();
        config.storage.data_dir = tmp.path().to_string_lossy().into_owned();
        config.ai = AiConfig {
            api_key: "key-123".into(),
            ..AiConfig::default()
        };
        assert!(AppContext::init(config, None).unwrap().assistant().is_ok());
    }
}
