//! 配置服务
//!
//! 配置文件位于 `<config_dir>/image-search/config.json`：
//!
//! ```json
//! { "api_key": "...", "language": "zh-CN", "theme": "light", "log_dir": "/tmp/image-search" }
//! ```
//!
//! 所有字段均可省略。环境变量 `PIXABAY_API_KEY` 优先于文件中的 `api_key`。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 覆盖配置文件 API key 的环境变量
pub const API_KEY_ENV: &str = "PIXABAY_API_KEY";

const APP_DIR: &str = "image-search";
const CONFIG_FILE: &str = "config.json";

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("No Pixabay API key: set PIXABAY_API_KEY or \"api_key\" in {}", path.display())]
    MissingApiKey { path: PathBuf },
}

/// 运行时配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub language: Language,
    pub theme: Theme,
    pub log_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: Language::default(),
            theme: Theme::default(),
            log_dir: default_log_dir(),
        }
    }
}

/// 配置文件的磁盘格式
#[derive(Debug, Default, Serialize, Deserialize)]
struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    log_dir: Option<PathBuf>,
}

pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;

    /// 保存界面偏好（语言、主题），文件中的其他字段保持不变
    fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;
}

/// 基于本地 JSON 文件的配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用平台默认配置目录
    pub fn new() -> Self {
        let dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_path(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<ConfigFile, ConfigError> {
        if !self.path.exists() {
            log::debug!("Config file {} not found, using defaults", self.path.display());
            return Ok(ConfigFile::default());
        }
        let text = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// 合并文件内容与环境变量
    fn resolve(&self, file: ConfigFile, env_key: Option<String>) -> Result<AppConfig, ConfigError> {
        let api_key = env_key
            .filter(|k| !k.trim().is_empty())
            .or(file.api_key)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey {
                path: self.path.clone(),
            })?;

        let language = match file.language.as_deref() {
            Some(code) => Language::from_code(code).unwrap_or_else(|| {
                log::warn!("Unknown language {code:?} in config, using default");
                Language::default()
            }),
            None => Language::default(),
        };

        let theme = match file.theme.as_deref() {
            Some(name) => Theme::from_name(name).unwrap_or_else(|| {
                log::warn!("Unknown theme {name:?} in config, using default");
                Theme::default()
            }),
            None => Theme::default(),
        };

        Ok(AppConfig {
            api_key,
            language,
            theme,
            log_dir: file.log_dir.unwrap_or_else(default_log_dir),
        })
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        let file = self.read_file()?;
        self.resolve(file, std::env::var(API_KEY_ENV).ok())
    }

    fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let mut file = self.read_file()?;
        file.language = Some(config.language.code().to_string());
        file.theme = Some(config.theme.name().to_string());

        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(&file).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, text).map_err(io_err)?;
        log::info!("Preferences saved to {}", self.path.display());
        Ok(())
    }
}

/// 默认日志目录
fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
        .join("logs")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 每个测试独立的临时配置路径
    fn temp_config(name: &str) -> LocalConfigService {
        let dir = std::env::temp_dir().join(format!(
            "image-search-config-test-{}-{name}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        LocalConfigService::with_path(dir.join(CONFIG_FILE))
    }

    #[test]
    fn env_key_overrides_file() {
        let service = temp_config("env-override");
        let file = ConfigFile {
            api_key: Some("from-file".to_string()),
            ..ConfigFile::default()
        };
        let config = service.resolve(file, Some("from-env".to_string())).unwrap();
        assert_eq!(config.api_key, "from-env");
    }

    #[test]
    fn blank_env_key_falls_back_to_file() {
        let service = temp_config("blank-env");
        let file = ConfigFile {
            api_key: Some(" from-file ".to_string()),
            ..ConfigFile::default()
        };
        let config = service.resolve(file, Some("  ".to_string())).unwrap();
        assert_eq!(config.api_key, "from-file");
    }

    #[test]
    fn missing_key_is_an_error() {
        let service = temp_config("missing-key");
        let err = service.resolve(ConfigFile::default(), None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey { .. }));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn preferences_are_parsed_with_fallbacks() {
        let service = temp_config("prefs");
        let file = ConfigFile {
            api_key: Some("k".to_string()),
            language: Some("zh-CN".to_string()),
            theme: Some("sepia".to_string()),
            log_dir: Some(PathBuf::from("/var/log/image-search")),
        };
        let config = service.resolve(file, None).unwrap();
        assert_eq!(config.language, Language::ZhCn);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.log_dir, PathBuf::from("/var/log/image-search"));
    }

    #[test]
    fn read_file_parses_json_and_tolerates_absence() {
        let service = temp_config("read");
        assert!(service.read_file().unwrap().api_key.is_none());

        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), r#"{"api_key":"abc","theme":"light"}"#).unwrap();
        let file = service.read_file().unwrap();
        assert_eq!(file.api_key.as_deref(), Some("abc"));
        assert_eq!(file.theme.as_deref(), Some("light"));

        fs::write(service.path(), "{not json").unwrap();
        assert!(matches!(service.read_file(), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn save_keeps_api_key_and_updates_preferences() {
        let service = temp_config("save");
        fs::create_dir_all(service.path().parent().unwrap()).unwrap();
        fs::write(service.path(), r#"{"api_key":"keep-me"}"#).unwrap();

        let config = AppConfig {
            api_key: "from-env-not-saved".to_string(),
            language: Language::ZhCn,
            theme: Theme::Light,
            ..AppConfig::default()
        };
        service.save(&config).unwrap();

        let file = service.read_file().unwrap();
        assert_eq!(file.api_key.as_deref(), Some("keep-me"));
        assert_eq!(file.language.as_deref(), Some("zh-CN"));
        assert_eq!(file.theme.as_deref(), Some("light"));
    }
}
