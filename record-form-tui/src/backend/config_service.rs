//! 配置服务

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use record_form_api::{normalize_base_url, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 覆盖 `api_base_url` 的环境变量
pub const API_URL_ENV: &str = "RECORD_FORM_API_URL";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 远端记录集合的 URL
    pub api_base_url: String,
    /// 界面语言代码（en-US / zh-CN）
    pub language: String,
    pub theme: Theme,
    /// 单个请求的超时；不设置则不限制
    pub request_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            language: "en-US".to_string(),
            theme: Theme::Dark,
            request_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// 用环境变量中的 URL 覆盖配置文件中的值（空值忽略）
    #[must_use]
    pub fn with_api_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            log::info!("Using API base URL from {API_URL_ENV}");
            self.api_base_url = url;
        }
        self
    }

    /// 校验后的 base URL（以 `/` 结尾）；无效时回退到默认端点
    pub fn base_url(&self) -> String {
        match normalize_base_url(&self.api_base_url) {
            Ok(url) => url.to_string(),
            Err(e) => {
                log::warn!("{e}; falling back to {DEFAULT_BASE_URL}");
                DEFAULT_BASE_URL.to_string()
            }
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用平台配置目录下的 `record-form/config.json`
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("record-form");
        Self::with_path(dir.join("config.json"))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::debug!("No config at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;

        match serde_json::from_str(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!(
                    "Malformed config at {}: {e}; using defaults",
                    self.path.display()
                );
                Ok(AppConfig::default())
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
        }
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}
