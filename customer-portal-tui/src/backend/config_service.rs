//! 配置服务

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use customer_portal_core::pagination::DEFAULT_PAGE_SIZE;
use customer_portal_core::services::DEFAULT_PHOTO_REFRESH_PERIOD;
use customer_portal_core::viewport::DEFAULT_NARROW_BREAKPOINT;
use customer_portal_core::{Breakpoint, PageSize, PortalError, PortalResult};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 主循环轮询间隔的下限（毫秒）
const MIN_TICK_RATE_MS: u64 = 10;

/// 应用配置
///
/// 缺失的字段使用默认值。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// 每页客户数
    pub page_size: usize,
    /// 窄布局断点（布局单位，每列终端字符 = 8 单位）
    pub narrow_breakpoint: u32,
    /// 照片刷新间隔（秒）
    pub photo_refresh_secs: u64,
    /// 主循环轮询间隔（毫秒）
    pub tick_rate_ms: u64,
    /// 主题
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            narrow_breakpoint: DEFAULT_NARROW_BREAKPOINT,
            photo_refresh_secs: DEFAULT_PHOTO_REFRESH_PERIOD.as_secs(),
            tick_rate_ms: 100,
            theme: Theme::Dark,
        }
    }
}

impl AppConfig {
    /// 校验配置值
    pub fn validate(&self) -> PortalResult<()> {
        PageSize::new(self.page_size)
            .map_err(|e| PortalError::ConfigError(format!("pageSize: {e}")))?;

        if self.narrow_breakpoint == 0 {
            return Err(PortalError::ConfigError(
                "narrowBreakpoint must be greater than 0".to_string(),
            ));
        }
        if self.photo_refresh_secs == 0 {
            return Err(PortalError::ConfigError(
                "photoRefreshSecs must be at least 1".to_string(),
            ));
        }
        if self.tick_rate_ms < MIN_TICK_RATE_MS {
            return Err(PortalError::ConfigError(format!(
                "tickRateMs must be at least {MIN_TICK_RATE_MS}"
            )));
        }
        Ok(())
    }

    pub fn page_size(&self) -> PortalResult<PageSize> {
        PageSize::new(self.page_size)
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint(self.narrow_breakpoint)
    }

    pub fn photo_refresh_period(&self) -> Duration {
        Duration::from_secs(self.photo_refresh_secs)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务（JSON 文件）
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// `path` 为空时使用 `<config_dir>/customer-portal/config.json`
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(|| super::config_dir().join("config.json")),
        }
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            log::info!("No config file at {}, using defaults", self.path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .map_err(PortalError::from)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;
        config.validate()?;

        log::info!("Loaded config from {}", self.path.display());
        Ok(config)
    }
}
