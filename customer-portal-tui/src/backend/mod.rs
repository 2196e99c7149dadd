//!
//! src/backend/mod.rs
//! Backend 层：为 UI 提供数据与配置
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（config.json）
//!         mod customer_source;    // 客户数据（customers.json，缺省时使用内置示例数据）
//!
//! 两个文件都位于配置目录下：
//!     Linux:   ~/.config/customer-portal/
//!     macOS:   ~/Library/Application Support/customer-portal/
//!     Windows: %APPDATA%\customer-portal\
//!

mod config_service;
mod customer_source;

use std::path::PathBuf;

pub use config_service::{ConfigService, LocalConfigService};
pub use customer_source::JsonCustomerSource;

/// 应用目录名
const APP_DIR_NAME: &str = "customer-portal";

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// 获取缓存目录路径（日志文件）
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}
