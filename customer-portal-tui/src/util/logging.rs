//! 日志初始化
//!
//! TUI 占用 stdout，日志写入 `<cache_dir>/customer-portal/portal.log`。
//! 级别由 `RUST_LOG` 控制，默认 `info`。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

use crate::backend::cache_dir;

/// 日志文件名
const LOG_FILE_NAME: &str = "portal.log";

/// 初始化 env_logger，返回日志文件路径
pub fn init_logging() -> Result<PathBuf> {
    let dir = cache_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("Logger already initialized")?;

    Ok(path)
}
