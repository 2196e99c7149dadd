//! Customer Portal TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与客户数据 (`backend/`)
//!
//! 启动顺序：
//!     init_logging()          // 日志写入缓存目录
//!     LocalConfigService      // 读取 config.json
//!     JsonCustomerSource      // 读取 customers.json，缺省用示例数据
//!     init_terminal()
//!     PhotoRefresher::start() // 照片定时刷新
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use customer_portal_core::{CustomerCatalog, CustomerSource, PhotoRefresher, PortalController};

use backend::{ConfigService, JsonCustomerSource, LocalConfigService};
use util::{
    init_logging, init_terminal, install_panic_hook, restore_terminal, terminal_columns,
};

/// 终端客户门户：分页浏览客户、查看详情与照片墙
#[derive(Debug, Parser)]
#[command(name = "customer-portal", version, about)]
struct Cli {
    /// 配置文件路径（默认 <config_dir>/customer-portal/config.json）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 客户数据文件路径（默认 <config_dir>/customer-portal/customers.json）
    #[arg(long)]
    customers: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 日志失败不影响使用
    match init_logging() {
        Ok(path) => log::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Logging disabled: {e:#}"),
    }

    // 1. 配置与数据
    let config = LocalConfigService::new(cli.config).load()?;
    view::theme::set_theme(config.theme);

    let records = JsonCustomerSource::new(cli.customers).load()?;
    let catalog = CustomerCatalog::new(records).context("Invalid customer data")?;
    log::info!("Loaded {} customers", catalog.len());

    let portal = PortalController::new(catalog, config.page_size()?);

    // 2. 照片刷新任务的运行时，须比刷新句柄活得更久
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    // 3. 创建应用实例（终端宽度在进入原始模式前读取）
    let mut app = model::App::new(portal, config.breakpoint(), terminal_columns());

    // 4. 初始化终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 5. 运行主循环
    let mut photos = PhotoRefresher::start(runtime.handle(), config.photo_refresh_period());
    let result = app::run(&mut terminal, &mut app, &mut photos, config.tick_rate());
    photos.stop();

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {e:#}");
    }
    result
}
