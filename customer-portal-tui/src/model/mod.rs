//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         pub mod state;      // 列表光标、弹窗等界面状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub portal: PortalController,           // 选择 / 分页 / 详情浮层（来自 core）
//!             pub terminal_width: u16,                // 最近一次得知的终端宽度
//!             pub list: CustomerListState,            // 列表光标
//!             pub modal: ModalState,                  // 帮助弹窗
//!             pub status_message: Option<String>,     // 状态栏消息
//!             pub last_photo_refresh: Option<...>,    // 最近一次照片刷新时间
//!         }
//!
//!     业务状态（选中客户、当前页、详情浮层是否打开、照片）全部由
//!     `customer_portal_core::PortalController` 持有，App 只保存与终端相关的部分。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、视口（Viewport）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     终端宽度按每列 8 个布局单位换算，宽度低于断点（默认 768 单位 = 96 列）
//!     时为窄布局：列表全屏，选中客户后以全屏浮层显示详情。
//!
//!     数据流：
//!         终端窗口大小改变
//!             ↓
//!         event/handler.rs 返回 AppMessage::Resize { width }
//!             ↓
//!         update/mod.rs 更新 app.terminal_width（不改变浮层开关）
//!             ↓
//!         view/layout.rs 根据 app.viewport() 选择布局
//!

mod app;
pub mod state;

pub use app::App;
pub use state::{CustomerListState, Modal, ModalState};
