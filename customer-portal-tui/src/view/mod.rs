//!
//! src/view/mod.rs
//! View 层：只读 Model，渲染 UI
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;         // 主布局：标题栏 + 内容区 + 状态栏，按视口选择宽 / 窄布局
//!         mod components;     // 列表、分页器、详情、浮层、帮助、状态栏
//!         pub mod theme;      // 颜色与样式
//!
//! 宽布局：
//!     ┌──────────────── Customer Portal ────────────────┐
//!     │ 客户列表 (35%)      │ 详情面板 (65%)             │
//!     │ ← Previous 1 2 3 →  │ 姓名, 职位 / 地址 / 照片墙  │
//!     └──────────────────── 状态栏 ─────────────────────┘
//!
//! 窄布局：
//!     列表占满宽度；选中客户后，详情以全屏浮层显示在最上层。
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
