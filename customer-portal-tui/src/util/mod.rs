//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务无关的代码放在这里：
//!     mod logging;        // 日志输出到文件（终端被 TUI 占用）
//!     mod terminal;       // 终端初始化和恢复
//!     mod text;           // 按显示宽度截断文本
//!

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, terminal_columns, Term};
pub use text::truncate;
