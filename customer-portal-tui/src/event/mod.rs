//!
//! src/event/mod.rs
//! Event 层：输入处理
//!
//! 负责从终端读取原始事件（按键、窗口大小变化），
//! 并根据当前 Model 把它们翻译成 AppMessage。
//!
//!     poll_event(timeout)        // 等待输入，超时返回 None
//!     handle_event(event, &app)  // 原始事件 → AppMessage
//!
//! 按键的分发顺序：
//!     1. 只处理 Press 事件
//!     2. Ctrl+c 始终退出
//!     3. 有浮层（帮助弹窗或详情浮层）时，交给浮层处理；Esc 等按键触发浮层的关闭消息
//!     4. 全局快捷键（帮助、退出）
//!     5. 列表与分页按键
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
