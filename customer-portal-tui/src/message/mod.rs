//!
//! src/message/mod.rs
//! Message 层：事件到状态变更之间的“翻译结果”
//!
//! Event 层把原始按键翻译成 Message，Update 层消费 Message 并修改 Model。
//! Message 本身不携带任何逻辑，只描述“发生了什么”。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // 应用主消息 AppMessage
//!         mod modal;      // 弹窗消息 ModalMessage
//!         mod portal;     // 客户列表 / 分页 / 详情浮层消息 PortalMessage
//!
//!
//! 除按键外，还有两类非用户输入的消息：
//!     - AppMessage::Resize           终端大小改变
//!     - AppMessage::PhotosRefreshed  照片刷新任务发布了新的一批 URL
//!

mod app;
mod modal;
mod portal;

pub use app::AppMessage;
pub use modal::ModalMessage;
pub use portal::PortalMessage;
