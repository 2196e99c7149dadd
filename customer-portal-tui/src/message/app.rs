//! 应用主消息枚举

use customer_portal_core::PhotoBatch;

use super::{ModalMessage, PortalMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 客户门户相关消息
    Portal(PortalMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 终端窗口大小改变
    Resize { width: u16 },

    /// 照片刷新任务发布了新的一批照片
    PhotosRefreshed(PhotoBatch),

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
