//! 客户门户消息
//!
//! 列表光标、选择、分页与详情浮层

/// 客户门户消息
#[derive(Debug, Clone)]
pub enum PortalMessage {
    // ========== 列表光标 ==========
    /// 光标上移
    CursorUp,
    /// 光标下移
    CursorDown,
    /// 光标跳到第一行
    CursorFirst,
    /// 光标跳到最后一行
    CursorLast,
    /// 选中光标所在的客户
    SelectAtCursor,

    // ========== 分页 ==========
    /// 下一页
    NextPage,
    /// 上一页
    PreviousPage,
    /// 跳到指定页（从 0 开始）
    GoToPage(usize),

    // ========== 详情浮层 ==========
    /// 关闭详情浮层
    CloseOverlay,
}
