//! 应用主状态结构

use chrono::{DateTime, Local};
use customer_portal_core::{Breakpoint, DetailSurface, PortalController, Viewport};

use super::{CustomerListState, ModalState};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 客户门户状态（选择、分页、详情浮层、照片）
    pub portal: PortalController,

    /// 窄布局断点
    pub breakpoint: Breakpoint,

    /// 当前终端宽度（列）
    pub terminal_width: u16,

    /// 列表光标
    pub list: CustomerListState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 最近一次照片刷新时间
    pub last_photo_refresh: Option<DateTime<Local>>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(portal: PortalController, breakpoint: Breakpoint, terminal_width: u16) -> Self {
        Self {
            should_quit: false,
            portal,
            breakpoint,
            terminal_width,
            list: CustomerListState::new(),
            modal: ModalState::new(),
            status_message: None,
            last_photo_refresh: None,
        }
    }

    /// 当前视口（按终端宽度即时计算）
    pub fn viewport(&self) -> Viewport {
        Viewport::from_terminal_columns(self.terminal_width, self.breakpoint)
    }

    /// 详情内容当前显示在哪里
    pub fn detail_surface(&self) -> DetailSurface {
        self.portal.detail_surface(self.viewport())
    }

    /// 当前页的行数
    pub fn visible_rows(&self) -> usize {
        self.portal.visible_customers().len()
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
