//!
//! src/update/mod.rs
//! Update 层：消费 Message，修改 Model
//!
//! 所有状态变更都集中在这里发生：
//!     update(&mut app, msg)
//!         ├── AppMessage::Portal(..)          → update/portal.rs
//!         ├── AppMessage::Modal(..)           → update/modal.rs
//!         ├── AppMessage::Resize { width }    → 记录终端宽度
//!         └── AppMessage::PhotosRefreshed(..) → 整体替换照片
//!
//! 终端宽度变化只影响布局，不会打开或关闭详情浮层：
//! 窄 / 宽的判断只在选中客户的那一刻进行。
//!

mod modal;
mod portal;

use chrono::Local;

use crate::message::AppMessage;
use crate::model::App;

/// 处理消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Portal(portal_msg) => {
            portal::update(app, portal_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Resize { width } => {
            app.terminal_width = width;
        }

        AppMessage::PhotosRefreshed(batch) => {
            log::debug!("Photo batch #{} received", batch.generation());
            app.portal.replace_photos(batch);
            app.last_photo_refresh = Some(Local::now());
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}
