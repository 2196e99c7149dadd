//!
//! app.rs
//! 应用主循环
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     photos.try_latest()                             // 取出刷新任务发布的新照片
//!         → update(PhotosRefreshed)
//!     if let Some(event) = poll_event(tick_rate) {    // 等待输入，最多 tick_rate
//!         let msg = handle_event(event, &app);
//!         update::update(&mut app, msg)
//!     }
//! }
//!
//! 照片刷新任务运行在 tokio 运行时上，主循环只做非阻塞读取；
//! 即使没有按键，每个 tick 也会检查一次并重绘。
//!

use std::time::Duration;

use anyhow::Result;
use customer_portal_core::PhotoRefreshHandle;

use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    photos: &mut PhotoRefreshHandle,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 照片刷新
        if let Some(batch) = photos.try_latest() {
            update::update(app, AppMessage::PhotosRefreshed(batch));
        }

        // 4. 轮询事件
        if let Some(event) = event::poll_event(tick_rate)? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }
    }

    Ok(())
}
