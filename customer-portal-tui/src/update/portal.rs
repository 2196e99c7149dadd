//! 客户门户更新逻辑

use customer_portal_core::DetailSurface;

use crate::message::PortalMessage;
use crate::model::App;

/// 处理客户门户消息
pub fn update(app: &mut App, msg: PortalMessage) {
    match msg {
        PortalMessage::CursorUp => app.list.select_previous(),
        PortalMessage::CursorDown => {
            let rows = app.visible_rows();
            app.list.select_next(rows);
        }
        PortalMessage::CursorFirst => app.list.select_first(),
        PortalMessage::CursorLast => {
            let rows = app.visible_rows();
            app.list.select_last(rows);
        }
        PortalMessage::SelectAtCursor => select_at_cursor(app),

        PortalMessage::NextPage => {
            app.portal.next_page();
            after_page_change(app);
        }
        PortalMessage::PreviousPage => {
            app.portal.previous_page();
            after_page_change(app);
        }
        PortalMessage::GoToPage(page) => {
            app.portal.go_to_page(page);
            after_page_change(app);
        }

        PortalMessage::CloseOverlay => {
            app.portal.close_overlay();
            if app.detail_surface() == DetailSurface::Hidden {
                app.set_status("Press Enter to show details again");
            }
        }
    }
}

/// 选中光标所在的客户
fn select_at_cursor(app: &mut App) {
    let Some(id) = app
        .portal
        .visible_customers()
        .get(app.list.cursor)
        .map(|c| c.id.clone())
    else {
        return;
    };

    let viewport = app.viewport();
    match app.portal.select_customer(&id, viewport) {
        Ok(()) => app.clear_status(),
        Err(e) => {
            if e.is_expected() {
                log::warn!("Select customer failed: {e}");
            } else {
                log::error!("Select customer failed: {e}");
            }
            app.set_status(e.to_string());
        }
    }
}

fn after_page_change(app: &mut App) {
    app.list.select_first();
    app.clear_status();
}
