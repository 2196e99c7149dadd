//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use customer_portal_core::DetailSurface;

use crate::event::keymap::{DefaultKeymap, KeyBinding};
use crate::message::{AppMessage, ModalMessage, PortalMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, _) => AppMessage::Resize { width },
        _ => AppMessage::Noop,
    }
}

/// 当前最上层浮层的关闭消息
///
/// 帮助弹窗在详情浮层之上，优先关闭。
fn dismiss_message(app: &App) -> Option<AppMessage> {
    if app.modal.is_open() {
        Some(AppMessage::Modal(ModalMessage::Close))
    } else if app.detail_surface() == DetailSurface::Overlay {
        Some(AppMessage::Portal(PortalMessage::CloseOverlay))
    } else {
        None
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 浮层打开时，只接受关闭和退出
    if let Some(dismiss) = dismiss_message(app) {
        return handle_overlay_keys(key, app, dismiss);
    }

    if is_help_key(&key) {
        return AppMessage::ShowHelp;
    }

    if KeyBinding::any(&DefaultKeymap::QUIT, &key) {
        return AppMessage::Quit;
    }

    handle_list_keys(key, app)
}

/// 处理浮层中的按键
fn handle_overlay_keys(key: KeyEvent, app: &App, dismiss: AppMessage) -> AppMessage {
    if KeyBinding::any(&DefaultKeymap::DISMISS, &key) {
        return dismiss;
    }

    if app.modal.is_open() {
        // 帮助弹窗：Enter、? 同样关闭
        if DefaultKeymap::SELECT.matches(&key) || is_help_key(&key) {
            return dismiss;
        }
        return AppMessage::Noop;
    }

    // 详情浮层
    if KeyBinding::any(&DefaultKeymap::QUIT, &key) {
        return AppMessage::Quit;
    }
    if is_help_key(&key) {
        return AppMessage::ShowHelp;
    }
    AppMessage::Noop
}

/// 处理列表与分页按键
fn handle_list_keys(key: KeyEvent, app: &App) -> AppMessage {
    if KeyBinding::any(&DefaultKeymap::CURSOR_UP, &key) {
        return AppMessage::Portal(PortalMessage::CursorUp);
    }
    if KeyBinding::any(&DefaultKeymap::CURSOR_DOWN, &key) {
        return AppMessage::Portal(PortalMessage::CursorDown);
    }
    if DefaultKeymap::CURSOR_FIRST.matches(&key) {
        return AppMessage::Portal(PortalMessage::CursorFirst);
    }
    if DefaultKeymap::CURSOR_LAST.matches(&key) {
        return AppMessage::Portal(PortalMessage::CursorLast);
    }
    if DefaultKeymap::SELECT.matches(&key) {
        return AppMessage::Portal(PortalMessage::SelectAtCursor);
    }
    if KeyBinding::any(&DefaultKeymap::PREVIOUS_PAGE, &key) {
        return AppMessage::Portal(PortalMessage::PreviousPage);
    }
    if KeyBinding::any(&DefaultKeymap::NEXT_PAGE, &key) {
        return AppMessage::Portal(PortalMessage::NextPage);
    }

    // 数字键 1-9：跳到对应页，只接受存在的页
    if let (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='9')) = (key.modifiers, key.code) {
        let page = c.to_digit(10).map_or(0, |d| d as usize - 1);
        if page < app.portal.page_count() {
            return AppMessage::Portal(PortalMessage::GoToPage(page));
        }
    }

    AppMessage::Noop
}

/// `?` 在多数终端上带 Shift 修饰
fn is_help_key(key: &KeyEvent) -> bool {
    KeyBinding::any(&DefaultKeymap::HELP, key)
        || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Char('?'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_app, NARROW_COLUMNS, WIDE_COLUMNS};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn resize_is_reported_with_width() {
        let app = test_app(25, WIDE_COLUMNS);
        assert!(matches!(
            handle_event(Event::Resize(70, 30), &app),
            AppMessage::Resize { width: 70 }
        ));
    }

    #[test]
    fn list_keys_map_to_portal_messages() {
        let app = test_app(25, WIDE_COLUMNS);
        assert!(matches!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Portal(PortalMessage::CursorDown)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Portal(PortalMessage::SelectAtCursor)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Portal(PortalMessage::NextPage)
        ));
    }

    #[test]
    fn digit_keys_only_offer_existing_pages() {
        let app = test_app(25, WIDE_COLUMNS);
        assert!(matches!(
            handle_event(press(KeyCode::Char('3')), &app),
            AppMessage::Portal(PortalMessage::GoToPage(2))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('4')), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn escape_dismisses_detail_overlay() {
        let mut app = test_app(25, NARROW_COLUMNS);
        let viewport = app.viewport();
        app.portal.select_customer(&"c7".into(), viewport).unwrap();

        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Portal(PortalMessage::CloseOverlay)
        ));
        // 浮层打开时列表按键无效
        assert!(matches!(
            handle_event(press(KeyCode::Down), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn backspace_dismisses_overlay_but_left_does_not() {
        let mut app = test_app(25, NARROW_COLUMNS);
        let viewport = app.viewport();
        app.portal.select_customer(&"c4".into(), viewport).unwrap();

        assert!(matches!(
            handle_event(press(KeyCode::Backspace), &app),
            AppMessage::Portal(PortalMessage::CloseOverlay)
        ));
        // ← 只用于翻页，浮层打开时不做任何事
        assert!(matches!(
            handle_event(press(KeyCode::Left), &app),
            AppMessage::Noop
        ));
    }

    #[test]
    fn help_modal_is_dismissed_before_overlay() {
        let mut app = test_app(25, NARROW_COLUMNS);
        let viewport = app.viewport();
        app.portal.select_customer(&"c2".into(), viewport).unwrap();
        app.modal.show_help();

        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::Modal(ModalMessage::Close)
        ));
    }

    #[test]
    fn left_arrow_pages_when_no_overlay() {
        let app = test_app(25, NARROW_COLUMNS);
        // 窄布局、未打开浮层：← 用于翻页
        assert!(matches!(
            handle_event(press(KeyCode::Left), &app),
            AppMessage::Portal(PortalMessage::PreviousPage)
        ));
    }

    #[test]
    fn ctrl_c_always_quits() {
        let mut app = test_app(25, WIDE_COLUMNS);
        app.modal.show_help();
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(handle_event(event, &app), AppMessage::Quit));
    }

    #[test]
    fn shifted_question_mark_opens_help() {
        let app = test_app(25, WIDE_COLUMNS);
        let event = Event::Key(KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(matches!(handle_event(event, &app), AppMessage::ShowHelp));
    }
}
