//! 主布局渲染

use customer_portal_core::DetailSurface;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::App;

use super::components::{customer_list, detail, help, overlay::Overlay, statusbar};
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(frame, title_area);

    if app.viewport().is_narrow() {
        // 窄布局：列表占满宽度
        customer_list::render(app, frame, content_area);
    } else {
        // 宽布局：左右分栏
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(35), // 客户列表
                Constraint::Percentage(65), // 详情面板
            ])
            .split(content_area);

        customer_list::render(app, frame, columns[0]);
        render_detail_pane(app, frame, columns[1]);
    }

    statusbar::render(app, frame, status_area);

    // 详情浮层（窄布局）
    let overlay_visible = app.detail_surface() == DetailSurface::Overlay;
    if let Some(customer) = app.portal.selected_customer() {
        Overlay::new(&customer.name)
            .visible(overlay_visible)
            .dismiss_hint("Esc Back")
            .render(frame, |frame, inner| {
                detail::render(frame, inner, Some(customer), &app.portal.state().photos);
            });
    }

    // 帮助弹窗（在最上层）
    help::render(frame, app.modal.active.as_ref());
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new("Customer Portal")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .bg(c.highlight)
                .fg(c.selected_fg)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(title, area);
}

/// 渲染宽布局的详情面板
fn render_detail_pane(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Details ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    detail::render(
        frame,
        inner,
        app.portal.selected_customer(),
        &app.portal.state().photos,
    );
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::test_utils::{buffer_text, test_app, NARROW_COLUMNS, WIDE_COLUMNS};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(app.terminal_width, 40)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        buffer_text(&terminal)
    }

    #[test]
    fn wide_layout_shows_list_and_detail_pane() {
        let app = test_app(25, WIDE_COLUMNS);
        let text = draw(&app);

        assert!(text.contains("Customer Portal"));
        assert!(text.contains("Customers"));
        assert!(text.contains("Details"));
        assert!(text.contains("Customer 1,"));
        assert!(text.contains("Photo 9"));
    }

    #[test]
    fn wide_layout_without_customers_shows_placeholder() {
        let app = test_app(0, WIDE_COLUMNS);
        let text = draw(&app);

        assert!(text.contains(detail::PLACEHOLDER));
        assert!(text.contains("No customers on this page"));
    }

    #[test]
    fn narrow_layout_hides_detail_until_selected() {
        let mut app = test_app(25, NARROW_COLUMNS);
        let text = draw(&app);
        assert!(!text.contains("Details"));
        assert!(!text.contains("Photo 1"));

        let viewport = app.viewport();
        app.portal.select_customer(&"c3".into(), viewport).unwrap();
        let text = draw(&app);
        assert!(text.contains("Customer 3,"));
        assert!(text.contains("Esc Back"));
        assert!(text.contains("Photo 1"));
    }

    #[test]
    fn help_modal_is_drawn_on_top() {
        let mut app = test_app(25, WIDE_COLUMNS);
        app.modal.show_help();
        let text = draw(&app);
        assert!(text.contains("Keyboard shortcuts"));
    }
}
