//! 底部状态栏组件

use customer_portal_core::DetailSurface;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，接在快捷键提示之后
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(34)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::statusbar()),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(summary(app))
            .style(Styles::statusbar())
            .alignment(Alignment::Right),
        columns[1],
    );
}

/// 右侧摘要：页码与最近一次照片刷新时间
fn summary(app: &App) -> String {
    let page_count = app.portal.page_count();
    let page = if page_count == 0 {
        "Page 0/0".to_string()
    } else {
        format!("Page {}/{}", app.portal.state().current_page + 1, page_count)
    };

    match app.last_photo_refresh {
        Some(at) => format!("{page} · Photos {} ", at.format("%H:%M:%S")),
        None => format!("{page} "),
    }
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.modal.is_open() {
        return vec![("Esc", "Close")];
    }

    match app.detail_surface() {
        DetailSurface::Overlay => vec![("Esc", "Back"), ("?", "Help"), ("q", "Quit")],
        _ => vec![
            ("↑↓", "Move"),
            ("Enter", "Select"),
            ("←→", "Page"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
    }
}
