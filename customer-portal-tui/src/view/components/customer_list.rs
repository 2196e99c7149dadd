//! 客户列表组件

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::model::App;
use crate::util::truncate;
use crate::view::theme::Styles;

use super::paginator;

/// 光标标记
const CURSOR_MARK: &str = "▶ ";
const NO_MARK: &str = "  ";

/// 渲染当前页的客户列表和分页器
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Customers ")
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 列表
            Constraint::Length(1), // 分页器
        ])
        .split(inner);

    let customers = app.portal.visible_customers();
    if customers.is_empty() {
        render_empty(frame, sections[0]);
    } else {
        render_rows(app, frame, sections[0]);
    }

    paginator::render(app.portal.pagination(), frame, sections[1]);
}

/// 渲染空状态
fn render_empty(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::styled("  No customers on this page", Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染客户行：姓名 + 职位两行一条
fn render_rows(app: &App, frame: &mut Frame, area: Rect) {
    // 选中高亮只在宽布局显示，窄布局由浮层表达选中
    let highlight_selection = !app.viewport().is_narrow();
    let text_width = usize::from(area.width).saturating_sub(CURSOR_MARK.chars().count());

    let items: Vec<ListItem> = app
        .portal
        .visible_customers()
        .iter()
        .enumerate()
        .map(|(i, customer)| {
            let mark = if i == app.list.cursor { CURSOR_MARK } else { NO_MARK };
            let is_selected = highlight_selection && app.portal.is_selected(&customer.id);

            let (name_style, title_style) = if is_selected {
                (Styles::selected(), Styles::selected())
            } else {
                (Styles::title(), Styles::muted())
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::raw(mark),
                    Span::styled(truncate(&customer.name, text_width), name_style),
                ]),
                Line::from(vec![
                    Span::raw(NO_MARK),
                    Span::styled(truncate(&customer.title, text_width), title_style),
                ]),
            ])
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.list.cursor));

    frame.render_stateful_widget(list, area, &mut state);
}
