//! 分页器组件
//!
//! `← Previous 1 2 … 9 10 Next →`，当前页高亮，两端不可用时变暗。

use customer_portal_core::{PageLink, Pagination};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view::theme::Styles;

/// 渲染分页器
pub fn render(pagination: Pagination, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(paginator_line(pagination)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// 生成分页器的一行内容
pub fn paginator_line(pagination: Pagination) -> Line<'static> {
    let enabled = |on: bool| if on { Styles::hint_desc() } else { Styles::muted() };

    let mut spans = vec![Span::styled("← Previous ", enabled(pagination.has_previous()))];

    for link in pagination.links() {
        match link {
            PageLink::Page(index) => {
                let label = format!(" {} ", index + 1);
                if index == pagination.current_page {
                    spans.push(Span::styled(label, Styles::selected()));
                } else {
                    spans.push(Span::raw(label));
                }
            }
            PageLink::Break => spans.push(Span::styled(" … ", Styles::muted())),
        }
    }

    spans.push(Span::styled(" Next →", enabled(pagination.has_next())));
    Line::from(spans)
}
