//! 客户详情组件
//!
//! 宽布局的详情面板和窄布局的详情浮层共用这一个渲染函数。

use customer_portal_core::{CustomerRecord, PhotoBatch};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::view::theme::{colors, Styles};

/// 照片墙列数
const GRID_COLUMNS: usize = 3;

/// 每个照片格子的高度（含边框）
const CELL_HEIGHT: u16 = 3;

/// 未选中客户时的提示
pub const PLACEHOLDER: &str = "Select a customer to see details";

/// 渲染客户详情；`customer` 为空时显示提示
pub fn render(
    frame: &mut Frame,
    area: Rect,
    customer: Option<&CustomerRecord>,
    photos: &PhotoBatch,
) {
    let Some(customer) = customer else {
        render_placeholder(frame, area);
        return;
    };

    let grid_rows = photos.urls().len().div_ceil(GRID_COLUMNS);
    let grid_height = CELL_HEIGHT.saturating_mul(u16::try_from(grid_rows).unwrap_or(u16::MAX));

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // 姓名, 职位
            Constraint::Length(1),           // 地址
            Constraint::Length(1),           // 空行
            Constraint::Min(2),              // 描述
            Constraint::Length(grid_height), // 照片墙
        ])
        .split(area);

    let header = Line::from(vec![
        Span::styled(format!("{}, ", customer.name), Styles::title()),
        Span::styled(customer.title.as_str(), Styles::muted()),
    ]);
    frame.render_widget(
        Paragraph::new(header).alignment(Alignment::Center),
        sections[0],
    );

    frame.render_widget(
        Paragraph::new(customer.address.as_str())
            .style(Styles::muted())
            .alignment(Alignment::Center),
        sections[1],
    );

    frame.render_widget(
        Paragraph::new(customer.description.as_str())
            .style(Styles::muted())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        sections[3],
    );

    render_photo_grid(frame, sections[4], photos);
}

fn render_placeholder(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(vec![Line::from(""), Line::from(PLACEHOLDER)])
        .style(Styles::muted())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// 3 × 3 照片墙，每格显示图片地址
fn render_photo_grid(frame: &mut Frame, area: Rect, photos: &PhotoBatch) {
    let c = colors();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            photos
                .urls()
                .chunks(GRID_COLUMNS)
                .map(|_| Constraint::Length(CELL_HEIGHT)),
        )
        .split(area);

    for (row, (urls, row_area)) in photos
        .urls()
        .chunks(GRID_COLUMNS)
        .zip(row_areas.iter())
        .enumerate()
    {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); GRID_COLUMNS])
            .split(*row_area);

        for (col, (url, cell)) in urls.iter().zip(cells.iter()).enumerate() {
            let index = row * GRID_COLUMNS + col;
            let block = Block::default()
                .title(format!(" Photo {} ", index + 1))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(c.accent));
            frame.render_widget(Paragraph::new(url.as_str()).block(block), *cell);
        }
    }
}
