//! 帮助弹窗

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::Modal;

use super::overlay::{Overlay, OverlaySize};

const SHORTCUTS: [(&str, &str); 8] = [
    ("↑↓ / jk", "Move cursor"),
    ("Home/End", "First / last row"),
    ("Enter", "Select customer"),
    ("←→ / hl", "Previous / next page"),
    ("1-9", "Jump to page"),
    ("Esc / ⌫", "Close details / dialog"),
    ("?", "Help"),
    ("q", "Quit"),
];

/// 渲染帮助弹窗（如果打开）
pub fn render(frame: &mut Frame, modal: Option<&Modal>) {
    let height = u16::try_from(SHORTCUTS.len()).unwrap_or(u16::MAX).saturating_add(4);
    Overlay::new("Help")
        .visible(matches!(modal, Some(Modal::Help)))
        .dismiss_hint("Esc Close")
        .size(OverlaySize::Centered { width: 46, height })
        .render(frame, |frame, inner| {
            let mut lines = vec![
                Line::styled(
                    "Keyboard shortcuts",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Line::from(""),
            ];
            lines.extend(SHORTCUTS.iter().map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("  {key:<10}"), Style::default().fg(Color::Yellow)),
                    Span::raw(*desc),
                ])
            }));
            frame.render_widget(Paragraph::new(lines), inner);
        });
}
