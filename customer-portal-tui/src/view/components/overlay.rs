//! 通用浮层组件
//!
//! 浮层不可见时什么都不渲染；可见时清空所在区域，
//! 在所有内容之上绘制边框、标题和关闭提示，再把内部区域交给调用方绘制任意内容。
//! 关闭按键由 event/handler.rs 翻译为对应浮层的关闭消息。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::view::theme::colors;

/// 浮层尺寸
#[derive(Debug, Clone, Copy)]
pub enum OverlaySize {
    /// 占满整个终端
    FullScreen,
    /// 居中显示，超出终端时收缩
    Centered { width: u16, height: u16 },
}

/// 浮层
pub struct Overlay<'a> {
    visible: bool,
    title: &'a str,
    dismiss_hint: &'a str,
    size: OverlaySize,
}

impl<'a> Overlay<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            visible: true,
            title,
            dismiss_hint: "Esc Close",
            size: OverlaySize::FullScreen,
        }
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn dismiss_hint(mut self, hint: &'a str) -> Self {
        self.dismiss_hint = hint;
        self
    }

    pub fn size(mut self, size: OverlaySize) -> Self {
        self.size = size;
        self
    }

    /// 渲染浮层，`content` 负责绘制内部区域
    pub fn render(self, frame: &mut Frame, content: impl FnOnce(&mut Frame, Rect)) {
        if !self.visible {
            return;
        }

        let c = colors();
        let screen = frame.area();
        let area = match self.size {
            OverlaySize::FullScreen => screen,
            OverlaySize::Centered { width, height } => {
                // 暗化背景
                frame
                    .buffer_mut()
                    .set_style(screen, Style::default().fg(c.backdrop));
                centered_rect(width, height, screen)
            }
        };

        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
            .title_bottom(
                Line::from(format!(" {} ", self.dismiss_hint)).alignment(Alignment::Left),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.highlight))
            .style(Style::default().bg(c.bg));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        content(frame, inner);
    }
}

/// 计算居中区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, widgets::Paragraph, Terminal};

    use super::*;
    use crate::test_utils::buffer_text;

    #[test]
    fn centered_rect_shrinks_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(10, 3, 20, 4));
        assert_eq!(centered_rect(100, 100, area), area);
    }

    #[test]
    fn hidden_overlay_draws_nothing() {
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        let mut called = false;
        terminal
            .draw(|frame| {
                Overlay::new("Hidden")
                    .visible(false)
                    .render(frame, |_, _| called = true);
            })
            .unwrap();

        assert!(!called);
        assert!(!buffer_text(&terminal).contains("Hidden"));
    }

    #[test]
    fn visible_overlay_draws_title_hint_and_content() {
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal
            .draw(|frame| {
                Overlay::new("Shown")
                    .dismiss_hint("Esc Back")
                    .size(OverlaySize::Centered {
                        width: 30,
                        height: 6,
                    })
                    .render(frame, |f, inner| {
                        f.render_widget(Paragraph::new("inside"), inner);
                    });
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Shown"));
        assert!(text.contains("Esc Back"));
        assert!(text.contains("inside"));
    }
}
