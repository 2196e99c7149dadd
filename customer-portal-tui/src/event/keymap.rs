//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }

    /// 匹配任意一个绑定
    pub fn any(bindings: &[KeyBinding], key: &KeyEvent) -> bool {
        bindings.iter().any(|b| b.matches(key))
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Char('q')),
        KeyBinding::alt(KeyCode::Char('q')),
    ];
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Char('?')),
        KeyBinding::alt(KeyCode::Char('h')),
    ];

    // 浮层
    pub const DISMISS: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Esc),
        KeyBinding::key(KeyCode::Backspace),
    ];

    // 列表
    pub const CURSOR_UP: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Up),
        KeyBinding::key(KeyCode::Char('k')),
    ];
    pub const CURSOR_DOWN: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Down),
        KeyBinding::key(KeyCode::Char('j')),
    ];
    pub const CURSOR_FIRST: KeyBinding = KeyBinding::key(KeyCode::Home);
    pub const CURSOR_LAST: KeyBinding = KeyBinding::key(KeyCode::End);
    pub const SELECT: KeyBinding = KeyBinding::key(KeyCode::Enter);

    // 分页
    pub const PREVIOUS_PAGE: [KeyBinding; 3] = [
        KeyBinding::key(KeyCode::Left),
        KeyBinding::key(KeyCode::Char('h')),
        KeyBinding::key(KeyCode::PageUp),
    ];
    pub const NEXT_PAGE: [KeyBinding; 3] = [
        KeyBinding::key(KeyCode::Right),
        KeyBinding::key(KeyCode::Char('l')),
        KeyBinding::key(KeyCode::PageDown),
    ];
}
