//! 终端初始化和恢复

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// 读不到终端尺寸时假定的列数
const FALLBACK_COLUMNS: u16 = 80;

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端
pub fn init_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// 当前终端列数，读取失败时退回 80 列
///
/// 在 `init_terminal()` 之前调用，之后到主循环之间不再有会失败的步骤。
pub fn terminal_columns() -> u16 {
    match terminal::size() {
        Ok((columns, _)) if columns > 0 => columns,
        Ok(_) => FALLBACK_COLUMNS,
        Err(e) => {
            log::warn!("Failed to read terminal size: {e}");
            FALLBACK_COLUMNS
        }
    }
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// panic 时先恢复终端，否则错误信息会被备用屏幕吞掉
pub fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        log::error!("Panic: {info}");
        original(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_columns_is_never_zero() {
        // 测试环境可能没有 tty，此时使用默认列数
        assert!(terminal_columns() > 0);
    }
}
