//! 客户列表光标状态

/// 当前页内的光标（行号）
///
/// 光标只表示键盘所在的行，按 Enter 才会真正选中客户。
#[derive(Debug, Default)]
pub struct CustomerListState {
    /// 当前页内的行索引
    pub cursor: usize,
}

impl CustomerListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 上移一行
    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 下移一行（`rows` 为当前页的行数）
    pub fn select_next(&mut self, rows: usize) {
        if rows > 0 && self.cursor < rows - 1 {
            self.cursor += 1;
        }
    }

    /// 跳到第一行
    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// 跳到最后一行
    pub fn select_last(&mut self, rows: usize) {
        self.cursor = rows.saturating_sub(1);
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_stays_within_rows() {
        let mut list = CustomerListState::new();
        list.select_previous();
        assert_eq!(list.cursor, 0);

        for _ in 0..20 {
            list.select_next(5);
        }
        assert_eq!(list.cursor, 4);

        list.select_first();
        assert_eq!(list.cursor, 0);
        list.select_last(3);
        assert_eq!(list.cursor, 2);

        list.select_last(0);
        assert_eq!(list.cursor, 0);
    }
}
