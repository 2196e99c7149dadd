//! 测试辅助模块

use customer_portal_core::{
    Breakpoint, CustomerCatalog, CustomerId, CustomerRecord, PageSize, PortalController,
};
use ratatui::{backend::TestBackend, Terminal};

use crate::model::App;

/// 60 列 = 480 布局单位，低于默认断点
pub const NARROW_COLUMNS: u16 = 60;

/// 120 列 = 960 布局单位
pub const WIDE_COLUMNS: u16 = 120;

fn customer(n: usize) -> CustomerRecord {
    CustomerRecord {
        id: CustomerId::new(format!("c{n}")),
        name: format!("Customer {n}"),
        title: "Buyer".to_string(),
        address: format!("{n} Test Road"),
        description: format!("Test customer number {n}."),
    }
}

/// `count` 个客户（`c1..=cN`），指定终端宽度
pub fn test_app(count: usize, columns: u16) -> App {
    let catalog = CustomerCatalog::new((1..=count).map(customer).collect()).unwrap();
    let portal = PortalController::new(catalog, PageSize::default());
    App::new(portal, Breakpoint::default(), columns)
}

/// 缓冲区全部文本，按行拼接
pub fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
