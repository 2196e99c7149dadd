//! 测试辅助模块
//!
//! 提供测试数据工厂方法。

use crate::pagination::PageSize;
use crate::services::PortalController;
use crate::types::{CustomerCatalog, CustomerId, CustomerRecord};
use crate::viewport::{Breakpoint, Viewport};

pub fn customer(n: usize) -> CustomerRecord {
    CustomerRecord {
        id: CustomerId::new(format!("c{n}")),
        name: format!("Customer {n}"),
        title: "Buyer".to_string(),
        address: format!("{n} Test Road"),
        description: format!("Test customer number {n}."),
    }
}

/// `c1..=cN`
pub fn customers(count: usize) -> Vec<CustomerRecord> {
    (1..=count).map(customer).collect()
}

pub fn controller_with(count: usize) -> PortalController {
    let catalog = CustomerCatalog::new(customers(count)).unwrap();
    PortalController::new(catalog, PageSize::default())
}

pub fn narrow() -> Viewport {
    Viewport::new(400, Breakpoint::default())
}

pub fn wide() -> Viewport {
    Viewport::new(1280, Breakpoint::default())
}
