//! 类型定义模块

mod catalog;
mod customer;
mod state;

pub use catalog::CustomerCatalog;
pub use customer::{CustomerId, CustomerRecord};
pub use state::PortalState;
