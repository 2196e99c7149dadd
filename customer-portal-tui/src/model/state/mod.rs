//! 界面状态模块

mod customer_list;
mod modal;

pub use customer_list::CustomerListState;
pub use modal::{Modal, ModalState};
