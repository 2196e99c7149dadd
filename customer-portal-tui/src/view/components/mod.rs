//! 界面组件

pub mod customer_list;
pub mod detail;
pub mod help;
pub mod overlay;
pub mod paginator;
pub mod statusbar;
