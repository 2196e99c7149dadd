//! 业务逻辑服务层

mod photo_refresh;
mod portal_service;

pub use photo_refresh::{PhotoRefreshHandle, PhotoRefresher, DEFAULT_PHOTO_REFRESH_PERIOD};
pub use portal_service::{DetailSurface, PortalController};
