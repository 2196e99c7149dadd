//! Customer Portal Core Library
//!
//! Provides the view-state logic behind the customer portal front-ends:
//! - Customer catalog (ordered, immutable, unique ids)
//! - Pagination math and paginator links
//! - Viewport classification (narrow / wide)
//! - Portal controller (selection, current page, detail overlay)
//! - Photo grid batches and the periodic refresh task
//!
//! This library knows nothing about terminals or rendering. Data sources are
//! abstracted through the [`CustomerSource`] trait so that front-ends can plug
//! in their own loaders.

pub mod error;
pub mod pagination;
pub mod photos;
pub mod services;
pub mod traits;
pub mod types;
pub mod viewport;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{PortalError, PortalResult};
pub use pagination::{PageLink, PageSize, Pagination};
pub use photos::{PhotoBatch, PHOTO_GRID_SIZE};
pub use services::{DetailSurface, PhotoRefreshHandle, PhotoRefresher, PortalController};
pub use traits::{CustomerSource, StaticCustomerSource};
pub use types::{CustomerCatalog, CustomerId, CustomerRecord, PortalState};
pub use viewport::{Breakpoint, Viewport, ViewportClass};
