//! Portal view state

use crate::photos::PhotoBatch;

use super::{CustomerCatalog, CustomerId};

/// Mutable view state owned by [`crate::PortalController`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalState {
    /// Currently active customer, always a catalog id when set
    pub selected_customer_id: Option<CustomerId>,
    /// Zero-based page index
    pub current_page: usize,
    /// Detail overlay flag, only observed by the narrow layout
    pub is_detail_overlay_open: bool,
    /// Photo grid URLs, replaced wholesale on refresh
    pub photos: PhotoBatch,
}

impl PortalState {
    /// Initial state: first customer selected, page 0, overlay closed
    #[must_use]
    pub fn initial(catalog: &CustomerCatalog) -> Self {
        Self {
            selected_customer_id: catalog.first().map(|r| r.id.clone()),
            current_page: 0,
            is_detail_overlay_open: false,
            photos: PhotoBatch::generate(0),
        }
    }
}
