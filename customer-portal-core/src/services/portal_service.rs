//! Portal view-state controller
//!
//! Owns [`PortalState`] and exposes the only operations allowed to mutate it:
//! page changes, customer selection, overlay dismissal and photo replacement.

use crate::error::{PortalError, PortalResult};
use crate::pagination::{PageSize, Pagination};
use crate::photos::PhotoBatch;
use crate::types::{CustomerCatalog, CustomerId, CustomerRecord, PortalState};
use crate::viewport::Viewport;

/// Where the detail content of the selected customer is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailSurface {
    /// Wide layout, nothing selected: "Select a customer" hint
    Placeholder,
    /// Wide layout: detail pane next to the list
    InlinePane,
    /// Narrow layout: full-screen overlay above the list
    Overlay,
    /// Narrow layout without an open overlay: no detail visible
    Hidden,
}

/// Portal controller
pub struct PortalController {
    catalog: CustomerCatalog,
    page_size: PageSize,
    state: PortalState,
}

impl PortalController {
    /// Create the controller with the first customer selected on page 0
    #[must_use]
    pub fn new(catalog: CustomerCatalog, page_size: PageSize) -> Self {
        let state = PortalState::initial(&catalog);
        log::debug!(
            "Portal initialised: {} customers, page size {}",
            catalog.len(),
            page_size.get()
        );
        Self {
            catalog,
            page_size,
            state,
        }
    }

    #[must_use]
    pub fn state(&self) -> &PortalState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &CustomerCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.state.current_page, self.page_size, self.catalog.len())
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pagination().page_count()
    }

    /// Records on the current page; empty when the page is out of range
    #[must_use]
    pub fn visible_customers(&self) -> &[CustomerRecord] {
        self.pagination().visible_slice(self.catalog.records())
    }

    // ========== 分页 ==========

    /// Jump to page `page`
    ///
    /// No bounds check: callers only offer indices in `[0, page_count)`.
    /// An out-of-range page renders as an empty list.
    pub fn go_to_page(&mut self, page: usize) {
        log::debug!("Go to page {page}");
        self.state.current_page = page;
    }

    /// Go to the next page, staying on the last one
    pub fn next_page(&mut self) {
        let page = self.pagination().next_page();
        self.go_to_page(page);
    }

    /// Go to the previous page, staying on the first one
    pub fn previous_page(&mut self) {
        let page = self.pagination().previous_page();
        self.go_to_page(page);
    }

    // ========== 选择 ==========

    /// Make `id` the active customer
    ///
    /// On a narrow viewport this also opens the detail overlay. On a wide one
    /// the overlay flag is left as it is. Unknown ids are rejected and the
    /// state is not touched.
    pub fn select_customer(&mut self, id: &CustomerId, viewport: Viewport) -> PortalResult<()> {
        if !self.catalog.contains(id) {
            return Err(PortalError::CustomerNotFound(id.to_string()));
        }

        self.state.selected_customer_id = Some(id.clone());
        if viewport.is_narrow() {
            self.state.is_detail_overlay_open = true;
        }

        log::debug!(
            "Selected customer {id} (overlay open: {})",
            self.state.is_detail_overlay_open
        );
        Ok(())
    }

    /// Dismiss the detail overlay; the selection is kept
    pub fn close_overlay(&mut self) {
        self.state.is_detail_overlay_open = false;
    }

    #[must_use]
    pub fn selected_customer(&self) -> Option<&CustomerRecord> {
        self.state
            .selected_customer_id
            .as_ref()
            .and_then(|id| self.catalog.get(id))
    }

    #[must_use]
    pub fn is_selected(&self, id: &CustomerId) -> bool {
        self.state.selected_customer_id.as_ref() == Some(id)
    }

    // ========== 照片 ==========

    /// Replace the whole photo grid
    pub fn replace_photos(&mut self, batch: PhotoBatch) {
        self.state.photos = batch;
    }

    // ========== 展示 ==========

    /// Which surface shows the detail content for `viewport`
    #[must_use]
    pub fn detail_surface(&self, viewport: Viewport) -> DetailSurface {
        let selected = self.state.selected_customer_id.is_some();
        match (viewport.is_narrow(), selected, self.state.is_detail_overlay_open) {
            (false, false, _) => DetailSurface::Placeholder,
            (false, true, _) => DetailSurface::InlinePane,
            (true, true, true) => DetailSurface::Overlay,
            (true, _, _) => DetailSurface::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{controller_with, narrow, wide};

    fn ids(customers: &[CustomerRecord]) -> Vec<&str> {
        customers.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn starts_on_first_page_with_first_customer() {
        let portal = controller_with(25);
        assert_eq!(portal.state().current_page, 0);
        assert_eq!(portal.state().selected_customer_id, Some("c1".into()));
        assert!(!portal.state().is_detail_overlay_open);
        assert_eq!(portal.state().photos.urls().len(), 9);
    }

    #[test]
    fn empty_catalog_starts_without_selection() {
        let portal = controller_with(0);
        assert!(portal.state().selected_customer_id.is_none());
        assert!(portal.selected_customer().is_none());
        assert_eq!(portal.page_count(), 0);
        assert!(portal.visible_customers().is_empty());
        assert_eq!(portal.detail_surface(wide()), DetailSurface::Placeholder);
        assert_eq!(portal.detail_surface(narrow()), DetailSurface::Hidden);
    }

    #[test]
    fn paginates_twenty_five_customers() {
        let mut portal = controller_with(25);
        assert_eq!(portal.page_count(), 3);
        assert_eq!(
            ids(portal.visible_customers()),
            ["c1", "c2", "c3", "c4", "c5", "c6", "c7", "c8", "c9", "c10"]
        );

        portal.go_to_page(2);
        assert_eq!(ids(portal.visible_customers()), ["c21", "c22", "c23", "c24", "c25"]);
    }

    #[test]
    fn go_to_page_is_permissive() {
        let mut portal = controller_with(25);
        portal.go_to_page(7);
        assert_eq!(portal.state().current_page, 7);
        assert!(portal.visible_customers().is_empty());
    }

    #[test]
    fn next_and_previous_stay_in_range() {
        let mut portal = controller_with(25);
        portal.previous_page();
        assert_eq!(portal.state().current_page, 0);
        portal.next_page();
        portal.next_page();
        portal.next_page();
        assert_eq!(portal.state().current_page, 2);
    }

    #[test]
    fn narrow_selection_opens_overlay_and_close_keeps_selection() {
        let mut portal = controller_with(25);
        portal.close_overlay();

        portal.select_customer(&"c7".into(), narrow()).unwrap();
        assert_eq!(portal.state().selected_customer_id, Some("c7".into()));
        assert!(portal.state().is_detail_overlay_open);
        assert_eq!(portal.detail_surface(narrow()), DetailSurface::Overlay);

        portal.close_overlay();
        assert!(!portal.state().is_detail_overlay_open);
        assert_eq!(portal.state().selected_customer_id, Some("c7".into()));

        let before = portal.state().clone();
        portal.close_overlay();
        assert_eq!(portal.state(), &before);
    }

    #[test]
    fn wide_selection_leaves_overlay_flag_alone() {
        let mut portal = controller_with(25);
        for id in ["c2", "c5", "c9"] {
            portal.select_customer(&id.into(), wide()).unwrap();
            assert_eq!(portal.state().selected_customer_id, Some(id.into()));
            assert!(!portal.state().is_detail_overlay_open);
        }

        // An overlay opened earlier on a narrow viewport is not forced closed
        portal.select_customer(&"c3".into(), narrow()).unwrap();
        portal.select_customer(&"c4".into(), wide()).unwrap();
        assert!(portal.state().is_detail_overlay_open);
        assert_eq!(portal.detail_surface(wide()), DetailSurface::InlinePane);
    }

    #[test]
    fn selecting_always_sets_the_id() {
        let mut portal = controller_with(25);
        portal.go_to_page(2);
        portal.select_customer(&"c22".into(), wide()).unwrap();
        portal.select_customer(&"c22".into(), wide()).unwrap();
        assert!(portal.is_selected(&"c22".into()));
        assert_eq!(portal.selected_customer().map(|c| c.name.as_str()), Some("Customer 22"));
    }

    #[test]
    fn unknown_id_is_rejected_without_side_effects() {
        let mut portal = controller_with(5);
        let before = portal.state().clone();

        let err = portal.select_customer(&"c99".into(), narrow()).unwrap_err();
        assert!(matches!(err, PortalError::CustomerNotFound(ref id) if id == "c99"));
        assert_eq!(portal.state(), &before);
    }

    #[test]
    fn closed_overlay_on_narrow_hides_detail() {
        let mut portal = controller_with(3);
        assert_eq!(portal.detail_surface(narrow()), DetailSurface::Hidden);
        assert_eq!(portal.detail_surface(wide()), DetailSurface::InlinePane);

        portal.select_customer(&"c2".into(), narrow()).unwrap();
        portal.close_overlay();
        assert_eq!(portal.detail_surface(narrow()), DetailSurface::Hidden);

        portal.select_customer(&"c2".into(), narrow()).unwrap();
        assert_eq!(portal.detail_surface(narrow()), DetailSurface::Overlay);
    }

    #[test]
    fn replace_photos_swaps_whole_batch() {
        let mut portal = controller_with(1);
        portal.replace_photos(PhotoBatch::generate(4));
        assert_eq!(portal.state().photos.generation(), 4);
        assert_eq!(portal.state().photos.urls().len(), 9);
    }
}
