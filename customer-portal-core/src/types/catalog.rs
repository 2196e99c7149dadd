//! Customer catalog

use std::collections::HashSet;

use crate::error::{PortalError, PortalResult};

use super::{CustomerId, CustomerRecord};

/// Ordered, immutable sequence of customer records with unique ids
#[derive(Debug, Clone, Default)]
pub struct CustomerCatalog {
    records: Vec<CustomerRecord>,
}

impl CustomerCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(records: Vec<CustomerRecord>) -> PortalResult<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(&record.id) {
                return Err(PortalError::DuplicateCustomerId(record.id.to_string()));
            }
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in source order
    #[must_use]
    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    #[must_use]
    pub fn first(&self) -> Option<&CustomerRecord> {
        self.records.first()
    }

    #[must_use]
    pub fn get(&self, id: &CustomerId) -> Option<&CustomerRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &CustomerId) -> bool {
        self.get(id).is_some()
    }
}
