//! Customer data source Trait

use crate::error::PortalResult;
use crate::types::{CustomerId, CustomerRecord};

/// Customer data source
///
/// Supplies the ordered, immutable list of customers once at start-up.
///
/// Platform implementation:
/// - In-memory: [`StaticCustomerSource`]
/// - TUI: `JsonCustomerSource` (JSON file in the config directory)
pub trait CustomerSource: Send + Sync {
    /// Load all customers in display order
    fn load(&self) -> PortalResult<Vec<CustomerRecord>>;
}

/// In-memory data source
#[derive(Debug, Clone, Default)]
pub struct StaticCustomerSource {
    records: Vec<CustomerRecord>,
}

const SAMPLE_NAMES: [&str; 25] = [
    "Ada Lovelace",
    "Alan Turing",
    "Grace Hopper",
    "Edsger Dijkstra",
    "Barbara Liskov",
    "Donald Knuth",
    "Margaret Hamilton",
    "Ken Thompson",
    "Frances Allen",
    "Dennis Ritchie",
    "Radia Perlman",
    "John McCarthy",
    "Shafi Goldwasser",
    "Niklaus Wirth",
    "Adele Goldberg",
    "Tony Hoare",
    "Sophie Wilson",
    "Leslie Lamport",
    "Karen Spärck Jones",
    "Robin Milner",
    "Lynn Conway",
    "Butler Lampson",
    "Anita Borg",
    "Bjarne Stroustrup",
    "Hedy Lamarr",
];

const SAMPLE_TITLES: [&str; 5] = [
    "Chief Executive Officer",
    "Head of Operations",
    "Procurement Manager",
    "Lead Engineer",
    "Account Director",
];

const SAMPLE_CITIES: [&str; 5] = ["London", "Berlin", "Lisbon", "Toronto", "Melbourne"];

impl StaticCustomerSource {
    #[must_use]
    pub fn new(records: Vec<CustomerRecord>) -> Self {
        Self { records }
    }

    /// Built-in demo data: 25 customers with ids `c1` to `c25`
    #[must_use]
    pub fn sample() -> Self {
        let records = SAMPLE_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let n = i + 1;
                CustomerRecord {
                    id: CustomerId::new(format!("c{n}")),
                    name: (*name).to_string(),
                    title: SAMPLE_TITLES[i % SAMPLE_TITLES.len()].to_string(),
                    address: format!(
                        "{} Market Street, {}",
                        10 + n * 3,
                        SAMPLE_CITIES[i % SAMPLE_CITIES.len()]
                    ),
                    description: format!(
                        "{name} has been a customer since {}. Prefers email contact and quarterly reviews.",
                        2010 + i % 12
                    ),
                }
            })
            .collect();
        Self { records }
    }
}

impl CustomerSource for StaticCustomerSource {
    fn load(&self) -> PortalResult<Vec<CustomerRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CustomerCatalog;

    #[test]
    fn sample_has_twenty_five_unique_customers() {
        let records = StaticCustomerSource::sample().load().unwrap();
        assert_eq!(records.len(), 25);
        assert_eq!(records[0].id.as_str(), "c1");
        assert_eq!(records[24].id.as_str(), "c25");
        assert!(CustomerCatalog::new(records).is_ok());
    }

    #[test]
    fn default_source_is_empty() {
        assert!(StaticCustomerSource::default().load().unwrap().is_empty());
    }
}
