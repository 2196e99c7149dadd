//! Customer related type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable, unique customer identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Customer record as supplied by the data source
///
/// Read-only once loaded; the controller never mutates records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    /// Customer ID
    pub id: CustomerId,
    /// Display name
    pub name: String,
    /// Job title
    pub title: String,
    /// Postal address
    pub address: String,
    /// Free-form description
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_json() {
        let json = r#"{
            "id": "c1",
            "name": "Ada Lovelace",
            "title": "Analyst",
            "address": "12 St James's Square, London",
            "description": "First customer."
        }"#;

        let record: CustomerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, CustomerId::from("c1"));
        assert_eq!(record.name, "Ada Lovelace");
    }

    #[test]
    fn id_serializes_as_plain_string() {
        let value = serde_json::to_value(CustomerId::new("c7")).unwrap();
        assert_eq!(value, serde_json::json!("c7"));
    }
}
