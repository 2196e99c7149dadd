//! JSON 文件客户数据源

use std::fs;
use std::path::PathBuf;

use customer_portal_core::{
    CustomerRecord, CustomerSource, PortalError, PortalResult, StaticCustomerSource,
};

/// 基于 JSON 文件的客户数据源
///
/// 文件内容是 `CustomerRecord` 数组；文件不存在时使用内置示例数据。
pub struct JsonCustomerSource {
    path: PathBuf,
}

impl JsonCustomerSource {
    /// `path` 为空时使用 `<config_dir>/customer-portal/customers.json`
    pub fn new(path: Option<PathBuf>) -> Self {
        Self {
            path: path.unwrap_or_else(|| super::config_dir().join("customers.json")),
        }
    }
}

impl CustomerSource for JsonCustomerSource {
    fn load(&self) -> PortalResult<Vec<CustomerRecord>> {
        if !self.path.exists() {
            log::info!(
                "No customer file at {}, using sample data",
                self.path.display()
            );
            return StaticCustomerSource::sample().load();
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| PortalError::StorageError(e.to_string()))?;
        let customers: Vec<CustomerRecord> = serde_json::from_str(&content)?;

        log::info!(
            "Loaded {} customers from {}",
            customers.len(),
            self.path.display()
        );
        Ok(customers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_sample_data() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonCustomerSource::new(Some(dir.path().join("customers.json")));

        let customers = source.load().unwrap();
        assert_eq!(customers.len(), 25);
    }

    #[test]
    fn reads_customer_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.json");
        fs::write(
            &path,
            r#"[
                {"id": "a", "name": "Alice", "title": "CTO", "address": "1 Main St", "description": "..."},
                {"id": "b", "name": "Bob", "title": "CFO", "address": "2 Main St", "description": "..."}
            ]"#,
        )
        .unwrap();

        let customers = JsonCustomerSource::new(Some(path)).load().unwrap();
        let names: Vec<_> = customers.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[test]
    fn invalid_json_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.json");
        fs::write(&path, r#"[{"id": "a"}]"#).unwrap();

        let err = JsonCustomerSource::new(Some(path)).load().unwrap_err();
        assert!(matches!(err, PortalError::SerializationError(_)));
    }
}
