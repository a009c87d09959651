use super::CompanyRepository;
use crate::error::Result;
use crate::types::company::StoredCompany;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Whole-file JSON repository: every read loads the file, every write rewrites it.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        debug!("initializing company database at {}", self.path.display());
        fs::write(&self.path, "{}")?;
        Ok(())
    }
}

impl CompanyRepository for JsonFileStore {
    fn all(&self) -> Result<BTreeMap<String, StoredCompany>> {
        self.ensure_initialized()?;
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn replace_all(&self, companies: &BTreeMap<String, StoredCompany>) -> Result<()> {
        self.ensure_initialized()?;
        let content = serde_json::to_string_pretty(companies)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::company::CompanyData;
    use tempfile::TempDir;

    #[test]
    fn first_read_creates_empty_database() {
        let dir = TempDir::new().expect("temp dir should be created");
        let store = JsonFileStore::new(dir.path().join("nested/company-data.json"));

        assert!(store.all().expect("read should succeed").is_empty());
        assert_eq!(
            fs::read_to_string(store.path()).expect("file should exist"),
            "{}"
        );
    }

    #[test]
    fn saved_records_survive_a_new_handle() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("company-data.json");
        JsonFileStore::new(&path)
            .save("Initech", CompanyData::blank(), Some("bill@initech.com".into()))
            .expect("save should succeed");

        let reopened = JsonFileStore::new(&path);
        let stored = reopened
            .get("initech")
            .expect("get should succeed")
            .expect("record should persist");
        assert_eq!(stored.email.as_deref(), Some("bill@initech.com"));

        let raw = fs::read_to_string(&path).expect("file should exist");
        assert!(raw.contains("\"initech\""));
        assert!(raw.contains("\"evpStatement\""));
    }

    #[test]
    fn corrupt_file_surfaces_json_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("company-data.json");
        fs::write(&path, "{ not json").expect("corrupt file should write");

        let err = JsonFileStore::new(&path).all().expect_err("corrupt file should fail");
        assert!(matches!(err, crate::error::WorkbrandError::Json(_)));
    }
}
