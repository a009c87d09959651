pub mod json_file;
pub mod memory;
pub mod users;

use crate::error::Result;
use crate::types::company::{CompanyData, StoredCompany};
use std::collections::BTreeMap;

pub use json_file::JsonFileStore;
pub use users::UserDirectory;

/// Repository key for a company name: trimmed and lowercased.
pub fn normalize_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Keyed persistence of analysed companies. Last write wins.
pub trait CompanyRepository {
    fn all(&self) -> Result<BTreeMap<String, StoredCompany>>;

    /// Replaces the whole keyed map.
    fn replace_all(&self, companies: &BTreeMap<String, StoredCompany>) -> Result<()>;

    fn get(&self, name: &str) -> Result<Option<StoredCompany>> {
        Ok(self.all()?.remove(&normalize_key(name)))
    }

    /// Stores `data` under `name`; a `None` email keeps whatever was stored before.
    fn save(&self, name: &str, data: CompanyData, email: Option<String>) -> Result<()> {
        let mut companies = self.all()?;
        let key = normalize_key(name);
        let email = email.or_else(|| companies.get(&key).and_then(|stored| stored.email.clone()));
        companies.insert(key, StoredCompany { data, email });
        self.replace_all(&companies)
    }

    /// Returns whether a record was removed.
    fn delete(&self, name: &str) -> Result<bool> {
        let mut companies = self.all()?;
        let removed = companies.remove(&normalize_key(name)).is_some();
        if removed {
            self.replace_all(&companies)?;
        }
        Ok(removed)
    }
}
