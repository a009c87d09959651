use super::CompanyRepository;
use crate::error::Result;
use crate::types::company::StoredCompany;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Process-local repository; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    companies: RefCell<BTreeMap<String, StoredCompany>>,
}

impl MemoryStore {
    /// Starts from a snapshot, e.g. the file store's contents for a dry run.
    pub fn with_companies(companies: BTreeMap<String, StoredCompany>) -> Self {
        Self {
            companies: RefCell::new(companies),
        }
    }
}

impl CompanyRepository for MemoryStore {
    fn all(&self) -> Result<BTreeMap<String, StoredCompany>> {
        Ok(self.companies.borrow().clone())
    }

    fn replace_all(&self, companies: &BTreeMap<String, StoredCompany>) -> Result<()> {
        *self.companies.borrow_mut() = companies.clone();
        Ok(())
    }
}
