use crate::error::{Result, WorkbrandError};
use crate::store::normalize_key;
use crate::types::company::CompanyData;
use serde::Deserialize;

const CATALOG_JSON: &str = include_str!("companies.json");

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Offered as a comparison target.
    #[serde(default)]
    pub benchmark: bool,
    pub data: CompanyData,
}

impl CatalogEntry {
    fn matches(&self, key: &str) -> bool {
        self.id == key
            || normalize_key(&self.display_name) == key
            || self.aliases.iter().any(|alias| alias == key)
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn builtin() -> Result<Self> {
        Self::from_json(CATALOG_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)
            .map_err(|e| WorkbrandError::ConfigParse(format!("company catalog: {e}")))?;
        Ok(Self { entries })
    }

    /// Looks up `name` by id, display name or alias after key normalization.
    pub fn resolve(&self, name: &str) -> Option<&CatalogEntry> {
        let key = normalize_key(name);
        self.entries.iter().find(|entry| entry.matches(&key))
    }

    pub fn benchmarks(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter().filter(|entry| entry.benchmark)
    }
}
