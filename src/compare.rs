use crate::catalog::Catalog;
use crate::error::{Result, WorkbrandError};
use crate::generator::{analyze_company, client::TextGenerator};
use crate::store::CompanyRepository;
use crate::types::company::CompanyData;
use serde::Serialize;
use tracing::info;

/// Where a resolved record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Catalog,
    Database,
    Generated,
}

#[derive(Debug, Clone)]
pub struct ResolvedCompany {
    pub name: String,
    pub source: Source,
    pub data: CompanyData,
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub company_name: String,
    pub user_company: CompanyData,
    pub competitor_name: String,
    pub competitor: CompanyData,
    pub user_source: Source,
}

impl Comparison {
    pub fn from_database(&self) -> bool {
        self.user_source == Source::Database
    }
}

/// Resolves companies from the catalog, then the repository, then the generator.
pub struct Comparator<'a> {
    catalog: &'a Catalog,
    repository: &'a dyn CompanyRepository,
    generator: Option<&'a dyn TextGenerator>,
    /// Named in the error when a lookup misses and no generator is configured.
    generator_key_env: String,
}

impl<'a> Comparator<'a> {
    pub fn new(catalog: &'a Catalog, repository: &'a dyn CompanyRepository) -> Self {
        Self {
            catalog,
            repository,
            generator: None,
            generator_key_env: "OPENAI_API_KEY".to_string(),
        }
    }

    pub fn with_generator(
        mut self,
        generator: Option<&'a dyn TextGenerator>,
        key_env: impl Into<String>,
    ) -> Self {
        self.generator = generator;
        self.generator_key_env = key_env.into();
        self
    }

    pub fn compare(&self, company: &str, competitor: &str, email: Option<&str>) -> Result<Comparison> {
        let company = company.trim();
        let competitor = competitor.trim();
        if company.is_empty() {
            return Err(WorkbrandError::InvalidInput(
                "company name is required".to_string(),
            ));
        }
        if competitor.is_empty() {
            return Err(WorkbrandError::InvalidInput(
                "competitor selection is required".to_string(),
            ));
        }
        info!(
            "processing request for company: {}, competitor: {}",
            company, competitor
        );

        let rival = self.resolve(competitor, None)?;
        let ours = self.resolve(company, email.map(str::to_string))?;

        info!("successfully processed request for: {}", company);
        Ok(Comparison {
            company_name: ours.name,
            user_company: ours.data,
            competitor_name: rival.name,
            competitor: rival.data,
            user_source: ours.source,
        })
    }

    /// Catalog or repository only; never calls the generator.
    pub fn lookup(&self, name: &str) -> Result<ResolvedCompany> {
        self.find_existing(name)?
            .ok_or_else(|| WorkbrandError::NotFound(format!("company {}", name.trim())))
    }

    fn resolve(&self, name: &str, email: Option<String>) -> Result<ResolvedCompany> {
        if let Some(found) = self.find_existing(name)? {
            return Ok(found);
        }

        let generator = self
            .generator
            .ok_or_else(|| WorkbrandError::GeneratorUnavailable(self.generator_key_env.clone()))?;
        info!("analyzing new company: {}", name);
        let data = analyze_company(generator, name)?
            .ok_or_else(|| WorkbrandError::Unanalyzable(name.to_string()))?;
        self.repository.save(name, data.clone(), email)?;

        Ok(ResolvedCompany {
            name: name.to_string(),
            source: Source::Generated,
            data,
        })
    }

    fn find_existing(&self, name: &str) -> Result<Option<ResolvedCompany>> {
        if let Some(entry) = self.catalog.resolve(name) {
            return Ok(Some(ResolvedCompany {
                name: entry.display_name.clone(),
                source: Source::Catalog,
                data: entry.data.clone(),
            }));
        }
        Ok(self
            .repository
            .get(name)?
            .map(|stored| ResolvedCompany {
                name: name.trim().to_string(),
                source: Source::Database,
                data: stored.data,
            }))
    }
}
