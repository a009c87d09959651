pub mod json;
pub mod md;

use crate::compare::{Comparison, ResolvedCompany};
use crate::error::Result;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_comparison(comparison: &Comparison, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::comparison_to_json(comparison)?),
        OutputFormat::Md => Ok(md::comparison_to_markdown(comparison)),
    }
}

pub fn render_company(company: &ResolvedCompany, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(json::company_to_json(company)?),
        OutputFormat::Md => Ok(md::company_to_markdown(company)),
    }
}
