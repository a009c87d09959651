use crate::compare::{Comparison, ResolvedCompany, Source};
use crate::scoring::ScoreSummary;
use crate::types::company::CompanyData;
use serde::Serialize;

/// Wire shape consumed by the comparison dashboard.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonBody<'a> {
    user_company: &'a CompanyData,
    competitor: &'a CompanyData,
    competitor_name: &'a str,
}

#[derive(Serialize)]
struct CompanyBody<'a> {
    name: &'a str,
    source: Source,
    summary: ScoreSummary,
    data: &'a CompanyData,
}

pub fn comparison_to_json(comparison: &Comparison) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ComparisonBody {
        user_company: &comparison.user_company,
        competitor: &comparison.competitor,
        competitor_name: &comparison.competitor_name,
    })
}

pub fn company_to_json(company: &ResolvedCompany) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CompanyBody {
        name: &company.name,
        source: company.source,
        summary: ScoreSummary::of(&company.data),
        data: &company.data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::compare::Comparator;
    use crate::store::memory::MemoryStore;
    use serde_json::Value;

    #[test]
    fn comparison_json_keeps_dashboard_keys() {
        let catalog = Catalog::builtin().expect("catalog");
        let store = MemoryStore::default();
        let comparison = Comparator::new(&catalog, &store)
            .compare("google", "walmart", None)
            .expect("catalog comparison");

        let rendered = comparison_to_json(&comparison).expect("json should serialize");
        let value: Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(value["competitorName"], "Walmart");
        assert_eq!(value["userCompany"]["interpersonalFit"], 19);
        assert!(value["competitor"]["subcategories"].is_object());
        assert!(value.get("companyName").is_none());
    }

    #[test]
    fn company_json_includes_summary() {
        let catalog = Catalog::builtin().expect("catalog");
        let store = MemoryStore::default();
        let google = Comparator::new(&catalog, &store)
            .lookup("google")
            .expect("bundled");

        let rendered = company_to_json(&google).expect("json should serialize");
        assert!(rendered.contains("\"source\": \"catalog\""));
        assert!(rendered.contains("\"total\": 95"));
    }
}
