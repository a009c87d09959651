use crate::compare::{Comparison, ResolvedCompany, Source};
use crate::scoring::{category_deltas, ScoreSummary};
use crate::types::company::{Category, CompanyData, CATEGORY_MAX, SUBCATEGORY_MAX};

pub fn comparison_to_markdown(comparison: &Comparison) -> String {
    let ours = ScoreSummary::of(&comparison.user_company);
    let theirs = ScoreSummary::of(&comparison.competitor);

    let mut output = String::new();
    output.push_str(&format!(
        "# Employer Brand: {} vs {}\n\n",
        comparison.company_name, comparison.competitor_name
    ));
    if comparison.from_database() {
        output.push_str("_Loaded from saved analysis._\n\n");
    }

    output.push_str("| | Total | Grade |\n|---|---|---|\n");
    for (name, summary) in [
        (&comparison.company_name, &ours),
        (&comparison.competitor_name, &theirs),
    ] {
        output.push_str(&format!(
            "| {} | {}/{} | {} |\n",
            name, summary.total, summary.max, summary.grade
        ));
    }
    output.push('\n');

    output.push_str("## Categories\n\n");
    output.push_str(&format!(
        "| Category | {} | {} | Delta |\n|---|---|---|---|\n",
        comparison.company_name, comparison.competitor_name
    ));
    for delta in category_deltas(&comparison.user_company, &comparison.competitor) {
        output.push_str(&format!(
            "| {} | {} | {} | {:+} |\n",
            delta.category, delta.ours, delta.theirs, delta.delta
        ));
    }
    output.push('\n');

    output.push_str(&format!(
        "Strongest: {} ({}/{})\nWeakest: {} ({}/{})\n\n",
        ours.strongest.category,
        ours.strongest.score,
        CATEGORY_MAX,
        ours.weakest.category,
        ours.weakest.score,
        CATEGORY_MAX
    ));

    push_focus_areas(&mut output, &ours);
    push_brand(&mut output, &comparison.user_company);
    output
}

pub fn company_to_markdown(company: &ResolvedCompany) -> String {
    let summary = ScoreSummary::of(&company.data);
    let source = match company.source {
        Source::Catalog => "benchmark",
        Source::Database => "saved analysis",
        Source::Generated => "new analysis",
    };

    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", company.name));
    output.push_str(&format!(
        "Total: {}/{} ({:.0}%, grade {}) from {}\n\n",
        summary.total, summary.max, summary.percentage, summary.grade, source
    ));

    output.push_str("## Categories\n\n");
    for category in Category::ALL {
        output.push_str(&format!(
            "- {}: {}/{}\n",
            category,
            company.data.categories.get(category),
            CATEGORY_MAX
        ));
        for subcategory in category.subcategories() {
            output.push_str(&format!(
                "  - {}: {}/{}\n",
                subcategory.label(),
                company.data.subcategories.get(subcategory),
                SUBCATEGORY_MAX
            ));
        }
        let note = company.data.analysis.for_category(category);
        if !note.is_empty() {
            output.push_str(&format!("  > {note}\n"));
        }
    }
    output.push('\n');

    push_focus_areas(&mut output, &summary);
    push_brand(&mut output, &company.data);
    output
}

fn push_focus_areas(output: &mut String, summary: &ScoreSummary) {
    output.push_str("## Focus Areas\n\n");
    for area in &summary.focus_areas {
        let names = area
            .subcategories
            .iter()
            .map(|subcategory| subcategory.label())
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!(
            "- {}: {} ({}/{})\n",
            area.category, names, area.score, SUBCATEGORY_MAX
        ));
    }
    output.push('\n');
}

fn push_brand(output: &mut String, data: &CompanyData) {
    output.push_str("## Brand\n\n");
    output.push_str(&format!("Top words: {}\n\n", data.top3_words.join(", ")));
    output.push_str(&format!("> {}\n", data.evp_statement));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::compare::Comparator;
    use crate::store::memory::MemoryStore;

    #[test]
    fn comparison_markdown_contains_sections() {
        let catalog = Catalog::builtin().expect("catalog");
        let store = MemoryStore::default();
        let comparison = Comparator::new(&catalog, &store)
            .compare("google", "walmart", None)
            .expect("catalog comparison");

        let rendered = comparison_to_markdown(&comparison);
        assert!(rendered.contains("# Employer Brand: Google vs Walmart"));
        assert!(rendered.contains("| Google | 95/100 | A |"));
        assert!(rendered.contains("| Walmart | 80/100 | B |"));
        assert!(rendered.contains("| Interpersonal Fit | 19 | 16 | +3 |"));
        assert!(rendered.contains("## Focus Areas"));
        assert!(!rendered.contains("saved analysis"));
    }

    #[test]
    fn company_markdown_lists_subcategories() {
        let catalog = Catalog::builtin().expect("catalog");
        let store = MemoryStore::default();
        let hubspot = Comparator::new(&catalog, &store)
            .lookup("hubspot")
            .expect("bundled");

        let rendered = company_to_markdown(&hubspot);
        assert!(rendered.contains("from benchmark"));
        assert!(rendered.contains("  - Diversity, Equity, Inclusion, and Belonging: "));
        assert!(rendered.contains("## Brand"));
    }
}
