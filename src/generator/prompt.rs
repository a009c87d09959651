use crate::types::company::{Category, Subcategory};

pub const SYSTEM_PROMPT: &str = "You are an expert in employer branding and company analysis. \
Analyze the given company and provide insights about their employer brand.";

/// User prompt asking for one JSON object in the persisted record shape.
pub fn analysis_prompt(company: &str) -> String {
    let categories = Category::ALL
        .iter()
        .map(|category| format!("\"{}\"", category.key()))
        .collect::<Vec<_>>()
        .join(", ");
    let subcategories = Subcategory::ALL
        .iter()
        .map(|subcategory| format!("\"{}\"", subcategory.key()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Analyze the employer brand of {company}. Focus on their strengths, areas for improvement, \
and how they compare to industry standards.\n\n\
Respond with a single JSON object and nothing else. Fields:\n\
- integer scores from 0 to 20 for {categories}\n\
- \"subcategories\": an object with integer scores from 0 to 5 for {subcategories}\n\
- \"glassdoorScore\": number from 0 to 5\n\
- \"numEmployees\": integer\n\
- \"top3Words\": three words describing the culture\n\
- \"evpStatement\": one or two sentences\n\
- \"analysis\": an object with \"overview\" and one paragraph per category key"
    )
}
