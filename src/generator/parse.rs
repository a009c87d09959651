use crate::error::{Result, WorkbrandError};
use crate::types::company::{
    Category, CategoryScores, CompanyAnalysis, CompanyData, ExtendedAnalysis, Score,
    SubcategoryScores, Subcategory, CATEGORY_MAX, SUBCATEGORY_MAX,
};
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Score assumed for a subcategory the generator did not rate.
pub const DEFAULT_SUBCATEGORY_SCORE: Score = 3;

pub const DEFAULT_TOP_WORDS: [&str; 3] = ["Professional", "Innovative", "Dedicated"];

/// Turns free-form generator output into a complete [`CompanyData`].
///
/// The text may wrap the object in prose or fences and may use strings or floats
/// for scores. Scores are clamped into their ranges; absent fields get defaults.
pub fn parse_analysis(company: &str, text: &str) -> Result<CompanyData> {
    let object = extract_object(text)?;

    let subcategories = parse_subcategories(company, object.get("subcategories"));

    let mut categories = CategoryScores::default();
    for category in Category::ALL {
        let parsed = object
            .get(category.key())
            .and_then(|value| as_score(value, CATEGORY_MAX));
        let score = match parsed {
            Some(score) => score,
            None => {
                let derived = subcategories.category_sum(category).min(CATEGORY_MAX);
                info!(
                    "deriving {} for {} from subcategories: {}",
                    category.key(),
                    company,
                    derived
                );
                derived
            }
        };
        categories.set(category, score);
    }

    let top3_words = match object.get("top3Words").and_then(as_string_list) {
        Some(words) if !words.is_empty() => words,
        _ => {
            info!("adding default top3Words for {}", company);
            DEFAULT_TOP_WORDS.iter().map(|word| word.to_string()).collect()
        }
    };

    let evp_statement = match object.get("evpStatement").and_then(as_text) {
        Some(statement) => statement,
        None => {
            info!("adding default evpStatement for {}", company);
            default_evp_statement(company)
        }
    };

    let extended_analysis = object
        .get("extendedAnalysis")
        .cloned()
        .and_then(|value| match serde_json::from_value::<ExtendedAnalysis>(value) {
            Ok(extended) => Some(extended),
            Err(e) => {
                debug!("dropping malformed extendedAnalysis for {}: {}", company, e);
                None
            }
        });

    Ok(CompanyData {
        categories,
        subcategories,
        glassdoor_score: object
            .get("glassdoorScore")
            .and_then(as_number)
            .map(|score| score.clamp(0.0, 5.0))
            .unwrap_or(0.0),
        num_employees: object
            .get("numEmployees")
            .and_then(as_number)
            .map(|count| count.max(0.0).round() as u64)
            .unwrap_or(0),
        primary_color: object.get("primaryColor").and_then(as_text),
        secondary_color: object.get("secondaryColor").and_then(as_text),
        tertiary_color: object.get("tertiaryColor").and_then(as_text),
        top3_words,
        evp_statement,
        analysis: parse_analysis_text(company, object.get("analysis")),
        extended_analysis,
    })
}

/// Finds the JSON object in `text`, tolerating prose or fences around it.
fn extract_object(text: &str) -> Result<Map<String, Value>> {
    let trimmed = text.trim();
    let candidate = match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => &trimmed[start..=end],
        _ => {
            return Err(WorkbrandError::Parse(
                "response does not contain a JSON object".to_string(),
            ))
        }
    };

    match serde_json::from_str::<Value>(candidate)
        .map_err(|e| WorkbrandError::Parse(e.to_string()))?
    {
        Value::Object(object) => Ok(object),
        other => Err(WorkbrandError::Parse(format!(
            "expected a JSON object, found {other}"
        ))),
    }
}

fn parse_subcategories(company: &str, value: Option<&Value>) -> SubcategoryScores {
    let Some(Value::Object(object)) = value else {
        info!("creating default subcategories for {}", company);
        return SubcategoryScores::uniform(DEFAULT_SUBCATEGORY_SCORE);
    };

    let mut scores = SubcategoryScores::uniform(DEFAULT_SUBCATEGORY_SCORE);
    for subcategory in Subcategory::ALL {
        let parsed = object
            .get(subcategory.key())
            .and_then(|value| as_score(value, SUBCATEGORY_MAX));
        match parsed {
            Some(score) => scores.set(subcategory, score),
            None => debug!("defaulting {} for {}", subcategory.key(), company),
        }
    }
    scores
}

fn parse_analysis_text(company: &str, value: Option<&Value>) -> CompanyAnalysis {
    let defaults = default_analysis(company);
    let Some(Value::Object(object)) = value else {
        info!("creating default analysis for {}", company);
        return defaults;
    };

    let field = |key: &str, fallback: String| object.get(key).and_then(as_text).unwrap_or(fallback);
    CompanyAnalysis {
        overview: field("overview", defaults.overview),
        interpersonal_fit: field(Category::InterpersonalFit.key(), defaults.interpersonal_fit),
        thriving_at_work: field(Category::ThrivingAtWork.key(), defaults.thriving_at_work),
        experience_and_competency: field(
            Category::ExperienceAndCompetency.key(),
            defaults.experience_and_competency,
        ),
        recognition_and_compensation: field(
            Category::RecognitionAndCompensation.key(),
            defaults.recognition_and_compensation,
        ),
        purpose_and_involvement: field(
            Category::PurposeAndInvolvement.key(),
            defaults.purpose_and_involvement,
        ),
    }
}

pub fn default_evp_statement(company: &str) -> String {
    format!(
        "{company} is committed to creating a positive and supportive work environment that \
enables employees to grow professionally while making meaningful contributions."
    )
}

pub fn default_analysis(company: &str) -> CompanyAnalysis {
    CompanyAnalysis {
        overview: format!(
            "{company} demonstrates a balanced approach to employee experience, with particular \
strengths in innovation and professional development."
        ),
        interpersonal_fit: format!(
            "{company} fosters an inclusive workplace environment with effective leadership structures."
        ),
        thriving_at_work: format!(
            "{company} provides opportunities for career advancement and encourages a healthy \
work-life balance."
        ),
        experience_and_competency: format!(
            "{company} equips employees with the necessary tools and resources to excel in their roles."
        ),
        recognition_and_compensation: format!(
            "{company} offers competitive compensation packages and recognizes employee contributions."
        ),
        purpose_and_involvement: format!(
            "{company} engages employees in meaningful work that aligns with the company's broader \
mission."
        ),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

fn as_score(value: &Value, max: Score) -> Option<Score> {
    as_number(value).map(|number| number.max(0.0).round().min(f64::from(max)) as Score)
}

fn as_text(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn as_string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(as_text).collect())
}
