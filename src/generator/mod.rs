pub mod client;
pub mod parse;
pub mod prompt;

use crate::error::Result;
use crate::scoring::normalize;
use crate::types::company::CompanyData;
use client::TextGenerator;
use tracing::{error, info};

/// Asks the generator about `company`, then parses and normalizes the answer.
///
/// Returns `Ok(None)` when the generator produced no content or nothing parseable.
pub fn analyze_company(generator: &dyn TextGenerator, company: &str) -> Result<Option<CompanyData>> {
    let Some(text) = generator.complete(prompt::SYSTEM_PROMPT, &prompt::analysis_prompt(company))?
    else {
        error!("generator returned empty content for {}", company);
        return Ok(None);
    };

    let data = match parse::parse_analysis(company, &text) {
        Ok(data) => normalize(data),
        Err(e) => {
            error!("error analyzing company {}: {}", company, e);
            return Ok(None);
        }
    };
    info!("successfully analyzed {}", company);
    Ok(Some(data))
}

#[cfg(test)]
pub(crate) mod testing {
    use super::client::TextGenerator;
    use crate::error::Result;
    use std::cell::RefCell;

    /// Generator double that replays a canned reply and records prompts.
    pub struct CannedGenerator {
        reply: Option<String>,
        pub prompts: RefCell<Vec<String>>,
    }

    impl CannedGenerator {
        pub fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                prompts: RefCell::new(Vec::new()),
            }
        }

        pub fn silent() -> Self {
            Self {
                reply: None,
                prompts: RefCell::new(Vec::new()),
            }
        }
    }

    impl TextGenerator for CannedGenerator {
        fn complete(&self, _system: &str, prompt: &str) -> Result<Option<String>> {
            self.prompts.borrow_mut().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::CannedGenerator;
    use super::*;
    use crate::types::company::SubcategoryScores;

    #[test]
    fn generated_perfect_scores_are_capped_before_return() {
        let generator = CannedGenerator::replying(
            r#"{
                "interpersonalFit": 20, "thrivingAtWork": 20,
                "experienceAndCompetency": 20, "recognitionAndCompensation": 20,
                "purposeAndInvolvement": 20
            }"#,
        );

        let data = analyze_company(&generator, "Hooli")
            .expect("analysis should succeed")
            .expect("generator replied");

        assert_eq!(data.total_score(), 85);
        // Default subcategories of 3 scale to round(2.55) = 3.
        assert_eq!(data.subcategories, SubcategoryScores::uniform(3));
        assert!(generator.prompts.borrow()[0].contains("Hooli"));
    }

    #[test]
    fn empty_reply_is_not_an_error() {
        let generator = CannedGenerator::silent();
        assert!(analyze_company(&generator, "Hooli")
            .expect("empty reply is tolerated")
            .is_none());
    }

    #[test]
    fn unparseable_reply_yields_no_analysis() {
        let generator = CannedGenerator::replying("no json here");
        assert!(analyze_company(&generator, "Hooli")
            .expect("parse failures are not errors")
            .is_none());
    }

    #[test]
    fn oversized_generated_scores_are_clamped_then_capped() {
        let generator = CannedGenerator::replying(
            r#"{
                "interpersonalFit": 1e12, "thrivingAtWork": 20,
                "experienceAndCompetency": 20, "recognitionAndCompensation": 20,
                "purposeAndInvolvement": 20,
                "subcategories": {"diversityAndInclusion": 4e9, "leadershipEffectiveness": 4e9}
            }"#,
        );

        let data = analyze_company(&generator, "Hooli")
            .expect("analysis should succeed")
            .expect("generator replied");

        assert_eq!(data.total_score(), 85);
        assert_eq!(data.categories.interpersonal_fit, 17);
        assert_eq!(data.subcategories.diversity_and_inclusion, 4);
    }
}
