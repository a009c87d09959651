use serde::{Deserialize, Serialize};
use std::fmt;

pub type Score = u32;

/// Upper bound of a single category score.
pub const CATEGORY_MAX: Score = 20;
/// Upper bound of a single subcategory score.
pub const SUBCATEGORY_MAX: Score = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    InterpersonalFit,
    ThrivingAtWork,
    ExperienceAndCompetency,
    RecognitionAndCompensation,
    PurposeAndInvolvement,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::InterpersonalFit,
        Category::ThrivingAtWork,
        Category::ExperienceAndCompetency,
        Category::RecognitionAndCompensation,
        Category::PurposeAndInvolvement,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::InterpersonalFit => "interpersonalFit",
            Self::ThrivingAtWork => "thrivingAtWork",
            Self::ExperienceAndCompetency => "experienceAndCompetency",
            Self::RecognitionAndCompensation => "recognitionAndCompensation",
            Self::PurposeAndInvolvement => "purposeAndInvolvement",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InterpersonalFit => "Interpersonal Fit",
            Self::ThrivingAtWork => "Thriving at Work",
            Self::ExperienceAndCompetency => "Experience & Competency",
            Self::RecognitionAndCompensation => "Recognition & Compensation",
            Self::PurposeAndInvolvement => "Purpose & Involvement",
        }
    }

    pub fn subcategories(self) -> [Subcategory; 4] {
        use Subcategory::*;
        match self {
            Self::InterpersonalFit => [
                DiversityAndInclusion,
                LeadershipEffectiveness,
                EmployeeAdvocacy,
                WorkplaceCulture,
            ],
            Self::ThrivingAtWork => [
                EmployerValueProposition,
                CareerDevelopment,
                InnovationAdvancement,
                WorkLifeBalance,
            ],
            Self::ExperienceAndCompetency => [
                EmployeeExperience,
                CompetencyUtilization,
                ProfessionalGrowth,
                ResourceAccess,
            ],
            Self::RecognitionAndCompensation => [
                CompensationCompetitiveness,
                TalentRetention,
                PerformanceRecognition,
                CompensationTransparency,
            ],
            Self::PurposeAndInvolvement => [
                SocialResponsibility,
                SustainabilityInitiatives,
                EmployeeEngagement,
                MeaningfulWork,
            ],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Subcategory {
    DiversityAndInclusion,
    LeadershipEffectiveness,
    EmployeeAdvocacy,
    WorkplaceCulture,
    EmployerValueProposition,
    CareerDevelopment,
    InnovationAdvancement,
    WorkLifeBalance,
    EmployeeExperience,
    CompetencyUtilization,
    ProfessionalGrowth,
    ResourceAccess,
    CompensationCompetitiveness,
    TalentRetention,
    PerformanceRecognition,
    CompensationTransparency,
    SocialResponsibility,
    SustainabilityInitiatives,
    EmployeeEngagement,
    MeaningfulWork,
}

impl Subcategory {
    pub const ALL: [Subcategory; 20] = [
        Subcategory::DiversityAndInclusion,
        Subcategory::LeadershipEffectiveness,
        Subcategory::EmployeeAdvocacy,
        Subcategory::WorkplaceCulture,
        Subcategory::EmployerValueProposition,
        Subcategory::CareerDevelopment,
        Subcategory::InnovationAdvancement,
        Subcategory::WorkLifeBalance,
        Subcategory::EmployeeExperience,
        Subcategory::CompetencyUtilization,
        Subcategory::ProfessionalGrowth,
        Subcategory::ResourceAccess,
        Subcategory::CompensationCompetitiveness,
        Subcategory::TalentRetention,
        Subcategory::PerformanceRecognition,
        Subcategory::CompensationTransparency,
        Subcategory::SocialResponsibility,
        Subcategory::SustainabilityInitiatives,
        Subcategory::EmployeeEngagement,
        Subcategory::MeaningfulWork,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::DiversityAndInclusion => "diversityAndInclusion",
            Self::LeadershipEffectiveness => "leadershipEffectiveness",
            Self::EmployeeAdvocacy => "employeeAdvocacy",
            Self::WorkplaceCulture => "workplaceCulture",
            Self::EmployerValueProposition => "employerValueProposition",
            Self::CareerDevelopment => "careerDevelopment",
            Self::InnovationAdvancement => "innovationAdvancement",
            Self::WorkLifeBalance => "workLifeBalance",
            Self::EmployeeExperience => "employeeExperience",
            Self::CompetencyUtilization => "competencyUtilization",
            Self::ProfessionalGrowth => "professionalGrowth",
            Self::ResourceAccess => "resourceAccess",
            Self::CompensationCompetitiveness => "compensationCompetitiveness",
            Self::TalentRetention => "talentRetention",
            Self::PerformanceRecognition => "performanceRecognition",
            Self::CompensationTransparency => "compensationTransparency",
            Self::SocialResponsibility => "socialResponsibility",
            Self::SustainabilityInitiatives => "sustainabilityInitiatives",
            Self::EmployeeEngagement => "employeeEngagement",
            Self::MeaningfulWork => "meaningfulWork",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::DiversityAndInclusion => "Diversity, Equity, Inclusion, and Belonging",
            Self::LeadershipEffectiveness => "Leadership Effectiveness and Alignment",
            Self::EmployeeAdvocacy => "Employee Advocacy and Brand Ambassadorship",
            Self::WorkplaceCulture => "Workplace Culture and Relationships",
            Self::EmployerValueProposition => "Employer Value Proposition Strength",
            Self::CareerDevelopment => "Career Development and Learning Opportunities",
            Self::InnovationAdvancement => "Innovation and Technological Advancement",
            Self::WorkLifeBalance => "Work-life Balance and Flexibility",
            Self::EmployeeExperience => "Employee Experience Consistency",
            Self::CompetencyUtilization => "Feeling of Competency and Skill Utilization",
            Self::ProfessionalGrowth => "Professional Growth and Advancement Opportunities",
            Self::ResourceAccess => "Access to Necessary Resources and Tools",
            Self::CompensationCompetitiveness => "Compensation and Benefits Competitiveness",
            Self::TalentRetention => "Talent Attraction and Retention Rates",
            Self::PerformanceRecognition => "Performance Recognition and Appreciation",
            Self::CompensationTransparency => "Transparency in Compensation Structure",
            Self::SocialResponsibility => "Social Responsibility and Community Impact",
            Self::SustainabilityInitiatives => "Corporate Sustainability Initiatives",
            Self::EmployeeEngagement => "Employee Engagement in Company Goals",
            Self::MeaningfulWork => "Opportunities for Meaningful Work",
        }
    }

}

/// The five top-level scores, serialized flat under their camelCase keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub interpersonal_fit: Score,
    pub thriving_at_work: Score,
    pub experience_and_competency: Score,
    pub recognition_and_compensation: Score,
    pub purpose_and_involvement: Score,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::InterpersonalFit => self.interpersonal_fit,
            Category::ThrivingAtWork => self.thriving_at_work,
            Category::ExperienceAndCompetency => self.experience_and_competency,
            Category::RecognitionAndCompensation => self.recognition_and_compensation,
            Category::PurposeAndInvolvement => self.purpose_and_involvement,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Score {
        match category {
            Category::InterpersonalFit => &mut self.interpersonal_fit,
            Category::ThrivingAtWork => &mut self.thriving_at_work,
            Category::ExperienceAndCompetency => &mut self.experience_and_competency,
            Category::RecognitionAndCompensation => &mut self.recognition_and_compensation,
            Category::PurposeAndInvolvement => &mut self.purpose_and_involvement,
        }
    }

    pub fn set(&mut self, category: Category, value: Score) {
        *self.get_mut(category) = value;
    }

    /// Saturates instead of overflowing on out-of-range stored values.
    pub fn total(&self) -> Score {
        Category::ALL
            .iter()
            .fold(0, |total: Score, category| total.saturating_add(self.get(*category)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryScores {
    pub diversity_and_inclusion: Score,
    pub leadership_effectiveness: Score,
    pub employee_advocacy: Score,
    pub workplace_culture: Score,

    pub employer_value_proposition: Score,
    pub career_development: Score,
    pub innovation_advancement: Score,
    pub work_life_balance: Score,

    pub employee_experience: Score,
    pub competency_utilization: Score,
    pub professional_growth: Score,
    pub resource_access: Score,

    pub compensation_competitiveness: Score,
    pub talent_retention: Score,
    pub performance_recognition: Score,
    pub compensation_transparency: Score,

    pub social_responsibility: Score,
    pub sustainability_initiatives: Score,
    pub employee_engagement: Score,
    pub meaningful_work: Score,
}

impl SubcategoryScores {
    pub fn uniform(value: Score) -> Self {
        let mut scores = Self::default();
        for subcategory in Subcategory::ALL {
            scores.set(subcategory, value);
        }
        scores
    }

    pub fn get(&self, subcategory: Subcategory) -> Score {
        match subcategory {
            Subcategory::DiversityAndInclusion => self.diversity_and_inclusion,
            Subcategory::LeadershipEffectiveness => self.leadership_effectiveness,
            Subcategory::EmployeeAdvocacy => self.employee_advocacy,
            Subcategory::WorkplaceCulture => self.workplace_culture,
            Subcategory::EmployerValueProposition => self.employer_value_proposition,
            Subcategory::CareerDevelopment => self.career_development,
            Subcategory::InnovationAdvancement => self.innovation_advancement,
            Subcategory::WorkLifeBalance => self.work_life_balance,
            Subcategory::EmployeeExperience => self.employee_experience,
            Subcategory::CompetencyUtilization => self.competency_utilization,
            Subcategory::ProfessionalGrowth => self.professional_growth,
            Subcategory::ResourceAccess => self.resource_access,
            Subcategory::CompensationCompetitiveness => self.compensation_competitiveness,
            Subcategory::TalentRetention => self.talent_retention,
            Subcategory::PerformanceRecognition => self.performance_recognition,
            Subcategory::CompensationTransparency => self.compensation_transparency,
            Subcategory::SocialResponsibility => self.social_responsibility,
            Subcategory::SustainabilityInitiatives => self.sustainability_initiatives,
            Subcategory::EmployeeEngagement => self.employee_engagement,
            Subcategory::MeaningfulWork => self.meaningful_work,
        }
    }

    pub fn get_mut(&mut self, subcategory: Subcategory) -> &mut Score {
        match subcategory {
            Subcategory::DiversityAndInclusion => &mut self.diversity_and_inclusion,
            Subcategory::LeadershipEffectiveness => &mut self.leadership_effectiveness,
            Subcategory::EmployeeAdvocacy => &mut self.employee_advocacy,
            Subcategory::WorkplaceCulture => &mut self.workplace_culture,
            Subcategory::EmployerValueProposition => &mut self.employer_value_proposition,
            Subcategory::CareerDevelopment => &mut self.career_development,
            Subcategory::InnovationAdvancement => &mut self.innovation_advancement,
            Subcategory::WorkLifeBalance => &mut self.work_life_balance,
            Subcategory::EmployeeExperience => &mut self.employee_experience,
            Subcategory::CompetencyUtilization => &mut self.competency_utilization,
            Subcategory::ProfessionalGrowth => &mut self.professional_growth,
            Subcategory::ResourceAccess => &mut self.resource_access,
            Subcategory::CompensationCompetitiveness => &mut self.compensation_competitiveness,
            Subcategory::TalentRetention => &mut self.talent_retention,
            Subcategory::PerformanceRecognition => &mut self.performance_recognition,
            Subcategory::CompensationTransparency => &mut self.compensation_transparency,
            Subcategory::SocialResponsibility => &mut self.social_responsibility,
            Subcategory::SustainabilityInitiatives => &mut self.sustainability_initiatives,
            Subcategory::EmployeeEngagement => &mut self.employee_engagement,
            Subcategory::MeaningfulWork => &mut self.meaningful_work,
        }
    }

    pub fn set(&mut self, subcategory: Subcategory, value: Score) {
        *self.get_mut(subcategory) = value;
    }

    /// Sum of the four subcategories nested under `category`.
    pub fn category_sum(&self, category: Category) -> Score {
        category
            .subcategories()
            .iter()
            .fold(0, |sum: Score, subcategory| sum.saturating_add(self.get(*subcategory)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAnalysis {
    pub overview: String,
    pub interpersonal_fit: String,
    pub thriving_at_work: String,
    pub experience_and_competency: String,
    pub recognition_and_compensation: String,
    pub purpose_and_involvement: String,
}

impl CompanyAnalysis {
    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::InterpersonalFit => &self.interpersonal_fit,
            Category::ThrivingAtWork => &self.thriving_at_work,
            Category::ExperienceAndCompetency => &self.experience_and_competency,
            Category::RecognitionAndCompensation => &self.recognition_and_compensation,
            Category::PurposeAndInvolvement => &self.purpose_and_involvement,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlassdoorScores {
    pub rating: f64,
    pub recommendation_rate: u32,
    pub ceo_approval: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentScores {
    pub glassdoor: GlassdoorScores,
    pub social_media_sentiment: u32,
    pub media_sentiment: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorScore {
    pub company: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPresence {
    pub linkedin_followers: u64,
    pub instagram_followers: u64,
    pub top_engagement_topics: Vec<String>,
    pub platforms: Vec<String>,
    pub branded_hashtags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaMention {
    pub source: String,
    pub title: String,
    pub sentiment: Sentiment,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRecommendation {
    pub category: String,
    pub action: String,
    pub priority: Priority,
}

/// Curated sentiment research, present on some benchmark companies only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedAnalysis {
    pub report_date: String,
    pub overall_sentiment_score: u32,
    pub scores: SentimentScores,
    pub competitor_scores: Vec<CompetitorScore>,
    pub praise: Vec<String>,
    pub criticism: Vec<String>,
    pub social_media: SocialPresence,
    pub media_coverage: Vec<MediaMention>,
    pub recommendations: Vec<BrandRecommendation>,
}

/// One company's employer brand record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyData {
    #[serde(flatten)]
    pub categories: CategoryScores,
    pub subcategories: SubcategoryScores,
    #[serde(default)]
    pub glassdoor_score: f64,
    #[serde(default)]
    pub num_employees: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tertiary_color: Option<String>,
    pub top3_words: Vec<String>,
    pub evp_statement: String,
    pub analysis: CompanyAnalysis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_analysis: Option<ExtendedAnalysis>,
}

impl CompanyData {
    /// Placeholder profile for a company added by an admin before any analysis.
    pub fn blank() -> Self {
        Self {
            categories: CategoryScores::default(),
            subcategories: SubcategoryScores::default(),
            glassdoor_score: 0.0,
            num_employees: 0,
            primary_color: None,
            secondary_color: None,
            tertiary_color: None,
            top3_words: vec!["New".into(), "Company".into(), "Profile".into()],
            evp_statement: "New company profile - EVP statement pending".to_string(),
            analysis: CompanyAnalysis::default(),
            extended_analysis: None,
        }
    }

    pub fn total_score(&self) -> Score {
        self.categories.total()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCompany {
    #[serde(flatten)]
    pub data: CompanyData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subcategory_belongs_to_exactly_one_category() {
        for subcategory in Subcategory::ALL {
            let owners = Category::ALL
                .iter()
                .filter(|category| category.subcategories().contains(&subcategory))
                .count();
            assert_eq!(owners, 1, "{} has {} owners", subcategory.key(), owners);
        }
    }

    #[test]
    fn category_scores_serialize_flat_with_camel_case_keys() {
        let mut data = CompanyData::blank();
        data.categories.set(Category::ThrivingAtWork, 17);
        data.subcategories.set(Subcategory::WorkLifeBalance, 4);

        let value = serde_json::to_value(&data).expect("record should serialize");
        assert_eq!(value["thrivingAtWork"], 17);
        assert_eq!(value["subcategories"]["workLifeBalance"], 4);
        assert_eq!(value["top3Words"][0], "New");
        assert!(value.get("extendedAnalysis").is_none());
    }

    #[test]
    fn stored_company_round_trips_email_alongside_record() {
        let stored = StoredCompany {
            data: CompanyData::blank(),
            email: Some("owner@acme.com".to_string()),
        };
        let json = serde_json::to_string(&stored).expect("stored company should serialize");
        let back: StoredCompany = serde_json::from_str(&json).expect("stored company should parse");
        assert_eq!(back, stored);
    }

    #[test]
    fn category_sum_adds_nested_subcategories() {
        let scores = SubcategoryScores::uniform(3);
        assert_eq!(scores.category_sum(Category::PurposeAndInvolvement), 12);
    }

    #[test]
    fn sums_saturate_on_oversized_stored_values() {
        let mut categories = CategoryScores::default();
        categories.set(Category::InterpersonalFit, Score::MAX);
        categories.set(Category::ThrivingAtWork, 20);
        assert_eq!(categories.total(), Score::MAX);

        let mut subcategories = SubcategoryScores::uniform(Score::MAX);
        subcategories.set(Subcategory::DiversityAndInclusion, 1);
        assert_eq!(subcategories.category_sum(Category::InterpersonalFit), Score::MAX);
    }
}
