use crate::types::company::{Category, CompanyData, Score, Subcategory, CATEGORY_MAX};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::A
        } else if percentage >= 80.0 {
            Self::B
        } else if percentage >= 70.0 {
            Self::C
        } else if percentage >= 60.0 {
            Self::D
        } else {
            Self::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(letter)
    }
}

pub fn max_score() -> Score {
    CATEGORY_MAX * Category::ALL.len() as Score
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FocusArea {
    pub category: Category,
    pub score: Score,
    pub subcategories: Vec<Subcategory>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub total: Score,
    pub max: Score,
    pub percentage: f64,
    pub grade: Grade,
    pub strongest: CategoryScore,
    pub weakest: CategoryScore,
    pub focus_areas: Vec<FocusArea>,
}

impl ScoreSummary {
    pub fn of(data: &CompanyData) -> Self {
        let total = data.total_score();
        let max = max_score();
        let percentage = f64::from(total) / f64::from(max) * 100.0;
        Self {
            total,
            max,
            percentage,
            grade: Grade::from_percentage(percentage),
            strongest: strongest_category(data),
            weakest: weakest_category(data),
            focus_areas: focus_areas(data),
        }
    }
}

/// First category in canonical order holding the highest score.
pub fn strongest_category(data: &CompanyData) -> CategoryScore {
    pick_category(data, |candidate, best| candidate > best)
}

/// First category in canonical order holding the lowest score.
pub fn weakest_category(data: &CompanyData) -> CategoryScore {
    pick_category(data, |candidate, best| candidate < best)
}

fn pick_category(data: &CompanyData, better: impl Fn(Score, Score) -> bool) -> CategoryScore {
    let mut best = CategoryScore {
        category: Category::ALL[0],
        score: data.categories.get(Category::ALL[0]),
    };
    for category in Category::ALL.into_iter().skip(1) {
        let score = data.categories.get(category);
        if better(score, best.score) {
            best = CategoryScore { category, score };
        }
    }
    best
}

/// Per category, the subcategories tied at that category's lowest score.
pub fn focus_areas(data: &CompanyData) -> Vec<FocusArea> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let subcategories = category.subcategories();
            let lowest = subcategories
                .iter()
                .map(|subcategory| data.subcategories.get(*subcategory))
                .min()
                .unwrap_or_default();
            FocusArea {
                category,
                score: lowest,
                subcategories: subcategories
                    .into_iter()
                    .filter(|subcategory| data.subcategories.get(*subcategory) == lowest)
                    .collect(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDelta {
    pub category: Category,
    pub ours: Score,
    pub theirs: Score,
    pub delta: i64,
}

pub fn category_deltas(ours: &CompanyData, theirs: &CompanyData) -> Vec<CategoryDelta> {
    Category::ALL
        .into_iter()
        .map(|category| {
            let ours_score = ours.categories.get(category);
            let theirs_score = theirs.categories.get(category);
            CategoryDelta {
                category,
                ours: ours_score,
                theirs: theirs_score,
                delta: i64::from(ours_score) - i64::from(theirs_score),
            }
        })
        .collect()
}
