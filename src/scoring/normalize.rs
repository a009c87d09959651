use crate::types::company::{Category, CompanyData, Score, Subcategory};
use tracing::info;

pub const SCORE_CEILING: Score = 85;
pub const SUBCATEGORY_CAP: Score = 4;

/// What a call to [`normalize`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeOutcome {
    pub previous_total: Score,
    pub new_total: Score,
    /// `None` when the record was already at or under the ceiling.
    pub factor: Option<f64>,
}

impl NormalizeOutcome {
    pub fn rescaled(&self) -> bool {
        self.factor.is_some()
    }
}

/// Rescales `record` in place and reports what changed.
///
/// Above [`SCORE_CEILING`] every category and subcategory is multiplied by one
/// shared factor, so category order is preserved. Subcategories are then held
/// at or below [`SUBCATEGORY_CAP`].
///
/// A total of zero is under the ceiling, so no division happens. Each value is
/// rounded independently, which can leave the new total a unit or two away from
/// the ceiling.
pub fn normalize_in_place(record: &mut CompanyData) -> NormalizeOutcome {
    let previous_total = record.categories.total();
    if previous_total <= SCORE_CEILING {
        return NormalizeOutcome {
            previous_total,
            new_total: previous_total,
            factor: None,
        };
    }

    let factor = f64::from(SCORE_CEILING) / f64::from(previous_total);
    info!(
        "limiting total score from {} to {} (scaling factor: {:.2})",
        previous_total, SCORE_CEILING, factor
    );

    for category in Category::ALL {
        let scaled = scale(record.categories.get(category), factor);
        record.categories.set(category, scaled);
    }
    for subcategory in Subcategory::ALL {
        let scaled = scale(record.subcategories.get(subcategory), factor).min(SUBCATEGORY_CAP);
        record.subcategories.set(subcategory, scaled);
    }

    NormalizeOutcome {
        previous_total,
        new_total: record.categories.total(),
        factor: Some(factor),
    }
}

/// Owned variant of [`normalize_in_place`].
pub fn normalize(mut record: CompanyData) -> CompanyData {
    normalize_in_place(&mut record);
    record
}

fn scale(value: Score, factor: f64) -> Score {
    (f64::from(value) * factor).round() as Score
}
