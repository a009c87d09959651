pub mod grade;
pub mod normalize;

pub use grade::{category_deltas, ScoreSummary};
pub use normalize::{normalize, normalize_in_place};
