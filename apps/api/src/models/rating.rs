use serde::Deserialize;
use validator::Validate;

/// A single pillar's self-assessment score, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct Rating {
    #[serde(default)]
    pub id: Option<String>,
    #[validate(length(min = 1, message = "label must not be empty"))]
    pub label: String,
    #[validate(range(min = 0, max = 10, message = "value must be between 0 and 10"))]
    pub value: i64,
}

/// Ratings partitioned into existing assets and areas to work on.
/// A rating of exactly 6 lands in neither list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedRatings {
    pub strengths: Vec<Rating>,
    pub focus_areas: Vec<Rating>,
}
