//! Rating classification — splits pillar ratings into strengths and focus areas.

use serde_json::Value;
use validator::Validate;

use crate::errors::AppError;
use crate::models::rating::{ClassifiedRatings, Rating};

/// Ratings at or above this value are framed as established assets.
pub const STRENGTH_THRESHOLD: i64 = 7;
/// Ratings at or below this value are framed as growth areas.
pub const FOCUS_THRESHOLD: i64 = 5;

/// Converts the raw `ratings` field of a request body into typed ratings.
///
/// Fails with a validation error when the field is absent, is not an array,
/// or holds an entry without a label or with a value outside 0..=10.
pub fn ratings_from_value(ratings: Option<&Value>) -> Result<Vec<Rating>, AppError> {
    let items = match ratings {
        None | Some(Value::Null) => {
            return Err(AppError::Validation("ratings is required".to_string()))
        }
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(AppError::Validation(
                "ratings must be an array".to_string(),
            ))
        }
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let rating: Rating = serde_json::from_value(item.clone())
                .map_err(|e| AppError::Validation(format!("ratings[{index}] is invalid: {e}")))?;
            rating
                .validate()
                .map_err(|e| AppError::Validation(format!("ratings[{index}] is invalid: {e}")))?;
            Ok(rating)
        })
        .collect()
}

/// Partitions ratings by threshold, preserving input order within each list.
///
/// A rating of 6 sits between the two thresholds and is left out of both.
pub fn classify(ratings: &[Rating]) -> ClassifiedRatings {
    let mut classified = ClassifiedRatings::default();

    for rating in ratings {
        if rating.value >= STRENGTH_THRESHOLD {
            classified.strengths.push(rating.clone());
        } else if rating.value <= FOCUS_THRESHOLD {
            classified.focus_areas.push(rating.clone());
        }
    }

    classified
}
