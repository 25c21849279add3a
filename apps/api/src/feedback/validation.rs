use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::errors::AppError;
use crate::models::feedback::NewFeedback;

/// Every submission must rate each of these.
pub const REQUIRED_RATING_KEYS: [&str; 6] = [
    "personalityRating",
    "scenarioRating",
    "accuracyRating",
    "engagementRating",
    "insightRating",
    "recommendRating",
];

pub const RATING_RANGE: RangeInclusive<i64> = 1..=5;

pub const MAX_COMMENT_CHARS: usize = 500;

/// Checks keys, ranges and comment length, returning the record to persist.
/// Blank comments are dropped.
pub fn validate_feedback(
    scores: &BTreeMap<String, i64>,
    comments: Option<&str>,
) -> Result<NewFeedback, AppError> {
    let missing: Vec<&str> = REQUIRED_RATING_KEYS
        .iter()
        .copied()
        .filter(|key| !scores.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing feedback keys: {}",
            missing.join(", ")
        )));
    }

    let unknown: Vec<&str> = scores
        .keys()
        .map(String::as_str)
        .filter(|key| !REQUIRED_RATING_KEYS.contains(key))
        .collect();
    if !unknown.is_empty() {
        return Err(AppError::Validation(format!(
            "Unknown feedback keys: {}",
            unknown.join(", ")
        )));
    }

    let mut validated = BTreeMap::new();
    for (key, score) in scores {
        if !RATING_RANGE.contains(score) {
            return Err(AppError::Validation(format!(
                "Score for {key} must be between {} and {}, got {score}",
                RATING_RANGE.start(),
                RATING_RANGE.end()
            )));
        }
        // in range, so the narrowing cannot fail
        validated.insert(key.clone(), *score as i32);
    }

    let additional_comments = comments
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);
    if let Some(c) = &additional_comments {
        if c.chars().count() > MAX_COMMENT_CHARS {
            return Err(AppError::Validation(format!(
                "Additional comments must be at most {MAX_COMMENT_CHARS} characters"
            )));
        }
    }

    Ok(NewFeedback {
        feedback_scores: validated,
        additional_comments,
    })
}
