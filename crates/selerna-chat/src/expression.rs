//! Keyword-based facial expression selection.

use crate::types::FacialExpression;

const POSITIVE_KEYWORDS: &[&str] = &[
    "great",
    "glad",
    "awesome",
    "happy",
    "nice",
    "thanks",
    "sounds good",
];

const NEGATIVE_KEYWORDS: &[&str] = &["sorry", "unfortunately", "concern"];

/// Pick an expression for already-lowercased reply text.
///
/// Positive keywords are checked before negative ones.
pub fn select_expression(reply_lower: &str) -> FacialExpression {
    if POSITIVE_KEYWORDS.iter().any(|k| reply_lower.contains(k)) {
        return FacialExpression::Smile;
    }
    if NEGATIVE_KEYWORDS.iter().any(|k| reply_lower.contains(k)) {
        return FacialExpression::Concerned;
    }
    FacialExpression::Default
}
