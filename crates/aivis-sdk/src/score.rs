//! Local heuristic score estimator.

use crate::types::SignalBundle;

const BASE_SCORE: u32 = 20;

/// Estimate a visibility score in [0, 100] from observable signals.
///
/// Fixed additive weights, no configuration, no side effects. Inputs are
/// not validated: `content_age_months` values that are negative or NaN
/// simply fall through the age comparisons (NaN earns no freshness
/// bonus). Only the final sum is clamped.
pub fn estimate_score(signals: &SignalBundle) -> u32 {
    let mut score = BASE_SCORE;

    score += platform_bonus(signals.platform_count);

    if signals.has_entity_record {
        score += 10;
    }
    if signals.has_business_listing {
        score += 8;
    }
    if signals.has_structured_markup {
        score += 10;
    }

    score += age_bonus(signals.content_age_months);

    if signals.has_comparison_content {
        score += 15;
    }

    score.clamp(0, 100)
}

/// +25 plateau at four platforms, +5 per platform from two up.
fn platform_bonus(count: u32) -> u32 {
    if count >= 4 {
        25
    } else if count >= 2 {
        5 * count
    } else {
        0
    }
}

/// Freshness bonus: +12 within six months, +8 within twelve.
fn age_bonus(months: f64) -> u32 {
    if months <= 6.0 {
        12
    } else if months <= 12.0 {
        8
    } else {
        0
    }
}
