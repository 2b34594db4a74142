use serde::{Deserialize, Serialize};

use crate::config::ScoringWeights;
use crate::scoring::bayes::bayesian_rating;
use crate::Venue;

const GROWTH_CAP: f64 = 2.0;
const VOLUME_SATURATION: f64 = 500.0;
const STDDEV_TOLERANCE: f64 = 1.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlySignals {
    pub avg_rating: f64,
    pub total_reviews: u32,
    pub new_reviews_this_month: u32,
    pub previous_month_reviews: u32,
    pub rating_std_dev: f64,
    pub deals_quality: f64,
}

impl Default for MonthlySignals {
    fn default() -> Self {
        Self {
            avg_rating: 0.0,
            total_reviews: 0,
            new_reviews_this_month: 0,
            previous_month_reviews: 0,
            rating_std_dev: 0.0,
            deals_quality: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBreakdown {
    pub quality: f64,
    pub popularity: f64,
    pub consistency: f64,
    pub deals: f64,
    pub expert_boost: f64,
}

// Rank fields live on the leaderboard entry, not here: rank is a cross-venue
// property assigned only after the full set is sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyScore {
    pub power_score: f64,
    pub breakdown: MonthlyBreakdown,
}

pub fn calculate_monthly_score(
    venue: &Venue,
    signals: &MonthlySignals,
    weights: &ScoringWeights,
) -> MonthlyScore {
    let w = &weights.monthly;

    let adjusted_rating = bayesian_rating(
        signals.avg_rating,
        signals.total_reviews,
        weights.bayesian.m,
        weights.bayesian.c,
    );
    let quality = adjusted_rating / 5.0 * w.quality;

    let growth = (signals.new_reviews_this_month as f64
        / signals.previous_month_reviews.max(1) as f64)
        .min(GROWTH_CAP)
        / GROWTH_CAP;
    let volume = (signals.total_reviews as f64 / VOLUME_SATURATION).min(1.0);
    let popularity = (0.6 * growth + 0.4 * volume) * w.popularity;

    let consistency = (1.0 - signals.rating_std_dev / STDDEV_TOLERANCE).max(0.0) * w.consistency;
    let deals = signals.deals_quality * w.deals;
    let expert_boost = (venue.expert_boost_multiplier - 1.0) * 100.0 * (w.expert_boost / 15.0);

    let breakdown = MonthlyBreakdown {
        quality,
        popularity,
        consistency,
        deals,
        expert_boost,
    };
    let power_score = (quality + popularity + consistency + deals + expert_boost).min(100.0);

    MonthlyScore {
        power_score,
        breakdown,
    }
}
