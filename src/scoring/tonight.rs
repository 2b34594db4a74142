use serde::{Deserialize, Serialize};

use crate::config::ScoringWeights;
use crate::scoring::bayes::bayesian_rating;
use crate::scoring::buzz::{BuzzTrend, RealTimeBuzz};
use crate::scoring::decay::{proximity_bonus, recency_weight};
use crate::{SignalSummary, Venue};

const POPULARITY_SATURATION: f64 = 20.0;
const DEALS_SATURATION: f64 = 3.0;
const MAX_BUZZ_BOOST: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn label(self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TonightBreakdown {
    pub quality: f64,
    pub popularity: f64,
    pub open_now: f64,
    pub deals: f64,
    pub proximity: f64,
    pub expert_boost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuzzContribution {
    pub pulse: f64,
    pub trend: BuzzTrend,
    pub is_viral: bool,
    pub popularity_boost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TonightScore {
    pub total: f64,
    pub breakdown: TonightBreakdown,
    pub confidence: Confidence,
    pub social_buzz: Option<BuzzContribution>,
    pub sources: Vec<String>,
}

pub fn calculate_tonight_score(
    venue: &Venue,
    signals: &SignalSummary,
    buzz: Option<&RealTimeBuzz>,
    weights: &ScoringWeights,
) -> TonightScore {
    let w = &weights.tonight;

    let adjusted_rating = bayesian_rating(
        signals.rating,
        signals.rating_count,
        weights.bayesian.m,
        weights.bayesian.c,
    );
    let quality = adjusted_rating / 5.0 * w.quality;

    let raw_activity = signals.recent_reviews as f64 * 3.0
        + signals.checkins as f64 * 2.0
        + signals.mentions as f64;
    let base_popularity = (raw_activity / POPULARITY_SATURATION).min(1.0)
        * recency_weight(
            signals.hours_since_last_signal,
            weights.recency.tonight_half_life_hours,
        )
        * w.popularity;

    let (popularity, social_buzz) = match buzz {
        Some(buzz) => {
            let boost = buzz.current_pulse / 100.0 * MAX_BUZZ_BOOST;
            let boosted = (base_popularity * (1.0 + boost)).min(w.popularity);
            let contribution = BuzzContribution {
                pulse: buzz.current_pulse,
                trend: buzz.hourly_trend,
                is_viral: buzz.is_viral,
                popularity_boost: boosted - base_popularity,
            };
            (boosted, Some(contribution))
        }
        None => (base_popularity, None),
    };

    let open_now = if signals.is_open { w.open_now } else { 0.0 };
    let deals = (signals.active_deals as f64 / DEALS_SATURATION).min(1.0) * w.deals;
    let proximity = proximity_bonus(
        signals.distance_miles,
        weights.proximity.max_boost_miles,
        weights.proximity.decay_rate,
    ) * w.proximity;
    let expert_boost = (venue.expert_boost_multiplier - 1.0) * 100.0 * (w.expert_boost / 15.0);

    let breakdown = TonightBreakdown {
        quality,
        popularity,
        open_now,
        deals,
        proximity,
        expert_boost,
    };
    let total = (quality + popularity + open_now + deals + proximity + expert_boost).min(100.0);

    TonightScore {
        total,
        breakdown,
        confidence: confidence_for(signals),
        sources: contributing_sources(signals, buzz),
        social_buzz,
    }
}

fn confidence_for(signals: &SignalSummary) -> Confidence {
    if signals.rating_count > 50 && signals.recent_reviews > 2 {
        Confidence::High
    } else if signals.rating_count > 10 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

// Derived from whichever signals actually contributed this call, never
// hard-coded.
fn contributing_sources(signals: &SignalSummary, buzz: Option<&RealTimeBuzz>) -> Vec<String> {
    let mut sources = Vec::new();
    if signals.rating_count > 0 {
        sources.push("reviews".to_string());
    }
    if signals.checkins > 0 {
        sources.push("checkins".to_string());
    }
    if signals.mentions > 0 {
        sources.push("mentions".to_string());
    }
    if signals.active_deals > 0 {
        sources.push("deals".to_string());
    }
    if let Some(buzz) = buzz {
        for platform in &buzz.active_platforms {
            sources.push(platform.label().to_string());
        }
    }
    sources
}
