use chrono::{DateTime, Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::scoring::monthly::MonthlySignals;
use crate::{MediaType, Platform, SignalSummary, SocialMention, Venue};

const VENUE_NAMES: [&str; 16] = [
    "Neon Owl", "Velvet Room", "The Tin Roof", "Afterglow", "Basement 9", "Lucky Tiger",
    "Midnight Social", "The Alcove", "Static Lounge", "Honey Trap", "Blue Jackal",
    "Paper Crane", "The Foundry", "Night Market", "Gilded Lily", "Low Tide",
];

const CATEGORIES: [&str; 5] = ["bar", "club", "lounge", "speakeasy", "rooftop"];

const MENTION_TEXTS: [&str; 8] = [
    "this place is absolutely packed tonight 🔥",
    "line around the block, 40 people deep",
    "so fun, amazing vibes",
    "pretty quiet in here tonight",
    "best night out in months 🎉",
    "not great, kind of dead",
    "45 min wait but worth it",
    "",
];

#[derive(Debug, Clone)]
pub struct SyntheticVenue {
    pub venue: Venue,
    pub signals: SignalSummary,
    pub monthly: MonthlySignals,
    pub mentions: Vec<SocialMention>,
    pub previous_rank: Option<u32>,
    pub previous_score: f64,
}

pub fn generate_venues(count: usize, seed: u64, now: DateTime<Utc>) -> Vec<SyntheticVenue> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut venues = Vec::with_capacity(count);

    for idx in 0..count {
        let name = VENUE_NAMES[idx % VENUE_NAMES.len()];
        let curated = rng.gen::<f64>() < 0.2;
        let venue = Venue {
            id: format!("venue_{}", idx),
            name: if idx < VENUE_NAMES.len() {
                name.to_string()
            } else {
                format!("{} {}", name, idx / VENUE_NAMES.len() + 1)
            },
            latitude: 40.71 + rng.gen_range(-0.05..0.05),
            longitude: -74.0 + rng.gen_range(-0.05..0.05),
            category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string(),
            expert_boost_multiplier: if curated {
                1.0 + rng.gen_range(0.05..0.3)
            } else {
                1.0
            },
        };

        let rating_count = rng.gen_range(0..600);
        let signals = SignalSummary {
            rating: rng.gen_range(2.5..5.0),
            rating_count,
            recent_reviews: rng.gen_range(0..8),
            checkins: rng.gen_range(0..12),
            mentions: rng.gen_range(0..10),
            is_open: rng.gen::<f64>() < 0.8,
            active_deals: rng.gen_range(0..4),
            distance_miles: rng.gen_range(0.1..4.0),
            hours_since_last_signal: rng.gen_range(0.0..12.0),
        };

        let monthly = MonthlySignals {
            avg_rating: signals.rating,
            total_reviews: rating_count,
            new_reviews_this_month: rng.gen_range(0..40),
            previous_month_reviews: rng.gen_range(1..40),
            rating_std_dev: rng.gen_range(0.0..1.2),
            deals_quality: rng.gen_range(0.0..1.0),
        };

        let mentions = generate_mentions(&mut rng, now);
        let previous_rank = if rng.gen::<f64>() < 0.85 {
            Some(rng.gen_range(1..=count.max(1) as u32))
        } else {
            None
        };

        venues.push(SyntheticVenue {
            venue,
            signals,
            monthly,
            mentions,
            previous_rank,
            previous_score: rng.gen_range(20.0..90.0),
        });
    }

    venues
}

fn generate_mentions(rng: &mut StdRng, now: DateTime<Utc>) -> Vec<SocialMention> {
    let count = rng.gen_range(0..30);
    let mut mentions = Vec::with_capacity(count);

    for _ in 0..count {
        let platform = match rng.gen_range(0..3) {
            0 => Platform::Twitter,
            1 => Platform::Instagram,
            _ => Platform::Tiktok,
        };
        let media = match rng.gen_range(0..3) {
            0 => MediaType::Text,
            1 => MediaType::Image,
            _ => MediaType::Video,
        };
        let age_minutes = rng.gen_range(0..1440);

        mentions.push(SocialMention {
            platform,
            posted_at: now - Duration::minutes(age_minutes),
            engagement_score: rng.gen_range(0.0..100.0),
            author_followers: sample_followers(rng),
            is_live: rng.gen::<f64>() < 0.05,
            location_tagged: rng.gen::<f64>() < 0.4,
            media,
            text: MENTION_TEXTS[rng.gen_range(0..MENTION_TEXTS.len())].to_string(),
        });
    }

    mentions
}

fn sample_followers(rng: &mut StdRng) -> u64 {
    match rng.gen_range(0..100) {
        0 => rng.gen_range(1_000_000..5_000_000),
        1..=4 => rng.gen_range(100_000..1_000_000),
        5..=19 => rng.gen_range(10_000..100_000),
        20..=54 => rng.gen_range(1_000..10_000),
        _ => rng.gen_range(10..1_000),
    }
}
