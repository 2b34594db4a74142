pub mod config;
pub mod scoring;
pub mod sentiment;
pub mod synthetic;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Tiktok,
}

impl Platform {
    pub fn label(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
        }
    }

    pub fn all() -> [Platform; 3] {
        [Platform::Twitter, Platform::Instagram, Platform::Tiktok]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Text,
    Image,
    Video,
}

impl MediaType {
    pub fn is_video(self) -> bool {
        matches!(self, MediaType::Video)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub category: String,
    pub expert_boost_multiplier: f64,
}

impl Venue {
    pub fn is_curated(&self) -> bool {
        self.expert_boost_multiplier > 1.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalSummary {
    pub rating: f64,
    pub rating_count: u32,
    pub recent_reviews: u32,
    pub checkins: u32,
    pub mentions: u32,
    pub is_open: bool,
    pub active_deals: u32,
    pub distance_miles: f64,
    pub hours_since_last_signal: f64,
}

impl Default for SignalSummary {
    fn default() -> Self {
        Self {
            rating: 0.0,
            rating_count: 0,
            recent_reviews: 0,
            checkins: 0,
            mentions: 0,
            is_open: false,
            active_deals: 0,
            distance_miles: 0.0,
            hours_since_last_signal: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMention {
    pub platform: Platform,
    pub posted_at: DateTime<Utc>,
    pub engagement_score: f64,
    pub author_followers: u64,
    pub is_live: bool,
    pub location_tagged: bool,
    pub media: MediaType,
    #[serde(default)]
    pub text: String,
}

pub fn format_number(value: f64) -> String {
    let digits = (value.round().max(0.0) as u64).to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

pub fn format_float(value: f64, digits: usize) -> String {
    format!("{:.1$}", value, digits)
}

pub fn format_delta(value: Option<i64>) -> String {
    match value {
        Some(delta) if delta > 0 => format!("+{}", delta),
        Some(delta) => delta.to_string(),
        None => "new".to_string(),
    }
}
