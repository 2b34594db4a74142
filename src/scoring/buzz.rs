use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::{ExpectedPeakHours, SocialConfig};
use crate::sentiment::{analyze_sentiment, sentiment_label, SentimentLabel};
use crate::{Platform, SocialMention};

const LOOKBACK_HOURS: i64 = 24;
const PULSE_DIVISOR: f64 = 2.0;
const LATE_NIGHT_END_HOUR: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuzzTrend {
    Exploding,
    Rising,
    Steady,
    Falling,
    Dead,
}

impl BuzzTrend {
    pub fn label(self) -> &'static str {
        match self {
            BuzzTrend::Exploding => "exploding",
            BuzzTrend::Rising => "rising",
            BuzzTrend::Steady => "steady",
            BuzzTrend::Falling => "falling",
            BuzzTrend::Dead => "dead",
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            BuzzTrend::Exploding => 1.5,
            BuzzTrend::Rising => 1.2,
            BuzzTrend::Steady => 1.0,
            BuzzTrend::Falling => 0.8,
            BuzzTrend::Dead => 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopPost {
    pub platform: Platform,
    pub posted_at: DateTime<Utc>,
    pub engagement_score: f64,
    pub sentiment: SentimentLabel,
    pub excerpt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealTimeBuzz {
    pub current_pulse: f64,
    pub hourly_trend: BuzzTrend,
    pub peak_hour: u8,
    pub mentions_last_hour: usize,
    pub mentions_last_24h: usize,
    pub active_platforms: Vec<Platform>,
    pub top_post: Option<TopPost>,
    pub live_now: bool,
    pub is_viral: bool,
    pub crowd_sentiment: f64,
}

impl RealTimeBuzz {
    pub fn quiet() -> Self {
        Self {
            current_pulse: 0.0,
            hourly_trend: BuzzTrend::Dead,
            peak_hour: 0,
            mentions_last_hour: 0,
            mentions_last_24h: 0,
            active_platforms: Vec::new(),
            top_post: None,
            live_now: false,
            is_viral: false,
            crowd_sentiment: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuzzAggregator {
    social: SocialConfig,
    peak_hours: ExpectedPeakHours,
}

impl BuzzAggregator {
    pub fn new(social: SocialConfig, peak_hours: ExpectedPeakHours) -> Self {
        Self { social, peak_hours }
    }

    pub fn aggregate(&self, mentions: &[SocialMention], now: DateTime<Utc>) -> RealTimeBuzz {
        let window: Vec<&SocialMention> = mentions
            .iter()
            .filter(|mention| {
                let age = now.signed_duration_since(mention.posted_at);
                age.num_minutes() >= 0 && age.num_hours() < LOOKBACK_HOURS
            })
            .collect();

        if window.is_empty() {
            return RealTimeBuzz::quiet();
        }

        let last_hour: Vec<&SocialMention> = window
            .iter()
            .copied()
            .filter(|mention| now.signed_duration_since(mention.posted_at).num_minutes() < 60)
            .collect();

        let raw_pulse: f64 = last_hour
            .iter()
            .map(|mention| self.mention_score(mention, now))
            .sum();

        let boosted = raw_pulse * self.surprise_multiplier(now);
        let current_pulse = round1((boosted / PULSE_DIVISOR).min(100.0));

        let hourly_trend = self.classify_trend(&window, &last_hour);
        let live_now = last_hour.iter().any(|mention| mention.is_live);

        let mut active_platforms = Vec::new();
        for platform in Platform::all() {
            if window.iter().any(|mention| mention.platform == platform) {
                active_platforms.push(platform);
            }
        }

        let top_post = window
            .iter()
            .map(|mention| (self.mention_score(mention, now), *mention))
            .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(_, mention)| summarize(mention));

        let crowd_sentiment = mean_sentiment(&window);

        RealTimeBuzz {
            current_pulse,
            hourly_trend,
            peak_hour: busiest_hour(&window),
            mentions_last_hour: last_hour.len(),
            mentions_last_24h: window.len(),
            active_platforms,
            top_post,
            live_now,
            is_viral: current_pulse >= self.social.viral_threshold,
            crowd_sentiment,
        }
    }

    pub fn mention_score(&self, mention: &SocialMention, now: DateTime<Utc>) -> f64 {
        let age_minutes = now
            .signed_duration_since(mention.posted_at)
            .num_minutes()
            .max(0) as f64;
        let freshness = self
            .social
            .hourly_decay
            .powf(age_minutes / 60.0)
            .max(self.social.min_freshness_weight);

        let mut score = mention.engagement_score
            * freshness
            * influencer_multiplier(mention.author_followers)
            * self.social.platform_weights.for_platform(mention.platform);

        if mention.media.is_video() {
            score *= 1.3;
        }
        if mention.location_tagged {
            score *= 1.5;
        }
        if mention.is_live {
            score *= 2.0;
        }

        score
    }

    // Amplifies activity outside the weekday's expected peak hours; hours
    // 0-3 get a further late-night lift.
    fn surprise_multiplier(&self, now: DateTime<Utc>) -> f64 {
        let weekday = now.weekday();
        let hour = now.hour() as u8;
        let mut factor = 1.0;

        if !self.peak_hours.is_expected(weekday, hour) {
            factor *= if is_weekend(weekday) {
                self.social.weekend_surprise_multiplier
            } else {
                self.social.weekday_surprise_multiplier
            };
        }
        if hour <= LATE_NIGHT_END_HOUR {
            factor *= self.social.late_night_multiplier;
        }

        factor
    }

    fn classify_trend(&self, window: &[&SocialMention], last_hour: &[&SocialMention]) -> BuzzTrend {
        if window.is_empty() {
            return BuzzTrend::Dead;
        }

        let hour_count = last_hour.len() as f64;
        let avg_hourly_count = window.len() as f64 / LOOKBACK_HOURS as f64;

        let hour_engagement: f64 = last_hour
            .iter()
            .map(|mention| mention.engagement_score)
            .sum();
        let total_engagement: f64 = window
            .iter()
            .map(|mention| mention.engagement_score)
            .sum();
        let avg_hourly_engagement = total_engagement / LOOKBACK_HOURS as f64;

        let count_change = percent_change(hour_count, avg_hourly_count);
        let engagement_change = percent_change(hour_engagement, avg_hourly_engagement);
        let blended = 0.4 * count_change + 0.6 * engagement_change;

        if blended >= 100.0 {
            BuzzTrend::Exploding
        } else if blended >= 20.0 {
            BuzzTrend::Rising
        } else if blended <= -20.0 {
            BuzzTrend::Falling
        } else {
            BuzzTrend::Steady
        }
    }
}

// Second-order combinator for callers that want a single 0-100 factor.
pub fn buzz_to_scoring_factor(buzz: &RealTimeBuzz) -> f64 {
    let mut factor = buzz.current_pulse * buzz.hourly_trend.multiplier();

    if buzz.live_now {
        factor += 20.0;
    }

    factor *= match buzz.active_platforms.len() {
        0 | 1 => 1.0,
        2 => 1.1,
        _ => 1.2,
    };

    factor.min(100.0)
}

pub fn influencer_multiplier(followers: u64) -> f64 {
    if followers >= 1_000_000 {
        3.0
    } else if followers >= 100_000 {
        2.0
    } else if followers >= 10_000 {
        1.5
    } else if followers >= 1_000 {
        1.2
    } else {
        1.0
    }
}

fn percent_change(current: f64, baseline: f64) -> f64 {
    if baseline <= 0.0 {
        return 0.0;
    }
    (current - baseline) / baseline * 100.0
}

fn busiest_hour(window: &[&SocialMention]) -> u8 {
    let mut counts = [0usize; 24];
    for mention in window {
        counts[mention.posted_at.hour() as usize] += 1;
    }
    counts
        .iter()
        .enumerate()
        .max_by_key(|(_, count)| *count)
        .map(|(hour, _)| hour as u8)
        .unwrap_or(0)
}

fn mean_sentiment(window: &[&SocialMention]) -> f64 {
    let mut total = 0.0;
    let mut counted = 0usize;
    for mention in window {
        if mention.text.trim().is_empty() {
            continue;
        }
        total += analyze_sentiment(&mention.text).score;
        counted += 1;
    }
    if counted == 0 {
        0.0
    } else {
        total / counted as f64
    }
}

fn summarize(mention: &SocialMention) -> TopPost {
    let excerpt: String = mention.text.chars().take(80).collect();
    let sentiment = sentiment_label(analyze_sentiment(&mention.text).score);
    TopPost {
        platform: mention.platform,
        posted_at: mention.posted_at,
        engagement_score: mention.engagement_score,
        sentiment,
        excerpt,
    }
}

fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
