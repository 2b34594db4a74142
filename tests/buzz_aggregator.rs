use chrono::{DateTime, Duration, TimeZone, Utc};

use nightpulse::config::{ExpectedPeakHours, SocialConfig};
use nightpulse::scoring::buzz::{
    buzz_to_scoring_factor, influencer_multiplier, BuzzAggregator, BuzzTrend, RealTimeBuzz,
};
use nightpulse::{MediaType, Platform, SocialMention};

fn aggregator() -> BuzzAggregator {
    BuzzAggregator::new(SocialConfig::default(), ExpectedPeakHours::default())
}

fn mention(age_minutes: i64, engagement: f64, now: DateTime<Utc>) -> SocialMention {
    SocialMention {
        platform: Platform::Twitter,
        posted_at: now - Duration::minutes(age_minutes),
        engagement_score: engagement,
        author_followers: 0,
        is_live: false,
        location_tagged: false,
        media: MediaType::Text,
        text: String::new(),
    }
}

fn friday_10pm() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 28, 22, 0, 0).unwrap()
}

fn tuesday_2am() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 25, 2, 0, 0).unwrap()
}

#[test]
fn no_mentions_is_dead_not_an_error() {
    let buzz = aggregator().aggregate(&[], friday_10pm());
    assert_eq!(buzz.hourly_trend, BuzzTrend::Dead);
    assert_eq!(buzz.current_pulse, 0.0);
    assert_eq!(buzz.mentions_last_24h, 0);
    assert!(!buzz.is_viral);
    assert!(buzz.active_platforms.is_empty());
    assert!(buzz.top_post.is_none());
}

#[test]
fn off_peak_activity_outscores_expected_peak_activity() {
    // Identical mention volume at 2 AM Tuesday vs 10 PM Friday: the surprise
    // and late-night multipliers compound on the Tuesday snapshot.
    let tuesday = tuesday_2am();
    let friday = friday_10pm();
    let tuesday_mentions: Vec<SocialMention> =
        (0..4).map(|idx| mention(10 + idx * 5, 20.0, tuesday)).collect();
    let friday_mentions: Vec<SocialMention> =
        (0..4).map(|idx| mention(10 + idx * 5, 20.0, friday)).collect();

    let tuesday_buzz = aggregator().aggregate(&tuesday_mentions, tuesday);
    let friday_buzz = aggregator().aggregate(&friday_mentions, friday);

    assert!(tuesday_buzz.current_pulse > friday_buzz.current_pulse);
}

#[test]
fn freshness_decay_floors_at_min_weight() {
    let now = friday_10pm();
    let agg = aggregator();

    let fresh = agg.mention_score(&mention(0, 10.0, now), now);
    assert!((fresh - 10.0).abs() < 1e-9);

    // Old enough that 0.9^(age/60) would drop below the 0.1 floor.
    let stale = agg.mention_score(&mention(2000, 10.0, now), now);
    assert!((stale - 1.0).abs() < 1e-9);
}

#[test]
fn influencer_tiers() {
    assert!((influencer_multiplier(0) - 1.0).abs() < 1e-9);
    assert!((influencer_multiplier(999) - 1.0).abs() < 1e-9);
    assert!((influencer_multiplier(1_000) - 1.2).abs() < 1e-9);
    assert!((influencer_multiplier(10_000) - 1.5).abs() < 1e-9);
    assert!((influencer_multiplier(100_000) - 2.0).abs() < 1e-9);
    assert!((influencer_multiplier(1_000_000) - 3.0).abs() < 1e-9);
}

#[test]
fn content_multipliers_stack() {
    let now = friday_10pm();
    let agg = aggregator();

    let plain = mention(0, 10.0, now);
    let mut video = mention(0, 10.0, now);
    video.media = MediaType::Video;
    let mut tagged = mention(0, 10.0, now);
    tagged.location_tagged = true;
    let mut live = mention(0, 10.0, now);
    live.is_live = true;
    let mut all = mention(0, 10.0, now);
    all.media = MediaType::Video;
    all.location_tagged = true;
    all.is_live = true;

    let base = agg.mention_score(&plain, now);
    assert!((agg.mention_score(&video, now) - base * 1.3).abs() < 1e-9);
    assert!((agg.mention_score(&tagged, now) - base * 1.5).abs() < 1e-9);
    assert!((agg.mention_score(&live, now) - base * 2.0).abs() < 1e-9);
    assert!((agg.mention_score(&all, now) - base * 1.3 * 1.5 * 2.0).abs() < 1e-6);
}

#[test]
fn trend_steady_when_last_hour_matches_daily_average() {
    // One mention per hour across the window: the last hour equals the 24h
    // average on both count and engagement.
    let now = friday_10pm();
    let mentions: Vec<SocialMention> = (0..24)
        .map(|hour| mention(30 + hour * 60, 50.0, now))
        .collect();

    let buzz = aggregator().aggregate(&mentions, now);
    assert_eq!(buzz.hourly_trend, BuzzTrend::Steady);
    assert_eq!(buzz.mentions_last_hour, 1);
    assert_eq!(buzz.mentions_last_24h, 24);
}

#[test]
fn trend_exploding_at_double_the_average() {
    let now = friday_10pm();
    let mut mentions = vec![mention(10, 50.0, now), mention(40, 50.0, now)];
    for hour in 1..23 {
        mentions.push(mention(hour * 60 + 10, 50.0, now));
    }
    assert_eq!(mentions.len(), 24);

    let buzz = aggregator().aggregate(&mentions, now);
    assert_eq!(buzz.hourly_trend, BuzzTrend::Exploding);
}

#[test]
fn trend_falling_at_minus_twenty_percent() {
    let now = friday_10pm();
    let mut mentions = Vec::new();
    for hour in 0..24i64 {
        let per_hour = match hour {
            0 => 4,
            23 => 6,
            _ => 5,
        };
        for slot in 0..per_hour {
            mentions.push(mention(hour * 60 + 5 + slot * 8, 10.0, now));
        }
    }
    assert_eq!(mentions.len(), 120);

    let buzz = aggregator().aggregate(&mentions, now);
    assert_eq!(buzz.hourly_trend, BuzzTrend::Falling);
}

#[test]
fn pulse_caps_at_one_hundred() {
    let now = tuesday_2am();
    let mentions: Vec<SocialMention> = (0..40)
        .map(|idx| {
            let mut m = mention(idx % 55, 100.0, now);
            m.location_tagged = true;
            m.author_followers = 50_000;
            m
        })
        .collect();

    let buzz = aggregator().aggregate(&mentions, now);
    assert_eq!(buzz.current_pulse, 100.0);
    assert!(buzz.is_viral);
}

#[test]
fn active_platforms_and_peak_hour_derive_from_window() {
    let now = friday_10pm();
    let mut mentions = vec![mention(10, 40.0, now), mention(20, 40.0, now)];
    let mut insta = mention(200, 30.0, now);
    insta.platform = Platform::Instagram;
    mentions.push(insta);

    let buzz = aggregator().aggregate(&mentions, now);
    assert_eq!(
        buzz.active_platforms,
        vec![Platform::Twitter, Platform::Instagram]
    );
    // Two of three mentions land in the 21:00 hour.
    assert_eq!(buzz.peak_hour, 21);
}

#[test]
fn live_mention_in_last_hour_sets_live_now() {
    let now = friday_10pm();
    let mut live = mention(15, 30.0, now);
    live.is_live = true;
    let buzz = aggregator().aggregate(&[live], now);
    assert!(buzz.live_now);

    let mut old_live = mention(300, 30.0, now);
    old_live.is_live = true;
    let buzz = aggregator().aggregate(&[old_live], now);
    assert!(!buzz.live_now);
}

#[test]
fn scoring_factor_combines_trend_live_and_platform_spread() {
    let mut buzz = RealTimeBuzz::quiet();
    buzz.current_pulse = 40.0;
    buzz.hourly_trend = BuzzTrend::Steady;
    buzz.active_platforms = vec![Platform::Twitter, Platform::Instagram];
    assert!((buzz_to_scoring_factor(&buzz) - 44.0).abs() < 1e-9);

    buzz.current_pulse = 50.0;
    buzz.hourly_trend = BuzzTrend::Exploding;
    buzz.live_now = true;
    buzz.active_platforms = vec![Platform::Twitter, Platform::Instagram, Platform::Tiktok];
    assert_eq!(buzz_to_scoring_factor(&buzz), 100.0);

    buzz.current_pulse = 10.0;
    buzz.hourly_trend = BuzzTrend::Dead;
    buzz.live_now = false;
    buzz.active_platforms = vec![Platform::Twitter];
    assert!((buzz_to_scoring_factor(&buzz) - 5.0).abs() < 1e-9);
}
