use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

use chrono::Utc;
use nightpulse::config::ScoringWeights;
use nightpulse::scoring::{
    buzz_to_scoring_factor, calculate_momentum, calculate_monthly_score, calculate_tonight_score,
    BuzzAggregator, LeaderboardAssembler, LeaderboardCandidate, LeaderboardKind, LeaderboardPage,
    MonthlySignals, TrendingInput, WeekOverWeek,
};
use nightpulse::{format_delta, format_float, format_number, SignalSummary, SocialMention, Venue};

#[derive(Parser)]
#[command(name = "nightpulse", about = "Nightlife venue scoring engine")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Score(ScoreArgs),
    Leaderboard(LeaderboardArgs),
    Demo(DemoArgs),
    InitConfig(InitConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct ScoreArgs {
    #[arg(long, default_value_t = 4.0)]
    rating: f64,
    #[arg(long, default_value_t = 0)]
    rating_count: u32,
    #[arg(long, default_value_t = 0)]
    recent_reviews: u32,
    #[arg(long, default_value_t = 0)]
    checkins: u32,
    #[arg(long, default_value_t = 0)]
    mentions: u32,
    #[arg(long)]
    open: bool,
    #[arg(long, default_value_t = 0)]
    deals: u32,
    #[arg(long, default_value_t = 1.0)]
    distance: f64,
    #[arg(long, default_value_t = 2.0)]
    hours_since_signal: f64,
    #[arg(long, default_value_t = 1.0)]
    expert_multiplier: f64,
    #[arg(long)]
    mentions_file: Option<PathBuf>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct LeaderboardArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long, default_value = "tonight")]
    kind: String,
    #[arg(long, default_value_t = 20)]
    limit: usize,
    #[arg(long, default_value_t = 0)]
    offset: usize,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct DemoArgs {
    #[arg(long, default_value_t = 12)]
    count: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

#[derive(Args, Debug, Clone)]
struct InitConfigArgs {
    #[arg(long, default_value = "config/nightpulse.toml")]
    path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
struct VenueRecord {
    venue: Venue,
    signals: SignalSummary,
    #[serde(default)]
    mentions: Vec<SocialMention>,
    monthly: Option<MonthlySignals>,
    previous_rank: Option<u32>,
    previous_score: Option<f64>,
    expert_pick_rank: Option<u32>,
    #[serde(default)]
    week_over_week: WeekOverWeek,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let (weights, _) = ScoringWeights::load(cli.config.clone())?;

    match cli.command {
        Command::Score(args) => run_score(args, &weights),
        Command::Leaderboard(args) => run_leaderboard(args, &weights),
        Command::Demo(args) => run_demo(args, &weights),
        Command::InitConfig(args) => {
            weights.write(&args.path)?;
            println!("wrote default config to {}", args.path.display());
            Ok(())
        }
    }
}

fn run_score(args: ScoreArgs, weights: &ScoringWeights) -> Result<(), String> {
    let now = Utc::now();
    let venue = Venue {
        id: "cli".to_string(),
        name: "cli venue".to_string(),
        latitude: 0.0,
        longitude: 0.0,
        category: "bar".to_string(),
        expert_boost_multiplier: args.expert_multiplier,
    };
    let signals = SignalSummary {
        rating: args.rating,
        rating_count: args.rating_count,
        recent_reviews: args.recent_reviews,
        checkins: args.checkins,
        mentions: args.mentions,
        is_open: args.open,
        active_deals: args.deals,
        distance_miles: args.distance,
        hours_since_last_signal: args.hours_since_signal,
    };

    let buzz = match args.mentions_file {
        Some(path) => {
            let mentions = read_mentions(&path)?;
            let aggregator =
                BuzzAggregator::new(weights.social.clone(), weights.peak_hours.clone());
            Some(aggregator.aggregate(&mentions, now))
        }
        None => None,
    };

    let score = calculate_tonight_score(&venue, &signals, buzz.as_ref(), weights);

    if args.json {
        let payload = serde_json::to_string_pretty(&score)
            .map_err(|err| format!("failed to serialize score: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    println!(
        "Tonight score: {} (confidence {})",
        format_float(score.total, 1),
        score.confidence.label()
    );
    println!(
        "Signals: {} ratings | {} check-ins | {} mentions",
        format_number(signals.rating_count as f64),
        format_number(signals.checkins as f64),
        format_number(signals.mentions as f64)
    );
    println!(
        "Breakdown: quality {} | popularity {} | open {} | deals {} | proximity {} | expert {}",
        format_float(score.breakdown.quality, 1),
        format_float(score.breakdown.popularity, 1),
        format_float(score.breakdown.open_now, 1),
        format_float(score.breakdown.deals, 1),
        format_float(score.breakdown.proximity, 1),
        format_float(score.breakdown.expert_boost, 1)
    );
    match (&score.social_buzz, &buzz) {
        (Some(contribution), Some(buzz)) => {
            println!(
                "Social buzz: pulse {} ({}) | boost +{} | factor {}",
                format_float(contribution.pulse, 1),
                contribution.trend.label(),
                format_float(contribution.popularity_boost, 1),
                format_float(buzz_to_scoring_factor(buzz), 1)
            );
        }
        _ => println!("Social buzz: none"),
    }
    if !score.sources.is_empty() {
        println!("Sources: {}", score.sources.join(", "));
    }

    Ok(())
}

fn run_leaderboard(args: LeaderboardArgs, weights: &ScoringWeights) -> Result<(), String> {
    let kind = LeaderboardKind::from_str(&args.kind)
        .ok_or_else(|| format!("invalid leaderboard kind: {}", args.kind))?;
    let contents = std::fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read input: {}", err))?;
    let records: Vec<VenueRecord> = serde_json::from_str(&contents)
        .map_err(|err| format!("failed to parse input: {}", err))?;

    let page = build_leaderboard(kind, records, weights, args.offset, args.limit);

    if args.json {
        let payload = serde_json::to_string_pretty(&page)
            .map_err(|err| format!("failed to serialize leaderboard: {}", err))?;
        println!("{}", payload);
        return Ok(());
    }

    print_leaderboard(&page);
    Ok(())
}

fn run_demo(args: DemoArgs, weights: &ScoringWeights) -> Result<(), String> {
    let now = Utc::now();
    let synthetic = nightpulse::synthetic::generate_venues(args.count, args.seed, now);
    let mut next_pick = 0u32;
    let records: Vec<VenueRecord> = synthetic
        .into_iter()
        .map(|entry| {
            let expert_pick_rank = if entry.venue.is_curated() {
                next_pick += 1;
                Some(next_pick)
            } else {
                None
            };
            VenueRecord {
                venue: entry.venue,
                signals: entry.signals,
                mentions: entry.mentions,
                monthly: Some(entry.monthly),
                previous_rank: entry.previous_rank,
                previous_score: Some(entry.previous_score),
                expert_pick_rank,
                week_over_week: WeekOverWeek::default(),
            }
        })
        .collect();

    for kind in [
        LeaderboardKind::Tonight,
        LeaderboardKind::Monthly,
        LeaderboardKind::Trending,
    ] {
        let page = build_leaderboard(kind, records.clone(), weights, 0, 10);
        print_leaderboard(&page);
        println!();
    }

    Ok(())
}

fn build_leaderboard(
    kind: LeaderboardKind,
    records: Vec<VenueRecord>,
    weights: &ScoringWeights,
    offset: usize,
    limit: usize,
) -> LeaderboardPage {
    let now = Utc::now();
    let aggregator = BuzzAggregator::new(weights.social.clone(), weights.peak_hours.clone());

    let previous_ranks: HashMap<String, u32> = records
        .iter()
        .filter_map(|record| {
            record
                .previous_rank
                .map(|rank| (record.venue.id.clone(), rank))
        })
        .collect();

    let candidates = match kind {
        LeaderboardKind::Tonight => records
            .into_iter()
            .map(|record| {
                let buzz = aggregator.aggregate(&record.mentions, now);
                let score =
                    calculate_tonight_score(&record.venue, &record.signals, Some(&buzz), weights);
                LeaderboardCandidate {
                    venue: record.venue,
                    score: score.total,
                    direction: None,
                    is_viral: buzz.is_viral,
                    expert_pick_rank: record.expert_pick_rank,
                }
            })
            .collect(),
        LeaderboardKind::Monthly => records
            .into_iter()
            .map(|record| {
                let buzz = aggregator.aggregate(&record.mentions, now);
                let monthly = record.monthly.unwrap_or_default();
                let score = calculate_monthly_score(&record.venue, &monthly, weights);
                LeaderboardCandidate {
                    venue: record.venue,
                    score: score.power_score,
                    direction: None,
                    is_viral: buzz.is_viral,
                    expert_pick_rank: record.expert_pick_rank,
                }
            })
            .collect(),
        LeaderboardKind::Trending => trending_candidates(records, weights, &aggregator),
    };

    LeaderboardAssembler::new(kind).assemble(candidates, &previous_ranks, offset, limit)
}

// Trending needs current ranks first, so it scores the monthly board, ranks
// it, then turns rank movement into momentum.
fn trending_candidates(
    records: Vec<VenueRecord>,
    weights: &ScoringWeights,
    aggregator: &BuzzAggregator,
) -> Vec<LeaderboardCandidate> {
    let now = Utc::now();
    let mut scored: Vec<(VenueRecord, f64)> = records
        .into_iter()
        .map(|record| {
            let monthly = record.monthly.clone().unwrap_or_default();
            let score = calculate_monthly_score(&record.venue, &monthly, weights);
            (record, score.power_score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (record, power_score))| {
            let input = TrendingInput {
                current_rank: index as u32 + 1,
                previous_rank: record.previous_rank,
                current_score: power_score,
                previous_score: record.previous_score.unwrap_or(power_score),
                week_over_week: record.week_over_week,
            };
            let trend = calculate_momentum(&input);
            let buzz = aggregator.aggregate(&record.mentions, now);
            LeaderboardCandidate {
                venue: record.venue,
                score: trend.momentum,
                direction: Some(trend.direction),
                is_viral: buzz.is_viral,
                expert_pick_rank: record.expert_pick_rank,
            }
        })
        .collect()
}

fn print_leaderboard(page: &LeaderboardPage) {
    println!("{} leaderboard ({} venues)", page.kind.label(), page.total);
    for entry in &page.entries {
        let badges: Vec<&str> = entry.badges.iter().map(|badge| badge.label()).collect();
        println!(
            "{:>3}. {:<22} {:>7}  {:>5}  {}",
            entry.rank,
            entry.venue.name,
            format_float(entry.score, 1),
            format_delta(entry.rank_delta),
            badges.join(", ")
        );
    }
}

fn read_mentions(path: &PathBuf) -> Result<Vec<SocialMention>, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| format!("failed to read mentions: {}", err))?;
    serde_json::from_str(&contents).map_err(|err| format!("failed to parse mentions: {}", err))
}
