use std::collections::HashMap;

use nightpulse::scoring::{
    Badge, LeaderboardAssembler, LeaderboardCandidate, LeaderboardKind, TrendDirection,
};
use nightpulse::{format_number, Venue};

fn venue(id: &str) -> Venue {
    Venue {
        id: id.to_string(),
        name: format!("venue {}", id),
        latitude: 40.7,
        longitude: -74.0,
        category: "bar".to_string(),
        expert_boost_multiplier: 1.0,
    }
}

fn candidate(id: &str, score: f64) -> LeaderboardCandidate {
    LeaderboardCandidate {
        venue: venue(id),
        score,
        direction: None,
        is_viral: false,
        expert_pick_rank: None,
    }
}

#[test]
fn ranks_are_contiguous_and_ties_keep_input_order() {
    let candidates = vec![
        candidate("a", 50.0),
        candidate("b", 80.0),
        candidate("c", 50.0),
        candidate("d", 12.0),
    ];
    let page = LeaderboardAssembler::new(LeaderboardKind::Tonight).assemble(
        candidates,
        &HashMap::new(),
        0,
        10,
    );

    let ranks: Vec<u32> = page.entries.iter().map(|entry| entry.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3, 4]);

    let ids: Vec<&str> = page
        .entries
        .iter()
        .map(|entry| entry.venue.id.as_str())
        .collect();
    assert_eq!(ids, vec!["b", "a", "c", "d"]);
}

#[test]
fn new_venue_rank_delta_is_absent_not_zero() {
    let mut previous = HashMap::new();
    previous.insert("a".to_string(), 5u32);

    let page = LeaderboardAssembler::new(LeaderboardKind::Tonight).assemble(
        vec![candidate("a", 90.0), candidate("b", 70.0)],
        &previous,
        0,
        10,
    );

    assert_eq!(page.entries[0].rank_delta, Some(4));
    assert_eq!(page.entries[0].previous_rank, Some(5));
    assert_eq!(page.entries[1].rank_delta, None);
    assert_eq!(page.entries[1].previous_rank, None);
}

#[test]
fn badges_are_independent_predicates() {
    let mut previous = HashMap::new();
    previous.insert("hot".to_string(), 9u32);

    let mut hot = candidate("hot", 85.0);
    hot.is_viral = true;
    hot.expert_pick_rank = Some(2);

    let page = LeaderboardAssembler::new(LeaderboardKind::Tonight).assemble(
        vec![hot, candidate("cold", 20.0)],
        &previous,
        0,
        10,
    );

    // Rank 1 from rank 9 -> delta 8; every predicate fires at once.
    let badges = &page.entries[0].badges;
    assert!(badges.contains(&Badge::ExpertPick));
    assert!(badges.contains(&Badge::HotTonight));
    assert!(badges.contains(&Badge::MostImproved));
    assert!(badges.contains(&Badge::TrendingOnSocial));

    assert!(page.entries[1].badges.is_empty());
}

#[test]
fn expert_pick_cutoff_is_four() {
    let mut fourth = candidate("a", 50.0);
    fourth.expert_pick_rank = Some(4);
    let mut fifth = candidate("b", 40.0);
    fifth.expert_pick_rank = Some(5);

    let page = LeaderboardAssembler::new(LeaderboardKind::Tonight).assemble(
        vec![fourth, fifth],
        &HashMap::new(),
        0,
        10,
    );

    assert!(page.entries[0].badges.contains(&Badge::ExpertPick));
    assert!(!page.entries[1].badges.contains(&Badge::ExpertPick));
}

#[test]
fn pagination_happens_after_full_ranking() {
    let candidates: Vec<LeaderboardCandidate> = (0..10)
        .map(|idx| candidate(&format!("v{}", idx), 100.0 - idx as f64))
        .collect();

    let page = LeaderboardAssembler::new(LeaderboardKind::Monthly).assemble(
        candidates,
        &HashMap::new(),
        5,
        3,
    );

    assert_eq!(page.total, 10);
    assert_eq!(page.offset, 5);
    let ranks: Vec<u32> = page.entries.iter().map(|entry| entry.rank).collect();
    assert_eq!(ranks, vec![6, 7, 8]);
}

#[test]
fn trending_sorts_by_direction_before_magnitude() {
    let mut slow_riser = candidate("slow_riser", 20.0);
    slow_riser.direction = Some(TrendDirection::Rising);
    let mut fast_riser = candidate("fast_riser", 90.0);
    fast_riser.direction = Some(TrendDirection::Rising);
    let mut steady = candidate("steady", 0.0);
    steady.direction = Some(TrendDirection::Stable);
    let mut crasher = candidate("crasher", -95.0);
    crasher.direction = Some(TrendDirection::Falling);

    let page = LeaderboardAssembler::new(LeaderboardKind::Trending).assemble(
        vec![crasher, slow_riser, steady, fast_riser],
        &HashMap::new(),
        0,
        10,
    );

    let ids: Vec<&str> = page
        .entries
        .iter()
        .map(|entry| entry.venue.id.as_str())
        .collect();
    // A hard faller has huge magnitude but still sorts below every riser.
    assert_eq!(ids, vec!["fast_riser", "slow_riser", "steady", "crasher"]);
}

#[test]
fn count_formatting_groups_thousands() {
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(950.0), "950");
    assert_eq!(format_number(1_250.0), "1,250");
    assert_eq!(format_number(2_500_000.4), "2,500,000");
    assert_eq!(format_number(-3.0), "0");
}

#[test]
fn curated_flag_follows_expert_multiplier() {
    let mut plain = venue("plain");
    assert!(!plain.is_curated());

    plain.expert_boost_multiplier = 1.15;
    assert!(plain.is_curated());
}
