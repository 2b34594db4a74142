use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::scoring::trending::TrendDirection;
use crate::Venue;

const EXPERT_PICK_CUTOFF: u32 = 4;
const HOT_TONIGHT_THRESHOLD: f64 = 80.0;
const MOST_IMPROVED_THRESHOLD: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardKind {
    Tonight,
    Monthly,
    Trending,
}

impl LeaderboardKind {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "tonight" => Some(LeaderboardKind::Tonight),
            "monthly" => Some(LeaderboardKind::Monthly),
            "trending" => Some(LeaderboardKind::Trending),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeaderboardKind::Tonight => "tonight",
            LeaderboardKind::Monthly => "monthly",
            LeaderboardKind::Trending => "trending",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    ExpertPick,
    HotTonight,
    MostImproved,
    TrendingOnSocial,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::ExpertPick => "Expert Pick",
            Badge::HotTonight => "Hot Tonight",
            Badge::MostImproved => "Most Improved",
            Badge::TrendingOnSocial => "Trending on Social",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeaderboardCandidate {
    pub venue: Venue,
    pub score: f64,
    pub direction: Option<TrendDirection>,
    pub is_viral: bool,
    pub expert_pick_rank: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub venue: Venue,
    pub score: f64,
    pub previous_rank: Option<u32>,
    pub rank_delta: Option<i64>,
    pub badges: Vec<Badge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardPage {
    pub kind: LeaderboardKind,
    pub total: usize,
    pub offset: usize,
    pub entries: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone)]
pub struct LeaderboardAssembler {
    kind: LeaderboardKind,
}

impl LeaderboardAssembler {
    pub fn new(kind: LeaderboardKind) -> Self {
        Self { kind }
    }

    // Ranks are assigned over the whole set before pagination; the returned
    // page always carries whole-set ranks.
    pub fn assemble(
        &self,
        mut candidates: Vec<LeaderboardCandidate>,
        previous_ranks: &HashMap<String, u32>,
        offset: usize,
        limit: usize,
    ) -> LeaderboardPage {
        let total = candidates.len();

        // sort_by is stable, so input order breaks ties deterministically.
        match self.kind {
            LeaderboardKind::Trending => candidates.sort_by(compare_trending),
            _ => candidates.sort_by(|a, b| {
                b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
            }),
        }

        let mut entries = Vec::with_capacity(total);
        for (index, candidate) in candidates.into_iter().enumerate() {
            let rank = index as u32 + 1;
            let previous_rank = previous_ranks.get(&candidate.venue.id).copied();
            let rank_delta = previous_rank.map(|previous| previous as i64 - rank as i64);
            let badges = badges_for(&candidate, rank_delta);

            entries.push(LeaderboardEntry {
                rank,
                score: candidate.score,
                previous_rank,
                rank_delta,
                badges,
                venue: candidate.venue,
            });
        }

        tracing::debug!(
            kind = self.kind.label(),
            total,
            offset,
            limit,
            "assembled leaderboard"
        );

        let entries = entries.into_iter().skip(offset).take(limit).collect();
        LeaderboardPage {
            kind: self.kind,
            total,
            offset,
            entries,
        }
    }
}

// Direction is the primary sort key for trending: risers ahead of stable
// venues ahead of fallers, magnitude second within each group.
fn compare_trending(a: &LeaderboardCandidate, b: &LeaderboardCandidate) -> Ordering {
    let order_a = a
        .direction
        .unwrap_or(TrendDirection::Stable)
        .sort_order();
    let order_b = b
        .direction
        .unwrap_or(TrendDirection::Stable)
        .sort_order();
    order_a.cmp(&order_b).then_with(|| {
        b.score
            .abs()
            .partial_cmp(&a.score.abs())
            .unwrap_or(Ordering::Equal)
    })
}

// Badge predicates are independent; none of them excludes another.
fn badges_for(candidate: &LeaderboardCandidate, rank_delta: Option<i64>) -> Vec<Badge> {
    let mut badges = Vec::new();
    if candidate
        .expert_pick_rank
        .map_or(false, |rank| rank <= EXPERT_PICK_CUTOFF)
    {
        badges.push(Badge::ExpertPick);
    }
    if candidate.score >= HOT_TONIGHT_THRESHOLD {
        badges.push(Badge::HotTonight);
    }
    if rank_delta.map_or(false, |delta| delta >= MOST_IMPROVED_THRESHOLD) {
        badges.push(Badge::MostImproved);
    }
    if candidate.is_viral {
        badges.push(Badge::TrendingOnSocial);
    }
    badges
}
