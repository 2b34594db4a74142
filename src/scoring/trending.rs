use serde::{Deserialize, Serialize};

const RANK_WEIGHT: f64 = 10.0;
const SCORE_WEIGHT: f64 = 2.0;
const WOW_REVIEWS_WEIGHT: f64 = 5.0;
const WOW_RATING_WEIGHT: f64 = 20.0;
const DIRECTION_BAND: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Stable,
    Falling,
}

impl TrendDirection {
    pub fn label(self) -> &'static str {
        match self {
            TrendDirection::Rising => "rising",
            TrendDirection::Stable => "stable",
            TrendDirection::Falling => "falling",
        }
    }

    pub fn sort_order(self) -> u8 {
        match self {
            TrendDirection::Rising => 0,
            TrendDirection::Stable => 1,
            TrendDirection::Falling => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WeekOverWeek {
    pub reviews_delta: f64,
    pub rating_delta: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingInput {
    pub current_rank: u32,
    pub previous_rank: Option<u32>,
    pub current_score: f64,
    pub previous_score: f64,
    pub week_over_week: WeekOverWeek,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumBreakdown {
    pub rank_movement: f64,
    pub score_movement: f64,
    pub week_over_week: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingScore {
    pub momentum: f64,
    pub breakdown: MomentumBreakdown,
    pub direction: TrendDirection,
}

pub fn calculate_momentum(input: &TrendingInput) -> TrendingScore {
    let rank_delta = match input.previous_rank {
        Some(previous) => previous as f64 - input.current_rank as f64,
        None => 0.0,
    };
    let rank_movement = rank_delta * RANK_WEIGHT;
    let score_movement = (input.current_score - input.previous_score) * SCORE_WEIGHT;
    let week_over_week = input.week_over_week.reviews_delta * WOW_REVIEWS_WEIGHT
        + input.week_over_week.rating_delta * WOW_RATING_WEIGHT;

    let momentum = (rank_movement + score_movement + week_over_week).clamp(-100.0, 100.0);

    let direction = if momentum > DIRECTION_BAND {
        TrendDirection::Rising
    } else if momentum < -DIRECTION_BAND {
        TrendDirection::Falling
    } else {
        TrendDirection::Stable
    };

    TrendingScore {
        momentum,
        breakdown: MomentumBreakdown {
            rank_movement,
            score_movement,
            week_over_week,
        },
        direction,
    }
}
