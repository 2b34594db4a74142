pub mod bayes;
pub mod buzz;
pub mod decay;
pub mod leaderboard;
pub mod monthly;
pub mod tonight;
pub mod trending;

pub use bayes::bayesian_rating;
pub use buzz::{buzz_to_scoring_factor, BuzzAggregator, BuzzTrend, RealTimeBuzz, TopPost};
pub use decay::{proximity_bonus, recency_weight};
pub use leaderboard::{
    Badge, LeaderboardAssembler, LeaderboardCandidate, LeaderboardEntry, LeaderboardKind,
    LeaderboardPage,
};
pub use monthly::{calculate_monthly_score, MonthlyScore, MonthlySignals};
pub use tonight::{calculate_tonight_score, Confidence, TonightScore};
pub use trending::{calculate_momentum, TrendDirection, TrendingInput, TrendingScore, WeekOverWeek};
