// Shrinks a raw rating toward the global prior mean `c` until `vote_count`
// approaches the full-trust threshold `m`. Does not clamp out-of-domain
// inputs; callers validate before invoking.
pub fn bayesian_rating(rating: f64, vote_count: u32, m: f64, c: f64) -> f64 {
    if vote_count == 0 {
        return c;
    }
    let votes = vote_count as f64;
    (votes / (votes + m)) * rating + (m / (votes + m)) * c
}
