pub fn recency_weight(hours_ago: f64, half_life_hours: f64) -> f64 {
    if half_life_hours <= 0.0 {
        return 0.0;
    }
    0.5_f64.powf(hours_ago / half_life_hours)
}

// Full boost inside half a mile, hard zero beyond twice the boost radius,
// exponential falloff in between.
pub fn proximity_bonus(distance_miles: f64, max_boost_miles: f64, decay_rate: f64) -> f64 {
    if distance_miles <= 0.5 {
        return 1.0;
    }
    if distance_miles >= 2.0 * max_boost_miles {
        return 0.0;
    }
    (-decay_rate * (distance_miles / max_boost_miles)).exp()
}
