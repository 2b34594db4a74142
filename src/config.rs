use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TonightWeights {
    pub quality: f64,
    pub popularity: f64,
    pub open_now: f64,
    pub deals: f64,
    pub proximity: f64,
    pub expert_boost: f64,
}

impl Default for TonightWeights {
    fn default() -> Self {
        Self {
            quality: 30.0,
            popularity: 25.0,
            open_now: 15.0,
            deals: 15.0,
            proximity: 10.0,
            expert_boost: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyWeights {
    pub quality: f64,
    pub popularity: f64,
    pub consistency: f64,
    pub deals: f64,
    pub expert_boost: f64,
}

impl Default for MonthlyWeights {
    fn default() -> Self {
        Self {
            quality: 40.0,
            popularity: 30.0,
            consistency: 15.0,
            deals: 10.0,
            expert_boost: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BayesianConfig {
    pub m: f64,
    pub c: f64,
}

impl Default for BayesianConfig {
    fn default() -> Self {
        Self { m: 10.0, c: 3.8 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProximityConfig {
    pub max_boost_miles: f64,
    pub decay_rate: f64,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self {
            max_boost_miles: 2.0,
            decay_rate: 1.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecencyConfig {
    pub tonight_half_life_hours: f64,
    pub trending_half_life_days: f64,
}

impl Default for RecencyConfig {
    fn default() -> Self {
        Self {
            tonight_half_life_hours: 6.0,
            trending_half_life_days: 7.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformWeights {
    pub twitter: f64,
    pub instagram: f64,
    pub tiktok: f64,
}

impl Default for PlatformWeights {
    fn default() -> Self {
        Self {
            twitter: 1.0,
            instagram: 1.2,
            tiktok: 1.3,
        }
    }
}

impl PlatformWeights {
    pub fn for_platform(&self, platform: crate::Platform) -> f64 {
        match platform {
            crate::Platform::Twitter => self.twitter,
            crate::Platform::Instagram => self.instagram,
            crate::Platform::Tiktok => self.tiktok,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialConfig {
    pub platform_weights: PlatformWeights,
    pub viral_threshold: f64,
    pub hourly_decay: f64,
    pub min_freshness_weight: f64,
    pub weekday_surprise_multiplier: f64,
    pub weekend_surprise_multiplier: f64,
    pub late_night_multiplier: f64,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            platform_weights: PlatformWeights::default(),
            viral_threshold: 75.0,
            hourly_decay: 0.9,
            min_freshness_weight: 0.1,
            weekday_surprise_multiplier: 2.5,
            weekend_surprise_multiplier: 1.8,
            late_night_multiplier: 1.5,
        }
    }
}

// Hand-curated expected-peak-hour table. Treated as configuration data,
// not something to derive from signal history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpectedPeakHours {
    pub monday: Vec<u8>,
    pub tuesday: Vec<u8>,
    pub wednesday: Vec<u8>,
    pub thursday: Vec<u8>,
    pub friday: Vec<u8>,
    pub saturday: Vec<u8>,
    pub sunday: Vec<u8>,
}

impl Default for ExpectedPeakHours {
    fn default() -> Self {
        Self {
            monday: vec![21, 22],
            tuesday: vec![21, 22],
            wednesday: vec![21, 22, 23],
            thursday: vec![21, 22, 23],
            friday: vec![19, 20, 21, 22, 23],
            saturday: vec![20, 21, 22, 23, 0, 1],
            sunday: vec![20, 21, 22],
        }
    }
}

impl ExpectedPeakHours {
    pub fn for_weekday(&self, weekday: Weekday) -> &[u8] {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    pub fn is_expected(&self, weekday: Weekday, hour: u8) -> bool {
        self.for_weekday(weekday).contains(&hour)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub tonight: TonightWeights,
    pub monthly: MonthlyWeights,
    pub bayesian: BayesianConfig,
    pub proximity: ProximityConfig,
    pub recency: RecencyConfig,
    pub social: SocialConfig,
    pub peak_hours: ExpectedPeakHours,
}

impl ScoringWeights {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_config_path);
        let mut config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse config: {}", err))?
            } else {
                ScoringWeights::default()
            }
        } else {
            ScoringWeights::default()
        };

        config.apply_env_overrides();
        tracing::debug!(path = ?config_path, "resolved scoring weights");
        Ok((config, config_path))
    }

    pub fn write(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|err| format!("failed to create config dir: {}", err))?;
        }
        let payload = toml::to_string_pretty(self)
            .map_err(|err| format!("failed to serialize config: {}", err))?;
        std::fs::write(path, payload)
            .map_err(|err| format!("failed to write config: {}", err))?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(threshold) = env::var("NIGHTPULSE_VIRAL_THRESHOLD") {
            if let Ok(value) = threshold.parse::<f64>() {
                self.social.viral_threshold = value;
            }
        }
        if let Ok(half_life) = env::var("NIGHTPULSE_TONIGHT_HALF_LIFE_HOURS") {
            if let Ok(value) = half_life.parse::<f64>() {
                self.recency.tonight_half_life_hours = value;
            }
        }
        if let Ok(prior) = env::var("NIGHTPULSE_BAYESIAN_PRIOR") {
            if let Ok(value) = prior.parse::<f64>() {
                self.bayesian.c = value;
            }
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    env::var("NIGHTPULSE_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/nightpulse.toml")))
}
