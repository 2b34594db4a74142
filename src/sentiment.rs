use serde::{Deserialize, Serialize};

const POSITIVE_WORDS: [&str; 22] = [
    "amazing", "awesome", "great", "fantastic", "fun", "love", "loved", "best", "incredible",
    "perfect", "vibes", "lit", "fire", "epic", "excellent", "good", "wonderful", "beautiful",
    "chill", "friendly", "unreal", "banger",
];

const NEGATIVE_WORDS: [&str; 19] = [
    "terrible", "awful", "bad", "worst", "boring", "dead", "empty", "rude", "dirty",
    "overpriced", "lame", "mid", "sketchy", "disappointing", "gross", "avoid", "trash",
    "weak", "meh",
];

const NEGATION_WORDS: [&str; 10] = [
    "not", "never", "no", "isnt", "isn't", "wasnt", "wasn't", "dont", "don't", "aint",
];

const INTENSIFIER_WORDS: [&str; 8] = [
    "very", "so", "really", "super", "extremely", "totally", "absolutely", "insanely",
];

const POSITIVE_EMOJI: [char; 8] = ['🔥', '🎉', '😍', '💯', '🙌', '✨', '🥳', '🍾'];
const NEGATIVE_EMOJI: [char; 5] = ['😴', '💤', '😡', '👎', '🤮'];

const HIGH_ACTIVITY_WORDS: [&str; 12] = [
    "packed", "crowded", "busy", "jumping", "popping", "poppin", "slammed", "full", "bumping",
    "mobbed", "rammed", "heaving",
];

const LOW_ACTIVITY_WORDS: [&str; 7] = [
    "empty", "dead", "quiet", "slow", "deserted", "crickets", "ghost",
];

const INTENSITY_MULTIPLIER: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    pub fn label(self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub score: f64,
    pub label: SentimentLabel,
    pub confidence: f64,
    pub keywords: Vec<String>,
}

impl SentimentAnalysis {
    pub fn neutral() -> Self {
        Self {
            score: 0.0,
            label: SentimentLabel::Neutral,
            confidence: 0.0,
            keywords: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLabel {
    Dead,
    Quiet,
    Moderate,
    Busy,
    Packed,
    Exploding,
}

impl ActivityLabel {
    pub fn label(self) -> &'static str {
        match self {
            ActivityLabel::Dead => "dead",
            ActivityLabel::Quiet => "quiet",
            ActivityLabel::Moderate => "moderate",
            ActivityLabel::Busy => "busy",
            ActivityLabel::Packed => "packed",
            ActivityLabel::Exploding => "exploding",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityAnalysis {
    pub score: f64,
    pub label: ActivityLabel,
    pub signals: Vec<String>,
}

pub fn analyze_sentiment(text: &str) -> SentimentAnalysis {
    if text.trim().is_empty() {
        return SentimentAnalysis::neutral();
    }

    let mut positive = 0.0;
    let mut negative = 0.0;
    let mut keywords = Vec::new();
    let mut negated = false;
    let mut intensity = 1.0;

    for token in tokenize(text) {
        if NEGATION_WORDS.contains(&token.as_str()) {
            negated = true;
            continue;
        }
        if INTENSIFIER_WORDS.contains(&token.as_str()) {
            intensity = INTENSITY_MULTIPLIER;
            continue;
        }

        let polarity = if POSITIVE_WORDS.contains(&token.as_str()) {
            Some(1.0)
        } else if NEGATIVE_WORDS.contains(&token.as_str()) {
            Some(-1.0)
        } else {
            None
        };

        if let Some(polarity) = polarity {
            let signed = if negated { -polarity } else { polarity };
            if signed > 0.0 {
                positive += intensity;
            } else {
                negative += intensity;
            }
            keywords.push(token);
            negated = false;
            intensity = 1.0;
        }
    }

    for ch in text.chars() {
        if POSITIVE_EMOJI.contains(&ch) {
            positive += 1.0;
            keywords.push(ch.to_string());
        } else if NEGATIVE_EMOJI.contains(&ch) {
            negative += 1.0;
            keywords.push(ch.to_string());
        }
    }

    let matched = positive + negative;
    let score = if matched == 0.0 {
        0.0
    } else {
        (positive - negative) / matched
    };

    let label = sentiment_label(score);
    let confidence = (matched / 5.0).min(1.0);

    SentimentAnalysis {
        score,
        label,
        confidence,
        keywords,
    }
}

pub fn sentiment_label(score: f64) -> SentimentLabel {
    if score.abs() < 0.2 {
        SentimentLabel::Neutral
    } else if score > 0.0 {
        SentimentLabel::Positive
    } else {
        SentimentLabel::Negative
    }
}

pub fn analyze_activity_level(text: &str) -> ActivityAnalysis {
    let tokens = tokenize(text);
    let mut score = 0.0;
    let mut signals = Vec::new();

    for token in &tokens {
        if HIGH_ACTIVITY_WORDS.contains(&token.as_str()) {
            score += 30.0;
            signals.push(token.clone());
        } else if LOW_ACTIVITY_WORDS.contains(&token.as_str()) {
            score -= 25.0;
            signals.push(token.clone());
        }
    }

    // Crowd-size patterns: "50 people", "45 min wait", "line around the block".
    let mut has_queue_word = false;
    for (idx, token) in tokens.iter().enumerate() {
        if token == "wait" || token == "waiting" || token == "line" || token == "queue" {
            has_queue_word = true;
            if let Some(count) = nearby_number(&tokens, idx) {
                score += count.min(45.0);
                signals.push(format!("{} {}", count, token));
            }
        }
        if token == "people" {
            if let Some(count) = nearby_number(&tokens, idx) {
                score += count.min(60.0);
                signals.push(format!("{} {}", count, token));
            }
        }
    }
    if has_queue_word {
        score += 15.0;
    }

    let score = score.clamp(0.0, 100.0);
    ActivityAnalysis {
        score,
        label: activity_label(score),
        signals,
    }
}

pub fn activity_label(score: f64) -> ActivityLabel {
    if score < 10.0 {
        ActivityLabel::Dead
    } else if score < 30.0 {
        ActivityLabel::Quiet
    } else if score < 50.0 {
        ActivityLabel::Moderate
    } else if score < 70.0 {
        ActivityLabel::Busy
    } else if score < 85.0 {
        ActivityLabel::Packed
    } else {
        ActivityLabel::Exploding
    }
}

fn nearby_number(tokens: &[String], idx: usize) -> Option<f64> {
    let start = idx.saturating_sub(2);
    tokens[start..idx]
        .iter()
        .rev()
        .find_map(|token| token.parse::<f64>().ok())
        .filter(|value| *value >= 0.0)
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_string()
        })
        .filter(|word| !word.is_empty())
        .collect()
}
