//! Emotion labels and the sentiment bucket mapping
//!
//! The seven-label set is the contract of the `/predict` endpoint: every
//! classification, including every failure path, reduces to exactly one of
//! these labels.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Confidence above which a positive sentiment maps to `Energized`
const POSITIVE_ENERGIZED_THRESHOLD: f64 = 0.75;
/// Confidence above which a negative sentiment maps to `Overwhelmed`
const NEGATIVE_OVERWHELMED_THRESHOLD: f64 = 0.80;
/// Confidence above which a negative sentiment maps to `Anxious`
const NEGATIVE_ANXIOUS_THRESHOLD: f64 = 0.60;

/// The fixed emotion label set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Calm,
    Anxious,
    Overwhelmed,
    Low,
    Focused,
    Energized,
    Sad,
}

impl Emotion {
    /// All labels, in candidate order
    ///
    /// The order is part of the zero-shot contract: it is submitted as the
    /// candidate label list and breaks ties in the lexicon backend.
    pub const ALL: [Self; 7] = [
        Self::Calm,
        Self::Anxious,
        Self::Overwhelmed,
        Self::Low,
        Self::Focused,
        Self::Energized,
        Self::Sad,
    ];

    /// Label string as it appears on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Anxious => "Anxious",
            Self::Overwhelmed => "Overwhelmed",
            Self::Low => "Low",
            Self::Focused => "Focused",
            Self::Energized => "Energized",
            Self::Sad => "Sad",
        }
    }

    /// Map a 3-class sentiment result into an emotion bucket
    ///
    /// Pure function of (label, score). Scores are expected in [0, 1]; out
    /// of range values fall into the nearest bucket rather than erroring.
    pub fn from_sentiment(label: SentimentLabel, score: f64) -> Self {
        match label {
            SentimentLabel::Positive if score > POSITIVE_ENERGIZED_THRESHOLD => Self::Energized,
            SentimentLabel::Positive => Self::Calm,
            SentimentLabel::Negative if score > NEGATIVE_OVERWHELMED_THRESHOLD => Self::Overwhelmed,
            SentimentLabel::Negative if score > NEGATIVE_ANXIOUS_THRESHOLD => Self::Anxious,
            SentimentLabel::Negative => Self::Low,
            SentimentLabel::Neutral => Self::Focused,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownEmotion(s.to_string()))
    }
}

/// Sentiment class returned by 3-class sentiment backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl FromStr for SentimentLabel {
    type Err = DomainError;

    /// Lenient parse accepting the label spellings hosted sentiment models
    /// actually emit (`positive`, `POSITIVE`, `LABEL_2`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" | "pos" | "label_2" => Ok(Self::Positive),
            "negative" | "neg" | "label_0" => Ok(Self::Negative),
            "neutral" | "neu" | "label_1" => Ok(Self::Neutral),
            _ => Err(DomainError::UnknownSentiment(s.to_string())),
        }
    }
}
