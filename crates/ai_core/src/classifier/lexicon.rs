//! In-process lexicon classifier backend
//!
//! Scores the text against a keyword lexicon for each candidate label, no
//! network involved. Same contract as the hosted zero-shot backend: exactly
//! one label out, ties broken by the fixed candidate order.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use async_trait::async_trait;
use domain::Emotion;
use tracing::{debug, instrument};

use crate::{error::ClassifierError, ports::ClassifierBackend};

/// Keyword lexicon, one entry per emotion
const LEXICON: [(Emotion, &[&str]); 7] = [
    (
        Emotion::Calm,
        &["calm", "peaceful", "relaxed", "at ease", "content", "settled", "fine"],
    ),
    (
        Emotion::Anxious,
        &["anxious", "nervous", "worried", "worry", "on edge", "panic", "uneasy", "scared", "afraid"],
    ),
    (
        Emotion::Overwhelmed,
        &["overwhelmed", "too much", "can't cope", "drowning", "swamped", "burned out", "burnt out"],
    ),
    (
        Emotion::Low,
        &["feeling down", "feel low", "empty", "numb", "drained", "hopeless", "exhausted"],
    ),
    (
        Emotion::Focused,
        &["focused", "productive", "concentrat", "in the zone", "determined", "on track"],
    ),
    (
        Emotion::Energized,
        &["energized", "excited", "pumped", "thrilled", "amazing", "fantastic", "motivated", "great"],
    ),
    (
        Emotion::Sad,
        &["sad", "crying", "cried", "tears", "heartbroken", "grief", "lonely", "miserable"],
    ),
];

/// Zero-shot style classification backed by an in-process keyword scorer
#[derive(Debug)]
pub struct LexiconClassifier {
    automaton: AhoCorasick,
    /// Pattern index -> owning emotion, parallel to the automaton patterns
    pattern_emotions: Vec<Emotion>,
}

impl LexiconClassifier {
    /// Build the matcher over the full lexicon
    pub fn new() -> Result<Self, ClassifierError> {
        let mut patterns = Vec::new();
        let mut pattern_emotions = Vec::new();
        for (emotion, keywords) in LEXICON {
            for keyword in keywords {
                patterns.push(*keyword);
                pattern_emotions.push(emotion);
            }
        }

        let automaton = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| ClassifierError::InvalidResponse(format!("lexicon build failed: {e}")))?;

        Ok(Self {
            automaton,
            pattern_emotions,
        })
    }

    /// Rank the candidate labels by keyword hits
    ///
    /// The winner is the label with the most hits; on a tie (including the
    /// all-zero case) the earlier label in [`Emotion::ALL`] wins.
    fn score(&self, text: &str) -> Emotion {
        let mut hits = [0_usize; Emotion::ALL.len()];
        for m in self.automaton.find_iter(text) {
            let emotion = self.pattern_emotions[m.pattern().as_usize()];
            if let Some(idx) = Emotion::ALL.iter().position(|e| *e == emotion) {
                hits[idx] += 1;
            }
        }

        let mut best = 0;
        for (idx, count) in hits.iter().enumerate() {
            if *count > hits[best] {
                best = idx;
            }
        }
        Emotion::ALL[best]
    }
}

#[async_trait]
impl ClassifierBackend for LexiconClassifier {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    async fn classify(&self, text: &str) -> Result<Emotion, ClassifierError> {
        let emotion = self.score(text);
        debug!(emotion = %emotion, "Lexicon classification");
        Ok(emotion)
    }

    fn fallback_emotion(&self) -> Emotion {
        Emotion::Anxious
    }

    fn name(&self) -> &'static str {
        "local"
    }
}
