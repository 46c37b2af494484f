//! Emotion classifier backends
//!
//! Three interchangeable policies behind [`crate::ClassifierBackend`]: two
//! hosted HTTP backends and one in-process lexicon scorer.

mod lexicon;
mod sentiment;
mod zero_shot;

pub use lexicon::LexiconClassifier;
pub use sentiment::HostedSentimentClassifier;
pub use zero_shot::HostedZeroShotClassifier;
