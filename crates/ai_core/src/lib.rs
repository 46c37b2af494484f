//! AI Core - Classifier backends and generative engine clients
//!
//! Provides the three interchangeable emotion classifier backends (hosted
//! zero-shot, hosted sentiment, in-process lexicon) and the generative
//! engine client with ordered model fallback.

pub mod classifier;
pub mod config;
pub mod error;
pub mod generative;
pub mod ports;

pub use classifier::{HostedSentimentClassifier, HostedZeroShotClassifier, LexiconClassifier};
pub use config::{ClassifierBackendKind, ClassifierConfig, GenerativeConfig};
pub use error::{ClassifierError, GenerationError};
pub use generative::GeminiEngine;
pub use ports::{ClassifierBackend, GenerationOutput, GenerativeEngine};
