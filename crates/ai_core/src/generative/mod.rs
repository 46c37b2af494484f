//! Generative engine clients

mod gemini;

pub use gemini::GeminiEngine;
