//! HealthPath - Terminal Wellness Assistant
//!
//! Clusters a user's health profile into one of four ordinal wellness
//! tiers (Ward-linkage clustering over a synthetic dataset) and returns
//! personalized advice, either from a deterministic rule book or from a
//! local Ollama model with rule fallback.
//!
//! # Architecture
//!
//! - `dataset` + `cluster`: preprocessing and the wellness classifier
//! - `advice`: rule book, generative backend, fallback composition
//! - `chat` + `repl`: the interactive assistant surface

pub mod errors;
pub mod level;
pub mod profile;
pub mod dataset;
pub mod cluster;
pub mod advice;
pub mod ollama;
pub mod chat;
pub mod repl;
pub mod doctor;
pub mod cli;
pub mod config;

// Re-export commonly used types
pub use advice::{Advice, AdviceSource, FallbackAdviser, OllamaAdviser, RuleBook};
pub use cluster::WellnessModel;
pub use errors::{HealthPathError, Result};
pub use level::WellnessLevel;
pub use profile::HealthProfile;
