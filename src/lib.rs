//! Questionnaire analysis engine for the startup/investor matchmaking
//! platform.
//!
//! The crate turns a raw map of question-id to answer into a
//! [`questionnaire::MatchProfile`]: per-category scores, descriptive strength
//! tags, and a flat preference map consumed by the matching layer. Persistence
//! and transport belong to the caller; the engine is a pure function of its
//! inputs and the static question catalog.

pub mod config;
pub mod error;
pub mod questionnaire;
pub mod telemetry;
