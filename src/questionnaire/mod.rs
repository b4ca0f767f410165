//! Questionnaire analysis: catalog, domain model, and the analysis engine.
//!
//! The entry point is [`AnalysisEngine::analyze`], which converts a raw map
//! of question-id to answer into a [`MatchProfile`] of category scores,
//! strength tags, and match preferences. Everything around it (routing,
//! sessions, persistence of submissions) is the caller's concern; the engine
//! is a deterministic function of its inputs and the injected catalog.

pub mod analysis;
pub mod catalog;
pub mod domain;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisConfig, AnalysisEngine};
pub use catalog::QuestionCatalog;
pub use domain::{
    AnswerValue, InvalidRoleError, MatchProfile, QuestionDefinition, QuestionOption, QuestionType,
    ResponseSet, Role,
};
