pub(crate) mod classifier;
mod config;
pub(crate) mod preferences;
pub(crate) mod scoring;
pub(crate) mod tags;

pub use config::AnalysisConfig;

use super::catalog::QuestionCatalog;
use super::domain::{MatchProfile, ResponseSet, Role};

/// Stateless engine turning raw questionnaire responses into a
/// [`MatchProfile`].
///
/// Holds only the read-only catalog and the rubric configuration, so a single
/// instance can serve arbitrarily many concurrent callers. `analyze` is pure:
/// no I/O, no shared mutable state, deterministic for identical inputs.
pub struct AnalysisEngine {
    catalog: QuestionCatalog,
    config: AnalysisConfig,
}

impl AnalysisEngine {
    pub fn new(catalog: QuestionCatalog, config: AnalysisConfig) -> Self {
        Self { catalog, config }
    }

    /// Engine over the platform's standard questionnaires and default rubric.
    pub fn standard() -> Self {
        Self::new(QuestionCatalog::standard(), AnalysisConfig::default())
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Analyzes one submission's responses for the given role.
    ///
    /// Data-shape problems never abort the call: unknown question ids are
    /// dropped during classification and malformed answers degrade to their
    /// question type's default score. A near-empty response set yields a
    /// profile with empty categories and tags, not an error.
    pub fn analyze(&self, responses: &ResponseSet, role: Role) -> MatchProfile {
        let questions = self.catalog.questions_for(role);

        let categorized = classifier::classify(responses, questions);
        let categories = scoring::aggregate_categories(&categorized, &self.config);
        let tags = tags::derive_tags(&categories, responses, role, tags::TAG_RULES, &self.config);
        let preferences =
            preferences::extract_preferences(responses, role, preferences::PREFERENCE_RULES);

        MatchProfile {
            categories,
            tags,
            preferences,
        }
    }
}
