use serde::{Deserialize, Serialize};

/// Rubric dials for the analysis engine.
///
/// The defaults reproduce the platform's long-standing behavior: a category
/// counts as a strength at 75, twenty words saturate a free-text answer, and
/// unscorable ordinal answers land in the middle of the scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum category score that earns a `Strong {category}` tag.
    pub strong_tag_threshold: u8,
    /// Word count at which a free-text answer scores 100.
    pub text_words_to_saturate: u32,
    /// Score assigned when an ordinal answer cannot be placed on its scale.
    pub neutral_score: u8,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            strong_tag_threshold: 75,
            text_words_to_saturate: 20,
            neutral_score: 50,
        }
    }
}
