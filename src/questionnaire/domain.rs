use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Side of the matchmaking platform a questionnaire belongs to. Each role has
/// its own question set and its own tag/preference rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Startup,
    Investor,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Startup => "startup",
            Role::Investor => "investor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when an untrusted role string is neither `startup` nor `investor`.
///
/// This is the only error that crosses the engine boundary; everything else
/// degrades to a best-effort score.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid role '{0}', expected 'startup' or 'investor'")]
pub struct InvalidRoleError(pub String);

impl FromStr for Role {
    type Err = InvalidRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "startup" => Ok(Role::Startup),
            "investor" => Ok(Role::Investor),
            _ => Err(InvalidRoleError(value.trim().to_string())),
        }
    }
}

/// Closed set of question presentation types. The scorer matches exhaustively
/// on this enum, so introducing a new type is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Radio,
    Select,
    MultiSelect,
    Slider,
    Text,
}

/// One selectable option of a question. Ordering is significant: for
/// radio/select and slider questions the position encodes intensity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub value: String,
    pub label: String,
}

/// Immutable, catalog-owned definition of a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: String,
    pub prompt: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Free-form grouping label; new categories require no code change.
    pub category: String,
    /// Advisory only, the engine does not enforce completeness.
    pub required: bool,
    /// Empty for `text` questions.
    pub options: Vec<QuestionOption>,
}

/// Raw answer as it arrives from the transport boundary: a selected value, a
/// numeric slider position, a list of selections, free text, or null.
///
/// The engine never trusts the shape; a mismatch between answer and question
/// type degrades to the type's default score instead of raising.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    Number(f64),
    Selections(Vec<String>),
    Empty,
}

impl AnswerValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Numeric view of the answer. Numeric strings coerce, mirroring how the
    /// transport layer historically delivered slider positions.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AnswerValue::Number(value) => Some(*value),
            AnswerValue::Text(value) => value.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_selections(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Selections(values) => Some(values),
            _ => None,
        }
    }

    /// Whether the answer carries any usable content. Null, blank text, and
    /// empty selection lists count as unanswered.
    pub fn is_answered(&self) -> bool {
        match self {
            AnswerValue::Empty => false,
            AnswerValue::Text(value) => !value.trim().is_empty(),
            AnswerValue::Selections(values) => !values.is_empty(),
            AnswerValue::Number(_) => true,
        }
    }
}

/// Raw submission payload: question id to answer. A `BTreeMap` keeps every
/// downstream iteration order stable, which the determinism guarantee relies
/// on.
pub type ResponseSet = BTreeMap<String, AnswerValue>;

/// Normalized output of the analysis engine, constructed fresh on every
/// `analyze` call and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchProfile {
    /// Category label to score in `[0,100]`. Categories with no answered
    /// questions are omitted, never zero-filled.
    pub categories: BTreeMap<String, u8>,
    /// Ordered, de-duplicated strength tags.
    pub tags: Vec<String>,
    /// Role-specific preference key to verbatim answer value; may be empty.
    pub preferences: BTreeMap<String, AnswerValue>,
}
