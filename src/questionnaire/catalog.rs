//! Static question catalog for both roles.
//!
//! The catalog is configuration data: built once at startup, injected into
//! the engine, and never mutated. It is safe to share across arbitrarily many
//! concurrent callers without locking.

use super::domain::{QuestionDefinition, QuestionOption, QuestionType, Role};

/// Category labels used by the standard questionnaires. Categories are plain
/// strings as far as the engine is concerned; this module just keeps the
/// spelling in one place.
pub mod categories {
    pub const PRODUCT_STRATEGY: &str = "Product Strategy";
    pub const CULTURE: &str = "Company Culture";
    pub const GOVERNANCE: &str = "Governance & Transparency";
    pub const FINANCE: &str = "Financial Strategy";
    pub const GROWTH: &str = "Growth & Scaling";
    pub const LEADERSHIP: &str = "Leadership Style";
    pub const COMMUNICATION: &str = "Communication Style";
    pub const INNOVATION: &str = "Innovation & Technology";
    pub const VALUES: &str = "Values & Mission";
}

/// Read-only table of question definitions, one set per role.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    startup: Vec<QuestionDefinition>,
    investor: Vec<QuestionDefinition>,
}

impl QuestionCatalog {
    pub fn new(startup: Vec<QuestionDefinition>, investor: Vec<QuestionDefinition>) -> Self {
        Self { startup, investor }
    }

    /// The platform's standard questionnaires.
    pub fn standard() -> Self {
        Self::new(startup_questions(), investor_questions())
    }

    pub fn questions_for(&self, role: Role) -> &[QuestionDefinition] {
        match role {
            Role::Startup => &self.startup,
            Role::Investor => &self.investor,
        }
    }

    pub fn find(&self, role: Role, question_id: &str) -> Option<&QuestionDefinition> {
        self.questions_for(role)
            .iter()
            .find(|question| question.id == question_id)
    }
}

fn question(
    id: &str,
    prompt: &str,
    question_type: QuestionType,
    category: &str,
    required: bool,
    options: &[(&str, &str)],
) -> QuestionDefinition {
    QuestionDefinition {
        id: id.to_string(),
        prompt: prompt.to_string(),
        question_type,
        category: category.to_string(),
        required,
        options: options
            .iter()
            .map(|(value, label)| QuestionOption {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect(),
    }
}

/// Five-step agreement-style slider; only the step count matters for scoring,
/// the labels are presentation.
fn slider(id: &str, prompt: &str, category: &str, labels: [&str; 5]) -> QuestionDefinition {
    let options: Vec<(&str, &str)> = ["1", "2", "3", "4", "5"]
        .into_iter()
        .zip(labels)
        .collect();
    question(id, prompt, QuestionType::Slider, category, true, &options)
}

fn startup_questions() -> Vec<QuestionDefinition> {
    vec![
        question(
            "startup_q1",
            "How flexible is the startup in adapting its product roadmap?",
            QuestionType::Radio,
            categories::PRODUCT_STRATEGY,
            true,
            &[
                ("very_flexible", "Very flexible, quick to pivot"),
                ("somewhat_flexible", "Somewhat flexible, open to adjustments"),
                ("balanced", "Balanced approach to stability and change"),
                ("mostly_stable", "Mostly stable, with occasional adjustments"),
                ("very_stable", "Very stable, committed to original vision"),
            ],
        ),
        question(
            "startup_q2",
            "Can the startup benefit from external connections?",
            QuestionType::MultiSelect,
            categories::GROWTH,
            true,
            &[
                ("industry_connections", "Industry connections"),
                ("customer_intros", "Customer introductions"),
                ("talent_acquisition", "Talent acquisition"),
                ("strategic_partnerships", "Strategic partnerships"),
                ("international_expansion", "International expansion"),
                ("supply_chain", "Supply chain optimization"),
            ],
        ),
        question(
            "startup_q3",
            "Does the startup want investor-led public relations (PR)?",
            QuestionType::Radio,
            categories::COMMUNICATION,
            true,
            &[
                ("yes_pr", "Yes, prefers investor-led PR"),
                ("no_pr", "No, prefers organic PR"),
                ("open_discussion", "Open to discussion"),
            ],
        ),
        slider(
            "startup_q4",
            "Does the startup encourage upskilling and continuous learning?",
            categories::CULTURE,
            [
                "Not at all",
                "Slightly",
                "Moderately",
                "Strongly",
                "Very strongly",
            ],
        ),
        question(
            "startup_q7",
            "Is the startup legally sound and compliant with relevant regulations?",
            QuestionType::Radio,
            categories::GOVERNANCE,
            true,
            &[
                ("fully_compliant", "Fully compliant"),
                ("mostly_compliant", "Mostly compliant"),
                ("moderately_compliant", "Moderately compliant"),
                ("somewhat_noncompliant", "Somewhat non-compliant"),
                ("non_compliant", "Non-compliant"),
            ],
        ),
        question(
            "startup_q9",
            "Is the startup willing to offer board seats to investors?",
            QuestionType::Radio,
            categories::GOVERNANCE,
            true,
            &[
                ("yes", "Yes"),
                ("no", "No"),
                ("negotiable", "Negotiable"),
            ],
        ),
        slider(
            "startup_q10",
            "Does the startup adhere to Environmental, Social, and Governance (ESG) principles?",
            categories::GOVERNANCE,
            [
                "Not at all",
                "Slightly committed",
                "Moderately committed",
                "Strongly committed",
                "Fully committed",
            ],
        ),
        question(
            "startup_q11",
            "Is the startup open to potential acquisition or external growth opportunities?",
            QuestionType::Radio,
            categories::GROWTH,
            true,
            &[
                ("open_acquisition", "Open to acquisition"),
                ("prefer_organic", "Prefer organic growth"),
                ("hybrid", "Hybrid approach"),
            ],
        ),
        question(
            "startup_q13",
            "Is the startup willing to develop a working prototype or MVP before seeking funding?",
            QuestionType::Radio,
            categories::INNOVATION,
            true,
            &[
                ("mvp_first", "Develop MVP before funding"),
                ("early_funding", "Require early funding to build MVP"),
                ("case_by_case", "Depends on circumstances"),
            ],
        ),
        question(
            "startup_q14",
            "Have the startup's founders worked together previously, or is the team newly formed?",
            QuestionType::Radio,
            categories::LEADERSHIP,
            true,
            &[
                ("experienced_team", "Experienced team"),
                ("new_team", "Newly formed team"),
                ("mixed", "Mixed background"),
            ],
        ),
        question(
            "startup_q59",
            "What valuation does the startup anticipate at its current funding stage?",
            QuestionType::Radio,
            categories::FINANCE,
            true,
            &[
                ("below_1m", "Below $1M"),
                ("1m_to_5m", "$1M - $5M"),
                ("5m_to_10m", "$5M - $10M"),
                ("above_10m", "Above $10M"),
            ],
        ),
        question(
            "startup_q61",
            "Describe the startup's mission and the change it wants to make.",
            QuestionType::Text,
            categories::VALUES,
            false,
            &[],
        ),
    ]
}

fn investor_questions() -> Vec<QuestionDefinition> {
    vec![
        slider(
            "investor_q1",
            "What is your preferred level of input in the product development process of your portfolio companies?",
            categories::PRODUCT_STRATEGY,
            [
                "Hands-off",
                "Light guidance",
                "Balanced input",
                "Active involvement",
                "Highly involved",
            ],
        ),
        question(
            "investor_q2",
            "How do you balance offering strategic guidance while respecting the founders' autonomy?",
            QuestionType::Radio,
            categories::LEADERSHIP,
            true,
            &[
                ("founder_led", "Strongly favor founder autonomy"),
                ("light_guidance", "Light guidance approach"),
                ("collaborative", "Collaborative partnership"),
                ("active_guidance", "Active guidance"),
                ("directive", "Directive approach"),
            ],
        ),
        slider(
            "investor_q3",
            "To what extent do you leverage your network to create partnership opportunities for your investments?",
            categories::GROWTH,
            [
                "Not at all",
                "Slightly",
                "Moderately",
                "Significantly",
                "Extensively",
            ],
        ),
        question(
            "investor_q4",
            "Do you favor a high-profile public stance in your investments over operating behind the scenes?",
            QuestionType::Radio,
            categories::COMMUNICATION,
            true,
            &[
                ("high_profile", "High-profile approach"),
                ("balanced", "Balanced visibility"),
                ("low_profile", "Operate behind the scenes"),
            ],
        ),
        question(
            "investor_q5",
            "Which funding stage do you primarily invest in?",
            QuestionType::Select,
            categories::FINANCE,
            true,
            &[
                ("pre_seed", "Pre-seed"),
                ("seed", "Seed"),
                ("series_a", "Series A"),
                ("series_b_plus", "Series B+"),
                ("growth", "Growth"),
                ("late_stage", "Late Stage"),
            ],
        ),
        question(
            "investor_q7",
            "What criteria do you use to evaluate if a startup's target market matches your investment priorities?",
            QuestionType::MultiSelect,
            categories::GROWTH,
            true,
            &[
                ("market_size", "Market size"),
                ("growth_potential", "Growth potential"),
                ("customer_demographics", "Customer demographics"),
                ("competitive_landscape", "Competitive landscape"),
                ("product_market_fit", "Product-market fit"),
            ],
        ),
        question(
            "investor_q8",
            "How do you incorporate legal and compliance standards into your evaluation process?",
            QuestionType::Radio,
            categories::GOVERNANCE,
            true,
            &[
                ("thorough_review", "Conduct thorough legal review"),
                ("external_counsel", "Rely on external legal counsel"),
                ("basic_compliance", "Consider only basic compliance"),
                ("delegate", "Delegate to startup's legal team"),
            ],
        ),
        slider(
            "investor_q10",
            "How critical is securing board representation to you?",
            categories::GOVERNANCE,
            [
                "Not critical",
                "Slightly critical",
                "Moderately critical",
                "Very critical",
                "Extremely critical",
            ],
        ),
        question(
            "investor_q61",
            "Describe your investment thesis and the kind of founders you look for.",
            QuestionType::Text,
            categories::VALUES,
            false,
            &[],
        ),
    ]
}
