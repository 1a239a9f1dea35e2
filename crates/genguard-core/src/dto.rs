//! JSON deserialization types (DTO layer).
//!
//! These types exist solely for serde deserialization of rule sources.
//! They are converted to domain model types via the loader.

use serde::Deserialize;
use std::collections::BTreeMap;

/// A field that accepts either a single string or a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    /// Single string form.
    One(String),
    /// List form.
    Many(Vec<String>),
}

impl StringOrList {
    /// Normalizes to a list.
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        }
    }
}

/// Raw JSON representation of one rule.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleDto {
    /// Stable rule id.
    #[serde(default)]
    pub id: Option<String>,
    /// Severity name (default: "warning").
    #[serde(default)]
    pub severity: Option<String>,
    /// Message override.
    #[serde(default)]
    pub message: Option<String>,
    /// Platform gate substring.
    #[serde(default)]
    pub platform: Option<String>,
    /// Trigger terms (string or list).
    #[serde(default)]
    pub trigger: Option<StringOrList>,
    /// Exclusion-context terms (string or list).
    #[serde(default)]
    pub exclude_context: Option<StringOrList>,
    /// Forbidden literal substrings (string or list).
    #[serde(default)]
    pub forbidden: Option<StringOrList>,
    /// Forbidden regex patterns (string or list).
    #[serde(default)]
    pub forbidden_regex: Option<StringOrList>,
    /// Required literal substring.
    #[serde(default)]
    pub required_pattern: Option<String>,
    /// Required regex pattern.
    #[serde(default)]
    pub required_regex: Option<String>,
    /// Fix strategy identifier.
    #[serde(default)]
    pub auto_fix: Option<String>,
    /// Replacement text for generic regex fixes.
    #[serde(default)]
    pub replacement: Option<String>,
    /// Exception substring that suppresses the rule.
    #[serde(default)]
    pub exception: Option<String>,
}

/// Raw JSON representation of a ruleset: category name → ordered rules.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RulesetDto(pub BTreeMap<String, Vec<RuleDto>>);

/// Raw JSON representation of a domain configuration document.
///
/// Only the rule-related fields are modeled here; the surrounding
/// orchestration (personality, prompts) lives outside this engine.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DomainConfigDto {
    /// Domain name (e.g., "embedded", "pharma").
    #[serde(default)]
    pub domain: Option<String>,
    /// The domain's validation rules.
    #[serde(default)]
    pub validation_rules: RulesetDto,
    /// Universal rule ids this domain opts out of.
    #[serde(default)]
    pub suppressed_rules: Vec<String>,
}
