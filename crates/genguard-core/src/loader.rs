//! DTO → domain model conversion.
//!
//! Conversion is total by design: a malformed field degrades that field
//! with a `tracing` warning instead of rejecting the whole source, so a
//! single bad pattern can never take the validation pipeline down.

use std::collections::BTreeMap;

use tracing::warn;

use crate::dto::{DomainConfigDto, RuleDto, RulesetDto, StringOrList};
use crate::rule::{RegexPattern, Rule};
use crate::types::{FixKind, Severity};

/// Rules grouped by category, in stable category order.
pub type RuleMap = BTreeMap<String, Vec<Rule>>;

/// Errors when parsing a rule source document.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The document is not valid JSON for the expected shape.
    #[error("failed to parse rule source: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A loaded domain configuration: its rules plus merge directives.
#[derive(Debug, Clone, Default)]
pub struct DomainConfig {
    /// Domain name, when the document carries one.
    pub domain: Option<String>,
    /// The domain's own validation rules.
    pub rules: RuleMap,
    /// Universal rule ids this domain suppresses.
    pub suppressed_rules: Vec<String>,
}

impl DomainConfig {
    /// Parses a domain configuration document from JSON.
    ///
    /// # Errors
    ///
    /// Returns error if the document is not valid JSON.
    pub fn parse(json: &str) -> Result<Self, SourceError> {
        let dto: DomainConfigDto = serde_json::from_str(json)?;
        Ok(Self::from_dto(dto))
    }

    /// Converts an already-deserialized DTO.
    #[must_use]
    pub fn from_dto(dto: DomainConfigDto) -> Self {
        Self {
            domain: dto.domain,
            rules: load_ruleset(dto.validation_rules),
            suppressed_rules: dto.suppressed_rules,
        }
    }
}

/// Parses a bare ruleset document (category → rule list) from JSON.
///
/// # Errors
///
/// Returns error if the document is not valid JSON.
pub fn parse_ruleset(json: &str) -> Result<RuleMap, SourceError> {
    let dto: RulesetDto = serde_json::from_str(json)?;
    Ok(load_ruleset(dto))
}

/// Converts a ruleset DTO into domain rules.
///
/// Field-level problems (unknown severity, unknown fix identifier,
/// non-compiling regex) are logged and degraded per field.
#[must_use]
pub fn load_ruleset(dto: RulesetDto) -> RuleMap {
    dto.0
        .into_iter()
        .map(|(category, rules)| {
            let loaded = rules
                .into_iter()
                .map(|r| load_rule(&category, r))
                .collect();
            (category, loaded)
        })
        .collect()
}

fn load_rule(category: &str, dto: RuleDto) -> Rule {
    let rule_ref = dto.id.clone().unwrap_or_else(|| format!("<{category}>"));

    let severity = match dto.severity.as_deref() {
        None => Severity::default(),
        Some(name) => Severity::parse(name).unwrap_or_else(|| {
            warn!(rule = %rule_ref, severity = name, "unknown severity, defaulting to warning");
            Severity::default()
        }),
    };

    let fix = dto.auto_fix.as_deref().and_then(|identifier| {
        let parsed = FixKind::parse(identifier);
        if parsed.is_none() {
            // Deliberately loud: the source's silent no-op hid typos.
            warn!(rule = %rule_ref, fix = identifier, "unknown auto_fix identifier, fix disabled");
        }
        parsed
    });

    let forbidden_regex = dto
        .forbidden_regex
        .map(StringOrList::into_vec)
        .unwrap_or_default()
        .iter()
        .filter_map(|p| compile_pattern(&rule_ref, "forbidden_regex", p))
        .collect();

    let required_regex = dto
        .required_regex
        .as_deref()
        .and_then(|p| compile_pattern(&rule_ref, "required_regex", p));

    Rule {
        id: dto.id,
        severity,
        message: dto.message,
        platform: dto.platform,
        trigger: dto.trigger.map_or_else(Vec::new, |t| t.into_vec()),
        exclude_context: dto.exclude_context.map_or_else(Vec::new, |e| e.into_vec()),
        forbidden: dto.forbidden.map_or_else(Vec::new, |f| f.into_vec()),
        forbidden_regex,
        required_pattern: dto.required_pattern,
        required_regex,
        fix,
        replacement: dto.replacement,
        exception: dto.exception,
    }
}

fn compile_pattern(rule_ref: &str, field: &str, pattern: &str) -> Option<RegexPattern> {
    match RegexPattern::new(pattern) {
        Ok(compiled) => Some(compiled),
        Err(e) => {
            warn!(rule = %rule_ref, field, error = %e, "dropping non-compiling pattern");
            None
        }
    }
}
