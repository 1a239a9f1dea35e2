//! Rule store: merges domain, universal, and learned rule sources into
//! one immutable [`RuleSet`].
//!
//! Assembly never fails: every degraded source is logged and skipped, so
//! the worst case is a smaller (possibly empty) rule set, never an error.

use tracing::{debug, warn};

use crate::loader::RuleMap;
use crate::rule::{RegexPattern, Rule};
use crate::types::{FixKind, Severity};

/// Minimum confidence for a learned rule to be consumed.
pub const MIN_LEARNED_CONFIDENCE: f64 = 0.85;

/// Category under which learned rules are filed.
pub const LEARNED_CATEGORY: &str = "learned_behavior";

/// A rule learned at runtime from an accepted correction.
#[derive(Debug, Clone, PartialEq)]
pub struct LearnedRule {
    /// Human-readable description of the learned behavior.
    pub rule: String,
    /// Find regex.
    pub find: String,
    /// Replacement text.
    pub replace: String,
    /// Confidence score in `[0, 1]`.
    pub confidence: f64,
}

/// Error type returned by learned-rule providers.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// Collaborator that supplies rules learned from accepted corrections.
///
/// Implementations typically sit on a persistence layer; this engine only
/// sees the resulting tuples.
pub trait LearnedRuleProvider {
    /// Returns learned rules at or above `min_confidence`.
    ///
    /// # Errors
    ///
    /// Implementations may fail (e.g., storage unavailable); the store
    /// recovers by continuing without learned rules.
    fn learned_rules(&self, min_confidence: f64) -> Result<Vec<LearnedRule>, ProviderError>;
}

/// An immutable, merged set of validation rules, grouped by category.
///
/// Safe to share across concurrent validation calls; refreshing learned
/// rules means assembling a new set, never mutating this one.
#[derive(Debug, Default)]
pub struct RuleSet {
    categories: RuleMap,
}

impl RuleSet {
    /// Assembles a rule set from its three provenance layers.
    ///
    /// Domain rules win: a universal rule is appended to a category only
    /// when its id is not already present there and not suppressed. Id
    /// precedence is per-category; the same id in two different
    /// categories is kept in both (a quirk of the merge algorithm that
    /// callers rely on). Learned rules land in [`LEARNED_CATEGORY`].
    #[must_use]
    pub fn assemble(
        domain: RuleMap,
        universal: Option<RuleMap>,
        suppressed_ids: &[String],
        provider: Option<&dyn LearnedRuleProvider>,
    ) -> Self {
        let mut categories = domain;

        if let Some(universal) = universal {
            merge_universal(&mut categories, universal, suppressed_ids);
        }

        if let Some(provider) = provider {
            merge_learned(&mut categories, provider);
        }

        debug!(
            categories = categories.len(),
            rules = categories.values().map(Vec::len).sum::<usize>(),
            "assembled rule set"
        );
        Self { categories }
    }

    /// A rule set with no rules at all; validation against it always
    /// passes (fail-open).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true when no category holds any rule.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.values().all(Vec::is_empty)
    }

    /// Total number of rules across categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }

    /// Iterates categories in stable order with their rules.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.categories
            .iter()
            .map(|(category, rules)| (category.as_str(), rules.as_slice()))
    }

    /// Returns the rules of one category.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&[Rule]> {
        self.categories.get(name).map(Vec::as_slice)
    }
}

fn merge_universal(categories: &mut RuleMap, universal: RuleMap, suppressed_ids: &[String]) {
    for (category, rules) in universal {
        let slot = categories.entry(category).or_default();
        let mut existing_ids: Vec<String> =
            slot.iter().filter_map(|r| r.id.clone()).collect();

        for rule in rules {
            let admitted = match &rule.id {
                Some(id) => {
                    !existing_ids.iter().any(|e| e == id)
                        && !suppressed_ids.iter().any(|s| s == id)
                }
                // Id-less universal rules cannot collide or be suppressed.
                None => true,
            };
            if admitted {
                if let Some(id) = &rule.id {
                    existing_ids.push(id.clone());
                }
                slot.push(rule);
            }
        }
    }
}

fn merge_learned(categories: &mut RuleMap, provider: &dyn LearnedRuleProvider) {
    let learned = match provider.learned_rules(MIN_LEARNED_CONFIDENCE) {
        Ok(learned) => learned,
        Err(e) => {
            warn!(error = %e, "failed to load learned rules, continuing without them");
            return;
        }
    };

    let slot = categories.entry(LEARNED_CATEGORY.to_string()).or_default();
    for (index, learned_rule) in learned
        .into_iter()
        .filter(|r| r.confidence >= MIN_LEARNED_CONFIDENCE)
        .enumerate()
    {
        let find = match RegexPattern::new(&learned_rule.find) {
            Ok(pattern) => pattern,
            Err(e) => {
                warn!(error = %e, "skipping learned rule with non-compiling find pattern");
                continue;
            }
        };

        slot.push(Rule {
            id: Some(format!("learned_{index}")),
            severity: Severity::Warning,
            message: Some(format!("Learned Violation: {}", learned_rule.rule)),
            forbidden_regex: vec![find],
            fix: Some(FixKind::GenericRegexReplace),
            replacement: Some(learned_rule.replace),
            ..Rule::default()
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn rule_with_id(id: &str) -> Rule {
        Rule {
            id: Some(id.to_string()),
            forbidden: vec!["x".to_string()],
            ..Rule::default()
        }
    }

    fn map_of(category: &str, rules: Vec<Rule>) -> RuleMap {
        let mut map = BTreeMap::new();
        map.insert(category.to_string(), rules);
        map
    }

    struct FixedProvider(Vec<LearnedRule>);

    impl LearnedRuleProvider for FixedProvider {
        fn learned_rules(&self, _min_confidence: f64) -> Result<Vec<LearnedRule>, ProviderError> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    impl LearnedRuleProvider for FailingProvider {
        fn learned_rules(&self, _min_confidence: f64) -> Result<Vec<LearnedRule>, ProviderError> {
            Err("storage offline".into())
        }
    }

    #[test]
    fn domain_rule_wins_over_universal_with_same_id() {
        let domain = map_of("safety", vec![rule_with_id("r1")]);
        let mut universal_rule = rule_with_id("r1");
        universal_rule.message = Some("universal flavor".to_string());
        let universal = map_of("safety", vec![universal_rule, rule_with_id("r2")]);

        let set = RuleSet::assemble(domain, Some(universal), &[], None);

        let safety = set.category("safety").unwrap();
        assert_eq!(safety.len(), 2);
        assert!(safety[0].message.is_none()); // domain copy of r1 kept
        assert_eq!(safety[1].id.as_deref(), Some("r2"));
    }

    #[test]
    fn duplicate_id_across_categories_is_preserved() {
        let domain = map_of("safety", vec![rule_with_id("r1")]);
        let universal = map_of("style", vec![rule_with_id("r1")]);

        let set = RuleSet::assemble(domain, Some(universal), &[], None);

        assert_eq!(set.category("safety").unwrap().len(), 1);
        assert_eq!(set.category("style").unwrap().len(), 1);
    }

    #[test]
    fn suppressed_universal_rule_is_dropped() {
        let universal = map_of("safety", vec![rule_with_id("r1"), rule_with_id("r2")]);
        let set = RuleSet::assemble(
            RuleMap::new(),
            Some(universal),
            &["r1".to_string()],
            None,
        );

        let safety = set.category("safety").unwrap();
        assert_eq!(safety.len(), 1);
        assert_eq!(safety[0].id.as_deref(), Some("r2"));
    }

    #[test]
    fn universal_rule_without_id_always_merges() {
        let universal = map_of(
            "style",
            vec![Rule {
                forbidden: vec!["goto".to_string()],
                ..Rule::default()
            }],
        );
        let set = RuleSet::assemble(RuleMap::new(), Some(universal), &[], None);
        assert_eq!(set.category("style").unwrap().len(), 1);
    }

    #[test]
    fn learned_rules_synthesized_into_learned_category() {
        let provider = FixedProvider(vec![LearnedRule {
            rule: "use tempC instead of raw sensor names".to_string(),
            find: r"temp_\d+".to_string(),
            replace: "tempC".to_string(),
            confidence: 0.9,
        }]);

        let set = RuleSet::assemble(RuleMap::new(), None, &[], Some(&provider));

        let learned = set.category(LEARNED_CATEGORY).unwrap();
        assert_eq!(learned.len(), 1);
        let rule = &learned[0];
        assert_eq!(rule.id.as_deref(), Some("learned_0"));
        assert_eq!(rule.severity, Severity::Warning);
        assert_eq!(rule.fix, Some(FixKind::GenericRegexReplace));
        assert_eq!(rule.replacement.as_deref(), Some("tempC"));
        assert_eq!(rule.forbidden_regex[0].as_str(), r"temp_\d+");
        assert!(rule
            .message
            .as_deref()
            .unwrap()
            .contains("use tempC instead"));
    }

    #[test]
    fn low_confidence_learned_rules_filtered() {
        let provider = FixedProvider(vec![
            LearnedRule {
                rule: "low".to_string(),
                find: "a".to_string(),
                replace: "b".to_string(),
                confidence: 0.5,
            },
            LearnedRule {
                rule: "high".to_string(),
                find: "c".to_string(),
                replace: "d".to_string(),
                confidence: 0.95,
            },
        ]);

        let set = RuleSet::assemble(RuleMap::new(), None, &[], Some(&provider));
        let learned = set.category(LEARNED_CATEGORY).unwrap();
        assert_eq!(learned.len(), 1);
        assert_eq!(learned[0].id.as_deref(), Some("learned_0"));
        assert!(learned[0].message.as_deref().unwrap().contains("high"));
    }

    #[test]
    fn failing_provider_degrades_to_no_learned_rules() {
        let domain = map_of("safety", vec![rule_with_id("r1")]);
        let set = RuleSet::assemble(domain, None, &[], Some(&FailingProvider));

        assert_eq!(set.len(), 1);
        assert!(set.category(LEARNED_CATEGORY).is_none());
    }

    #[test]
    fn learned_rule_with_bad_find_pattern_skipped() {
        let provider = FixedProvider(vec![LearnedRule {
            rule: "broken".to_string(),
            find: "(unclosed".to_string(),
            replace: "x".to_string(),
            confidence: 0.99,
        }]);

        let set = RuleSet::assemble(RuleMap::new(), None, &[], Some(&provider));
        assert!(set.category(LEARNED_CATEGORY).unwrap().is_empty());
    }

    #[test]
    fn empty_set_reports_empty() {
        assert!(RuleSet::empty().is_empty());
        assert_eq!(RuleSet::empty().len(), 0);
    }
}
