//! The public validator: rule-set assembly plus the validate/auto-fix
//! entry points.

use std::sync::Arc;

use tracing::warn;

use genguard_core::{
    evaluate, DomainConfig, Issue, LearnedRuleProvider, RuleMap, RuleSet, ValidationReport,
};

/// Builder for configuring a [`Validator`].
///
/// Construction is fail-open by policy: an unreadable or malformed rule
/// source degrades (with a warning) rather than failing the build, so a
/// validator always comes up. In the worst case it has no rules and
/// every input validates clean.
#[derive(Default)]
pub struct ValidatorBuilder {
    domain: RuleMap,
    universal: Option<RuleMap>,
    suppressed: Vec<String>,
    provider: Option<Box<dyn LearnedRuleProvider>>,
}

impl ValidatorBuilder {
    /// Creates a new builder with no rule sources.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the domain rules and suppression list from a loaded domain
    /// configuration.
    #[must_use]
    pub fn domain_config(mut self, config: DomainConfig) -> Self {
        self.domain = config.rules;
        self.suppressed = config.suppressed_rules;
        self
    }

    /// Sets the domain rules directly.
    #[must_use]
    pub fn domain_rules(mut self, rules: RuleMap) -> Self {
        self.domain = rules;
        self
    }

    /// Sets the domain rules from a JSON configuration document.
    ///
    /// A document that fails to parse is logged and skipped.
    #[must_use]
    pub fn domain_json(self, json: &str) -> Self {
        match DomainConfig::parse(json) {
            Ok(config) => self.domain_config(config),
            Err(e) => {
                warn!(error = %e, "unreadable domain rule source, continuing without it");
                self
            }
        }
    }

    /// Sets the universal (cross-domain baseline) rules.
    #[must_use]
    pub fn universal_rules(mut self, rules: RuleMap) -> Self {
        self.universal = Some(rules);
        self
    }

    /// Sets the universal rules from a JSON ruleset document.
    ///
    /// A document that fails to parse is logged and skipped; validation
    /// then runs with domain rules only.
    #[must_use]
    pub fn universal_json(mut self, json: &str) -> Self {
        match genguard_core::parse_ruleset(json) {
            Ok(rules) => {
                self.universal = Some(rules);
            }
            Err(e) => {
                warn!(error = %e, "unreadable universal rule source, continuing with domain rules only");
            }
        }
        self
    }

    /// Adds universal rule ids to suppress during the merge.
    #[must_use]
    pub fn suppress<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suppressed.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Sets the learned-rule collaborator.
    #[must_use]
    pub fn learned_provider<P: LearnedRuleProvider + 'static>(mut self, provider: P) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Assembles the rule set and builds the validator. Infallible.
    #[must_use]
    pub fn build(self) -> Validator {
        let rules = RuleSet::assemble(
            self.domain,
            self.universal,
            &self.suppressed,
            self.provider.as_deref(),
        );
        Validator {
            rules: Arc::new(rules),
        }
    }
}

/// Validates generated source text against an assembled rule set and
/// repairs violations that carry a fix directive.
///
/// The rule set is immutable after construction; `Validator` is cheap to
/// clone and safe to share across threads. Refreshing learned rules
/// means building a new validator.
#[derive(Clone)]
pub struct Validator {
    rules: Arc<RuleSet>,
}

impl Validator {
    /// Starts building a validator.
    #[must_use]
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Validates `code` in the given free-text context.
    ///
    /// Total for any string input: rule failures were already degraded
    /// at assembly time, and evaluation itself cannot fail.
    #[must_use]
    pub fn validate(&self, code: &str, context: &str) -> ValidationReport {
        ValidationReport::new(evaluate(&self.rules, code, context))
    }

    /// Applies the fixes attached to `issues`, in order, and returns the
    /// repaired text. Total; see [`genguard_fixes::apply_fixes`].
    #[must_use]
    pub fn auto_fix(&self, code: &str, issues: &[Issue]) -> String {
        genguard_fixes::apply_fixes(code, issues)
    }

    /// Returns the assembled rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
