//! # genguard-core
//!
//! Core engine for validating machine-generated source text against
//! layered rule sources and reporting structured issues.
//!
//! The engine is purely lexical: rules match substrings and regexes over
//! comment-stripped text, with no AST in sight. Rule sources are injected
//! as already-loaded data; all filesystem and storage access lives in the
//! collaborators that feed this crate.
//!
//! ## Layers
//!
//! - [`dto`] / [`loader`] — JSON rule-source shape and its total,
//!   fail-open conversion into domain rules.
//! - [`store`] — merge of domain, universal, and learned rule layers
//!   into one immutable [`RuleSet`].
//! - [`evaluator`] — gate and test every rule against a code/context
//!   pair, producing ordered [`Issue`]s.

#![forbid(unsafe_code)]

pub mod comments;
pub mod dto;
pub mod evaluator;
pub mod loader;
pub mod rule;
pub mod store;
pub mod types;

pub use comments::strip_comments;
pub use evaluator::evaluate;
pub use loader::{load_ruleset, parse_ruleset, DomainConfig, RuleMap, SourceError};
pub use rule::{RegexPattern, Rule, RuleError};
pub use store::{
    LearnedRule, LearnedRuleProvider, ProviderError, RuleSet, LEARNED_CATEGORY,
    MIN_LEARNED_CONFIDENCE,
};
pub use types::{FixKind, Issue, Severity, ValidationReport};
