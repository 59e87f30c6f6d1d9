//! Element keys and the rule records fed to the cascade by an external selector matcher.

use std::sync::Arc;

use style_values::{PropertyRegistry, StyleDeclaration, parse_declarations};

/// Identity of an element in the host tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey(pub u64);

/// Selector specificity as (ids, classes, types); compared lexicographically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Specificity(pub u32, pub u32, pub u32);

/// Stable identity of an authored rule, used for baseline cache keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub u64);

/// An authored declaration block, in source order. Shorthands expand when applied.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRule {
    pub id: RuleId,
    pub declarations: Vec<StyleDeclaration>,
}

impl StyleRule {
    pub const fn new(id: RuleId, declarations: Vec<StyleDeclaration>) -> Self {
        Self { id, declarations }
    }

    /// Build a rule from declaration text such as `width: 10px; margin: 4px`.
    /// Unknown properties and invalid values are dropped.
    pub fn parse(registry: &PropertyRegistry, id: RuleId, text: &str) -> Self {
        Self::new(id, parse_declarations(registry, text))
    }
}

/// A rule matched against one element.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchedRule {
    pub rule: Arc<StyleRule>,
    pub specificity: Specificity,
    /// Position of the rule in its sheet; breaks specificity ties (later wins).
    pub source_order: u32,
}

impl MatchedRule {
    pub const fn new(rule: Arc<StyleRule>, specificity: Specificity, source_order: u32) -> Self {
        Self {
            rule,
            specificity,
            source_order,
        }
    }
}
