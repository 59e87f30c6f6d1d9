//! Style resolution for a retained UI tree.
//!
//! [`StyleEngine`] keeps one computed style per element: the cascade of matched rules, an
//! optional inline rule and per-property inline overrides, layered over the parent's
//! inherited values. Changes to animatable properties are intercepted and played as
//! transitions; resolved layout inputs are pushed into [`layout_model::LayoutNode`]s.

#![forbid(unsafe_code)]

pub mod animation;
mod context;
mod engine;
mod inline;
pub mod layout;
pub mod layout_model;
mod options;
pub mod style;
pub mod style_model;
pub mod types;

pub use animation::{Commit, Previous, Snap};
pub use context::StyleContext;
pub use engine::StyleEngine;
pub use inline::InlineStyleAccess;
pub use options::StyleOptions;
pub use style::BaselineCache;
pub use style_model::{ComputedStyle, Corners, Edges};
pub use types::{MatchedRule, NodeKey, RuleId, Specificity, StyleRule};
