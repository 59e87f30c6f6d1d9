//! Cascade resolution and the shared baseline cache.
//!
//! The cascade turns matched rules, the inline rule and inline overrides into a
//! [`crate::style_model::ComputedStyle`]. Baselines (everything but the inline layers) are
//! shared between elements with the same parent style and matched rules.

mod baseline;
pub mod cascade;

pub use baseline::BaselineCache;
