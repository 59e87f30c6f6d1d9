//! Cascade resolution.
//!
//! A computed style is built in three layers: the baseline (initial values plus the parent's
//! inherited group), matched rules in ascending specificity and source order, then the
//! element's inline rule and inline overrides. The first two layers depend only on the parent
//! and the matched rules, so their result is cached by [`baseline_key`].

use core::hash::{Hash as _, Hasher as _};
use std::collections::hash_map::DefaultHasher;

use log::trace;
use style_values::{
    Length, LengthUnit, PropertyId, StyleDeclaration, StyleKeyword, StyleValue,
    StyleValueCollection, StyleValueManaged, ValueData, shorthand,
};

use crate::context::StyleContext;
use crate::style_model::ComputedStyle;
use crate::types::{MatchedRule, StyleRule};

/// Applies declarations on top of a starting style.
pub struct Resolver<'style> {
    context: &'style StyleContext,
    parent: Option<&'style ComputedStyle>,
    /// Reference for percentage font sizes, read once per pass.
    parent_font_size: f32,
    style: ComputedStyle,
}

impl<'style> Resolver<'style> {
    /// Start from the initial style, inheriting from `parent` when there is one.
    pub fn new(context: &'style StyleContext, parent: Option<&'style ComputedStyle>) -> Self {
        let base = fallback_style(context, parent);
        Self::with_base(context, parent, base)
    }

    /// Continue resolution from an already resolved style.
    pub fn with_base(
        context: &'style StyleContext,
        parent: Option<&'style ComputedStyle>,
        base: ComputedStyle,
    ) -> Self {
        let parent_font_size = parent.map_or(context.options().root_font_size_px, |style| {
            style.inherited().font_size
        });
        Self {
            context,
            parent,
            parent_font_size,
            style: base,
        }
    }

    pub fn apply(&mut self, declaration: &StyleDeclaration) {
        if declaration.id().is_shorthand() {
            let longhands = shorthand::expand_declaration(declaration);
            self.apply_all(&longhands);
            return;
        }
        match declaration {
            StyleDeclaration::Value(value) => self.apply_value(value),
            StyleDeclaration::Managed(value) => self.apply_managed(value),
        }
    }

    pub fn apply_all<'decl>(&mut self, declarations: impl IntoIterator<Item = &'decl StyleDeclaration>) {
        for declaration in declarations {
            self.apply(declaration);
        }
    }

    fn apply_value(&mut self, value: &StyleValue) {
        if value.keyword != StyleKeyword::Undefined {
            self.apply_keyword(value.id, value.keyword);
            return;
        }
        let data = self.resolve_relative(value.id, value.data);
        self.style.set_value(value.id, data);
    }

    fn apply_managed(&mut self, value: &StyleValueManaged) {
        if value.keyword == StyleKeyword::Undefined {
            self.style.set_managed(value.id, &value.data);
        } else {
            self.apply_keyword(value.id, value.keyword);
        }
    }

    fn apply_keyword(&mut self, id: PropertyId, keyword: StyleKeyword) {
        match keyword {
            StyleKeyword::Undefined | StyleKeyword::Null => {}
            StyleKeyword::Initial => {
                self.style.copy_property(id, self.context.initial_style());
            }
            StyleKeyword::Unset => match self.parent {
                Some(parent) if id.is_inherited() => {
                    self.style.copy_property(id, parent);
                }
                _ => {
                    self.style.copy_property(id, self.context.initial_style());
                }
            },
            StyleKeyword::Auto | StyleKeyword::None => {
                if !self.style.apply_keyword(id, keyword) {
                    trace!("{} has no meaning for {}", keyword.name(), id.name());
                }
            }
        }
    }

    /// Percentage font sizes become pixels relative to the parent.
    fn resolve_relative(&self, id: PropertyId, data: ValueData) -> ValueData {
        match (id, data) {
            (PropertyId::FontSize, ValueData::Length(length))
                if length.unit == LengthUnit::Percent =>
            {
                ValueData::Length(Length::px(self.parent_font_size * length.value / 100.0))
            }
            _ => data,
        }
    }

    pub fn finish(self) -> ComputedStyle {
        self.style
    }
}

/// The style an element has when nothing applies to it.
pub fn fallback_style(context: &StyleContext, parent: Option<&ComputedStyle>) -> ComputedStyle {
    parent.map_or_else(
        || context.initial_style().clone(),
        |style| ComputedStyle::inheriting_from(style, context.initial_style()),
    )
}

/// Matched rules in cascade order: ascending specificity, then source order.
pub fn cascade_order(rules: &[MatchedRule]) -> Vec<&MatchedRule> {
    let mut ordered: Vec<&MatchedRule> = rules.iter().collect();
    ordered.sort_by_key(|rule| (rule.specificity, rule.source_order));
    ordered
}

/// Resolve the parent and matched-rule layers.
pub fn resolve_baseline(
    context: &StyleContext,
    parent: Option<&ComputedStyle>,
    rules: &[MatchedRule],
) -> ComputedStyle {
    let mut resolver = Resolver::new(context, parent);
    for matched in cascade_order(rules) {
        resolver.apply_all(&matched.rule.declarations);
    }
    resolver.finish()
}

/// Apply the inline rule, then the inline overrides, on top of `baseline`.
pub fn apply_inline(
    context: &StyleContext,
    parent: Option<&ComputedStyle>,
    baseline: &ComputedStyle,
    inline_rule: Option<&StyleRule>,
    inline: &StyleValueCollection,
) -> ComputedStyle {
    let mut resolver = Resolver::with_base(context, parent, baseline.clone());
    if let Some(rule) = inline_rule {
        resolver.apply_all(&rule.declarations);
    }
    for declaration in inline.declarations() {
        resolver.apply(&declaration);
    }
    resolver.finish()
}

/// Resolve all layers for one element.
pub fn resolve(
    context: &StyleContext,
    parent: Option<&ComputedStyle>,
    rules: &[MatchedRule],
    inline_rule: Option<&StyleRule>,
    inline: &StyleValueCollection,
) -> ComputedStyle {
    let baseline = resolve_baseline(context, parent, rules);
    apply_inline(context, parent, &baseline, inline_rule, inline)
}

/// Apply one declaration to an already resolved style.
pub fn apply_declaration(
    context: &StyleContext,
    parent: Option<&ComputedStyle>,
    style: &mut ComputedStyle,
    declaration: &StyleDeclaration,
) {
    let mut resolver = Resolver::with_base(context, parent, style.clone());
    resolver.apply(declaration);
    *style = resolver.finish();
}

/// Restore `id` to the value the cascade gives it without an inline override: the baseline
/// value (or the fallback style when no baseline is available), then the inline rule's
/// declarations for `id`, shorthands included.
pub fn reseed(
    context: &StyleContext,
    parent: Option<&ComputedStyle>,
    style: &mut ComputedStyle,
    baseline: Option<&ComputedStyle>,
    inline_rule: Option<&StyleRule>,
    id: PropertyId,
) {
    match baseline {
        Some(source) => {
            style.copy_property(id, source);
        }
        None => {
            let source = fallback_style(context, parent);
            style.copy_property(id, &source);
        }
    }
    let Some(rule) = inline_rule else {
        return;
    };
    let own: Vec<StyleDeclaration> = rule
        .declarations
        .iter()
        .flat_map(shorthand::expand_declaration)
        .filter(|declaration| declaration.id() == id)
        .collect();
    let mut resolver = Resolver::with_base(context, parent, style.clone());
    resolver.apply_all(&own);
    *style = resolver.finish();
}

/// Structural hash of everything [`resolve_baseline`] reads.
///
/// Rules are identified by id, so a rule's declarations must not change while its id is in
/// use.
pub fn baseline_key(parent: Option<&ComputedStyle>, rules: &[MatchedRule]) -> u64 {
    let mut hasher = DefaultHasher::new();
    match parent {
        Some(style) => {
            1u8.hash(&mut hasher);
            style.inherited().hash(&mut hasher);
        }
        None => 0u8.hash(&mut hasher),
    }
    for matched in cascade_order(rules) {
        matched.rule.id.hash(&mut hasher);
        matched.specificity.hash(&mut hasher);
        matched.source_order.hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use style_values::Rgba;

    use super::*;
    use crate::types::{RuleId, Specificity};

    fn rule(context: &StyleContext, id: u64, text: &str, specificity: u32, order: u32) -> MatchedRule {
        MatchedRule::new(
            Arc::new(StyleRule::parse(context.registry(), RuleId(id), text)),
            Specificity(0, specificity, 0),
            order,
        )
    }

    #[test]
    fn higher_specificity_wins_regardless_of_input_order() {
        let context = StyleContext::new();
        let rules = [
            rule(&context, 2, "width: 20px", 2, 0),
            rule(&context, 1, "width: 10px", 1, 1),
        ];
        let style = resolve_baseline(&context, None, &rules);
        assert_eq!(style.layout().width, Length::px(20.0));
    }

    #[test]
    fn source_order_breaks_ties() {
        let context = StyleContext::new();
        let rules = [
            rule(&context, 1, "opacity: 0.5", 1, 3),
            rule(&context, 2, "opacity: 0.25", 1, 1),
        ];
        let style = resolve_baseline(&context, None, &rules);
        assert!((style.visual().opacity - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn unset_inherits_only_inherited_properties() {
        let context = StyleContext::new();
        let parent = resolve_baseline(
            &context,
            None,
            &[rule(&context, 1, "color: white; width: 50px", 0, 0)],
        );
        let child = resolve_baseline(
            &context,
            Some(&parent),
            &[rule(&context, 2, "color: red; width: 10px", 0, 0), rule(&context, 3, "color: unset; width: unset", 1, 1)],
        );
        assert_eq!(child.inherited().color, Rgba::WHITE);
        assert_eq!(child.layout().width, Length::auto());
    }

    #[test]
    fn keys_depend_on_rules_and_parent() {
        let context = StyleContext::new();
        let rules = [rule(&context, 1, "width: 1px", 0, 0)];
        let parent = context.initial_style().clone();
        assert_eq!(baseline_key(None, &rules), baseline_key(None, &rules));
        assert_ne!(baseline_key(None, &rules), baseline_key(None, &[]));
        assert_ne!(baseline_key(None, &rules), baseline_key(Some(&parent), &rules));
    }

    #[test]
    fn reseed_reads_shorthands_of_the_inline_rule() {
        let context = StyleContext::new();
        let margin = StyleDeclaration::Value(StyleValue::new(
            PropertyId::Margin,
            ValueData::Length(Length::px(7.0)),
        ));
        let inline_rule = StyleRule::new(RuleId(9), vec![margin]);
        let baseline = context.initial_style().clone();
        let mut style = baseline.clone();
        style.set_value(PropertyId::MarginLeft, ValueData::Length(Length::px(1.0)));

        reseed(&context, None, &mut style, Some(&baseline), Some(&inline_rule), PropertyId::MarginLeft);
        assert_eq!(style.layout().margin.left, Length::px(7.0));
        assert_eq!(style.layout().margin.top, Length::ZERO);
    }
}
