//! Inline style writes layered over matched rules and the inline rule.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use style_orchestrator::layout_model::{LayoutNode, LayoutValue};
use style_orchestrator::{
    ComputedStyle, MatchedRule, NodeKey, RuleId, Specificity, StyleEngine, StyleRule,
};
use style_values::{ChangeFlags, Length, PropertyId, Rgba, StyleDeclaration, StyleValue, ValueData};

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: NodeKey = NodeKey(1);

    fn rule(engine: &StyleEngine, id: u64, text: &str) -> Arc<StyleRule> {
        Arc::new(StyleRule::parse(engine.context().registry(), RuleId(id), text))
    }

    fn styled_root(text: &str) -> Result<StyleEngine> {
        let mut engine = StyleEngine::default();
        let matched = vec![MatchedRule::new(rule(&engine, 1, text), Specificity(0, 1, 0), 0)];
        engine.attach_styled(ROOT, None, matched, None)?;
        engine.take_changes();
        engine.take_layout_dirty();
        Ok(engine)
    }

    fn style(engine: &StyleEngine) -> Result<ComputedStyle> {
        engine
            .computed_style(ROOT)
            .cloned()
            .ok_or_else(|| anyhow!("root has no style"))
    }

    #[test]
    fn inline_values_beat_matched_rules_until_cleared() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = styled_root("width: 10px")?;

        let flags = engine.inline_style(ROOT)?.set_width(Length::px(20.0));
        assert!(flags.contains(ChangeFlags::LAYOUT));
        assert_eq!(style(&engine)?.layout().width, Length::px(20.0));

        let flags = engine.inline_style(ROOT)?.clear(PropertyId::Width);
        assert!(flags.contains(ChangeFlags::LAYOUT));
        assert_eq!(style(&engine)?.layout().width, Length::px(10.0));
        assert!(engine.inline_style(ROOT)?.width().is_null());
        Ok(())
    }

    #[test]
    fn longhand_override_keeps_the_other_edges() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = styled_root("margin: 5px")?;
        engine.inline_style(ROOT)?.set_margin_left(Length::px(1.0));

        let margin = style(&engine)?.layout().margin;
        assert_eq!(margin.left, Length::px(1.0));
        assert_eq!(margin.top, Length::px(5.0));
        assert_eq!(margin.right, Length::px(5.0));
        assert_eq!(margin.bottom, Length::px(5.0));
        Ok(())
    }

    #[test]
    fn shorthand_setters_expand_to_edges() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = styled_root("")?;
        let mut inline = engine.inline_style(ROOT)?;
        inline.set_padding(&[Length::px(1.0), Length::px(2.0)]);
        inline.set_border_width(&[3.0]);
        inline.set_flex(2.0, 0.5, Length::px(40.0));
        assert_eq!(inline.padding_left().value, Length::px(2.0));
        assert_eq!(inline.set_margin(&[]), ChangeFlags::empty());

        let layout = style(&engine)?.layout().clone();
        assert_eq!(layout.padding.top, Length::px(1.0));
        assert_eq!(layout.padding.right, Length::px(2.0));
        assert_eq!(layout.padding.bottom, Length::px(1.0));
        assert!((layout.border_width.bottom - 3.0).abs() < f32::EPSILON);
        assert!((layout.flex_grow - 2.0).abs() < f32::EPSILON);
        assert!((layout.flex_shrink - 0.5).abs() < f32::EPSILON);
        assert_eq!(layout.flex_basis, Length::px(40.0));
        Ok(())
    }

    #[test]
    fn overrides_win_over_the_inline_rule() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = styled_root("width: 10px")?;
        let inline_rule = rule(&engine, 2, "width: 30px; height: 5px");
        engine.set_inline_rule(ROOT, Some(inline_rule))?;
        assert_eq!(style(&engine)?.layout().width, Length::px(30.0));

        engine.inline_style(ROOT)?.set_width(Length::px(40.0));
        assert_eq!(style(&engine)?.layout().width, Length::px(40.0));

        engine.inline_style(ROOT)?.clear(PropertyId::Width);
        let layout = style(&engine)?.layout().clone();
        assert_eq!(layout.width, Length::px(30.0));
        assert_eq!(layout.height, Length::px(5.0));

        engine.set_inline_rule(ROOT, None)?;
        assert_eq!(style(&engine)?.layout().width, Length::px(10.0));
        Ok(())
    }

    #[test]
    fn clearing_a_side_restores_the_inline_rule_shorthand() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = styled_root("margin: 2px")?;
        let shorthand = StyleDeclaration::Value(StyleValue::new(
            PropertyId::Margin,
            ValueData::Length(Length::px(7.0)),
        ));
        engine.set_inline_rule(ROOT, Some(Arc::new(StyleRule::new(RuleId(2), vec![shorthand]))))?;
        assert_eq!(style(&engine)?.layout().margin.left, Length::px(7.0));

        engine.inline_style(ROOT)?.set_margin_left(Length::px(1.0));
        assert_eq!(style(&engine)?.layout().margin.left, Length::px(1.0));

        engine.inline_style(ROOT)?.clear(PropertyId::MarginLeft);
        let margin = style(&engine)?.layout().margin;
        assert_eq!(margin.left, Length::px(7.0));
        assert_eq!(margin.right, Length::px(7.0));
        Ok(())
    }

    #[test]
    fn style_attribute_text_is_applied_in_order() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = styled_root("")?;
        let flags = engine
            .inline_style(ROOT)?
            .apply_style_attribute("width: 12px; bogus: 1; color: red; width: 14px");
        assert!(flags.contains(ChangeFlags::LAYOUT | ChangeFlags::COLOR));

        let computed = style(&engine)?;
        assert_eq!(computed.layout().width, Length::px(14.0));
        assert_eq!(computed.inherited().color, Rgba::new(255, 0, 0, 255));
        assert_eq!(engine.inline_style(ROOT)?.values().map(|values| values.len()), Some(2));
        Ok(())
    }

    #[test]
    fn unknown_names_change_nothing() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = styled_root("")?;
        let before = style(&engine)?;
        let mut inline = engine.inline_style(ROOT)?;
        assert_eq!(inline.set_by_name("no-such-thing", "3px"), ChangeFlags::empty());
        assert_eq!(inline.set_by_name("width", "not a length"), ChangeFlags::empty());
        assert_eq!(style(&engine)?, before);
        assert!(engine.take_changes().is_empty());
        Ok(())
    }

    #[test]
    fn clear_all_returns_to_the_cascade() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = styled_root("opacity: 0.5")?;
        let mut inline = engine.inline_style(ROOT)?;
        inline.set_opacity(0.25f32);
        inline.set_height(Length::px(8.0));
        inline.clear_all();
        assert_eq!(inline.values().map(|values| values.is_empty()), Some(true));

        let computed = style(&engine)?;
        assert!((computed.visual().opacity - 0.5).abs() < f32::EPSILON);
        assert_eq!(computed.layout().height, Length::auto());
        Ok(())
    }

    #[test]
    fn layout_sync_drains_the_dirty_set() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = styled_root("height: 50%")?;

        engine.inline_style(ROOT)?.set_opacity(0.5f32);
        assert!(engine.take_layout_dirty().is_empty());

        engine.inline_style(ROOT)?.set_width(Length::px(25.0));
        let mut node = LayoutNode::default();
        engine.sync_layout(ROOT, &mut node)?;
        assert_eq!(node.width, LayoutValue::Point(25.0));
        assert_eq!(node.height, LayoutValue::Percent(50.0));
        assert_eq!(node.min_width, LayoutValue::Undefined);
        assert!(engine.take_layout_dirty().is_empty());

        assert!(engine.sync_layout(NodeKey(9), &mut node).is_err());
        Ok(())
    }
}
