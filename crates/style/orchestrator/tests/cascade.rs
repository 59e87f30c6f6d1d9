//! Cascade behaviour observed through the engine.

use std::sync::Arc;

use anyhow::{Result, anyhow};
use style_orchestrator::style::cascade;
use style_orchestrator::{
    ComputedStyle, MatchedRule, NodeKey, RuleId, Specificity, StyleContext, StyleEngine,
    StyleOptions, StyleRule,
};
use style_values::{Length, PropertyId, Rgba, StyleValueCollection, parse_declarations};

#[cfg(test)]
mod tests {
    use super::*;

    const ROOT: NodeKey = NodeKey(1);
    const CHILD: NodeKey = NodeKey(2);

    fn rule(engine: &StyleEngine, id: u64, text: &str) -> Arc<StyleRule> {
        Arc::new(StyleRule::parse(engine.context().registry(), RuleId(id), text))
    }

    fn matched(engine: &StyleEngine, id: u64, text: &str, classes: u32, order: u32) -> MatchedRule {
        MatchedRule::new(rule(engine, id, text), Specificity(0, classes, 0), order)
    }

    fn style(engine: &StyleEngine, node: NodeKey) -> Result<ComputedStyle> {
        engine
            .computed_style(node)
            .cloned()
            .ok_or_else(|| anyhow!("{node:?} has no style"))
    }

    #[test]
    fn resolution_is_idempotent() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let context = StyleContext::new();
        let registry = context.registry();
        let rules = [
            MatchedRule::new(
                Arc::new(StyleRule::parse(registry, RuleId(1), "width: 10px; margin: 1px 2px")),
                Specificity(0, 1, 0),
                0,
            ),
            MatchedRule::new(
                Arc::new(StyleRule::parse(registry, RuleId(2), "color: red; flex: 2")),
                Specificity(0, 0, 1),
                1,
            ),
        ];
        let inline_rule = StyleRule::parse(registry, RuleId(3), "opacity: 0.5");
        let mut inline = StyleValueCollection::new();
        for declaration in parse_declarations(registry, "height: 50%") {
            inline.set_declaration(declaration);
        }
        let first = cascade::resolve(&context, None, &rules, Some(&inline_rule), &inline);
        let second = cascade::resolve(&context, None, &rules, Some(&inline_rule), &inline);
        assert_eq!(first, second);

        let mut engine = StyleEngine::default();
        engine.attach_styled(ROOT, None, rules.to_vec(), None)?;
        engine.take_changes();
        engine.set_matched_rules(ROOT, rules.to_vec())?;
        assert!(engine.take_changes().is_empty());
        Ok(())
    }

    #[test]
    fn specificity_then_source_order() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = StyleEngine::default();
        let rules = vec![
            matched(&engine, 1, "width: 30px; height: 5px", 2, 0),
            matched(&engine, 2, "width: 10px; height: 6px", 1, 2),
            matched(&engine, 3, "height: 7px", 1, 1),
        ];
        engine.attach_styled(ROOT, None, rules, None)?;
        let computed = style(&engine, ROOT)?;
        assert_eq!(computed.layout().width, Length::px(30.0));
        assert_eq!(computed.layout().height, Length::px(5.0));
        Ok(())
    }

    #[test]
    fn initial_ignores_the_parent() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = StyleEngine::default();
        let parent_rules = vec![matched(&engine, 1, "color: white; font-size: 30px", 0, 0)];
        engine.attach_styled(ROOT, None, parent_rules, None)?;
        let child_rules = vec![matched(&engine, 2, "color: initial", 0, 1)];
        engine.attach_styled(CHILD, Some(ROOT), child_rules, None)?;
        let child = style(&engine, CHILD)?;
        assert_eq!(child.inherited().color, Rgba::BLACK);
        assert!((child.inherited().font_size - 30.0).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn untouched_properties_inherit_or_take_initial() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = StyleEngine::default();
        let parent_rules = vec![matched(&engine, 1, "color: #ff0000; width: 200px", 0, 0)];
        engine.attach_styled(ROOT, None, parent_rules, None)?;
        engine.attach(CHILD, Some(ROOT))?;
        let child = style(&engine, CHILD)?;
        assert_eq!(child.inherited().color, Rgba::new(255, 0, 0, 255));
        assert_eq!(child.layout().width, Length::auto());
        Ok(())
    }

    #[test]
    fn percentage_font_size_uses_the_parent_pixels() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = StyleEngine::default();
        let parent_rules = vec![matched(&engine, 1, "font-size: 20px", 0, 0)];
        engine.attach_styled(ROOT, None, parent_rules, None)?;
        let child_rules = vec![matched(&engine, 2, "font-size: 50%", 0, 1)];
        engine.attach_styled(CHILD, Some(ROOT), child_rules, None)?;
        assert!((style(&engine, CHILD)?.inherited().font_size - 10.0).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn root_percentages_use_the_configured_root_size() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let options = StyleOptions {
            root_font_size_px: 10.0,
            ..StyleOptions::default()
        };
        let mut engine = StyleEngine::new(Arc::new(StyleContext::with_options(options)));
        let rules = vec![matched(&engine, 1, "font-size: 150%", 0, 0)];
        engine.attach_styled(ROOT, None, rules, None)?;
        assert!((style(&engine, ROOT)?.inherited().font_size - 15.0).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn inherited_changes_restyle_children() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = StyleEngine::default();
        engine.attach(ROOT, None)?;
        engine.attach(CHILD, Some(ROOT))?;
        engine.take_changes();
        let rules = vec![matched(&engine, 1, "font-size: 24px", 0, 0)];
        engine.set_matched_rules(ROOT, rules)?;
        let changed: Vec<NodeKey> = engine.take_changes().into_iter().map(|(node, _)| node).collect();
        assert_eq!(changed, vec![ROOT, CHILD]);
        assert!((style(&engine, CHILD)?.inherited().font_size - 24.0).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn siblings_with_equal_rules_share_a_baseline() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = StyleEngine::default();
        let shared = matched(&engine, 1, "width: 4px", 0, 0);
        engine.attach(ROOT, None)?;
        engine.attach_styled(CHILD, Some(ROOT), vec![shared.clone()], None)?;
        engine.attach_styled(NodeKey(3), Some(ROOT), vec![shared], None)?;
        assert!(engine.shares_baseline(CHILD, NodeKey(3)));
        assert!(!engine.shares_baseline(ROOT, CHILD));

        engine.detach(CHILD)?;
        engine.detach(NodeKey(3))?;
        assert_eq!(engine.purge_baselines(), 1);
        Ok(())
    }

    #[test]
    fn unknown_properties_are_ignored() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut engine = StyleEngine::default();
        let rules = vec![matched(&engine, 1, "-unity-font: x; glow: 3px; width: 8px", 0, 0)];
        engine.attach_styled(ROOT, None, rules, None)?;
        assert_eq!(style(&engine, ROOT)?.layout().width, Length::px(8.0));
        assert_eq!(engine.context().registry().id_for_name("glow"), PropertyId::Unknown);
        Ok(())
    }
}
