//! Element bookkeeping, restyling and the per-frame transition tick.
//!
//! Parents are always styled before their children: children inherit from the parent's
//! visible style, and a change to an inherited value restyles the subtree below it.

use core::mem::take;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::{Result, anyhow, bail};
use log::{debug, trace};
use style_transitions::{TransitionEvent, TransitionTable};
use style_values::{
    ChangeFlags, PropertyId, StyleDeclaration, StyleKeyword, StyleValueCollection, shorthand,
};

use crate::animation::{self, Previous, Snap};
use crate::context::StyleContext;
use crate::inline::InlineStyleAccess;
use crate::layout;
use crate::layout_model::LayoutNode;
use crate::style::BaselineCache;
use crate::style::cascade;
use crate::style_model::ComputedStyle;
use crate::types::{MatchedRule, NodeKey, StyleRule};

#[derive(Debug)]
struct ElementData {
    parent: Option<NodeKey>,
    children: Vec<NodeKey>,
    depth: usize,
    matched: Vec<MatchedRule>,
    inline_rule: Option<Arc<StyleRule>>,
    inline: StyleValueCollection,
    baseline_key: u64,
    baseline: Arc<ComputedStyle>,
    /// Result of the cascade.
    target: ComputedStyle,
    /// `target` with running transitions sampled in; what children inherit from.
    visible: ComputedStyle,
    transitions: TransitionTable,
}

/// Styles a tree of elements against one [`StyleContext`].
#[derive(Debug)]
pub struct StyleEngine {
    context: Arc<StyleContext>,
    elements: HashMap<NodeKey, ElementData>,
    baselines: BaselineCache,
    now_ms: f64,
    changes: HashMap<NodeKey, ChangeFlags>,
    layout_dirty: HashSet<NodeKey>,
    events: Vec<(NodeKey, TransitionEvent)>,
}

impl Default for StyleEngine {
    #[inline]
    fn default() -> Self {
        Self::new(Arc::new(StyleContext::new()))
    }
}

impl StyleEngine {
    #[inline]
    pub fn new(context: Arc<StyleContext>) -> Self {
        let capacity = context.options().baseline_cache_capacity;
        Self {
            context,
            elements: HashMap::new(),
            baselines: BaselineCache::new(capacity),
            now_ms: 0.0,
            changes: HashMap::new(),
            layout_dirty: HashSet::new(),
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn context(&self) -> &StyleContext {
        &self.context
    }

    /// Time of the last [`StyleEngine::tick`], in milliseconds.
    #[inline]
    pub const fn now_ms(&self) -> f64 {
        self.now_ms
    }

    #[inline]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn contains(&self, node: NodeKey) -> bool {
        self.elements.contains_key(&node)
    }

    #[inline]
    pub fn parent(&self, node: NodeKey) -> Option<NodeKey> {
        self.elements.get(&node).and_then(|element| element.parent)
    }

    #[inline]
    pub fn children(&self, node: NodeKey) -> &[NodeKey] {
        self.elements
            .get(&node)
            .map(|element| element.children.as_slice())
            .unwrap_or_default()
    }

    fn element(&self, node: NodeKey) -> Result<&ElementData> {
        self.elements
            .get(&node)
            .ok_or_else(|| anyhow!("{node:?} is not attached"))
    }

    fn element_mut(&mut self, node: NodeKey) -> Result<&mut ElementData> {
        self.elements
            .get_mut(&node)
            .ok_or_else(|| anyhow!("{node:?} is not attached"))
    }

    /// Attach an unstyled element.
    ///
    /// # Errors
    /// Returns an error when `node` is already attached or `parent` is not.
    #[inline]
    pub fn attach(&mut self, node: NodeKey, parent: Option<NodeKey>) -> Result<()> {
        self.attach_styled(node, parent, Vec::new(), None)
    }

    /// Attach an element with its matched rules and inline rule. The first style is applied
    /// without transitions.
    ///
    /// # Errors
    /// Returns an error when `node` is already attached or `parent` is not.
    #[inline]
    pub fn attach_styled(
        &mut self,
        node: NodeKey,
        parent: Option<NodeKey>,
        matched: Vec<MatchedRule>,
        inline_rule: Option<Arc<StyleRule>>,
    ) -> Result<()> {
        if self.elements.contains_key(&node) {
            bail!("{node:?} is already attached");
        }
        let (parent_style, depth) = match parent {
            Some(key) => {
                let parent_data = self
                    .elements
                    .get(&key)
                    .ok_or_else(|| anyhow!("parent {key:?} of {node:?} is not attached"))?;
                (Some(parent_data.visible.clone()), parent_data.depth + 1)
            }
            None => (None, 0),
        };

        let context = Arc::clone(&self.context);
        let baseline_key = cascade::baseline_key(parent_style.as_ref(), &matched);
        let baseline = self.baselines.acquire(baseline_key, || {
            cascade::resolve_baseline(&context, parent_style.as_ref(), &matched)
        });
        let inline = StyleValueCollection::new();
        let target = cascade::apply_inline(
            &context,
            parent_style.as_ref(),
            &baseline,
            inline_rule.as_deref(),
            &inline,
        );
        let mut transitions = TransitionTable::new();
        let commit = animation::commit(
            &context,
            &mut transitions,
            None,
            &target,
            self.now_ms,
            Snap::Nothing,
        );

        if let Some(parent_data) = parent.and_then(|key| self.elements.get_mut(&key)) {
            parent_data.children.push(node);
        }
        self.elements.insert(
            node,
            ElementData {
                parent,
                children: Vec::new(),
                depth,
                matched,
                inline_rule,
                inline,
                baseline_key,
                baseline,
                target,
                visible: commit.visible,
                transitions,
            },
        );
        self.record(node, commit.changes);
        debug!("attached {node:?} under {parent:?}");
        Ok(())
    }

    /// Detach `node` and its subtree, cancelling their transitions.
    ///
    /// # Errors
    /// Returns an error when `node` is not attached.
    #[inline]
    pub fn detach(&mut self, node: NodeKey) -> Result<()> {
        let parent = self.element(node)?.parent;
        if let Some(parent_data) = parent.and_then(|key| self.elements.get_mut(&key)) {
            parent_data.children.retain(|child| *child != node);
        }
        let mut pending = vec![node];
        let mut removed = 0usize;
        while let Some(key) = pending.pop() {
            let Some(mut element) = self.elements.remove(&key) else {
                continue;
            };
            let cancelled = element.transitions.cancel_all();
            if cancelled > 0 {
                trace!("cancelled {cancelled} transitions of detached {key:?}");
            }
            self.baselines.release(element.baseline_key);
            self.changes.remove(&key);
            self.layout_dirty.remove(&key);
            pending.extend(element.children);
            removed += 1;
        }
        let elements = &self.elements;
        self.events.retain(|(key, _)| elements.contains_key(key));
        debug!("detached {removed} elements at {node:?}");
        Ok(())
    }

    /// Replace the rules matched against `node` and restyle it.
    ///
    /// # Errors
    /// Returns an error when `node` is not attached.
    #[inline]
    pub fn set_matched_rules(&mut self, node: NodeKey, matched: Vec<MatchedRule>) -> Result<()> {
        self.element_mut(node)?.matched = matched;
        self.restyle_subtree(node, Snap::Nothing);
        Ok(())
    }

    /// Replace the inline rule of `node` and restyle it.
    ///
    /// # Errors
    /// Returns an error when `node` is not attached.
    #[inline]
    pub fn set_inline_rule(&mut self, node: NodeKey, rule: Option<Arc<StyleRule>>) -> Result<()> {
        self.element_mut(node)?.inline_rule = rule;
        self.restyle_subtree(node, Snap::Nothing);
        Ok(())
    }

    /// Per-property inline overrides of `node`.
    ///
    /// # Errors
    /// Returns an error when `node` is not attached.
    #[inline]
    pub fn inline_style(&mut self, node: NodeKey) -> Result<InlineStyleAccess<'_>> {
        self.element(node)?;
        Ok(InlineStyleAccess::new(self, node))
    }

    /// The style currently displayed for `node`.
    #[inline]
    pub fn computed_style(&self, node: NodeKey) -> Option<&ComputedStyle> {
        self.elements.get(&node).map(|element| &element.visible)
    }

    /// The cascade result for `node`, ignoring running transitions.
    #[inline]
    pub fn target_style(&self, node: NodeKey) -> Option<&ComputedStyle> {
        self.elements.get(&node).map(|element| &element.target)
    }

    #[inline]
    pub fn is_animating(&self, node: NodeKey, id: PropertyId) -> bool {
        self.elements
            .get(&node)
            .is_some_and(|element| element.transitions.is_running(id))
    }

    /// Whether two elements resolved to the same cached baseline.
    #[inline]
    pub fn shares_baseline(&self, first: NodeKey, second: NodeKey) -> bool {
        match (self.elements.get(&first), self.elements.get(&second)) {
            (Some(left), Some(right)) => Arc::ptr_eq(&left.baseline, &right.baseline),
            _ => false,
        }
    }

    /// Advance every running transition to `now_ms`.
    #[inline]
    pub fn tick(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
        let mut animating: Vec<(usize, NodeKey)> = self
            .elements
            .iter()
            .filter(|(_, element)| !element.transitions.is_empty())
            .map(|(node, element)| (element.depth, *node))
            .collect();
        animating.sort_unstable();

        let context = Arc::clone(&self.context);
        for (_, node) in animating {
            let Some(element) = self.elements.get_mut(&node) else {
                continue;
            };
            let Some(step) = animation::advance(
                &context,
                &mut element.transitions,
                &element.target,
                &element.visible,
                now_ms,
            ) else {
                continue;
            };
            let changes = step.changes;
            element.visible = step.visible;
            self.record(node, changes);
            if changes.contains(ChangeFlags::INHERITED) {
                self.restyle_children(node, Snap::Inherited);
            }
        }
    }

    /// Drain the change flags recorded since the last call, ordered by node.
    #[inline]
    pub fn take_changes(&mut self) -> Vec<(NodeKey, ChangeFlags)> {
        let mut changes: Vec<_> = self.changes.drain().collect();
        changes.sort_unstable_by_key(|(node, _)| *node);
        changes
    }

    /// Drain the elements whose layout inputs changed, ordered by node.
    #[inline]
    pub fn take_layout_dirty(&mut self) -> Vec<NodeKey> {
        let mut dirty: Vec<_> = self.layout_dirty.drain().collect();
        dirty.sort_unstable();
        dirty
    }

    #[inline]
    pub fn take_transition_events(&mut self) -> Vec<(NodeKey, TransitionEvent)> {
        take(&mut self.events)
    }

    /// Push the layout inputs of `node` into `layout_node`.
    ///
    /// # Errors
    /// Returns an error when `node` is not attached.
    #[inline]
    pub fn sync_layout(&mut self, node: NodeKey, layout_node: &mut LayoutNode) -> Result<()> {
        layout::sync_layout(&self.element(node)?.visible, layout_node);
        self.layout_dirty.remove(&node);
        Ok(())
    }

    /// Drop cached baselines no element uses. Returns how many were dropped.
    #[inline]
    pub fn purge_baselines(&mut self) -> usize {
        self.baselines.purge_unused()
    }

    #[inline]
    pub fn baseline_count(&self) -> usize {
        self.baselines.len()
    }

    pub(crate) fn inline_values(&self, node: NodeKey) -> Option<&StyleValueCollection> {
        self.elements.get(&node).map(|element| &element.inline)
    }

    /// Write one inline override and commit the result. A `Null` keyword removes the
    /// override; the property falls back to the baseline and inline rule, without a
    /// transition.
    pub(crate) fn write_inline(&mut self, node: NodeKey, declaration: StyleDeclaration) -> ChangeFlags {
        let id = declaration.id();
        if id == PropertyId::Unknown {
            trace!("ignoring inline write to an unknown property on {node:?}");
            return ChangeFlags::empty();
        }
        if id.is_shorthand() {
            return shorthand::expand_declaration(&declaration)
                .into_iter()
                .fold(ChangeFlags::empty(), |flags, longhand| {
                    flags | self.write_inline(node, longhand)
                });
        }

        let removal = declaration.keyword_of() == StyleKeyword::Null;
        let parent_style = self.parent_style(node);
        let context = Arc::clone(&self.context);
        let Some(element) = self.elements.get_mut(&node) else {
            return ChangeFlags::empty();
        };
        if !element.inline.set_declaration(declaration.clone()) {
            return ChangeFlags::empty();
        }

        let mut target = element.target.clone();
        cascade::reseed(
            &context,
            parent_style.as_ref(),
            &mut target,
            Some(&element.baseline),
            element.inline_rule.as_deref(),
            id,
        );
        let snap = if removal {
            Snap::Property(id)
        } else {
            cascade::apply_declaration(&context, parent_style.as_ref(), &mut target, &declaration);
            Snap::Nothing
        };
        let commit = animation::commit(
            &context,
            &mut element.transitions,
            Some(Previous {
                target: &element.target,
                visible: &element.visible,
            }),
            &target,
            self.now_ms,
            snap,
        );
        element.target = target;
        element.visible = commit.visible;
        let changes = commit.changes;

        self.record(node, changes);
        if changes.contains(ChangeFlags::INHERITED) {
            self.restyle_children(node, Snap::Nothing);
        }
        changes
    }

    /// Remove every inline override of `node`.
    pub(crate) fn clear_inline(&mut self, node: NodeKey) -> ChangeFlags {
        let ids: Vec<PropertyId> = self.inline_values(node).map_or_else(Vec::new, |values| {
            values
                .declarations()
                .map(|declaration| declaration.id())
                .collect()
        });
        ids.into_iter().fold(ChangeFlags::empty(), |flags, id| {
            flags | self.write_inline(node, StyleDeclaration::keyword(id, StyleKeyword::Null))
        })
    }

    fn parent_style(&self, node: NodeKey) -> Option<ComputedStyle> {
        let parent = self.elements.get(&node)?.parent?;
        self.elements
            .get(&parent)
            .map(|element| element.visible.clone())
    }

    /// Re-run the whole cascade for `node` and commit the result.
    fn restyle(&mut self, node: NodeKey, snap: Snap) -> ChangeFlags {
        let parent_style = self.parent_style(node);
        let context = Arc::clone(&self.context);
        let Some(element) = self.elements.get_mut(&node) else {
            return ChangeFlags::empty();
        };

        let key = cascade::baseline_key(parent_style.as_ref(), &element.matched);
        if key != element.baseline_key {
            let matched = &element.matched;
            let baseline = self.baselines.acquire(key, || {
                cascade::resolve_baseline(&context, parent_style.as_ref(), matched)
            });
            self.baselines.release(element.baseline_key);
            element.baseline_key = key;
            element.baseline = baseline;
        }
        let target = cascade::apply_inline(
            &context,
            parent_style.as_ref(),
            &element.baseline,
            element.inline_rule.as_deref(),
            &element.inline,
        );
        let commit = animation::commit(
            &context,
            &mut element.transitions,
            Some(Previous {
                target: &element.target,
                visible: &element.visible,
            }),
            &target,
            self.now_ms,
            snap,
        );
        element.target = target;
        element.visible = commit.visible;
        let changes = commit.changes;
        self.record(node, changes);
        changes
    }

    /// Restyle `node`, then every descendant reached through inherited changes.
    fn restyle_subtree(&mut self, node: NodeKey, snap: Snap) {
        let mut pending = vec![(node, snap)];
        while let Some((key, key_snap)) = pending.pop() {
            let changes = self.restyle(key, key_snap);
            if !changes.contains(ChangeFlags::INHERITED) {
                continue;
            }
            let child_snap = if key_snap == Snap::Inherited {
                Snap::Inherited
            } else {
                Snap::Nothing
            };
            pending.extend(self.children(key).iter().map(|child| (*child, child_snap)));
        }
    }

    fn restyle_children(&mut self, node: NodeKey, snap: Snap) {
        let children = self.children(node).to_vec();
        for child in children {
            self.restyle_subtree(child, snap);
        }
    }

    fn record(&mut self, node: NodeKey, changes: ChangeFlags) {
        if let Some(element) = self.elements.get_mut(&node) {
            self.events.extend(
                element
                    .transitions
                    .take_events()
                    .into_iter()
                    .map(|event| (node, event)),
            );
        }
        let changes = changes.with_implied();
        if changes.is_empty() {
            return;
        }
        *self.changes.entry(node).or_default() |= changes;
        if changes.contains(ChangeFlags::LAYOUT) {
            self.layout_dirty.insert(node);
        }
    }
}

#[cfg(test)]
mod tests {
    use style_values::{Length, Rgba};

    use super::*;
    use crate::types::{RuleId, Specificity};

    fn matched(engine: &StyleEngine, id: u64, text: &str) -> MatchedRule {
        MatchedRule::new(
            Arc::new(StyleRule::parse(engine.context().registry(), RuleId(id), text)),
            Specificity::default(),
            0,
        )
    }

    #[test]
    fn attach_rejects_unknown_parents_and_duplicates() {
        let mut engine = StyleEngine::default();
        assert!(engine.attach(NodeKey(2), Some(NodeKey(1))).is_err());
        assert!(engine.attach(NodeKey(1), None).is_ok());
        assert!(engine.attach(NodeKey(1), None).is_err());
        assert_eq!(engine.element_count(), 1);
    }

    #[test]
    fn first_attach_reports_every_flag() {
        let mut engine = StyleEngine::default();
        assert!(engine.attach(NodeKey(1), None).is_ok());
        let changes = engine.take_changes();
        assert_eq!(changes.len(), 1);
        assert!(changes[0].1.contains(ChangeFlags::LAYOUT));
        assert_eq!(engine.take_layout_dirty(), vec![NodeKey(1)]);
    }

    #[test]
    fn inherited_changes_reach_descendants() {
        let mut engine = StyleEngine::default();
        assert!(engine.attach(NodeKey(1), None).is_ok());
        assert!(engine.attach(NodeKey(2), Some(NodeKey(1))).is_ok());
        assert!(engine.attach(NodeKey(3), Some(NodeKey(2))).is_ok());
        let rule = matched(&engine, 1, "color: white; width: 5px");
        assert!(engine.set_matched_rules(NodeKey(1), vec![rule]).is_ok());
        assert_eq!(
            engine.computed_style(NodeKey(3)).map(|style| style.inherited().color),
            Some(Rgba::WHITE)
        );
        assert_eq!(
            engine.computed_style(NodeKey(3)).map(|style| style.layout().width),
            Some(Length::auto())
        );
    }

    #[test]
    fn detach_removes_the_subtree() {
        let mut engine = StyleEngine::default();
        assert!(engine.attach(NodeKey(1), None).is_ok());
        assert!(engine.attach(NodeKey(2), Some(NodeKey(1))).is_ok());
        assert!(engine.attach(NodeKey(3), Some(NodeKey(2))).is_ok());
        assert!(engine.detach(NodeKey(2)).is_ok());
        assert_eq!(engine.element_count(), 1);
        assert!(engine.children(NodeKey(1)).is_empty());
        assert!(engine.detach(NodeKey(3)).is_err());
    }
}
