//! Transition interception between a newly resolved target style and the style on screen.
//!
//! Every commit compares the previous target with the next one. Animatable properties whose
//! target changed start a transition from the value currently displayed, so a change in the
//! middle of a running transition restarts from where the previous one had got to.

use log::debug;
use style_transitions::{RunningTransition, TransitionSpecs, TransitionTable, can_interpolate};
use style_values::{ChangeFlags, PropertyId};

use crate::context::StyleContext;
use crate::style_model::ComputedStyle;

/// Result of committing a target style.
#[derive(Clone, Debug)]
pub struct Commit {
    /// What is displayed now: the target with running transitions sampled in.
    pub visible: ComputedStyle,
    pub changes: ChangeFlags,
}

/// Properties that must jump to their target even when a transition applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Snap {
    #[default]
    Nothing,
    /// An inline override was removed.
    Property(PropertyId),
    /// Inherited properties whose target changed follow an animating parent frame by frame.
    Inherited,
}

impl Snap {
    /// Whether `id` jumps to its target; `target_changed` tells whether its target moved.
    pub fn applies_to(self, id: PropertyId, target_changed: bool) -> bool {
        match self {
            Self::Nothing => false,
            Self::Property(snapped) => snapped == id,
            Self::Inherited => target_changed && id.is_inherited(),
        }
    }
}

/// The previous state of an element, as seen by [`commit`].
#[derive(Clone, Copy, Debug)]
pub struct Previous<'style> {
    pub target: &'style ComputedStyle,
    pub visible: &'style ComputedStyle,
}

fn specs_of(style: &ComputedStyle) -> TransitionSpecs {
    let transition = style.transition();
    TransitionSpecs::build(
        &transition.properties,
        &transition.durations,
        &transition.delays,
        &transition.easings,
    )
}

/// The target with every running transition sampled at `now_ms`.
pub fn visible_style(target: &ComputedStyle, table: &TransitionTable, now_ms: f64) -> ComputedStyle {
    let mut visible = target.clone();
    for transition in table.iter() {
        visible.set_value(transition.property, transition.sample(now_ms));
    }
    visible
}

/// Commit `next` as the element's target style.
///
/// Without a previous state (the element's first style) or with transitions disabled the
/// target is displayed directly and running transitions are cancelled.
pub fn commit(
    context: &StyleContext,
    table: &mut TransitionTable,
    previous: Option<Previous<'_>>,
    next: &ComputedStyle,
    now_ms: f64,
    snap: Snap,
) -> Commit {
    let registry = context.registry();
    let Some(previous) = previous else {
        table.cancel_all();
        return Commit {
            visible: next.clone(),
            changes: ChangeFlags::all(),
        };
    };
    if !context.options().transitions_enabled {
        table.cancel_all();
        return Commit {
            visible: next.clone(),
            changes: previous.visible.change_flags(next, registry),
        };
    }

    let specs = specs_of(next);
    for id in registry.animatable_ids() {
        let spec = specs.for_property(id).filter(|spec| spec.is_active());
        let to = next.value(id);
        let unchanged = previous.target.value(id) == to;
        if snap.applies_to(id, !unchanged) {
            table.cancel(id);
            continue;
        }
        if unchanged {
            if spec.is_none() {
                table.cancel(id);
            }
            continue;
        }
        match (spec, previous.visible.value(id), to) {
            (Some(spec), Some(from), Some(to)) if from != to && can_interpolate(&from, &to) => {
                debug!("intercepting {} change", id.name());
                table.start(RunningTransition::new(&spec, from, to, now_ms));
            }
            _ => {
                table.cancel(id);
            }
        }
    }

    let visible = visible_style(next, table, now_ms);
    let changes = previous.visible.change_flags(&visible, registry);
    Commit { visible, changes }
}

/// Step running transitions to `now_ms`. Returns the new visible style, or `None` when
/// nothing was running.
pub fn advance(
    context: &StyleContext,
    table: &mut TransitionTable,
    target: &ComputedStyle,
    visible: &ComputedStyle,
    now_ms: f64,
) -> Option<Commit> {
    if table.is_empty() {
        return None;
    }
    let step = table.advance(now_ms);
    let mut next = target.clone();
    for (id, value) in step.samples {
        next.set_value(id, value);
    }
    let changes = visible.change_flags(&next, context.registry());
    Some(Commit {
        visible: next,
        changes,
    })
}

#[cfg(test)]
mod tests {
    use style_values::{Length, ManagedData, Rgba, TimeValue, ValueData};

    use super::*;

    fn with_transition(context: &StyleContext, duration_ms: f32) -> ComputedStyle {
        let mut style = context.initial_style().clone();
        style.set_managed(
            PropertyId::TransitionDuration,
            &ManagedData::Times(vec![TimeValue::ms(duration_ms)]),
        );
        style
    }

    fn commit_from(
        context: &StyleContext,
        table: &mut TransitionTable,
        from: &ComputedStyle,
        next: &ComputedStyle,
        now_ms: f64,
    ) -> Commit {
        commit(
            context,
            table,
            Some(Previous {
                target: from,
                visible: from,
            }),
            next,
            now_ms,
            Snap::Nothing,
        )
    }

    #[test]
    fn first_commit_never_transitions() {
        let context = StyleContext::new();
        let mut table = TransitionTable::new();
        let style = with_transition(&context, 100.0);
        let result = commit(&context, &mut table, None, &style, 0.0, Snap::Nothing);
        assert!(table.is_empty());
        assert_eq!(result.visible, style);
        assert_eq!(result.changes, ChangeFlags::all());
    }

    #[test]
    fn changed_targets_start_from_the_visible_value() {
        let context = StyleContext::new();
        let mut table = TransitionTable::new();
        let from = with_transition(&context, 100.0);
        let mut next = from.clone();
        next.set_value(PropertyId::Opacity, ValueData::Number(0.0));

        let result = commit_from(&context, &mut table, &from, &next, 0.0);
        assert!(table.is_running(PropertyId::Opacity));
        assert!((result.visible.visual().opacity - 1.0).abs() < f32::EPSILON);

        let done = advance(&context, &mut table, &next, &result.visible, 100.0);
        assert_eq!(done.map(|step| step.visible.visual().opacity), Some(0.0));
        assert!(table.is_empty());
    }

    #[test]
    fn zero_duration_and_snap_apply_directly() {
        let context = StyleContext::new();
        let mut table = TransitionTable::new();
        let instant = context.initial_style().clone();
        let mut next = instant.clone();
        next.set_value(PropertyId::Width, ValueData::Length(Length::px(5.0)));
        let result = commit_from(&context, &mut table, &instant, &next, 0.0);
        assert!(table.is_empty());
        assert_eq!(result.visible.layout().width, Length::px(5.0));
        assert!(result.changes.contains(ChangeFlags::LAYOUT));

        let animated = with_transition(&context, 100.0);
        let mut snapped = animated.clone();
        snapped.set_value(PropertyId::Opacity, ValueData::Number(0.5));
        let result = commit(
            &context,
            &mut table,
            Some(Previous {
                target: &animated,
                visible: &animated,
            }),
            &snapped,
            0.0,
            Snap::Property(PropertyId::Opacity),
        );
        assert!(table.is_empty());
        assert!((result.visible.visual().opacity - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn inherited_snap_keeps_transitions_with_unchanged_targets() {
        let context = StyleContext::new();
        let mut table = TransitionTable::new();
        let from = with_transition(&context, 100.0);
        let mut colored = from.clone();
        colored.set_value(PropertyId::Color, ValueData::Color(Rgba::WHITE));
        let started = commit_from(&context, &mut table, &from, &colored, 0.0);
        assert!(table.is_running(PropertyId::Color));

        let mut resized = colored.clone();
        resized.set_value(PropertyId::FontSize, ValueData::Length(Length::px(20.0)));
        let result = commit(
            &context,
            &mut table,
            Some(Previous {
                target: &colored,
                visible: &started.visible,
            }),
            &resized,
            50.0,
            Snap::Inherited,
        );
        assert!(table.is_running(PropertyId::Color));
        assert!(!table.is_running(PropertyId::FontSize));
        assert!((result.visible.inherited().font_size - 20.0).abs() < f32::EPSILON);
        assert_ne!(result.visible.inherited().color, Rgba::BLACK);
        assert_ne!(result.visible.inherited().color, Rgba::WHITE);
    }
}
