//! Per-property transition parameters derived from an element's transition lists.

use smallvec::SmallVec;
use style_values::{EasingFunction, PropertyId, TimeValue, TransitionTarget};

/// Declared transition for one property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpec {
    pub property: PropertyId,
    pub duration_ms: f32,
    pub delay_ms: f32,
    pub easing: EasingFunction,
}

impl TransitionSpec {
    /// A transition only runs when its combined duration is positive.
    pub fn is_active(&self) -> bool {
        self.duration_ms.max(0.0) + self.delay_ms > 0.0
    }
}

/// Entry `index` of a list that repeats to cover `transition-property`.
fn cyclic<T: Copy>(list: &[T], index: usize) -> Option<T> {
    if list.is_empty() {
        return None;
    }
    list.get(index % list.len()).copied()
}

/// Transition specs for an element, rebuilt whenever its transition lists change.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionSpecs {
    entries: SmallVec<[(TransitionTarget, TransitionSpec); 4]>,
}

impl TransitionSpecs {
    /// Combine the four transition lists. Durations, delays and easings repeat cyclically to
    /// the length of `targets`.
    pub fn build(
        targets: &[TransitionTarget],
        durations: &[TimeValue],
        delays: &[TimeValue],
        easings: &[EasingFunction],
    ) -> Self {
        let entries = targets
            .iter()
            .enumerate()
            .map(|(index, target)| {
                let property = match *target {
                    TransitionTarget::Property(id) => id,
                    TransitionTarget::All | TransitionTarget::None => PropertyId::Unknown,
                };
                let spec = TransitionSpec {
                    property,
                    duration_ms: cyclic(durations, index).map_or(0.0, |time| time.milliseconds),
                    delay_ms: cyclic(delays, index).map_or(0.0, |time| time.milliseconds),
                    easing: cyclic(easings, index).unwrap_or_default(),
                };
                (*target, spec)
            })
            .collect();
        Self { entries }
    }

    /// The spec that applies to `id`: the last matching entry wins.
    pub fn for_property(&self, id: PropertyId) -> Option<TransitionSpec> {
        self.entries
            .iter()
            .rev()
            .find(|(target, _)| target.matches(id))
            .map(|(_, spec)| TransitionSpec {
                property: id,
                ..*spec
            })
    }

    /// Whether any property would transition.
    pub fn has_active(&self) -> bool {
        self.entries
            .iter()
            .any(|(target, spec)| *target != TransitionTarget::None && spec.is_active())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
