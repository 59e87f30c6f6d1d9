//! Running transitions of one element.
//!
//! Each property has at most one running transition. Starting another one for the same
//! property supersedes the first; there is no queueing.

use smallvec::SmallVec;
use style_values::{EasingFunction, PropertyId, ValueData};
use tracing::debug;

use crate::easing::ease;
use crate::interpolate::Interpolate as _;
use crate::transition_spec::TransitionSpec;

/// Lifecycle notifications, in the order they happen for one transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionEventKind {
    /// The transition was created (its delay may still be pending).
    Run,
    /// The delay elapsed and values started to change.
    Start,
    /// The target value was reached.
    End,
    /// The transition was removed before reaching its target.
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionEvent {
    pub property: PropertyId,
    pub kind: TransitionEventKind,
}

/// An interpolation from `from` to `to` in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunningTransition {
    pub property: PropertyId,
    pub from: ValueData,
    pub to: ValueData,
    pub start_ms: f64,
    pub delay_ms: f32,
    pub duration_ms: f32,
    pub easing: EasingFunction,
    started: bool,
}

impl RunningTransition {
    pub fn new(spec: &TransitionSpec, from: ValueData, to: ValueData, now_ms: f64) -> Self {
        Self {
            property: spec.property,
            from,
            to,
            start_ms: now_ms,
            delay_ms: spec.delay_ms,
            duration_ms: spec.duration_ms.max(0.0),
            easing: spec.easing,
            started: false,
        }
    }

    /// Time spent past the delay, or `None` while the delay is pending.
    fn active_ms(&self, now_ms: f64) -> Option<f64> {
        let active = now_ms - self.start_ms - f64::from(self.delay_ms);
        (active >= 0.0).then_some(active)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.active_ms(now_ms)
            .is_some_and(|active| active >= f64::from(self.duration_ms))
    }

    /// Eased progress in `[0, 1]` (easings such as `back` may overshoot inside the range).
    pub fn progress(&self, now_ms: f64) -> f32 {
        let Some(active) = self.active_ms(now_ms) else {
            return 0.0;
        };
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let linear = (active / f64::from(self.duration_ms)).clamp(0.0, 1.0) as f32;
        ease(self.easing, linear)
    }

    /// The value to display at `now_ms`. The delay phase shows `from`; the end shows `to`
    /// exactly.
    pub fn sample(&self, now_ms: f64) -> ValueData {
        if self.is_finished(now_ms) {
            return self.to;
        }
        let progress = self.progress(now_ms);
        self.from.interpolate(&self.to, progress).unwrap_or(self.to)
    }
}

/// Output of [`TransitionTable::advance`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Advance {
    /// Current values of every transition, finished ones included.
    pub samples: SmallVec<[(PropertyId, ValueData); 4]>,
    /// Properties whose transitions completed on this step.
    pub finished: SmallVec<[PropertyId; 4]>,
}

/// The running transitions of one element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionTable {
    running: SmallVec<[RunningTransition; 2]>,
    events: Vec<TransitionEvent>,
}

impl TransitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `transition`, superseding any transition already running for its property.
    /// Returns the superseded transition.
    pub fn start(&mut self, transition: RunningTransition) -> Option<RunningTransition> {
        let property = transition.property;
        let previous = self.take(property);
        if previous.is_some() {
            self.push_event(property, TransitionEventKind::Cancel);
        }
        debug!(
            "transition {:?} started: {:?} -> {:?} over {}ms",
            property, transition.from, transition.to, transition.duration_ms
        );
        self.running.push(transition);
        self.push_event(property, TransitionEventKind::Run);
        previous
    }

    fn take(&mut self, property: PropertyId) -> Option<RunningTransition> {
        let index = self
            .running
            .iter()
            .position(|transition| transition.property == property)?;
        Some(self.running.remove(index))
    }

    fn push_event(&mut self, property: PropertyId, kind: TransitionEventKind) {
        self.events.push(TransitionEvent { property, kind });
    }

    /// Cancel the transition of `property`. Returns `true` when one was running.
    pub fn cancel(&mut self, property: PropertyId) -> bool {
        let cancelled = self.take(property).is_some();
        if cancelled {
            self.push_event(property, TransitionEventKind::Cancel);
        }
        cancelled
    }

    /// Cancel every running transition. Returns how many were cancelled.
    pub fn cancel_all(&mut self) -> usize {
        let cancelled: SmallVec<[PropertyId; 4]> = self
            .running
            .drain(..)
            .map(|transition| transition.property)
            .collect();
        for property in &cancelled {
            self.push_event(*property, TransitionEventKind::Cancel);
        }
        cancelled.len()
    }

    pub fn get(&self, property: PropertyId) -> Option<&RunningTransition> {
        self.running
            .iter()
            .find(|transition| transition.property == property)
    }

    pub fn is_running(&self, property: PropertyId) -> bool {
        self.get(property).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RunningTransition> {
        self.running.iter()
    }

    /// Sample every transition at `now_ms` and drop the finished ones.
    pub fn advance(&mut self, now_ms: f64) -> Advance {
        let mut advance = Advance::default();
        let mut fresh_starts = SmallVec::<[PropertyId; 4]>::new();
        for transition in &mut self.running {
            if !transition.started && transition.active_ms(now_ms).is_some() {
                transition.started = true;
                fresh_starts.push(transition.property);
            }
            let value = transition.sample(now_ms);
            debug!(
                "transition {:?} at {:.3}: {:?}",
                transition.property,
                transition.progress(now_ms),
                value
            );
            advance.samples.push((transition.property, value));
            if transition.is_finished(now_ms) {
                advance.finished.push(transition.property);
            }
        }
        for property in fresh_starts {
            self.push_event(property, TransitionEventKind::Start);
        }
        for property in &advance.finished {
            self.take(*property);
            self.push_event(*property, TransitionEventKind::End);
        }
        advance
    }

    /// Drain lifecycle events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<TransitionEvent> {
        core::mem::take(&mut self.events)
    }
}
