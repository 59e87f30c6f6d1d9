//! Property transitions: easing curves, value interpolation, per-property transition specs
//! and the table of running transitions for one element.

#![forbid(unsafe_code)]

pub mod easing;
pub mod interpolate;
pub mod table;
pub mod transition_spec;

pub use easing::{Bezier, ease};
pub use interpolate::{Interpolate, can_interpolate};
pub use table::{
    Advance, RunningTransition, TransitionEvent, TransitionEventKind, TransitionTable,
};
pub use transition_spec::{TransitionSpec, TransitionSpecs};
