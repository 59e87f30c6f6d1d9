//! A complete color transition driven through the table, as a per-frame tick would.

use style_transitions::{RunningTransition, TransitionSpecs, TransitionTable};
use style_values::{
    EasingFunction, EasingMode, PropertyId, Rgba, TimeValue, TransitionTarget, ValueData,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_transition_runs_to_exact_target() {
        let _ = env_logger::builder().is_test(true).try_init();
        let specs = TransitionSpecs::build(
            &[TransitionTarget::Property(PropertyId::BackgroundColor)],
            &[TimeValue::ms(200.0)],
            &[TimeValue::ms(100.0)],
            &[EasingFunction::Mode(EasingMode::EaseOutCubic)],
        );
        let Some(spec) = specs.for_property(PropertyId::BackgroundColor) else {
            panic!("background-color should transition");
        };
        let from = ValueData::Color(Rgba::BLACK);
        let to = ValueData::Color(Rgba::new(200, 100, 0, 255));
        let mut table = TransitionTable::new();
        table.start(RunningTransition::new(&spec, from, to, 0.0));

        let frames: Vec<_> = [50.0, 150.0, 250.0, 300.0]
            .into_iter()
            .map(|now| table.advance(now))
            .collect();

        assert_eq!(frames[0].samples[0].1, from);
        let ValueData::Color(mid) = frames[1].samples[0].1 else {
            panic!("expected a color sample");
        };
        assert!(mid.red > 100 && mid.red < 200, "ease-out runs ahead of linear: {mid:?}");
        assert_eq!(frames[3].samples[0].1, to);
        assert_eq!(frames[3].finished.as_slice(), &[PropertyId::BackgroundColor]);
        assert!(table.is_empty());
    }
}
