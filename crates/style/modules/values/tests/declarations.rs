//! Parsing declaration blocks into store records.

use style_values::{
    Align, Display, EnumValue as _, Length, ManagedData, PropertyId, PropertyRegistry, Rgba,
    StyleDeclaration, StyleKeyword, StyleValueCollection, TimeValue, TransitionTarget, ValueData,
    parse_declaration, parse_declarations,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn store_from(text: &str) -> StyleValueCollection {
        let registry = PropertyRegistry::new();
        let mut store = StyleValueCollection::new();
        for declaration in parse_declarations(&registry, text) {
            store.set_declaration(declaration);
        }
        store
    }

    #[test]
    fn block_with_unknown_and_invalid_items_keeps_the_rest() {
        let _ = env_logger::builder().is_test(true).try_init();
        let store = store_from(
            "width: 120px; -unity-glow: 3; height: banana; color: #102030; ; opacity: 0.5",
        );
        assert_eq!(store.len(), 3);
        assert_eq!(
            store.length(PropertyId::Width).into_option(),
            Some(Length::px(120.0))
        );
        assert_eq!(
            store.color(PropertyId::Color).into_option(),
            Some(Rgba::new(16, 32, 48, 255))
        );
        assert!(store.length(PropertyId::Height).is_null());
    }

    #[test]
    fn later_duplicate_wins() {
        let store = store_from("margin-left: 4px; margin-left: 9px");
        assert_eq!(
            store.length(PropertyId::MarginLeft).into_option(),
            Some(Length::px(9.0))
        );
    }

    #[test]
    fn margin_shorthand_expands_to_four_edges() {
        let store = store_from("margin: 1px 2px 3px 4px");
        assert_eq!(store.len(), 4);
        assert_eq!(
            store.length(PropertyId::MarginTop).into_option(),
            Some(Length::px(1.0))
        );
        assert_eq!(
            store.length(PropertyId::MarginLeft).into_option(),
            Some(Length::px(4.0))
        );
    }

    #[test]
    fn global_keywords_survive_as_keywords() {
        let store = store_from("width: initial; color: unset; padding: initial");
        assert_eq!(store.keyword(PropertyId::Width), StyleKeyword::Initial);
        assert_eq!(store.keyword(PropertyId::Color), StyleKeyword::Unset);
        assert_eq!(store.keyword(PropertyId::PaddingBottom), StyleKeyword::Initial);
    }

    #[test]
    fn enumerations_parse_by_name() {
        let store = store_from("display: none; align-self: auto; flex-direction: row");
        assert_eq!(
            store.enum_value::<Display>(PropertyId::Display).into_option(),
            Some(Display::None)
        );
        assert_eq!(
            store.int(PropertyId::AlignSelf).into_option(),
            Some(Align::Auto.to_int())
        );
    }

    #[test]
    fn flex_shorthand_forms() {
        let registry = PropertyRegistry::new();
        let single = parse_declaration(&registry, "flex", "2");
        let grow = single.ok().and_then(|longhands| {
            longhands.iter().find_map(|declaration| match declaration {
                StyleDeclaration::Value(value) if value.id == PropertyId::FlexBasis => {
                    Some(value.data)
                }
                _ => None,
            })
        });
        assert_eq!(grow, Some(ValueData::Length(Length::percent(0.0))));

        let store = store_from("flex: none");
        assert_eq!(store.float(PropertyId::FlexGrow).into_option(), Some(0.0));
        assert_eq!(
            store.length(PropertyId::FlexBasis).into_option(),
            Some(Length::auto())
        );
    }

    #[test]
    fn transition_shorthand_fills_all_lists() {
        let store = store_from("transition: opacity 300ms ease-in 50ms, width 1s");
        let targets = store
            .try_get_managed(PropertyId::TransitionProperty)
            .map(|record| record.data.clone());
        assert_eq!(
            targets,
            Some(ManagedData::TransitionTargets(vec![
                TransitionTarget::Property(PropertyId::Opacity),
                TransitionTarget::Property(PropertyId::Width),
            ]))
        );
        assert_eq!(
            store.times(PropertyId::TransitionDelay).into_option(),
            Some(vec![TimeValue::ms(50.0), TimeValue::ZERO])
        );
        assert_eq!(
            store.times(PropertyId::TransitionDuration).into_option(),
            Some(vec![TimeValue::ms(300.0), TimeValue::ms(1000.0)])
        );
    }

    #[test]
    fn unknown_property_is_reported() {
        let registry = PropertyRegistry::new();
        assert_eq!(
            parse_declaration(&registry, "-vendor-thing", "1"),
            Err(style_values::ParseError::UnknownProperty)
        );
    }
}
