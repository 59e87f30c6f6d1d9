//! Push resolved layout properties into a solver node.

use style_values::{
    Align, Display, FlexDirection, Justify, Length, LengthUnit, Overflow, Position, Wrap,
};

use crate::layout_model::{
    BorderWidths, LayoutAlign, LayoutDirection, LayoutDisplay, LayoutEdges, LayoutJustify,
    LayoutNode, LayoutOverflow, LayoutValue, LayoutWrap, PositionType,
};
use crate::style_model::{ComputedStyle, Edges};

pub const fn layout_value(length: Length) -> LayoutValue {
    match length.unit {
        LengthUnit::Pixel => LayoutValue::Point(length.value),
        LengthUnit::Percent => LayoutValue::Percent(length.value),
        LengthUnit::Auto => LayoutValue::Auto,
        LengthUnit::None => LayoutValue::Undefined,
    }
}

const fn layout_edges(edges: Edges<Length>) -> LayoutEdges {
    LayoutEdges {
        top: layout_value(edges.top),
        right: layout_value(edges.right),
        bottom: layout_value(edges.bottom),
        left: layout_value(edges.left),
    }
}

/// `auto` min sizes mean "no constraint" to the solver.
const fn min_constraint(length: Length) -> LayoutValue {
    match layout_value(length) {
        LayoutValue::Auto => LayoutValue::Undefined,
        value => value,
    }
}

const fn align(value: Align) -> LayoutAlign {
    match value {
        Align::Auto => LayoutAlign::Auto,
        Align::FlexStart => LayoutAlign::FlexStart,
        Align::Center => LayoutAlign::Center,
        Align::FlexEnd => LayoutAlign::FlexEnd,
        Align::Stretch => LayoutAlign::Stretch,
    }
}

const fn justify(value: Justify) -> LayoutJustify {
    match value {
        Justify::FlexStart => LayoutJustify::FlexStart,
        Justify::Center => LayoutJustify::Center,
        Justify::FlexEnd => LayoutJustify::FlexEnd,
        Justify::SpaceBetween => LayoutJustify::SpaceBetween,
        Justify::SpaceAround => LayoutJustify::SpaceAround,
        Justify::SpaceEvenly => LayoutJustify::SpaceEvenly,
    }
}

const fn direction(value: FlexDirection) -> LayoutDirection {
    match value {
        FlexDirection::Column => LayoutDirection::Column,
        FlexDirection::ColumnReverse => LayoutDirection::ColumnReverse,
        FlexDirection::Row => LayoutDirection::Row,
        FlexDirection::RowReverse => LayoutDirection::RowReverse,
    }
}

const fn wrap(value: Wrap) -> LayoutWrap {
    match value {
        Wrap::NoWrap => LayoutWrap::NoWrap,
        Wrap::Wrap => LayoutWrap::Wrap,
        Wrap::WrapReverse => LayoutWrap::WrapReverse,
    }
}

/// Overwrite every layout input of `node` from `style`.
pub fn sync_layout(style: &ComputedStyle, node: &mut LayoutNode) {
    let layout = style.layout();
    node.flex_grow = layout.flex_grow;
    node.flex_shrink = layout.flex_shrink;
    node.flex_basis = layout_value(layout.flex_basis);
    node.margin = layout_edges(layout.margin);
    node.padding = layout_edges(layout.padding);
    node.border = BorderWidths {
        top: layout.border_width.top,
        right: layout.border_width.right,
        bottom: layout.border_width.bottom,
        left: layout.border_width.left,
    };
    node.position = layout_edges(layout.inset);
    node.width = layout_value(layout.width);
    node.height = layout_value(layout.height);
    node.min_width = min_constraint(layout.min_width);
    node.min_height = min_constraint(layout.min_height);
    node.max_width = layout_value(layout.max_width);
    node.max_height = layout_value(layout.max_height);
    node.flex_direction = direction(layout.flex_direction);
    node.flex_wrap = wrap(layout.flex_wrap);
    node.align_items = align(layout.align_items);
    node.align_self = align(layout.align_self);
    node.align_content = align(layout.align_content);
    node.justify_content = justify(layout.justify_content);
    node.display = match layout.display {
        Display::Flex => LayoutDisplay::Flex,
        Display::None => LayoutDisplay::None,
    };
    node.overflow = match layout.overflow {
        Overflow::Visible => LayoutOverflow::Visible,
        Overflow::Hidden => LayoutOverflow::Hidden,
    };
    node.position_type = match layout.position {
        Position::Relative => PositionType::Relative,
        Position::Absolute => PositionType::Absolute,
    };
}

#[cfg(test)]
mod tests {
    use style_values::{PropertyId, ValueData};

    use super::*;
    use crate::options::StyleOptions;

    #[test]
    fn lengths_map_to_solver_values() {
        assert_eq!(layout_value(Length::px(3.0)), LayoutValue::Point(3.0));
        assert_eq!(layout_value(Length::percent(50.0)), LayoutValue::Percent(50.0));
        assert_eq!(layout_value(Length::auto()), LayoutValue::Auto);
        assert_eq!(layout_value(Length::none()), LayoutValue::Undefined);
    }

    #[test]
    fn sync_overwrites_stale_fields() {
        let mut style = ComputedStyle::initial(&StyleOptions::default());
        style.set_value(PropertyId::Width, ValueData::Length(Length::percent(25.0)));
        style.set_value(PropertyId::BorderLeftWidth, ValueData::Number(2.0));
        let mut node = LayoutNode {
            flex_grow: 9.0,
            height: LayoutValue::Point(40.0),
            ..LayoutNode::default()
        };
        sync_layout(&style, &mut node);
        assert_eq!(node.width, LayoutValue::Percent(25.0));
        assert_eq!(node.height, LayoutValue::Auto);
        assert!(node.flex_grow.abs() < f32::EPSILON);
        assert!((node.flex_shrink - 1.0).abs() < f32::EPSILON);
        assert!((node.border.left - 2.0).abs() < f32::EPSILON);
        assert_eq!(node.min_width, LayoutValue::Undefined);
        assert_eq!(node.align_items, LayoutAlign::Stretch);
        assert_eq!(node.margin.left, LayoutValue::Point(0.0));
    }
}
