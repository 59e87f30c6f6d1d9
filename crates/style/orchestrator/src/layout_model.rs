//! Layout-solver node fed by the style engine.
//!
//! The solver owns these nodes; the style engine only pushes values into them through
//! [`crate::layout::sync_layout`].

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum LayoutValue {
    /// Let the solver decide (unset min/max constraints).
    #[default]
    Undefined,
    Auto,
    Point(f32),
    Percent(f32),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayoutEdges {
    pub top: LayoutValue,
    pub right: LayoutValue,
    pub bottom: LayoutValue,
    pub left: LayoutValue,
}

/// Border widths in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BorderWidths {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutAlign {
    #[default]
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutJustify {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutDirection {
    #[default]
    Column,
    ColumnReverse,
    Row,
    RowReverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutDisplay {
    #[default]
    Flex,
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutOverflow {
    #[default]
    Visible,
    Hidden,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PositionType {
    #[default]
    Relative,
    Absolute,
}

/// Layout inputs of one element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutNode {
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: LayoutValue,
    pub margin: LayoutEdges,
    pub padding: LayoutEdges,
    pub border: BorderWidths,
    /// Position offsets (`top` / `right` / `bottom` / `left`).
    pub position: LayoutEdges,
    pub width: LayoutValue,
    pub height: LayoutValue,
    pub min_width: LayoutValue,
    pub min_height: LayoutValue,
    pub max_width: LayoutValue,
    pub max_height: LayoutValue,
    pub flex_direction: LayoutDirection,
    pub flex_wrap: LayoutWrap,
    pub align_items: LayoutAlign,
    pub align_self: LayoutAlign,
    pub align_content: LayoutAlign,
    pub justify_content: LayoutJustify,
    pub display: LayoutDisplay,
    pub overflow: LayoutOverflow,
    pub position_type: PositionType,
}
