//! Keyword-valued properties stored as integers in style value records.

/// A keyword enumeration that round-trips through the integer payload of a record.
pub trait EnumValue: Copy + Eq + Sized + 'static {
    const VARIANTS: &'static [Self];

    fn to_int(self) -> i32;

    fn name(self) -> &'static str;

    fn from_int(value: i32) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.to_int() == value)
    }

    fn from_name(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.name().eq_ignore_ascii_case(trimmed))
    }
}

macro_rules! style_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl EnumValue for $name {
            const VARIANTS: &'static [Self] = &[$(Self::$variant),+];

            fn to_int(self) -> i32 {
                self as i32
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        /// The first listed variant is the initial value.
        impl Default for $name {
            fn default() -> Self {
                <Self as EnumValue>::VARIANTS[0]
            }
        }
    };
}

style_enum! {
    /// `align-items`, `align-self`, `align-content`.
    Align {
        Auto = "auto",
        FlexStart = "flex-start",
        Center = "center",
        FlexEnd = "flex-end",
        Stretch = "stretch",
    }
}

style_enum! {
    /// `justify-content`.
    Justify {
        FlexStart = "flex-start",
        Center = "center",
        FlexEnd = "flex-end",
        SpaceBetween = "space-between",
        SpaceAround = "space-around",
        SpaceEvenly = "space-evenly",
    }
}

style_enum! {
    FlexDirection {
        Column = "column",
        ColumnReverse = "column-reverse",
        Row = "row",
        RowReverse = "row-reverse",
    }
}

style_enum! {
    /// `flex-wrap`.
    Wrap {
        NoWrap = "nowrap",
        Wrap = "wrap",
        WrapReverse = "wrap-reverse",
    }
}

style_enum! {
    Display {
        Flex = "flex",
        None = "none",
    }
}

style_enum! {
    /// `position`.
    Position {
        Relative = "relative",
        Absolute = "absolute",
    }
}

style_enum! {
    Overflow {
        Visible = "visible",
        Hidden = "hidden",
    }
}

style_enum! {
    Visibility {
        Visible = "visible",
        Hidden = "hidden",
    }
}

style_enum! {
    WhiteSpace {
        Normal = "normal",
        NoWrap = "nowrap",
    }
}

style_enum! {
    TextAlign {
        Left = "left",
        Center = "center",
        Right = "right",
    }
}

style_enum! {
    FontStyle {
        Normal = "normal",
        Italic = "italic",
        Bold = "bold",
        BoldAndItalic = "bold-and-italic",
    }
}

style_enum! {
    /// Named easing curves accepted by `transition-timing-function`.
    EasingMode {
        Ease = "ease",
        EaseIn = "ease-in",
        EaseOut = "ease-out",
        EaseInOut = "ease-in-out",
        Linear = "linear",
        EaseInSine = "ease-in-sine",
        EaseOutSine = "ease-out-sine",
        EaseInOutSine = "ease-in-out-sine",
        EaseInCubic = "ease-in-cubic",
        EaseOutCubic = "ease-out-cubic",
        EaseInOutCubic = "ease-in-out-cubic",
        EaseInCirc = "ease-in-circ",
        EaseOutCirc = "ease-out-circ",
        EaseInOutCirc = "ease-in-out-circ",
        EaseInElastic = "ease-in-elastic",
        EaseOutElastic = "ease-out-elastic",
        EaseInOutElastic = "ease-in-out-elastic",
        EaseInBack = "ease-in-back",
        EaseOutBack = "ease-out-back",
        EaseInOutBack = "ease-in-out-back",
        EaseInBounce = "ease-in-bounce",
        EaseOutBounce = "ease-out-bounce",
        EaseInOutBounce = "ease-in-out-bounce",
    }
}

/// A transition timing function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EasingFunction {
    Mode(EasingMode),
    /// `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    },
}

impl Default for EasingFunction {
    fn default() -> Self {
        Self::Mode(EasingMode::Ease)
    }
}
