//! Layout/style resolver.
//!
//! Pure, total mappings from abstract widget params to box-model values.
//! Nothing here knows about the tree; each function looks at one param.
//! Absent or malformed input always resolves to a documented default.

use crate::model::*;
use crate::tokens;

// ─── Edge insets ─────────────────────────────────────────────────────────

/// Concrete per-side insets in device-independent pixels. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub const ZERO: Insets = Insets::uniform(0.0);

    pub const fn uniform(v: f32) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// Shorthand expansion over `[top, right, bottom, left]`:
    /// one value for all sides, two for vertical/horizontal, three for
    /// top/horizontal/bottom, four explicit. Extra values are ignored.
    pub fn from_shorthand(values: &[f32]) -> Self {
        let v = |i: usize| values.get(i).copied().unwrap_or(0.0).max(0.0);
        match values.len() {
            0 => Insets::ZERO,
            1 => Insets::uniform(v(0)),
            2 => Insets {
                top: v(0),
                right: v(1),
                bottom: v(0),
                left: v(1),
            },
            3 => Insets {
                top: v(0),
                right: v(1),
                bottom: v(2),
                left: v(1),
            },
            _ => Insets {
                top: v(0),
                right: v(1),
                bottom: v(2),
                left: v(3),
            },
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Insets::ZERO
    }
}

/// Resolve a padding or margin param. Absent input is zero on all sides.
pub fn resolve_edge_insets(value: Option<&EdgeInsets>) -> Insets {
    match value {
        None => Insets::ZERO,
        Some(EdgeInsets::Uniform(v)) if v.is_finite() => Insets::uniform(v.max(0.0)),
        Some(EdgeInsets::Uniform(_)) => Insets::ZERO,
        Some(EdgeInsets::Each(values)) => Insets::from_shorthand(values),
        Some(EdgeInsets::Text(s)) => Insets::from_shorthand(&tokens::inset_tokens(s)),
    }
}

// ─── Dimensions ──────────────────────────────────────────────────────────

/// A resolved CSS-style length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f32),
    Percent(f32),
    /// Size to content.
    Auto,
}

pub fn resolve_dimension(value: Option<Dimension>) -> Length {
    match value {
        Some(Dimension::Px(px)) if px.is_finite() => Length::Px(px),
        Some(Dimension::Fill) => Length::Percent(100.0),
        _ => Length::Auto,
    }
}

// ─── Flex alignment ──────────────────────────────────────────────────────

/// Flex `justify-content` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    pub fn as_css(&self) -> &'static str {
        match self {
            JustifyContent::FlexStart => "flex-start",
            JustifyContent::Center => "center",
            JustifyContent::FlexEnd => "flex-end",
            JustifyContent::SpaceBetween => "space-between",
            JustifyContent::SpaceAround => "space-around",
            JustifyContent::SpaceEvenly => "space-evenly",
        }
    }
}

/// Flex `align-items` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlignItems {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

impl AlignItems {
    pub fn as_css(&self) -> &'static str {
        match self {
            AlignItems::FlexStart => "flex-start",
            AlignItems::Center => "center",
            AlignItems::FlexEnd => "flex-end",
            AlignItems::Stretch => "stretch",
        }
    }
}

pub fn resolve_main_axis_alignment(value: Option<MainAxisAlignment>) -> JustifyContent {
    match value {
        None | Some(MainAxisAlignment::Start) => JustifyContent::FlexStart,
        Some(MainAxisAlignment::Center) => JustifyContent::Center,
        Some(MainAxisAlignment::End) => JustifyContent::FlexEnd,
        Some(MainAxisAlignment::SpaceBetween) => JustifyContent::SpaceBetween,
        Some(MainAxisAlignment::SpaceAround) => JustifyContent::SpaceAround,
        Some(MainAxisAlignment::SpaceEvenly) => JustifyContent::SpaceEvenly,
    }
}

pub fn resolve_cross_axis_alignment(value: Option<CrossAxisAlignment>) -> AlignItems {
    match value {
        None | Some(CrossAxisAlignment::Start) => AlignItems::FlexStart,
        Some(CrossAxisAlignment::Center) => AlignItems::Center,
        Some(CrossAxisAlignment::End) => AlignItems::FlexEnd,
        Some(CrossAxisAlignment::Stretch) => AlignItems::Stretch,
    }
}

/// Container/Stack alignment over a row flex box: horizontal position maps
/// to `justify-content`, vertical to `align-items`. `None` when absent, in
/// which case the box stays block-level.
pub fn resolve_alignment(value: Option<Alignment>) -> Option<(JustifyContent, AlignItems)> {
    use AlignItems as A;
    use JustifyContent as J;
    let pair = match value? {
        Alignment::TopLeft => (J::FlexStart, A::FlexStart),
        Alignment::TopCenter => (J::Center, A::FlexStart),
        Alignment::TopRight => (J::FlexEnd, A::FlexStart),
        Alignment::CenterLeft => (J::FlexStart, A::Center),
        Alignment::Center => (J::Center, A::Center),
        Alignment::CenterRight => (J::FlexEnd, A::Center),
        Alignment::BottomLeft => (J::FlexStart, A::FlexEnd),
        Alignment::BottomCenter => (J::Center, A::FlexEnd),
        Alignment::BottomRight => (J::FlexEnd, A::FlexEnd),
    };
    Some(pair)
}

// ─── Images and text ─────────────────────────────────────────────────────

/// Image `object-fit` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectFit {
    #[default]
    Cover,
    Contain,
    Fill,
    None,
    ScaleDown,
}

impl ObjectFit {
    pub fn as_css(&self) -> &'static str {
        match self {
            ObjectFit::Cover => "cover",
            ObjectFit::Contain => "contain",
            ObjectFit::Fill => "fill",
            ObjectFit::None => "none",
            ObjectFit::ScaleDown => "scale-down",
        }
    }
}

/// `fitWidth` and `fitHeight` have no single-axis equivalent and both
/// become `contain`.
pub fn resolve_box_fit(value: Option<BoxFit>) -> ObjectFit {
    match value {
        None | Some(BoxFit::Cover) => ObjectFit::Cover,
        Some(BoxFit::Contain | BoxFit::FitWidth | BoxFit::FitHeight) => ObjectFit::Contain,
        Some(BoxFit::Fill) => ObjectFit::Fill,
        Some(BoxFit::None) => ObjectFit::None,
        Some(BoxFit::ScaleDown) => ObjectFit::ScaleDown,
    }
}

/// Numeric CSS font weight. Absent is 400.
pub fn resolve_font_weight(value: Option<FontWeight>) -> u16 {
    match value {
        None | Some(FontWeight::Normal) => 400,
        Some(FontWeight::Bold) => 700,
        Some(FontWeight::Numeric(n)) => n,
    }
}

pub fn resolve_text_align(value: Option<TextAlign>) -> &'static str {
    match value {
        None | Some(TextAlign::Start) => "start",
        Some(TextAlign::Left) => "left",
        Some(TextAlign::Center) => "center",
        Some(TextAlign::Right) => "right",
        Some(TextAlign::Justify) => "justify",
        Some(TextAlign::End) => "end",
    }
}

/// Flex weight for Spacer/Expanded; absent or non-positive means 1.
pub fn resolve_flex(factor: &FlexFactor) -> f32 {
    factor.flex.filter(|f| f.is_finite() && *f > 0.0).unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use smallvec::smallvec;

    // ─── Boundaries ──────────────────────────────────────────────────────

    #[test]
    fn absent_values_use_defaults() {
        assert_eq!(resolve_edge_insets(None), Insets::ZERO);
        assert_eq!(resolve_dimension(None), Length::Auto);
        assert_eq!(resolve_box_fit(None), ObjectFit::Cover);
        assert_eq!(resolve_main_axis_alignment(None), JustifyContent::FlexStart);
        assert_eq!(resolve_cross_axis_alignment(None), AlignItems::FlexStart);
        assert_eq!(resolve_alignment(None), None);
        assert_eq!(resolve_font_weight(None), 400);
    }

    #[test]
    fn fill_sentinel_is_full_parent() {
        assert_eq!(resolve_dimension(Some(Dimension::Fill)), Length::Percent(100.0));
        assert_eq!(resolve_dimension(Some(Dimension::Px(120.0))), Length::Px(120.0));
        assert_eq!(resolve_dimension(Some(Dimension::Auto)), Length::Auto);
    }

    // ─── Edge insets ─────────────────────────────────────────────────────

    #[test]
    fn uniform_insets() {
        assert_eq!(
            resolve_edge_insets(Some(&EdgeInsets::Uniform(16.0))),
            Insets::uniform(16.0)
        );
        assert_eq!(resolve_edge_insets(Some(&EdgeInsets::Uniform(-3.0))), Insets::ZERO);
    }

    #[test]
    fn tuple_is_top_right_bottom_left() {
        let insets = resolve_edge_insets(Some(&EdgeInsets::Each(smallvec![1.0, 2.0, 3.0, 4.0])));
        assert_eq!(
            insets,
            Insets {
                top: 1.0,
                right: 2.0,
                bottom: 3.0,
                left: 4.0
            }
        );
    }

    #[test]
    fn shorthand_expansion() {
        let two = resolve_edge_insets(Some(&EdgeInsets::Text("8, 16".into())));
        assert_eq!(
            two,
            Insets {
                top: 8.0,
                right: 16.0,
                bottom: 8.0,
                left: 16.0
            }
        );
        let three = resolve_edge_insets(Some(&EdgeInsets::Each(smallvec![1.0, 2.0, 3.0])));
        assert_eq!(three.left, 2.0);
        assert_eq!(three.bottom, 3.0);
        let extra = resolve_edge_insets(Some(&EdgeInsets::Text("1 2 3 4 5".into())));
        assert_eq!(extra.left, 4.0);
    }

    #[test]
    fn malformed_inset_strings_read_as_zero() {
        assert_eq!(
            resolve_edge_insets(Some(&EdgeInsets::Text("abc".into()))),
            Insets::ZERO
        );
        assert_eq!(
            resolve_edge_insets(Some(&EdgeInsets::Text(String::new()))),
            Insets::ZERO
        );
        assert_eq!(resolve_edge_insets(Some(&EdgeInsets::Each(smallvec![]))), Insets::ZERO);
    }

    // ─── Enums ───────────────────────────────────────────────────────────

    #[test]
    fn box_fit_collapses_single_axis() {
        assert_eq!(resolve_box_fit(Some(BoxFit::FitWidth)), ObjectFit::Contain);
        assert_eq!(resolve_box_fit(Some(BoxFit::FitHeight)), ObjectFit::Contain);
        assert_eq!(resolve_box_fit(Some(BoxFit::ScaleDown)).as_css(), "scale-down");
    }

    #[test]
    fn alignment_pairs() {
        assert_eq!(
            resolve_alignment(Some(Alignment::BottomRight)),
            Some((JustifyContent::FlexEnd, AlignItems::FlexEnd))
        );
        assert_eq!(
            resolve_main_axis_alignment(Some(MainAxisAlignment::SpaceBetween)).as_css(),
            "space-between"
        );
    }

    #[test]
    fn flex_defaults_to_one() {
        assert_eq!(resolve_flex(&FlexFactor::default()), 1.0);
        assert_eq!(resolve_flex(&FlexFactor { flex: Some(2.0) }), 2.0);
        assert_eq!(resolve_flex(&FlexFactor { flex: Some(0.0) }), 1.0);
    }
}
