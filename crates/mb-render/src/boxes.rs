//! Styled box tree produced by the renderer.
//!
//! A [`RenderBox`] is a host-neutral description of one visual element:
//! tag, typed style, content, selection flag and click handler. Boxes
//! emitted for widgets carry the widget id as `key`; structural wrappers
//! (Scaffold slots, Stack layers, AppBar title) have no key and no handler.

use mb_core::Color;
use mb_core::WidgetId;
use mb_core::layout::{AlignItems, Insets, JustifyContent, Length, ObjectFit};
use serde::{Serialize, Serializer};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxTag {
    Div,
    Span,
    Img,
    Icon,
    Button,
    /// Diagnostic box for unrecognised widgets.
    Placeholder,
}

/// Click behaviour attached to a widget box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickHandler {
    /// Id reported as the new selection.
    pub select: WidgetId,
    /// Halts bubbling so ancestors do not also handle the click.
    pub stop_propagation: bool,
}

impl ClickHandler {
    pub fn select(id: WidgetId) -> Self {
        Self {
            select: id,
            stop_propagation: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderBox {
    pub tag: BoxTag,
    pub key: Option<WidgetId>,
    #[serde(rename = "css", serialize_with = "serialize_css")]
    pub style: BoxStyle,
    /// Text content; alt text for `Img`.
    pub text: Option<String>,
    /// Image source for `Img`.
    pub src: Option<String>,
    /// Resolved icon glyph for `Icon` and `Button`.
    pub glyph: Option<String>,
    pub selected: bool,
    pub on_click: Option<ClickHandler>,
    pub children: Vec<RenderBox>,
}

impl RenderBox {
    /// A bare box with no key, content or handler.
    pub fn new(tag: BoxTag) -> Self {
        Self {
            tag,
            key: None,
            style: BoxStyle::default(),
            text: None,
            src: None,
            glyph: None,
            selected: false,
            on_click: None,
            children: Vec::new(),
        }
    }

    /// A wrapper `Div` around a single child.
    pub fn wrap(style: BoxStyle, child: RenderBox) -> Self {
        Self {
            style,
            children: vec![child],
            ..Self::new(BoxTag::Div)
        }
    }
}

fn serialize_css<S: Serializer>(style: &BoxStyle, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&style.to_css())
}

// ─── Style ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    Flex,
    InlineFlex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Relative,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overflow {
    Hidden,
    Auto,
}

/// `flex: <grow> <shrink> <basis>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flex {
    pub grow: f32,
    pub shrink: f32,
    pub basis: Length,
}

impl Flex {
    /// Proportional share of remaining space: `flex: N 1 0`.
    pub fn weighted(grow: f32) -> Self {
        Self {
            grow,
            shrink: 1.0,
            basis: Length::Px(0.0),
        }
    }
}

/// Inline style of one box. Unset fields are omitted from the CSS.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxStyle {
    pub display: Option<Display>,
    pub position: Option<Position>,
    pub top: Option<f32>,
    pub right: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub z_index: Option<i32>,

    pub flex_direction: Option<FlexDirection>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<AlignItems>,
    pub gap: Option<f32>,
    pub flex: Option<Flex>,
    pub flex_shrink: Option<f32>,

    pub box_sizing_border: bool,
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub min_width: Option<Length>,
    pub min_height: Option<Length>,
    pub padding: Option<Insets>,
    pub margin: Option<Insets>,

    pub background: Option<Color>,
    pub border: Option<String>,
    pub border_radius: Option<f32>,
    /// `border-radius: 50%`; wins over `border_radius`.
    pub round: bool,
    pub box_shadow: Option<String>,
    pub overflow: Option<Overflow>,
    pub object_fit: Option<ObjectFit>,

    pub color: Option<Color>,
    pub font_size: Option<f32>,
    pub font_weight: Option<u16>,
    pub text_align: Option<&'static str>,
    pub line_clamp: Option<u32>,

    pub outline: Option<String>,
    pub outline_offset: Option<f32>,
    pub cursor: Option<&'static str>,
}

impl BoxStyle {
    /// Inline CSS in a fixed property order, so equal styles always
    /// serialize identically.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let mut prop = |name: &str, value: &dyn std::fmt::Display| {
            let _ = write!(css, "{name}:{value};");
        };

        if let Some(d) = self.display {
            let v = match d {
                Display::Block => "block",
                Display::Flex => "flex",
                Display::InlineFlex => "inline-flex",
            };
            prop("display", &v);
        }
        if let Some(p) = self.position {
            let v = match p {
                Position::Relative => "relative",
                Position::Absolute => "absolute",
            };
            prop("position", &v);
        }
        for (name, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if let Some(v) = value {
                prop(name, &px(v));
            }
        }
        if let Some(z) = self.z_index {
            prop("z-index", &z);
        }

        if let Some(dir) = self.flex_direction {
            let v = match dir {
                FlexDirection::Row => "row",
                FlexDirection::Column => "column",
            };
            prop("flex-direction", &v);
        }
        if let Some(j) = self.justify_content {
            prop("justify-content", &j.as_css());
        }
        if let Some(a) = self.align_items {
            prop("align-items", &a.as_css());
        }
        if let Some(g) = self.gap {
            prop("gap", &px(g));
        }
        if let Some(f) = self.flex {
            prop(
                "flex",
                &format!("{} {} {}", num(f.grow), num(f.shrink), length(f.basis)),
            );
        }
        if let Some(s) = self.flex_shrink {
            prop("flex-shrink", &num(s));
        }

        if self.box_sizing_border {
            prop("box-sizing", &"border-box");
        }
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("min-width", self.min_width),
            ("min-height", self.min_height),
        ] {
            if let Some(v) = value {
                prop(name, &length(v));
            }
        }
        if let Some(p) = self.padding {
            prop("padding", &insets(p));
        }
        if let Some(m) = self.margin {
            prop("margin", &insets(m));
        }

        if let Some(c) = self.background {
            prop("background-color", &c.to_css());
        }
        if let Some(b) = &self.border {
            prop("border", b);
        }
        if self.round {
            prop("border-radius", &"50%");
        } else if let Some(r) = self.border_radius {
            prop("border-radius", &px(r));
        }
        if let Some(s) = &self.box_shadow {
            prop("box-shadow", s);
        }
        if let Some(o) = self.overflow {
            let v = match o {
                Overflow::Hidden => "hidden",
                Overflow::Auto => "auto",
            };
            prop("overflow", &v);
        }
        if let Some(fit) = self.object_fit {
            prop("object-fit", &fit.as_css());
        }

        if let Some(c) = self.color {
            prop("color", &c.to_css());
        }
        if let Some(s) = self.font_size {
            prop("font-size", &px(s));
        }
        if let Some(w) = self.font_weight {
            prop("font-weight", &w);
        }
        if let Some(a) = self.text_align {
            prop("text-align", &a);
        }
        if let Some(n) = self.line_clamp {
            prop("display", &"-webkit-box");
            prop("-webkit-box-orient", &"vertical");
            prop("-webkit-line-clamp", &n);
        }

        if let Some(o) = &self.outline {
            prop("outline", o);
        }
        if let Some(o) = self.outline_offset {
            prop("outline-offset", &px(o));
        }
        if let Some(c) = self.cursor {
            prop("cursor", &c);
        }
        css
    }
}

// ─── CSS value formatting ────────────────────────────────────────────────

/// Shortest decimal form: `16`, `1.5`, `-2`.
pub(crate) fn num(v: f32) -> String {
    if v.fract() == 0.0 && v.abs() < 1e9 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

pub(crate) fn px(v: f32) -> String {
    if v == 0.0 {
        "0".into()
    } else {
        format!("{}px", num(v))
    }
}

fn length(l: Length) -> String {
    match l {
        Length::Px(v) => px(v),
        Length::Percent(p) => format!("{}%", num(p)),
        Length::Auto => "auto".into(),
    }
}

fn insets(i: Insets) -> String {
    format!("{} {} {} {}", px(i.top), px(i.right), px(i.bottom), px(i.left))
}
