//! Widget model for Mobile Builder documents.
//!
//! A document is a strict rooted tree of [`WidgetNode`]s. Each node owns its
//! children outright (boxed single child, vector of children, or named
//! Scaffold slots), so there are no shared or back references. The variant
//! set is closed; anything with an unrecognised `type` is kept as
//! [`WidgetKind::Unknown`] so a malformed document can still be walked.
//!
//! Params are typed per variant. Every field is optional: decoding never
//! rejects a node because of a bad param (see `document.rs`), and the
//! resolver in `layout.rs` supplies defaults.

use crate::id::WidgetId;
use smallvec::SmallVec;

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Helper to parse a single hex digit.
pub fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`. The `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        let short = |i: usize| hex_val(bytes[i]).map(|v| v * 17);
        let long = |i: usize| Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?);

        match bytes.len() {
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
            6 => Some(Self::rgb(long(0)?, long(2)?, long(4)?)),
            8 => Some(Self::rgba(long(0)?, long(2)?, long(4)?, long(6)?)),
            _ => None,
        }
    }

    /// Canonical `#RRGGBB` / `#RRGGBBAA` form used when re-emitting documents.
    pub fn to_hex(&self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// CSS color value. Opaque colors stay hex, translucent ones use `rgba()`.
    pub fn to_css(&self) -> String {
        if self.a == 0xFF {
            self.to_hex()
        } else {
            let alpha = f32::from(self.a) / 255.0;
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, alpha)
        }
    }
}

// ─── Style primitives ────────────────────────────────────────────────────

/// Padding or margin as written in the document.
///
/// Kept in source form; `layout::resolve_edge_insets` turns it into
/// concrete per-side values.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeInsets {
    /// `16`: same value on all four sides.
    Uniform(f32),
    /// `[8, 16, 8, 16]`: shorthand list, `[top, right, bottom, left]` when complete.
    Each(SmallVec<[f32; 4]>),
    /// `"8, 16"` or `"8px 16px"`: delimited string of up to four tokens.
    Text(String),
}

/// A width or height parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Device-independent pixels.
    Px(f32),
    /// The "fill available space" sentinel (`double.infinity`).
    Fill,
    /// Size to content.
    Auto,
}

/// Declares a closed string-token enum with `from_token` / `as_token`.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $token:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Parse the document token; unrecognised tokens yield `None`.
            pub fn from_token(token: &str) -> Option<Self> {
                match token {
                    $($token => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// The token as written in documents.
            pub fn as_token(&self) -> &'static str {
                match self {
                    $($name::$variant => $token),+
                }
            }
        }
    };
}

token_enum! {
    /// Distribution of children along a flex box's main axis.
    pub enum MainAxisAlignment {
        Start => "start",
        Center => "center",
        End => "end",
        SpaceBetween => "spaceBetween",
        SpaceAround => "spaceAround",
        SpaceEvenly => "spaceEvenly",
    }
}

token_enum! {
    /// Placement of children across a flex box's cross axis.
    pub enum CrossAxisAlignment {
        Start => "start",
        Center => "center",
        End => "end",
        Stretch => "stretch",
    }
}

token_enum! {
    /// Whether a Row/Column fills its main axis (`max`) or shrinks to content.
    pub enum MainAxisSize {
        Min => "min",
        Max => "max",
    }
}

token_enum! {
    /// How an image fills its box.
    pub enum BoxFit {
        Cover => "cover",
        Contain => "contain",
        Fill => "fill",
        FitWidth => "fitWidth",
        FitHeight => "fitHeight",
        None => "none",
        ScaleDown => "scaleDown",
    }
}

token_enum! {
    /// Child placement inside a Container or Stack.
    pub enum Alignment {
        TopLeft => "topLeft",
        TopCenter => "topCenter",
        TopRight => "topRight",
        CenterLeft => "centerLeft",
        Center => "center",
        CenterRight => "centerRight",
        BottomLeft => "bottomLeft",
        BottomCenter => "bottomCenter",
        BottomRight => "bottomRight",
    }
}

token_enum! {
    /// Horizontal text alignment.
    pub enum TextAlign {
        Left => "left",
        Center => "center",
        Right => "right",
        Justify => "justify",
        Start => "start",
        End => "end",
    }
}

/// Font weight: `normal`, `bold`, or `w100`..`w900`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Normal,
    Bold,
    Numeric(u16),
}

impl FontWeight {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "normal" => Some(FontWeight::Normal),
            "bold" => Some(FontWeight::Bold),
            _ => {
                let n: u16 = token.strip_prefix('w')?.parse().ok()?;
                (n % 100 == 0 && (100..=900).contains(&n)).then_some(FontWeight::Numeric(n))
            }
        }
    }

    pub fn as_token(&self) -> String {
        match self {
            FontWeight::Normal => "normal".into(),
            FontWeight::Bold => "bold".into(),
            FontWeight::Numeric(n) => format!("w{n}"),
        }
    }
}

// ─── Per-variant params ──────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerParams {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub color: Option<Color>,
    pub padding: Option<EdgeInsets>,
    pub margin: Option<EdgeInsets>,
    pub border_radius: Option<f32>,
    pub alignment: Option<Alignment>,
    /// Raw CSS border shorthand, e.g. `"1px solid #000"`.
    pub border: Option<String>,
    /// Raw CSS box-shadow value.
    pub shadow: Option<String>,
}

/// Params shared by Row and Column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlexParams {
    pub main_axis_alignment: Option<MainAxisAlignment>,
    pub cross_axis_alignment: Option<CrossAxisAlignment>,
    pub main_axis_size: Option<MainAxisSize>,
    /// Gap between consecutive children (`spacing`, alias `gap`).
    pub spacing: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackParams {
    pub alignment: Option<Alignment>,
    /// Per-layer z-index overrides; entry `i` applies to child `i`.
    pub z_indices: Vec<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextParams {
    pub text: String,
    pub font_size: Option<f32>,
    pub font_weight: Option<FontWeight>,
    pub color: Option<Color>,
    pub text_align: Option<TextAlign>,
    pub max_lines: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonParams {
    pub label: Option<String>,
    pub icon: Option<String>,
    pub color: Option<Color>,
    pub text_color: Option<Color>,
    pub padding: Option<EdgeInsets>,
    pub border_radius: Option<f32>,
    pub font_size: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageParams {
    pub src: String,
    pub alt: Option<String>,
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub fit: Option<BoxFit>,
    pub border_radius: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconParams {
    /// Icon registry name (`icon`, alias `iconName`).
    pub icon: Option<String>,
    pub size: Option<f32>,
    pub color: Option<Color>,
}

/// Flex weight for Spacer and Expanded. Absent means 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlexFactor {
    pub flex: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaddingParams {
    pub padding: Option<EdgeInsets>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SizedBoxParams {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaffoldParams {
    pub background_color: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppBarParams {
    pub title: String,
    pub background_color: Option<Color>,
    pub foreground_color: Option<Color>,
    pub elevation: Option<f32>,
}

// ─── Widget type tags ────────────────────────────────────────────────────

token_enum! {
    /// The closed set of recognised `type` discriminants.
    pub enum WidgetType {
        Text => "Text",
        Image => "Image",
        Icon => "Icon",
        Button => "Button",
        Spacer => "Spacer",
        Container => "Container",
        Padding => "Padding",
        Center => "Center",
        SizedBox => "SizedBox",
        Expanded => "Expanded",
        Row => "Row",
        Column => "Column",
        Stack => "Stack",
        Scaffold => "Scaffold",
        AppBar => "AppBar",
    }
}

/// Structural shape of a variant: how many children it holds and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetCategory {
    Leaf,
    SingleChild,
    MultiChild,
    Slotted,
    Unknown,
}

impl WidgetType {
    pub fn category(&self) -> WidgetCategory {
        match self {
            WidgetType::Text
            | WidgetType::Image
            | WidgetType::Icon
            | WidgetType::Button
            | WidgetType::Spacer
            | WidgetType::AppBar => WidgetCategory::Leaf,
            WidgetType::Container
            | WidgetType::Padding
            | WidgetType::Center
            | WidgetType::SizedBox
            | WidgetType::Expanded => WidgetCategory::SingleChild,
            WidgetType::Row | WidgetType::Column | WidgetType::Stack => WidgetCategory::MultiChild,
            WidgetType::Scaffold => WidgetCategory::Slotted,
        }
    }
}

// ─── Widget nodes ────────────────────────────────────────────────────────

/// Optional, exclusively owned single child.
pub type Child = Option<Box<WidgetNode>>;

/// One node of the widget tree.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetNode {
    pub id: WidgetId,
    pub kind: WidgetKind,
}

/// Variant payloads. Children live inside the variant that can hold them.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetKind {
    // Leaves
    Text(TextParams),
    Image(ImageParams),
    Icon(IconParams),
    Button {
        params: ButtonParams,
        /// Navigation actions; carried through untouched.
        actions: Vec<serde_json::Value>,
    },
    Spacer(FlexFactor),
    AppBar(AppBarParams),

    // Single child
    Container {
        params: ContainerParams,
        child: Child,
    },
    Padding {
        params: PaddingParams,
        child: Child,
    },
    Center {
        child: Child,
    },
    SizedBox {
        params: SizedBoxParams,
        child: Child,
    },
    Expanded {
        params: FlexFactor,
        child: Child,
    },

    // Multi child; order is paint order
    Row {
        params: FlexParams,
        children: Vec<WidgetNode>,
    },
    Column {
        params: FlexParams,
        children: Vec<WidgetNode>,
    },
    Stack {
        params: StackParams,
        children: Vec<WidgetNode>,
    },

    // Named slots
    Scaffold {
        params: ScaffoldParams,
        app_bar: Child,
        body: Child,
        floating_action_button: Child,
    },

    /// A node whose `type` is missing or unrecognised. `raw` is the node's
    /// original JSON so it re-emits unchanged.
    Unknown {
        type_name: String,
        raw: serde_json::Value,
    },
}

impl WidgetKind {
    /// The recognised type tag, or `None` for [`WidgetKind::Unknown`].
    pub fn widget_type(&self) -> Option<WidgetType> {
        Some(match self {
            WidgetKind::Text(_) => WidgetType::Text,
            WidgetKind::Image(_) => WidgetType::Image,
            WidgetKind::Icon(_) => WidgetType::Icon,
            WidgetKind::Button { .. } => WidgetType::Button,
            WidgetKind::Spacer(_) => WidgetType::Spacer,
            WidgetKind::AppBar(_) => WidgetType::AppBar,
            WidgetKind::Container { .. } => WidgetType::Container,
            WidgetKind::Padding { .. } => WidgetType::Padding,
            WidgetKind::Center { .. } => WidgetType::Center,
            WidgetKind::SizedBox { .. } => WidgetType::SizedBox,
            WidgetKind::Expanded { .. } => WidgetType::Expanded,
            WidgetKind::Row { .. } => WidgetType::Row,
            WidgetKind::Column { .. } => WidgetType::Column,
            WidgetKind::Stack { .. } => WidgetType::Stack,
            WidgetKind::Scaffold { .. } => WidgetType::Scaffold,
            WidgetKind::Unknown { .. } => return None,
        })
    }

    /// The `type` string as it appears in the document.
    pub fn type_name(&self) -> &str {
        match self {
            WidgetKind::Unknown { type_name, .. } => type_name,
            other => other.widget_type().map_or("", |t| t.as_token()),
        }
    }

    pub fn category(&self) -> WidgetCategory {
        self.widget_type()
            .map_or(WidgetCategory::Unknown, |t| t.category())
    }
}

impl WidgetNode {
    pub fn new(id: WidgetId, kind: WidgetKind) -> Self {
        Self { id, kind }
    }

    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }

    /// Visible text carried by text-bearing leaves (Text, Button label, AppBar title).
    pub fn text_content(&self) -> Option<&str> {
        match &self.kind {
            WidgetKind::Text(p) => Some(p.text.as_str()),
            WidgetKind::Button { params, .. } => params.label.as_deref(),
            WidgetKind::AppBar(p) => Some(p.title.as_str()),
            _ => None,
        }
    }
}
