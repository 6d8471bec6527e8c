//! Render engine: widget tree → styled box tree.
//!
//! The walk is a pure function of `(node, selected)` plus configuration.
//! Every widget box gets a stop-propagation click handler selecting its own
//! id, and the selection treatment iff its id is the selected one. Children
//! are derived per variant rather than through the navigator, since
//! Scaffold slots and Stack layers need their own wrappers.

use crate::boxes::*;
use crate::icons::{BuiltinIcons, IconRegistry};
use mb_core::layout::{self, Insets, JustifyContent, AlignItems, Length};
use mb_core::*;

/// Presentation constants for the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub selection_color: Color,
    pub selection_z_index: i32,
    /// Minimum height of an empty single-child box so it stays clickable.
    pub empty_box_min_height: f32,
    /// Minimum height of Row/Column/Stack boxes.
    pub flex_min_height: f32,
    pub default_icon_size: f32,
    /// Glyph shown when an icon name does not resolve.
    pub missing_icon_glyph: String,
    pub app_bar_height: f32,
    pub app_bar_background: Color,
    pub app_bar_foreground: Color,
    pub fab_offset: f32,
    pub fab_z_index: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            selection_color: Color::rgb(0x3B, 0x82, 0xF6),
            selection_z_index: 10,
            empty_box_min_height: 24.0,
            flex_min_height: 20.0,
            default_icon_size: 24.0,
            missing_icon_glyph: "?".into(),
            app_bar_height: 56.0,
            app_bar_background: Color::rgb(0x21, 0x96, 0xF3),
            app_bar_foreground: Color::WHITE,
            fab_offset: 16.0,
            fab_z_index: 20,
        }
    }
}

const DIAGNOSTIC_RED: Color = Color::rgb(0xEF, 0x44, 0x44);
const BUTTON_BLUE: Color = Color::rgb(0x21, 0x96, 0xF3);

/// Everything a render pass reads besides the tree itself.
pub struct RenderContext<'a> {
    pub selected: Option<WidgetId>,
    pub config: &'a RenderConfig,
    pub icons: &'a dyn IconRegistry,
}

/// Render with the default configuration and built-in icons.
pub fn render(node: &WidgetNode, selected: Option<WidgetId>) -> RenderBox {
    let config = RenderConfig::default();
    let ctx = RenderContext {
        selected,
        config: &config,
        icons: &BuiltinIcons,
    };
    render_with(node, &ctx)
}

/// Render `node` into a device-sized, clipped frame.
pub fn render_surface(
    node: &WidgetNode,
    selected: Option<WidgetId>,
    device: &DeviceConfig,
) -> RenderBox {
    let config = RenderConfig::default();
    let ctx = RenderContext {
        selected,
        config: &config,
        icons: &BuiltinIcons,
    };
    render_surface_with(node, &ctx, device)
}

pub fn render_surface_with(
    node: &WidgetNode,
    ctx: &RenderContext<'_>,
    device: &DeviceConfig,
) -> RenderBox {
    let frame = BoxStyle {
        position: Some(Position::Relative),
        width: Some(Length::Px(device.width)),
        height: Some(Length::Px(device.height)),
        overflow: Some(Overflow::Hidden),
        background: Some(Color::WHITE),
        box_sizing_border: true,
        ..Default::default()
    };
    log::debug!(
        "render surface {} ({}x{}) selected={:?}",
        device.id,
        device.width,
        device.height,
        ctx.selected
    );
    RenderBox::wrap(frame, render_with(node, ctx))
}

pub fn render_with(node: &WidgetNode, ctx: &RenderContext<'_>) -> RenderBox {
    log::trace!("render {:?} ({})", node.id, node.type_name());
    let cfg = ctx.config;

    let mut out = match &node.kind {
        WidgetKind::Container { params, child } => {
            let aligned = layout::resolve_alignment(params.alignment);
            let mut b = widget_box(BoxTag::Div, child_box(child, ctx));
            b.style = BoxStyle {
                display: Some(if aligned.is_some() {
                    Display::Flex
                } else {
                    Display::Block
                }),
                justify_content: aligned.map(|(j, _)| j),
                align_items: aligned.map(|(_, a)| a),
                position: Some(Position::Relative),
                box_sizing_border: true,
                width: Some(layout::resolve_dimension(params.width)),
                height: Some(layout::resolve_dimension(params.height)),
                background: params.color,
                padding: non_zero(layout::resolve_edge_insets(params.padding.as_ref())),
                margin: non_zero(layout::resolve_edge_insets(params.margin.as_ref())),
                border_radius: params.border_radius,
                overflow: params.border_radius.filter(|r| *r > 0.0).map(|_| Overflow::Hidden),
                border: params.border.clone(),
                box_shadow: params.shadow.clone(),
                min_height: Some(Length::Px(min_hit(child, cfg))),
                ..Default::default()
            };
            b
        }
        WidgetKind::Padding { params, child } => {
            let mut b = widget_box(BoxTag::Div, child_box(child, ctx));
            b.style = BoxStyle {
                box_sizing_border: true,
                padding: Some(layout::resolve_edge_insets(params.padding.as_ref())),
                min_height: empty_min(child, cfg),
                ..Default::default()
            };
            b
        }
        WidgetKind::Center { child } => {
            let mut b = widget_box(BoxTag::Div, child_box(child, ctx));
            b.style = BoxStyle {
                display: Some(Display::Flex),
                justify_content: Some(JustifyContent::Center),
                align_items: Some(AlignItems::Center),
                width: Some(Length::Percent(100.0)),
                height: Some(Length::Percent(100.0)),
                min_height: empty_min(child, cfg),
                ..Default::default()
            };
            b
        }
        WidgetKind::SizedBox { params, child } => {
            let height = layout::resolve_dimension(params.height);
            let mut b = widget_box(BoxTag::Div, child_box(child, ctx));
            b.style = BoxStyle {
                width: Some(layout::resolve_dimension(params.width)),
                height: Some(height),
                flex_shrink: Some(0.0),
                min_height: empty_min(child, cfg).filter(|_| height == Length::Auto),
                ..Default::default()
            };
            b
        }
        WidgetKind::Expanded { params, child } => {
            let mut b = widget_box(BoxTag::Div, child_box(child, ctx));
            b.style = BoxStyle {
                flex: Some(Flex::weighted(layout::resolve_flex(params))),
                min_width: Some(Length::Px(0.0)),
                min_height: Some(Length::Px(if child.is_some() {
                    0.0
                } else {
                    cfg.empty_box_min_height
                })),
                display: Some(Display::Flex),
                flex_direction: Some(FlexDirection::Column),
                ..Default::default()
            };
            b
        }
        WidgetKind::Row { params, children } => {
            flex_box(FlexDirection::Row, params, children, ctx)
        }
        WidgetKind::Column { params, children } => {
            flex_box(FlexDirection::Column, params, children, ctx)
        }
        WidgetKind::Stack { params, children } => stack_box(params, children, ctx),
        WidgetKind::Scaffold {
            params,
            app_bar,
            body,
            floating_action_button,
        } => scaffold_box(params, app_bar, body, floating_action_button, ctx),

        WidgetKind::Text(p) => {
            let mut b = RenderBox::new(BoxTag::Span);
            b.text = Some(p.text.clone());
            b.style = BoxStyle {
                display: Some(Display::Block),
                color: p.color,
                font_size: p.font_size,
                font_weight: Some(layout::resolve_font_weight(p.font_weight)),
                text_align: p.text_align.map(|a| layout::resolve_text_align(Some(a))),
                line_clamp: p.max_lines,
                overflow: p.max_lines.map(|_| Overflow::Hidden),
                cursor: Some("default"),
                ..Default::default()
            };
            b
        }
        WidgetKind::Image(p) => {
            let mut b = RenderBox::new(BoxTag::Img);
            b.src = Some(p.src.clone());
            b.text = Some(p.alt.clone().unwrap_or_else(|| "asset".into()));
            b.style = BoxStyle {
                display: Some(Display::Block),
                width: Some(layout::resolve_dimension(p.width)),
                height: Some(layout::resolve_dimension(p.height)),
                object_fit: Some(layout::resolve_box_fit(p.fit)),
                border_radius: p.border_radius,
                ..Default::default()
            };
            b
        }
        WidgetKind::Icon(p) => icon_box(p, ctx),
        WidgetKind::Button { params, .. } => {
            let mut b = RenderBox::new(BoxTag::Button);
            b.text = params.label.clone();
            b.glyph = params
                .icon
                .as_deref()
                .map(|name| ctx.icons.glyph(name).unwrap_or_else(|| cfg.missing_icon_glyph.clone()));
            b.style = BoxStyle {
                display: Some(Display::InlineFlex),
                align_items: Some(AlignItems::Center),
                justify_content: Some(JustifyContent::Center),
                gap: b.glyph.as_ref().and(b.text.as_ref()).map(|_| 8.0),
                box_sizing_border: true,
                padding: Some(match &params.padding {
                    Some(p) => layout::resolve_edge_insets(Some(p)),
                    None => Insets::from_shorthand(&[10.0, 20.0]),
                }),
                background: Some(params.color.unwrap_or(BUTTON_BLUE)),
                color: Some(params.text_color.unwrap_or(Color::WHITE)),
                border: Some("none".into()),
                border_radius: Some(params.border_radius.unwrap_or(8.0)),
                font_size: params.font_size,
                font_weight: Some(500),
                cursor: Some("pointer"),
                ..Default::default()
            };
            b
        }
        WidgetKind::Spacer(f) => {
            let mut b = RenderBox::new(BoxTag::Div);
            b.style = BoxStyle {
                flex: Some(Flex::weighted(layout::resolve_flex(f))),
                ..Default::default()
            };
            b
        }
        WidgetKind::AppBar(p) => app_bar_box(p, cfg),
        WidgetKind::Unknown { type_name, .. } => {
            log::debug!("render {:?}: placeholder for unknown type {type_name:?}", node.id);
            let label = if type_name.is_empty() { "(none)" } else { type_name.as_str() };
            let mut b = RenderBox::new(BoxTag::Placeholder);
            b.text = Some(format!("Unknown widget: {label}"));
            b.style = BoxStyle {
                display: Some(Display::Block),
                box_sizing_border: true,
                padding: Some(Insets::uniform(8.0)),
                border: Some(format!("2px dashed {}", DIAGNOSTIC_RED.to_css())),
                border_radius: Some(4.0),
                background: Some(Color::rgba(0xEF, 0x44, 0x44, 0x14)),
                color: Some(DIAGNOSTIC_RED),
                font_size: Some(12.0),
                ..Default::default()
            };
            b
        }
    };

    out.key = Some(node.id);
    out.on_click = Some(ClickHandler::select(node.id));
    if ctx.selected == Some(node.id) {
        apply_selection(&mut out.style, cfg);
        out.selected = true;
    }
    out
}

// ─── Per-variant helpers ─────────────────────────────────────────────────

fn widget_box(tag: BoxTag, child: Option<RenderBox>) -> RenderBox {
    RenderBox {
        children: child.into_iter().collect(),
        ..RenderBox::new(tag)
    }
}

fn child_box(child: &Child, ctx: &RenderContext<'_>) -> Option<RenderBox> {
    child.as_deref().map(|c| render_with(c, ctx))
}

fn min_hit(child: &Child, cfg: &RenderConfig) -> f32 {
    if child.is_some() { 1.0 } else { cfg.empty_box_min_height }
}

fn empty_min(child: &Child, cfg: &RenderConfig) -> Option<Length> {
    child
        .is_none()
        .then_some(Length::Px(cfg.empty_box_min_height))
}

fn non_zero(insets: Insets) -> Option<Insets> {
    (!insets.is_zero()).then_some(insets)
}

fn flex_box(
    direction: FlexDirection,
    params: &FlexParams,
    children: &[WidgetNode],
    ctx: &RenderContext<'_>,
) -> RenderBox {
    let fill = params.main_axis_size != Some(MainAxisSize::Min);
    let main = fill.then_some(Length::Percent(100.0));
    let (width, height) = match direction {
        FlexDirection::Row => (main, None),
        FlexDirection::Column => (None, main),
    };

    let mut b = RenderBox::new(BoxTag::Div);
    b.children = children.iter().map(|c| render_with(c, ctx)).collect();
    b.style = BoxStyle {
        display: Some(Display::Flex),
        flex_direction: Some(direction),
        justify_content: Some(layout::resolve_main_axis_alignment(params.main_axis_alignment)),
        align_items: Some(layout::resolve_cross_axis_alignment(params.cross_axis_alignment)),
        gap: params.spacing.filter(|g| *g > 0.0),
        width,
        height,
        min_height: Some(Length::Px(ctx.config.flex_min_height)),
        ..Default::default()
    };
    b
}

/// Children share the origin. The first layer stays in flow so the stack
/// takes its size; later layers are absolutely positioned on top of it.
fn stack_box(params: &StackParams, children: &[WidgetNode], ctx: &RenderContext<'_>) -> RenderBox {
    let aligned = layout::resolve_alignment(params.alignment);
    let mut b = RenderBox::new(BoxTag::Div);
    b.children = children
        .iter()
        .enumerate()
        .map(|(i, child)| {
            let z = params.z_indices.get(i).copied().unwrap_or(i as i32);
            let mut layer = BoxStyle {
                z_index: Some(z),
                ..Default::default()
            };
            if i == 0 {
                layer.position = Some(Position::Relative);
            } else {
                layer.position = Some(Position::Absolute);
                layer.top = Some(0.0);
                layer.left = Some(0.0);
                if aligned.is_some() {
                    layer.right = Some(0.0);
                    layer.bottom = Some(0.0);
                }
            }
            if let Some((j, a)) = aligned {
                layer.display = Some(Display::Flex);
                layer.justify_content = Some(j);
                layer.align_items = Some(a);
            }
            RenderBox::wrap(layer, render_with(child, ctx))
        })
        .collect();
    b.style = BoxStyle {
        position: Some(Position::Relative),
        width: Some(Length::Percent(100.0)),
        min_height: Some(Length::Px(ctx.config.flex_min_height)),
        ..Default::default()
    };
    b
}

fn scaffold_box(
    params: &ScaffoldParams,
    app_bar: &Child,
    body: &Child,
    fab: &Child,
    ctx: &RenderContext<'_>,
) -> RenderBox {
    let cfg = ctx.config;
    let mut b = RenderBox::new(BoxTag::Div);

    if let Some(bar) = child_box(app_bar, ctx) {
        let slot = BoxStyle {
            flex_shrink: Some(0.0),
            width: Some(Length::Percent(100.0)),
            ..Default::default()
        };
        b.children.push(RenderBox::wrap(slot, bar));
    }
    if let Some(body) = child_box(body, ctx) {
        let slot = BoxStyle {
            flex: Some(Flex {
                grow: 1.0,
                shrink: 1.0,
                basis: Length::Px(0.0),
            }),
            min_height: Some(Length::Px(0.0)),
            display: Some(Display::Flex),
            flex_direction: Some(FlexDirection::Column),
            overflow: Some(Overflow::Auto),
            ..Default::default()
        };
        b.children.push(RenderBox::wrap(slot, body));
    }
    if let Some(fab) = child_box(fab, ctx) {
        let slot = BoxStyle {
            position: Some(Position::Absolute),
            bottom: Some(cfg.fab_offset),
            right: Some(cfg.fab_offset),
            z_index: Some(cfg.fab_z_index),
            ..Default::default()
        };
        b.children.push(RenderBox::wrap(slot, fab));
    }

    b.style = BoxStyle {
        display: Some(Display::Flex),
        flex_direction: Some(FlexDirection::Column),
        position: Some(Position::Relative),
        width: Some(Length::Percent(100.0)),
        height: Some(Length::Percent(100.0)),
        background: params.background_color,
        overflow: Some(Overflow::Hidden),
        ..Default::default()
    };
    b
}

fn app_bar_box(p: &AppBarParams, cfg: &RenderConfig) -> RenderBox {
    let foreground = p.foreground_color.unwrap_or(cfg.app_bar_foreground);
    let mut title = RenderBox::new(BoxTag::Span);
    title.text = Some(p.title.clone());
    title.style = BoxStyle {
        font_size: Some(20.0),
        font_weight: Some(500),
        color: Some(foreground),
        ..Default::default()
    };

    let mut b = widget_box(BoxTag::Div, Some(title));
    b.style = BoxStyle {
        display: Some(Display::Flex),
        align_items: Some(AlignItems::Center),
        box_sizing_border: true,
        width: Some(Length::Percent(100.0)),
        height: Some(Length::Px(cfg.app_bar_height)),
        padding: Some(Insets::from_shorthand(&[0.0, 16.0])),
        background: Some(p.background_color.unwrap_or(cfg.app_bar_background)),
        color: Some(foreground),
        box_shadow: p
            .elevation
            .filter(|e| *e > 0.0)
            .map(|e| format!("0 {}px {}px rgba(0, 0, 0, 0.2)", e, e * 2.0)),
        ..Default::default()
    };
    b
}

fn icon_box(p: &IconParams, ctx: &RenderContext<'_>) -> RenderBox {
    let cfg = ctx.config;
    let size = p.size.filter(|s| *s > 0.0).unwrap_or(cfg.default_icon_size);
    let glyph = p.icon.as_deref().and_then(|name| ctx.icons.glyph(name));

    let mut b = RenderBox::new(BoxTag::Icon);
    b.style = BoxStyle {
        display: Some(Display::InlineFlex),
        justify_content: Some(JustifyContent::Center),
        align_items: Some(AlignItems::Center),
        width: Some(Length::Px(size)),
        height: Some(Length::Px(size)),
        font_size: Some(size),
        color: p.color,
        ..Default::default()
    };
    match glyph {
        Some(g) => b.glyph = Some(g),
        None => {
            log::debug!("unresolved icon {:?}", p.icon);
            b.glyph = Some(cfg.missing_icon_glyph.clone());
            b.style.background = Some(Color::rgba(0xEF, 0x44, 0x44, 0x33));
            b.style.round = true;
        }
    }
    b
}

fn apply_selection(style: &mut BoxStyle, cfg: &RenderConfig) {
    let c = cfg.selection_color;
    style.outline = Some(format!("2px solid {}", c.to_hex().to_lowercase()));
    style.outline_offset = Some(-2.0);
    let ring = format!("inset 0 0 0 2px rgba({}, {}, {}, 0.2)", c.r, c.g, c.b);
    style.box_shadow = Some(match style.box_shadow.take() {
        Some(existing) => format!("{ring}, {existing}"),
        None => ring,
    });
    style.z_index = Some(cfg.selection_z_index);
    if style.position.is_none() {
        style.position = Some(Position::Relative);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mb_core::parse_document;
    use pretty_assertions::assert_eq;

    fn doc(json: &str) -> WidgetNode {
        parse_document(json).expect("test document should parse")
    }

    #[test]
    fn container_padding_and_color() {
        let root = doc(r##"{"id": "r_box", "type": "Container",
            "params": {"padding": 16, "color": "#FFFFFF"},
            "child": {"id": "r_text", "type": "Text", "params": {"text": "Hi"}}}"##);
        let out = render(&root, None);
        assert_eq!(out.tag, BoxTag::Div);
        assert_eq!(out.style.padding, Some(Insets::uniform(16.0)));
        assert_eq!(out.style.background, Some(Color::WHITE));
        assert_eq!(out.children.len(), 1);
        assert_eq!(out.children[0].text.as_deref(), Some("Hi"));
        assert_eq!(out.children[0].tag, BoxTag::Span);
    }

    #[test]
    fn every_widget_box_stops_propagation() {
        let root = doc(r#"{"id": "r_col", "type": "Column", "children": [
            {"id": "r_a", "type": "Spacer"}, {"id": "r_b", "type": "Icon"}]}"#);
        let out = render(&root, None);
        for b in std::iter::once(&out).chain(out.children.iter()) {
            let handler = b.on_click.expect("widget boxes have handlers");
            assert!(handler.stop_propagation);
            assert_eq!(Some(handler.select), b.key);
        }
    }

    #[test]
    fn selection_treatment() {
        let root = doc(r#"{"id": "r_sel", "type": "Center"}"#);
        let out = render(&root, Some(WidgetId::intern("r_sel")));
        assert!(out.selected);
        assert_eq!(out.style.outline.as_deref(), Some("2px solid #3b82f6"));
        assert_eq!(out.style.outline_offset, Some(-2.0));
        assert_eq!(out.style.z_index, Some(10));
        assert_eq!(out.style.position, Some(Position::Relative));
        assert_eq!(
            out.style.box_shadow.as_deref(),
            Some("inset 0 0 0 2px rgba(59, 130, 246, 0.2)")
        );
    }

    #[test]
    fn empty_single_child_boxes_keep_a_hit_area() {
        let root = doc(r#"{"id": "r_empty", "type": "Container"}"#);
        let out = render(&root, None);
        assert!(out.children.is_empty());
        assert_eq!(out.style.min_height, Some(Length::Px(24.0)));
        assert!(out.on_click.is_some());
    }

    #[test]
    fn flex_main_axis_fill_and_min() {
        let row = render(&doc(r#"{"id": "r_row", "type": "Row", "params": {"spacing": 4}}"#), None);
        assert_eq!(row.style.width, Some(Length::Percent(100.0)));
        assert_eq!(row.style.gap, Some(4.0));
        assert_eq!(row.style.min_height, Some(Length::Px(20.0)));

        let col = render(
            &doc(r#"{"id": "r_col_min", "type": "Column", "params": {"mainAxisSize": "min"}}"#),
            None,
        );
        assert_eq!(col.style.height, None);
        assert_eq!(col.style.flex_direction, Some(FlexDirection::Column));
    }

    #[test]
    fn expanded_takes_weighted_share() {
        let out = render(
            &doc(r#"{"id": "r_exp", "type": "Expanded", "params": {"flex": 3},
                "child": {"id": "r_exp_t", "type": "Text"}}"#),
            None,
        );
        assert_eq!(out.style.flex, Some(Flex::weighted(3.0)));
        assert_eq!(out.children.len(), 1);

        let empty = render(&doc(r#"{"id": "r_exp_empty", "type": "Expanded"}"#), None);
        assert!(empty.children.is_empty());
        assert_eq!(empty.style.flex, Some(Flex::weighted(1.0)));
    }

    #[test]
    fn stack_layers_share_origin() {
        let out = render(
            &doc(r#"{"id": "r_stack", "type": "Stack", "params": {"zIndices": [5]}, "children": [
                {"id": "r_l0", "type": "Text"}, {"id": "r_l1", "type": "Text"}, {"id": "r_l2", "type": "Text"}]}"#),
            None,
        );
        let z: Vec<Option<i32>> = out.children.iter().map(|l| l.style.z_index).collect();
        assert_eq!(z, vec![Some(5), Some(1), Some(2)]);
        for layer in &out.children[1..] {
            assert_eq!(layer.style.position, Some(Position::Absolute));
            assert_eq!((layer.style.top, layer.style.left), (Some(0.0), Some(0.0)));
            assert!(layer.key.is_none() && layer.on_click.is_none());
        }
    }

    #[test]
    fn icons_resolve_or_show_placeholder() {
        let known = render(&doc(r#"{"id": "r_icon", "type": "Icon", "params": {"icon": "home"}}"#), None);
        assert_eq!(known.glyph.as_deref(), Some("\u{2302}"));
        assert_eq!(known.style.width, Some(Length::Px(24.0)));

        let unknown = render(&doc(r#"{"id": "r_icon2", "type": "Icon", "params": {"icon": "zzz"}}"#), None);
        assert_eq!(unknown.glyph.as_deref(), Some("?"));
        assert!(unknown.style.round);
    }

    #[test]
    fn app_bar_defaults() {
        let out = render(&doc(r#"{"id": "r_bar", "type": "AppBar", "params": {"title": "Home"}}"#), None);
        assert_eq!(out.style.height, Some(Length::Px(56.0)));
        assert_eq!(out.style.background, Some(Color::rgb(0x21, 0x96, 0xF3)));
        assert_eq!(out.children[0].text.as_deref(), Some("Home"));
    }

    #[test]
    fn image_fit_and_alt() {
        let out = render(
            &doc(r#"{"id": "r_img", "type": "Image", "params": {"src": "a.png", "fit": "fitHeight", "width": "double.infinity"}}"#),
            None,
        );
        assert_eq!(out.tag, BoxTag::Img);
        assert_eq!(out.src.as_deref(), Some("a.png"));
        assert_eq!(out.text.as_deref(), Some("asset"));
        assert_eq!(out.style.object_fit, Some(layout::ObjectFit::Contain));
        assert_eq!(out.style.width, Some(Length::Percent(100.0)));
    }

    #[test]
    fn render_surface_sizes_to_device() {
        let root = doc(r#"{"id": "r_surface", "type": "Text"}"#);
        let device = device_by_id("pixel-7").expect("pixel-7 preset");
        let out = render_surface(&root, None, device);
        assert_eq!(out.style.width, Some(Length::Px(412.0)));
        assert_eq!(out.style.height, Some(Length::Px(915.0)));
        assert!(out.key.is_none());
        assert_eq!(out.children[0].key, Some(WidgetId::intern("r_surface")));
    }
}
