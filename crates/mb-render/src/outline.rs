//! Outline projector: widget tree → collapsible indented lines.
//!
//! One line per visible node, in navigator order. Expand/collapse flags
//! live in [`OutlineState`], a side map keyed by widget id that the
//! editing layer owns; the tree itself never carries UI state.

use mb_core::navigator::children_of;
use mb_core::{WidgetId, WidgetKind, WidgetNode, WidgetType};
use serde::Serialize;
use std::collections::HashSet;

// ─── Configuration ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelMode {
    /// Always show the widget type.
    TypeName,
    /// Text-bearing leaves show the trailing `max_chars` of their content.
    ContentPreview { max_chars: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlineConfig {
    pub label_mode: LabelMode,
    pub indent_step: f32,
    pub indent_base: f32,
    pub id_hint_len: usize,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            label_mode: LabelMode::TypeName,
            indent_step: 14.0,
            indent_base: 12.0,
            id_hint_len: 4,
        }
    }
}

// ─── Expand state ────────────────────────────────────────────────────────

/// Per-node expanded flags. Nodes are expanded unless collapsed here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutlineState {
    collapsed: HashSet<WidgetId>,
}

impl OutlineState {
    pub fn is_expanded(&self, id: WidgetId) -> bool {
        !self.collapsed.contains(&id)
    }

    pub fn set_expanded(&mut self, id: WidgetId, expanded: bool) {
        if expanded {
            self.collapsed.remove(&id);
        } else {
            self.collapsed.insert(id);
        }
    }

    /// Flip one node; returns the new expanded state.
    pub fn toggle(&mut self, id: WidgetId) -> bool {
        let expanded = !self.is_expanded(id);
        self.set_expanded(id, expanded);
        expanded
    }

    /// Forget flags for ids that no longer exist in `root`.
    pub fn retain(&mut self, root: &WidgetNode) {
        let live: HashSet<WidgetId> = mb_core::depth_first(root).map(|(_, n)| n.id).collect();
        self.collapsed.retain(|id| live.contains(id));
    }
}

// ─── Lines ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutlineIcon {
    Layout,
    Type,
    Pointer,
    Image,
    Columns,
    ColumnsRotated,
    Box,
    Warning,
}

impl OutlineIcon {
    fn for_node(node: &WidgetNode) -> Self {
        match node.kind.widget_type() {
            Some(WidgetType::Scaffold) => OutlineIcon::Layout,
            Some(WidgetType::Text) => OutlineIcon::Type,
            Some(WidgetType::Button) => OutlineIcon::Pointer,
            Some(WidgetType::Image) => OutlineIcon::Image,
            Some(WidgetType::Row) => OutlineIcon::Columns,
            Some(WidgetType::Column) => OutlineIcon::ColumnsRotated,
            Some(_) => OutlineIcon::Box,
            None => OutlineIcon::Warning,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutlineIcon::Layout => "layout",
            OutlineIcon::Type => "type",
            OutlineIcon::Pointer => "pointer",
            OutlineIcon::Image => "image",
            OutlineIcon::Columns => "columns",
            OutlineIcon::ColumnsRotated => "columns-rotated",
            OutlineIcon::Box => "box",
            OutlineIcon::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineLine {
    pub id: WidgetId,
    pub depth: usize,
    /// Left padding in pixels.
    pub indent: f32,
    pub icon: OutlineIcon,
    pub label: String,
    /// Trailing characters of the id, shown faintly.
    pub id_hint: String,
    /// Whether a chevron is shown.
    pub has_children: bool,
    pub expanded: bool,
    pub selected: bool,
}

/// What a click on an outline line asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineEvent {
    Select(WidgetId),
    Toggle(WidgetId),
}

impl OutlineLine {
    /// Clicking the line selects its node, and only its node.
    pub fn click(&self) -> OutlineEvent {
        OutlineEvent::Select(self.id)
    }

    /// Clicking the chevron toggles expansion; lines without children have
    /// no chevron.
    pub fn click_chevron(&self) -> Option<OutlineEvent> {
        self.has_children.then_some(OutlineEvent::Toggle(self.id))
    }
}

/// Project `node` (at `depth`) and its visible descendants into lines.
pub fn render_outline(
    node: &WidgetNode,
    depth: usize,
    selected: Option<WidgetId>,
    state: &OutlineState,
    config: &OutlineConfig,
) -> Vec<OutlineLine> {
    let mut lines = Vec::new();
    project(node, depth, selected, state, config, &mut lines);
    lines
}

fn project(
    node: &WidgetNode,
    depth: usize,
    selected: Option<WidgetId>,
    state: &OutlineState,
    config: &OutlineConfig,
    out: &mut Vec<OutlineLine>,
) {
    let children = children_of(node);
    let expanded = state.is_expanded(node.id);
    out.push(OutlineLine {
        id: node.id,
        depth,
        indent: depth as f32 * config.indent_step + config.indent_base,
        icon: OutlineIcon::for_node(node),
        label: label(node, config.label_mode),
        id_hint: node.id.tail(config.id_hint_len).to_string(),
        has_children: !children.is_empty(),
        expanded,
        selected: selected == Some(node.id),
    });

    if expanded {
        for child in children {
            project(child, depth + 1, selected, state, config, out);
        }
    }
}

fn label(node: &WidgetNode, mode: LabelMode) -> String {
    let type_label = || match &node.kind {
        WidgetKind::Unknown { type_name, .. } if type_name.is_empty() => "Unknown".to_string(),
        _ => node.type_name().to_string(),
    };
    match (mode, node.text_content()) {
        (LabelMode::ContentPreview { max_chars }, Some(text)) if !text.trim().is_empty() => {
            let count = text.chars().count();
            if count <= max_chars {
                text.to_string()
            } else {
                let tail: String = text.chars().skip(count - max_chars).collect();
                format!("\u{2026}{tail}")
            }
        }
        _ => type_label(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mb_core::parse_document;
    use pretty_assertions::assert_eq;

    fn labels(lines: &[OutlineLine]) -> Vec<(usize, &str)> {
        lines.iter().map(|l| (l.depth, l.label.as_str())).collect()
    }

    #[test]
    fn container_with_text() {
        let root = parse_document(
            r##"{"id": "o_box", "type": "Container", "params": {"padding": 16, "color": "#FFFFFF"},
                "child": {"id": "o_text", "type": "Text", "params": {"text": "Hello"}}}"##,
        )
        .unwrap();
        let lines = render_outline(&root, 0, None, &OutlineState::default(), &OutlineConfig::default());
        assert_eq!(labels(&lines), vec![(0, "Container"), (1, "Text")]);
        assert_eq!(lines[0].indent, 12.0);
        assert_eq!(lines[1].indent, 26.0);
        assert!(lines[0].has_children && !lines[1].has_children);
        assert_eq!(lines[1].id_hint, "text");
    }

    #[test]
    fn collapsed_nodes_hide_descendants() {
        let root = parse_document(
            r#"{"id": "o_row", "type": "Row", "children": [
                {"id": "o_a", "type": "Text"}, {"id": "o_b", "type": "Text"}]}"#,
        )
        .unwrap();
        let mut state = OutlineState::default();
        assert!(!state.toggle(root.id));
        let lines = render_outline(&root, 0, None, &state, &OutlineConfig::default());
        assert_eq!(lines.len(), 1);
        assert!(!lines[0].expanded);
        assert!(state.toggle(root.id));
        assert_eq!(render_outline(&root, 0, None, &state, &OutlineConfig::default()).len(), 3);
    }

    #[test]
    fn clicks_and_chevrons() {
        let root = parse_document(
            r#"{"id": "o_center", "type": "Center", "child": {"id": "o_leaf", "type": "Spacer"}}"#,
        )
        .unwrap();
        let lines = render_outline(&root, 0, None, &OutlineState::default(), &OutlineConfig::default());
        assert_eq!(lines[1].click(), OutlineEvent::Select(WidgetId::intern("o_leaf")));
        assert_eq!(lines[1].click_chevron(), None);
        assert_eq!(
            lines[0].click_chevron(),
            Some(OutlineEvent::Toggle(WidgetId::intern("o_center")))
        );
    }

    #[test]
    fn content_preview_labels() {
        let root = parse_document(
            r#"{"id": "o_col", "type": "Column", "children": [
                {"id": "o_short", "type": "Text", "params": {"text": "Hi"}},
                {"id": "o_long", "type": "Text", "params": {"text": "Welcome aboard"}},
                {"id": "o_blank", "type": "Text", "params": {"text": "  "}}]}"#,
        )
        .unwrap();
        let config = OutlineConfig {
            label_mode: LabelMode::ContentPreview { max_chars: 5 },
            ..Default::default()
        };
        let lines = render_outline(&root, 0, None, &OutlineState::default(), &config);
        assert_eq!(
            labels(&lines),
            vec![(0, "Column"), (1, "Hi"), (1, "\u{2026}board"), (1, "Text")]
        );
    }

    #[test]
    fn retain_prunes_missing_ids() {
        let root = parse_document(r#"{"id": "o_keep", "type": "Center"}"#).unwrap();
        let mut state = OutlineState::default();
        state.set_expanded(WidgetId::intern("o_keep"), false);
        state.set_expanded(WidgetId::intern("o_gone"), false);
        state.retain(&root);
        assert!(!state.is_expanded(WidgetId::intern("o_keep")));
        assert!(state.is_expanded(WidgetId::intern("o_gone")));
    }

    #[test]
    fn icons_by_type() {
        let root = parse_document(
            r#"{"id": "o_sc", "type": "Scaffold", "body": {"id": "o_body", "type": "Column",
                "children": [{"id": "o_frob", "type": "Frobnicator"}]}}"#,
        )
        .unwrap();
        let icons: Vec<OutlineIcon> =
            render_outline(&root, 0, None, &OutlineState::default(), &OutlineConfig::default())
                .iter()
                .map(|l| l.icon)
                .collect();
        assert_eq!(
            icons,
            vec![OutlineIcon::Layout, OutlineIcon::ColumnsRotated, OutlineIcon::Warning]
        );
    }
}
